#[macro_use]
extern crate quickcheck_macros;

mod deque;
mod list;
mod tree;

use quickcheck::{Arbitrary, Gen};

/// An enum for the various kinds of "things" to do to the two ends of a
/// list or deque in a quicktest.
#[derive(Copy, Clone, Debug)]
pub(crate) enum EndOp<T> {
    /// Push the T onto the front
    PushFront(T),
    /// Push the T onto the back
    PushBack(T),
    /// Pop from the front
    PopFront,
    /// Pop from the back
    PopBack,
}

impl<T> Arbitrary for EndOp<T>
where
    T: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1, 2, 3]).unwrap() {
            0 => EndOp::PushFront(T::arbitrary(g)),
            1 => EndOp::PushBack(T::arbitrary(g)),
            2 => EndOp::PopFront,
            3 => EndOp::PopBack,
            _ => unreachable!(),
        }
    }
}

/// Positional operations on a list. The position is reduced modulo `len + 2`
/// when the operation is applied so that some operations land out of range.
#[derive(Copy, Clone, Debug)]
pub(crate) enum PositionOp<T> {
    /// Insert the T at the position
    InsertAt(usize, T),
    /// Remove whatever is at the position
    RemoveAt(usize),
}

impl<T> Arbitrary for PositionOp<T>
where
    T: Arbitrary,
{
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 1]).unwrap() {
            0 => PositionOp::InsertAt(usize::arbitrary(g), T::arbitrary(g)),
            1 => PositionOp::RemoveAt(usize::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}
