use classic_collections::error::Error;
use classic_collections::list::List;

use crate::{EndOp, PositionOp};

/// Applies each operation to a list and a `Vec`, checking after every step that
/// they hold the same values and that out of range positions were rejected.
fn positions_match_vec(ops: &[PositionOp<i8>]) -> bool {
    let mut list = List::new();
    let mut model = Vec::new();

    for op in ops {
        let len = model.len();
        let ok = match *op {
            PositionOp::InsertAt(position, value) => {
                let position = position % (len + 2);
                let result = list.insert_at(position, value);
                if position <= len {
                    model.insert(position, value);
                    result.is_ok()
                } else {
                    result == Err(Error::InvalidPosition { position, len })
                }
            }
            PositionOp::RemoveAt(position) => {
                let position = position % (len + 2);
                let result = list.remove_at(position);
                if position < len {
                    result == Ok(model.remove(position))
                } else {
                    result == Err(Error::InvalidPosition { position, len })
                }
            }
        };

        let mut backward = list.backward();
        backward.reverse();
        if !ok || list.len() != model.len() || list.forward() != model || backward != model {
            return false;
        }
    }

    true
}

#[quickcheck]
fn positional_ops_match_vec(ops: Vec<PositionOp<i8>>) -> bool {
    positions_match_vec(&ops)
}

#[quickcheck]
fn end_ops_match_vec(ops: Vec<EndOp<i8>>) -> bool {
    let mut list = List::new();
    let mut model = Vec::new();

    ops.iter().all(|op| {
        let same = match *op {
            EndOp::PushFront(x) => {
                list.push_front(x);
                model.insert(0, x);
                true
            }
            EndOp::PushBack(x) => {
                list.push_back(x);
                model.push(x);
                true
            }
            EndOp::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                list.pop_front() == expected
            }
            EndOp::PopBack => list.pop_back() == model.pop(),
        };

        same && list.forward() == model
    })
}

#[quickcheck]
fn insert_then_remove_round_trips(xs: Vec<i8>, positions: Vec<usize>, value: i8) -> bool {
    let mut list: List<_> = xs.iter().copied().collect();
    let original = list.forward();

    positions.iter().all(|&position| {
        let position = position % (list.len() + 1);
        list.insert_at(position, value).is_ok()
            && list.get(position) == Some(&value)
            && list.remove_at(position) == Ok(value)
            && list.forward() == original
    })
}

#[quickcheck]
fn backward_reverses_forward(xs: Vec<i8>) -> bool {
    let list: List<_> = xs.iter().copied().collect();
    let mut backward = list.backward();
    backward.reverse();

    list.forward() == xs && backward == xs
}

#[quickcheck]
fn position_finds_first(xs: Vec<i8>, y: i8) -> bool {
    let list: List<_> = xs.iter().copied().collect();

    list.position(&y) == xs.iter().position(|x| *x == y)
}
