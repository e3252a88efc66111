use classic_collections::deque::Deque;

use crate::EndOp;

/// Runs the operations against a deque and a plain `Vec` and compares them
/// after every step.
#[quickcheck]
fn matches_vec_model(ops: Vec<EndOp<i8>>) -> bool {
    let mut deque = Deque::new();
    let mut model = Vec::new();

    ops.iter().all(|op| {
        let same = match *op {
            EndOp::PushFront(x) => {
                deque.push_front(x);
                model.insert(0, x);
                true
            }
            EndOp::PushBack(x) => {
                deque.push_back(x);
                model.push(x);
                true
            }
            EndOp::PopFront => {
                let expected = (!model.is_empty()).then(|| model.remove(0));
                deque.pop_front() == expected
            }
            EndOp::PopBack => deque.pop_back() == model.pop(),
        };

        same
            && deque.len() == model.len()
            && deque.front() == model.first()
            && deque.back() == model.last()
            && deque.to_vec() == model
    })
}

#[quickcheck]
fn clear_empties(xs: Vec<i8>) -> bool {
    let mut deque: Deque<_> = xs.into_iter().collect();
    deque.clear();

    deque.is_empty() && deque.pop_front().is_none() && deque.pop_back().is_none()
}
