//! Randomized and model-based checks of the circular queue against a
//! capacity-gated `VecDeque` reference.

use std::collections::VecDeque;

use circular_queue::CircularQueue;
use proptest::prelude::*;
use rand::Rng;

#[test]
fn long_interleave_stays_bounded_and_loses_nothing() {
    const CAPACITY: usize = 5;

    let mut queue = CircularQueue::new(CAPACITY).unwrap();
    let mut model: VecDeque<u32> = VecDeque::new();
    let mut rng = rand::thread_rng();
    let mut next_value = 0u32;

    for _ in 0..1000 {
        if rng.gen_bool(0.5) {
            match queue.enqueue(next_value) {
                Ok(()) => {
                    assert!(
                        model.len() < CAPACITY,
                        "enqueue accepted while the model says full"
                    );
                    model.push_back(next_value);
                }
                Err(rejected) => {
                    assert_eq!(rejected, next_value, "rejection must hand the item back");
                    assert_eq!(model.len(), CAPACITY, "rejected while not full");
                }
            }
            next_value += 1;
        } else {
            assert_eq!(queue.dequeue(), model.pop_front());
        }

        assert!(queue.len() <= CAPACITY);
        assert_eq!(queue.len(), model.len());
        assert_eq!(queue.peek(), model.front());
    }

    // Remaining items must drain in the order they were accepted.
    while let Some(expected) = model.pop_front() {
        assert_eq!(queue.dequeue(), Some(expected));
    }
    assert_eq!(queue.dequeue(), None);
}

#[derive(Debug, Clone)]
enum Op {
    Enqueue(u8),
    Dequeue,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![any::<u8>().prop_map(Op::Enqueue), Just(Op::Dequeue)]
}

proptest! {
    #[test]
    fn matches_vecdeque_model(
        capacity in 1usize..8,
        ops in proptest::collection::vec(op_strategy(), 0..200),
    ) {
        let mut queue = CircularQueue::new(capacity).unwrap();
        let mut model: VecDeque<u8> = VecDeque::new();

        for op in ops {
            match op {
                Op::Enqueue(value) => {
                    let accepted = queue.enqueue(value).is_ok();
                    prop_assert_eq!(accepted, model.len() < capacity);
                    if accepted {
                        model.push_back(value);
                    }
                }
                Op::Dequeue => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front());
                }
            }

            prop_assert_eq!(queue.len(), model.len());
            prop_assert_eq!(queue.peek(), model.front());
            prop_assert_eq!(queue.is_empty(), model.is_empty());
            prop_assert_eq!(queue.is_full(), model.len() == capacity);
            prop_assert!(queue.iter().eq(model.iter()));
        }
    }
}
