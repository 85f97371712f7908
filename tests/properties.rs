use LinkedQueueMini::core::queue::Queue;
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Action {
    PushFront(String),
    PushBack(String),
    PopFront,
}

fn action() -> impl Strategy<Value = Action> {
    prop_oneof![
        "[a-c]{0,3}".prop_map(Action::PushFront),
        "[a-c]{0,3}".prop_map(Action::PushBack),
        Just(Action::PopFront),
    ]
}

fn values(queue: &Queue) -> Vec<String> {
    queue.iter().map(str::to_string).collect()
}

proptest! {
    #[test]
    fn size_is_pushes_minus_pops(actions in prop::collection::vec(action(), 0..64)) {
        let mut queue = Queue::new();
        let mut model = std::collections::VecDeque::new();
        let (mut pushes, mut pops) = (0usize, 0usize);

        for action in actions {
            match action {
                Action::PushFront(v) => {
                    queue.push_front(&v).unwrap();
                    model.push_front(v);
                    pushes += 1;
                }
                Action::PushBack(v) => {
                    queue.push_back(&v).unwrap();
                    model.push_back(v);
                    pushes += 1;
                }
                Action::PopFront => {
                    let popped = queue.pop_front();
                    prop_assert_eq!(&popped, &model.pop_front());
                    if popped.is_some() {
                        pops += 1;
                    }
                }
            }
            prop_assert_eq!(queue.size(), pushes - pops);
            prop_assert!(queue.is_well_formed());
        }
        prop_assert_eq!(values(&queue), Vec::from(model));
    }

    #[test]
    fn reverse_is_an_involution(input in prop::collection::vec(".{0,4}", 0..32)) {
        let mut queue = Queue::try_from_iter(&input).unwrap();
        queue.reverse();
        let mut expected = input.clone();
        expected.reverse();
        prop_assert_eq!(values(&queue), expected);
        prop_assert!(queue.is_well_formed());

        queue.reverse();
        prop_assert_eq!(values(&queue), input);
        prop_assert!(queue.is_well_formed());
    }

    #[test]
    fn sort_orders_and_is_idempotent(input in prop::collection::vec("[a-d]{0,3}", 0..64)) {
        let mut queue = Queue::try_from_iter(&input).unwrap();
        queue.sort();
        let once = values(&queue);

        // Same multiset, non-decreasing.
        let mut expected = input.clone();
        expected.sort();
        prop_assert_eq!(&once, &expected);
        prop_assert!(once.windows(2).all(|w| w[0] <= w[1]));
        prop_assert!(queue.is_well_formed());
        prop_assert_eq!(queue.peek_back(), expected.last().map(String::as_str));

        queue.sort();
        prop_assert_eq!(values(&queue), once);
    }

    #[test]
    fn truncated_pop_is_terminated(value in "[a-z]{0,16}", capacity in 1usize..20) {
        let mut queue = Queue::new();
        queue.push_back(&value).unwrap();
        let mut buf = vec![0xffu8; capacity];
        prop_assert!(queue.pop_front_into(Some(&mut buf)));

        let n = value.len().min(capacity - 1);
        prop_assert_eq!(&buf[..n], &value.as_bytes()[..n]);
        prop_assert_eq!(buf[n], 0);
    }
}
