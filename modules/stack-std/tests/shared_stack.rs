use std::{collections::BTreeSet, thread};

use bounded_stack_core_rs::collections::stack::{StackError, StackState};
use bounded_stack_std_rs::{make_std_bounded_stack, make_std_byte_stack};
use proptest::prelude::*;

#[test]
fn producers_and_consumers_see_every_value_once() {
  const PRODUCERS: usize = 4;
  const PER_PRODUCER: usize = 100;

  let stack = make_std_bounded_stack::<usize>(8).unwrap();

  let producers: Vec<_> = (0..PRODUCERS)
    .map(|producer| {
      let stack = stack.clone();
      thread::spawn(move || {
        for i in 0..PER_PRODUCER {
          let value = producer * PER_PRODUCER + i;
          while stack.push(value) == Err(StackError::Full) {
            thread::yield_now();
          }
        }
      })
    })
    .collect();

  let consumer = {
    let stack = stack.clone();
    thread::spawn(move || {
      let mut seen = BTreeSet::new();
      while seen.len() < PRODUCERS * PER_PRODUCER {
        match stack.pop() {
          | Ok(value) => assert!(seen.insert(value)),
          | Err(StackError::Empty) => thread::yield_now(),
          | Err(other) => panic!("unexpected error: {other}"),
        }
      }
      seen
    })
  };

  for producer in producers {
    producer.join().unwrap();
  }
  let seen = consumer.join().unwrap();
  assert_eq!(seen.len(), PRODUCERS * PER_PRODUCER);
  assert!(stack.is_empty());
}

#[test]
fn destroy_through_one_handle_invalidates_others() {
  let stack = make_std_byte_stack(2, 4).unwrap();
  let other = stack.clone();
  stack.push(&7_u32.to_be_bytes()).unwrap();

  thread::spawn(move || other.destroy().unwrap()).join().unwrap();

  let mut out = [0_u8; 4];
  assert_eq!(stack.state(), StackState::Destroyed);
  assert_eq!(stack.pop(&mut out), Err(StackError::NullHandle));
  assert_eq!(stack.len(), 0);
  assert!(stack.is_empty());
}

proptest! {
  #[test]
  fn shared_stack_preserves_lifo(values in prop::collection::vec(any::<u32>(), 1..32)) {
    let stack = make_std_bounded_stack::<u32>(values.len()).unwrap();
    for value in &values {
      stack.push(*value).unwrap();
    }
    prop_assert!(stack.is_full());
    for expected in values.iter().rev() {
      prop_assert_eq!(stack.peek(), Ok(*expected));
      prop_assert_eq!(stack.pop(), Ok(*expected));
    }
    prop_assert!(stack.is_empty());
  }
}
