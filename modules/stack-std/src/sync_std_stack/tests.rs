use super::{make_std_bounded_stack, make_std_byte_stack};
use bounded_stack_core_rs::collections::stack::StackError;

#[test]
fn make_std_bounded_stack_initializes_backend() {
  let stack = make_std_bounded_stack::<u32>(2).unwrap();
  assert_eq!(stack.capacity(), 2);
  assert_eq!(stack.element_size(), 4);

  stack.push(1).unwrap();
  stack.push(2).unwrap();
  assert_eq!(stack.push(3), Err(StackError::Full));
  assert_eq!(stack.pop(), Ok(2));
}

#[test]
fn make_std_bounded_stack_rejects_zero_capacity() {
  assert!(matches!(make_std_bounded_stack::<u32>(0), Err(StackError::InvalidSize)));
}

#[test]
fn make_std_byte_stack_initializes_backend() {
  let stack = make_std_byte_stack(1, 3).unwrap();
  stack.push(&[1, 2, 3]).unwrap();

  let mut out = [0_u8; 3];
  stack.pop(&mut out).unwrap();
  assert_eq!(out, [1, 2, 3]);
  assert!(matches!(make_std_byte_stack(1, 0), Err(StackError::InvalidSize)));
}
