use super::{DEFAULT_CAPACITY, StackConfig};
use crate::collections::stack::StackError;

#[test]
fn default_uses_default_capacity() {
  let config = StackConfig::default();
  assert_eq!(config.capacity(), DEFAULT_CAPACITY);
  assert_eq!(config.element_size(), None);
  assert!(config.validate().is_ok());
}

#[test]
fn builder_overrides_fields() {
  let config = StackConfig::default().with_capacity(4).with_element_size(8);
  assert_eq!(config.capacity(), 4);
  assert_eq!(config.element_size(), Some(8));
}

#[test]
fn zero_capacity_is_rejected() {
  assert_eq!(StackConfig::new(0).validate(), Err(StackError::InvalidSize));
}

#[test]
fn zero_element_size_is_rejected() {
  assert_eq!(StackConfig::new(3).with_element_size(0).validate(), Err(StackError::InvalidSize));
}
