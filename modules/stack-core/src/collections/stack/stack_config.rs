//! Construction parameters for bounded stacks.

use super::StackError;

#[cfg(test)]
mod tests;

/// Capacity used by [`StackConfig::default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// Configuration describing how a bounded stack is initialized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackConfig {
  capacity:     usize,
  element_size: Option<usize>,
}

impl StackConfig {
  /// Creates a configuration with the given capacity and no explicit element size.
  #[must_use]
  pub const fn new(capacity: usize) -> Self {
    Self { capacity, element_size: None }
  }

  /// Sets the capacity.
  #[must_use]
  pub const fn with_capacity(mut self, capacity: usize) -> Self {
    self.capacity = capacity;
    self
  }

  /// Sets the element size in bytes.
  ///
  /// Required by byte-record stacks. Typed stacks check it against the size of their element type.
  #[must_use]
  pub const fn with_element_size(mut self, element_size: usize) -> Self {
    self.element_size = Some(element_size);
    self
  }

  /// Returns the configured capacity.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the configured element size, if any.
  #[must_use]
  pub const fn element_size(&self) -> Option<usize> {
    self.element_size
  }

  /// Checks the configuration without allocating.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidSize`] when the capacity is zero or an element size of zero was
  /// configured.
  pub const fn validate(&self) -> Result<(), StackError> {
    if self.capacity == 0 {
      return Err(StackError::InvalidSize);
    }
    if let Some(0) = self.element_size {
      return Err(StackError::InvalidSize);
    }
    Ok(())
  }
}

impl Default for StackConfig {
  fn default() -> Self {
    Self::new(DEFAULT_CAPACITY)
  }
}
