use super::{StackError, StackState};

/// Lifecycle and observer operations shared by every bounded stack container.
///
/// Element operations differ between containers (typed values versus byte records) and stay
/// inherent; this trait covers the part a locking wrapper can forward without knowing the payload.
pub trait StackBackend {
  /// Returns the lifecycle state.
  fn state(&self) -> StackState;

  /// Returns the number of live elements, or 0 when not initialized.
  fn len(&self) -> usize;

  /// Returns the fixed capacity, or 0 when not initialized.
  fn capacity(&self) -> usize;

  /// Returns the element width in bytes, or 0 when not initialized.
  fn element_size(&self) -> usize;

  /// Indicates whether the stack holds no elements. A stack that is not initialized is empty.
  fn is_empty(&self) -> bool {
    !self.state().is_initialized() || self.len() == 0
  }

  /// Indicates whether the stack rejects pushes. A stack that is not initialized is full.
  fn is_full(&self) -> bool {
    !self.state().is_initialized() || self.len() >= self.capacity()
  }

  /// Drops every live element while keeping the reserved storage.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the stack is not initialized.
  fn clear(&mut self) -> Result<(), StackError>;

  /// Drops every live element, releases the storage and moves to [`StackState::Destroyed`].
  ///
  /// # Errors
  ///
  /// Implementations treat an uninitialized or destroyed stack as a successful no-op; the
  /// `Result` is kept so callers can treat every lifecycle call uniformly.
  fn destroy(&mut self) -> Result<(), StackError>;
}
