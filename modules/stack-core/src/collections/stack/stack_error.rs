use core::fmt;


/// Errors reported by bounded stack operations.
///
/// Every variant is returned synchronously; a failed call leaves the stack exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StackError {
  /// The stack is not initialized (never initialized, or already destroyed).
  NullHandle,
  /// A caller-supplied buffer does not match the element size.
  InvalidArgument,
  /// Capacity or element size is zero, or does not match the element type.
  InvalidSize,
  /// The stack holds `capacity` elements and rejects further pushes.
  Full,
  /// The stack contains no elements.
  Empty,
  /// Reserving storage for the elements failed.
  AllocationFailure,
  /// `initialize` was called on a stack that is already initialized.
  AlreadyInitialized,
}

impl fmt::Display for StackError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      | StackError::NullHandle => write!(f, "stack is not initialized"),
      | StackError::InvalidArgument => write!(f, "buffer length does not match the element size"),
      | StackError::InvalidSize => write!(f, "capacity and element size must be non-zero"),
      | StackError::Full => write!(f, "stack is full"),
      | StackError::Empty => write!(f, "stack is empty"),
      | StackError::AllocationFailure => write!(f, "failed to allocate stack storage"),
      | StackError::AlreadyInitialized => write!(f, "stack is already initialized"),
    }
  }
}

impl core::error::Error for StackError {}
