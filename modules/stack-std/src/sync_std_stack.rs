//! Stack aliases and constructors backed by [`StdSyncMutex`].

use bounded_stack_core_rs::collections::stack::{BoundedStack, ByteStack, StackError, SyncStack};

use crate::StdSyncMutex;

#[cfg(test)]
mod tests;

/// Typed stack shared through [`StdSyncMutex`].
pub type SyncStdBoundedStack<T> = SyncStack<BoundedStack<T>, StdSyncMutex<BoundedStack<T>>>;

/// Byte-record stack shared through [`StdSyncMutex`].
pub type SyncStdByteStack = SyncStack<ByteStack, StdSyncMutex<ByteStack>>;

/// Constructs a [`SyncStdBoundedStack`] with the specified capacity.
///
/// # Errors
///
/// Returns the errors of [`BoundedStack::initialize`].
pub fn make_std_bounded_stack<T>(capacity: usize) -> Result<SyncStdBoundedStack<T>, StackError> {
  SyncStdBoundedStack::with_capacity(capacity)
}

/// Constructs a [`SyncStdByteStack`] for `capacity` records of `element_size` bytes.
///
/// # Errors
///
/// Returns the errors of [`ByteStack::initialize`].
pub fn make_std_byte_stack(capacity: usize, element_size: usize) -> Result<SyncStdByteStack, StackError> {
  SyncStdByteStack::with_capacity(capacity, element_size)
}
