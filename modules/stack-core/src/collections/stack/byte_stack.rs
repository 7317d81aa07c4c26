use alloc::vec::Vec;

use tracing::{debug, trace, warn};

use super::{LOG_TARGET, StackBackend, StackConfig, StackError, StackState};


/// Fixed-capacity LIFO stack of opaque byte records whose width is chosen at runtime.
///
/// Records are stored back to back in a single buffer reserved at initialization. Push copies the
/// caller's bytes in, pop and peek copy them out into a caller-supplied buffer.
#[derive(Debug, Default)]
pub struct ByteStack {
  bytes:        Vec<u8>,
  len:          usize,
  capacity:     usize,
  element_size: usize,
  state:        StackState,
}

impl ByteStack {
  /// Creates an uninitialized handle without allocating.
  #[must_use]
  pub const fn new() -> Self {
    Self { bytes: Vec::new(), len: 0, capacity: 0, element_size: 0, state: StackState::Uninitialized }
  }

  /// Creates a stack and initializes it for `capacity` records of `element_size` bytes.
  ///
  /// # Errors
  ///
  /// See [`ByteStack::initialize`].
  pub fn with_capacity(capacity: usize, element_size: usize) -> Result<Self, StackError> {
    let mut stack = Self::new();
    stack.initialize(capacity, element_size)?;
    Ok(stack)
  }

  /// Creates a stack initialized from `config`, which must carry an element size.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidSize`] when the configuration is invalid or has no element size,
  /// and otherwise the errors of [`ByteStack::initialize`].
  pub fn from_config(config: &StackConfig) -> Result<Self, StackError> {
    config.validate()?;
    let element_size = config.element_size().ok_or(StackError::InvalidSize)?;
    Self::with_capacity(config.capacity(), element_size)
  }

  /// Reserves `capacity * element_size` bytes and moves the stack to [`StackState::Initialized`].
  ///
  /// # Errors
  ///
  /// - [`StackError::AlreadyInitialized`] when the stack is already initialized.
  /// - [`StackError::InvalidSize`] when either argument is zero.
  /// - [`StackError::AllocationFailure`] when the byte count overflows or cannot be reserved.
  pub fn initialize(&mut self, capacity: usize, element_size: usize) -> Result<(), StackError> {
    if self.state.is_initialized() {
      return Err(StackError::AlreadyInitialized);
    }
    if capacity == 0 || element_size == 0 {
      return Err(StackError::InvalidSize);
    }

    let mut bytes = Vec::new();
    let reserved = capacity.checked_mul(element_size).map(|total| bytes.try_reserve_exact(total));
    if !matches!(reserved, Some(Ok(()))) {
      warn!(target: LOG_TARGET, capacity, element_size, "failed to reserve stack storage");
      return Err(StackError::AllocationFailure);
    }

    self.bytes = bytes;
    self.len = 0;
    self.capacity = capacity;
    self.element_size = element_size;
    self.state = StackState::Initialized;
    debug!(target: LOG_TARGET, capacity, element_size, "byte stack initialized");
    Ok(())
  }

  /// Copies `record` on top of the stack.
  ///
  /// # Errors
  ///
  /// - [`StackError::NullHandle`] when the stack is not initialized.
  /// - [`StackError::InvalidArgument`] when `record.len()` differs from the element size.
  /// - [`StackError::Full`] when the stack already holds `capacity` records.
  pub fn push(&mut self, record: &[u8]) -> Result<(), StackError> {
    self.ensure_initialized()?;
    self.ensure_record_len(record.len())?;
    if self.len >= self.capacity {
      return Err(StackError::Full);
    }
    debug_assert!(self.bytes.len() + record.len() <= self.bytes.capacity());
    self.bytes.extend_from_slice(record);
    self.len += 1;
    trace!(target: LOG_TARGET, len = self.len, "pushed record");
    Ok(())
  }

  /// Copies the top record into `out` and removes it.
  ///
  /// `out` is left untouched on error.
  ///
  /// # Errors
  ///
  /// - [`StackError::NullHandle`] when the stack is not initialized.
  /// - [`StackError::InvalidArgument`] when `out.len()` differs from the element size.
  /// - [`StackError::Empty`] when the stack holds no records.
  pub fn pop(&mut self, out: &mut [u8]) -> Result<(), StackError> {
    let start = self.top_offset(out.len())?;
    out.copy_from_slice(&self.bytes[start..]);
    self.bytes.truncate(start);
    self.len -= 1;
    trace!(target: LOG_TARGET, len = self.len, "popped record");
    Ok(())
  }

  /// Copies the top record into `out` without removing it.
  ///
  /// # Errors
  ///
  /// Same as [`ByteStack::pop`].
  pub fn peek(&self, out: &mut [u8]) -> Result<(), StackError> {
    let start = self.top_offset(out.len())?;
    out.copy_from_slice(&self.bytes[start..]);
    Ok(())
  }

  /// Indicates whether the stack holds no records. A stack that is not initialized is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    !self.state.is_initialized() || self.len == 0
  }

  /// Indicates whether the stack rejects pushes. A stack that is not initialized is full.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    !self.state.is_initialized() || self.len >= self.capacity
  }

  /// Returns the number of live records.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.len
  }

  /// Returns the fixed capacity in records, or 0 when not initialized.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns the record width in bytes, or 0 when not initialized.
  #[must_use]
  pub const fn element_size(&self) -> usize {
    self.element_size
  }

  /// Returns the lifecycle state.
  #[must_use]
  pub const fn state(&self) -> StackState {
    self.state
  }

  /// Returns `true` while record operations are valid.
  #[must_use]
  pub const fn is_initialized(&self) -> bool {
    self.state.is_initialized()
  }

  /// Discards every record while keeping the reserved storage.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the stack is not initialized.
  pub fn clear(&mut self) -> Result<(), StackError> {
    self.ensure_initialized()?;
    let dropped = self.len;
    self.bytes.clear();
    self.len = 0;
    debug!(target: LOG_TARGET, dropped, "byte stack cleared");
    Ok(())
  }

  /// Discards every record, releases the storage and moves to [`StackState::Destroyed`].
  ///
  /// Calling it on an uninitialized or destroyed stack does nothing.
  ///
  /// # Errors
  ///
  /// Never fails; the `Result` mirrors the other lifecycle operations.
  pub fn destroy(&mut self) -> Result<(), StackError> {
    if !self.state.is_initialized() {
      return Ok(());
    }
    let dropped = self.len;
    self.bytes = Vec::new();
    self.len = 0;
    self.capacity = 0;
    self.element_size = 0;
    self.state = StackState::Destroyed;
    debug!(target: LOG_TARGET, dropped, "byte stack destroyed");
    Ok(())
  }

  const fn ensure_initialized(&self) -> Result<(), StackError> {
    if self.state.is_initialized() { Ok(()) } else { Err(StackError::NullHandle) }
  }

  const fn ensure_record_len(&self, len: usize) -> Result<(), StackError> {
    if len == self.element_size { Ok(()) } else { Err(StackError::InvalidArgument) }
  }

  // Byte offset of the top record, after validating state, buffer width and occupancy.
  const fn top_offset(&self, out_len: usize) -> Result<usize, StackError> {
    if !self.state.is_initialized() {
      return Err(StackError::NullHandle);
    }
    if out_len != self.element_size {
      return Err(StackError::InvalidArgument);
    }
    if self.len == 0 {
      return Err(StackError::Empty);
    }
    Ok((self.len - 1) * self.element_size)
  }
}

impl StackBackend for ByteStack {
  fn state(&self) -> StackState {
    ByteStack::state(self)
  }

  fn len(&self) -> usize {
    ByteStack::len(self)
  }

  fn capacity(&self) -> usize {
    ByteStack::capacity(self)
  }

  fn element_size(&self) -> usize {
    ByteStack::element_size(self)
  }

  fn clear(&mut self) -> Result<(), StackError> {
    ByteStack::clear(self)
  }

  fn destroy(&mut self) -> Result<(), StackError> {
    ByteStack::destroy(self)
  }
}
