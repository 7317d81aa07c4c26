use alloc::vec::Vec;
use core::mem::size_of;

use tracing::{debug, trace, warn};

use super::{LOG_TARGET, StackBackend, StackConfig, StackError, StackState};


/// Fixed-capacity LIFO stack of `T` values.
///
/// Storage for exactly `capacity` elements is reserved once by [`BoundedStack::initialize`]; no
/// operation allocates afterwards. The handle starts [`StackState::Uninitialized`] and element
/// operations fail with [`StackError::NullHandle`] until it is initialized, and again after
/// [`BoundedStack::destroy`].
#[derive(Debug)]
pub struct BoundedStack<T> {
  items:        Vec<T>,
  capacity:     usize,
  element_size: usize,
  state:        StackState,
}

impl<T> BoundedStack<T> {
  /// Creates an uninitialized handle without allocating.
  #[must_use]
  pub const fn new() -> Self {
    Self { items: Vec::new(), capacity: 0, element_size: 0, state: StackState::Uninitialized }
  }

  /// Creates a stack and initializes it with the given capacity.
  ///
  /// # Errors
  ///
  /// See [`BoundedStack::initialize`].
  pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
    let mut stack = Self::new();
    stack.initialize(capacity)?;
    Ok(stack)
  }

  /// Creates a stack initialized from `config`.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::InvalidSize`] when the configuration is invalid or its element size does
  /// not match `size_of::<T>()`, and otherwise the errors of [`BoundedStack::initialize`].
  pub fn from_config(config: &StackConfig) -> Result<Self, StackError> {
    config.validate()?;
    if let Some(element_size) = config.element_size()
      && element_size != size_of::<T>()
    {
      return Err(StackError::InvalidSize);
    }
    Self::with_capacity(config.capacity())
  }

  /// Reserves storage for `capacity` elements and moves the stack to [`StackState::Initialized`].
  ///
  /// A destroyed stack may be initialized again.
  ///
  /// # Errors
  ///
  /// - [`StackError::AlreadyInitialized`] when the stack is already initialized.
  /// - [`StackError::InvalidSize`] when `capacity` is zero or `T` is zero-sized.
  /// - [`StackError::AllocationFailure`] when the storage cannot be reserved.
  pub fn initialize(&mut self, capacity: usize) -> Result<(), StackError> {
    if self.state.is_initialized() {
      return Err(StackError::AlreadyInitialized);
    }
    let element_size = size_of::<T>();
    if capacity == 0 || element_size == 0 {
      return Err(StackError::InvalidSize);
    }

    let mut items = Vec::new();
    if items.try_reserve_exact(capacity).is_err() {
      warn!(target: LOG_TARGET, capacity, element_size, "failed to reserve stack storage");
      return Err(StackError::AllocationFailure);
    }

    self.items = items;
    self.capacity = capacity;
    self.element_size = element_size;
    self.state = StackState::Initialized;
    debug!(target: LOG_TARGET, capacity, element_size, "stack initialized");
    Ok(())
  }

  /// Pushes `value` on top of the stack.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the stack is not initialized and [`StackError::Full`]
  /// when it already holds `capacity` elements. The stack is unchanged on error.
  pub fn push(&mut self, value: T) -> Result<(), StackError> {
    self.ensure_initialized()?;
    if self.items.len() >= self.capacity {
      return Err(StackError::Full);
    }
    debug_assert!(self.items.len() < self.items.capacity());
    self.items.push(value);
    trace!(target: LOG_TARGET, len = self.items.len(), "pushed element");
    Ok(())
  }

  /// Removes the top element and hands it to the caller.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the stack is not initialized and [`StackError::Empty`]
  /// when it holds no elements.
  pub fn pop(&mut self) -> Result<T, StackError> {
    self.ensure_initialized()?;
    let value = self.items.pop().ok_or(StackError::Empty)?;
    trace!(target: LOG_TARGET, len = self.items.len(), "popped element");
    Ok(value)
  }

  /// Returns a copy of the top element without removing it.
  ///
  /// # Errors
  ///
  /// Same as [`BoundedStack::pop`].
  pub fn peek(&self) -> Result<T, StackError>
  where
    T: Clone, {
    self.ensure_initialized()?;
    self.items.last().cloned().ok_or(StackError::Empty)
  }

  /// Indicates whether the stack holds no elements. A stack that is not initialized is empty.
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    !self.state.is_initialized() || self.items.is_empty()
  }

  /// Indicates whether the stack rejects pushes. A stack that is not initialized is full.
  #[must_use]
  pub const fn is_full(&self) -> bool {
    !self.state.is_initialized() || self.items.len() >= self.capacity
  }

  /// Returns the number of live elements.
  #[must_use]
  pub const fn len(&self) -> usize {
    self.items.len()
  }

  /// Returns the fixed capacity, or 0 when not initialized.
  #[must_use]
  pub const fn capacity(&self) -> usize {
    self.capacity
  }

  /// Returns `size_of::<T>()` while initialized, otherwise 0.
  #[must_use]
  pub const fn element_size(&self) -> usize {
    self.element_size
  }

  /// Returns the lifecycle state.
  #[must_use]
  pub const fn state(&self) -> StackState {
    self.state
  }

  /// Returns `true` while element operations are valid.
  #[must_use]
  pub const fn is_initialized(&self) -> bool {
    self.state.is_initialized()
  }

  /// Drops every element. Capacity, element size and the reserved storage are kept.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the stack is not initialized.
  pub fn clear(&mut self) -> Result<(), StackError> {
    self.ensure_initialized()?;
    let dropped = self.items.len();
    self.items.clear();
    debug!(target: LOG_TARGET, dropped, "stack cleared");
    Ok(())
  }

  /// Drops every element, releases the storage and moves to [`StackState::Destroyed`].
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
    let dropped = self.items.len();
    self.items = Vec::new();
    self.capacity = 0;
    self.element_size = 0;
    self.state = StackState::Destroyed;
    debug!(target: LOG_TARGET, dropped, "stack destroyed");
    Ok(())
  }

  const fn ensure_initialized(&self) -> Result<(), StackError> {
    if self.state.is_initialized() { Ok(()) } else { Err(StackError::NullHandle) }
  }
}

impl<T> Default for BoundedStack<T> {
  fn default() -> Self {
    Self::new()
  }
}

impl<T> StackBackend for BoundedStack<T> {
  fn state(&self) -> StackState {
    BoundedStack::state(self)
  }

  fn len(&self) -> usize {
    BoundedStack::len(self)
  }

  fn capacity(&self) -> usize {
    BoundedStack::capacity(self)
  }

  fn element_size(&self) -> usize {
    BoundedStack::element_size(self)
  }

  fn clear(&mut self) -> Result<(), StackError> {
    BoundedStack::clear(self)
  }

  fn destroy(&mut self) -> Result<(), StackError> {
    BoundedStack::destroy(self)
  }
}
