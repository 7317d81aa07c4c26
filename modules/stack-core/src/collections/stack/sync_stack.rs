use core::marker::PhantomData;

use super::{BoundedStack, ByteStack, StackBackend, StackError, StackState};
use crate::sync::{ArcShared, SpinSyncMutex, SyncMutexLike};


/// Cloneable stack handle that serialises every call through a mutex.
///
/// The containers themselves carry no locking. `SyncStack` takes the lock before and releases it
/// after each operation, read-only queries included, so one backend can be shared across threads.
/// Use [`SyncStack::with_mut`] when several operations must happen under a single lock.
pub struct SyncStack<B, M = SpinSyncMutex<B>>
where
  M: SyncMutexLike<B>, {
  inner: ArcShared<M>,
  _pd:   PhantomData<B>,
}

impl<B, M> SyncStack<B, M>
where
  B: StackBackend,
  M: SyncMutexLike<B>,
{
  /// Wraps `backend` in a new mutex.
  #[must_use]
  pub fn new(backend: B) -> Self {
    Self::from_shared(ArcShared::new(M::new(backend)))
  }

  /// Creates a stack from an existing shared mutex.
  #[must_use]
  pub const fn from_shared(shared: ArcShared<M>) -> Self {
    Self { inner: shared, _pd: PhantomData }
  }

  /// Provides access to the underlying shared mutex.
  #[must_use]
  pub const fn shared(&self) -> &ArcShared<M> {
    &self.inner
  }

  /// Returns the backend when this is the last handle.
  ///
  /// # Errors
  ///
  /// Returns `Err(self)` while other clones are alive.
  pub fn into_inner(self) -> Result<B, Self> {
    match self.inner.try_unwrap() {
      | Ok(mutex) => Ok(mutex.into_inner()),
      | Err(shared) => Err(Self::from_shared(shared)),
    }
  }

  /// Runs `f` with exclusive access to the backend.
  pub fn with_mut<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
    let mut guard = <M as SyncMutexLike<B>>::lock(&*self.inner);
    f(&mut *guard)
  }

  /// Runs `f` with shared access to the backend while holding the lock.
  pub fn with_ref<R>(&self, f: impl FnOnce(&B) -> R) -> R {
    let guard = <M as SyncMutexLike<B>>::lock(&*self.inner);
    f(&*guard)
  }

  /// Runs `f` with exclusive access only if the lock is free; returns `None` otherwise.
  pub fn try_with_mut<R>(&self, f: impl FnOnce(&mut B) -> R) -> Option<R> {
    let mut guard = <M as SyncMutexLike<B>>::try_lock(&*self.inner)?;
    Some(f(&mut *guard))
  }

  /// Returns the lifecycle state.
  #[must_use]
  pub fn state(&self) -> StackState {
    self.with_ref(B::state)
  }

  /// Returns the number of live elements.
  #[must_use]
  pub fn len(&self) -> usize {
    self.with_ref(B::len)
  }

  /// Returns the fixed capacity.
  #[must_use]
  pub fn capacity(&self) -> usize {
    self.with_ref(B::capacity)
  }

  /// Returns the element width in bytes.
  #[must_use]
  pub fn element_size(&self) -> usize {
    self.with_ref(B::element_size)
  }

  /// Indicates whether the stack is empty.
  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.with_ref(B::is_empty)
  }

  /// Indicates whether the stack is full.
  #[must_use]
  pub fn is_full(&self) -> bool {
    self.with_ref(B::is_full)
  }

  /// Drops every element while keeping the storage.
  ///
  /// # Errors
  ///
  /// Returns [`StackError::NullHandle`] when the backend is not initialized.
  pub fn clear(&self) -> Result<(), StackError> {
    self.with_mut(B::clear)
  }

  /// Destroys the backend for every handle sharing it.
  ///
  /// # Errors
  ///
  /// Propagates the backend's result; the bundled containers never fail here.
  pub fn destroy(&self) -> Result<(), StackError> {
    self.with_mut(B::destroy)
  }
}

impl<T, M> SyncStack<BoundedStack<T>, M>
where
  M: SyncMutexLike<BoundedStack<T>>,
{
  /// Creates a shared typed stack initialized with `capacity`.
  ///
  /// # Errors
  ///
  /// See [`BoundedStack::initialize`].
  pub fn with_capacity(capacity: usize) -> Result<Self, StackError> {
    BoundedStack::with_capacity(capacity).map(Self::new)
  }

  /// Pushes an item onto the stack.
  ///
  /// # Errors
  ///
  /// See [`BoundedStack::push`].
  pub fn push(&self, item: T) -> Result<(), StackError> {
    self.with_mut(|backend| backend.push(item))
  }

  /// Pops the top item from the stack.
  ///
  /// # Errors
  ///
  /// See [`BoundedStack::pop`].
  pub fn pop(&self) -> Result<T, StackError> {
    self.with_mut(BoundedStack::pop)
  }

  /// Returns a copy of the top item without removing it.
  ///
  /// # Errors
  ///
  /// See [`BoundedStack::peek`].
  pub fn peek(&self) -> Result<T, StackError>
  where
    T: Clone, {
    self.with_ref(BoundedStack::peek)
  }

  /// Pushes without waiting for the lock.
  ///
  /// Returns `None`, with `item` dropped, when another handle holds the lock.
  pub fn try_push(&self, item: T) -> Option<Result<(), StackError>> {
    self.try_with_mut(|backend| backend.push(item))
  }

  /// Pops without waiting for the lock; returns `None` when another handle holds it.
  pub fn try_pop(&self) -> Option<Result<T, StackError>> {
    self.try_with_mut(BoundedStack::pop)
  }
}

impl<M> SyncStack<ByteStack, M>
where
  M: SyncMutexLike<ByteStack>,
{
  /// Creates a shared byte-record stack for `capacity` records of `element_size` bytes.
  ///
  /// # Errors
  ///
  /// See [`ByteStack::initialize`].
  pub fn with_capacity(capacity: usize, element_size: usize) -> Result<Self, StackError> {
    ByteStack::with_capacity(capacity, element_size).map(Self::new)
  }

  /// Copies `record` onto the stack.
  ///
  /// # Errors
  ///
  /// See [`ByteStack::push`].
  pub fn push(&self, record: &[u8]) -> Result<(), StackError> {
    self.with_mut(|backend| backend.push(record))
  }

  /// Copies the top record into `out` and removes it.
  ///
  /// # Errors
  ///
  /// See [`ByteStack::pop`].
  pub fn pop(&self, out: &mut [u8]) -> Result<(), StackError> {
    self.with_mut(|backend| backend.pop(out))
  }

  /// Copies the top record into `out`.
  ///
  /// # Errors
  ///
  /// See [`ByteStack::peek`].
  pub fn peek(&self, out: &mut [u8]) -> Result<(), StackError> {
    self.with_ref(|backend| backend.peek(out))
  }
}

impl<B, M> Clone for SyncStack<B, M>
where
  M: SyncMutexLike<B>,
{
  fn clone(&self) -> Self {
    Self { inner: self.inner.clone(), _pd: PhantomData }
  }
}
