use crate::sync::sync_mutex_like::SyncMutexLike;

#[cfg(test)]
mod tests;

/// [`SyncMutexLike`] implementation over [`spin::Mutex`], the default lock of
/// [`SyncStack`](crate::collections::stack::SyncStack).
///
/// Needs no operating system support. Callers that must never spin, such as interrupt handlers,
/// go through [`SpinSyncMutex::try_lock`].
pub struct SpinSyncMutex<T>(spin::Mutex<T>);

impl<T> SpinSyncMutex<T> {
  /// Creates a new spinlock-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(spin::Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner()
  }

  /// Locks the mutex, spinning until it becomes available.
  pub fn lock(&self) -> spin::MutexGuard<'_, T> {
    self.0.lock()
  }

  /// Locks the mutex only if it is free right now.
  pub fn try_lock(&self) -> Option<spin::MutexGuard<'_, T>> {
    self.0.try_lock()
  }

  /// Indicates whether a holder currently owns the lock.
  ///
  /// The answer may be stale by the time the caller acts on it.
  #[must_use]
  pub fn is_locked(&self) -> bool {
    self.0.is_locked()
  }
}

impl<T> SyncMutexLike<T> for SpinSyncMutex<T> {
  type Guard<'a>
    = spin::MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    SpinSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    SpinSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    SpinSyncMutex::lock(self)
  }

  fn try_lock(&self) -> Option<Self::Guard<'_>> {
    SpinSyncMutex::try_lock(self)
  }
}
