use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use bounded_stack_core_rs::sync::SyncMutexLike;
use tracing::warn;


const LOG_TARGET: &str = "bounded_stack::sync";

/// [`SyncMutexLike`] implementation backed by [`std::sync::Mutex`].
///
/// A poisoned lock is recovered instead of propagated: stack operations either apply completely or
/// not at all, so the protected value is consistent even after a panicking holder.
pub struct StdSyncMutex<T>(Mutex<T>);

impl<T> StdSyncMutex<T> {
  /// Creates a new mutex-protected value.
  #[must_use]
  pub const fn new(value: T) -> Self {
    Self(Mutex::new(value))
  }

  /// Consumes the wrapper and returns the underlying value.
  pub fn into_inner(self) -> T {
    self.0.into_inner().unwrap_or_else(PoisonError::into_inner)
  }

  /// Blocks the current thread until the lock is acquired.
  pub fn lock(&self) -> MutexGuard<'_, T> {
    self.0.lock().unwrap_or_else(|poisoned| {
      warn!(target: LOG_TARGET, "recovering poisoned stack mutex");
      poisoned.into_inner()
    })
  }

  /// Acquires the lock only if no other thread holds it.
  pub fn try_lock(&self) -> Option<MutexGuard<'_, T>> {
    match self.0.try_lock() {
      | Ok(guard) => Some(guard),
      | Err(TryLockError::WouldBlock) => None,
      | Err(TryLockError::Poisoned(poisoned)) => {
        warn!(target: LOG_TARGET, "recovering poisoned stack mutex");
        Some(poisoned.into_inner())
      },
    }
  }
}

impl<T> SyncMutexLike<T> for StdSyncMutex<T> {
  type Guard<'a>
    = MutexGuard<'a, T>
  where
    T: 'a;

  fn new(value: T) -> Self {
    StdSyncMutex::new(value)
  }

  fn into_inner(self) -> T {
    StdSyncMutex::into_inner(self)
  }

  fn lock(&self) -> Self::Guard<'_> {
    StdSyncMutex::lock(self)
  }

  fn try_lock(&self) -> Option<Self::Guard<'_>> {
    StdSyncMutex::try_lock(self)
  }
}
