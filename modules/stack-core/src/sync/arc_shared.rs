#[cfg(not(feature = "force-portable-arc"))]
use alloc::sync::Arc;
use core::ops::Deref;

#[cfg(feature = "force-portable-arc")]
use portable_atomic_util::Arc;

#[cfg(test)]
mod tests;

/// Shared handle backed by [`alloc::sync::Arc`] by default.
///
/// When the `force-portable-arc` feature is enabled it switches to [`portable_atomic_util::Arc`]
/// so that targets without native atomic pointer support can still share a stack.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }

  /// Returns the inner value when this is the only handle, otherwise hands the handle back.
  ///
  /// # Errors
  ///
  /// Returns `Err(self)` when other clones of the handle are still alive.
  pub fn try_unwrap(self) -> Result<T, Self> {
    Arc::try_unwrap(self.0).map_err(Self)
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(Arc::clone(&self.0))
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}
