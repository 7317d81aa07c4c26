//! Synchronisation primitives used by the locking stack wrapper.

mod arc_shared;
/// Synchronous mutex abstractions shared across runtimes.
pub mod sync_mutex_like;

pub use arc_shared::ArcShared;
pub use sync_mutex_like::{SpinSyncMutex, SyncMutexLike, SyncMutexLikeGuard};
