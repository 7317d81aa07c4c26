#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::missing_errors_doc)]

//! Standard library extensions for the bounded stack.

mod std_sync_mutex;
mod sync_std_stack;

pub use std_sync_mutex::StdSyncMutex;
pub use sync_std_stack::{SyncStdBoundedStack, SyncStdByteStack, make_std_bounded_stack, make_std_byte_stack};
