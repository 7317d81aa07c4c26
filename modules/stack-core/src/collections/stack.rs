//! Fixed-capacity LIFO containers and their locking wrapper.

mod bounded_stack;
mod byte_stack;
mod stack_backend;
mod stack_config;
mod stack_error;
mod stack_state;
mod sync_stack;

pub use bounded_stack::BoundedStack;
pub use byte_stack::ByteStack;
pub use stack_backend::StackBackend;
pub use stack_config::{DEFAULT_CAPACITY, StackConfig};
pub use stack_error::StackError;
pub use stack_state::StackState;
pub use sync_stack::SyncStack;

use crate::sync::SpinSyncMutex;

/// `tracing` target used by every event the stack containers emit.
pub const LOG_TARGET: &str = "bounded_stack::stack";

/// Typed stack shared through a spin lock.
pub type SharedBoundedStack<T> = SyncStack<BoundedStack<T>, SpinSyncMutex<BoundedStack<T>>>;

/// Byte-record stack shared through a spin lock.
pub type SharedByteStack = SyncStack<ByteStack, SpinSyncMutex<ByteStack>>;
