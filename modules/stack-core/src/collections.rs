//! Collections provided by this crate.

pub mod stack;
