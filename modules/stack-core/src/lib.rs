#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unnecessary_wraps)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![no_std]

//! Fixed-capacity LIFO containers for `no_std` targets.
//!
//! [`BoundedStack`](collections::stack::BoundedStack) stores typed values and
//! [`ByteStack`](collections::stack::ByteStack) stores opaque byte records whose width is chosen at
//! runtime. Both reserve their storage once, never grow, and report every failure through
//! [`StackError`](collections::stack::StackError). Neither locks internally; share them across
//! threads with [`SyncStack`](collections::stack::SyncStack).

extern crate alloc;

pub mod collections;
pub mod sync;
