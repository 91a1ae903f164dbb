#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `wktlite-sqlite`.

mod ffi;
mod sqlite_compat;
pub use ffi::{install, register_functions};
