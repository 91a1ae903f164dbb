#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `wktlite-core`.

pub mod codec;
pub mod error;
pub mod function_catalog;
pub mod functions;
pub mod value;

pub use error::{Result, WktLiteError};
pub use value::SqlValue;
