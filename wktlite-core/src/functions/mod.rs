//! Geometry operations over `geo::Geometry<f64>`.
//!
//! "Not defined for this kind" is `None`; only bad input is an `Err`.

pub mod accessors;
pub mod constructors;
pub mod emptiness;
pub mod measurement;
pub mod operations;
