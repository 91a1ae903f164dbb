//! Geometry constructors.

use geo::{Geometry, Point};

use crate::error::{Result, WktLiteError};

/// Build a Point from finite coordinates.
///
/// # Example
///
/// ```
/// use wktlite_core::functions::constructors::point;
/// use wktlite_core::functions::accessors::{coordinate_x, coordinate_y};
///
/// let p = point(1.5, 2.5).unwrap();
/// assert_eq!(coordinate_x(&p), Some(1.5));
/// assert_eq!(coordinate_y(&p), Some(2.5));
/// assert!(point(f64::NAN, 0.0).is_err());
/// ```
pub fn point(x: f64, y: f64) -> Result<Geometry<f64>> {
    if !x.is_finite() || !y.is_finite() {
        return Err(WktLiteError::InvalidArgument(format!(
            "point coordinates must be finite, got ({x}, {y})"
        )));
    }
    Ok(Geometry::Point(Point::new(x, y)))
}
