//! Coordinate accessors. Defined for non-empty points only.

use geo::Geometry;

use crate::functions::emptiness::is_empty_point;

fn point_of(geom: &Geometry<f64>) -> Option<geo::Point<f64>> {
    match geom {
        Geometry::Point(p) if !is_empty_point(p) => Some(*p),
        _ => None,
    }
}

/// X coordinate of a Point.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
/// use wktlite_core::functions::accessors::coordinate_x;
///
/// assert_eq!(coordinate_x(&parse_wkt("POINT(3.5 7.2)").unwrap()), Some(3.5));
/// assert_eq!(coordinate_x(&parse_wkt("LINESTRING(0 0,1 1)").unwrap()), None);
/// ```
pub fn coordinate_x(geom: &Geometry<f64>) -> Option<f64> {
    point_of(geom).map(|p| p.x())
}

/// Y coordinate of a Point.
pub fn coordinate_y(geom: &Geometry<f64>) -> Option<f64> {
    point_of(geom).map(|p| p.y())
}
