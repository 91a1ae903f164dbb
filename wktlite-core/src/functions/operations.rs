//! Spatial operations
//!
//! buffer

use geo::algorithm::Buffer;
use geo::{
    Geometry, GeometryCollection, LineString, MultiLineString, MultiPoint, MultiPolygon, Polygon,
};

use crate::error::{Result, WktLiteError};
use crate::functions::emptiness::{is_empty_geometry, is_empty_point};

fn empty_polygon() -> Geometry<f64> {
    Geometry::Polygon(Polygon::new(LineString::new(vec![]), vec![]))
}

fn without_empty_rings(p: &Polygon<f64>) -> Polygon<f64> {
    let interiors = p
        .interiors()
        .iter()
        .filter(|r| !r.0.is_empty())
        .cloned()
        .collect();
    Polygon::new(p.exterior().clone(), interiors)
}

/// Copy of `geom` with empty rings and empty members removed. The offset
/// code behind `geo::Buffer` cannot handle zero-point rings.
fn without_empty_parts(geom: &Geometry<f64>) -> Geometry<f64> {
    match geom {
        Geometry::Polygon(p) => Geometry::Polygon(without_empty_rings(p)),
        Geometry::MultiPolygon(mp) => Geometry::MultiPolygon(MultiPolygon(
            mp.0.iter()
                .filter(|p| !p.exterior().0.is_empty())
                .map(without_empty_rings)
                .collect(),
        )),
        Geometry::MultiLineString(mls) => Geometry::MultiLineString(MultiLineString(
            mls.0.iter().filter(|ls| !ls.0.is_empty()).cloned().collect(),
        )),
        Geometry::MultiPoint(mp) => Geometry::MultiPoint(MultiPoint(
            mp.0.iter().filter(|p| !is_empty_point(p)).copied().collect(),
        )),
        Geometry::GeometryCollection(gc) => Geometry::GeometryCollection(GeometryCollection(
            gc.0.iter()
                .filter(|g| !is_empty_geometry(g))
                .map(without_empty_parts)
                .collect(),
        )),
        other => other.clone(),
    }
}

/// Expand (positive distance) or erode (negative distance) a geometry.
///
/// Returns `None` for an empty input. Eroding everything away, or buffering
/// a point or line by a negative distance, gives an empty polygon. A single result
/// polygon comes back as `Polygon`, several as `MultiPolygon`.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
/// use wktlite_core::functions::measurement::area;
/// use wktlite_core::functions::operations::buffer;
///
/// let pt = parse_wkt("POINT(0 0)").unwrap();
/// let disc = buffer(&pt, 1.0).unwrap().unwrap();
/// // Area of a circle with radius 1 ≈ π
/// assert!((area(&disc).unwrap() - std::f64::consts::PI).abs() < 0.1);
/// ```
pub fn buffer(geom: &Geometry<f64>, distance: f64) -> Result<Option<Geometry<f64>>> {
    if !distance.is_finite() {
        return Err(WktLiteError::InvalidArgument(format!(
            "buffer distance must be finite, got {distance}"
        )));
    }
    if is_empty_geometry(geom) {
        return Ok(None);
    }
    let mut polygons = without_empty_parts(geom).buffer(distance).0;
    let out = match polygons.len() {
        0 => empty_polygon(),
        1 => match polygons.pop() {
            Some(p) => Geometry::Polygon(p),
            None => empty_polygon(),
        },
        _ => Geometry::MultiPolygon(MultiPolygon::new(polygons)),
    };
    Ok(Some(out))
}
