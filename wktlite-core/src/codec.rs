//! WKT codec.
//!
//! Parsing and writing both go through `geozero`, with no parser state kept
//! between calls. Empty geometries are written by hand so that `POINT EMPTY`
//! (a NaN/NaN point in `geo`) and friends come back out as `<KIND> EMPTY`.

use geo::{CoordsIter, Geometry};
use geozero::error::GeozeroError;
use geozero::{ToGeo, ToWkt};

use crate::error::{Result, WktLiteError};
use crate::functions::emptiness::is_empty_geometry;

/// Parse WKT text into a geometry.
///
/// Coordinates that overflow `f64` (such as `1e400`) make the whole input
/// malformed. Empty members inside a collection are not supported.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
///
/// let geom = parse_wkt("POINT(1 2)").unwrap();
/// assert!(matches!(geom, geo::Geometry::Point(_)));
/// assert!(parse_wkt("POLYGON((10 10,20 10").is_err());
/// ```
pub fn parse_wkt(wkt: &str) -> Result<Geometry<f64>> {
    let geom: Geometry<f64> = geozero::wkt::Wkt(wkt.as_bytes()).to_geo()?;
    // NaN is how `geo` spells an empty point, so only infinities are rejected.
    if geom
        .coords_iter()
        .any(|c| c.x.is_infinite() || c.y.is_infinite())
    {
        return Err(GeozeroError::Geometry("coordinate out of range".to_string()).into());
    }
    Ok(geom)
}

/// Write a geometry as WKT text.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::{parse_wkt, to_wkt};
///
/// let geom = parse_wkt("LINESTRING(0 0,1 1,2 2)").unwrap();
/// let wkt = to_wkt(&geom).unwrap();
/// assert_eq!(parse_wkt(&wkt).unwrap(), geom);
/// ```
pub fn to_wkt(geom: &Geometry<f64>) -> Result<String> {
    if is_empty_geometry(geom) {
        return Ok(format!("{} EMPTY", wkt_tag(geom)));
    }
    geom.to_wkt().map_err(|e| WktLiteError::Serialization(e.to_string()))
}

/// Normalise WKT text: parse, then write it back out.
pub fn normalize_wkt(wkt: &str) -> Result<String> {
    to_wkt(&parse_wkt(wkt)?)
}

fn wkt_tag(geom: &Geometry<f64>) -> &'static str {
    match geom {
        Geometry::Point(_) => "POINT",
        Geometry::Line(_) | Geometry::LineString(_) => "LINESTRING",
        Geometry::Polygon(_) | Geometry::Rect(_) | Geometry::Triangle(_) => "POLYGON",
        Geometry::MultiPoint(_) => "MULTIPOINT",
        Geometry::MultiLineString(_) => "MULTILINESTRING",
        Geometry::MultiPolygon(_) => "MULTIPOLYGON",
        Geometry::GeometryCollection(_) => "GEOMETRYCOLLECTION",
    }
}
