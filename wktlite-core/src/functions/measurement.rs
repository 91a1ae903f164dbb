//! Measurement functions
//!
//! area, length, centroid, distance

#[allow(deprecated)]
use geo::algorithm::euclidean_distance::EuclideanDistance;
use geo::algorithm::line_measures::metric_spaces::Euclidean;
use geo::algorithm::line_measures::Length;
use geo::algorithm::{Area, Centroid};
use geo::{Geometry, LineString, Point, Polygon};

use crate::functions::emptiness::{is_empty_geometry, is_empty_point};

/// Planar area (square units of the input coordinates). Never negative;
/// zero for points, lines and degenerate polygons.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
/// use wktlite_core::functions::measurement::area;
///
/// let tri = parse_wkt("POLYGON((10 10,20 10,20 20,10 10))").unwrap();
/// assert_eq!(area(&tri), Some(50.0));
/// ```
pub fn area(geom: &Geometry<f64>) -> Option<f64> {
    Some(geom.unsigned_area())
}

fn polygon_perimeter(p: &Polygon<f64>) -> f64 {
    Euclidean.length(p.exterior())
        + p.interiors()
            .iter()
            .map(|r| Euclidean.length(r))
            .sum::<f64>()
}

/// Planar length of linear geometries, or boundary length of polygonal ones.
/// Points have no length.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
/// use wktlite_core::functions::measurement::length;
///
/// let line = parse_wkt("LINESTRING(0 0,3 4)").unwrap();
/// assert!((length(&line).unwrap() - 5.0).abs() < 1e-10);
/// assert_eq!(length(&parse_wkt("POINT(1 1)").unwrap()), None);
/// ```
pub fn length(geom: &Geometry<f64>) -> Option<f64> {
    match geom {
        Geometry::Point(_) | Geometry::MultiPoint(_) => None,
        Geometry::Line(l) => Some(Euclidean.length(&LineString::from(vec![l.start, l.end]))),
        Geometry::LineString(ls) => Some(Euclidean.length(ls)),
        Geometry::MultiLineString(mls) => Some(mls.0.iter().map(|ls| Euclidean.length(ls)).sum()),
        Geometry::Polygon(p) => Some(polygon_perimeter(p)),
        Geometry::MultiPolygon(mp) => Some(mp.0.iter().map(polygon_perimeter).sum()),
        Geometry::Rect(r) => Some(polygon_perimeter(&r.to_polygon())),
        Geometry::Triangle(t) => Some(polygon_perimeter(&t.to_polygon())),
        Geometry::GeometryCollection(gc) => gc
            .0
            .iter()
            .filter_map(length)
            .fold(None, |acc, l| Some(acc.unwrap_or(0.0) + l)),
    }
}

/// Geometric centroid. Empty geometries have none.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
/// use wktlite_core::functions::measurement::centroid;
///
/// let square = parse_wkt("POLYGON((0 0,2 0,2 2,0 2,0 0))").unwrap();
/// let c = centroid(&square).unwrap();
/// assert!((c.x() - 1.0).abs() < 1e-10);
/// assert!((c.y() - 1.0).abs() < 1e-10);
/// ```
pub fn centroid(geom: &Geometry<f64>) -> Option<Point<f64>> {
    if is_empty_geometry(geom) {
        return None;
    }
    geom.centroid()
}

/// The simple shapes distance is measured between.
enum Primitive {
    Point(Point<f64>),
    LineString(LineString<f64>),
    Polygon(Polygon<f64>),
}

fn collect_primitives(geom: &Geometry<f64>, out: &mut Vec<Primitive>) {
    match geom {
        Geometry::Point(p) => {
            if !is_empty_point(p) {
                out.push(Primitive::Point(*p));
            }
        }
        Geometry::Line(l) => {
            out.push(Primitive::LineString(LineString::from(vec![l.start, l.end])));
        }
        Geometry::LineString(ls) => {
            if !ls.0.is_empty() {
                out.push(Primitive::LineString(ls.clone()));
            }
        }
        Geometry::Polygon(p) => {
            if !p.exterior().0.is_empty() {
                out.push(Primitive::Polygon(p.clone()));
            }
        }
        Geometry::MultiPoint(mp) => {
            out.extend(
                mp.0.iter()
                    .filter(|p| !is_empty_point(p))
                    .map(|p| Primitive::Point(*p)),
            );
        }
        Geometry::MultiLineString(mls) => {
            out.extend(
                mls.0
                    .iter()
                    .filter(|ls| !ls.0.is_empty())
                    .map(|ls| Primitive::LineString(ls.clone())),
            );
        }
        Geometry::MultiPolygon(mp) => {
            out.extend(
                mp.0.iter()
                    .filter(|p| !p.exterior().0.is_empty())
                    .map(|p| Primitive::Polygon(p.clone())),
            );
        }
        Geometry::Rect(r) => out.push(Primitive::Polygon(r.to_polygon())),
        Geometry::Triangle(t) => out.push(Primitive::Polygon(t.to_polygon())),
        Geometry::GeometryCollection(gc) => {
            for g in &gc.0 {
                collect_primitives(g, out);
            }
        }
    }
}

#[allow(deprecated)]
fn directed_distance(a: &Primitive, b: &Primitive) -> f64 {
    match (a, b) {
        (Primitive::Point(pa), Primitive::Point(pb)) => pa.euclidean_distance(pb),
        (Primitive::Point(p), Primitive::LineString(ls))
        | (Primitive::LineString(ls), Primitive::Point(p)) => p.euclidean_distance(ls),
        (Primitive::Point(p), Primitive::Polygon(poly))
        | (Primitive::Polygon(poly), Primitive::Point(p)) => p.euclidean_distance(poly),
        (Primitive::LineString(la), Primitive::LineString(lb)) => la.euclidean_distance(lb),
        (Primitive::LineString(ls), Primitive::Polygon(poly))
        | (Primitive::Polygon(poly), Primitive::LineString(ls)) => ls.euclidean_distance(poly),
        (Primitive::Polygon(pa), Primitive::Polygon(pb)) => pa.euclidean_distance(pb),
    }
}

/// Minimum Euclidean distance between two geometries; zero when they touch
/// or overlap, `None` when either side is empty.
///
/// Each pair is measured in both directions and the smaller value kept, so
/// `distance(a, b)` and `distance(b, a)` are bit-identical.
///
/// # Example
///
/// ```
/// use wktlite_core::codec::parse_wkt;
/// use wktlite_core::functions::measurement::distance;
///
/// let a = parse_wkt("POINT(0 0)").unwrap();
/// let b = parse_wkt("POINT(3 4)").unwrap();
/// assert_eq!(distance(&a, &b), Some(5.0));
/// ```
pub fn distance(a: &Geometry<f64>, b: &Geometry<f64>) -> Option<f64> {
    let mut left = Vec::new();
    collect_primitives(a, &mut left);
    let mut right = Vec::new();
    collect_primitives(b, &mut right);

    let mut best: Option<f64> = None;
    for pa in &left {
        for pb in &right {
            let d = directed_distance(pa, pb).min(directed_distance(pb, pa));
            best = Some(best.map_or(d, |cur| cur.min(d)));
            if d == 0.0 {
                return best;
            }
        }
    }
    best
}
