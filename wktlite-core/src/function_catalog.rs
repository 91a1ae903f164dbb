//! Canonical scalar function catalog shared across adapters.
//!
//! Each entry pairs a SQL name and arity with a body that decodes its
//! argument cells, runs a geometry operation and encodes the result cell.
//! Every function is strict: a NULL argument yields NULL without evaluation.

use geo::Geometry;

use crate::codec::{normalize_wkt, parse_wkt, to_wkt};
use crate::error::{Result, WktLiteError};
use crate::functions::accessors::{coordinate_x, coordinate_y};
use crate::functions::constructors::point;
use crate::functions::measurement::{area, centroid, distance, length};
use crate::functions::operations::buffer;
use crate::value::{real_arg, wkt_arg, SqlValue};

/// Body of a scalar function: argument cells in, result cell out.
pub type ScalarBody = fn(&[SqlValue<'_>]) -> Result<SqlValue<'static>>;

/// Scalar function declaration metadata plus its body.
#[derive(Debug, Clone, Copy)]
pub struct ScalarFunction {
    pub name: &'static str,
    pub n_arg: i32,
    pub deterministic: bool,
    body: ScalarBody,
}

impl ScalarFunction {
    /// A deterministic function.
    pub const fn new(name: &'static str, n_arg: i32, body: ScalarBody) -> Self {
        Self {
            name,
            n_arg,
            deterministic: true,
            body,
        }
    }

    /// Evaluate the function over one row's argument cells.
    ///
    /// # Example
    ///
    /// ```
    /// use wktlite_core::function_catalog::lookup;
    /// use wktlite_core::SqlValue;
    ///
    /// let area = lookup("area", 1).unwrap();
    /// let out = area
    ///     .invoke(&[SqlValue::text("POLYGON((10 10,20 10,20 20,10 10))")])
    ///     .unwrap();
    /// assert_eq!(out, SqlValue::Real(50.0));
    /// ```
    pub fn invoke(&self, args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
        if self.n_arg >= 0 && args.len() != self.n_arg as usize {
            return Err(WktLiteError::InvalidArgument(format!(
                "expected {} arguments, got {}",
                self.n_arg,
                args.len()
            )));
        }
        if args.iter().any(SqlValue::is_null) {
            return Ok(SqlValue::Null);
        }
        (self.body)(args)
    }
}

// ── Bodies ───────────────────────────────────────────────────────────────────

fn with_geometry<T, F>(args: &[SqlValue<'_>], op: F) -> Result<SqlValue<'static>>
where
    T: Into<SqlValue<'static>>,
    F: FnOnce(&Geometry<f64>) -> Result<T>,
{
    let Some(wkt) = wkt_arg(args, 0, "geom")? else {
        return Ok(SqlValue::Null);
    };
    let geom = parse_wkt(wkt)?;
    Ok(op(&geom)?.into())
}

fn geometry_text(geom: Option<Geometry<f64>>) -> Result<Option<String>> {
    geom.as_ref().map(to_wkt).transpose()
}

fn geom_from_text_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    let Some(wkt) = wkt_arg(args, 0, "wkt")? else {
        return Ok(SqlValue::Null);
    };
    parse_wkt(wkt)?;
    Ok(SqlValue::from(wkt.to_owned()))
}

fn as_text_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    let Some(wkt) = wkt_arg(args, 0, "geom")? else {
        return Ok(SqlValue::Null);
    };
    Ok(SqlValue::from(normalize_wkt(wkt)?))
}

fn area_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    with_geometry(args, |g| Ok(area(g)))
}

fn length_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    with_geometry(args, |g| Ok(length(g)))
}

fn centroid_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    with_geometry(args, |g| geometry_text(centroid(g).map(Geometry::Point)))
}

fn buffer_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    let Some(d) = real_arg(args, 1, "distance")? else {
        return Ok(SqlValue::Null);
    };
    with_geometry(args, |g| geometry_text(buffer(g, d)?))
}

fn coordinate_x_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    with_geometry(args, |g| Ok(coordinate_x(g)))
}

fn coordinate_y_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    with_geometry(args, |g| Ok(coordinate_y(g)))
}

fn distance_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    let Some(other) = wkt_arg(args, 1, "other")? else {
        return Ok(SqlValue::Null);
    };
    let other = parse_wkt(other)?;
    with_geometry(args, |g| Ok(distance(g, &other)))
}

fn point_sql(args: &[SqlValue<'_>]) -> Result<SqlValue<'static>> {
    let (Some(x), Some(y)) = (real_arg(args, 0, "x")?, real_arg(args, 1, "y")?) else {
        return Ok(SqlValue::Null);
    };
    Ok(SqlValue::from(to_wkt(&point(x, y)?)?))
}

// ── Catalog ──────────────────────────────────────────────────────────────────

pub const SCALAR_FUNCTIONS: &[ScalarFunction] = &[
    ScalarFunction::new("geom_from_text", 1, geom_from_text_sql),
    ScalarFunction::new("as_text", 1, as_text_sql),
    ScalarFunction::new("area", 1, area_sql),
    ScalarFunction::new("length", 1, length_sql),
    ScalarFunction::new("centroid", 1, centroid_sql),
    ScalarFunction::new("buffer", 2, buffer_sql),
    ScalarFunction::new("coordinate_x", 1, coordinate_x_sql),
    ScalarFunction::new("coordinate_y", 1, coordinate_y_sql),
    ScalarFunction::new("distance", 2, distance_sql),
    ScalarFunction::new("point", 2, point_sql),
    // OGC-style aliases
    ScalarFunction::new("ST_GeomFromText", 1, geom_from_text_sql),
    ScalarFunction::new("ST_AsText", 1, as_text_sql),
    ScalarFunction::new("ST_Area", 1, area_sql),
    ScalarFunction::new("ST_Length", 1, length_sql),
    ScalarFunction::new("ST_Centroid", 1, centroid_sql),
    ScalarFunction::new("ST_Buffer", 2, buffer_sql),
    ScalarFunction::new("ST_X", 1, coordinate_x_sql),
    ScalarFunction::new("ST_Y", 1, coordinate_y_sql),
    ScalarFunction::new("ST_Distance", 2, distance_sql),
    ScalarFunction::new("ST_Point", 2, point_sql),
];

/// Find a catalog entry the way SQLite resolves names: ASCII
/// case-insensitive, exact arity.
pub fn lookup(name: &str, n_arg: i32) -> Option<&'static ScalarFunction> {
    SCALAR_FUNCTIONS
        .iter()
        .find(|f| f.n_arg == n_arg && f.name.eq_ignore_ascii_case(name))
}
