//! Engine-neutral SQL cells and the argument/result conversion rules.
//!
//! Every value exchanged with a registered function is one of four cell
//! kinds. Argument cells borrow their text from the engine for the duration
//! of a call; result cells own theirs.

use std::borrow::Cow;

use crate::error::{Result, WktLiteError};

/// Largest integer magnitude that converts to `f64` without rounding.
const MAX_EXACT_F64_INT: i64 = 1 << 53;

/// A SQL cell: the only kinds of value a scalar function reads or returns.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue<'a> {
    Null,
    Integer(i64),
    Real(f64),
    Text(Cow<'a, str>),
}

impl<'a> SqlValue<'a> {
    /// SQL type name of the cell, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            SqlValue::Null => "NULL",
            SqlValue::Integer(_) => "INTEGER",
            SqlValue::Real(_) => "REAL",
            SqlValue::Text(_) => "TEXT",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, SqlValue::Null)
    }

    /// Borrow a text cell.
    pub fn text(s: &'a str) -> Self {
        SqlValue::Text(Cow::Borrowed(s))
    }

    /// Detach the cell from any borrowed engine buffer.
    pub fn into_owned(self) -> SqlValue<'static> {
        match self {
            SqlValue::Null => SqlValue::Null,
            SqlValue::Integer(v) => SqlValue::Integer(v),
            SqlValue::Real(v) => SqlValue::Real(v),
            SqlValue::Text(s) => SqlValue::Text(Cow::Owned(s.into_owned())),
        }
    }
}

// ── Result encoding ──────────────────────────────────────────────────────────

impl From<f64> for SqlValue<'static> {
    fn from(v: f64) -> Self {
        SqlValue::Real(v)
    }
}

impl From<String> for SqlValue<'static> {
    fn from(s: String) -> Self {
        SqlValue::Text(Cow::Owned(s))
    }
}

impl<T> From<Option<T>> for SqlValue<'static>
where
    T: Into<SqlValue<'static>>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(SqlValue::Null, Into::into)
    }
}

// ── Argument decoding ────────────────────────────────────────────────────────
//
// `Ok(None)` means the cell was NULL; callers answer NULL without evaluating.

fn cell<'v, 'a>(args: &'v [SqlValue<'a>], index: usize) -> Result<&'v SqlValue<'a>> {
    args.get(index).ok_or_else(|| {
        WktLiteError::InvalidArgument(format!(
            "missing argument {} (got {} arguments)",
            index + 1,
            args.len()
        ))
    })
}

/// Decode a WKT text argument. Numbers are not coerced to text.
pub fn wkt_arg<'v>(
    args: &'v [SqlValue<'_>],
    index: usize,
    arg_name: &str,
) -> Result<Option<&'v str>> {
    match cell(args, index)? {
        SqlValue::Null => Ok(None),
        SqlValue::Text(s) => Ok(Some(s.as_ref())),
        other => Err(WktLiteError::TypeMismatch {
            arg: arg_name.to_string(),
            expected: "WKT text",
            found: other.type_name(),
        }),
    }
}

/// Decode a numeric argument, promoting integers when no precision is lost.
pub fn real_arg(args: &[SqlValue<'_>], index: usize, arg_name: &str) -> Result<Option<f64>> {
    match cell(args, index)? {
        SqlValue::Null => Ok(None),
        SqlValue::Real(v) => Ok(Some(*v)),
        SqlValue::Integer(i) if (-MAX_EXACT_F64_INT..=MAX_EXACT_F64_INT).contains(i) => {
            Ok(Some(*i as f64))
        }
        SqlValue::Integer(_) => Err(WktLiteError::TypeMismatch {
            arg: arg_name.to_string(),
            expected: "numeric (integer within ±2^53)",
            found: "INTEGER",
        }),
        other => Err(WktLiteError::TypeMismatch {
            arg: arg_name.to_string(),
            expected: "numeric",
            found: other.type_name(),
        }),
    }
}
