//! SQLite extension registration via raw FFI.
//!
//! Every catalog entry is registered against one shared callback. The entry
//! itself (a `&'static ScalarFunction`) rides along as the function's
//! user-data pointer, so the callback only has to marshal cells in and out.
//! On native targets this module also exports the `sqlite3_wktlite_init` C
//! entry point so SQLite can load this library as a loadable extension.

use crate::sqlite_compat::*;
use std::ffi::{c_void, CString};
use std::os::raw::c_int;

use wktlite_core::function_catalog::{ScalarFunction, SCALAR_FUNCTIONS};
use wktlite_core::{SqlValue, WktLiteError};

// ── Constants ────────────────────────────────────────────────────────────────

const DET: c_int = SQLITE_UTF8 | SQLITE_DETERMINISTIC | SQLITE_INNOCUOUS;
const NON_DET: c_int = SQLITE_UTF8;

const ERROR_MSG_TOO_LARGE: &str = "internal error: error message too large";
const PANIC_IN_CALLBACK_MSG: &str = "panic in SQLite callback";
const MISSING_DESCRIPTOR_MSG: &str = "internal error: function registered without a descriptor";

// ── Argument-extraction helpers ──────────────────────────────────────────────

unsafe fn get_text<'a>(v: *mut sqlite3_value) -> Option<&'a str> {
    let ptr = sqlite3_value_text(v);
    let len = sqlite3_value_bytes(v) as usize;
    if ptr.is_null() {
        return None;
    }
    std::str::from_utf8(std::slice::from_raw_parts(ptr as _, len)).ok()
}

/// Decode one engine cell. Text borrows SQLite's buffer, which stays valid
/// until the callback returns.
unsafe fn read_arg<'a>(
    argv: *mut *mut sqlite3_value,
    i: usize,
) -> Result<SqlValue<'a>, WktLiteError> {
    let v = *argv.add(i);
    match sqlite3_value_type(v) {
        SQLITE_NULL => Ok(SqlValue::Null),
        SQLITE_INTEGER => Ok(SqlValue::Integer(sqlite3_value_int64(v))),
        SQLITE_FLOAT => Ok(SqlValue::Real(sqlite3_value_double(v))),
        SQLITE_TEXT => get_text(v)
            .map(SqlValue::text)
            .ok_or_else(|| WktLiteError::TypeMismatch {
                arg: format!("argument {}", i + 1),
                expected: "valid UTF-8 text",
                found: "TEXT",
            }),
        _ => Err(WktLiteError::TypeMismatch {
            arg: format!("argument {}", i + 1),
            expected: "NULL, INTEGER, REAL or TEXT",
            found: "BLOB",
        }),
    }
}

unsafe fn read_args<'a>(
    argv: *mut *mut sqlite3_value,
    argc: c_int,
) -> Result<Vec<SqlValue<'a>>, WktLiteError> {
    let argc = usize::try_from(argc).unwrap_or(0);
    (0..argc).map(|i| read_arg(argv, i)).collect()
}

// ── Result-setting helpers ───────────────────────────────────────────────────

fn checked_c_int_len(len: usize) -> Option<c_int> {
    c_int::try_from(len).ok()
}

unsafe fn set_text(ctx: *mut sqlite3_context, s: &str) {
    let Some(len) = checked_c_int_len(s.len()) else {
        set_error(ctx, "internal error: text result too large");
        return;
    };
    result_text_copied(ctx, s, len);
}

unsafe fn set_f64(ctx: *mut sqlite3_context, v: f64) {
    sqlite3_result_double(ctx, v);
}
unsafe fn set_i64(ctx: *mut sqlite3_context, v: i64) {
    sqlite3_result_int64(ctx, v);
}
unsafe fn set_null(ctx: *mut sqlite3_context) {
    sqlite3_result_null(ctx);
}

unsafe fn set_error(ctx: *mut sqlite3_context, msg: &str) {
    match checked_c_int_len(msg.len()) {
        Some(len) => sqlite3_result_error(ctx, msg.as_ptr().cast(), len),
        None => sqlite3_result_error(
            ctx,
            ERROR_MSG_TOO_LARGE.as_ptr().cast(),
            ERROR_MSG_TOO_LARGE.len() as c_int,
        ),
    }
    sqlite3_result_error_code(ctx, SQLITE_ERROR);
}

unsafe fn set_value(ctx: *mut sqlite3_context, value: SqlValue<'_>) {
    match value {
        SqlValue::Null => set_null(ctx),
        SqlValue::Integer(v) => set_i64(ctx, v),
        SqlValue::Real(v) => set_f64(ctx, v),
        SqlValue::Text(s) => set_text(ctx, &s),
    }
}

unsafe fn xfunc_guard<F>(ctx: *mut sqlite3_context, label: &str, f: F)
where
    F: FnOnce(),
{
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));
    if result.is_err() {
        log::error!("{label}: caught panic in scalar function callback");
        set_error(ctx, &format!("{label}: {PANIC_IN_CALLBACK_MSG}"));
    }
}

// ── Callback ─────────────────────────────────────────────────────────────────

/// The one `xFunc` behind every registered name.
unsafe extern "C" fn scalar_xfunc(
    ctx: *mut sqlite3_context,
    argc: c_int,
    argv: *mut *mut sqlite3_value,
) {
    let func = sqlite3_user_data(ctx) as *const ScalarFunction;
    let Some(func) = func.as_ref() else {
        set_error(ctx, MISSING_DESCRIPTOR_MSG);
        return;
    };
    xfunc_guard(ctx, func.name, || {
        match read_args(argv, argc).and_then(|args| func.invoke(&args)) {
            Ok(v) => set_value(ctx, v),
            Err(e) => set_error(ctx, &format!("{}: {e}", func.name)),
        }
    });
}

// ── Registration ─────────────────────────────────────────────────────────────

unsafe fn reg(db: *mut sqlite3, func: &'static ScalarFunction) -> c_int {
    let c_name = match CString::new(func.name) {
        Ok(v) => v,
        Err(_) => return SQLITE_ERROR,
    };
    let flags = if func.deterministic { DET } else { NON_DET };
    sqlite3_create_function_v2(
        db,
        c_name.as_ptr(),
        func.n_arg,
        flags,
        func as *const ScalarFunction as *mut c_void,
        Some(scalar_xfunc),
        None,
        None,
        None,
    )
}

unsafe fn install_catalog(
    db: *mut sqlite3,
    functions: &'static [ScalarFunction],
) -> Result<(), WktLiteError> {
    for func in functions {
        let rc = reg(db, func);
        if rc != SQLITE_OK {
            log::error!(
                "SQLite rejected {}/{} with code {rc}; aborting install",
                func.name,
                func.n_arg
            );
            return Err(WktLiteError::Registration {
                name: func.name,
                n_arg: func.n_arg,
                code: rc,
            });
        }
        log::debug!("registered {}/{}", func.name, func.n_arg);
    }
    log::info!("installed {} spatial functions", functions.len());
    Ok(())
}

/// Register every wktlite function on an open SQLite connection.
///
/// Safe to call again on the same connection: SQLite replaces each existing
/// binding with the same name and arity. Stops at the first function SQLite
/// rejects and reports it.
///
/// # Safety
/// `db` must be a valid, open SQLite database handle for the lifetime of the call.
pub unsafe fn install(db: *mut sqlite3) -> Result<(), WktLiteError> {
    install_catalog(db, SCALAR_FUNCTIONS)
}

/// C-status flavour of [`install`].
///
/// Returns `SQLITE_OK` (0) on success, or the code SQLite returned for the
/// first rejected function.
///
/// # Safety
/// `db` must be a valid, open SQLite database handle for the lifetime of the call.
pub unsafe fn register_functions(db: *mut sqlite3) -> c_int {
    match install(db) {
        Ok(()) => SQLITE_OK,
        Err(WktLiteError::Registration { code, .. }) => code,
        Err(_) => SQLITE_ERROR,
    }
}

// ── C entry point for loadable extension (native only) ───────────────────────

/// `sqlite3_wktlite_init` is the entry point called by SQLite when loading
/// this library as a loadable extension (`.load_extension('wktlite')`).
#[cfg(not(target_arch = "wasm32"))]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_wktlite_init(
    db: *mut sqlite3,
    _pz_err_msg: *mut *mut std::ffi::c_char,
    _p_api: *mut sqlite3_api_routines,
) -> c_int {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| register_functions(db))) {
        Ok(rc) => rc,
        Err(_) => SQLITE_ERROR,
    }
}

/// Compatibility entry point name expected by SQLite's default loader rules for
/// libraries named like `libwktlite_sqlite`.
#[cfg(not(target_arch = "wasm32"))]
#[no_mangle]
pub unsafe extern "C" fn sqlite3_wktlitesqlite_init(
    db: *mut sqlite3,
    pz_err_msg: *mut *mut std::ffi::c_char,
    p_api: *mut sqlite3_api_routines,
) -> c_int {
    sqlite3_wktlite_init(db, pz_err_msg, p_api)
}
