//! One import path for the SQLite C API on every target: `libsqlite3-sys`
//! natively, `sqlite-wasm-rs` on wasm32. The two crates disagree only on how
//! `SQLITE_TRANSIENT` is spelled, so result text goes through
//! [`result_text_copied`].

#[cfg(not(target_arch = "wasm32"))]
pub(crate) use libsqlite3_sys::*;

#[cfg(target_arch = "wasm32")]
pub(crate) use sqlite_wasm_rs::*;

#[cfg(not(target_arch = "wasm32"))]
fn transient() -> sqlite3_destructor_type {
    // SQLITE_TRANSIENT is the sentinel pointer value -1.
    unsafe { std::mem::transmute(-1_isize) }
}

#[cfg(target_arch = "wasm32")]
fn transient() -> sqlite3_destructor_type {
    sqlite_wasm_rs::SQLITE_TRANSIENT()
}

/// Set a UTF-8 text result that SQLite copies before this call returns, so
/// `text` may be dropped right after.
///
/// # Safety
/// `ctx` must be the context of the currently executing callback.
pub(crate) unsafe fn result_text_copied(
    ctx: *mut sqlite3_context,
    text: &str,
    len: std::os::raw::c_int,
) {
    sqlite3_result_text(ctx, text.as_ptr().cast(), len, transient());
}
