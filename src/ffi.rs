//! C ABI exports for host applications.
//!
//! The two library boundary functions, narrowed to primitive returns for
//! callers without a result type: an ordering becomes `-1`/`0`/`1` with
//! [`VERSION_PARSE_ERROR`] marking "not applicable", and the update check
//! becomes a plain `bool`. Input strings are borrowed for the duration of
//! the call — nothing is allocated for the caller to free, and neither
//! input is mutated.

use crate::{compare_versions, has_update};
use std::cmp::Ordering;
use std::ffi::{c_char, CStr};
use tracing::debug;

/// Sentinel returned by [`version_compare`] when either input is null,
/// not valid UTF-8, or not a well-formed version. Deliberately outside
/// `{-1, 0, 1}` so callers can always tell an ordering from a failure.
pub const VERSION_PARSE_ERROR: i32 = -999;

/// Borrow a C string for the duration of the call.
///
/// `ptr` must either be null or point to a NUL-terminated buffer that
/// stays valid while the caller's call is in flight; both exported
/// functions inherit that contract from their C signatures.
unsafe fn read_str<'a>(ptr: *const c_char) -> Option<&'a str> {
    if ptr.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(ptr) }.to_str().ok()
}

/// Compare two semantic version strings.
///
/// Returns `-1` if `v1 < v2`, `0` if equal, `1` if `v1 > v2`, and
/// [`VERSION_PARSE_ERROR`] when no ordering applies.
#[no_mangle]
pub extern "C" fn version_compare(v1: *const c_char, v2: *const c_char) -> i32 {
    let (Some(v1), Some(v2)) = (unsafe { read_str(v1) }, unsafe { read_str(v2) }) else {
        debug!("version_compare received a null or non-UTF-8 input");
        return VERSION_PARSE_ERROR;
    };
    match compare_versions(v1, v2) {
        Ok(Ordering::Less) => -1,
        Ok(Ordering::Equal) => 0,
        Ok(Ordering::Greater) => 1,
        Err(err) => {
            debug!(%err, "version_compare could not parse its input");
            VERSION_PARSE_ERROR
        }
    }
}

/// Check whether `latest` is a strict upgrade over `current`.
///
/// Null pointers, non-UTF-8 bytes, and malformed versions all yield
/// `false` — an update is only reported when confirmed.
#[no_mangle]
pub extern "C" fn version_has_update(current: *const c_char, latest: *const c_char) -> bool {
    let (Some(current), Some(latest)) = (unsafe { read_str(current) }, unsafe { read_str(latest) })
    else {
        debug!("version_has_update received a null or non-UTF-8 input");
        return false;
    };
    has_update(current, latest)
}
