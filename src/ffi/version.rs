//! FFI version information functions

use std::ffi::{c_char, c_uint};

// NUL-terminated copy of crate::VERSION with static lifetime.
const VERSION_C: &str = crate::version::version_literal!("\0");

/// Get the library version
///
/// Each non-null pointer receives its component; null pointers are skipped.
///
/// # Safety
///
/// Every non-null pointer must be valid for a write of one `unsigned int`.
#[no_mangle]
pub unsafe extern "C" fn ipatch_version(
    major: *mut c_uint,
    minor: *mut c_uint,
    micro: *mut c_uint,
) {
    let (maj, min, mic) = crate::version();

    if !major.is_null() {
        *major = maj as c_uint;
    }
    if !minor.is_null() {
        *minor = min as c_uint;
    }
    if !micro.is_null() {
        *micro = mic as c_uint;
    }
}

/// Get the version string
///
/// The returned string is static and must not be freed.
#[no_mangle]
pub extern "C" fn ipatch_version_string() -> *const c_char {
    VERSION_C.as_ptr() as *const c_char
}

/// Check whether the library is at least version `major.minor.micro`
#[no_mangle]
pub extern "C" fn ipatch_check_version(major: c_uint, minor: c_uint, micro: c_uint) -> bool {
    crate::check_version(major as u32, minor as u32, micro as u32)
}
