//! C Foreign Function Interface (FFI) for C/C++ hosts
//!
//! Exposes the version API with the same symbol names as the libInstPatch C
//! library so existing callers can link against this crate unchanged.

pub mod init;
pub mod version;

pub use init::ipatch_init;
pub use version::{ipatch_check_version, ipatch_version, ipatch_version_string};
