//! # instpatch - libInstPatch version information
//!
//! Reports the version of the instrument patch library this crate was built
//! as. The version triple and its display string are fixed at build time from
//! the package manifest and never change for the life of the process.
//!
//! ## Features
//!
//! - **Version query**: [`version()`] returns `(major, minor, micro)` and cannot fail
//! - **Display string**: [`VERSION`] is always the dot-joined triple
//! - **Requirement checks**: [`check_version()`] and [`Version`] comparisons
//! - **C API**: `ipatch_version` and friends behind the `c-api` feature
//!
//! ```
//! let (major, minor, micro) = instpatch::version();
//! assert_eq!(format!("{}.{}.{}", major, minor, micro), instpatch::VERSION);
//! ```

pub mod error;
pub mod version;

#[cfg(feature = "c-api")]
pub mod ffi;

pub use error::{InstPatchError, Result};
pub use version::{
    check_version, version, Version, VERSION, VERSION_MAJOR, VERSION_MICRO, VERSION_MINOR,
};
