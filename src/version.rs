//! Library version information
//!
//! The version triple is taken from the package manifest at build time, so
//! the integer constants and the display string cannot drift apart.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{InstPatchError, Result};

/// Expands to the dot-joined manifest version as a string literal, with an
/// optional literal appended (e.g. `"\0"` for C callers).
macro_rules! version_literal {
    ($($suffix:literal)?) => {
        concat!(
            env!("CARGO_PKG_VERSION_MAJOR"),
            ".",
            env!("CARGO_PKG_VERSION_MINOR"),
            ".",
            env!("CARGO_PKG_VERSION_PATCH"),
            $($suffix)?
        )
    };
}
pub(crate) use version_literal;

/// Version display string, e.g. `"1.1.4"`
pub const VERSION: &str = version_literal!();

/// Major version number
pub const VERSION_MAJOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MAJOR"));

/// Minor version number
pub const VERSION_MINOR: u32 = parse_component(env!("CARGO_PKG_VERSION_MINOR"));

/// Micro version number
pub const VERSION_MICRO: u32 = parse_component(env!("CARGO_PKG_VERSION_PATCH"));

const fn parse_component(digits: &str) -> u32 {
    let bytes = digits.as_bytes();
    assert!(!bytes.is_empty(), "empty version component");

    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "non-decimal version component");
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    value
}

/// Get the library version as `(major, minor, micro)`
pub fn version() -> (u32, u32, u32) {
    (VERSION_MAJOR, VERSION_MINOR, VERSION_MICRO)
}

/// Check whether the library is at least version `major.minor.micro`
pub fn check_version(major: u32, minor: u32, micro: u32) -> bool {
    Version::CURRENT.is_at_least(major, minor, micro)
}

/// A `major.minor.micro` version triple
///
/// Ordering compares major, then minor, then micro.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Version {
    pub major: u32,
    pub minor: u32,
    pub micro: u32,
}

impl Version {
    /// The compiled-in library version
    pub const CURRENT: Version = Version::new(VERSION_MAJOR, VERSION_MINOR, VERSION_MICRO);

    pub const fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
        }
    }

    /// Get the compiled-in library version
    pub const fn current() -> Self {
        Self::CURRENT
    }

    pub const fn as_tuple(&self) -> (u32, u32, u32) {
        (self.major, self.minor, self.micro)
    }

    /// Parse a `major.minor.micro` string
    ///
    /// Exactly three unsigned decimal components are accepted. Components
    /// longer than one digit may not start with `0`, so every accepted string
    /// displays back unchanged. Leading and trailing whitespace is ignored.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(InstPatchError::invalid_version(input, "empty version string"));
        }

        let parts: Vec<&str> = trimmed.split('.').collect();
        if parts.len() != 3 {
            return Err(InstPatchError::invalid_version(
                input,
                format!("expected 3 components, found {}", parts.len()),
            ));
        }

        let major = Self::parse_part(input, "major", parts[0])?;
        let minor = Self::parse_part(input, "minor", parts[1])?;
        let micro = Self::parse_part(input, "micro", parts[2])?;

        Ok(Self::new(major, minor, micro))
    }

    fn parse_part(input: &str, name: &str, part: &str) -> Result<u32> {
        if part.is_empty() {
            return Err(InstPatchError::invalid_version(
                input,
                format!("{} component is empty", name),
            ));
        }
        if !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InstPatchError::invalid_version(
                input,
                format!("{} component '{}' is not a number", name, part),
            ));
        }
        if part.len() > 1 && part.starts_with('0') {
            return Err(InstPatchError::invalid_version(
                input,
                format!("{} component '{}' has a leading zero", name, part),
            ));
        }
        part.parse::<u32>().map_err(|e| {
            InstPatchError::invalid_version(input, format!("{} component '{}': {}", name, part, e))
        })
    }

    /// Check whether this version is at least `major.minor.micro`
    pub fn is_at_least(&self, major: u32, minor: u32, micro: u32) -> bool {
        *self >= Version::new(major, minor, micro)
    }

    /// Check whether code built against `required` can use this version
    ///
    /// Majors must match; anything newer within the same major qualifies.
    pub fn is_compatible_with(&self, required: Version) -> bool {
        self.major == required.major && *self >= required
    }
}

impl Default for Version {
    fn default() -> Self {
        Self::CURRENT
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}

impl FromStr for Version {
    type Err = InstPatchError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<(u32, u32, u32)> for Version {
    fn from((major, minor, micro): (u32, u32, u32)) -> Self {
        Self::new(major, minor, micro)
    }
}

impl From<Version> for (u32, u32, u32) {
    fn from(version: Version) -> Self {
        version.as_tuple()
    }
}
