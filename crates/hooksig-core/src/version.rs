//! Event version handling
//!
//! Webhook events carry a `v<major>` version string (e.g. "v1", "v2").
//! There is no minor component on the wire; any change that would break an
//! existing consumer bumps the major.
//!
//! Compatibility rules:
//! - Same major version = compatible
//! - Different major version = incompatible

use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Current event major version
pub const EVENT_MAJOR_VERSION: u8 = 1;

/// Event version string constant
pub const EVENT_VERSION: &str = "v1";

/// Errors that can occur during version operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum VersionError {
    #[error("Empty version string")]
    Empty,

    #[error("Invalid version format: '{0}'. Expected 'v<major>' (e.g., 'v1')")]
    InvalidFormat(String),

    #[error("Version {got} is incompatible with {expected}. Major versions must match")]
    Incompatible { got: String, expected: String },
}

/// Parsed event version
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventVersion {
    pub major: u8,
}

impl EventVersion {
    /// Create a new version
    pub fn new(major: u8) -> Self {
        Self { major }
    }

    /// Get the current event version
    pub fn current() -> Self {
        Self::new(EVENT_MAJOR_VERSION)
    }

    /// Parse a version string
    ///
    /// # Examples
    ///
    /// ```
    /// use hooksig_core::EventVersion;
    ///
    /// let v = EventVersion::parse("v1").unwrap();
    /// assert_eq!(v.major, 1);
    /// ```
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        if s.is_empty() {
            return Err(VersionError::Empty);
        }

        let digits = s
            .strip_prefix('v')
            .ok_or_else(|| VersionError::InvalidFormat(s.to_string()))?;

        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(VersionError::InvalidFormat(s.to_string()));
        }

        let major = digits
            .parse::<u8>()
            .map_err(|_| VersionError::InvalidFormat(s.to_string()))?;

        Ok(Self { major })
    }

    /// Check if this version is compatible with another version
    ///
    /// Versions are compatible if they have the same major version.
    ///
    /// # Examples
    ///
    /// ```
    /// use hooksig_core::EventVersion;
    ///
    /// let v1 = EventVersion::new(1);
    /// let v2 = EventVersion::new(2);
    ///
    /// assert!(v1.is_compatible_with(&v1));
    /// assert!(!v1.is_compatible_with(&v2));
    /// ```
    pub fn is_compatible_with(&self, other: &Self) -> bool {
        self.major == other.major
    }

    /// Check compatibility and return an error if incompatible
    pub fn require_compatible(&self, other: &Self) -> Result<(), VersionError> {
        if self.is_compatible_with(other) {
            Ok(())
        } else {
            Err(VersionError::Incompatible {
                got: self.to_string(),
                expected: other.to_string(),
            })
        }
    }

    /// Check if this version is the current version
    pub fn is_current(&self) -> bool {
        *self == Self::current()
    }

    /// Check if a version string is compatible with the current version
    pub fn is_compatible_str(version_str: &str) -> Result<bool, VersionError> {
        let version = Self::parse(version_str)?;
        Ok(version.is_compatible_with(&Self::current()))
    }
}

impl Display for EventVersion {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.major)
    }
}

impl FromStr for EventVersion {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Default for EventVersion {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_versions() {
        assert_eq!(EventVersion::parse("v1").unwrap(), EventVersion::new(1));
        assert_eq!(EventVersion::parse("v2").unwrap(), EventVersion::new(2));
        assert_eq!(EventVersion::parse("v0").unwrap(), EventVersion::new(0));
    }

    #[test]
    fn test_parse_invalid_versions() {
        assert!(matches!(EventVersion::parse(""), Err(VersionError::Empty)));
        assert!(matches!(
            EventVersion::parse("1"),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            EventVersion::parse("v"),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            EventVersion::parse("v1.0"),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            EventVersion::parse("version1"),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            EventVersion::parse("v-1"),
            Err(VersionError::InvalidFormat(_))
        ));
        assert!(matches!(
            EventVersion::parse("v999"),
            Err(VersionError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_compatibility() {
        let v1 = EventVersion::new(1);
        let v2 = EventVersion::new(2);

        assert!(v1.is_compatible_with(&v1));
        assert!(!v1.is_compatible_with(&v2));
        assert!(!v2.is_compatible_with(&v1));
    }

    #[test]
    fn test_display() {
        assert_eq!(EventVersion::new(1).to_string(), "v1");
        assert_eq!(EventVersion::new(3).to_string(), "v3");
    }

    #[test]
    fn test_from_str() {
        let version: EventVersion = "v1".parse().unwrap();
        assert_eq!(version, EventVersion::new(1));
    }

    #[test]
    fn test_current_version() {
        let current = EventVersion::current();
        assert_eq!(current.major, EVENT_MAJOR_VERSION);
        assert_eq!(current.to_string(), EVENT_VERSION);
    }

    #[test]
    fn test_require_compatible() {
        let v1 = EventVersion::new(1);
        let v2 = EventVersion::new(2);

        assert!(v1.require_compatible(&EventVersion::new(1)).is_ok());
        assert!(matches!(
            v1.require_compatible(&v2),
            Err(VersionError::Incompatible { .. })
        ));
    }

    #[test]
    fn test_is_compatible_str() {
        assert!(EventVersion::is_compatible_str("v1").unwrap());
        assert!(!EventVersion::is_compatible_str("v2").unwrap());
        assert!(EventVersion::is_compatible_str("x1").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(EventVersion::default(), EventVersion::current());
    }

    #[test]
    fn test_is_current() {
        assert!(EventVersion::current().is_current());
        assert!(!EventVersion::new(9).is_current());
    }
}
