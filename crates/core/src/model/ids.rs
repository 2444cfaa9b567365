use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a University, assigned by the backend.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniversityId(u64);

impl UniversityId {
    /// Creates a new `UniversityId`
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying u64 value
    #[must_use]
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Debug for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniversityId({})", self.0)
    }
}

impl fmt::Display for UniversityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error type for parsing an ID from a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseIdError;

impl fmt::Display for ParseIdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse UniversityId from string")
    }
}

impl std::error::Error for ParseIdError {}

impl FromStr for UniversityId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(UniversityId::new).map_err(|_| ParseIdError)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_university_id_display() {
        let id = UniversityId::new(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn test_university_id_from_str() {
        let id: UniversityId = "123".parse().unwrap();
        assert_eq!(id, UniversityId::new(123));
    }

    #[test]
    fn test_university_id_from_str_invalid() {
        let result = "not-a-number".parse::<UniversityId>();
        assert!(result.is_err());
    }

    #[test]
    fn test_id_roundtrip() {
        let original = UniversityId::new(42);
        let serialized = original.to_string();
        let deserialized: UniversityId = serialized.parse().unwrap();
        assert_eq!(original, deserialized);
    }
}
