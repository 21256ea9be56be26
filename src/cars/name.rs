//! Validated car names.

use serde::{Deserialize, Serialize};

use crate::core::error::{NameViolation, RaceError, Result};

/// Longest allowed car name, in characters.
pub const MAX_NAME_LENGTH: usize = 5;

/// A car's display name: 1 to 5 characters, not blank.
///
/// Surrounding whitespace is stripped from the stored value, so `" pobi"`
/// and `"pobi"` name the same car. Length is counted on the raw input.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    /// Validate a raw name.
    ///
    /// ```
    /// use racing_car::cars::Name;
    ///
    /// assert_eq!(Name::new("pobi").unwrap().as_str(), "pobi");
    /// assert!(Name::new("   ").is_err());
    /// assert!(Name::new("toolongname").is_err());
    /// ```
    pub fn new(raw: impl AsRef<str>) -> Result<Self> {
        let raw = raw.as_ref();
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return Err(Self::invalid(raw, NameViolation::Blank));
        }

        let length = raw.chars().count();
        if length == 0 || length > MAX_NAME_LENGTH {
            return Err(Self::invalid(raw, NameViolation::Length));
        }

        Ok(Self(trimmed.to_string()))
    }

    fn invalid(raw: &str, violation: NameViolation) -> RaceError {
        RaceError::InvalidName {
            name: raw.to_string(),
            violation,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Name {
    type Error = RaceError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_names() {
        for raw in ["a", "pobi", "crew", "12345", "자동차"] {
            let name = Name::new(raw).unwrap();
            assert_eq!(name.as_str(), raw);
        }
    }

    #[test]
    fn test_blank_names() {
        for raw in ["", " ", "\n", "    ", "\t\t"] {
            let err = Name::new(raw).unwrap_err();
            assert_eq!(err.name_violation(), Some(NameViolation::Blank), "{raw:?}");
        }
    }

    #[test]
    fn test_too_long_names() {
        for raw in ["asgeiwsje", "fjeiwk", "djskfjq", "toolongname"] {
            let err = Name::new(raw).unwrap_err();
            assert_eq!(err.name_violation(), Some(NameViolation::Length), "{raw:?}");
        }
    }

    #[test]
    fn test_length_counts_raw_input() {
        // Five characters including whitespace is fine, six is not.
        assert_eq!(Name::new(" pobi").unwrap().as_str(), "pobi");
        assert!(Name::new(" pobi ").is_err());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 5 chars, 15 bytes
        assert!(Name::new("가나다라마").is_ok());
        assert!(Name::new("가나다라마바").is_err());
    }

    #[test]
    fn test_display() {
        let name = Name::new("jun").unwrap();
        assert_eq!(format!("{}", name), "jun");
    }

    #[test]
    fn test_serde_validates() {
        let name: Name = serde_json::from_str("\"woni\"").unwrap();
        assert_eq!(name.as_str(), "woni");
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"woni\"");

        assert!(serde_json::from_str::<Name>("\"toolongname\"").is_err());
    }
}
