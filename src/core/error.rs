//! Validation errors for the racing domain.
//!
//! Every error is raised at construction time and propagated unchanged to
//! the caller. Round execution and status queries never fail.

use thiserror::Error;

/// Which naming rule a rejected car name broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NameViolation {
    /// Empty or whitespace-only.
    Blank,
    /// Character count outside `1..=MAX_NAME_LENGTH`.
    Length,
}

impl std::fmt::Display for NameViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NameViolation::Blank => write!(f, "car name must not be blank"),
            NameViolation::Length => write!(
                f,
                "car name must be 1 to {} characters",
                crate::cars::MAX_NAME_LENGTH
            ),
        }
    }
}

/// Stable discriminant of a [`RaceError`], for callers that branch on the kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    InvalidName,
    DuplicateName,
    InvalidPosition,
    InvalidTryCount,
    InvalidConfig,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RaceError {
    #[error("{violation}: '{name}'")]
    InvalidName {
        name: String,
        violation: NameViolation,
    },

    #[error("car names must be unique: '{0}' is duplicated")]
    DuplicateName(String),

    #[error("position must not be negative: {0}")]
    InvalidPosition(i64),

    #[error("try count must not be negative: {0}")]
    InvalidTryCount(i64),

    #[error("invalid race config: {0}")]
    InvalidConfig(String),
}

impl RaceError {
    /// Get the kind of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            RaceError::InvalidName { .. } => ErrorKind::InvalidName,
            RaceError::DuplicateName(_) => ErrorKind::DuplicateName,
            RaceError::InvalidPosition(_) => ErrorKind::InvalidPosition,
            RaceError::InvalidTryCount(_) => ErrorKind::InvalidTryCount,
            RaceError::InvalidConfig(_) => ErrorKind::InvalidConfig,
        }
    }

    /// The broken naming rule, if this is an `InvalidName` error.
    #[must_use]
    pub fn name_violation(&self) -> Option<NameViolation> {
        match self {
            RaceError::InvalidName { violation, .. } => Some(*violation),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, RaceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let blank = RaceError::InvalidName {
            name: " ".to_string(),
            violation: NameViolation::Blank,
        };
        assert_eq!(blank.to_string(), "car name must not be blank: ' '");

        let long = RaceError::InvalidName {
            name: "toolongname".to_string(),
            violation: NameViolation::Length,
        };
        assert_eq!(
            long.to_string(),
            "car name must be 1 to 5 characters: 'toolongname'"
        );

        assert_eq!(
            RaceError::DuplicateName("car1".to_string()).to_string(),
            "car names must be unique: 'car1' is duplicated"
        );
        assert_eq!(
            RaceError::InvalidPosition(-1).to_string(),
            "position must not be negative: -1"
        );
        assert_eq!(
            RaceError::InvalidTryCount(-3).to_string(),
            "try count must not be negative: -3"
        );
        assert_eq!(
            RaceError::InvalidConfig("draw range must not be empty".into()).to_string(),
            "invalid race config: draw range must not be empty"
        );
    }

    #[test]
    fn test_kind() {
        assert_eq!(
            RaceError::DuplicateName("a".into()).kind(),
            ErrorKind::DuplicateName
        );
        assert_eq!(RaceError::InvalidTryCount(-1).kind(), ErrorKind::InvalidTryCount);

        let err = RaceError::InvalidName {
            name: String::new(),
            violation: NameViolation::Blank,
        };
        assert_eq!(err.kind(), ErrorKind::InvalidName);
        assert_eq!(err.name_violation(), Some(NameViolation::Blank));
        assert_eq!(RaceError::InvalidPosition(-2).name_violation(), None);
    }
}
