//! Error types for catalog construction and comparison.
//!
//! Every failure is returned to the immediate caller. Nothing here is logged
//! or retried: an unknown code is not an error at all (lookups return
//! `None`), while malformed entries and duplicate values are data-authoring
//! defects the caller must see.

use crate::catalog::Family;
use thiserror::Error;

/// Errors raised while building, populating, or comparing catalog entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// A constructor or parser was handed a malformed field.
    #[error("invalid {field}: {reason}")]
    InvalidArgument {
        field: &'static str,
        reason: String,
    },

    /// An `ErrorCode` was compared against a value that is neither an
    /// `ErrorCode` nor an integer.
    #[error("cannot compare an error code with {found} (expected {expected})")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// Two entries in the same family claim the same numeric value.
    #[error(
        "duplicate {family} value {}: '{rejected}' collides with already registered '{existing}'",
        family.format_value(*value)
    )]
    DuplicateValue {
        family: Family,
        value: u32,
        existing: String,
        rejected: String,
    },
}

impl CatalogError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            reason: reason.into(),
        }
    }

    /// True for the argument-validation class of errors, which includes type
    /// mismatches in comparisons.
    #[must_use]
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. } | Self::TypeMismatch { .. })
    }

    /// True when the error reports a value collision inside one catalog.
    #[must_use]
    pub fn is_duplicate_value(&self) -> bool {
        matches!(self, Self::DuplicateValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_message() {
        let err = CatalogError::invalid("name", "must not be empty");
        assert_eq!(err.to_string(), "invalid name: must not be empty");
        assert!(err.is_invalid_argument());
        assert!(!err.is_duplicate_value());
    }

    #[test]
    fn test_type_mismatch_counts_as_invalid_argument() {
        let err = CatalogError::TypeMismatch {
            expected: "ErrorCode or integer",
            found: "&str",
        };
        assert!(err.is_invalid_argument());
        assert!(err.to_string().contains("&str"));
    }

    #[test]
    fn test_duplicate_value_message_uses_family_format() {
        let err = CatalogError::DuplicateValue {
            family: Family::NtStatus,
            value: 0xC000_0005,
            existing: "STATUS_ACCESS_VIOLATION".to_string(),
            rejected: "STATUS_AV".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("0xC0000005"), "message was: {msg}");
        assert!(msg.contains("STATUS_ACCESS_VIOLATION"));
        assert!(msg.contains("STATUS_AV"));
        assert!(err.is_duplicate_value());

        let err = CatalogError::DuplicateValue {
            family: Family::Win32,
            value: 5,
            existing: "ERROR_ACCESS_DENIED".to_string(),
            rejected: "ERROR_DENIED".to_string(),
        };
        assert!(err.to_string().contains("Win32 value 5"));
    }
}
