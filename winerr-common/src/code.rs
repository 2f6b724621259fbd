//! The `ErrorCode` value entity.
//!
//! An `ErrorCode` is an immutable `(name, value, description)` triple. Its
//! identity is the numeric value alone: two entries with the same value are
//! equal whatever their metadata says, and an entry compares equal to the bare
//! integer it carries.
//!
//! # Example
//!
//! ```rust
//! use winerr_common::ErrorCode;
//!
//! let code = ErrorCode::new("ERROR_ACCESS_DENIED", 5, "Access is denied.")?;
//! assert_eq!(code, 5u32);
//! assert!(code.try_eq(&5_i64)?);
//! assert!(code.try_eq(&"5").is_err());
//! # Ok::<(), winerr_common::CatalogError>(())
//! ```

use crate::errors::CatalogError;
use serde::{Deserialize, Serialize};
use std::any::{Any, type_name};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// One documented error condition.
///
/// Fields are fixed at construction and only exposed through read accessors,
/// so a shared `&ErrorCode` is safe to read from any number of threads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawErrorCode")]
pub struct ErrorCode {
    name: Cow<'static, str>,
    value: u32,
    description: Cow<'static, str>,
}

impl ErrorCode {
    /// Builds a validated entry.
    ///
    /// Fails with [`CatalogError::InvalidArgument`] when `name` or
    /// `description` is empty or whitespace-only.
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        value: u32,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<Self, CatalogError> {
        let name = name.into();
        let description = description.into();

        if name.trim().is_empty() {
            return Err(CatalogError::invalid("name", "must be non-empty text"));
        }
        if description.trim().is_empty() {
            return Err(CatalogError::invalid(
                "description",
                format!("must be non-empty text (entry '{name}')"),
            ));
        }

        Ok(Self {
            name,
            value,
            description,
        })
    }

    /// Canonical symbolic name, e.g. `STATUS_ACCESS_VIOLATION`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Numeric value as an unsigned 32-bit pattern.
    #[must_use]
    pub const fn value(&self) -> u32 {
        self.value
    }

    /// The value reinterpreted as a signed 32-bit integer, the native
    /// representation of an NTSTATUS.
    #[must_use]
    pub const fn signed_value(&self) -> i32 {
        self.value as i32
    }

    /// Human-readable explanation.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compares against an arbitrary value.
    ///
    /// `ErrorCode`, `&'static ErrorCode` (as handed out by the built-in
    /// catalogs) and every primitive integer type are accepted. Integers are
    /// matched by 32-bit pattern, so `-1073741819_i32` equals an entry whose
    /// value is `0xC0000005`. Integers that fit neither
    /// `u32` nor `i32` are simply unequal. Any other type is a caller bug and
    /// yields [`CatalogError::TypeMismatch`] instead of `false`.
    pub fn try_eq<T: Any>(&self, other: &T) -> Result<bool, CatalogError> {
        let any = other as &dyn Any;

        if let Some(code) = any.downcast_ref::<ErrorCode>() {
            return Ok(self == code);
        }
        if let Some(code) = any.downcast_ref::<&ErrorCode>() {
            return Ok(self == *code);
        }

        match widen_integer(any) {
            Some(wide) => Ok(bits_from_integer(wide) == Some(self.value)),
            None => Err(CatalogError::TypeMismatch {
                expected: "ErrorCode or integer",
                found: type_name::<T>(),
            }),
        }
    }
}

/// Maps an integer onto the 32-bit pattern the catalogs store.
///
/// Non-negative values must fit `u32`; negative values must fit `i32` and are
/// reinterpreted as two's complement.
pub(crate) fn bits_from_integer(value: i128) -> Option<u32> {
    if let Ok(unsigned) = u32::try_from(value) {
        Some(unsigned)
    } else if let Ok(signed) = i32::try_from(value) {
        Some(signed as u32)
    } else {
        None
    }
}

macro_rules! widen_from {
    ($any:expr, $($ty:ty),+ $(,)?) => {
        $(
            if let Some(v) = $any.downcast_ref::<$ty>() {
                return Some(i128::try_from(*v).unwrap_or(i128::MAX));
            }
        )+
    };
}

/// Returns the integer held by `any`, or `None` when it holds something else.
fn widen_integer(any: &dyn Any) -> Option<i128> {
    widen_from!(any, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);
    None
}

impl PartialEq for ErrorCode {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for ErrorCode {}

impl Hash for ErrorCode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for ErrorCode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ErrorCode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialEq<u32> for ErrorCode {
    fn eq(&self, other: &u32) -> bool {
        self.value == *other
    }
}

impl PartialEq<ErrorCode> for u32 {
    fn eq(&self, other: &ErrorCode) -> bool {
        *self == other.value
    }
}

impl PartialEq<i32> for ErrorCode {
    fn eq(&self, other: &i32) -> bool {
        self.value == *other as u32
    }
}

impl PartialEq<ErrorCode> for i32 {
    fn eq(&self, other: &ErrorCode) -> bool {
        *self as u32 == other.value
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

/// Unvalidated wire form; deserialization goes through [`ErrorCode::new`].
#[derive(Deserialize)]
struct RawErrorCode {
    name: String,
    value: i64,
    description: String,
}

impl TryFrom<RawErrorCode> for ErrorCode {
    type Error = CatalogError;

    fn try_from(raw: RawErrorCode) -> Result<Self, Self::Error> {
        let value = bits_from_integer(i128::from(raw.value)).ok_or_else(|| {
            CatalogError::invalid("value", format!("{} does not fit in 32 bits", raw.value))
        })?;
        ErrorCode::new(raw.name, value, raw.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn code(name: &'static str, value: u32) -> ErrorCode {
        ErrorCode::new(name, value, "test entry").expect("valid entry")
    }

    #[test]
    fn test_new_keeps_supplied_fields() {
        let code = ErrorCode::new(
            "STATUS_SUCCESS",
            0,
            "The operation completed successfully.",
        )
        .expect("valid entry");
        assert_eq!(code.name(), "STATUS_SUCCESS");
        assert_eq!(code.value(), 0);
        assert_eq!(code.description(), "The operation completed successfully.");
    }

    #[test]
    fn test_new_accepts_owned_strings() {
        let code = ErrorCode::new(
            String::from("ERROR_CONTOSO"),
            0x2000_0001,
            String::from("Private code."),
        )
        .expect("valid entry");
        assert_eq!(code.name(), "ERROR_CONTOSO");
    }

    #[test]
    fn test_new_rejects_empty_name() {
        let err = ErrorCode::new("", 5, "desc").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, CatalogError::InvalidArgument { field: "name", .. }));
    }

    #[test]
    fn test_new_rejects_blank_name() {
        let err = ErrorCode::new("   ", 5, "desc").unwrap_err();
        assert!(matches!(err, CatalogError::InvalidArgument { field: "name", .. }));
    }

    #[test]
    fn test_new_rejects_empty_description() {
        let err = ErrorCode::new("E1", 1, "").unwrap_err();
        assert!(matches!(
            err,
            CatalogError::InvalidArgument {
                field: "description",
                ..
            }
        ));
        assert!(err.to_string().contains("E1"));
    }

    #[test]
    fn test_equality_ignores_metadata() {
        let a = ErrorCode::new("A", 7, "first").unwrap();
        let b = ErrorCode::new("B", 7, "second").unwrap();
        let c = ErrorCode::new("A", 8, "first").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_agrees_with_equality() {
        let mut set = HashSet::new();
        set.insert(code("A", 7));
        assert!(!set.insert(code("B", 7)));
        assert!(set.insert(code("C", 8)));
    }

    #[test]
    fn test_raw_integer_equality() {
        let av = code("STATUS_ACCESS_VIOLATION", 0xC000_0005);
        assert_eq!(av, 0xC000_0005u32);
        assert_eq!(0xC000_0005u32, av);
        assert_eq!(av, -1_073_741_819i32);
        assert_eq!(-1_073_741_819i32, av);
        assert_ne!(av, 5u32);
        assert_eq!(av.signed_value(), -1_073_741_819);
    }

    #[test]
    fn test_ordering_by_value() {
        let mut codes = vec![code("C", 3), code("A", 1), code("B", 2)];
        codes.sort();
        let values: Vec<u32> = codes.iter().map(ErrorCode::value).collect();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn test_try_eq_with_error_code() {
        let a = code("E1", 1);
        assert!(a.try_eq(&code("OTHER", 1)).unwrap());
        assert!(!a.try_eq(&code("E2", 2)).unwrap());
        let interned: &'static ErrorCode = Box::leak(Box::new(code("E1_ALIAS", 1)));
        assert!(a.try_eq(&interned).unwrap());
    }

    #[test]
    fn test_try_eq_with_integers() {
        let a = ErrorCode::new("E1", 1, "d").unwrap();
        assert!(a.try_eq(&1).unwrap());
        assert!(a.try_eq(&1u8).unwrap());
        assert!(a.try_eq(&1i64).unwrap());
        assert!(a.try_eq(&1usize).unwrap());
        assert!(!a.try_eq(&2u16).unwrap());
        assert!(!a.try_eq(&-1i8).unwrap());
    }

    #[test]
    fn test_try_eq_with_negative_status_pattern() {
        let av = code("STATUS_ACCESS_VIOLATION", 0xC000_0005);
        assert!(av.try_eq(&-1_073_741_819i32).unwrap());
        assert!(av.try_eq(&-1_073_741_819i64).unwrap());
        assert!(av.try_eq(&0xC000_0005u64).unwrap());
    }

    #[test]
    fn test_try_eq_out_of_range_integer_is_unequal() {
        let a = code("E1", 1);
        assert!(!a.try_eq(&(u64::from(u32::MAX) + 2)).unwrap());
        assert!(!a.try_eq(&i64::MIN).unwrap());
        assert!(!a.try_eq(&u128::MAX).unwrap());
    }

    #[test]
    fn test_try_eq_rejects_other_types() {
        let a = code("E1", 1);

        let err = a.try_eq(&"1").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(matches!(err, CatalogError::TypeMismatch { found: "&str", .. }));

        assert!(a.try_eq(&String::from("1")).is_err());
        assert!(a.try_eq(&1.0f64).is_err());
        assert!(a.try_eq(&Some(1u32)).is_err());
    }

    #[test]
    fn test_display() {
        let code = ErrorCode::new("ERROR_FILE_NOT_FOUND", 2, "The system cannot find the file specified.")
            .unwrap();
        assert_eq!(
            code.to_string(),
            "ERROR_FILE_NOT_FOUND: The system cannot find the file specified."
        );
    }

    #[test]
    fn test_serialization_roundtrip() {
        let code = code("STATUS_ACCESS_VIOLATION", 0xC000_0005);
        let json = serde_json::to_string(&code).expect("serialization failed");
        assert!(json.contains("\"value\":3221225477"));

        let parsed: ErrorCode = serde_json::from_str(&json).expect("deserialization failed");
        assert_eq!(parsed, code);
        assert_eq!(parsed.name(), "STATUS_ACCESS_VIOLATION");
    }

    #[test]
    fn test_deserialization_validates() {
        let empty_name = r#"{"name":"","value":1,"description":"d"}"#;
        assert!(serde_json::from_str::<ErrorCode>(empty_name).is_err());

        let too_big = r#"{"name":"N","value":8589934592,"description":"d"}"#;
        assert!(serde_json::from_str::<ErrorCode>(too_big).is_err());

        let not_integer = r#"{"name":"N","value":"5","description":"d"}"#;
        assert!(serde_json::from_str::<ErrorCode>(not_integer).is_err());

        let negative = r#"{"name":"N","value":-1073741819,"description":"d"}"#;
        let parsed: ErrorCode = serde_json::from_str(negative).expect("i32 pattern accepted");
        assert_eq!(parsed.value(), 0xC000_0005);
    }

    #[test]
    fn test_error_code_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ErrorCode>();
    }

    #[test]
    fn test_bits_from_integer_bounds() {
        assert_eq!(bits_from_integer(0), Some(0));
        assert_eq!(bits_from_integer(i128::from(u32::MAX)), Some(u32::MAX));
        assert_eq!(bits_from_integer(-1), Some(u32::MAX));
        assert_eq!(bits_from_integer(i128::from(i32::MIN)), Some(0x8000_0000));
        assert_eq!(bits_from_integer(i128::from(u32::MAX) + 1), None);
        assert_eq!(bits_from_integer(i128::from(i32::MIN) - 1), None);
    }

    mod proptest_equality {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn test_entries_equal_iff_values_equal(a in any::<u32>(), b in any::<u32>()) {
                let x = ErrorCode::new("X", a, "x").unwrap();
                let y = ErrorCode::new("Y", b, "y").unwrap();
                prop_assert_eq!(x == y, a == b);
                prop_assert_eq!(x.try_eq(&y).unwrap(), a == b);
            }

            #[test]
            fn test_entry_equals_raw_iff_values_equal(a in any::<u32>(), n in any::<u32>()) {
                let x = ErrorCode::new("X", a, "x").unwrap();
                prop_assert_eq!(x == n, a == n);
                prop_assert_eq!(x.try_eq(&n).unwrap(), a == n);
                prop_assert_eq!(x.try_eq(&u64::from(n)).unwrap(), a == n);
            }

            #[test]
            fn test_signed_view_matches_unsigned(a in any::<u32>()) {
                let x = ErrorCode::new("X", a, "x").unwrap();
                prop_assert!(x.try_eq(&x.signed_value()).unwrap());
            }

            #[test]
            fn test_strings_never_compare(a in any::<u32>(), s in ".*") {
                let x = ErrorCode::new("X", a, "x").unwrap();
                prop_assert!(x.try_eq(&s).is_err());
            }

            #[test]
            fn test_valid_text_always_constructs(
                name in "[A-Z_][A-Z0-9_]{0,40}",
                value in any::<u32>(),
                description in "[a-zA-Z][a-zA-Z .,]{0,80}",
            ) {
                let code = ErrorCode::new(name.clone(), value, description.clone()).unwrap();
                prop_assert_eq!(code.name(), name.as_str());
                prop_assert_eq!(code.value(), value);
                prop_assert_eq!(code.description(), description.as_str());
            }
        }
    }
}
