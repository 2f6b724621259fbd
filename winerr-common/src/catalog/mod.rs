//! Error code catalogs.
//!
//! A [`Catalog`] owns every [`ErrorCode`] of one [`Family`] and resolves raw
//! values and names to entries. Two built-in catalogs are populated from
//! static tables the first time they are used:
//!
//! | Family              | Accessor            | Table               | Value display |
//! |---------------------|---------------------|---------------------|---------------|
//! | NTSTATUS            | [`ntstatus()`]      | `ntstatus::TABLE`   | `0xC0000005`  |
//! | Win32 (legacy)      | [`win32()`]         | `win32::TABLE`      | `5`           |
//!
//! Both families store values as `u32`. NTSTATUS is declared as a signed
//! `LONG` by the platform headers, so signed input is accepted everywhere and
//! reinterpreted as its two's-complement bit pattern.
//!
//! # Example
//!
//! ```rust
//! use winerr_common::catalog;
//!
//! let av = catalog::ntstatus().lookup_by_value(0xC000_0005).unwrap();
//! assert_eq!(av.name(), "STATUS_ACCESS_VIOLATION");
//!
//! assert!(catalog::win32().lookup_by_value(999_999).is_none());
//! ```

pub mod ntstatus;
pub mod win32;

use crate::code::{ErrorCode, bits_from_integer};
use crate::errors::CatalogError;
use crate::status::StatusSeverity;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::{debug, trace};

/// A static table row: `(name, value, description)`.
pub type TableEntry = (&'static str, u32, &'static str);

/// The two error code families.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, schemars::JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    /// Kernel and native API status codes (`STATUS_*`), 32-bit values that
    /// encode severity and facility alongside the code.
    NtStatus,
    /// Classic Win32 error codes (`ERROR_*`) as returned by `GetLastError`.
    Win32,
}

impl Family {
    /// Every family, in display order.
    #[must_use]
    pub const fn all() -> &'static [Family] {
        &[Self::NtStatus, Self::Win32]
    }

    /// Stable lowercase identifier used in serialized output and on the
    /// command line.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NtStatus => "ntstatus",
            Self::Win32 => "win32",
        }
    }

    /// Returns a human-readable name for the family.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::NtStatus => "NTSTATUS",
            Self::Win32 => "Win32",
        }
    }

    /// Returns a short description of the family.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::NtStatus => "Native status codes carrying severity, facility and code fields",
            Self::Win32 => "Legacy Win32 error codes, small positive integers",
        }
    }

    /// Formats a value the way the family is conventionally written.
    #[must_use]
    pub fn format_value(&self, value: u32) -> String {
        match self {
            Self::NtStatus => format!("{value:#010X}"),
            Self::Win32 => value.to_string(),
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Family {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ntstatus" | "status" | "nt" => Ok(Self::NtStatus),
            "win32" | "legacy" | "error" => Ok(Self::Win32),
            other => Err(CatalogError::invalid(
                "family",
                format!("unknown family '{other}' (expected ntstatus or win32)"),
            )),
        }
    }
}

/// Parses a raw error value as typed by a person or printed by a tool.
///
/// Accepts decimal (`5`), `0x`-prefixed hexadecimal (`0xC0000005`, digit
/// separators allowed) and negative decimal (`-1073741819`), which is taken
/// as a signed 32-bit pattern.
pub fn parse_value(input: &str) -> Result<u32, CatalogError> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(hex) if !hex.starts_with('+') => u32::from_str_radix(&hex.replace('_', ""), 16).ok(),
        Some(_) => None,
        None => trimmed
            .parse::<i64>()
            .ok()
            .and_then(|n| bits_from_integer(i128::from(n))),
    };

    parsed.ok_or_else(|| {
        CatalogError::invalid(
            "value",
            format!("'{input}' is not a 32-bit decimal or 0x-prefixed hexadecimal integer"),
        )
    })
}

/// Registry of the known codes of one family, keyed by value.
///
/// Values are unique within a catalog. Insertion order is kept for
/// enumeration. Once populated a catalog is only read, so a shared reference
/// can serve any number of threads without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    family: Family,
    entries: Vec<ErrorCode>,
    by_value: HashMap<u32, usize>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new(family: Family) -> Self {
        Self::with_capacity(family, 0)
    }

    /// Creates an empty catalog with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(family: Family, capacity: usize) -> Self {
        Self {
            family,
            entries: Vec::with_capacity(capacity),
            by_value: HashMap::with_capacity(capacity),
            by_name: HashMap::with_capacity(capacity),
        }
    }

    /// Bulk-loads a static table, stopping at the first invalid or duplicate
    /// row.
    pub fn from_table(family: Family, table: &[TableEntry]) -> Result<Self, CatalogError> {
        let mut catalog = Self::with_capacity(family, table.len());
        for &(name, value, description) in table {
            catalog.register(name, value, description)?;
        }
        debug!(family = family.id(), entries = catalog.len(), "catalog populated");
        Ok(catalog)
    }

    /// The built-in catalog for `family`.
    #[must_use]
    pub fn builtin(family: Family) -> &'static Catalog {
        match family {
            Family::NtStatus => ntstatus(),
            Family::Win32 => win32(),
        }
    }

    /// Validates and registers one entry.
    ///
    /// Fails with [`CatalogError::DuplicateValue`] when `value` is already
    /// present; the existing entry is left untouched.
    pub fn register(
        &mut self,
        name: impl Into<Cow<'static, str>>,
        value: u32,
        description: impl Into<Cow<'static, str>>,
    ) -> Result<&ErrorCode, CatalogError> {
        let code = ErrorCode::new(name, value, description)?;
        self.insert(code)
    }

    /// Registers an already constructed entry.
    pub fn insert(&mut self, code: ErrorCode) -> Result<&ErrorCode, CatalogError> {
        if let Some(&existing) = self.by_value.get(&code.value()) {
            return Err(CatalogError::DuplicateValue {
                family: self.family,
                value: code.value(),
                existing: self.entries[existing].name().to_string(),
                rejected: code.name().to_string(),
            });
        }

        let index = self.entries.len();
        self.by_value.insert(code.value(), index);
        // The first registration owns a name shared by several values.
        self.by_name.entry(code.name().to_string()).or_insert(index);
        self.entries.push(code);
        Ok(&self.entries[index])
    }

    /// Resolves a raw value. Unknown values are `None`, never an error.
    #[must_use]
    pub fn lookup_by_value(&self, value: u32) -> Option<&ErrorCode> {
        let found = self.by_value.get(&value).map(|&i| &self.entries[i]);
        if found.is_none() {
            trace!(family = self.family.id(), value, "no entry for value");
        }
        found
    }

    /// Resolves a signed or wide raw value by its 32-bit pattern.
    #[must_use]
    pub fn lookup_raw(&self, raw: i64) -> Option<&ErrorCode> {
        bits_from_integer(i128::from(raw)).and_then(|value| self.lookup_by_value(value))
    }

    /// Resolves a canonical name (exact, case-sensitive).
    #[must_use]
    pub fn lookup_by_name(&self, name: &str) -> Option<&ErrorCode> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// True when `value` is registered.
    #[must_use]
    pub fn contains_value(&self, value: u32) -> bool {
        self.by_value.contains_key(&value)
    }

    /// Iterates over every entry in registration order. Each call starts a
    /// fresh pass.
    pub fn iter(&self) -> std::slice::Iter<'_, ErrorCode> {
        self.entries.iter()
    }

    /// Family of every entry in this catalog.
    #[must_use]
    pub const fn family(&self) -> Family {
        self.family
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Severity encoded in an entry's value; only NTSTATUS values carry one.
    #[must_use]
    pub fn severity_of(&self, code: &ErrorCode) -> Option<StatusSeverity> {
        match self.family {
            Family::NtStatus => Some(StatusSeverity::of(code.value())),
            Family::Win32 => None,
        }
    }

    /// One-line label for a raw value, whether or not it is registered.
    ///
    /// `STATUS_ACCESS_VIOLATION (0xC0000005)` or `unknown NTSTATUS 0xDEADBEEF`.
    #[must_use]
    pub fn label(&self, value: u32) -> String {
        let formatted = self.family.format_value(value);
        match self.lookup_by_value(value) {
            Some(code) => format!("{} ({})", code.name(), formatted),
            None => format!("unknown {} {}", self.family, formatted),
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ErrorCode;
    type IntoIter = std::slice::Iter<'a, ErrorCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

static NTSTATUS: OnceLock<Catalog> = OnceLock::new();
static WIN32: OnceLock<Catalog> = OnceLock::new();

/// The built-in NTSTATUS catalog, populated on first use.
pub fn ntstatus() -> &'static Catalog {
    NTSTATUS.get_or_init(|| load_builtin(Family::NtStatus, ntstatus::TABLE))
}

/// The built-in Win32 catalog, populated on first use.
pub fn win32() -> &'static Catalog {
    WIN32.get_or_init(|| load_builtin(Family::Win32, win32::TABLE))
}

/// Loads a built-in table. A duplicate or malformed row is a defect in this
/// crate's data and aborts at first use rather than serving a partial
/// catalog.
fn load_builtin(family: Family, table: &[TableEntry]) -> Catalog {
    match Catalog::from_table(family, table) {
        Ok(catalog) => catalog,
        Err(err) => panic!("built-in {family} table is malformed: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new(Family::NtStatus);
        catalog
            .register("STATUS_SUCCESS", 0, "The operation completed successfully.")
            .unwrap();
        catalog
            .register(
                "STATUS_ACCESS_VIOLATION",
                0xC000_0005,
                "The instruction referenced memory it could not access.",
            )
            .unwrap();
        catalog
    }

    #[test]
    fn test_register_and_lookup_by_value() {
        let catalog = sample();
        let success = catalog.lookup_by_value(0).expect("registered");
        assert_eq!(success.name(), "STATUS_SUCCESS");
        assert_eq!(catalog.len(), 2);
        assert!(!catalog.is_empty());
        assert!(catalog.contains_value(0xC000_0005));
    }

    #[test]
    fn test_lookup_unknown_value_is_none() {
        let catalog = sample();
        assert!(catalog.lookup_by_value(999_999).is_none());
        assert!(!catalog.contains_value(999_999));
    }

    #[test]
    fn test_duplicate_value_keeps_first_entry() {
        let mut catalog = sample();
        let err = catalog
            .register("STATUS_SUCCESS_DUP", 0, "Same value again.")
            .unwrap_err();

        match &err {
            CatalogError::DuplicateValue {
                family,
                value,
                existing,
                rejected,
            } => {
                assert_eq!(*family, Family::NtStatus);
                assert_eq!(*value, 0);
                assert_eq!(existing, "STATUS_SUCCESS");
                assert_eq!(rejected, "STATUS_SUCCESS_DUP");
            }
            other => panic!("expected DuplicateValue, got {other:?}"),
        }

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup_by_value(0).unwrap().name(), "STATUS_SUCCESS");
        assert!(catalog.lookup_by_name("STATUS_SUCCESS_DUP").is_none());
    }

    #[test]
    fn test_register_propagates_validation() {
        let mut catalog = Catalog::new(Family::Win32);
        let err = catalog.register("", 5, "desc").unwrap_err();
        assert!(err.is_invalid_argument());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = sample();
        let av = catalog.lookup_by_name("STATUS_ACCESS_VIOLATION").unwrap();
        assert_eq!(av.value(), 0xC000_0005);
        assert!(catalog.lookup_by_name("status_access_violation").is_none());
        assert!(catalog.lookup_by_name("STATUS_NOPE").is_none());
    }

    #[test]
    fn test_shared_name_resolves_to_first_registration() {
        let mut catalog = Catalog::new(Family::Win32);
        catalog.register("ERROR_ALIAS", 10, "first").unwrap();
        catalog.register("ERROR_ALIAS", 11, "second").unwrap();
        assert_eq!(catalog.lookup_by_name("ERROR_ALIAS").unwrap().value(), 10);
        assert_eq!(catalog.lookup_by_value(11).unwrap().description(), "second");
    }

    #[test]
    fn test_lookup_raw_accepts_signed_pattern() {
        let catalog = sample();
        let av = catalog.lookup_raw(-1_073_741_819).unwrap();
        assert_eq!(av.name(), "STATUS_ACCESS_VIOLATION");
        assert_eq!(catalog.lookup_raw(0xC000_0005).unwrap(), av);
        assert!(catalog.lookup_raw(i64::MAX).is_none());
    }

    #[test]
    fn test_iteration_is_restartable_and_ordered() {
        let catalog = sample();
        let first: Vec<&str> = catalog.iter().map(ErrorCode::name).collect();
        let second: Vec<&str> = (&catalog).into_iter().map(ErrorCode::name).collect();
        assert_eq!(first, vec!["STATUS_SUCCESS", "STATUS_ACCESS_VIOLATION"]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_enumeration_yields_each_entry_once() {
        let mut catalog = Catalog::new(Family::Win32);
        for value in 0..50u32 {
            catalog
                .register(format!("ERROR_TEST_{value}"), value * 3, "generated")
                .unwrap();
        }
        let seen: HashSet<u32> = catalog.iter().map(ErrorCode::value).collect();
        assert_eq!(seen.len(), 50);
        assert_eq!(catalog.iter().count(), 50);
        for value in 0..50u32 {
            assert!(seen.contains(&(value * 3)));
        }
    }

    #[test]
    fn test_from_table_stops_at_duplicate() {
        let table: &[TableEntry] = &[
            ("ERROR_A", 1, "a"),
            ("ERROR_B", 2, "b"),
            ("ERROR_C", 1, "c"),
        ];
        let err = Catalog::from_table(Family::Win32, table).unwrap_err();
        assert!(err.is_duplicate_value());
    }

    #[test]
    fn test_severity_of_depends_on_family() {
        let catalog = sample();
        let av = catalog.lookup_by_value(0xC000_0005).unwrap();
        assert_eq!(catalog.severity_of(av), Some(StatusSeverity::Error));

        let mut legacy = Catalog::new(Family::Win32);
        let denied = legacy.register("ERROR_ACCESS_DENIED", 5, "Access is denied.").unwrap().clone();
        assert_eq!(legacy.severity_of(&denied), None);
    }

    #[test]
    fn test_label() {
        let catalog = sample();
        assert_eq!(
            catalog.label(0xC000_0005),
            "STATUS_ACCESS_VIOLATION (0xC0000005)"
        );
        assert_eq!(catalog.label(0xDEAD_BEEF), "unknown NTSTATUS 0xDEADBEEF");
    }

    #[test]
    fn test_family_format_value() {
        assert_eq!(Family::NtStatus.format_value(0), "0x00000000");
        assert_eq!(Family::NtStatus.format_value(0xC000_0005), "0xC0000005");
        assert_eq!(Family::Win32.format_value(1326), "1326");
    }

    #[test]
    fn test_family_from_str() {
        assert_eq!("ntstatus".parse::<Family>().unwrap(), Family::NtStatus);
        assert_eq!("NTSTATUS".parse::<Family>().unwrap(), Family::NtStatus);
        assert_eq!(" win32 ".parse::<Family>().unwrap(), Family::Win32);
        assert_eq!("legacy".parse::<Family>().unwrap(), Family::Win32);
        assert!("hresult".parse::<Family>().unwrap_err().is_invalid_argument());
    }

    #[test]
    fn test_family_serialization() {
        let json = serde_json::to_string(&Family::NtStatus).unwrap();
        assert_eq!(json, "\"ntstatus\"");
        let parsed: Family = serde_json::from_str("\"win32\"").unwrap();
        assert_eq!(parsed, Family::Win32);
        assert_eq!(Family::Win32.to_string(), "Win32");
    }

    #[test]
    fn test_parse_value_forms() {
        assert_eq!(parse_value("5").unwrap(), 5);
        assert_eq!(parse_value(" 1326 ").unwrap(), 1326);
        assert_eq!(parse_value("0xC0000005").unwrap(), 0xC000_0005);
        assert_eq!(parse_value("0Xc0000005").unwrap(), 0xC000_0005);
        assert_eq!(parse_value("0xC000_0005").unwrap(), 0xC000_0005);
        assert_eq!(parse_value("-1073741819").unwrap(), 0xC000_0005);
        assert_eq!(parse_value("4294967295").unwrap(), u32::MAX);
    }

    #[test]
    fn test_parse_value_rejects_garbage() {
        for bad in ["", "abc", "0x", "0x+5", "4294967296", "-2147483649", "1.5", "0x1_0000_0000"] {
            let err = parse_value(bad).unwrap_err();
            assert!(err.is_invalid_argument(), "{bad:?} should be rejected");
        }
    }

    // =========================================================================
    // Built-in tables
    // =========================================================================

    #[test]
    fn test_builtin_tables_load_completely() {
        assert_eq!(ntstatus().len(), ntstatus::TABLE.len());
        assert_eq!(win32().len(), win32::TABLE.len());
        assert_eq!(ntstatus().family(), Family::NtStatus);
        assert_eq!(win32().family(), Family::Win32);
    }

    #[test]
    fn test_builtin_tables_have_unique_names() {
        for family in Family::all() {
            let mut seen = HashSet::new();
            for code in Catalog::builtin(*family) {
                assert!(
                    seen.insert(code.name()),
                    "Duplicate {} name: {}",
                    family,
                    code.name()
                );
            }
        }
    }

    #[test]
    fn test_builtin_names_use_family_prefixes() {
        for code in ntstatus() {
            assert!(
                ["STATUS_", "DBG_", "RPC_NT_"]
                    .iter()
                    .any(|p| code.name().starts_with(p)),
                "{} does not look like an NTSTATUS name",
                code.name()
            );
        }
        for code in win32() {
            assert!(
                ["ERROR_", "WAIT_", "RPC_S_", "NERR_", "WSA", "DNS_"]
                    .iter()
                    .any(|p| code.name().starts_with(p)),
                "{} does not look like a Win32 name",
                code.name()
            );
        }
    }

    #[test]
    fn test_builtin_well_known_values() {
        let nt = ntstatus();
        assert_eq!(nt.lookup_by_value(0).unwrap().name(), "STATUS_SUCCESS");
        assert_eq!(nt.lookup_by_value(0x103).unwrap().name(), "STATUS_PENDING");
        assert_eq!(
            nt.lookup_by_value(0x8000_0005).unwrap().name(),
            "STATUS_BUFFER_OVERFLOW"
        );
        assert_eq!(
            nt.lookup_by_value(0xC000_0034).unwrap().name(),
            "STATUS_OBJECT_NAME_NOT_FOUND"
        );
        assert_eq!(
            nt.lookup_by_name("STATUS_STACK_BUFFER_OVERRUN").unwrap().value(),
            0xC000_0409
        );

        let w = win32();
        assert_eq!(w.lookup_by_value(0).unwrap().name(), "ERROR_SUCCESS");
        assert_eq!(w.lookup_by_value(2).unwrap().name(), "ERROR_FILE_NOT_FOUND");
        assert_eq!(w.lookup_by_value(5).unwrap().name(), "ERROR_ACCESS_DENIED");
        assert_eq!(w.lookup_by_value(87).unwrap().name(), "ERROR_INVALID_PARAMETER");
        assert_eq!(w.lookup_by_name("ERROR_LOGON_FAILURE").unwrap().value(), 1326);
    }

    #[test]
    fn test_builtin_catalogs_do_not_share_entries() {
        let nt_zero = ntstatus().lookup_by_value(0).unwrap();
        let win_zero = win32().lookup_by_value(0).unwrap();
        assert!(!std::ptr::eq(nt_zero, win_zero));
        assert_ne!(nt_zero.name(), win_zero.name());
    }

    #[test]
    fn test_builtin_initialization_is_shared_across_threads() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(|| ntstatus() as *const Catalog as usize))
            .collect();
        let addresses: HashSet<usize> = handles
            .into_iter()
            .map(|h| h.join().expect("thread panicked"))
            .collect();
        assert_eq!(addresses.len(), 1);
        assert_eq!(
            addresses.into_iter().next(),
            Some(ntstatus() as *const Catalog as usize)
        );
    }

    #[test]
    fn test_builtin_entry_compares_through_try_eq() {
        let av = ntstatus().lookup_by_value(0xC000_0005).unwrap();
        let same = ntstatus().lookup_by_name("STATUS_ACCESS_VIOLATION").unwrap();
        assert!(av.try_eq(&same).unwrap());
        assert!(av.try_eq(&-1_073_741_819i32).unwrap());
        assert!(av.try_eq(&"0xC0000005").is_err());
    }

    mod proptest_lookup {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(256))]

            #[test]
            fn test_registered_values_resolve_and_others_do_not(
                values in prop::collection::hash_set(any::<u32>(), 0..200),
                candidate in any::<u32>(),
            ) {
                let mut catalog = Catalog::new(Family::Win32);
                for &value in &values {
                    catalog
                        .register(format!("ERROR_GEN_{value}"), value, "generated")
                        .unwrap();
                }

                prop_assert_eq!(catalog.len(), values.len());
                for &value in &values {
                    let code = catalog.lookup_by_value(value);
                    prop_assert!(code.is_some());
                    let code = code.unwrap();
                    prop_assert_eq!(code.value(), value);
                    let expected = format!("ERROR_GEN_{value}");
                    prop_assert_eq!(code.name(), expected.as_str());
                }

                let seen: HashSet<u32> = catalog.iter().map(ErrorCode::value).collect();
                prop_assert_eq!(&seen, &values);

                prop_assert_eq!(
                    catalog.lookup_by_value(candidate).is_some(),
                    values.contains(&candidate)
                );
                let missing = (0..=u32::MAX)
                    .map(|offset| candidate.wrapping_add(offset))
                    .find(|v| !values.contains(v));
                if let Some(missing) = missing {
                    prop_assert!(catalog.lookup_by_value(missing).is_none());
                    prop_assert!(!catalog.contains_value(missing));
                }
            }
        }
    }
}
