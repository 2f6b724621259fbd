//! TOML definition files for site-specific codes.
//!
//! ```toml
//! family = "ntstatus"
//!
//! [[code]]
//! name = "STATUS_CONTOSO_DEVICE_WEDGED"
//! value = 0xE0010001
//! description = "The Contoso device stopped responding."
//! ```
//!
//! Parsing validates every entry up front. Registering the result into a
//! catalog is a separate step so the same file can be applied to several
//! catalogs (or none, when only validating).

use crate::catalog::{Catalog, Family};
use crate::code::{ErrorCode, bits_from_integer};
use crate::errors::CatalogError;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Errors raised while parsing or applying a definition file.
#[derive(Debug, Error)]
pub enum DefinitionError {
    #[error("malformed definition file")]
    Parse(#[from] toml::de::Error),

    #[error("code #{index} ({name})")]
    Entry {
        index: usize,
        name: String,
        #[source]
        source: CatalogError,
    },

    #[error("definition file declares family {file}, but the target catalog is {catalog}")]
    FamilyMismatch { file: Family, catalog: Family },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl DefinitionError {
    /// The catalog-level error underneath, if any.
    #[must_use]
    pub fn catalog_error(&self) -> Option<&CatalogError> {
        match self {
            Self::Entry { source, .. } => Some(source),
            Self::Catalog(err) => Some(err),
            Self::Parse(_) | Self::FamilyMismatch { .. } => None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFile {
    family: Family,
    #[serde(default, rename = "code")]
    codes: Vec<RawCode>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCode {
    name: String,
    value: toml::Value,
    description: String,
}

/// A parsed, validated definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionFile {
    family: Family,
    codes: Vec<ErrorCode>,
}

impl DefinitionFile {
    pub fn family(&self) -> Family {
        self.family
    }

    pub fn codes(&self) -> &[ErrorCode] {
        &self.codes
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Registers every code into `catalog`, in file order.
    ///
    /// Stops at the first collision and returns it as
    /// [`CatalogError::DuplicateValue`]. Codes registered before the
    /// collision stay registered, and the colliding entry already in the
    /// catalog is left as it was.
    pub fn apply(&self, catalog: &mut Catalog) -> Result<usize, DefinitionError> {
        if catalog.family() != self.family {
            return Err(DefinitionError::FamilyMismatch {
                file: self.family,
                catalog: catalog.family(),
            });
        }
        for code in &self.codes {
            catalog.insert(code.clone())?;
        }
        debug!(
            family = self.family.id(),
            added = self.codes.len(),
            total = catalog.len(),
            "applied definitions"
        );
        Ok(self.codes.len())
    }
}

/// Parses and validates definition-file text.
pub fn parse_definitions(text: &str) -> Result<DefinitionFile, DefinitionError> {
    let raw: RawFile = toml::from_str(text)?;

    let codes = raw
        .codes
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            let name = entry.name.clone();
            to_code(entry).map_err(|source| DefinitionError::Entry {
                index,
                name,
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(DefinitionFile {
        family: raw.family,
        codes,
    })
}

fn to_code(entry: RawCode) -> Result<ErrorCode, CatalogError> {
    let value = match entry.value {
        toml::Value::Integer(v) => bits_from_integer(i128::from(v)).ok_or_else(|| {
            CatalogError::invalid("value", format!("{v} does not fit in 32 bits"))
        })?,
        other => {
            return Err(CatalogError::invalid(
                "value",
                format!("expected an integer, found {}", other.type_str()),
            ));
        }
    };
    ErrorCode::new(entry.name, value, entry.description)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONTOSO: &str = r#"
family = "ntstatus"

[[code]]
name = "STATUS_CONTOSO_DEVICE_WEDGED"
value = 0xE0010001
description = "The Contoso device stopped responding."

[[code]]
name = "STATUS_CONTOSO_FIRMWARE_STALE"
value = -536805374
description = "The Contoso firmware must be updated."
"#;

    #[test]
    fn test_parse_valid_file() {
        let file = parse_definitions(CONTOSO).unwrap();
        assert_eq!(file.family(), Family::NtStatus);
        assert_eq!(file.len(), 2);
        assert_eq!(file.codes()[0].value(), 0xE001_0001);
        // -536805374 is 0xE0010002 as an i32 bit pattern.
        assert_eq!(file.codes()[1].value(), 0xE001_0002);
    }

    #[test]
    fn test_parse_empty_code_list() {
        let file = parse_definitions("family = \"win32\"\n").unwrap();
        assert_eq!(file.family(), Family::Win32);
        assert!(file.is_empty());
    }

    #[test]
    fn test_non_integer_value_is_invalid_argument() {
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_CONTOSO"
value = "five"
description = "Contoso failure."
"#;
        let err = parse_definitions(text).unwrap_err();
        let inner = err.catalog_error().unwrap();
        assert!(inner.is_invalid_argument());
        assert!(err.to_string().contains("ERROR_CONTOSO"));
        assert!(inner.to_string().contains("string"));
    }

    #[test]
    fn test_entry_error_reports_cause_once() {
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_X"
value = 70000
description = "  "
"#;
        let err = parse_definitions(text).unwrap_err();
        let report = format!("{:#}", anyhow::Error::from(err));
        assert!(report.starts_with("code #0 (ERROR_X): "), "{report}");
        assert_eq!(report.matches("must be non-empty text").count(), 1, "{report}");
    }

    #[test]
    fn test_parse_error_reports_cause_once() {
        let err = parse_definitions("family = \"hresult\"\n").unwrap_err();
        let report = format!("{:#}", anyhow::Error::from(err));
        assert!(report.starts_with("malformed definition file: "), "{report}");
        assert_eq!(report.matches("unknown variant").count(), 1, "{report}");
    }

    #[test]
    fn test_float_value_is_invalid_argument() {
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_CONTOSO"
value = 5.5
description = "Contoso failure."
"#;
        let err = parse_definitions(text).unwrap_err();
        assert!(err.catalog_error().unwrap().is_invalid_argument());
    }

    #[test]
    fn test_out_of_range_value_is_invalid_argument() {
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_HUGE"
value = 0x1_0000_0000
description = "Too wide."
"#;
        let err = parse_definitions(text).unwrap_err();
        assert!(err.catalog_error().unwrap().is_invalid_argument());
    }

    #[test]
    fn test_empty_name_reports_index() {
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_FINE"
value = 70000
description = "Fine."
[[code]]
name = ""
value = 70001
description = "No name."
"#;
        match parse_definitions(text).unwrap_err() {
            DefinitionError::Entry { index, source, .. } => {
                assert_eq!(index, 1);
                assert!(source.is_invalid_argument());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_family_and_fields_rejected() {
        assert!(matches!(
            parse_definitions("family = \"hresult\"\n"),
            Err(DefinitionError::Parse(_))
        ));
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_X"
value = 70000
description = "x"
severity = "error"
"#;
        assert!(matches!(parse_definitions(text), Err(DefinitionError::Parse(_))));
    }

    #[test]
    fn test_apply_registers_codes() {
        let file = parse_definitions(CONTOSO).unwrap();
        let mut catalog = Catalog::new(Family::NtStatus);
        assert_eq!(file.apply(&mut catalog).unwrap(), 2);
        assert_eq!(
            catalog
                .lookup_by_name("STATUS_CONTOSO_DEVICE_WEDGED")
                .unwrap()
                .value(),
            0xE001_0001
        );
    }

    #[test]
    fn test_apply_rejects_family_mismatch() {
        let file = parse_definitions(CONTOSO).unwrap();
        let mut catalog = Catalog::new(Family::Win32);
        assert!(matches!(
            file.apply(&mut catalog),
            Err(DefinitionError::FamilyMismatch { .. })
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_apply_collision_with_builtin_keeps_original() {
        let text = r#"
family = "ntstatus"
[[code]]
name = "STATUS_MY_AV"
value = 0xC0000005
description = "Shadowing attempt."
"#;
        let file = parse_definitions(text).unwrap();
        let mut catalog = crate::catalog::ntstatus().clone();
        let err = file.apply(&mut catalog).unwrap_err();
        assert!(err.catalog_error().unwrap().is_duplicate_value());
        assert_eq!(
            catalog.lookup_by_value(0xC000_0005).unwrap().name(),
            "STATUS_ACCESS_VIOLATION"
        );
        assert!(catalog.lookup_by_name("STATUS_MY_AV").is_none());
    }

    #[test]
    fn test_apply_collision_inside_file() {
        let text = r#"
family = "win32"
[[code]]
name = "ERROR_FIRST"
value = 70000
description = "First."
[[code]]
name = "ERROR_SECOND"
value = 70000
description = "Second."
"#;
        let file = parse_definitions(text).unwrap();
        let mut catalog = Catalog::new(Family::Win32);
        let err = file.apply(&mut catalog).unwrap_err();
        assert!(err.catalog_error().unwrap().is_duplicate_value());
        assert_eq!(catalog.lookup_by_value(70000).unwrap().name(), "ERROR_FIRST");
    }
}
