//! Machine-readable catalog export and its JSON Schema.
//!
//! # Generated files
//!
//! - `error-codes.json` - every entry of the exported catalogs
//! - `error-codes.schema.json` - JSON Schema for `error-codes.json`

use crate::catalog::{Catalog, Family};
use crate::code::ErrorCode;
use crate::status::StatusSeverity;
use schemars::schema::RootSchema;
use schemars::{JsonSchema, schema_for};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Version of the export document layout.
pub const EXPORT_SCHEMA_VERSION: &str = "1.0";

/// Summary of one exported family.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct FamilyEntry {
    pub id: Family,
    /// Human-readable name.
    pub name: String,
    pub description: String,
    /// Number of exported codes in this family.
    pub count: usize,
}

/// One exported code.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CodeEntry {
    pub family: Family,
    pub name: String,
    /// Raw 32-bit value.
    pub value: u32,
    /// Value in the family's conventional notation (`0xC0000005`, `5`).
    pub display_value: String,
    pub description: String,
    /// Present for NTSTATUS entries only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<StatusSeverity>,
}

impl CodeEntry {
    /// Flattens `code` as registered in `catalog`.
    #[must_use]
    pub fn from_code(catalog: &Catalog, code: &ErrorCode) -> Self {
        let family = catalog.family();
        Self {
            family,
            name: code.name().to_string(),
            value: code.value(),
            display_value: family.format_value(code.value()),
            description: code.description().to_string(),
            severity: catalog.severity_of(code),
        }
    }
}

/// Complete export document.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CatalogExport {
    pub schema_version: String,
    pub families: Vec<FamilyEntry>,
    pub codes: Vec<CodeEntry>,
}

/// Builds the export document for the given catalogs, in the order given.
#[must_use]
pub fn generate_export(catalogs: &[&Catalog]) -> CatalogExport {
    let families = catalogs
        .iter()
        .map(|catalog| {
            let family = catalog.family();
            FamilyEntry {
                id: family,
                name: family.name().to_string(),
                description: family.description().to_string(),
                count: catalog.len(),
            }
        })
        .collect();

    let codes = catalogs
        .iter()
        .flat_map(|catalog| {
            catalog
                .iter()
                .map(move |code| CodeEntry::from_code(catalog, code))
        })
        .collect();

    CatalogExport {
        schema_version: EXPORT_SCHEMA_VERSION.to_string(),
        families,
        codes,
    }
}

/// JSON Schema for [`CatalogExport`].
#[must_use]
pub fn generate_export_schema() -> RootSchema {
    schema_for!(CatalogExport)
}

/// Files written by [`export_to_dir`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportResult {
    pub files_generated: usize,
    pub files: Vec<String>,
    pub output_dir: String,
}

/// Writes the export document and its schema into `output_dir`.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or a file cannot be
/// written.
pub fn export_to_dir(output_dir: &Path, catalogs: &[&Catalog]) -> std::io::Result<ExportResult> {
    use std::fs;

    fs::create_dir_all(output_dir)?;

    let mut files = Vec::new();

    let codes_path = output_dir.join("error-codes.json");
    fs::write(
        &codes_path,
        serde_json::to_string_pretty(&generate_export(catalogs))?,
    )?;
    files.push(codes_path.display().to_string());

    let schema_path = output_dir.join("error-codes.schema.json");
    fs::write(
        &schema_path,
        serde_json::to_string_pretty(&generate_export_schema())?,
    )?;
    files.push(schema_path.display().to_string());

    Ok(ExportResult {
        files_generated: files.len(),
        files,
        output_dir: output_dir.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    #[test]
    fn test_export_counts_match_catalogs() {
        let export = generate_export(&[catalog::ntstatus(), catalog::win32()]);
        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.families.len(), 2);
        assert_eq!(export.families[0].id, Family::NtStatus);
        assert_eq!(export.families[0].count, catalog::ntstatus().len());
        assert_eq!(
            export.codes.len(),
            catalog::ntstatus().len() + catalog::win32().len()
        );
    }

    #[test]
    fn test_export_entry_fields() {
        let export = generate_export(&[catalog::ntstatus()]);
        let av = export
            .codes
            .iter()
            .find(|c| c.name == "STATUS_ACCESS_VIOLATION")
            .unwrap();
        assert_eq!(av.value, 0xC000_0005);
        assert_eq!(av.display_value, "0xC0000005");
        assert_eq!(av.severity, Some(StatusSeverity::Error));
    }

    #[test]
    fn test_win32_entries_omit_severity() {
        let export = generate_export(&[catalog::win32()]);
        let json = serde_json::to_value(&export.codes[0]).unwrap();
        assert!(json.get("severity").is_none());
        assert_eq!(json["family"], "win32");
    }

    #[test]
    fn test_export_round_trips_through_json() {
        let mut small = Catalog::new(Family::Win32);
        small.register("ERROR_CONTOSO", 70000, "Contoso failure.").unwrap();
        let export = generate_export(&[&small]);
        let text = serde_json::to_string(&export).unwrap();
        let back: CatalogExport = serde_json::from_str(&text).unwrap();
        assert_eq!(back.codes.len(), 1);
        assert_eq!(back.codes[0].name, "ERROR_CONTOSO");
    }

    #[test]
    fn test_schema_names_top_level_fields() {
        let schema = serde_json::to_value(generate_export_schema()).unwrap();
        let props = &schema["properties"];
        assert!(props.get("schema_version").is_some());
        assert!(props.get("families").is_some());
        assert!(props.get("codes").is_some());
    }

    #[test]
    fn test_export_to_dir_writes_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let result = export_to_dir(dir.path(), &[catalog::win32()]).unwrap();
        assert_eq!(result.files_generated, 2);
        let text = std::fs::read_to_string(dir.path().join("error-codes.json")).unwrap();
        assert!(text.contains("ERROR_ACCESS_DENIED"));
        assert!(dir.path().join("error-codes.schema.json").exists());
    }
}
