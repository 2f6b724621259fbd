mod common;

use common::{fixture, init_test_logging};
use tracing::info;
use winerr_common::{
    CatalogError, DefinitionError, Family, StatusSeverity, generate_export, ntstatus,
    parse_definitions, win32,
};

#[test]
fn test_customer_statuses_extend_a_copy() {
    init_test_logging();
    info!(test = "test_customer_statuses_extend_a_copy", phase = "setup");

    let file = parse_definitions(fixture("contoso_ntstatus.toml")).expect("fixture parses");
    assert_eq!(file.family(), Family::NtStatus);
    assert_eq!(file.len(), 3);

    let mut catalog = ntstatus().clone();
    let added = file.apply(&mut catalog).expect("no collisions");
    info!(test = "test_customer_statuses_extend_a_copy", phase = "assert", added);

    assert_eq!(added, 3);
    assert_eq!(catalog.len(), ntstatus().len() + 3);
    let wedged = catalog.lookup_by_name("STATUS_CONTOSO_DEVICE_WEDGED").unwrap();
    assert_eq!(wedged.value(), 0xE001_0001);
    assert_eq!(catalog.severity_of(wedged), Some(StatusSeverity::Error));
    assert!(ntstatus().lookup_by_value(0xE001_0001).is_none());
}

#[test]
fn test_collision_stops_at_first_duplicate() {
    init_test_logging();

    let file = parse_definitions(fixture("collides_win32.toml")).unwrap();
    let mut catalog = win32().clone();
    let err = file.apply(&mut catalog).unwrap_err();

    match err.catalog_error() {
        Some(CatalogError::DuplicateValue {
            value,
            existing,
            rejected,
            ..
        }) => {
            assert_eq!(*value, 5);
            assert_eq!(existing, "ERROR_ACCESS_DENIED");
            assert_eq!(rejected, "ERROR_CONTOSO_DENIED");
        }
        other => panic!("expected DuplicateValue, got {other:?}"),
    }

    // Entries before the collision were kept, entries after it were not.
    assert!(catalog.lookup_by_value(70_001).is_some());
    assert!(catalog.lookup_by_value(70_002).is_none());
    assert_eq!(catalog.lookup_by_value(5).unwrap().name(), "ERROR_ACCESS_DENIED");
}

#[test]
fn test_family_mismatch_is_rejected() {
    let file = parse_definitions(fixture("collides_win32.toml")).unwrap();
    let mut catalog = ntstatus().clone();
    let before = catalog.len();

    let err = file.apply(&mut catalog).unwrap_err();
    assert!(matches!(
        err,
        DefinitionError::FamilyMismatch {
            file: Family::Win32,
            catalog: Family::NtStatus
        }
    ));
    assert_eq!(catalog.len(), before);
}

#[test]
fn test_bad_entry_reports_its_position() {
    let text = r#"
family = "win32"

[[code]]
name = "ERROR_CONTOSO_OK"
value = 70001
description = "Fine."

[[code]]
name = "ERROR_CONTOSO_BLANK"
value = 70002
description = "  "
"#;

    let err = parse_definitions(text).unwrap_err();
    match &err {
        DefinitionError::Entry { index, name, source } => {
            assert_eq!(*index, 1);
            assert_eq!(name, "ERROR_CONTOSO_BLANK");
            assert!(source.is_invalid_argument());
        }
        other => panic!("expected Entry error, got {other:?}"),
    }
    assert!(err.to_string().contains("ERROR_CONTOSO_BLANK"));
}

#[test]
fn test_extended_catalog_exports_new_entries() {
    let file = parse_definitions(fixture("contoso_ntstatus.toml")).unwrap();
    let mut catalog = ntstatus().clone();
    file.apply(&mut catalog).unwrap();

    let export = generate_export(&[&catalog]);
    let cache = export
        .codes
        .iter()
        .find(|c| c.name == "STATUS_CONTOSO_CACHE_FLUSHED")
        .unwrap();
    assert_eq!(cache.display_value, "0x60010003");
    assert_eq!(cache.severity, Some(StatusSeverity::Informational));
}
