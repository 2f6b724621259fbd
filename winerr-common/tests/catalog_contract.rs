//! Contract tests for the built-in catalogs as seen from outside the crate.

mod common;

use common::init_test_logging;
use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use tracing::info;
use winerr_common::{Catalog, CatalogError, ErrorCode, Family, ntstatus, parse_value, win32};

#[test]
fn test_well_known_values_resolve() {
    init_test_logging();
    info!(test = "test_well_known_values_resolve", phase = "execute");

    let cases: &[(&Catalog, u32, &str)] = &[
        (ntstatus(), 0x0000_0000, "STATUS_SUCCESS"),
        (ntstatus(), 0x0000_0103, "STATUS_PENDING"),
        (ntstatus(), 0x8000_0005, "STATUS_BUFFER_OVERFLOW"),
        (ntstatus(), 0xC000_0005, "STATUS_ACCESS_VIOLATION"),
        (ntstatus(), 0xC000_000D, "STATUS_INVALID_PARAMETER"),
        (win32(), 0, "ERROR_SUCCESS"),
        (win32(), 2, "ERROR_FILE_NOT_FOUND"),
        (win32(), 5, "ERROR_ACCESS_DENIED"),
        (win32(), 258, "WAIT_TIMEOUT"),
        (win32(), 1460, "ERROR_TIMEOUT"),
    ];

    for &(catalog, value, name) in cases {
        let code = catalog
            .lookup_by_value(value)
            .unwrap_or_else(|| panic!("{} has no entry for {value:#X}", catalog.family()));
        assert_eq!(code.name(), name);
        assert_eq!(catalog.lookup_by_name(name), Some(code));
    }
}

#[test]
fn test_unknown_input_is_absent_not_error() {
    init_test_logging();

    assert!(ntstatus().lookup_by_value(0xDEAD_BEEF).is_none());
    assert!(win32().lookup_by_value(999_999).is_none());
    assert!(ntstatus().lookup_by_name("STATUS_NOT_A_REAL_THING").is_none());
    assert!(win32().lookup_by_name("").is_none());
    assert!(win32().lookup_by_name("error_access_denied").is_none());
    assert!(win32().lookup_raw(i64::from(u32::MAX) + 1).is_none());
}

#[test]
fn test_signed_input_matches_unsigned_pattern() {
    init_test_logging();

    let av = ntstatus().lookup_raw(-1_073_741_819).expect("0xC0000005 as i32");
    assert_eq!(av.name(), "STATUS_ACCESS_VIOLATION");
    assert_eq!(av.signed_value(), -1_073_741_819);
    assert_eq!(parse_value("-1073741819").unwrap(), 0xC000_0005);
    assert!(*av == -1_073_741_819_i32);
}

#[test]
fn test_builtin_values_and_names_are_unique() {
    init_test_logging();

    for &family in Family::all() {
        let catalog = Catalog::builtin(family);
        let values: HashSet<u32> = catalog.iter().map(ErrorCode::value).collect();
        assert_eq!(values.len(), catalog.len(), "{family} has duplicate values");
        assert!(catalog.len() > 500, "{family} looks truncated");

        for code in catalog {
            assert!(!code.name().trim().is_empty());
            assert!(!code.description().trim().is_empty());
            assert_eq!(catalog.lookup_by_value(code.value()), Some(code));
        }
        info!(family = family.id(), entries = catalog.len(), "checked");
    }
}

#[test]
fn test_enumeration_is_restartable() {
    init_test_logging();

    let catalog = win32();
    let mut partial = catalog.iter();
    let first = partial.next().map(ErrorCode::name);
    let _ = partial.nth(10);

    let full: Vec<&str> = catalog.iter().map(ErrorCode::name).collect();
    let again: Vec<&str> = catalog.iter().map(ErrorCode::name).collect();
    assert_eq!(full.len(), catalog.len());
    assert_eq!(full, again);
    assert_eq!(first, full.first().copied());
}

#[test]
fn test_concurrent_first_use_sees_one_catalog() {
    init_test_logging();

    let barrier = Arc::new(std::sync::Barrier::new(8));
    let handles: Vec<_> = (0..8)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let catalog = if i % 2 == 0 { ntstatus() } else { win32() };
                let probe = if i % 2 == 0 { 0xC000_0005 } else { 5 };
                assert!(catalog.lookup_by_value(probe).is_some());
                (catalog as *const Catalog as usize, catalog.len())
            })
        })
        .collect();

    let results: Vec<(usize, usize)> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let nt: HashSet<_> = results.iter().step_by(2).collect();
    let legacy: HashSet<_> = results.iter().skip(1).step_by(2).collect();
    assert_eq!(nt.len(), 1, "every thread must see the same NTSTATUS catalog");
    assert_eq!(legacy.len(), 1, "every thread must see the same Win32 catalog");
}

#[test]
fn test_equality_is_by_value_only() {
    let a = ErrorCode::new("ERROR_ACCESS_DENIED", 5, "Access is denied.").unwrap();
    let b = ErrorCode::new("ERROR_ALIAS", 5, "Different text.").unwrap();
    let c = ErrorCode::new("ERROR_ACCESS_DENIED", 6, "Access is denied.").unwrap();

    assert_eq!(a, b);
    assert_ne!(a, c);
    assert!(a == 5_u32);
    assert!(5_u32 == a);
    assert!(a != 6_u32);
}

#[test]
fn test_try_eq_rejects_foreign_types() {
    let code = win32().lookup_by_value(5).unwrap();

    assert!(code.try_eq(&5_u32).unwrap());
    assert!(!code.try_eq(&6_i32).unwrap());
    assert!(code.try_eq(code).unwrap());

    let err = code.try_eq(&"ERROR_ACCESS_DENIED").unwrap_err();
    assert!(err.is_invalid_argument());
    assert!(matches!(err, CatalogError::TypeMismatch { .. }));
    assert!(code.try_eq(&5.0_f64).is_err());
}

#[test]
fn test_construction_rejects_bad_arguments() {
    assert!(ErrorCode::new("", 1, "desc").unwrap_err().is_invalid_argument());
    assert!(ErrorCode::new("NAME", 1, "").unwrap_err().is_invalid_argument());
    assert!(ErrorCode::new("   ", 1, "desc").unwrap_err().is_invalid_argument());
    assert!(parse_value("five").unwrap_err().is_invalid_argument());
    assert!(parse_value("0x1_0000_0000").is_err());
}

#[test]
fn test_owned_copy_does_not_touch_builtin() {
    let mut copy = win32().clone();
    copy.register("ERROR_CONTOSO_QUOTA", 70_001, "The Contoso share quota was exceeded.")
        .unwrap();

    assert_eq!(copy.len(), win32().len() + 1);
    assert!(win32().lookup_by_value(70_001).is_none());

    let err = copy.register("ERROR_DENIED_AGAIN", 5, "Again.").unwrap_err();
    assert!(err.is_duplicate_value());
    assert_eq!(copy.lookup_by_value(5).unwrap().name(), "ERROR_ACCESS_DENIED");
}
