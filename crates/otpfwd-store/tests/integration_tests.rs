//! Integration tests for otpfwd-store
//!
//! These tests verify the load / synthesize / save cycle of the country table.

use otpfwd_domain::CountryDirectory;
use otpfwd_store::{CountryTable, LoadOutcome, StoreError};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_missing_file_is_created_with_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("country_flags.json");

    let (table, outcome) = CountryTable::load_or_init_with_outcome(&path).unwrap();
    assert_eq!(outcome, LoadOutcome::Created);
    assert_eq!(table, CountryTable::builtin());
    assert!(path.exists(), "Defaults should be persisted");
}

#[test]
fn test_round_trip_has_no_drift() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("country_flags.json");

    let created = CountryTable::load_or_init(&path).unwrap();
    let (reloaded, outcome) = CountryTable::load_or_init_with_outcome(&path).unwrap();
    assert_eq!(outcome, LoadOutcome::Loaded);
    assert_eq!(created, reloaded);

    let created_keys: Vec<_> = created.records().map(|r| r.key.clone()).collect();
    let reloaded_keys: Vec<_> = reloaded.records().map(|r| r.key.clone()).collect();
    assert_eq!(created_keys, reloaded_keys);

    for record in created.records() {
        let flag = record.flag.as_deref().unwrap();
        let code = record.dial_code.as_deref().unwrap();
        assert_eq!(reloaded.by_flag(flag), created.by_flag(flag));
        assert_eq!(reloaded.by_dial_code(code), created.by_dial_code(code));
    }

    // A second save produces byte-identical output
    let first = fs::read_to_string(&path).unwrap();
    reloaded.save(&path).unwrap();
    let second = fs::read_to_string(&path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_custom_file_is_loaded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("countries.json");
    fs::write(
        &path,
        r#"{
            "mauritania": {"flag": "🇲🇷", "dial_code": "+222"},
            "czechia": {"flag": "🇨🇿", "dial_code": "+420", "name": "Czech Republic"}
        }"#,
    )
    .unwrap();

    let table = CountryTable::load(&path).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.by_flag("🇲🇷").unwrap().name, "Mauritania");
    assert_eq!(table.by_name("czech republic").unwrap().dial_code, "+420");
    assert!(table.by_flag("🇸🇩").is_none(), "Defaults are not merged in");
}

#[test]
fn test_unparseable_file_falls_back_without_overwriting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("country_flags.json");
    fs::write(&path, "{ this is not json").unwrap();

    let (table, outcome) = CountryTable::load_or_init_with_outcome(&path).unwrap();
    assert_eq!(outcome, LoadOutcome::Fallback);
    assert_eq!(table, CountryTable::builtin());
    assert_eq!(fs::read_to_string(&path).unwrap(), "{ this is not json");
}

#[test]
fn test_strict_load_reports_errors() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("missing.json");
    assert!(matches!(CountryTable::load(&missing), Err(StoreError::Io(_))));

    let broken = dir.path().join("broken.json");
    fs::write(&broken, "[1, 2, 3]").unwrap();
    assert!(matches!(CountryTable::load(&broken), Err(StoreError::InvalidData(_))));
}

#[test]
fn test_save_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deeper").join("countries.json");

    CountryTable::builtin().save(&path).unwrap();
    assert_eq!(CountryTable::load(&path).unwrap(), CountryTable::builtin());
}
