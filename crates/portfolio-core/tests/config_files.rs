//! Loading site configuration from disk

use std::io::Write;

use portfolio_core::{SectionId, SiteConfig, SiteError};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_partial_file() {
    let file = write_config(
        r#"{
            "identity": { "owner": "Ana", "site_title": "Ana's Website" },
            "companies": {
                "entries": [
                    { "name": "Acme", "subtitle": "Widgets", "description": "Makes widgets", "icon": "building" }
                ]
            }
        }"#,
    );

    let config = SiteConfig::load(file.path()).unwrap();
    assert_eq!(config.identity.owner, "Ana");
    assert_eq!(config.companies.entries.len(), 1);
    assert_eq!(config.companies.entries[0].name, "Acme");
    // Untouched keys fall back to defaults
    assert_eq!(config.section_order(), SectionId::all().to_vec());
    assert_eq!(config.timings.loading_delay_ms, 2000);
}

#[test]
fn test_load_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = SiteConfig::load(&dir.path().join("site.json")).unwrap_err();
    assert!(matches!(err, SiteError::Io(_)));
}

#[test]
fn test_load_malformed_file() {
    let file = write_config("{ \"identity\": ");
    let err = SiteConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, SiteError::Serialization(_)));
}

#[test]
fn test_load_invalid_file() {
    let file = write_config(
        r#"{ "sections": [
            { "id": "home", "label": "A", "icon": "user" },
            { "id": "home", "label": "B", "icon": "user" }
        ] }"#,
    );
    let err = SiteConfig::load(file.path()).unwrap_err();
    assert!(matches!(err, SiteError::InvalidConfig(_)));
}

#[test]
fn test_printed_config_loads_back() {
    let config = SiteConfig::default();
    let file = write_config(&config.to_json_pretty().unwrap());
    assert_eq!(SiteConfig::load(file.path()).unwrap(), config);
}
