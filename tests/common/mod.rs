//! Shared utilities for integration testing.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

/// Path of the sample valid configuration.
#[allow(dead_code)]
pub fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/cms.toml")
}

/// Contents of the sample valid configuration.
pub fn valid_config() -> String {
    std::fs::read_to_string(fixture_path()).unwrap()
}

/// Write `content` to a fresh temporary `.toml` file.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// Valid config with `section` removed entirely.
#[allow(dead_code)]
pub fn without_section(section: &str) -> String {
    let mut doc: toml::Table = toml::from_str(&valid_config()).unwrap();
    doc.remove(section);
    toml::to_string(&doc).unwrap()
}

/// Valid config with `section.key` replaced by `value`.
#[allow(dead_code)]
pub fn with_value(section: &str, key: &str, value: toml::Value) -> String {
    let mut doc: toml::Table = toml::from_str(&valid_config()).unwrap();
    doc.get_mut(section)
        .and_then(toml::Value::as_table_mut)
        .unwrap()
        .insert(key.to_string(), value);
    toml::to_string(&doc).unwrap()
}
