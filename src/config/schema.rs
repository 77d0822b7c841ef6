//! Validation catalog definitions.
//!
//! The CMS configuration has a fixed set of required fields. They are listed
//! here as data so the driver can iterate them in a stable order.

use std::fmt;

use serde::Serialize;
use toml::Value;

/// Name of the topology section.
pub const SERVICES_SECTION: &str = "services";

/// Semantic type of a parsed TOML value.
///
/// Matching is exact: an integer never satisfies `String` and a boolean
/// never satisfies `Integer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    String,
    Integer,
    Float,
    Boolean,
    Datetime,
    /// Ordered sequence.
    Array,
    /// Nested mapping.
    Table,
}

impl ValueKind {
    /// Classify a parsed value.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => ValueKind::String,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Datetime(_) => ValueKind::Datetime,
            Value::Array(_) => ValueKind::Array,
            Value::Table(_) => ValueKind::Table,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::String => "string",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Boolean => "boolean",
            ValueKind::Datetime => "datetime",
            ValueKind::Array => "array",
            ValueKind::Table => "table",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single `section.key` requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Top-level section name.
    pub section: &'static str,

    /// Key inside the section.
    pub key: &'static str,

    /// Type the value must have.
    pub expected: ValueKind,

    /// Absent sections/keys are accepted when set.
    pub optional: bool,
}

impl FieldSpec {
    pub const fn required(section: &'static str, key: &'static str, expected: ValueKind) -> Self {
        Self {
            section,
            key,
            expected,
            optional: false,
        }
    }

    pub const fn optional(section: &'static str, key: &'static str, expected: ValueKind) -> Self {
        Self {
            section,
            key,
            expected,
            optional: true,
        }
    }

    /// Dotted path used in diagnostics (e.g. `database.url`).
    pub fn path(&self) -> String {
        format!("{}.{}", self.section, self.key)
    }
}

/// One step of a validation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogEntry {
    /// Presence and type check of a single field.
    Field(FieldSpec),

    /// Structural check of the `[services]` topology.
    Topology,
}

/// Checks run against every CMS configuration, in output order.
pub const CATALOG: &[CatalogEntry] = &[
    CatalogEntry::Field(FieldSpec::required("database", "url", ValueKind::String)),
    CatalogEntry::Topology,
    CatalogEntry::Field(FieldSpec::required("admin_web_server", "listen_address", ValueKind::String)),
    CatalogEntry::Field(FieldSpec::required("admin_web_server", "listen_port", ValueKind::Integer)),
    // Contest web servers are sharded: one address/port per shard.
    CatalogEntry::Field(FieldSpec::required("contest_web_server", "listen_address", ValueKind::Array)),
    CatalogEntry::Field(FieldSpec::required("contest_web_server", "listen_port", ValueKind::Array)),
    CatalogEntry::Field(FieldSpec::required("proxy_service", "listen_port", ValueKind::Integer)),
    CatalogEntry::Field(FieldSpec::required("proxy_service", "rankings", ValueKind::Array)),
];
