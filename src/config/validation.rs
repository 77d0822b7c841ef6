//! Configuration validation.
//!
//! # Responsibilities
//! - Presence and exact-type checks for every catalog field
//! - Shallow shape check of the `[services]` topology
//! - Collect every finding into a [`ValidationReport`]
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Checks never abort each other; a failed check only adds to the report
//! - Instance tuples are checked for shape only, hostname/port types are not inspected

use serde::Serialize;
use thiserror::Error;
use toml::{Table, Value};

use crate::config::schema::{CatalogEntry, FieldSpec, ValueKind, CATALOG, SERVICES_SECTION};

/// A single non-fatal finding.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    #[error("Missing section [{section}]")]
    MissingSection { section: String },

    #[error("Missing key '{key}' in section [{section}]")]
    MissingKey { section: String, key: String },

    #[error("Incorrect type for {section}.{key}: expected {expected}, got {actual} (value: {value})")]
    TypeMismatch {
        section: String,
        key: String,
        expected: ValueKind,
        actual: ValueKind,
        value: String,
    },

    #[error("Missing [services] section - required for CMS topology.")]
    MissingTopology,

    #[error("[services] must be a table of service clusters, got {actual}")]
    TopologyNotTable { actual: ValueKind },

    #[error("[services].{service} must be a list of instances, got {actual}")]
    ServiceNotList { service: String, actual: ValueKind },

    #[error("[services].{service}[{index}] must be [hostname, port]")]
    MalformedInstance { service: String, index: usize },
}

/// Findings of one validation run, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: ValidationError) {
        tracing::debug!(finding = %error, "Validation error recorded");
        self.errors.push(error);
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check presence and type of one field.
///
/// Returns `true` when the field passes. On failure exactly one error is
/// recorded in `report`.
pub fn check_field(doc: &Table, spec: &FieldSpec, report: &mut ValidationReport) -> bool {
    let Some(section) = doc.get(spec.section) else {
        if spec.optional {
            return true;
        }
        report.push(ValidationError::MissingSection {
            section: spec.section.to_string(),
        });
        return false;
    };

    // A non-table section has no keys.
    let Some(value) = section.as_table().and_then(|section| section.get(spec.key)) else {
        if spec.optional {
            return true;
        }
        report.push(ValidationError::MissingKey {
            section: spec.section.to_string(),
            key: spec.key.to_string(),
        });
        return false;
    };

    let actual = ValueKind::of(value);
    if actual != spec.expected {
        report.push(ValidationError::TypeMismatch {
            section: spec.section.to_string(),
            key: spec.key.to_string(),
            expected: spec.expected,
            actual,
            value: display_value(value),
        });
        return false;
    }

    true
}

/// Plain-text rendering of a value for diagnostics.
///
/// Strings are printed bare; everything else keeps TOML inline syntax.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Check the shape of the `[services]` topology.
///
/// Every service must map to an array, and every instance in it must be an
/// array of at least two elements. Returns the number of errors recorded.
pub fn check_topology(doc: &Table, report: &mut ValidationReport) -> usize {
    let before = report.error_count();

    match doc.get(SERVICES_SECTION) {
        None => report.push(ValidationError::MissingTopology),
        Some(Value::Table(services)) => {
            // Iteration follows document order (toml `preserve_order`).
            for (service, instances) in services {
                let Value::Array(instances) = instances else {
                    report.push(ValidationError::ServiceNotList {
                        service: service.clone(),
                        actual: ValueKind::of(instances),
                    });
                    continue;
                };

                for (index, instance) in instances.iter().enumerate() {
                    let well_formed = matches!(instance, Value::Array(tuple) if tuple.len() >= 2);
                    if !well_formed {
                        report.push(ValidationError::MalformedInstance {
                            service: service.clone(),
                            index,
                        });
                    }
                }
            }
        }
        Some(other) => report.push(ValidationError::TopologyNotTable {
            actual: ValueKind::of(other),
        }),
    }

    report.error_count() - before
}

/// Run the whole catalog against a parsed document.
pub fn validate_document(doc: &Table) -> ValidationReport {
    let mut report = ValidationReport::new();

    for entry in CATALOG {
        match entry {
            CatalogEntry::Field(spec) => {
                check_field(doc, spec, &mut report);
            }
            CatalogEntry::Topology => {
                check_topology(doc, &mut report);
            }
        }
    }

    report
}
