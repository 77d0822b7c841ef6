//! CMS configuration checking.
//!
//! # Data Flow
//! ```text
//! cms.toml
//!     → loader.rs (existence check, read, TOML parse)
//!     → toml::Table (read-only for the rest of the run)
//!     → validation.rs (catalog from schema.rs, topology check)
//!     → ValidationReport
//! ```
//!
//! # Design Decisions
//! - Loader failures are fatal and preempt every check
//! - Field failures are recorded, never propagated
//! - Types are matched exactly, no coercion between TOML kinds

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_document, ConfigError};
pub use schema::{CatalogEntry, FieldSpec, ValueKind, CATALOG};
pub use validation::{check_field, check_topology, validate_document, ValidationError, ValidationReport};
