//! CMS Configuration Validator Library

pub mod config;
pub mod observability;
pub mod report;
pub mod validator;

pub use config::{ConfigError, ValidationError, ValidationReport, ValueKind};
pub use report::{OutputFormat, Outcome};
pub use validator::{validate, validate_path, validate_with_format};
