//! Validation driver.
//!
//! Loads the document once, runs the catalog, and reports.

use std::io::{self, Write};
use std::path::Path;

use crate::config::{load_document, validate_document};
use crate::report::{render, OutputFormat, Outcome};

/// Run every check against the file at `path`.
///
/// Loader failures abort the run before any check.
pub fn validate_path(path: &Path) -> Outcome {
    let doc = match load_document(path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "Configuration could not be loaded");
            return Outcome::Aborted(e);
        }
    };

    let report = validate_document(&doc);

    tracing::info!(
        path = %path.display(),
        passed = report.is_valid(),
        error_count = report.error_count(),
        "Validation finished"
    );

    Outcome::Checked(report)
}

/// Validate `path` and write the text report to `out`.
///
/// Returns whether the configuration passed.
pub fn validate(path: &Path, out: &mut impl Write) -> io::Result<bool> {
    validate_with_format(path, OutputFormat::Text, out)
}

pub fn validate_with_format(path: &Path, format: OutputFormat, out: &mut impl Write) -> io::Result<bool> {
    let outcome = validate_path(path);
    render(&outcome, path, format, out)?;
    Ok(outcome.passed())
}
