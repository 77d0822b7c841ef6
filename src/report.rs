//! Rendering of validation outcomes.

use std::io::{self, Write};
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::config::{ConfigError, ValidationError, ValidationReport};

/// Result of one validation run.
#[derive(Debug)]
pub enum Outcome {
    /// The document could not be loaded; no check ran.
    Aborted(ConfigError),

    /// Every catalog check ran.
    Checked(ValidationReport),
}

impl Outcome {
    pub fn passed(&self) -> bool {
        match self {
            Outcome::Aborted(_) => false,
            Outcome::Checked(report) => report.is_valid(),
        }
    }

    pub fn error_count(&self) -> usize {
        match self {
            Outcome::Aborted(_) => 1,
            Outcome::Checked(report) => report.error_count(),
        }
    }
}

/// Output format of the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One diagnostic line per error plus a summary line.
    #[default]
    Text,
    /// A single JSON object.
    Json,
}

/// Write `outcome` to `out` in the given format.
pub fn render(outcome: &Outcome, path: &Path, format: OutputFormat, out: &mut impl Write) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(outcome, out),
        OutputFormat::Json => render_json(outcome, path, out),
    }
}

fn render_text(outcome: &Outcome, out: &mut impl Write) -> io::Result<()> {
    let report = match outcome {
        Outcome::Aborted(err) => return writeln!(out, "ERROR: {err}"),
        Outcome::Checked(report) => report,
    };

    for error in report.errors() {
        writeln!(out, "ERROR: {error}")?;
    }

    if report.is_valid() {
        writeln!(out, "\nValidation PASSED: configuration looks correct.")
    } else {
        writeln!(out, "\nValidation FAILED with {} errors.", report.error_count())
    }
}

#[derive(Serialize)]
struct JsonFinding<'a> {
    #[serde(flatten)]
    error: &'a ValidationError,
    message: String,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    path: String,
    passed: bool,
    error_count: usize,
    errors: Vec<JsonFinding<'a>>,
    fatal: Option<String>,
}

fn render_json(outcome: &Outcome, path: &Path, out: &mut impl Write) -> io::Result<()> {
    let (errors, fatal) = match outcome {
        Outcome::Aborted(err) => (Vec::new(), Some(err.to_string())),
        Outcome::Checked(report) => (
            report
                .errors()
                .iter()
                .map(|error| JsonFinding {
                    error,
                    message: error.to_string(),
                })
                .collect(),
            None,
        ),
    };

    let doc = JsonReport {
        path: path.display().to_string(),
        passed: outcome.passed(),
        error_count: outcome.error_count(),
        errors,
        fatal,
    };

    serde_json::to_writer_pretty(&mut *out, &doc)?;
    writeln!(out)
}
