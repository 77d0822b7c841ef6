//! Configuration loading from disk.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml::Table;

/// Fatal errors that abort a validation run before any check.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found at {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse TOML file: {detail}")]
    Parse { path: PathBuf, detail: String },
}

impl ConfigError {
    pub fn path(&self) -> &Path {
        match self {
            ConfigError::NotFound { path } | ConfigError::Parse { path, .. } => path,
        }
    }
}

/// Load a TOML document into a table of sections.
pub fn load_document(path: &Path) -> Result<Table, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound {
            path: path.to_path_buf(),
        });
    }

    // Anything past the existence check that keeps the file from parsing
    // (unreadable path, invalid UTF-8, bad syntax) is a parse failure.
    let parse_error = |detail: String| ConfigError::Parse {
        path: path.to_path_buf(),
        detail,
    };

    let bytes = fs::read(path).map_err(|e| parse_error(e.to_string()))?;
    let content = String::from_utf8(bytes).map_err(|e| parse_error(e.to_string()))?;

    let doc: Table = toml::from_str(&content).map_err(|e| parse_error(parse_detail(&content, &e)))?;

    tracing::debug!(path = %path.display(), sections = doc.len(), "Configuration document loaded");
    Ok(doc)
}

/// Single-line rendering of a parser diagnostic.
fn parse_detail(content: &str, err: &toml::de::Error) -> String {
    let message = err
        .message()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ");

    match err.span() {
        Some(span) => {
            let (line, column) = line_column(content, span.start);
            format!("{message} (line {line}, column {column})")
        }
        None => message,
    }
}

/// 1-based line and column of a byte offset.
fn line_column(content: &str, offset: usize) -> (usize, usize) {
    let mut offset = offset.min(content.len());
    while !content.is_char_boundary(offset) {
        offset -= 1;
    }
    let before = &content[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = before[line_start..].chars().count() + 1;
    (line, column)
}
