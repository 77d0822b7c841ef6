//! CMS Configuration Validator
//!
//! Checks that a CMS `cms.toml` carries every required field with the right
//! type and a well-shaped `[services]` topology.
//!
//! # Pipeline
//!
//! ```text
//!   cms.toml ──▶ loader ──▶ field checks + topology check ──▶ report ──▶ exit code
//!                  │
//!                  └── not found / unreadable / parse error ──▶ single ERROR line, exit 1
//! ```
//!
//! Diagnostics go to stdout, logs to stderr.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;

use cms_config_validator::observability::logging::init_logging;
use cms_config_validator::{validate_with_format, OutputFormat};

const USAGE: &str = "Usage: cms-config-validator <path-to-cms.toml>";

#[derive(Parser)]
#[command(name = "cms-config-validator")]
#[command(version, about = "Validate the shape and types of a CMS configuration file", long_about = None)]
struct Cli {
    /// Path to the configuration file
    config: PathBuf,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Arguments after the config path are accepted and ignored
    #[arg(hide = true)]
    ignored: Vec<String>,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            ErrorKind::MissingRequiredArgument => {
                println!("{USAGE}");
                return ExitCode::FAILURE;
            }
            _ => {
                eprint!("{}", e.render());
                println!("{USAGE}");
                return ExitCode::FAILURE;
            }
        },
    };

    init_logging();

    if !cli.ignored.is_empty() {
        tracing::debug!(ignored = ?cli.ignored, "Ignoring extra arguments");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = validate_with_format(&cli.config, cli.format, &mut out);
    let passed = match result.and_then(|passed| out.flush().map(|()| passed)) {
        Ok(passed) => passed,
        Err(e) => {
            tracing::error!(error = %e, "Failed to write report");
            false
        }
    };

    if passed {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
