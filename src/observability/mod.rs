//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! loader / validation / driver
//!     → logging.rs (structured log events on stderr)
//! ```

pub mod logging;
