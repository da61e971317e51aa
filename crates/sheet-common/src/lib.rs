//! Common utilities for the git barcode sheet generator.
//!
//! This crate provides shared infrastructure used by all sheet components:
//! - **Diagnostics** - component-tagged, colored log lines on stderr

pub mod diagnostics;

pub use diagnostics::{Severity, format_line, report, warn};
