//! Diagnostic log lines with colored terminal output.
//!
//! Every recoverable problem (a symbol that cannot be encoded, a missing bold
//! font) is reported as one line on stderr, tagged with the component that
//! hit it. Fatal problems are not reported here; they travel up as errors.

use owo_colors::OwoColorize;

/// Prefix shared by every diagnostic line.
const PROGRAM: &str = "git-barcode-sheet";

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Progress information.
    Info,
    /// A visual element was omitted, processing continued.
    Warning,
}

impl Severity {
    const fn marker(self) -> &'static str {
        match self {
            Self::Info => "·",
            Self::Warning => "⚠",
        }
    }
}

/// Build the uncolored text of a diagnostic line.
///
/// # Example
/// ```
/// use sheet_common::{Severity, format_line};
///
/// let line = format_line(Severity::Warning, "cell", "QR encode error");
/// assert_eq!(line, "[git-barcode-sheet cell] ⚠ QR encode error");
/// ```
#[must_use]
pub fn format_line(severity: Severity, component: &str, message: &str) -> String {
    format!("[{PROGRAM} {component}] {} {message}", severity.marker())
}

/// Write a diagnostic line to stderr.
pub fn report(severity: Severity, component: &str, message: &str) {
    let line = format_line(severity, component, message);
    match severity {
        Severity::Info => eprintln!("{}", line.dimmed()),
        Severity::Warning => eprintln!("{}", line.yellow()),
    }
}

/// Report a warning for `component`.
pub fn warn(component: &str, message: &str) {
    report(Severity::Warning, component, message);
}
