//! Rendering of validation outcomes.
//!
//! Two presentation modes share the same core results: a one-line pass/fail
//! status plus a directory summary block, and a detailed per-kind message
//! with an optional dump of the parsed content.

use std::io::{self, Write};
use std::path::Path;

use crate::scanner::DirectorySummary;
use crate::validator::{read_document, FileReport, ValidationError, Verdict};

/// One-line pass/fail status for a single file.
pub fn status_line(report: &FileReport) -> String {
    if report.verdict.is_valid() {
        format!("'{}' is a valid JSON file", report.path.display())
    } else {
        format!("'{}' is NOT a valid JSON file", report.path.display())
    }
}

/// Detailed status message naming the failure kind, or the valid /
/// valid-but-empty confirmation.
pub fn verify_message(report: &FileReport) -> String {
    match &report.verdict {
        Verdict::Valid => "JSON file is valid".to_string(),
        Verdict::EmptyButValid => "Warning: JSON file is valid but empty".to_string(),
        Verdict::Invalid(err) => invalid_message(&report.path, err),
    }
}

fn invalid_message(path: &Path, err: &ValidationError) -> String {
    match err {
        ValidationError::NotFound(_) => {
            format!("Error: File '{}' does not exist", path.display())
        }
        ValidationError::Empty(_) => format!("Error: File '{}' is empty", path.display()),
        ValidationError::Encoding(_) => "Error: File is not valid UTF-8 encoded".to_string(),
        ValidationError::Syntax { reason, .. } | ValidationError::UnexpectedEof { reason, .. } => {
            format!("Error: Invalid JSON syntax - {reason}")
        }
        ValidationError::InvalidRootType(_) => {
            "Error: JSON root must be an object or array".to_string()
        }
        other => format!("Error: {other}"),
    }
}

/// Write the directory summary block: header, counts, then either the
/// all-clear line or the invalid paths in scan order.
pub fn write_summary(w: &mut impl Write, summary: &DirectorySummary) -> io::Result<()> {
    if summary.no_files_found() {
        writeln!(w, "No .json files found in '{}'", summary.directory.display())?;
        return Ok(());
    }

    writeln!(w)?;
    writeln!(w, "Validation Summary for '{}':", summary.directory.display())?;
    writeln!(w, "Total JSON files checked: {}", summary.total)?;
    writeln!(w, "Valid JSON files: {}", summary.valid)?;
    writeln!(w, "Invalid JSON files: {}", summary.invalid.len())?;

    if summary.invalid.is_empty() {
        writeln!(w, "All JSON files are valid!")?;
    } else {
        writeln!(w)?;
        writeln!(w, "Invalid JSON files:")?;
        for path in &summary.invalid {
            writeln!(w, "- {}", path.display())?;
        }
    }
    Ok(())
}

/// Re-read and re-render an already-validated file with 2-space indentation.
/// Object keys keep their original encounter order.
pub fn pretty_content(path: &Path) -> Result<String, ValidationError> {
    let value = read_document(path)?;
    serde_json::to_string_pretty(&value).map_err(|err| ValidationError::Unexpected(err.into()))
}
