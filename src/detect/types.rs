//! Core types for detection results.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Rule identifier used in machine-readable output.
pub const RULE_ID: &str = "naked_return";

/// A naked return inside a long function with named results.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// File containing the return, as given to the loader.
    pub file: String,
    /// Line of the return statement (1-indexed).
    pub line: usize,
    /// Name of the enclosing function or method.
    pub function: String,
    /// Line span of the enclosing function (end line minus start line).
    pub span: usize,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} naked returns on {} line function",
            self.file, self.line, self.function, self.span
        )
    }
}

/// Results of running detection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    pub diagnostics: Vec<Diagnostic>,
    /// Number of files scanned
    pub scanned: usize,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another result into this one, keeping order.
    pub fn merge(&mut self, other: DetectionResult) {
        self.diagnostics.extend(other.diagnostics);
        self.scanned += other.scanned;
    }

    pub fn has_findings(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}
