//! nakedret - finds naked returns in long Go functions.
//!
//! A naked return is a `return` with no result expressions in a function
//! that names its results. In a short function that is fine; in a long one
//! the reader has to track every assignment to the named results to know
//! what comes back. nakedret reports every naked return in functions longer
//! than a configurable number of lines.
//!
//! # Architecture
//!
//! The codebase uses tree-sitter for AST-based analysis:
//!
//! - `analysis`: Loading path arguments and parsing them into Go syntax trees
//! - `detect`: The naked-return rule and the runner that drives it
//! - `config`: YAML config file and threshold resolution
//! - `report`: Output formatting (text, JSON, SARIF)
//! - `error`: Configuration and input errors

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detect;
pub mod error;
pub mod report;

pub use analysis::{get_analyzer, FunctionNode, LanguageAnalyzer, NodeKind, ParsedFile, SourceLoader};
pub use detect::{
    detect_naked_returns, DetectionResult, Diagnostic, NakedReturnDetector, Runner, ScanDepth,
};
pub use error::{Error, InputError, Result};
