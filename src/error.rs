//! Error types for loading and configuring a nakedret run.
//!
//! Every error is fatal to the run: nothing is reported when the inputs
//! cannot be loaded or the detector cannot be configured.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error for a nakedret run.
#[derive(Debug, Error)]
pub enum Error {
    /// The detector was asked to run without a usable configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// One of the inputs could not be resolved or parsed.
    #[error(transparent)]
    Input(#[from] InputError),
}

/// Failures while turning path arguments into syntax trees.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("{0} is not a valid directory")]
    InvalidDirectory(String),

    #[error("invalid file {0} specified")]
    InvalidFile(String),

    #[error("reading {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("walking {}: {source}", root.display())]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("{path}:{line}:{column}: syntax error")]
    Syntax {
        path: String,
        line: usize,
        column: usize,
    },

    #[error("loading Go grammar: {0}")]
    Grammar(#[from] tree_sitter::LanguageError),

    /// The parser gave up without producing a tree (cancelled or timed out).
    #[error("{0}: parser produced no tree")]
    NoTree(String),
}

/// Result alias used throughout the library.
pub type Result<T, E = Error> = std::result::Result<T, E>;
