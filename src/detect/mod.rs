//! Detection of naked returns in Go code.

mod naked_returns;
mod runner;
mod types;

pub use naked_returns::{detect_naked_returns, NakedReturnDetector, ScanDepth};
pub use runner::Runner;
pub use types::{DetectionResult, Diagnostic, RULE_ID};
