//! Language-specific analyzer implementations.

mod go;

pub use go::GoAnalyzer;

use super::LanguageAnalyzer;
use once_cell::sync::OnceCell;

/// Static storage for Go analyzer.
static GO_ANALYZER: OnceCell<GoAnalyzer> = OnceCell::new();

/// Register all available language analyzers.
///
/// This is idempotent - calling it multiple times is safe.
pub fn register_analyzers() {
    GO_ANALYZER.get_or_init(GoAnalyzer::new);
}

/// Get an analyzer for the given file extension (without dot).
///
/// Returns None if no analyzer is registered for the extension.
pub fn get_analyzer(ext: &str) -> Option<&'static dyn LanguageAnalyzer> {
    register_analyzers();

    match ext {
        "go" => GO_ANALYZER.get().map(|a| a as &'static dyn LanguageAnalyzer),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_analyzer() {
        let analyzer = get_analyzer("go").expect("go analyzer registered");
        assert_eq!(analyzer.language_id(), "go");
        assert!(get_analyzer("py").is_none());
        assert!(get_analyzer("").is_none());
    }
}
