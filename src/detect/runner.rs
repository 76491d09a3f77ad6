//! Detection runner: loads sources and runs the naked-return check.

use crate::analysis::{get_analyzer, SourceLoader};
use crate::error::{Error, Result};

use super::{DetectionResult, NakedReturnDetector, ScanDepth};

/// Executes detection against a set of path arguments.
pub struct Runner {
    max_lines: Option<u32>,
    scan_depth: ScanDepth,
}

impl Runner {
    /// Create a new detection runner.
    pub fn new(max_lines: Option<u32>) -> Self {
        Self {
            max_lines,
            scan_depth: ScanDepth::default(),
        }
    }

    /// Set how deep function bodies are scanned.
    pub fn scan_depth(mut self, depth: ScanDepth) -> Self {
        self.scan_depth = depth;
        self
    }

    /// Load every source named by `args` and check it.
    ///
    /// The configuration is validated before anything is loaded, and any
    /// load failure aborts the run with no partial result.
    pub fn run<S: AsRef<str>>(&self, args: &[S]) -> Result<DetectionResult> {
        let detector = NakedReturnDetector::new(self.max_lines)?.scan_depth(self.scan_depth);

        let analyzer = get_analyzer("go")
            .ok_or_else(|| Error::Configuration("no Go analyzer registered".to_string()))?;
        let files = SourceLoader::new(analyzer).load(args)?;
        log::debug!(
            "checking {} file(s) with max length {}",
            files.len(),
            detector.max_lines()
        );

        Ok(DetectionResult {
            diagnostics: detector.check_files(&files),
            scanned: files.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::InputError;
    use tempfile::TempDir;

    const LONG: &str = r#"package main

func parse(s string) (n int, err error) {
	for _, c := range s {
		n = n*10 + int(c-'0')
	}
	if n < 0 {
		n = 0
	}
	return
}
"#;

    #[test]
    fn test_runner_basic() {
        let temp = TempDir::new().unwrap();
        let main_go = temp.path().join("main.go");
        std::fs::write(&main_go, LONG).unwrap();

        let runner = Runner::new(Some(5));
        let result = runner
            .run(&[main_go.to_string_lossy().to_string()])
            .unwrap();

        assert_eq!(result.scanned, 1);
        assert_eq!(result.diagnostics.len(), 1);
        assert_eq!(result.diagnostics[0].function, "parse");
        assert_eq!(result.diagnostics[0].line, 10);
        assert_eq!(result.diagnostics[0].span, 8);
    }

    #[test]
    fn test_runner_rejects_unset_threshold_before_loading() {
        // The path does not exist; a configuration error must win.
        let runner = Runner::new(None);
        let err = runner.run(&["does/not/exist/..."]).unwrap_err();
        assert!(matches!(err, Error::Configuration(_)));
    }

    #[test]
    fn test_runner_propagates_input_errors() {
        let runner = Runner::new(Some(5));
        let err = runner.run(&["main.py"]).unwrap_err();
        assert!(matches!(err, Error::Input(InputError::InvalidFile(_))));
    }
}
