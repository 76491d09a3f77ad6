//! Integration tests for the full detection pipeline.
//!
//! These tests run the loader and detector together against the Go
//! fixtures in `testdata/pkg`.

use std::path::PathBuf;

use nakedret::detect::{DetectionResult, Runner, ScanDepth};
use nakedret::error::{Error, InputError};
use tempfile::TempDir;

fn testdata_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

fn pkg_arg(suffix: &str) -> String {
    format!("{}{}", testdata_path().join("pkg").to_string_lossy(), suffix)
}

fn run(max_lines: u32, args: &[String]) -> DetectionResult {
    Runner::new(Some(max_lines))
        .run(args)
        .expect("detection should succeed")
}

/// (file name, function, line, span) for each diagnostic.
fn summary(result: &DetectionResult) -> Vec<(String, String, usize, usize)> {
    result
        .diagnostics
        .iter()
        .map(|d| {
            let name = PathBuf::from(&d.file)
                .file_name()
                .unwrap()
                .to_string_lossy()
                .to_string();
            (name, d.function.clone(), d.line, d.span)
        })
        .collect()
}

fn entry(file: &str, func: &str, line: usize, span: usize) -> (String, String, usize, usize) {
    (file.to_string(), func.to_string(), line, span)
}

#[test]
fn test_package_directory() {
    let result = run(5, &[pkg_arg("")]);

    assert_eq!(result.scanned, 2, "clean.go and naked.go, not sub/");
    assert_eq!(
        summary(&result),
        vec![
            entry("naked.go", "Split", 10, 7),
            entry("naked.go", "Close", 39, 8),
        ]
    );
}

#[test]
fn test_recursive_package_pattern() {
    let result = run(5, &[pkg_arg("/...")]);

    assert_eq!(result.scanned, 3);
    assert_eq!(
        summary(&result),
        vec![
            entry("naked.go", "Split", 10, 7),
            entry("naked.go", "Close", 39, 8),
            entry("deep.go", "Walk", 10, 8),
        ]
    );
}

#[test]
fn test_higher_threshold() {
    let result = run(7, &[pkg_arg("/...")]);

    assert_eq!(
        summary(&result),
        vec![entry("naked.go", "Close", 39, 8), entry("deep.go", "Walk", 10, 8)]
    );

    let result = run(8, &[pkg_arg("/...")]);
    assert!(result.diagnostics.is_empty());
}

#[test]
fn test_file_mode() {
    let deep = testdata_path()
        .join("pkg/sub/deep.go")
        .to_string_lossy()
        .to_string();
    let result = run(5, &[pkg_arg(""), deep.clone()]);

    assert_eq!(result.scanned, 1);
    assert_eq!(summary(&result), vec![entry("deep.go", "Walk", 10, 8)]);
    assert_eq!(result.diagnostics[0].file, deep);
}

#[test]
fn test_nested_scan_depth() {
    let result = Runner::new(Some(5))
        .scan_depth(ScanDepth::Nested)
        .run(&[pkg_arg("")])
        .unwrap();

    assert_eq!(
        summary(&result),
        vec![
            entry("naked.go", "Split", 10, 7),
            entry("naked.go", "Close", 34, 8),
            entry("naked.go", "Close", 39, 8),
        ]
    );
}

#[test]
fn test_repeated_runs_are_identical() {
    let first = run(5, &[pkg_arg("/...")]);
    let second = run(5, &[pkg_arg("/...")]);
    assert_eq!(first.diagnostics, second.diagnostics);
}

#[test]
fn test_unparseable_file_aborts_run() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("a.go"),
        "package p\n\nfunc f() (n int) {\n\t_ = 1\n\t_ = 2\n\t_ = 3\n\t_ = 4\n\t_ = 5\n\treturn\n}\n",
    )
    .unwrap();
    std::fs::write(temp.path().join("b.go"), "package p\n\nfunc g( {\n").unwrap();

    let err = Runner::new(Some(5))
        .run(&[temp.path().to_string_lossy().to_string()])
        .unwrap_err();
    match err {
        Error::Input(InputError::Syntax { path, .. }) => assert!(path.ends_with("b.go")),
        other => panic!("expected syntax error, got {:?}", other),
    }
}

#[test]
fn test_invalid_recursive_directory() {
    let temp = TempDir::new().unwrap();
    let arg = format!("{}/nope/...", temp.path().to_string_lossy());

    let err = Runner::new(Some(5)).run(&[arg.clone()]).unwrap_err();
    assert_eq!(err.to_string(), format!("{} is not a valid directory", arg));
}

#[test]
fn test_unset_threshold() {
    let err = Runner::new(None).run(&[pkg_arg("")]).unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
}
