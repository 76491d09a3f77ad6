//! Source loader: turns path arguments into parsed syntax trees.
//!
//! Argument forms:
//! - none: the package in the current directory (`./`)
//! - `dir/...`: every directory below `dir`, `dir` included
//! - `dir`: the package in `dir`
//! - `file.go`: that single file
//!
//! As soon as one file argument is given the run is in file mode and
//! directory arguments are ignored.

use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::analysis::{LanguageAnalyzer, ParsedFile};
use crate::error::InputError;

/// Directory scanned when no arguments are given.
pub const DEFAULT_DIR: &str = "./";

/// Suffix requesting a recursive scan of a directory.
pub const RECURSIVE_SUFFIX: &str = "/...";

/// Inputs resolved from the command line, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inputs {
    /// Package directories to scan (non-recursively).
    pub directories: Vec<PathBuf>,
    /// Individual files to parse.
    pub files: Vec<PathBuf>,
}

impl Inputs {
    /// Whether any explicit file argument was given.
    pub fn file_mode(&self) -> bool {
        !self.files.is_empty()
    }
}

/// Loads and parses source files for one language.
pub struct SourceLoader {
    analyzer: &'static dyn LanguageAnalyzer,
}

impl SourceLoader {
    /// Create a loader parsing with `analyzer`.
    pub fn new(analyzer: &'static dyn LanguageAnalyzer) -> Self {
        Self { analyzer }
    }

    /// Resolve path arguments into directories and files.
    ///
    /// Nothing is parsed here; the only filesystem access is checking
    /// which arguments are directories and walking recursive ones.
    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> Result<Inputs, InputError> {
        let mut inputs = Inputs::default();

        if args.is_empty() {
            inputs.directories.push(PathBuf::from(DEFAULT_DIR));
            return Ok(inputs);
        }

        for arg in args {
            let arg = arg.as_ref();
            if let Some(root) = arg.strip_suffix(RECURSIVE_SUFFIX) {
                if !is_dir(root) {
                    return Err(InputError::InvalidDirectory(arg.to_string()));
                }
                for entry in WalkDir::new(root).sort_by_file_name() {
                    let entry = entry.map_err(|source| InputError::Walk {
                        root: PathBuf::from(root),
                        source,
                    })?;
                    if entry.file_type().is_dir() {
                        inputs.directories.push(entry.into_path());
                    }
                }
            } else if is_dir(arg) {
                inputs.directories.push(PathBuf::from(arg));
            } else if self.analyzer.handles_path(Path::new(arg)) {
                inputs.files.push(PathBuf::from(arg));
            } else {
                return Err(InputError::InvalidFile(arg.to_string()));
            }
        }

        Ok(inputs)
    }

    /// List the files to parse for resolved inputs.
    ///
    /// In file mode only the explicit files are used. Otherwise every
    /// source file directly inside each directory is listed, sorted by
    /// name within a directory.
    pub fn source_files(&self, inputs: &Inputs) -> Result<Vec<PathBuf>, InputError> {
        if inputs.file_mode() {
            if !inputs.directories.is_empty() {
                log::warn!(
                    "file arguments given; ignoring {} directory argument(s)",
                    inputs.directories.len()
                );
            }
            return Ok(inputs.files.clone());
        }

        let mut files = Vec::new();
        for dir in &inputs.directories {
            files.extend(self.package_files(dir)?);
        }
        Ok(files)
    }

    /// Source files directly inside `dir`.
    fn package_files(&self, dir: &Path) -> Result<Vec<PathBuf>, InputError> {
        let mut files = Vec::new();
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).sort_by_file_name() {
            let entry = entry.map_err(|source| InputError::Walk {
                root: dir.to_path_buf(),
                source,
            })?;
            if !entry.file_type().is_dir() && self.analyzer.handles_path(entry.path()) {
                files.push(entry.into_path());
            }
        }
        log::debug!("{}: {} source file(s)", dir.display(), files.len());
        Ok(files)
    }

    /// Parse files in parallel, keeping the input order.
    ///
    /// Any unreadable or unparseable file fails the whole load.
    pub fn parse_all(&self, files: &[PathBuf]) -> Result<Vec<ParsedFile>, InputError> {
        files
            .par_iter()
            .map(|path| self.analyzer.parse_file(path))
            .collect()
    }

    /// Resolve, list and parse in one step.
    pub fn load<S: AsRef<str>>(&self, args: &[S]) -> Result<Vec<ParsedFile>, InputError> {
        let inputs = self.resolve(args)?;
        log::debug!(
            "resolved {} director(ies), {} file(s)",
            inputs.directories.len(),
            inputs.files.len()
        );
        let files = self.source_files(&inputs)?;
        self.parse_all(&files)
    }
}

fn is_dir(path: &str) -> bool {
    std::fs::metadata(path)
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::get_analyzer;
    use std::fs;
    use tempfile::TempDir;

    fn loader() -> SourceLoader {
        SourceLoader::new(get_analyzer("go").unwrap())
    }

    fn path_str(p: &Path) -> String {
        p.to_string_lossy().to_string()
    }

    #[test]
    fn test_no_args_uses_current_dir() {
        let inputs = loader().resolve::<&str>(&[]).unwrap();
        assert_eq!(inputs.directories, vec![PathBuf::from("./")]);
        assert!(!inputs.file_mode());
    }

    #[test]
    fn test_recursive_suffix_collects_all_directories() {
        let temp = TempDir::new().unwrap();
        fs::create_dir_all(temp.path().join("a/b")).unwrap();
        fs::create_dir_all(temp.path().join(".hidden")).unwrap();
        fs::write(temp.path().join("a/x.go"), "package a\n").unwrap();

        let arg = format!("{}/...", path_str(temp.path()));
        let inputs = loader().resolve(&[arg]).unwrap();

        assert_eq!(inputs.directories.len(), 4);
        assert_eq!(inputs.directories[0], temp.path());
        assert!(inputs.directories.contains(&temp.path().join("a/b")));
        assert!(inputs.directories.contains(&temp.path().join(".hidden")));
    }

    #[test]
    fn test_recursive_suffix_requires_directory() {
        let temp = TempDir::new().unwrap();
        let arg = format!("{}/missing/...", path_str(temp.path()));

        let err = loader().resolve(&[arg.clone()]).unwrap_err();
        assert!(matches!(err, InputError::InvalidDirectory(ref a) if *a == arg));
    }

    #[test]
    fn test_non_go_file_is_rejected() {
        let err = loader().resolve(&["notes.txt"]).unwrap_err();
        assert_eq!(err.to_string(), "invalid file notes.txt specified");
    }

    #[test]
    fn test_file_mode_ignores_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("a.go"), "package p\n").unwrap();
        fs::write(temp.path().join("b.go"), "package p\n").unwrap();

        let single = path_str(&temp.path().join("a.go"));
        let dir = path_str(temp.path());
        let l = loader();
        let inputs = l.resolve(&[dir, single.clone()]).unwrap();
        assert!(inputs.file_mode());

        let files = l.source_files(&inputs).unwrap();
        assert_eq!(files, vec![PathBuf::from(single)]);
    }

    #[test]
    fn test_package_scan_is_sorted_and_flat() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("z.go"), "package p\n").unwrap();
        fs::write(temp.path().join("a_test.go"), "package p\n").unwrap();
        fs::write(temp.path().join("README.md"), "# p\n").unwrap();
        fs::create_dir(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/inner.go"), "package sub\n").unwrap();

        let l = loader();
        let inputs = l.resolve(&[path_str(temp.path())]).unwrap();
        let files = l.source_files(&inputs).unwrap();

        assert_eq!(
            files,
            vec![temp.path().join("a_test.go"), temp.path().join("z.go")]
        );
    }

    #[test]
    fn test_load_fails_on_unparseable_file() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("good.go"), "package p\n").unwrap();
        fs::write(temp.path().join("bad.go"), "package p\n\nfunc (\n").unwrap();

        let err = loader().load(&[path_str(temp.path())]).unwrap_err();
        assert!(matches!(err, InputError::Syntax { ref path, .. } if path.ends_with("bad.go")));
    }

    #[test]
    fn test_load_missing_go_file() {
        let temp = TempDir::new().unwrap();
        let missing = path_str(&temp.path().join("missing.go"));

        let err = loader().load(&[missing]).unwrap_err();
        assert!(matches!(err, InputError::Unreadable { .. }));
    }

    #[test]
    fn test_load_preserves_order() {
        let temp = TempDir::new().unwrap();
        for name in ["c.go", "a.go", "b.go"] {
            fs::write(temp.path().join(name), "package p\n").unwrap();
        }

        let parsed = loader().load(&[path_str(temp.path())]).unwrap();
        let names: Vec<_> = parsed
            .iter()
            .map(|p| Path::new(&p.path).file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a.go", "b.go", "c.go"]);
    }
}
