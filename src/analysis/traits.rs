//! Core traits for language analysis.

use std::path::Path;

use crate::error::InputError;

/// Holds a parsed tree-sitter tree and associated metadata.
///
/// Produced once by the loader and read-only afterwards. Detection rules
/// walk `tree` and resolve positions and identifier text through it.
pub struct ParsedFile {
    /// The tree-sitter parse tree.
    pub tree: tree_sitter::Tree,
    /// The original source code (kept for node text extraction).
    pub source: Vec<u8>,
    /// The file path as it appears in diagnostics.
    pub path: String,
}

impl ParsedFile {
    /// Get text for a tree-sitter node.
    pub fn node_text(&self, node: tree_sitter::Node) -> &str {
        node.utf8_text(&self.source).unwrap_or("")
    }

    /// Root node of the tree.
    pub fn root(&self) -> tree_sitter::Node<'_> {
        self.tree.root_node()
    }
}

impl std::fmt::Debug for ParsedFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParsedFile")
            .field("path", &self.path)
            .field("bytes", &self.source.len())
            .finish()
    }
}

/// Language-specific analyzer trait.
///
/// # Thread Safety
///
/// Note: tree_sitter::Parser is not Sync, so implementations should
/// create parsers as needed or use thread-local storage.
pub trait LanguageAnalyzer: Send + Sync {
    /// Returns the language identifier (e.g., "go").
    fn language_id(&self) -> &'static str;

    /// Returns file extensions this analyzer handles (without dot).
    fn file_extensions(&self) -> &'static [&'static str];

    /// Parse source text into a tree.
    ///
    /// `display_path` is recorded on the result and used in diagnostics.
    /// A tree containing error or missing nodes is rejected.
    fn parse(&self, display_path: &str, source: Vec<u8>) -> Result<ParsedFile, InputError>;

    /// Read and parse a file from disk.
    fn parse_file(&self, path: &Path) -> Result<ParsedFile, InputError> {
        let source = std::fs::read(path).map_err(|source| InputError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse(&display_path(path), source)
    }

    /// Check if this analyzer handles the given file extension.
    fn handles_extension(&self, ext: &str) -> bool {
        self.file_extensions().contains(&ext)
    }

    /// Check if this analyzer handles the file at `path`.
    fn handles_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| self.handles_extension(e))
            .unwrap_or(false)
    }
}

/// Render a path the way it should appear in diagnostics.
///
/// A leading `./` component is dropped, so files found under the default
/// directory print as `a.go` rather than `./a.go`.
pub fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .to_string_lossy()
        .to_string()
}
