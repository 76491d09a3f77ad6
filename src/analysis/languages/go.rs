//! Go language analyzer using tree-sitter.
//!
//! Parses `.go` files into [`ParsedFile`]s. Trees with error recovery
//! nodes are rejected, so every tree handed to a detection rule is a
//! complete parse.

use tree_sitter::{Language, Node, Parser};

use crate::analysis::{LanguageAnalyzer, ParsedFile, Span};
use crate::error::InputError;

/// Go language analyzer.
pub struct GoAnalyzer {
    language: Language,
}

impl GoAnalyzer {
    /// Create a new Go analyzer.
    pub fn new() -> Self {
        Self {
            language: tree_sitter_go::LANGUAGE.into(),
        }
    }

    /// Create a new parser for this thread.
    fn create_parser(&self) -> Result<Parser, InputError> {
        let mut parser = Parser::new();
        parser.set_language(&self.language)?;
        Ok(parser)
    }
}

impl Default for GoAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageAnalyzer for GoAnalyzer {
    fn language_id(&self) -> &'static str {
        "go"
    }

    fn file_extensions(&self) -> &'static [&'static str] {
        &["go"]
    }

    fn parse(&self, display_path: &str, source: Vec<u8>) -> Result<ParsedFile, InputError> {
        let mut parser = self.create_parser()?;
        let tree = parser
            .parse(&source, None)
            .ok_or_else(|| InputError::NoTree(display_path.to_string()))?;

        if let Some(bad) = first_error(tree.root_node()) {
            let span = Span::from_node(bad);
            return Err(InputError::Syntax {
                path: display_path.to_string(),
                line: span.start_line,
                column: span.start_col,
            });
        }

        log::debug!("parsed {} ({} bytes)", display_path, source.len());

        Ok(ParsedFile {
            tree,
            source,
            path: display_path.to_string(),
        })
    }
}

/// First ERROR or MISSING node in pre-order, if any.
fn first_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        if !node.has_error() {
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev());
    }

    // has_error was set but no node carries it; point at the file start.
    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_file() {
        let analyzer = GoAnalyzer::new();
        let source = br#"
package main

func main() {
    println("hello")
}
"#;

        let parsed = analyzer.parse("main.go", source.to_vec()).unwrap();
        assert_eq!(parsed.path, "main.go");
        assert_eq!(parsed.root().kind(), "source_file");
        assert!(!parsed.root().has_error());
    }

    #[test]
    fn test_parse_rejects_syntax_errors() {
        let analyzer = GoAnalyzer::new();
        let source = b"package main\n\nfunc broken( {\n";

        let err = analyzer.parse("broken.go", source.to_vec()).unwrap_err();
        match err {
            InputError::Syntax { path, line, .. } => {
                assert_eq!(path, "broken.go");
                assert!(line >= 1, "line should be 1-indexed, got {}", line);
            }
            other => panic!("expected syntax error, got {:?}", other),
        }
    }

    #[test]
    fn test_handles_go_extension_only() {
        let analyzer = GoAnalyzer::new();
        assert_eq!(analyzer.language_id(), "go");
        assert!(analyzer.handles_extension("go"));
        assert!(!analyzer.handles_extension("rs"));
        assert!(analyzer.handles_path(std::path::Path::new("pkg/a_test.go")));
        assert!(!analyzer.handles_path(std::path::Path::new("README.md")));
    }
}
