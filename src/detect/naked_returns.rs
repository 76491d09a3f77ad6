//! Detection of naked returns in long functions.
//!
//! A function qualifies when it names at least one result, has a body and
//! spans more lines than the configured maximum. Every bare `return` in
//! its body is then reported: in a long function it silently yields
//! whatever the named results hold at that point.
//!
//! Only statements directly in the body are inspected by default, so a
//! bare return inside an `if` or `for` block is not reported. Use
//! [`ScanDepth::Nested`] to look inside nested blocks as well.

use rayon::prelude::*;
use tree_sitter::Node;

use crate::analysis::{
    block_statements, is_bare_return, walk, FunctionNode, NodeKind, ParsedFile, Span, Visitor,
};
use crate::error::{Error, Result};

use super::Diagnostic;

/// How far into a function body to look for bare returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScanDepth {
    /// Only the body's top-level statement list.
    #[default]
    Direct,
    /// Every nested block, stopping at function literals.
    Nested,
}

/// Finds naked returns in functions longer than `max_lines`.
#[derive(Debug, Clone)]
pub struct NakedReturnDetector {
    max_lines: usize,
    scan_depth: ScanDepth,
}

impl NakedReturnDetector {
    /// Create a detector for the given maximum function length.
    ///
    /// Fails with a configuration error when no maximum is set.
    pub fn new(max_lines: Option<u32>) -> Result<Self> {
        let max_lines = max_lines.ok_or_else(|| {
            Error::Configuration("maximum function length is not set".to_string())
        })?;
        Ok(Self {
            max_lines: max_lines as usize,
            scan_depth: ScanDepth::default(),
        })
    }

    /// Set how deep function bodies are scanned.
    pub fn scan_depth(mut self, depth: ScanDepth) -> Self {
        self.scan_depth = depth;
        self
    }

    pub fn max_lines(&self) -> usize {
        self.max_lines
    }

    /// Check several files.
    ///
    /// Files are checked in parallel; diagnostics come back in file order,
    /// then in source order within each file.
    pub fn check_files(&self, files: &[ParsedFile]) -> Vec<Diagnostic> {
        files
            .par_iter()
            .map(|parsed| self.check_file(parsed))
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    /// Check every function in one file, nested ones included.
    pub fn check_file(&self, parsed: &ParsedFile) -> Vec<Diagnostic> {
        let mut visitor = FileChecker {
            detector: self,
            parsed,
            diagnostics: Vec::new(),
        };
        walk(&mut visitor, parsed.root());
        visitor.diagnostics
    }

    fn check_function(
        &self,
        parsed: &ParsedFile,
        func: FunctionNode<'_>,
        out: &mut Vec<Diagnostic>,
    ) {
        let Some(body) = func.body() else {
            return;
        };
        if func.named_results(parsed).is_empty() {
            return;
        }

        let span = func.span().line_span();
        if span <= self.max_lines {
            return;
        }

        // Literals qualify like any function but have no name to report.
        let Some(name) = func.name(parsed) else {
            return;
        };

        for ret in self.bare_returns(body) {
            out.push(Diagnostic {
                file: parsed.path.clone(),
                line: Span::from_node(ret).start_line,
                function: name.to_string(),
                span,
            });
        }
    }

    fn bare_returns<'tree>(&self, body: Node<'tree>) -> Vec<Node<'tree>> {
        match self.scan_depth {
            ScanDepth::Direct => block_statements(body)
                .into_iter()
                .filter(|stmt| is_bare_return(*stmt))
                .collect(),
            ScanDepth::Nested => nested_bare_returns(body),
        }
    }
}

/// Bare returns anywhere under `body`, skipping function literals.
fn nested_bare_returns(body: Node<'_>) -> Vec<Node<'_>> {
    let mut found = Vec::new();
    let mut stack = vec![body];
    while let Some(node) = stack.pop() {
        if is_bare_return(node) {
            found.push(node);
            continue;
        }
        let mut cursor = node.walk();
        let children: Vec<_> = node
            .named_children(&mut cursor)
            .filter(|child| NodeKind::of(*child) != NodeKind::FunctionLiteral)
            .collect();
        stack.extend(children.into_iter().rev());
    }
    found
}

struct FileChecker<'a> {
    detector: &'a NakedReturnDetector,
    parsed: &'a ParsedFile,
    diagnostics: Vec<Diagnostic>,
}

impl<'a> Visitor<'a> for FileChecker<'a> {
    fn visit_function(&mut self, func: FunctionNode<'a>) {
        self.detector
            .check_function(self.parsed, func, &mut self.diagnostics);
    }
}

/// Detect naked returns across `files`.
///
/// `max_lines` must be set; an unset maximum is a configuration error and
/// no file is inspected.
pub fn detect_naked_returns(
    files: &[ParsedFile],
    max_lines: Option<u32>,
) -> Result<Vec<Diagnostic>> {
    let detector = NakedReturnDetector::new(max_lines)?;
    Ok(detector.check_files(files))
}
