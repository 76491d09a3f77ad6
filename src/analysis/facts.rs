//! Typed views over the Go syntax tree.
//!
//! The tree-sitter tree is untyped; these views give the detector the few
//! shapes it cares about (functions, their results, their bodies, return
//! statements) without copying anything out of the tree.

use std::fmt;

use tree_sitter::Node;

use super::ParsedFile;

/// Source location span with byte offsets and line/column positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (0-indexed).
    pub start_byte: usize,
    /// End byte offset (0-indexed, exclusive).
    pub end_byte: usize,
    /// Start line (1-indexed).
    pub start_line: usize,
    /// Start column (1-indexed).
    pub start_col: usize,
    /// End line (1-indexed).
    pub end_line: usize,
    /// End column (1-indexed).
    pub end_col: usize,
}

impl Span {
    /// Create a span from a tree-sitter node.
    pub fn from_node(node: Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_byte: node.start_byte(),
            end_byte: node.end_byte(),
            start_line: start.row + 1, // tree-sitter is 0-indexed
            start_col: start.column + 1,
            end_line: end.row + 1,
            end_col: end.column + 1,
        }
    }

    /// Number of line breaks between start and end.
    ///
    /// A function written on a single line has a line span of 0.
    pub fn line_span(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.start_line, self.start_col)
    }
}

/// Node kinds the analysis dispatches on.
///
/// Everything the detector does not care about maps to `Other` and is
/// only descended into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    FunctionDeclaration,
    MethodDeclaration,
    FunctionLiteral,
    ReturnStatement,
    Block,
    StatementList,
    Comment,
    Other,
}

impl NodeKind {
    /// Classify a tree-sitter node.
    pub fn of(node: Node) -> Self {
        match node.kind() {
            "function_declaration" => NodeKind::FunctionDeclaration,
            "method_declaration" => NodeKind::MethodDeclaration,
            "func_literal" => NodeKind::FunctionLiteral,
            "return_statement" => NodeKind::ReturnStatement,
            "block" => NodeKind::Block,
            "statement_list" => NodeKind::StatementList,
            "comment" => NodeKind::Comment,
            _ => NodeKind::Other,
        }
    }

    /// Convert to a string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::FunctionDeclaration => "function",
            NodeKind::MethodDeclaration => "method",
            NodeKind::FunctionLiteral => "function literal",
            NodeKind::ReturnStatement => "return",
            NodeKind::Block => "block",
            NodeKind::StatementList => "statement list",
            NodeKind::Comment => "comment",
            NodeKind::Other => "other",
        }
    }

    /// Functions, methods and function literals.
    pub fn is_function(&self) -> bool {
        matches!(
            self,
            NodeKind::FunctionDeclaration | NodeKind::MethodDeclaration | NodeKind::FunctionLiteral
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A function declaration, method declaration or function literal.
#[derive(Debug, Clone, Copy)]
pub struct FunctionNode<'tree> {
    node: Node<'tree>,
    kind: NodeKind,
}

impl<'tree> FunctionNode<'tree> {
    /// Wrap `node` if it is a function of any kind.
    pub fn from_node(node: Node<'tree>) -> Option<Self> {
        let kind = NodeKind::of(node);
        kind.is_function().then_some(Self { node, kind })
    }

    /// The underlying tree-sitter node.
    pub fn node(&self) -> Node<'tree> {
        self.node
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// Declared name. Function literals have none.
    pub fn name<'a>(&self, parsed: &'a ParsedFile) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .map(|n| parsed.node_text(n))
            .filter(|name| !name.is_empty())
    }

    /// Every identifier bound in the result list, in declaration order.
    ///
    /// `func f() (a, b int, err error)` yields `a`, `b`, `err`;
    /// `func f() (int, error)` and `func f() error` yield nothing.
    pub fn named_results<'a>(&self, parsed: &'a ParsedFile) -> Vec<&'a str> {
        let Some(result) = self.node.child_by_field_name("result") else {
            return Vec::new();
        };
        if result.kind() != "parameter_list" {
            return Vec::new();
        }

        let mut names = Vec::new();
        let mut cursor = result.walk();
        for field in result.named_children(&mut cursor) {
            let mut field_cursor = field.walk();
            for ident in field.children_by_field_name("name", &mut field_cursor) {
                let name = parsed.node_text(ident);
                if !name.is_empty() {
                    names.push(name);
                }
            }
        }
        names
    }

    /// The body block, absent for forward or external declarations.
    pub fn body(&self) -> Option<Node<'tree>> {
        self.node.child_by_field_name("body")
    }

    /// Source extent of the whole declaration.
    pub fn span(&self) -> Span {
        Span::from_node(self.node)
    }
}

/// Statements directly inside a block, in source order.
///
/// Comments are skipped. Older grammars put statements straight under the
/// block; newer ones wrap them in a `statement_list`, which is flattened.
pub fn block_statements(block: Node<'_>) -> Vec<Node<'_>> {
    let mut statements = Vec::new();
    let mut cursor = block.walk();
    for child in block.named_children(&mut cursor) {
        match NodeKind::of(child) {
            NodeKind::Comment => {}
            NodeKind::StatementList => {
                let mut list_cursor = child.walk();
                statements.extend(
                    child
                        .named_children(&mut list_cursor)
                        .filter(|n| NodeKind::of(*n) != NodeKind::Comment),
                );
            }
            _ => statements.push(child),
        }
    }
    statements
}

/// A return statement with no result expressions.
pub fn is_bare_return(node: Node) -> bool {
    if NodeKind::of(node) != NodeKind::ReturnStatement {
        return false;
    }
    let mut cursor = node.walk();
    let has_results = node
        .named_children(&mut cursor)
        .any(|n| NodeKind::of(n) != NodeKind::Comment);
    !has_results
}
