//! AST-backed code analysis module.
//!
//! This module owns everything between path arguments and a walkable
//! syntax tree:
//! - Loading: resolving arguments into package directories and files
//! - Parsing: tree-sitter grammars behind the `LanguageAnalyzer` trait
//! - Views: typed wrappers (`FunctionNode`, `NodeKind`) over raw nodes
//! - Traversal: a `Visitor` with per-kind hooks
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────┐     ┌───────────────┐
//! │ Path arguments  │────▶│ SourceLoader │────▶│ ParsedFile    │
//! └─────────────────┘     │ (GoAnalyzer) │     │ (tree, source,│
//!                         └──────────────┘     │  path)        │
//!                                              └───────────────┘
//!                                                      │
//!                                                      ▼
//!                         ┌──────────────┐     ┌───────────────┐
//!                         │ Detection    │◀────│ walk/Visitor  │
//!                         │ Rules        │     │ FunctionNode  │
//!                         └──────────────┘     └───────────────┘
//! ```

mod facts;
mod languages;
mod loader;
mod traits;
mod visit;

pub use facts::{block_statements, is_bare_return, FunctionNode, NodeKind, Span};
pub use languages::{get_analyzer, register_analyzers, GoAnalyzer};
pub use loader::{Inputs, SourceLoader, DEFAULT_DIR, RECURSIVE_SUFFIX};
pub use traits::{display_path, LanguageAnalyzer, ParsedFile};
pub use visit::{walk, Visitor};
