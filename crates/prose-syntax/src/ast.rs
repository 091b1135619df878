//! Sentence AST definitions.

use prose_common::Span;
use serde::Serialize;
use std::fmt;

/// A node of the sentence tree.
///
/// Every node owns its children outright. An accepted sentence is a single
/// [`NodeKind::Sentence`] root with one leaf per accepted token, opening with
/// a `Startword` leaf and closing with a `Stop` leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AstNode {
    pub kind: NodeKind,
    pub span: Span,
    pub children: Vec<AstNode>,
}

impl AstNode {
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Self {
            kind,
            span,
            children: Vec::new(),
        }
    }

    pub fn sentence(span: Span) -> Self {
        Self::new(NodeKind::Sentence, span)
    }

    /// Append a child and widen this node's span to cover it.
    pub fn push(&mut self, child: AstNode) {
        self.span = if self.children.is_empty() {
            child.span
        } else {
            self.span.merge(child.span)
        };
        self.children.push(child);
    }

    /// Display label: the kind name, plus the text for word-like kinds.
    pub fn label(&self) -> String {
        self.kind.to_string()
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Kind of AST node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "text")]
pub enum NodeKind {
    /// The root.
    Sentence,
    /// `Hello` / opening word
    Startword(String),
    /// `world` / any later word
    Word(String),
    /// `,`
    Comma,
    /// `-`
    Hyphen,
    /// `'...'` / quoted text, delimiters excluded
    Quotation(String),
    /// `.`
    Stop,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Sentence => f.write_str("Sentence"),
            NodeKind::Startword(text) => write!(f, "Startword: {text}"),
            NodeKind::Word(text) => write!(f, "Word: {text}"),
            NodeKind::Comma => f.write_str("Comma"),
            NodeKind::Hyphen => f.write_str("Hyphen"),
            NodeKind::Quotation(text) => write!(f, "Quotation: {text}"),
            NodeKind::Stop => f.write_str("Stop"),
        }
    }
}
