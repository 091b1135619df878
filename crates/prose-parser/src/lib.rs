//! Parser for Prose.
//!
//! This crate provides the recursive descent parser that validates a token
//! sequence against the sentence grammar and builds its AST, and [`compile`],
//! which runs both front-end phases over one sentence.
//!
//! ## Errors
//!
//! Lexical errors accumulate: every invalid token is logged. Syntax errors
//! are fail-fast: the first violation ends the parse. A sentence with any
//! lexical error is never accepted, even if its valid tokens form a correct
//! sentence.

mod error;
mod parser;

pub use error::SyntaxError;
pub use parser::Parser;

use prose_diagnostic::DiagnosticLog;
use prose_lexer::{Lexed, Token, TokenKind, tokenize};
use prose_syntax::AstNode;

/// Everything produced by compiling one sentence.
#[derive(Debug, Clone)]
pub struct Compilation {
    /// Tokens, symbol table, and lexical errors.
    pub lexed: Lexed,
    /// The `Sentence` root, present only when the sentence was accepted.
    pub ast: Option<AstNode>,
    /// Accepted tokens in order; empty unless the sentence was accepted.
    pub accepted: Vec<Token>,
    /// At most one syntax error.
    pub syntax_errors: DiagnosticLog,
}

impl Compilation {
    pub fn is_valid(&self) -> bool {
        self.ast.is_some()
    }

    pub fn has_syntax_errors(&self) -> bool {
        !self.syntax_errors.is_empty()
    }

    pub fn accepted_string(&self) -> String {
        accepted_string(&self.accepted)
    }
}

/// Lex and parse a sentence.
pub fn compile(source: &str) -> Compilation {
    let lexed = tokenize(source);

    let mut parser = Parser::new(lexed.tokens.clone(), &lexed.errors);
    let ast = parser.parse();
    let (accepted, syntax_errors) = parser.finish();

    Compilation {
        lexed,
        ast,
        accepted,
        syntax_errors,
    }
}

/// Join token texts with single spaces, leaving quotations out.
pub fn accepted_string(tokens: &[Token]) -> String {
    tokens
        .iter()
        .filter(|t| t.kind != TokenKind::Quotation)
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
