//! Lexical analysis for Prose.
//!
//! This crate provides the lexer that turns a sentence into tokens, plus
//! [`tokenize`], the token loop that records invalid tokens in the lexical
//! error log and keeps everything else for the parser.

mod error;
mod lexer;
mod symbols;
mod token;

pub use error::LexError;
pub use lexer::Lexer;
pub use symbols::SymbolTable;
pub use token::{MAX_WORD_LEN, MIN_WORD_LEN, Token, TokenKind};

use prose_diagnostic::DiagnosticLog;

/// Output of the lexical phase for one sentence.
#[derive(Debug, Clone, Default)]
pub struct Lexed {
    /// Valid tokens in source order; `Invalid` and `End` are never included.
    pub tokens: Vec<Token>,
    /// Every valid word seen, duplicates included.
    pub symbols: SymbolTable,
    /// One `Invalid token: <value>` entry per invalid token.
    pub errors: DiagnosticLog,
}

impl Lexed {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Lex a whole sentence.
///
/// Each call starts from a fresh error log, so separate sentences never see
/// each other's errors.
pub fn tokenize(source: &str) -> Lexed {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();
    let mut errors = DiagnosticLog::new();

    for token in lexer.by_ref() {
        match LexError::from_token(&token) {
            Some(err) => errors.push(err.to_diagnostic()),
            None => tokens.push(token),
        }
    }

    tracing::debug!(
        tokens = tokens.len(),
        invalid = errors.len(),
        "lexed sentence"
    );

    Lexed {
        tokens,
        symbols: lexer.into_symbols(),
        errors,
    }
}
