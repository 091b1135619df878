//! Token definitions for Prose.

use prose_common::Span;
use serde::Serialize;
use std::fmt;

/// Shortest run of letters that counts as a word.
pub const MIN_WORD_LEN: usize = 3;
/// Longest word; longer runs are split at this length.
pub const MAX_WORD_LEN: usize = 26;

/// A token with its kind, text, and span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// The end-of-input sentinel at `pos`.
    pub fn end(pos: usize) -> Self {
        Self::new(TokenKind::End, "", Span::from_usize(pos, pos))
    }

    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

/// The kind of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenKind {
    /// A word of valid length starting with an upper-case letter.
    Startword,
    /// A word of valid length starting with a lower-case letter, or the
    /// first part of an over-long word.
    Word,
    Comma,      // ,
    Hyphen,     // -
    Stop,       // .
    /// Text between single quotes, delimiters excluded.
    Quotation,
    /// A word that is too short, or a run of characters outside the alphabet.
    Invalid,
    /// No more input. Never stored in a token sequence.
    End,
}

impl TokenKind {
    /// Upper-case display name used by token listings.
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Startword => "STARTWORD",
            TokenKind::Word => "WORD",
            TokenKind::Comma => "COMMA",
            TokenKind::Hyphen => "HYPHEN",
            TokenKind::Stop => "STOP",
            TokenKind::Quotation => "QUOTATION",
            TokenKind::Invalid => "INVALID",
            TokenKind::End => "END",
        }
    }

    /// Returns true for kinds whose text is a word entered in the symbol table.
    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Startword | TokenKind::Word)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
