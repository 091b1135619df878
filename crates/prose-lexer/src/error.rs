//! Lexical errors.

use crate::token::{Token, TokenKind};
use prose_common::Span;
use prose_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use thiserror::Error;

/// An invalid token, as recorded in the lexical error log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    /// A run of one or two letters.
    #[error("Invalid token: {text}")]
    WordTooShort { text: String, span: Span },

    /// A run of characters that are not letters, punctuation, or quotes.
    #[error("Invalid token: {text}")]
    IllegalCharacters { text: String, span: Span },
}

impl LexError {
    /// Classify an [`TokenKind::Invalid`] token. Returns `None` for any other kind.
    pub fn from_token(token: &Token) -> Option<Self> {
        if token.kind != TokenKind::Invalid {
            return None;
        }

        let text = token.text.clone();
        let span = token.span;
        if !text.is_empty() && text.chars().all(|c| c.is_ascii_alphabetic()) {
            Some(LexError::WordTooShort { text, span })
        } else {
            Some(LexError::IllegalCharacters { text, span })
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            LexError::WordTooShort { .. } => ErrorCode::WordTooShort,
            LexError::IllegalCharacters { .. } => ErrorCode::IllegalCharacters,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            LexError::WordTooShort { span, .. } | LexError::IllegalCharacters { span, .. } => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let span = self.span();
        Diagnostic::error(DiagnosticKind::Lexer, span, self.to_string())
            .with_code(self.code())
            .with_label(Label::new(span, "invalid token here"))
    }
}
