//! Syntax errors.

use prose_common::Span;
use prose_diagnostic::{Diagnostic, DiagnosticKind, DiagnosticLog, ErrorCode, Label};
use thiserror::Error;

/// The first grammar violation found in a sentence.
///
/// The `Display` text of each variant is the message recorded in the parser's
/// error log.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Expected Startword, got: {found}")]
    ExpectedStartword { found: String, span: Span },

    #[error("Error: Consecutive commas found.")]
    ConsecutiveCommas { span: Span },

    #[error("Error: Consecutive hyphens found.")]
    ConsecutiveHyphens { span: Span },

    #[error("Unexpected token: {found}")]
    UnexpectedToken { found: String, span: Span },

    #[error("Expected STOP at the end")]
    ExpectedStop { span: Span },

    #[error("Error: Extra tokens found after full stop.")]
    TrailingTokens { span: Span },

    /// The grammar matched but the lexer rejected part of the input.
    #[error("Error: Lexical errors found. Invalid tokens in the sentence.")]
    LexicalErrors { count: usize, span: Span },
}

impl SyntaxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SyntaxError::ExpectedStartword { .. } => ErrorCode::ExpectedStartword,
            SyntaxError::ConsecutiveCommas { .. } => ErrorCode::ConsecutiveCommas,
            SyntaxError::ConsecutiveHyphens { .. } => ErrorCode::ConsecutiveHyphens,
            SyntaxError::UnexpectedToken { .. } => ErrorCode::UnexpectedToken,
            SyntaxError::ExpectedStop { .. } => ErrorCode::ExpectedStop,
            SyntaxError::TrailingTokens { .. } => ErrorCode::TrailingTokens,
            SyntaxError::LexicalErrors { .. } => ErrorCode::LexicalErrors,
        }
    }

    pub fn span(&self) -> Span {
        match self {
            SyntaxError::ExpectedStartword { span, .. }
            | SyntaxError::ConsecutiveCommas { span }
            | SyntaxError::ConsecutiveHyphens { span }
            | SyntaxError::UnexpectedToken { span, .. }
            | SyntaxError::ExpectedStop { span }
            | SyntaxError::TrailingTokens { span }
            | SyntaxError::LexicalErrors { span, .. } => *span,
        }
    }

    /// Build the diagnostic recorded for this error. Lexical failures carry
    /// the lexer's messages as notes.
    pub fn to_diagnostic(&self, lexical: &DiagnosticLog) -> Diagnostic {
        let span = self.span();
        let mut diag = Diagnostic::error(DiagnosticKind::Parser, span, self.to_string())
            .with_code(self.code());

        match self {
            SyntaxError::LexicalErrors { count, .. } => {
                diag = diag.with_note(format!("{count} invalid token(s)"));
                for lex in lexical {
                    diag = diag.with_note(lex.message.clone());
                }
            }
            _ => diag = diag.with_label(Label::new(span, "here")),
        }

        diag
    }
}
