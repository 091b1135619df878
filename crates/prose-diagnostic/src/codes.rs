//! Error codes for Prose diagnostics.

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexer errors (E0001 - E0099)
    IllegalCharacters,
    WordTooShort,

    // Parser errors (E0100 - E0199)
    ExpectedStartword,
    ConsecutiveCommas,
    ConsecutiveHyphens,
    UnexpectedToken,
    ExpectedStop,
    TrailingTokens,
    LexicalErrors,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::IllegalCharacters => "E0001",
            ErrorCode::WordTooShort => "E0002",

            // Parser
            ErrorCode::ExpectedStartword => "E0100",
            ErrorCode::ConsecutiveCommas => "E0101",
            ErrorCode::ConsecutiveHyphens => "E0102",
            ErrorCode::UnexpectedToken => "E0103",
            ErrorCode::ExpectedStop => "E0104",
            ErrorCode::TrailingTokens => "E0105",
            ErrorCode::LexicalErrors => "E0106",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::IllegalCharacters => "characters outside the sentence alphabet",
            ErrorCode::WordTooShort => "word shorter than three letters",

            // Parser
            ErrorCode::ExpectedStartword => "sentence does not open with a capitalized word",
            ErrorCode::ConsecutiveCommas => "two commas in a row",
            ErrorCode::ConsecutiveHyphens => "two hyphens in a row",
            ErrorCode::UnexpectedToken => "token not allowed inside a sentence",
            ErrorCode::ExpectedStop => "sentence is not terminated",
            ErrorCode::TrailingTokens => "input continues after the full stop",
            ErrorCode::LexicalErrors => "sentence contains invalid tokens",
        }
    }

    /// Get a suggested fix for the error, if available.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ErrorCode::WordTooShort => Some("words must be between 3 and 26 letters long"),
            ErrorCode::ExpectedStartword => Some("capitalize the first word of the sentence"),
            ErrorCode::ConsecutiveCommas => Some("remove the extra `,`"),
            ErrorCode::ExpectedStop => Some("add `.` at the end of the sentence"),
            ErrorCode::TrailingTokens => Some("a sentence ends at its first `.`"),
            _ => None,
        }
    }
}
