//! Serializable summaries for `--json` output.

use prose_lexer::{Lexed, SymbolTable, Token};
use prose_parser::Compilation;
use prose_syntax::AstNode;
use serde::Serialize;

/// The lexical phase of one sentence.
#[derive(Serialize)]
pub struct LexReport<'a> {
    pub tokens: &'a [Token],
    pub symbols: &'a SymbolTable,
    pub lexical_errors: Vec<String>,
}

impl<'a> LexReport<'a> {
    pub fn new(lexed: &'a Lexed) -> Self {
        Self {
            tokens: &lexed.tokens,
            symbols: &lexed.symbols,
            lexical_errors: lexed.errors.messages(),
        }
    }
}

/// Both phases of one sentence.
#[derive(Serialize)]
pub struct CompileReport<'a> {
    pub valid: bool,
    #[serde(flatten)]
    pub lexical: LexReport<'a>,
    pub syntax_errors: Vec<String>,
    pub accepted: Option<String>,
    pub ast: Option<&'a AstNode>,
}

impl<'a> CompileReport<'a> {
    pub fn new(compilation: &'a Compilation) -> Self {
        Self {
            valid: compilation.is_valid(),
            lexical: LexReport::new(&compilation.lexed),
            syntax_errors: compilation.syntax_errors.messages(),
            accepted: compilation
                .is_valid()
                .then(|| compilation.accepted_string()),
            ast: compilation.ast.as_ref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prose_parser::compile;

    #[test]
    fn test_compile_report_json() {
        let compilation = compile("Hello, world-wide communication technologies.");
        let value = serde_json::to_value(CompileReport::new(&compilation)).unwrap();

        assert_eq!(value["valid"], true);
        assert_eq!(value["tokens"][0]["kind"], "STARTWORD");
        assert_eq!(value["tokens"][0]["text"], "Hello");
        assert_eq!(value["symbols"][1], "world");
        assert_eq!(
            value["accepted"],
            "Hello , world - wide communication technologies ."
        );
        assert_eq!(value["ast"]["kind"]["kind"], "Sentence");
        assert_eq!(value["ast"]["children"][0]["kind"]["text"], "Hello");
    }

    #[test]
    fn test_rejected_report_has_no_ast() {
        let compilation = compile("hello world.");
        let value = serde_json::to_value(CompileReport::new(&compilation)).unwrap();

        assert_eq!(value["valid"], false);
        assert!(value["ast"].is_null());
        assert!(value["accepted"].is_null());
        assert_eq!(value["syntax_errors"][0], "Expected Startword, got: hello");
    }
}
