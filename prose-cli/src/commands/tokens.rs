//! The `prose tokens` command.

use crate::output;
use crate::report::LexReport;
use prose_lexer::{Lexed, tokenize};

/// Lex a sentence and print its tokens, symbol table, and lexical errors.
pub fn run(sentence: &str, json: bool) -> Result<(), String> {
    tracing::debug!(sentence, "lexing");
    let lexed = tokenize(sentence);

    if json {
        let text = serde_json::to_string_pretty(&LexReport::new(&lexed))
            .map_err(|e| format!("cannot serialize tokens: {e}"))?;
        println!("{text}");
    } else {
        print_lexed(&lexed);
    }

    if lexed.has_errors() {
        return Err(format!("{} invalid token(s) found", lexed.errors.len()));
    }
    Ok(())
}

/// Print the token listing, the symbol table, and any lexical errors.
pub fn print_lexed(lexed: &Lexed) {
    output::heading("Tokens:");
    for token in &lexed.tokens {
        println!("Token Type: {} ,Token Value: {}", token.kind, token.text);
    }

    output::heading("Symbol Table:");
    for word in lexed.symbols.iter() {
        println!("{word}");
    }

    if lexed.has_errors() {
        output::heading("Lexical Errors:");
        for message in lexed.errors.messages() {
            println!("{message}");
        }
    }
}
