//! The `prose compile` command.

use crate::commands::tokens::print_lexed;
use crate::output;
use crate::report::CompileReport;
use prose_diagnostic::emit;
use prose_parser::compile;
use prose_syntax::level_order_lines;

/// Compile a sentence and print the result of both phases.
pub fn run(sentence: &str, json: bool, explain: bool) -> Result<(), String> {
    tracing::debug!(sentence, "compiling");
    let compilation = compile(sentence);

    if json {
        let text = serde_json::to_string_pretty(&CompileReport::new(&compilation))
            .map_err(|e| format!("cannot serialize compilation: {e}"))?;
        println!("{text}");
    } else {
        print_lexed(&compilation.lexed);

        match &compilation.ast {
            Some(ast) => {
                output::success("\nThe string is valid.");
                output::heading("Accepted String:");
                println!("{}", compilation.accepted_string());
                output::heading("AST Structure:");
                for line in level_order_lines(ast) {
                    println!("{line}");
                }
            }
            None => {
                println!("\nThe string is invalid.");
                output::heading("Parsing Errors:");
                for message in compilation.syntax_errors.messages() {
                    println!("{message}");
                }
            }
        }
    }

    if explain {
        let diagnostics = compilation.lexed.errors.iter().chain(&compilation.syntax_errors);
        for diag in diagnostics {
            emit(sentence, "<sentence>", diag)
                .map_err(|e| format!("cannot render diagnostic: {e}"))?;
        }
    }

    if compilation.is_valid() {
        Ok(())
    } else {
        Err("the sentence was rejected".to_string())
    }
}
