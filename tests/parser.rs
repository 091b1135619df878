//! Integration tests for prose-parser crate.

use prose_diagnostic::{DiagnosticLog, ErrorCode};
use prose_lexer::tokenize;
use prose_parser::{Parser, compile};
use prose_syntax::{NodeKind, level_order_lines};

/// Compile and return the syntax error messages.
fn errors(source: &str) -> Vec<String> {
    compile(source).syntax_errors.messages()
}

fn accepts(source: &str) -> bool {
    let compilation = compile(source);
    assert_eq!(compilation.is_valid(), !compilation.has_syntax_errors());
    compilation.is_valid()
}

// ============================================================================
// Accepted Sentences
// ============================================================================

#[test]
fn test_reference_sentence() {
    let compilation = compile("Hello, world-wide communication technologies.");
    assert!(compilation.is_valid());
    assert!(!compilation.has_syntax_errors());
    assert_eq!(
        compilation.accepted_string(),
        "Hello , world - wide communication technologies ."
    );

    let ast = compilation.ast.as_ref().unwrap();
    assert_eq!(ast.kind, NodeKind::Sentence);
    assert_eq!(ast.children.len(), 8);
    assert_eq!(ast.children[0].kind, NodeKind::Startword("Hello".into()));
    assert_eq!(ast.children[7].kind, NodeKind::Stop);
    assert!(ast.children.iter().all(|c| c.is_leaf()));
}

#[test]
fn test_level_order() {
    let compilation = compile("Hello, world-wide communication technologies.");
    let lines = level_order_lines(compilation.ast.as_ref().unwrap());
    assert_eq!(
        lines,
        vec![
            "Sentence".to_string(),
            "Startword: Hello Comma Word: world Hyphen Word: wide Word: communication Word: technologies Stop"
                .to_string(),
        ]
    );
}

#[test]
fn test_minimal_sentence() {
    assert!(accepts("Yes."));
}

#[test]
fn test_quotation_is_kept_in_ast_but_not_in_string() {
    let compilation = compile("Hey 'secret' bye.");
    assert!(compilation.is_valid());
    assert_eq!(compilation.accepted_string(), "Hey bye .");
    assert_eq!(compilation.accepted.len(), 4);

    let ast = compilation.ast.unwrap();
    assert_eq!(ast.children[1].kind, NodeKind::Quotation("secret".into()));
}

#[test]
fn test_quoted_short_words_are_fine() {
    // Quotation text is never classified as words.
    assert!(accepts("She said 'hi' twice."));
}

#[test]
fn test_comma_then_hyphen_alternation() {
    assert!(accepts("Red, blue - green, pink - gray."));
    assert!(accepts("Red,-,-,- gray."));
}

// ============================================================================
// Startword and Stop
// ============================================================================

#[test]
fn test_lowercase_first_word() {
    assert_eq!(errors("hello world."), vec!["Expected Startword, got: hello"]);
}

#[test]
fn test_punctuation_first() {
    assert_eq!(errors(", Hello."), vec!["Expected Startword, got: ,"]);
}

#[test]
fn test_empty_sentence() {
    assert_eq!(errors(""), vec!["Expected Startword, got: "]);
    assert_eq!(errors("   "), vec!["Expected Startword, got: "]);
}

#[test]
fn test_missing_stop() {
    assert_eq!(errors("Hey there"), vec!["Expected STOP at the end"]);
    assert_eq!(errors("Hey there,"), vec!["Expected STOP at the end"]);
}

#[test]
fn test_second_startword_is_unexpected() {
    assert_eq!(errors("Hello World."), vec!["Unexpected token: World"]);
}

// ============================================================================
// Commas and Hyphens
// ============================================================================

#[test]
fn test_consecutive_commas() {
    assert_eq!(errors("Hey,, there."), vec!["Error: Consecutive commas found."]);
    assert_eq!(errors("Hey there ,  , you."), vec!["Error: Consecutive commas found."]);
}

#[test]
fn test_consecutive_hyphens_without_comma() {
    assert_eq!(errors("Hey-- there."), vec!["Error: Consecutive hyphens found."]);
    assert_eq!(errors("Hey there -- you."), vec!["Error: Consecutive hyphens found."]);
}

#[test]
fn test_consecutive_hyphens_with_one_comma_ahead() {
    assert!(accepts("Hey-- there, you."));
    assert!(accepts("Hey--, there."));
}

#[test]
fn test_consecutive_hyphens_with_two_commas_ahead() {
    assert_eq!(
        errors("Hey-- there, you, all."),
        vec!["Error: Consecutive commas found."]
    );
}

#[test]
fn test_hyphen_lookahead_stops_at_first_stop() {
    // The comma after the stop is outside the look-ahead span.
    assert_eq!(
        errors("Hey-- there. and, more"),
        vec!["Error: Consecutive hyphens found."]
    );
}

#[test]
fn test_comma_earlier_in_sentence_does_not_count() {
    assert_eq!(
        errors("Hey, you-- there."),
        vec!["Error: Consecutive hyphens found."]
    );
}

#[test]
fn test_word_between_punctuation_resets_adjacency() {
    assert!(accepts("Hey, you, there."));
    assert!(accepts("Hey - you - there."));
}

#[test]
fn test_three_hyphens_with_one_comma() {
    assert!(accepts("Hey--- there, you."));
}

// ============================================================================
// Trailing Tokens and Lexical Errors
// ============================================================================

#[test]
fn test_extra_tokens_after_stop() {
    let message = "Error: Extra tokens found after full stop.";
    assert_eq!(errors("Hey there. Again"), vec![message]);
    assert_eq!(errors("Hey there.."), vec![message]);
    assert_eq!(errors("Hey there.,"), vec![message]);
    assert_eq!(errors("Hey there. 'quote'"), vec![message]);
    assert_eq!(errors("Hey there.-"), vec![message]);
    assert_eq!(errors("Hey there. more"), vec![message]);
}

#[test]
fn test_invalid_token_rejects_sentence() {
    let compilation = compile("Hey there 42 friends.");
    assert!(!compilation.is_valid());
    assert_eq!(compilation.lexed.errors.messages(), vec!["Invalid token: 42"]);
    assert_eq!(
        compilation.syntax_errors.messages(),
        vec!["Error: Lexical errors found. Invalid tokens in the sentence."]
    );

    let diag = compilation.syntax_errors.iter().next().unwrap();
    assert_eq!(diag.code, Some(ErrorCode::LexicalErrors));
}

#[test]
fn test_invalid_token_after_stop() {
    // The invalid token never reaches the parser, so the grammar is satisfied.
    assert_eq!(
        errors("Hey there. 42"),
        vec!["Error: Lexical errors found. Invalid tokens in the sentence."]
    );
}

#[test]
fn test_structural_errors_win_over_lexical_errors() {
    assert_eq!(errors("Hey,, 42."), vec!["Error: Consecutive commas found."]);
}

#[test]
fn test_short_first_word_leaves_no_startword() {
    // `Hi` is too short, so the parser first sees the comma.
    assert_eq!(errors("Hi,, there."), vec!["Expected Startword, got: ,"]);
    assert_eq!(errors("Hi there"), vec!["Expected Startword, got: there"]);
}

#[test]
fn test_long_first_word() {
    let compilation = compile("Thisisaverylongwordexceedingtwentysix.");
    assert_eq!(compilation.lexed.tokens.len(), 3);
    assert_eq!(
        compilation.syntax_errors.messages(),
        vec!["Expected Startword, got: Thisisaverylongwordexceedi"]
    );
}

// ============================================================================
// Parser API
// ============================================================================

#[test]
fn test_only_one_error_is_recorded() {
    let lexed = tokenize("hey,, there-- you. more");
    let mut parser = Parser::new(lexed.tokens.clone(), &lexed.errors);
    assert!(parser.parse().is_none());
    assert!(parser.has_errors());
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_parser_sees_lexical_log() {
    let lexed = tokenize("Hey there.");
    let mut clean = Parser::new(lexed.tokens.clone(), &lexed.errors);
    assert!(clean.parse().is_some());

    let other = tokenize("Bad !!");
    let mut dirty = Parser::new(lexed.tokens.clone(), &other.errors);
    assert!(dirty.parse().is_none());
    assert_eq!(
        dirty.messages(),
        vec!["Error: Lexical errors found. Invalid tokens in the sentence."]
    );
}

#[test]
fn test_accepted_tokens_include_quotations() {
    let lexed = tokenize("Hey 'a' there.");
    let empty = DiagnosticLog::new();
    let mut parser = Parser::new(lexed.tokens, &empty);
    assert!(parser.parse().is_some());

    let texts: Vec<&str> = parser.accepted_tokens().iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["Hey", "a", "there", "."]);
    assert_eq!(parser.accepted_string(), "Hey there .");
}

#[test]
fn test_compilations_do_not_share_state() {
    assert!(!accepts("Bad 1."));
    assert!(accepts("Good one."));
}
