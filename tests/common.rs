//! Integration tests for prose-common crate.

use prose_common::{BytePos, Span};
use prose_lexer::Lexer;

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start, BytePos(10));
    assert_eq!(merged.end, BytePos(30));
}

#[test]
fn test_span_len_and_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
    assert_eq!(span.range(), 5..15);
    assert!(!span.is_empty());
    assert!(Span::DUMMY.is_empty());
}

#[test]
fn test_token_spans_index_the_source() {
    let source = "Hello, 'quoted' world.";
    for token in Lexer::new(source) {
        let slice = &source[token.span.range()];
        if token.kind == prose_lexer::TokenKind::Quotation {
            assert_eq!(slice, format!("'{}'", token.text));
        } else {
            assert_eq!(slice, token.text);
        }
    }
}

#[test]
fn test_end_span_is_empty() {
    let mut lexer = Lexer::new("Hello  ");
    lexer.next_token();
    let end = lexer.next_token();
    assert!(end.is_end());
    assert!(end.span.is_empty());
    assert_eq!(end.span.start, BytePos(7));
}
