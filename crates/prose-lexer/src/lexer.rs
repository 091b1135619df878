//! The Prose lexer.

use crate::symbols::SymbolTable;
use crate::token::{MAX_WORD_LEN, MIN_WORD_LEN, Token, TokenKind};
use prose_common::Span;
use std::iter::FusedIterator;

/// The Prose lexer.
///
/// Hands out one token per [`Lexer::next_token`] call, advancing a byte
/// cursor over the input. Once the input is exhausted every call returns
/// [`TokenKind::End`]. Words of valid length are recorded in the symbol table
/// as they are scanned.
///
/// The lexer never records errors itself: invalid input comes back as
/// [`TokenKind::Invalid`] tokens and the caller decides what to do with them.
pub struct Lexer<'src> {
    /// Input sentence
    source: &'src str,
    /// Byte offset of the next unread character
    pos: usize,
    /// Valid words seen so far
    symbols: SymbolTable,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given sentence.
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            pos: 0,
            symbols: SymbolTable::new(),
        }
    }

    /// The symbol table accumulated so far.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> SymbolTable {
        self.symbols
    }

    /// Scan the next token from the remaining input.
    pub fn next_token(&mut self) -> Token {
        let token = self.scan();
        tracing::trace!(kind = %token.kind, text = %token.text, span = ?token.span, "token");
        token
    }

    fn scan(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;
        let Some(ch) = self.peek_char() else {
            return Token::end(start);
        };

        match ch {
            ',' => self.punctuation(TokenKind::Comma, start),
            '-' => self.punctuation(TokenKind::Hyphen, start),
            '.' => self.punctuation(TokenKind::Stop, start),
            '\'' => self.quotation(start),
            c if c.is_ascii_alphabetic() => self.word(start),
            _ => self.invalid_run(start),
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// Consume characters while `pred` holds and return them.
    fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> &'src str {
        let source = self.source;
        let start = self.pos;
        let len = source[start..]
            .find(|c: char| !pred(c))
            .unwrap_or(source.len() - start);
        self.pos = start + len;
        &source[start..self.pos]
    }

    fn skip_whitespace(&mut self) {
        self.eat_while(is_blank);
    }

    fn punctuation(&mut self, kind: TokenKind, start: usize) -> Token {
        self.pos += 1;
        Token::new(kind, &self.source[start..self.pos], self.span_from(start))
    }

    /// Scan `'...'`. An unterminated quotation runs to the end of input.
    fn quotation(&mut self, start: usize) -> Token {
        self.pos += 1;
        let text = self.eat_while(|c| c != '\'');
        if self.peek_char() == Some('\'') {
            self.pos += 1;
        }
        Token::new(TokenKind::Quotation, text, self.span_from(start))
    }

    /// Scan a run of ASCII letters and classify it by length.
    fn word(&mut self, start: usize) -> Token {
        let run = self.eat_while(|c| c.is_ascii_alphabetic());

        if run.len() > MAX_WORD_LEN {
            // Only the head is consumed; the rest is scanned on the next call.
            self.pos = start + MAX_WORD_LEN;
            let head = &run[..MAX_WORD_LEN];
            self.record(head);
            return Token::new(TokenKind::Word, head, self.span_from(start));
        }

        if run.len() < MIN_WORD_LEN {
            return Token::new(TokenKind::Invalid, run, self.span_from(start));
        }

        self.record(run);
        let kind = if run.starts_with(|c: char| c.is_ascii_uppercase()) {
            TokenKind::Startword
        } else {
            TokenKind::Word
        };
        Token::new(kind, run, self.span_from(start))
    }

    /// Scan everything up to the next separator as one invalid token.
    fn invalid_run(&mut self, start: usize) -> Token {
        let text = self.eat_while(|c| !is_blank(c) && !matches!(c, ',' | '-' | '.'));
        Token::new(TokenKind::Invalid, text, self.span_from(start))
    }

    fn record(&mut self, word: &str) {
        tracing::debug!(word, index = self.symbols.len(), "symbol");
        self.symbols.push(word);
    }

    fn span_from(&self, start: usize) -> Span {
        Span::from_usize(start, self.pos)
    }
}

/// Yields tokens up to, but not including, `End`.
impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_end()).then_some(token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// ASCII whitespace as the C locale sees it, vertical tab included.
fn is_blank(ch: char) -> bool {
    ch.is_ascii_whitespace() || ch == '\x0b'
}
