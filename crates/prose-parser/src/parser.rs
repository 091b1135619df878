//! The Prose parser.

use prose_common::Span;
use prose_diagnostic::DiagnosticLog;
use prose_lexer::{Token, TokenKind};
use prose_syntax::{AstNode, NodeKind};

use crate::SyntaxError;

/// Punctuation accepted immediately before the current body token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Previous {
    Comma,
    Hyphen,
    Other,
}

/// Recursive descent parser for a single sentence.
///
/// ```text
/// Sentence := Startword Body* Stop
/// Body     := Comma | Hyphen | Word | Quotation
/// ```
///
/// Parsing stops at the first violation: that error is the only one
/// recorded and no tree is produced.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    pos: usize,
    /// Returned by `current` once the tokens run out
    end: Token,
    /// Errors of the lexing pass that produced `tokens`
    lexical: &'a DiagnosticLog,
    diagnostics: DiagnosticLog,
    accepted: Vec<Token>,
}

impl<'a> Parser<'a> {
    /// Create a parser over the valid tokens of a sentence. `lexical` is the
    /// error log filled while those tokens were produced; a sentence is
    /// rejected whenever it is non-empty.
    pub fn new(tokens: Vec<Token>, lexical: &'a DiagnosticLog) -> Self {
        let end_pos = tokens.last().map_or(0, |t| usize::from(t.span.end));
        Self {
            tokens,
            pos: 0,
            end: Token::end(end_pos),
            lexical,
            diagnostics: DiagnosticLog::new(),
            accepted: Vec::new(),
        }
    }

    /// Parse the tokens as one sentence.
    ///
    /// Returns the `Sentence` root on success. On failure the error is
    /// recorded in [`Parser::errors`] and `None` is returned.
    pub fn parse(&mut self) -> Option<AstNode> {
        self.pos = 0;
        self.accepted.clear();

        match self.parse_sentence() {
            Ok(sentence) => {
                tracing::debug!(children = sentence.children.len(), "sentence accepted");
                Some(sentence)
            }
            Err(err) => {
                tracing::debug!(error = %err, pos = self.pos, "sentence rejected");
                self.accepted.clear();
                self.diagnostics.push(err.to_diagnostic(self.lexical));
                None
            }
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn errors(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// The plain error messages, in the order they were recorded.
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics.messages()
    }

    /// Tokens of the last successful parse, quotations included.
    pub fn accepted_tokens(&self) -> &[Token] {
        &self.accepted
    }

    /// The accepted sentence with quotation texts left out.
    pub fn accepted_string(&self) -> String {
        crate::accepted_string(&self.accepted)
    }

    /// Consume the parser, returning the accepted tokens and the error log.
    pub fn finish(self) -> (Vec<Token>, DiagnosticLog) {
        (self.accepted, self.diagnostics)
    }

    fn parse_sentence(&mut self) -> Result<AstNode, SyntaxError> {
        let mut sentence = AstNode::sentence(self.current().span);
        sentence.push(self.parse_startword()?);

        let mut previous = Previous::Other;
        while !self.at_end() && !self.check(TokenKind::Stop) {
            let node = match self.current_kind() {
                TokenKind::Comma => {
                    if previous == Previous::Comma {
                        return Err(SyntaxError::ConsecutiveCommas {
                            span: self.current().span,
                        });
                    }
                    previous = Previous::Comma;
                    self.accept(NodeKind::Comma)
                }
                TokenKind::Hyphen => {
                    if previous == Previous::Hyphen {
                        self.check_repeated_hyphen()?;
                    }
                    previous = Previous::Hyphen;
                    self.accept(NodeKind::Hyphen)
                }
                TokenKind::Word => {
                    previous = Previous::Other;
                    let text = self.current().text.clone();
                    self.accept(NodeKind::Word(text))
                }
                TokenKind::Quotation => {
                    previous = Previous::Other;
                    let text = self.current().text.clone();
                    self.accept(NodeKind::Quotation(text))
                }
                _ => {
                    let token = self.current();
                    return Err(SyntaxError::UnexpectedToken {
                        found: token.text.clone(),
                        span: token.span,
                    });
                }
            };
            sentence.push(node);
        }

        sentence.push(self.parse_stop()?);

        if !self.at_end() {
            return Err(SyntaxError::TrailingTokens {
                span: self.remaining_span(),
            });
        }

        if let Some(first) = self.lexical.iter().next() {
            return Err(SyntaxError::LexicalErrors {
                count: self.lexical.len(),
                span: first.span,
            });
        }

        Ok(sentence)
    }

    fn parse_startword(&mut self) -> Result<AstNode, SyntaxError> {
        if self.check(TokenKind::Startword) {
            let text = self.current().text.clone();
            Ok(self.accept(NodeKind::Startword(text)))
        } else {
            let token = self.current();
            Err(SyntaxError::ExpectedStartword {
                found: token.text.clone(),
                span: token.span,
            })
        }
    }

    fn parse_stop(&mut self) -> Result<AstNode, SyntaxError> {
        if self.check(TokenKind::Stop) {
            Ok(self.accept(NodeKind::Stop))
        } else {
            Err(SyntaxError::ExpectedStop {
                span: self.current().span,
            })
        }
    }

    /// A hyphen directly after a hyphen is tolerated only when exactly one
    /// comma lies between it and the next stop. Two or more commas there are
    /// reported as a comma error instead.
    fn check_repeated_hyphen(&self) -> Result<(), SyntaxError> {
        let commas = self.tokens[self.pos..]
            .iter()
            .take_while(|t| t.kind != TokenKind::Stop)
            .filter(|t| t.kind == TokenKind::Comma)
            .count();

        let span = self.current().span;
        match commas {
            0 => Err(SyntaxError::ConsecutiveHyphens { span }),
            1 => Ok(()),
            _ => Err(SyntaxError::ConsecutiveCommas { span }),
        }
    }

    /// Turn the current token into a leaf and move past it.
    fn accept(&mut self, kind: NodeKind) -> AstNode {
        let token = self.current().clone();
        let node = AstNode::new(kind, token.span);
        self.accepted.push(token);
        self.advance();
        node
    }

    // ========== Token cursor ==========

    fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.end)
    }

    fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    fn advance(&mut self) {
        if !self.at_end() {
            self.pos += 1;
        }
    }

    /// Span from the current token to the last one.
    fn remaining_span(&self) -> Span {
        let first = self.current().span;
        self.tokens
            .last()
            .map_or(first, |last| first.merge(last.span))
    }
}
