//! Parser for the Larch programming language.
//!
//! A hand-written recursive-descent parser over the token stream produced
//! by the lexer. Each grammar category lives in its own submodule:
//!
//! - [`module`]: top-level item sequencing
//! - [`datatype`]: `data` declarations
//! - [`declaration`]: annotations and function equations
//! - [`expression`]: expressions, `case`, and `let`
//! - [`pattern`]: argument and case-branch patterns
//! - [`types`]: annotation type syntax
//!
//! Layout is resolved with a `limit` column threaded through the grammar: a
//! token that begins a line continues the current construct only if its
//! column is greater than the limit. Parentheses suspend the rule.

mod datatype;
mod declaration;
mod expression;
mod module;
mod pattern;
mod types;

use larch_ast::Ident;
use larch_source::Span;

use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::{Lexer, Token, TokenKind};

/// The Parser is responsible for converting a stream of tokens into an
/// untyped AST.
#[derive(Debug)]
pub struct Parser<'src> {
    /// The token stream, terminated by an end-of-file token
    tokens: Vec<Token<'src>>,
    /// Index of the current token
    pos: usize,
}

impl<'src> Parser<'src> {
    /// Create a new parser for the given source code.
    ///
    /// ## Errors
    ///
    /// Returns a [`ParseError`] if the source cannot be tokenized.
    pub fn new(source: &'src str) -> Result<Self, ParseError> {
        let tokens = Lexer::new(source).tokenize()?;
        Ok(Self { tokens, pos: 0 })
    }

    /// Look at the current token without consuming it
    #[inline]
    fn current(&self) -> &Token<'src> { &self.tokens[self.pos] }

    /// Look at the next token without consuming it
    #[inline]
    fn peek(&self) -> &Token<'src> {
        let index = (self.pos + 1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// Consume and return the current token
    fn advance(&mut self) -> Token<'src> {
        let token = self.tokens[self.pos];
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
        token
    }

    /// Check if the current token is of the specified kind
    #[inline]
    fn check(&self, kind: TokenKind) -> bool { self.current().kind == kind }

    /// Consume the current token if it matches the expected kind
    fn expect(&mut self, kind: TokenKind, expected: &str) -> ParseResult<Token<'src>> {
        if self.check(kind) { Ok(self.advance()) } else { Err(self.unexpected(expected)) }
    }

    /// Consume an identifier token, returning its name and span
    fn expect_identifier(&mut self, expected: &str) -> ParseResult<(Ident, Span)> {
        if self.check(TokenKind::Identifier) {
            let token = self.advance();
            Ok((Ident::new(token.lexeme), token.span))
        } else {
            Err(self.unexpected(expected))
        }
    }

    /// Build an error for the current token
    fn unexpected(&self, expected: &str) -> ParseError {
        let token = self.current();
        if token.kind == TokenKind::EndOfFile {
            ParseError::UnexpectedEof { expected: expected.to_string(), span: token.span }
        } else {
            ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: token.describe(),
                span: token.span,
            }
        }
    }

    /// Returns true if the current token continues the construct governed
    /// by the given layout column: it is on the same line, or indented past
    /// the column.
    #[inline]
    fn continues(&self, limit: usize) -> bool {
        let token = self.current();
        !token.line_start || token.column > limit
    }

    /// Span of the most recently consumed token
    fn previous_span(&self) -> Span {
        let index = self.pos.saturating_sub(1);
        self.tokens[index].span
    }
}
