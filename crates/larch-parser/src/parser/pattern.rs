//! Pattern parsing.

use larch_ast::Ident;
use larch_ast::nodes::Argument;

use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Returns true if the current token can begin a pattern atom.
    pub(crate) fn at_pattern_atom(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Identifier
                | TokenKind::IntLiteral
                | TokenKind::Underscore
                | TokenKind::LeftParen
        )
    }

    /// Parse an atomic pattern: an identifier, `_`, a number literal, or a
    /// parenthesized deconstruction like `(Just x)`.
    pub(crate) fn parse_pattern_atom(&mut self) -> ParseResult<Argument> {
        match self.current().kind {
            TokenKind::Identifier => {
                let (name, span) = self.expect_identifier("a pattern")?;
                Ok(Argument::Identifier(name, span))
            }
            TokenKind::Underscore => {
                let token = self.advance();
                Ok(Argument::Identifier(Ident::new("_"), token.span))
            }
            TokenKind::IntLiteral => {
                let token = self.advance();
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    ParseError::InvalidNumber {
                        literal: token.lexeme.to_string(),
                        span: token.span,
                    }
                })?;
                Ok(Argument::NumberLiteral(value, token.span))
            }
            TokenKind::LeftParen => {
                let open = self.advance();
                let (constructor, _) = self.expect_identifier("a constructor name")?;

                let mut args = Vec::new();
                while self.at_pattern_atom() {
                    args.push(self.parse_pattern_atom()?);
                }

                let close = self.expect(TokenKind::RightParen, "`)`")?;
                Ok(Argument::Deconstruction {
                    constructor,
                    args,
                    span: open.span.merge(&close.span),
                })
            }
            _ => Err(self.unexpected("a pattern")),
        }
    }

    /// Parse a case-branch pattern. Unlike function arguments, a
    /// deconstruction on the left of a branch arrow needs no parentheses:
    /// `Ok v -> …`.
    pub(crate) fn parse_case_pattern(&mut self, limit: usize) -> ParseResult<Argument> {
        if self.check(TokenKind::Identifier) {
            let (name, name_span) = self.expect_identifier("a pattern")?;

            let mut args = Vec::new();
            let mut span = name_span;
            while self.continues(limit) && self.at_pattern_atom() {
                let arg = self.parse_pattern_atom()?;
                span = span.merge(&arg.span());
                args.push(arg);
            }

            if args.is_empty() {
                Ok(Argument::Identifier(name, name_span))
            } else {
                Ok(Argument::Deconstruction { constructor: name, args, span })
            }
        } else {
            self.parse_pattern_atom()
        }
    }
}
