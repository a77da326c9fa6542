//! Function declaration parsing.

use larch_ast::nodes::{Annotation, Declaration};

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a function declaration: an optional `name :: types` annotation
    /// followed by a single `name args = body` equation.
    ///
    /// `limit` is the layout column governing the declaration (1 for
    /// top-levels, the binding column inside `let`).
    ///
    /// ## Errors
    ///
    /// Returns a [`crate::ParseError`] if the declaration is malformed.
    pub fn parse_declaration(&mut self, limit: usize) -> ParseResult<Declaration> {
        let annotation = if self.check(TokenKind::Identifier)
            && self.peek().kind == TokenKind::DoubleColon
        {
            Some(self.parse_annotation(limit)?)
        } else {
            None
        };

        let (name, name_span) = self.expect_identifier("a function name")?;

        let mut args = Vec::new();
        while self.continues(limit) && self.at_pattern_atom() {
            args.push(self.parse_pattern_atom()?);
        }

        self.expect(TokenKind::Equal, "`=`")?;
        let body = self.parse_expression(limit)?;

        let start = annotation.as_ref().map_or(name_span, |a| a.span);
        let span = start.merge(&body.span());
        Ok(Declaration::new(annotation, name, args, body, span))
    }

    /// Parse a `name :: t1 -> t2 -> r` annotation.
    fn parse_annotation(&mut self, limit: usize) -> ParseResult<Annotation> {
        let (name, name_span) = self.expect_identifier("a function name")?;
        self.expect(TokenKind::DoubleColon, "`::`")?;

        let mut types = vec![self.parse_annotation_segment(limit)?];
        while self.check(TokenKind::Arrow) && self.continues(limit) {
            self.advance();
            types.push(self.parse_annotation_segment(limit)?);
        }

        let span = name_span.merge(&self.previous_span());
        Ok(Annotation::new(name, types, span))
    }
}
