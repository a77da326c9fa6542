//! Annotation type syntax parsing.

use larch_ast::nodes::AnnotationType;

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse one segment of an annotation's arrow chain: an application of
    /// one or more type atoms (e.g. `Int`, `Maybe a`, `(a -> b)`).
    pub(crate) fn parse_annotation_segment(
        &mut self,
        limit: usize,
    ) -> ParseResult<AnnotationType> {
        let mut segment = self.parse_annotation_atom()?;

        // Applications left-associate: `Result e a` is `(Result e) a`
        while self.continues(limit) && self.at_annotation_atom() {
            let atom = self.parse_annotation_atom()?;
            segment = AnnotationType::Application(Box::new(segment), Box::new(atom));
        }

        Ok(segment)
    }

    fn at_annotation_atom(&self) -> bool {
        matches!(self.current().kind, TokenKind::Identifier | TokenKind::LeftParen)
    }

    fn parse_annotation_atom(&mut self) -> ParseResult<AnnotationType> {
        if self.check(TokenKind::LeftParen) {
            self.advance();

            // A parenthesized arrow chain is itself a function type; the
            // offside rule is suspended until the closing paren
            let mut segments = vec![self.parse_annotation_segment(0)?];
            while self.check(TokenKind::Arrow) {
                self.advance();
                segments.push(self.parse_annotation_segment(0)?);
            }

            self.expect(TokenKind::RightParen, "`)`")?;
            Ok(AnnotationType::Parenthesized(segments))
        } else {
            let (name, _) = self.expect_identifier("a type name")?;
            Ok(AnnotationType::Concrete(name))
        }
    }
}
