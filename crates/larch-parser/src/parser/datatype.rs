//! Data-type declaration parsing.

use larch_ast::nodes::{Constructor, ConstructorType, DataType};
use larch_source::Span;

use crate::diagnostics::ParseResult;
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a `data` declaration:
    /// `data Name generics = Ctor payload | Ctor | …`.
    ///
    /// ## Errors
    ///
    /// Returns a [`crate::ParseError`] if the declaration is malformed.
    pub fn parse_data_type(&mut self) -> ParseResult<DataType> {
        let start = self.expect(TokenKind::Data, "`data`")?;
        let (name, _) = self.expect_identifier("a type name")?;

        let mut generics = Vec::new();
        while self.check(TokenKind::Identifier) && self.continues(1) {
            generics.push(self.expect_identifier("a generic parameter")?.0);
        }

        self.expect(TokenKind::Equal, "`=`")?;

        let mut constructors = vec![self.parse_constructor()?];
        while self.check(TokenKind::Pipe) && self.continues(1) {
            self.advance();
            constructors.push(self.parse_constructor()?);
        }

        let span = start.span.merge(&self.previous_span());
        Ok(DataType::new(name, generics, constructors, span))
    }

    /// Parse one constructor: a name followed by an optional payload of
    /// juxtaposed field types.
    fn parse_constructor(&mut self) -> ParseResult<Constructor> {
        let (name, name_span) = self.expect_identifier("a constructor name")?;

        let mut payload: Option<ConstructorType> = None;
        let mut span = name_span;

        while self.continues(1) && self.at_constructor_type_atom() {
            let (atom, atom_span) = self.parse_constructor_type_atom()?;
            span = span.merge(&atom_span);
            payload = Some(match payload {
                None => atom,
                Some(previous) => {
                    ConstructorType::Applied(Box::new(previous), Box::new(atom))
                }
            });
        }

        Ok(Constructor::new(name, payload, span))
    }

    fn at_constructor_type_atom(&self) -> bool {
        matches!(self.current().kind, TokenKind::Identifier | TokenKind::LeftParen)
    }

    fn parse_constructor_type_atom(&mut self) -> ParseResult<(ConstructorType, Span)> {
        if self.check(TokenKind::LeftParen) {
            let open = self.advance();

            // The offside rule is suspended between parentheses
            let mut inner: Option<ConstructorType> = None;
            while self.at_constructor_type_atom() {
                let (atom, _) = self.parse_constructor_type_atom()?;
                inner = Some(match inner {
                    None => atom,
                    Some(previous) => {
                        ConstructorType::Applied(Box::new(previous), Box::new(atom))
                    }
                });
            }

            let Some(inner) = inner else {
                return Err(self.unexpected("a type"));
            };

            let close = self.expect(TokenKind::RightParen, "`)`")?;
            Ok((
                ConstructorType::Parenthesized(Box::new(inner)),
                open.span.merge(&close.span),
            ))
        } else {
            let (name, span) = self.expect_identifier("a type name")?;
            Ok((ConstructorType::Concrete(name), span))
        }
    }
}
