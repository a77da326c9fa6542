//! Expression parsing.

use larch_ast::Ident;
use larch_ast::nodes::{CaseBranch, Expression, OperatorKind};

use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse an expression under the given layout column.
    ///
    /// ## Errors
    ///
    /// Returns a [`crate::ParseError`] if no expression can be parsed.
    pub fn parse_expression(&mut self, limit: usize) -> ParseResult<Expression> {
        match self.current().kind {
            TokenKind::Case => self.parse_case(limit),
            TokenKind::Let => self.parse_let(limit),
            _ => self.parse_infix(limit),
        }
    }

    /// Parse an application chain, optionally followed by an infix operator.
    ///
    /// Precedence is flat and operators associate to the right: `1 - 2 - 3`
    /// parses as `1 - (2 - 3)`.
    fn parse_infix(&mut self, limit: usize) -> ParseResult<Expression> {
        let left = self.parse_apply(limit)?;

        if let Some(op) = self.operator_kind() {
            if self.continues(limit) {
                self.advance();
                let right = self.parse_expression(limit)?;
                let span = left.span().merge(&right.span());
                return Ok(Expression::Infix {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                    span,
                });
            }
        }

        Ok(left)
    }

    fn operator_kind(&self) -> Option<OperatorKind> {
        match self.current().kind {
            TokenKind::Plus => Some(OperatorKind::Add),
            TokenKind::Minus => Some(OperatorKind::Subtract),
            TokenKind::Star => Some(OperatorKind::Multiply),
            TokenKind::Slash => Some(OperatorKind::Divide),
            TokenKind::PlusPlus => Some(OperatorKind::StringAdd),
            _ => None,
        }
    }

    /// Parse juxtaposition application: one or more atoms.
    fn parse_apply(&mut self, limit: usize) -> ParseResult<Expression> {
        let mut expression = self.parse_atom()?;

        while self.at_atom() && self.continues(limit) {
            let argument = self.parse_atom()?;
            let span = expression.span().merge(&argument.span());
            expression = Expression::Apply {
                function: Box::new(expression),
                argument: Box::new(argument),
                span,
            };
        }

        Ok(expression)
    }

    fn at_atom(&self) -> bool {
        matches!(
            self.current().kind,
            TokenKind::Identifier
                | TokenKind::IntLiteral
                | TokenKind::FloatLiteral
                | TokenKind::StringLiteral
                | TokenKind::LeftParen
        )
    }

    fn parse_atom(&mut self) -> ParseResult<Expression> {
        match self.current().kind {
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expression::Identifier(Ident::new(token.lexeme), token.span))
            }
            TokenKind::IntLiteral => {
                let token = self.advance();
                let value = token.lexeme.parse::<i64>().map_err(|_| {
                    ParseError::InvalidNumber {
                        literal: token.lexeme.to_string(),
                        span: token.span,
                    }
                })?;
                Ok(Expression::Number(value, token.span))
            }
            TokenKind::FloatLiteral => {
                let token = self.advance();
                let value = token.lexeme.parse::<f64>().map_err(|_| {
                    ParseError::InvalidNumber {
                        literal: token.lexeme.to_string(),
                        span: token.span,
                    }
                })?;
                Ok(Expression::Float(value, token.span))
            }
            TokenKind::StringLiteral => {
                let token = self.advance();
                let contents = &token.lexeme[1..token.lexeme.len() - 1];
                Ok(Expression::String(contents.to_string(), token.span))
            }
            TokenKind::LeftParen => {
                let open = self.advance();
                // The offside rule is suspended between parentheses
                let inner = self.parse_expression(0)?;
                let close = self.expect(TokenKind::RightParen, "`)`")?;
                Ok(Expression::Parenthesized(
                    Box::new(inner),
                    open.span.merge(&close.span),
                ))
            }
            _ => Err(self.unexpected("an expression")),
        }
    }

    /// Parse a `case … of …` expression. The first branch fixes the branch
    /// column: every later line starting at exactly that column begins a
    /// new branch, and `;` separates branches within a line.
    fn parse_case(&mut self, limit: usize) -> ParseResult<Expression> {
        let start = self.expect(TokenKind::Case, "`case`")?;
        let scrutinee = self.parse_infix(limit)?;
        self.expect(TokenKind::Of, "`of`")?;

        let branch_column = self.current().column;
        let mut branches = Vec::new();

        loop {
            let pattern = self.parse_case_pattern(branch_column)?;
            self.expect(TokenKind::Arrow, "`->`")?;
            let body = self.parse_expression(branch_column)?;
            branches.push(CaseBranch::new(pattern, body));

            if self.check(TokenKind::Semicolon) && self.continues(limit) {
                self.advance();
                continue;
            }

            let token = self.current();
            let next_branch = token.kind != TokenKind::EndOfFile
                && token.line_start
                && token.column == branch_column
                && branch_column > limit
                && self.at_branch_pattern();
            if !next_branch {
                break;
            }
        }

        let end = branches.last().map_or(start.span, |branch| branch.body.span());
        Ok(Expression::Case {
            scrutinee: Box::new(scrutinee),
            branches,
            span: start.span.merge(&end),
        })
    }

    fn at_branch_pattern(&self) -> bool { self.at_pattern_atom() }

    /// Parse a `let … in …` expression. The first binding fixes the binding
    /// column; `in` closes the block.
    fn parse_let(&mut self, limit: usize) -> ParseResult<Expression> {
        let start = self.expect(TokenKind::Let, "`let`")?;

        let binding_column = self.current().column;
        let mut bindings = Vec::new();

        loop {
            bindings.push(self.parse_declaration(binding_column)?);

            if self.check(TokenKind::Semicolon) {
                self.advance();
                continue;
            }

            if self.check(TokenKind::In) {
                break;
            }

            let token = self.current();
            let next_binding = token.kind == TokenKind::Identifier
                && token.line_start
                && token.column == binding_column;
            if !next_binding {
                break;
            }
        }

        self.expect(TokenKind::In, "`in`")?;
        let body = self.parse_expression(limit)?;

        let span = start.span.merge(&body.span());
        Ok(Expression::Let { bindings, body: Box::new(body), span })
    }
}
