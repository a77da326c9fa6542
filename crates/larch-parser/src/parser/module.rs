//! Top-level item parsing.

use larch_ast::Ident;
use larch_ast::nodes::{Module, TopLevel};

use crate::diagnostics::{ParseError, ParseResult};
use crate::lexer::TokenKind;
use crate::parser::Parser;

impl Parser<'_> {
    /// Parse a complete module: data-type and function declarations until
    /// end of file.
    ///
    /// ## Errors
    ///
    /// Returns a [`ParseError`] on the first syntax error; there is no
    /// recovery.
    pub fn parse_module(&mut self) -> ParseResult<Module> {
        let mut items = Vec::new();
        let mut previous_function: Option<Ident> = None;

        while !self.check(TokenKind::EndOfFile) {
            let token = self.current();
            if token.column != 1 {
                return Err(ParseError::MisalignedTopLevel { span: token.span });
            }

            if self.check(TokenKind::Data) {
                items.push(TopLevel::DataType(self.parse_data_type()?));
                previous_function = None;
            } else {
                let declaration = self.parse_declaration(1)?;

                // Multi-equation definitions are not supported; a repeated
                // name directly after its own equation is the one form we
                // can detect syntactically.
                if previous_function.as_ref() == Some(&declaration.name) {
                    return Err(ParseError::MultipleEquations {
                        name: declaration.name.clone(),
                        span: declaration.span,
                    });
                }

                previous_function = Some(declaration.name.clone());
                items.push(TopLevel::Function(declaration));
            }
        }

        Ok(Module::new(items))
    }
}
