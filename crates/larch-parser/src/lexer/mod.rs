//! Lexer for the Larch programming language.
//!
//! This module converts source text into tokens. It uses the `logos` crate
//! for tokenization and annotates every token with the layout information
//! the parser's offside rule needs: whether the token begins a line, and
//! its 1-indexed column.

mod token;

use larch_source::Span;
use logos::Logos;
pub use token::{Token, TokenKind};

use crate::diagnostics::ParseError;

/// The Larch lexer.
///
/// Produces the full token stream for a source file eagerly, terminated by a
/// synthetic [`TokenKind::EndOfFile`] token.
#[derive(Debug)]
pub struct Lexer<'src> {
    /// Source code being tokenized
    source: &'src str,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source
    #[must_use]
    pub const fn new(source: &'src str) -> Self { Self { source } }

    /// Tokenizes the whole source.
    ///
    /// Newlines are consumed here: they update the layout bookkeeping and
    /// are not part of the returned stream.
    ///
    /// ## Errors
    ///
    /// Returns a [`ParseError::InvalidToken`] for the first character that
    /// does not start any token.
    pub fn tokenize(&self) -> Result<Vec<Token<'src>>, ParseError> {
        let mut tokens = Vec::new();
        let mut inner = TokenKind::lexer(self.source);
        let mut line_start_offset = 0;
        let mut at_line_start = true;

        while let Some(result) = inner.next() {
            let range = inner.span();
            let span = Span::new(range.start, range.end);

            match result {
                Ok(TokenKind::Newline) => {
                    line_start_offset = range.end;
                    at_line_start = true;
                }
                Ok(kind) => {
                    let column = range.start - line_start_offset + 1;
                    tokens.push(Token::new(kind, inner.slice(), span, at_line_start, column));
                    at_line_start = false;
                }
                Err(()) => {
                    let character =
                        self.source[range.start..].chars().next().unwrap_or('\u{fffd}');
                    return Err(ParseError::InvalidToken { character, span });
                }
            }
        }

        tokens.push(Token::end_of_file(self.source.len()));
        Ok(tokens)
    }
}
