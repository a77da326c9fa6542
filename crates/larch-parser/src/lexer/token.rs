//! Token definitions for the Larch programming language.

use std::fmt::{self, Display, Formatter};

use larch_source::Span;
use logos::Logos;

/// The token types recognized by the lexer.
///
/// Whitespace separates tokens and is otherwise insignificant within a line;
/// newlines are tracked (not emitted) so the parser can apply the offside
/// rule. Comments run from `--` to the end of the line.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[logos(skip r"[ \t\r\f]+")]
pub enum TokenKind {
    // Keywords
    #[token("case")]
    Case,
    #[token("of")]
    Of,
    #[token("let")]
    Let,
    #[token("in")]
    In,
    #[token("data")]
    Data,

    // Literals
    #[regex(r"[0-9]+\.[0-9]+")]
    FloatLiteral,
    #[regex(r"[0-9]+")]
    IntLiteral,
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,

    // Identifiers
    #[regex(r"[A-Za-z]+")]
    Identifier,

    // Operators
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("++")]
    PlusPlus,

    // Punctuation
    #[token("=")]
    Equal,
    #[token("->")]
    Arrow,
    #[token("::")]
    DoubleColon,
    #[token("|")]
    Pipe,
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token(";")]
    Semicolon,
    #[token("_")]
    Underscore,

    // Whitespace and comments
    #[token("\n")]
    Newline,
    #[regex(r"--[^\n]*", logos::skip)]
    Comment,

    // Synthetic tokens
    EndOfFile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Case => "`case`",
            Self::Of => "`of`",
            Self::Let => "`let`",
            Self::In => "`in`",
            Self::Data => "`data`",
            Self::FloatLiteral => "a float literal",
            Self::IntLiteral => "an integer literal",
            Self::StringLiteral => "a string literal",
            Self::Identifier => "an identifier",
            Self::Plus => "`+`",
            Self::Minus => "`-`",
            Self::Star => "`*`",
            Self::Slash => "`/`",
            Self::PlusPlus => "`++`",
            Self::Equal => "`=`",
            Self::Arrow => "`->`",
            Self::DoubleColon => "`::`",
            Self::Pipe => "`|`",
            Self::LeftParen => "`(`",
            Self::RightParen => "`)`",
            Self::Semicolon => "`;`",
            Self::Underscore => "`_`",
            Self::Newline => "a newline",
            Self::Comment => "a comment",
            Self::EndOfFile => "end of file",
        };
        write!(f, "{text}")
    }
}

/// A single token with its source text and layout information.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token<'src> {
    /// The kind of token.
    pub kind: TokenKind,
    /// The lexeme (the actual text of the token) from the source code.
    pub lexeme: &'src str,
    /// The span of the token in the source code.
    pub span: Span,
    /// Whether this token is the first on its line.
    pub line_start: bool,
    /// The 1-indexed column of the token's first byte. The synthetic
    /// end-of-file token has column 0 so it never continues a construct.
    pub column: usize,
}

impl<'src> Token<'src> {
    /// Creates a new token.
    #[must_use]
    pub const fn new(
        kind: TokenKind,
        lexeme: &'src str,
        span: Span,
        line_start: bool,
        column: usize,
    ) -> Self {
        Self { kind, lexeme, span, line_start, column }
    }

    /// Creates the synthetic end-of-file token.
    #[must_use]
    pub const fn end_of_file(offset: usize) -> Self {
        Self {
            kind: TokenKind::EndOfFile,
            lexeme: "",
            span: Span::new(offset, offset),
            line_start: true,
            column: 0,
        }
    }

    /// Describes the token for an error message.
    #[must_use]
    pub fn describe(&self) -> String {
        if self.lexeme.is_empty() {
            self.kind.to_string()
        } else {
            format!("`{}`", self.lexeme)
        }
    }
}
