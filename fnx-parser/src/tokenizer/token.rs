use logos::Logos;
use std::ops::Range;

/// The raw token classes recognized by the lexer.
///
/// This is what `logos` scans for; [`tokenize_complete`](super::tokenize_complete) maps each raw
/// class into a [`TokenKind`], reclassifying reserved identifiers along the way.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
pub enum LexKind {
    // `**` must win over `*`
    #[token("**")]
    Exp,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token(",")]
    Comma,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Name,

    #[regex(r"[0-9.]+")]
    Num,
}

/// The different kinds of tokens handed to the parser.
///
/// [`Func`](TokenKind::Func) and [`Eof`](TokenKind::Eof) are never produced by the raw lexer;
/// they are introduced by [`tokenize_complete`](super::tokenize_complete), which reclassifies
/// reserved identifiers and terminates the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TokenKind {
    Exp,
    Add,
    Sub,
    Mul,
    Div,
    OpenParen,
    CloseParen,
    Comma,

    /// A variable identifier.
    Name,

    /// A numeric literal, or a reserved constant such as `pi`.
    Num,

    /// A reserved built-in function name, such as `sin` or `normcdf`.
    Func,

    /// The end of the token stream. Every complete stream contains exactly one of these, as its
    /// final token.
    Eof,
}

impl From<LexKind> for TokenKind {
    fn from(kind: LexKind) -> Self {
        match kind {
            LexKind::Exp => TokenKind::Exp,
            LexKind::Add => TokenKind::Add,
            LexKind::Sub => TokenKind::Sub,
            LexKind::Mul => TokenKind::Mul,
            LexKind::Div => TokenKind::Div,
            LexKind::OpenParen => TokenKind::OpenParen,
            LexKind::CloseParen => TokenKind::CloseParen,
            LexKind::Comma => TokenKind::Comma,
            LexKind::Name => TokenKind::Name,
            LexKind::Num => TokenKind::Num,
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was scanned into this token. For a [`TokenKind::Num`] token produced
    /// from a reserved constant, this is the constant's name (`e` or `pi`), not a numeral.
    pub lexeme: &'source str,

    /// The numeric value of a [`TokenKind::Num`] token; `0.0` for every other kind.
    pub num: f64,
}
