pub mod token;

use crate::parser::error::{InvalidCharacter, MalformedNumber};
use crate::registry;
use fnx_error::Error;
use logos::{Lexer, Logos};
pub use token::{LexKind, Token, TokenKind};

/// Returns an iterator over the raw token classes produced by the lexer.
pub fn tokenize(input: &str) -> Lexer<LexKind> {
    LexKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer, terminated by
/// exactly one [`TokenKind::Eof`] token. This allows the parser to re-read tokens by absolute
/// index.
///
/// Reserved identifiers are reclassified here: a name in the constant table becomes a
/// [`TokenKind::Num`] token carrying the constant's value, and a name in the function table
/// becomes a [`TokenKind::Func`] token. Numeric literals are converted to `f64` up front; a
/// literal with more than one decimal point fails with [`MalformedNumber`].
pub fn tokenize_complete(input: &str) -> Result<Box<[Token]>, Error> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let kind = result.map_err(|()| {
            Error::new(vec![lexer.span()], InvalidCharacter {
                character: lexer.slice().chars().next().unwrap_or('\0'),
            })
        })?;
        let lexeme = lexer.slice();

        let (kind, num) = match kind {
            LexKind::Num => {
                let value = lexeme.parse::<f64>().map_err(|_| {
                    Error::new(vec![lexer.span()], MalformedNumber {
                        literal: lexeme.to_owned(),
                    })
                })?;
                (TokenKind::Num, value)
            },
            LexKind::Name => {
                if let Some(&value) = registry::CONSTANTS.get(lexeme) {
                    (TokenKind::Num, value)
                } else if registry::arity(lexeme).is_some() {
                    (TokenKind::Func, 0.0)
                } else {
                    (TokenKind::Name, 0.0)
                }
            },
            other => (other.into(), 0.0),
        };

        tokens.push(Token {
            span: lexer.span(),
            kind,
            lexeme,
            num,
        });
    }

    tokens.push(Token {
        span: input.len()..input.len(),
        kind: TokenKind::Eof,
        lexeme: "",
        num: 0.0,
    });

    Ok(tokens.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens. The terminating
    /// `Eof` token is implied.
    fn compare_tokens<const N: usize>(input: &str, expected: [(TokenKind, &str); N]) {
        let tokens = tokenize_complete(input).unwrap();

        assert_eq!(tokens.len(), N + 1);
        for (token, (expected_kind, expected_lexeme)) in tokens.iter().zip(expected) {
            assert_eq!(token.kind, expected_kind);
            assert_eq!(token.lexeme, expected_lexeme);
        }
        assert_eq!(tokens.last().unwrap().kind, TokenKind::Eof);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                (TokenKind::Num, "1"),
                (TokenKind::Add, "+"),
                (TokenKind::Num, "2"),
            ],
        );
    }

    #[test]
    fn power_matched_before_mul() {
        compare_tokens(
            "2**3*4",
            [
                (TokenKind::Num, "2"),
                (TokenKind::Exp, "**"),
                (TokenKind::Num, "3"),
                (TokenKind::Mul, "*"),
                (TokenKind::Num, "4"),
            ],
        );
    }

    #[test]
    fn reserved_constant_becomes_number() {
        let tokens = tokenize_complete("pi * r ** 2").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Num);
        assert_eq!(tokens[0].num, std::f64::consts::PI);
        assert_eq!(tokens[0].lexeme, "pi");
        assert_eq!(tokens[2].kind, TokenKind::Name);
    }

    #[test]
    fn reserved_function_becomes_func() {
        compare_tokens(
            "sin(x)",
            [
                (TokenKind::Func, "sin"),
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn number_value_is_parsed() {
        let tokens = tokenize_complete("3.25").unwrap();
        assert_eq!(tokens[0].num, 3.25);
    }

    #[test]
    fn leading_decimal_point() {
        let tokens = tokenize_complete(".5").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Num);
        assert_eq!(tokens[0].num, 0.5);
    }

    #[test]
    fn two_decimal_points_is_an_error() {
        assert!(tokenize_complete("1.2.3").is_err());
    }

    #[test]
    fn invalid_character_is_an_error() {
        assert!(tokenize_complete("1 + $").is_err());
    }

    #[test]
    fn eof_is_always_appended() {
        let tokens = tokenize_complete("").unwrap();
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].kind, TokenKind::Eof);
    }
}
