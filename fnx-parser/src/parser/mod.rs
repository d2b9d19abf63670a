pub mod ast;
pub mod error;

use crate::registry::{self, Arity};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use ast::{BinOp, Expr, UnaryOp};
use error::{
    ExpectedEof,
    MissingArgument,
    TooManyArguments,
    UnclosedParenthesis,
    UnexpectedEof,
    UnexpectedToken,
};
use fnx_error::{Error, ErrorKind};

/// A recursive-descent parser over a fully materialized token stream.
///
/// The grammar, from lowest to highest precedence:
///
/// ```text
/// sum     := product (('+' | '-') product)*      left-associative
/// product := signed (('*' | '/') signed)*        left-associative
/// signed  := ('+' | '-') signed | power
/// power   := call ('**' power)?                  right-associative
/// call    := FUNC '(' sum (',' sum)* ')' | atom
/// atom    := NUM | NAME | '(' sum ')'
/// ```
///
/// The grammar is deterministic (the tokenizer has already reclassified reserved names), so no
/// backtracking is required: every step either consumes the token it expects or fails.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source. Fails if the source cannot be tokenized.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
        })
    }

    /// Returns the current token. The terminating `Eof` token guarantees the cursor always
    /// points at a real token.
    fn current(&self) -> &Token<'source> {
        &self.tokens[self.cursor.min(self.tokens.len() - 1)]
    }

    /// Returns the current token and advances the cursor. The cursor never moves past the
    /// terminating `Eof` token.
    fn advance(&mut self) -> Token<'source> {
        let token = self.current().clone();
        if token.kind != TokenKind::Eof {
            self.cursor += 1;
        }
        token
    }

    /// Creates an error that points at the current token.
    fn error_here(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.current().span.clone()], kind)
    }

    /// Consumes the current token if it has the given kind, or fails with [`UnexpectedToken`]
    /// (or [`UnexpectedEof`] at the end of the stream).
    fn expect(&mut self, kind: TokenKind) -> Result<Token<'source>, Error> {
        match self.current().kind {
            k if k == kind => Ok(self.advance()),
            TokenKind::Eof => Err(self.error_here(UnexpectedEof)),
            found => Err(self.error_here(UnexpectedToken {
                expected: vec![kind],
                found,
            })),
        }
    }

    /// Parses a complete expression. All tokens must be consumed; anything left over after a
    /// well-formed expression is an error.
    pub fn parse_full(&mut self) -> Result<Expr, Error> {
        let expr = self.sum()?;
        match self.current().kind {
            TokenKind::Eof => Ok(expr),
            TokenKind::CloseParen => Err(self.error_here(UnclosedParenthesis { opening: false })),
            _ => Err(self.error_here(ExpectedEof)),
        }
    }

    /// `sum := product (('+' | '-') product)*`
    fn sum(&mut self) -> Result<Expr, Error> {
        let mut node = self.product()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Add => BinOp::Add,
                TokenKind::Sub => BinOp::Sub,
                _ => break,
            };
            self.advance();
            node = Expr::Binary(op, Box::new(node), Box::new(self.product()?));
        }
        Ok(node)
    }

    /// `product := signed (('*' | '/') signed)*`
    fn product(&mut self) -> Result<Expr, Error> {
        let mut node = self.signed()?;
        loop {
            let op = match self.current().kind {
                TokenKind::Mul => BinOp::Mul,
                TokenKind::Div => BinOp::Div,
                _ => break,
            };
            self.advance();
            node = Expr::Binary(op, Box::new(node), Box::new(self.signed()?));
        }
        Ok(node)
    }

    /// `signed := ('+' | '-') signed | power`
    fn signed(&mut self) -> Result<Expr, Error> {
        let op = match self.current().kind {
            TokenKind::Add => UnaryOp::Pos,
            TokenKind::Sub => UnaryOp::Neg,
            _ => return self.power(),
        };
        self.advance();
        Ok(Expr::Unary(op, Box::new(self.signed()?)))
    }

    /// `power := call ('**' power)?`
    ///
    /// The right operand recurses into `power` itself, making `a**b**c` parse as `a**(b**c)`.
    fn power(&mut self) -> Result<Expr, Error> {
        let lhs = self.call()?;
        if self.current().kind == TokenKind::Exp {
            self.advance();
            let rhs = self.power()?;
            Ok(Expr::pow(lhs, rhs))
        } else {
            Ok(lhs)
        }
    }

    /// `call := FUNC '(' sum (',' sum)* ')' | atom`
    ///
    /// The function's arity class, looked up in the static registry, decides whether the node
    /// becomes a [`Expr::Call`] (exactly one argument) or a [`Expr::MultiCall`], and enforces
    /// the argument-count limit of bounded multi-argument functions.
    fn call(&mut self) -> Result<Expr, Error> {
        if self.current().kind != TokenKind::Func {
            return self.atom();
        }

        let func = self.advance();
        let name = func.lexeme;
        let open = self.expect(TokenKind::OpenParen)?;

        let mut args = vec![self.sum()?];
        while self.current().kind == TokenKind::Comma {
            self.advance();
            args.push(self.sum()?);
        }

        if self.current().kind != TokenKind::CloseParen {
            return Err(Error::new(vec![open.span.clone()], UnclosedParenthesis {
                opening: true,
            }));
        }
        let close = self.advance();
        let span = func.span.start..close.span.end;

        let arity = match registry::arity(name) {
            Some(arity) => arity,
            // the tokenizer only emits `Func` for registered names
            None => unreachable!("unregistered function token: {name}"),
        };

        match arity {
            Arity::Unary => {
                if args.len() != 1 {
                    return Err(Error::new(vec![span], TooManyArguments {
                        name: name.to_owned(),
                        expected: 1,
                        given: args.len(),
                    }));
                }
                Ok(Expr::Call(name.to_owned(), Box::new(args.remove(0))))
            },
            Arity::Variadic => Ok(Expr::MultiCall(name.to_owned(), args)),
            Arity::Fixed(expected) => {
                if args.len() > expected {
                    Err(Error::new(vec![span], TooManyArguments {
                        name: name.to_owned(),
                        expected,
                        given: args.len(),
                    }))
                } else if args.len() < expected {
                    Err(Error::new(vec![span], MissingArgument {
                        name: name.to_owned(),
                        expected,
                        given: args.len(),
                    }))
                } else {
                    Ok(Expr::MultiCall(name.to_owned(), args))
                }
            },
        }
    }

    /// `atom := NUM | NAME | '(' sum ')'`
    fn atom(&mut self) -> Result<Expr, Error> {
        match self.current().kind {
            TokenKind::Num => {
                let token = self.advance();
                Ok(Expr::Num(token.num))
            },
            TokenKind::Name => {
                let token = self.advance();
                Ok(Expr::Var(token.lexeme.to_owned()))
            },
            TokenKind::OpenParen => {
                let open = self.advance();
                let node = self.sum()?;
                if self.current().kind != TokenKind::CloseParen {
                    return Err(Error::new(vec![open.span], UnclosedParenthesis {
                        opening: true,
                    }));
                }
                self.advance();
                Ok(node)
            },
            TokenKind::Eof => Err(self.error_here(UnexpectedEof)),
            found => Err(self.error_here(UnexpectedToken {
                expected: vec![TokenKind::Num, TokenKind::Name, TokenKind::OpenParen],
                found,
            })),
        }
    }
}
