//! Error kinds raised while tokenizing and parsing.

use ariadne::Fmt;
use fnx_error::{error_kind, EXPR};
use crate::tokenizer::TokenKind;

error_kind! {
    /// A character with no meaning in the expression grammar was encountered.
    pub struct InvalidCharacter {
        /// The offending character.
        pub character: char,
    }
    message = format!("invalid character: `{}`", character),
    labels = ["here"],
}

error_kind! {
    /// A numeric literal could not be converted to a number.
    pub struct MalformedNumber {
        /// The offending literal.
        pub literal: String,
    }
    message = format!("malformed numeric literal: `{}`", literal),
    labels = ["this literal"],
    help = "a number can contain at most one decimal point",
}

error_kind! {
    /// The end of the source code was reached unexpectedly.
    pub struct UnexpectedEof;
    message = "unexpected end of input",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
}

error_kind! {
    /// The end of the source code was expected, but something else was found.
    pub struct ExpectedEof;
    message = "expected end of input",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
}

error_kind! {
    /// An unexpected token was encountered.
    pub struct UnexpectedToken {
        /// The token(s) that were expected.
        pub expected: Vec<TokenKind>,
        /// The token that was found.
        pub found: TokenKind,
    }
    message = "unexpected token",
    labels = [format!(
        "expected one of: {}",
        expected.iter().map(|t| format!("{:?}", t)).collect::<Vec<_>>().join(", ")
    )],
    help = format!("found {:?}", found),
}

error_kind! {
    /// A parenthesis was not closed.
    pub struct UnclosedParenthesis {
        /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis
        /// was a closing parenthesis `)`.
        pub opening: bool,
    }
    message = "unclosed parenthesis",
    labels = [if *opening {
        "this parenthesis is not closed"
    } else {
        "this parenthesis has no matching opening parenthesis"
    }],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
}

error_kind! {
    /// Too many arguments were given to a function call.
    pub struct TooManyArguments {
        /// The name of the function that was called.
        pub name: String,
        /// The number of arguments that were expected.
        pub expected: usize,
        /// The number of arguments that were given.
        pub given: usize,
    }
    message = format!("too many arguments were given to the `{}` function", name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        name.as_str().fg(EXPR),
        expected,
        given
    ),
}

error_kind! {
    /// An argument to a function call is missing.
    pub struct MissingArgument {
        /// The name of the function that was called.
        pub name: String,
        /// The number of arguments that were expected.
        pub expected: usize,
        /// The number of arguments that were given.
        pub given: usize,
    }
    message = format!("missing argument(s) for the `{}` function", name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s); there are {} argument(s) provided here",
        name.as_str().fg(EXPR),
        expected,
        given
    ),
}
