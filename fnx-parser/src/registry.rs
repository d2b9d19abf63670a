//! Static tables of the reserved names recognized at lex time.
//!
//! These tables are process-wide, read-only data. A consequence of reclassifying reserved
//! identifiers during lexing is that a user variable named `e` or `pi` cannot be expressed;
//! this restriction is intentional.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// How many arguments a built-in function accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly one argument.
    Unary,

    /// Any number of arguments, at least one.
    Variadic,

    /// Exactly this many arguments.
    Fixed(usize),
}

/// Reserved constants. An identifier matching one of these lexes as a number token carrying the
/// constant's value.
pub static CONSTANTS: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    [
        ("e", std::f64::consts::E),
        ("pi", std::f64::consts::PI),
    ]
    .into_iter()
    .collect()
});

/// Reserved function names and their arities. An identifier matching one of these lexes as a
/// function token.
pub static FUNCTIONS: Lazy<HashMap<&'static str, Arity>> = Lazy::new(|| {
    [
        ("exp", Arity::Unary),
        ("log", Arity::Unary),
        ("ln", Arity::Unary),
        ("log10", Arity::Unary),
        ("sqrt", Arity::Unary),
        ("abs", Arity::Unary),
        ("sign", Arity::Unary),
        ("sin", Arity::Unary),
        ("cos", Arity::Unary),
        ("tan", Arity::Unary),
        ("asin", Arity::Unary),
        ("acos", Arity::Unary),
        ("atan", Arity::Unary),
        ("floor", Arity::Unary),
        ("ceil", Arity::Unary),
        ("int", Arity::Unary),
        ("erf", Arity::Unary),
        ("min", Arity::Variadic),
        ("max", Arity::Variadic),
        ("normcdf", Arity::Fixed(3)),
        ("normpdf", Arity::Fixed(3)),
    ]
    .into_iter()
    .collect()
});

/// Returns the arity of the given built-in function, or [`None`] if the name is not a built-in.
pub fn arity(name: &str) -> Option<Arity> {
    FUNCTIONS.get(name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_constants() {
        assert_eq!(CONSTANTS.get("pi"), Some(&std::f64::consts::PI));
        assert_eq!(CONSTANTS.get("e"), Some(&std::f64::consts::E));
        assert_eq!(CONSTANTS.get("x"), None);
    }

    #[test]
    fn function_arities() {
        assert_eq!(arity("sin"), Some(Arity::Unary));
        assert_eq!(arity("max"), Some(Arity::Variadic));
        assert_eq!(arity("normcdf"), Some(Arity::Fixed(3)));
        assert_eq!(arity("frobnicate"), None);
    }
}
