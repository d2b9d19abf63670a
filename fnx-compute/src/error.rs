//! Error kinds raised during evaluation and symbolic transformation.
//!
//! Unlike parse errors, most of these are raised against trees synthesized by a transformation
//! pass rather than parsed from text, so they usually carry no spans; their reports consist of a
//! message and help text only.

use ariadne::Fmt;
use fnx_error::{error_kind, EXPR};

/// Formats the "did you mean" list used in the help text of name errors.
fn format_suggestions(suggestions: &[String]) -> String {
    let names = suggestions
        .iter()
        .map(|name| format!("`{}`", name.as_str().fg(EXPR)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("did you mean {}?", names)
}

error_kind! {
    /// Evaluation looked up a variable with no bound value.
    pub struct UndefinedVariable {
        /// The name of the variable.
        pub name: String,

        /// Similarly named variables that are bound, if any.
        pub suggestions: Vec<String>,
    }
    message = format!("the variable `{}` is not defined", name),
    labels = ["this variable"],
    help = if suggestions.is_empty() {
        "bind a value to this variable before evaluating".to_string()
    } else {
        format_suggestions(suggestions)
    },
}

error_kind! {
    /// A binding names a variable that does not occur in the expression.
    pub struct UnknownName {
        /// The offending binding name.
        pub name: String,

        /// Similarly named variables of the expression, if any.
        pub suggestions: Vec<String>,
    }
    message = format!("`{}` is not a variable of this function", name),
    labels = ["this name"],
    help = if suggestions.is_empty() {
        "bindings can only name variables that occur in the expression".to_string()
    } else {
        format_suggestions(suggestions)
    },
}

error_kind! {
    /// A call names a function the evaluator does not know.
    ///
    /// Parsed trees cannot contain one of these, but synthesized trees can.
    pub struct UndefinedFunction {
        /// The name of the function.
        pub name: String,
    }
    message = format!("the function `{}` is not defined", name),
    labels = ["this function call"],
}

error_kind! {
    /// Differentiation reached a function with no derivative rule.
    pub struct MissingDerivative {
        /// The name of the function.
        pub name: String,
    }
    message = format!("cannot differentiate the `{}` function", name),
    labels = ["this function call"],
    help = "there is no derivative rule for this function",
}

error_kind! {
    /// A builtin was evaluated with the wrong number of arguments.
    pub struct WrongArgumentCount {
        /// The name of the function.
        pub name: String,

        /// The number of arguments the function takes.
        pub expected: usize,

        /// The number of arguments that were given.
        pub given: usize,
    }
    message = format!("wrong number of arguments for the `{}` function", name),
    labels = ["this function call"],
    help = format!(
        "the `{}` function takes {} argument(s), but {} were provided",
        name.as_str().fg(EXPR),
        expected,
        given
    ),
}

error_kind! {
    /// A positional call supplied the wrong number of values for the expression's variables.
    pub struct WrongValueCount {
        /// The number of variables in the expression.
        pub expected: usize,

        /// The number of values that were given.
        pub given: usize,
    }
    message = "wrong number of values for this function",
    labels = ["this call"],
    help = format!(
        "this function takes {} value(s), one per variable, but {} were provided",
        expected, given
    ),
}
