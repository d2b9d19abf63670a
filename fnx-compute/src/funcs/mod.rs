//! The built-in `f64` function library.
//!
//! Each function is implemented as a unit `struct` with an associated `eval_static` method, so a
//! builtin can be called directly from Rust code when its name is known at compile time. The
//! [`unary`] dispatcher covers the single-argument builtins by surface name; the multi-argument
//! builtins (`min`, `max`, `normcdf`, `normpdf`) are dispatched explicitly by the evaluator.

pub mod miscellaneous;
pub mod power;
pub mod probability;
pub mod round;
pub mod trigonometry;

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Declares unit structs for single-argument builtins.
macro_rules! build_unary {
    ($($(#[$attr:meta])* $upname:ident; $func:expr),* $(,)?) => {
        $(
            $(#[$attr])*
            #[derive(Debug)]
            pub struct $upname;

            impl $upname {
                pub fn eval_static(n: f64) -> f64 {
                    let func: fn(f64) -> f64 = $func;
                    func(n)
                }
            }
        )*
    };
}

pub(crate) use build_unary;

/// Dispatch table for the single-argument builtins, keyed by surface name.
static UNARY: Lazy<HashMap<&'static str, fn(f64) -> f64>> = Lazy::new(|| {
    use miscellaneous::*;
    use power::*;
    use probability::Erf;
    use round::*;
    use trigonometry::*;

    macro_rules! build {
        ($($name:literal $upname:ident),* $(,)?) => {
            [
                $(
                    ($name, $upname::eval_static as fn(f64) -> f64),
                )*
            ]
                .into_iter()
                .collect()
        };
    }

    build! {
        "exp" Exp,
        "log" Ln,
        "ln" Ln,
        "log10" Log10,
        "sqrt" Sqrt,
        "abs" Abs,
        "sign" Sign,
        "sin" Sin,
        "cos" Cos,
        "tan" Tan,
        "asin" Asin,
        "acos" Acos,
        "atan" Atan,
        "floor" Floor,
        "ceil" Ceil,
        "int" Int,
        "erf" Erf,
    }
});

/// Evaluates the named single-argument builtin at `x`, or [`None`] if the name is unknown.
pub fn unary(name: &str, x: f64) -> Option<f64> {
    UNARY.get(name).map(|func| func(x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_is_an_alias_for_ln() {
        assert_eq!(unary("log", 7.0), unary("ln", 7.0));
    }

    #[test]
    fn unknown_name_dispatches_to_none() {
        assert_eq!(unary("frobnicate", 1.0), None);
    }
}
