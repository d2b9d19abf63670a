//! Exponential, logarithmic, and root functions.

use super::build_unary;

build_unary! {
    /// The exponential function, `e**n`.
    Exp; f64::exp,

    /// The natural logarithm. Surfaced as both `log` and `ln`.
    Ln; f64::ln,

    /// The base-10 logarithm.
    Log10; f64::log10,

    /// The square root.
    Sqrt; f64::sqrt,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;

    #[test]
    fn exp_and_ln_are_inverses() {
        assert_float_absolute_eq!(Ln::eval_static(Exp::eval_static(2.5)), 2.5);
    }

    #[test]
    fn log10_of_powers_of_ten() {
        assert_float_absolute_eq!(Log10::eval_static(1000.0), 3.0);
    }

    #[test]
    fn sqrt_of_square() {
        assert_float_absolute_eq!(Sqrt::eval_static(49.0), 7.0);
    }
}
