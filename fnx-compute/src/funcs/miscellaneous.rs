//! Absolute value, sign, and order statistics.

use super::build_unary;

build_unary! {
    /// The absolute value.
    Abs; f64::abs,

    /// The sign of `n`: `-1`, `0`, or `1`.
    Sign; |n: f64| {
        if n > 0.0 {
            1.0
        } else if n < 0.0 {
            -1.0
        } else {
            0.0
        }
    },
}

/// The smallest of the given values.
#[derive(Debug)]
pub struct Min;

impl Min {
    pub fn eval_static(args: &[f64]) -> f64 {
        args.iter().copied().fold(f64::INFINITY, f64::min)
    }
}

/// The largest of the given values.
#[derive(Debug)]
pub struct Max;

impl Max {
    pub fn eval_static(args: &[f64]) -> f64 {
        args.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }
}
