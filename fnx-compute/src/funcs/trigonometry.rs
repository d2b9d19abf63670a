//! Trigonometric functions and their inverses. All angles are in radians.

use super::build_unary;

build_unary! {
    Sin; f64::sin,
    Cos; f64::cos,
    Tan; f64::tan,
    Asin; f64::asin,
    Acos; f64::acos,
    Atan; f64::atan,
}
