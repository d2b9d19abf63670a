//! Rounding and truncation functions.

use super::build_unary;

build_unary! {
    /// Rounds toward negative infinity.
    Floor; f64::floor,

    /// Rounds toward positive infinity.
    Ceil; f64::ceil,

    /// Truncates toward zero.
    Int; f64::trunc,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_values_split_floor_and_int() {
        assert_eq!(Floor::eval_static(-1.5), -2.0);
        assert_eq!(Int::eval_static(-1.5), -1.0);
        assert_eq!(Ceil::eval_static(-1.5), -1.0);
    }
}
