//! The error function and the normal distribution.

use super::build_unary;
use std::f64::consts::{PI, SQRT_2};

build_unary! {
    /// The error function, computed with the rational approximation 7.1.26 from Abramowitz &
    /// Stegun, *Handbook of Mathematical Functions*. Maximum absolute error 1.5e-7.
    Erf; |n: f64| {
        const P: f64 = 0.3275911;
        const A: [f64; 5] = [0.254829592, -0.284496736, 1.421413741, -1.453152027, 1.061405429];

        let x = n.abs();
        let t = 1.0 / (1.0 + P * x);
        let poly = A.iter().rev().fold(0.0, |acc, &a| acc * t + a) * t;
        (1.0 - poly * (-x * x).exp()).copysign(n)
    },
}

/// The cumulative distribution function of the normal distribution with the given mean and
/// standard deviation, evaluated at `x`.
#[derive(Debug)]
pub struct Normcdf;

impl Normcdf {
    pub fn eval_static(x: f64, mean: f64, std_dev: f64) -> f64 {
        0.5 * (1.0 + Erf::eval_static((x - mean) / (std_dev * SQRT_2)))
    }
}

/// The probability density function of the normal distribution with the given mean and standard
/// deviation, evaluated at `x`.
#[derive(Debug)]
pub struct Normpdf;

impl Normpdf {
    pub fn eval_static(x: f64, mean: f64, std_dev: f64) -> f64 {
        let z = (x - mean) / std_dev;
        (-0.5 * z * z).exp() / (std_dev * (2.0 * PI).sqrt())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // tolerance matching the approximation error of Erf
    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-6,
            "{actual} is not within 1e-6 of {expected}",
        );
    }

    #[test]
    fn erf_at_reference_points() {
        assert_close(Erf::eval_static(0.0), 0.0);
        assert_close(Erf::eval_static(1.0), 0.842_700_792_9);
        assert_close(Erf::eval_static(-1.0), -0.842_700_792_9);
        assert_close(Erf::eval_static(2.0), 0.995_322_265_0);
    }

    #[test]
    fn normcdf_at_reference_points() {
        assert_close(Normcdf::eval_static(0.0, 0.0, 1.0), 0.5);
        assert_close(Normcdf::eval_static(1.96, 0.0, 1.0), 0.975_002_104_9);
    }

    #[test]
    fn normpdf_at_reference_points() {
        assert_close(Normpdf::eval_static(0.0, 0.0, 1.0), 0.398_942_280_4);
        assert_close(Normpdf::eval_static(5.0, 5.0, 2.0), 0.199_471_140_2);
    }
}
