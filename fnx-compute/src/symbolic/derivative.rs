//! Symbolic differentiation.
//!
//! Differentiation is purely structural: it never consults a variable context, and the result's
//! variables are always a subset of the input's. The four power-rule cases are written as
//! independent functions, selected by a structural constancy test on each operand. Results are
//! raw trees; [`Func`](crate::func::Func) simplifies them before handing them to callers.

use crate::error::MissingDerivative;
use crate::scope::contains_var;
use fnx_error::Error;
use fnx_parser::parser::ast::{BinOp, Expr, UnaryOp};

/// Computes `d(expr)/d(var)`.
///
/// A function with no rule in the derivative table, and any multi-argument call, fails with
/// [`MissingDerivative`]; a silently wrong zero is never produced.
pub fn derivative(expr: &Expr, var: &str) -> Result<Expr, Error> {
    match expr {
        Expr::Num(_) => Ok(Expr::Num(0.0)),
        Expr::Var(name) => Ok(Expr::Num(if name == var { 1.0 } else { 0.0 })),
        Expr::Unary(UnaryOp::Pos, operand) => derivative(operand, var),
        Expr::Unary(UnaryOp::Neg, operand) => Ok(Expr::neg(derivative(operand, var)?)),
        Expr::Binary(BinOp::Add, lhs, rhs) => {
            Ok(Expr::add(derivative(lhs, var)?, derivative(rhs, var)?))
        },
        Expr::Binary(BinOp::Sub, lhs, rhs) => {
            Ok(Expr::sub(derivative(lhs, var)?, derivative(rhs, var)?))
        },
        Expr::Binary(BinOp::Mul, lhs, rhs) => product_rule(lhs, rhs, var),
        Expr::Binary(BinOp::Div, lhs, rhs) => quotient_rule(lhs, rhs, var),
        Expr::Binary(BinOp::Exp, lhs, rhs) => power_rule(lhs, rhs, var),
        Expr::Call(name, arg) => chain_rule(name, arg, var),
        Expr::MultiCall(name, _) => {
            Err(Error::spanless(MissingDerivative { name: name.clone() }))
        },
    }
}

/// Applies single-variable differentiation once per name, in reverse order of the sequence, so
/// the first name listed is the outermost derivative: `derivative_seq(f, &["x", "y"])` computes
/// `d/dx (d/dy f)`.
pub fn derivative_seq(expr: &Expr, vars: &[&str]) -> Result<Expr, Error> {
    let mut result = expr.clone();
    for var in vars.iter().rev() {
        result = derivative(&result, var)?;
    }
    Ok(result)
}

/// `(f*g)' = f'*g + f*g'`.
fn product_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let fp = derivative(f, var)?;
    let gp = derivative(g, var)?;
    Ok(Expr::add(
        Expr::mul(fp, g.clone()),
        Expr::mul(f.clone(), gp),
    ))
}

/// `(f/g)' = (g*f' - f*g') / g**2`.
fn quotient_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let fp = derivative(f, var)?;
    let gp = derivative(g, var)?;
    Ok(Expr::div(
        Expr::sub(Expr::mul(g.clone(), fp), Expr::mul(f.clone(), gp)),
        Expr::pow(g.clone(), Expr::Num(2.0)),
    ))
}

/// `(f**g)'`, split on which operands are constant with respect to the variable.
fn power_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    match (contains_var(f, var), contains_var(g, var)) {
        (false, false) => Ok(Expr::Num(0.0)),
        (false, true) => exponential_rule(f, g, var),
        (true, false) => constant_exponent_rule(f, g, var),
        (true, true) => logarithmic_rule(f, g, var),
    }
}

/// `(f**g)' = ln(f) * g' * f**g` when `f` is constant.
fn exponential_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let gp = derivative(g, var)?;
    Ok(Expr::mul(
        Expr::mul(Expr::call("ln", f.clone()), gp),
        Expr::pow(f.clone(), g.clone()),
    ))
}

/// `(f**g)' = g * f**(g-1) * f'` when `g` is constant.
fn constant_exponent_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let fp = derivative(f, var)?;
    Ok(Expr::mul(
        Expr::mul(
            g.clone(),
            Expr::pow(f.clone(), Expr::sub(g.clone(), Expr::Num(1.0))),
        ),
        fp,
    ))
}

/// `(f**g)' = f**g * ((g*f')/f + g'*ln(f))`, by logarithmic differentiation, when neither
/// operand is constant.
fn logarithmic_rule(f: &Expr, g: &Expr, var: &str) -> Result<Expr, Error> {
    let fp = derivative(f, var)?;
    let gp = derivative(g, var)?;
    Ok(Expr::mul(
        Expr::pow(f.clone(), g.clone()),
        Expr::add(
            Expr::div(Expr::mul(g.clone(), fp), f.clone()),
            Expr::mul(gp, Expr::call("ln", f.clone())),
        ),
    ))
}

/// The chain rule: `f'(g) * g'`, where `f'(g)` comes from the derivative table applied to the
/// undifferentiated inner expression.
fn chain_rule(name: &str, g: &Expr, var: &str) -> Result<Expr, Error> {
    let outer = outer_derivative(name, g)
        .ok_or_else(|| Error::spanless(MissingDerivative { name: name.to_string() }))?;
    Ok(Expr::mul(outer, derivative(g, var)?))
}

/// The derivative of each unary builtin with respect to its own argument, evaluated at `g`.
/// `int` has no entry; its derivative is refused rather than approximated.
fn outer_derivative(name: &str, arg: &Expr) -> Option<Expr> {
    let g = || arg.clone();
    Some(match name {
        "exp" => Expr::call("exp", g()),
        "log" | "ln" => Expr::pow(g(), Expr::Num(-1.0)),
        "log10" => Expr::pow(
            Expr::mul(g(), Expr::call("ln", Expr::Num(10.0))),
            Expr::Num(-1.0),
        ),
        "sqrt" => Expr::div(Expr::pow(g(), Expr::Num(-0.5)), Expr::Num(2.0)),
        "abs" => Expr::call("sign", g()),
        // constant except at the discontinuities, which are ignored
        "sign" | "floor" | "ceil" => Expr::Num(0.0),
        "sin" => Expr::call("cos", g()),
        "cos" => Expr::neg(Expr::call("sin", g())),
        "tan" => Expr::pow(Expr::call("cos", g()), Expr::Num(-2.0)),
        "asin" => Expr::pow(
            Expr::sub(Expr::Num(1.0), Expr::pow(g(), Expr::Num(2.0))),
            Expr::Num(-0.5),
        ),
        "acos" => Expr::neg(Expr::pow(
            Expr::sub(Expr::Num(1.0), Expr::pow(g(), Expr::Num(2.0))),
            Expr::Num(-0.5),
        )),
        "atan" => Expr::pow(
            Expr::add(Expr::Num(1.0), Expr::pow(g(), Expr::Num(2.0))),
            Expr::Num(-1.0),
        ),
        "erf" => Expr::mul(
            Expr::div(
                Expr::Num(2.0),
                Expr::call("sqrt", Expr::Num(std::f64::consts::PI)),
            ),
            Expr::call("exp", Expr::neg(Expr::pow(g(), Expr::Num(2.0)))),
        ),
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ctxt::Ctxt;
    use crate::eval::Eval;
    use crate::symbolic::simplify::simplify;
    use fnx_parser::parse;
    use pretty_assertions::assert_eq;

    fn eval_x(e: &Expr, x: f64) -> f64 {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", x);
        e.eval(&ctxt).unwrap()
    }

    // central finite difference approximating the derivative at x
    fn finite_difference(e: &Expr, x: f64) -> f64 {
        const DX: f64 = 1e-6;
        (eval_x(e, x + DX) - eval_x(e, x - DX)) / (2.0 * DX)
    }

    fn test_for_function(function: &str, points: impl IntoIterator<Item = f64>) {
        const TOL: f64 = 1e-4;

        let expr = parse(function).unwrap();
        let symbolic = derivative(&expr, "x").unwrap();

        for point in points {
            let symbolically_computed = eval_x(&symbolic, point);
            let numerically_computed = finite_difference(&expr, point);
            assert!(
                (symbolically_computed - numerically_computed).abs() < TOL,
                "for `{function}` at x={point}, the symbolic derivative was \
                 {symbolically_computed} but the finite-difference estimate was \
                 {numerically_computed}",
            );
        }
    }

    #[test]
    fn polynomial() {
        test_for_function("x**3 + x**2 + x + 1", [0., 1., 2., 5., 8.]);
    }

    #[test]
    fn product_rule_cases() {
        test_for_function("x*x", [-2., 0., 3.]);
        test_for_function("x * sin(x)", [-1., 0., 1., 2.]);
    }

    #[test]
    fn quotient_rule_cases() {
        test_for_function("sin(x) / (x**2 + 1)", [-2., 0., 1., 3.]);
        test_for_function("1 / x", [-2., 0.5, 1., 3.]);
    }

    #[test]
    fn exponential_base_case() {
        test_for_function("2**x", [-1., 0., 1., 3.]);
        test_for_function("e**x", [-1., 0., 2.]);
    }

    #[test]
    fn constant_exponent_case() {
        test_for_function("x**3", [-2., 1., 4.]);
        test_for_function("(x**2 + 1)**0.5", [-1., 0., 2.]);
    }

    #[test]
    fn logarithmic_differentiation_case() {
        test_for_function("x**x", [0.5, 1., 2., 3.]);
    }

    #[test]
    fn chain_rule_cases() {
        test_for_function("sin(cos(x))", [-1., 0., 1., 2.]);
        test_for_function("exp(-(x**2))", [-1., 0., 1.]);
        test_for_function("ln(x**2 + 1)", [-2., 0., 2.]);
        test_for_function("sqrt(x**2 + 1)", [-1., 0., 3.]);
        test_for_function("tan(x)", [-0.5, 0., 0.5]);
        test_for_function("asin(x)", [-0.5, 0., 0.5]);
        test_for_function("acos(x)", [-0.5, 0., 0.5]);
        test_for_function("atan(x)", [-2., 0., 2.]);
        test_for_function("log10(x)", [0.5, 1., 10.]);
        test_for_function("erf(x)", [-1., 0., 1.]);
        test_for_function("abs(x)", [-2., 1.]);
    }

    #[test]
    fn constants_differentiate_to_zero() {
        assert_eq!(derivative(&parse("5").unwrap(), "x").unwrap(), Expr::Num(0.0));
        assert_eq!(derivative(&parse("pi**2").unwrap(), "x").unwrap(), Expr::Num(0.0));
        assert_eq!(derivative(&parse("y").unwrap(), "x").unwrap(), Expr::Num(0.0));
    }

    #[test]
    fn product_rule_simplifies_to_double() {
        // d/dx x*x = 2x, checked at x=3
        let d = simplify(&derivative(&parse("x*x").unwrap(), "x").unwrap());
        assert_eq!(eval_x(&d, 3.0), 6.0);
    }

    #[test]
    fn missing_rules_are_refused() {
        assert!(derivative(&parse("int(x)").unwrap(), "x").is_err());
        assert!(derivative(&parse("min(x, 1)").unwrap(), "x").is_err());
        assert!(derivative(&parse("normcdf(x, 0, 1)").unwrap(), "x").is_err());

        let err = derivative(&parse("int(x)").unwrap(), "x").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("int"));
    }

    #[test]
    fn sequence_applies_in_reverse_order() {
        // d/dx (d/dy x**2 * y**3) = 6*x*y**2
        let expr = parse("x**2 * y**3").unwrap();
        let mixed = derivative_seq(&expr, &["x", "y"]).unwrap();

        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 2.0);
        ctxt.add_var("y", 3.0);
        assert_eq!(mixed.eval(&ctxt).unwrap(), 108.0);
    }

    #[test]
    fn second_derivative() {
        // d2/dx2 x**3 = 6x
        let second = derivative_seq(&parse("x**3").unwrap(), &["x", "x"]).unwrap();
        assert_eq!(eval_x(&second, 4.0), 24.0);
    }
}
