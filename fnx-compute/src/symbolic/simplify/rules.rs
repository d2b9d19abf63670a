//! Implementation of the simplification rules.
//!
//! Each rule is a function that takes the expression to simplify as an argument, and returns
//! `Some(expr)` with the simplified expression if the rule applies, or `None` if the rule does
//! not apply. Rules assume the expression's children are already simplified.

use fnx_parser::parser::ast::{BinOp, Expr, UnaryOp};

/// Folds a binary operation on two numeric literals into a single literal.
pub fn fold_literals(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(op, lhs, rhs) = expr else {
        return None;
    };
    let (Expr::Num(lhs), Expr::Num(rhs)) = (&**lhs, &**rhs) else {
        return None;
    };
    Some(Expr::Num(match op {
        BinOp::Add => lhs + rhs,
        BinOp::Sub => lhs - rhs,
        BinOp::Mul => lhs * rhs,
        BinOp::Div => lhs / rhs,
        BinOp::Exp => lhs.powf(*rhs),
    }))
}

/// `x+0 = x` and `0+x = x`.
pub fn add_zero(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(BinOp::Add, lhs, rhs) = expr else {
        return None;
    };
    if rhs.is_num(0.0) {
        Some((**lhs).clone())
    } else if lhs.is_num(0.0) {
        Some((**rhs).clone())
    } else {
        None
    }
}

/// `x-0 = x`, `0-x = -x`, and `x-(-y) = x+y`, in that order.
pub fn sub_identities(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(BinOp::Sub, lhs, rhs) = expr else {
        return None;
    };
    if rhs.is_num(0.0) {
        Some((**lhs).clone())
    } else if lhs.is_num(0.0) {
        Some(Expr::neg((**rhs).clone()))
    } else if let Expr::Unary(UnaryOp::Neg, inner) = &**rhs {
        Some(Expr::add((**lhs).clone(), (**inner).clone()))
    } else {
        None
    }
}

/// `x*0 = 0*x = 0`, checked before `x*1 = 1*x = x`.
pub fn mul_identities(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(BinOp::Mul, lhs, rhs) = expr else {
        return None;
    };
    if lhs.is_num(0.0) || rhs.is_num(0.0) {
        Some(Expr::Num(0.0))
    } else if lhs.is_num(1.0) {
        Some((**rhs).clone())
    } else if rhs.is_num(1.0) {
        Some((**lhs).clone())
    } else {
        None
    }
}

/// `0/x = 0` and `x/1 = x`.
pub fn div_identities(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(BinOp::Div, lhs, rhs) = expr else {
        return None;
    };
    if lhs.is_num(0.0) {
        Some(Expr::Num(0.0))
    } else if rhs.is_num(1.0) {
        Some((**lhs).clone())
    } else {
        None
    }
}

/// `x**1 = x`, `1**x = 1`, and `0**x = 0`, all checked before `x**0 = 1`.
pub fn pow_identities(expr: &Expr) -> Option<Expr> {
    let Expr::Binary(BinOp::Exp, lhs, rhs) = expr else {
        return None;
    };
    if rhs.is_num(1.0) {
        Some((**lhs).clone())
    } else if lhs.is_num(1.0) {
        Some(Expr::Num(1.0))
    } else if lhs.is_num(0.0) {
        Some(Expr::Num(0.0))
    } else if rhs.is_num(0.0) {
        Some(Expr::Num(1.0))
    } else {
        None
    }
}

/// `+x = x`, `-(-x) = x`, and `-(+x) = -x`.
pub fn collapse_unary(expr: &Expr) -> Option<Expr> {
    let Expr::Unary(op, operand) = expr else {
        return None;
    };
    match (op, &**operand) {
        (UnaryOp::Pos, inner) => Some(inner.clone()),
        (UnaryOp::Neg, Expr::Unary(UnaryOp::Neg, inner)) => Some((**inner).clone()),
        (UnaryOp::Neg, Expr::Unary(UnaryOp::Pos, inner)) => Some(Expr::neg((**inner).clone())),
        _ => None,
    }
}

/// Applies all rules, in priority order. Constant folding is tried before the identities.
pub fn all(expr: &Expr) -> Option<Expr> {
    fold_literals(expr)
        .or_else(|| add_zero(expr))
        .or_else(|| sub_identities(expr))
        .or_else(|| mul_identities(expr))
        .or_else(|| div_identities(expr))
        .or_else(|| pow_identities(expr))
        .or_else(|| collapse_unary(expr))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rules_do_not_apply_to_irreducible_nodes() {
        let expr = Expr::add(Expr::var("x"), Expr::var("y"));
        assert_eq!(all(&expr), None);
    }

    #[test]
    fn mul_zero_wins_over_mul_one() {
        let expr = Expr::mul(Expr::Num(1.0), Expr::Num(0.0));
        assert_eq!(mul_identities(&expr), Some(Expr::Num(0.0)));
    }

    #[test]
    fn zero_base_wins_over_zero_exponent() {
        let expr = Expr::pow(Expr::Num(0.0), Expr::var("x"));
        assert_eq!(pow_identities(&expr), Some(Expr::Num(0.0)));
    }
}
