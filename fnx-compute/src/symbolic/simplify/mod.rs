//! Algebraic simplification.
//!
//! [`simplify`] makes a single bottom-up pass: children are simplified first, then the rules are
//! applied once to the rebuilt node, so a fold exposed by child simplification is caught at the
//! parent. The pass is *not* iterated to a global fixed point: when a rule's output contains a
//! new reducible pattern, that pattern survives until the next call. No rule reorders commutative
//! operands or cancels across non-adjacent subtrees.

pub mod rules;

use fnx_parser::parser::ast::Expr;

/// Simplifies the tree with one bottom-up constant-fold and identity pass.
pub fn simplify(expr: &Expr) -> Expr {
    let rebuilt = match expr {
        Expr::Num(_) | Expr::Var(_) => expr.clone(),
        Expr::Unary(op, operand) => Expr::Unary(*op, Box::new(simplify(operand))),
        Expr::Binary(op, lhs, rhs) => {
            Expr::Binary(*op, Box::new(simplify(lhs)), Box::new(simplify(rhs)))
        },
        Expr::Call(name, arg) => Expr::Call(name.clone(), Box::new(simplify(arg))),
        Expr::MultiCall(name, args) => {
            Expr::MultiCall(name.clone(), args.iter().map(simplify).collect())
        },
    };
    rules::all(&rebuilt).unwrap_or(rebuilt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnx_parser::parse;
    use pretty_assertions::assert_eq;

    fn simplify_str(source: &str) -> Expr {
        simplify(&parse(source).unwrap())
    }

    #[test]
    fn literals_fold_to_a_single_node() {
        assert_eq!(simplify_str("(2+3)*0"), Expr::Num(0.0));
        assert_eq!(simplify_str("2**3**2"), Expr::Num(512.0));
    }

    #[test]
    fn additive_identities() {
        assert_eq!(simplify_str("x+0"), Expr::var("x"));
        assert_eq!(simplify_str("0+x"), Expr::var("x"));
        assert_eq!(simplify_str("x-0"), Expr::var("x"));
        assert_eq!(simplify_str("0-x"), Expr::neg(Expr::var("x")));
    }

    #[test]
    fn subtracting_a_negation_becomes_addition() {
        assert_eq!(simplify_str("x-(-y)"), Expr::add(Expr::var("x"), Expr::var("y")));
    }

    #[test]
    fn multiplicative_identities() {
        assert_eq!(simplify_str("x*0"), Expr::Num(0.0));
        assert_eq!(simplify_str("0*x"), Expr::Num(0.0));
        assert_eq!(simplify_str("x*1"), Expr::var("x"));
        assert_eq!(simplify_str("1*x"), Expr::var("x"));
        assert_eq!(simplify_str("0/x"), Expr::Num(0.0));
        assert_eq!(simplify_str("x/1"), Expr::var("x"));
    }

    #[test]
    fn power_identities() {
        assert_eq!(simplify_str("x**1"), Expr::var("x"));
        assert_eq!(simplify_str("1**x"), Expr::Num(1.0));
        assert_eq!(simplify_str("0**x"), Expr::Num(0.0));
        assert_eq!(simplify_str("x**0"), Expr::Num(1.0));
    }

    #[test]
    fn unary_collapses() {
        assert_eq!(simplify_str("+x"), Expr::var("x"));
        assert_eq!(simplify_str("-(-x)"), Expr::var("x"));
        assert_eq!(simplify_str("-(+x)"), Expr::neg(Expr::var("x")));
    }

    #[test]
    fn identities_exposed_by_child_folds_are_caught() {
        // the exponent folds to 1 first, then x**1 collapses at the parent
        assert_eq!(simplify_str("x**(3-2)"), Expr::var("x"));
    }

    #[test]
    fn one_pass_is_not_a_fixed_point() {
        // 0-(-y) rewrites to -(-y) in one application; the nested negation it creates is not
        // revisited until the next call
        let first = simplify_str("0-(-y)");
        assert_eq!(first, Expr::neg(Expr::neg(Expr::var("y"))));
        assert_eq!(simplify(&first), Expr::var("y"));
    }

    #[test]
    fn unreduced_trees_pass_through() {
        let expr = parse("x*y + sin(x)").unwrap();
        assert_eq!(simplify(&expr), expr);
    }
}
