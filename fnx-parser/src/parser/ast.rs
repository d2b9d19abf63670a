//! The abstract syntax tree shared by every pass.
//!
//! A tree is an immutable value: no pass mutates its input, and every rewrite (differentiation,
//! simplification, substitution) rebuilds the nodes it changes. The node model is a single closed
//! enum so that each pass is an exhaustive `match`; adding a node variant forces every pass to
//! handle it at compile time.

use std::fmt;

/// The unary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// The identity operation, `+x`.
    Pos,

    /// Negation, `-x`.
    Neg,
}

impl UnaryOp {
    /// Returns the surface syntax of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Pos => "+",
            UnaryOp::Neg => "-",
        }
    }
}

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,

    /// Exponentiation, `a**b`. Right-associative.
    Exp,
}

impl BinOp {
    /// Returns the surface syntax of this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
            BinOp::Exp => "**",
        }
    }
}

/// A node in the expression tree. Each node owns its children exclusively.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal, including a reserved constant resolved at lex time.
    Num(f64),

    /// A free-variable reference.
    Var(String),

    /// A unary operation, such as `-x`.
    Unary(UnaryOp, Box<Expr>),

    /// A binary operation, such as `a + b`.
    Binary(BinOp, Box<Expr>, Box<Expr>),

    /// A single-argument built-in function call, such as `sin(x)`.
    Call(String, Box<Expr>),

    /// A multi-argument built-in function call, such as `max(a, b, c)`.
    MultiCall(String, Vec<Expr>),
}

/// Builder helpers. These construct nodes verbatim; simplification is a separate, explicit pass.
impl Expr {
    pub fn var(name: impl Into<String>) -> Expr {
        Expr::Var(name.into())
    }

    pub fn add(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Add, Box::new(lhs), Box::new(rhs))
    }

    pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Sub, Box::new(lhs), Box::new(rhs))
    }

    pub fn mul(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Mul, Box::new(lhs), Box::new(rhs))
    }

    pub fn div(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Div, Box::new(lhs), Box::new(rhs))
    }

    pub fn pow(lhs: Expr, rhs: Expr) -> Expr {
        Expr::Binary(BinOp::Exp, Box::new(lhs), Box::new(rhs))
    }

    pub fn neg(operand: Expr) -> Expr {
        Expr::Unary(UnaryOp::Neg, Box::new(operand))
    }

    pub fn call(name: impl Into<String>, arg: Expr) -> Expr {
        Expr::Call(name.into(), Box::new(arg))
    }

    /// Returns true if this node is a numeric literal with the given value.
    pub fn is_num(&self, value: f64) -> bool {
        matches!(self, Expr::Num(n) if *n == value)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Num(value)
    }
}

/// Writes a numeric literal. Whole values print without a fractional part, and negative values
/// are parenthesized so the printed text stays re-parseable in any operand position (a bare `-`
/// is not valid on the right of `**`).
fn fmt_num(f: &mut fmt::Formatter, value: f64) -> fmt::Result {
    if value.is_sign_negative() {
        write!(f, "({})", value)
    } else {
        write!(f, "{}", value)
    }
}

/// The fully parenthesized printer. `Display` output is not minimal, but re-parsing it always
/// reproduces a structurally equivalent tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Num(value) => fmt_num(f, *value),
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Unary(op, operand) => write!(f, "({}{})", op.symbol(), operand),
            Expr::Binary(op, lhs, rhs) => write!(f, "({}{}{})", lhs, op.symbol(), rhs),
            Expr::Call(name, arg) => write!(f, "{}({})", name, arg),
            Expr::MultiCall(name, args) => {
                write!(f, "{}(", name)?;
                if let Some((last, rest)) = args.split_last() {
                    for arg in rest {
                        write!(f, "{}, ", arg)?;
                    }
                    write!(f, "{}", last)?;
                }
                write!(f, ")")
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_is_fully_parenthesized() {
        let expr = Expr::add(Expr::Num(1.0), Expr::mul(Expr::var("x"), Expr::Num(2.0)));
        assert_eq!(expr.to_string(), "(1+(x*2))");
    }

    #[test]
    fn whole_numbers_print_without_fraction() {
        assert_eq!(Expr::Num(3.0).to_string(), "3");
        assert_eq!(Expr::Num(3.25).to_string(), "3.25");
    }

    #[test]
    fn negative_literals_are_parenthesized() {
        let expr = Expr::pow(Expr::var("x"), Expr::Num(-2.0));
        assert_eq!(expr.to_string(), "(x**(-2))");
    }

    #[test]
    fn calls_print_with_arguments() {
        let expr = Expr::MultiCall(
            "max".to_string(),
            vec![Expr::var("a"), Expr::var("b"), Expr::Num(0.0)],
        );
        assert_eq!(expr.to_string(), "max(a, b, 0)");

        let expr = Expr::call("sin", Expr::var("x"));
        assert_eq!(expr.to_string(), "sin(x)");
    }
}
