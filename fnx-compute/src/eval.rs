//! Numeric evaluation of expression trees.

use crate::ctxt::Ctxt;
use crate::error::{UndefinedFunction, WrongArgumentCount};
use crate::funcs::{
    self,
    miscellaneous::{Max, Min},
    probability::{Normcdf, Normpdf},
};
use fnx_error::Error;
use fnx_parser::parser::ast::{BinOp, Expr, UnaryOp};

/// Any type that can be evaluated to a number.
pub trait Eval {
    /// Evaluate the expression under the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression with no variables bound.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::new())
    }
}

/// Post-order numeric evaluation.
///
/// Arithmetic follows native `f64` semantics throughout: division by zero and domain errors
/// produce infinities or NaN, never an [`Error`]. The only failures are unbound variables and
/// malformed synthesized calls.
impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        match self {
            Expr::Num(value) => Ok(*value),
            Expr::Var(name) => ctxt.resolve(name),
            Expr::Unary(op, operand) => {
                let value = operand.eval(ctxt)?;
                Ok(match op {
                    UnaryOp::Pos => value,
                    UnaryOp::Neg => -value,
                })
            },
            Expr::Binary(op, lhs, rhs) => {
                let (lhs, rhs) = (lhs.eval(ctxt)?, rhs.eval(ctxt)?);
                Ok(match op {
                    BinOp::Add => lhs + rhs,
                    BinOp::Sub => lhs - rhs,
                    BinOp::Mul => lhs * rhs,
                    BinOp::Div => lhs / rhs,
                    BinOp::Exp => lhs.powf(rhs),
                })
            },
            Expr::Call(name, arg) => {
                let arg = arg.eval(ctxt)?;
                funcs::unary(name, arg)
                    .ok_or_else(|| Error::spanless(UndefinedFunction { name: name.clone() }))
            },
            Expr::MultiCall(name, args) => {
                let values = args
                    .iter()
                    .map(|arg| arg.eval(ctxt))
                    .collect::<Result<Vec<_>, _>>()?;
                let wrong_count = |expected: usize| {
                    Error::spanless(WrongArgumentCount {
                        name: name.clone(),
                        expected,
                        given: values.len(),
                    })
                };
                match name.as_str() {
                    "min" | "max" if values.is_empty() => Err(wrong_count(1)),
                    "min" => Ok(Min::eval_static(&values)),
                    "max" => Ok(Max::eval_static(&values)),
                    "normcdf" | "normpdf" if values.len() != 3 => Err(wrong_count(3)),
                    "normcdf" => Ok(Normcdf::eval_static(values[0], values[1], values[2])),
                    "normpdf" => Ok(Normpdf::eval_static(values[0], values[1], values[2])),
                    _ => Err(Error::spanless(UndefinedFunction { name: name.clone() })),
                }
            },
        }
    }
}
