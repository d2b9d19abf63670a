//! The callable expression wrapper.
//!
//! [`Func`] pairs a tree with its variable signature and layers the call conveniences on top of
//! the core passes: positional calls, named currying, differentiation, and operator overloading.
//! Every operation that produces a new expression simplifies it once, so user-visible results
//! are always in reduced form.

use crate::ctxt::Ctxt;
use crate::error::{UnknownName, WrongValueCount};
use crate::eval::Eval;
use crate::scope::SymbolTable;
use crate::symbolic::{derivative, derivative_seq, simplify, substitute, Binding, Bindings};
use fnx_error::Error;
use fnx_parser::parse;
use fnx_parser::parser::ast::Expr;
use levenshtein::levenshtein;
use std::fmt;
use std::ops;

/// A callable math expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Func {
    /// The expression tree.
    tree: Expr,

    /// The tree's variable signature, computed once at construction.
    signature: SymbolTable,
}

/// The result of [`Func::apply`]: a number when every variable was bound, otherwise a curried
/// function of the remaining variables.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    Number(f64),
    Func(Func),
}

impl Func {
    /// Parses the given source into a callable function.
    pub fn new(source: &str) -> Result<Func, Error> {
        Ok(Func::from_tree(parse(source)?))
    }

    /// Wraps an existing tree.
    pub fn from_tree(tree: Expr) -> Func {
        let signature = SymbolTable::of(&tree);
        Func { tree, signature }
    }

    /// The expression tree.
    pub fn tree(&self) -> &Expr {
        &self.tree
    }

    /// The distinct free variables, in first-occurrence order. Positional values given to
    /// [`call`](Func::call) map to these names in order.
    pub fn variables(&self) -> &[String] {
        self.signature.names()
    }

    /// The printed form. Feeding it back to [`Func::new`] reproduces an equivalent function.
    pub fn text(&self) -> String {
        self.tree.to_string()
    }

    /// Evaluates the function with one positional value per variable.
    pub fn call(&self, values: &[f64]) -> Result<f64, Error> {
        if values.len() != self.signature.len() {
            return Err(Error::spanless(WrongValueCount {
                expected: self.signature.len(),
                given: values.len(),
            }));
        }
        let mut ctxt = Ctxt::new();
        for (name, value) in self.variables().iter().zip(values) {
            ctxt.add_var(name, *value);
        }
        self.tree.eval(&ctxt)
    }

    /// Applies named bindings.
    ///
    /// Binding a name outside the signature is [`UnknownName`]. Binding every variable to a
    /// number evaluates the function; anything less (or any non-numeric binding) substitutes and
    /// returns a curried function of whatever stays free.
    pub fn apply(&self, bindings: &Bindings) -> Result<Applied, Error> {
        for name in bindings.names() {
            if !self.signature.contains(name) {
                return Err(Error::spanless(UnknownName {
                    name: name.to_string(),
                    suggestions: self
                        .variables()
                        .iter()
                        .filter(|v| levenshtein(v, name) < 2)
                        .cloned()
                        .collect(),
                }));
            }
        }

        let all_numeric = bindings
            .iter()
            .all(|(_, binding)| matches!(binding, Binding::Number(_)));
        if all_numeric && bindings.len() == self.signature.len() {
            let mut ctxt = Ctxt::new();
            for (name, binding) in bindings.iter() {
                if let Binding::Number(value) = binding {
                    ctxt.add_var(name, *value);
                }
            }
            Ok(Applied::Number(self.tree.eval(&ctxt)?))
        } else {
            let tree = substitute(&self.tree, bindings)?;
            Ok(Applied::Func(Func::from_tree(simplify(&tree))))
        }
    }

    /// The derivative with respect to `var`, simplified.
    pub fn derivative(&self, var: &str) -> Result<Func, Error> {
        Ok(Func::from_tree(simplify(&derivative(&self.tree, var)?)))
    }

    /// The higher-order derivative over the given names, simplified. The first name listed is
    /// the outermost derivative.
    pub fn derivative_seq(&self, vars: &[&str]) -> Result<Func, Error> {
        Ok(Func::from_tree(simplify(&derivative_seq(&self.tree, vars)?)))
    }

    /// Raises the function to the power of another, simplified.
    pub fn pow(&self, exponent: &Func) -> Func {
        Func::from_tree(simplify(&Expr::pow(
            self.tree.clone(),
            exponent.tree.clone(),
        )))
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.tree)
    }
}

impl From<f64> for Func {
    fn from(value: f64) -> Self {
        Func::from_tree(Expr::Num(value))
    }
}

impl From<Expr> for Func {
    fn from(tree: Expr) -> Self {
        Func::from_tree(tree)
    }
}

macro_rules! impl_op {
    ($($trait:ident $method:ident),* $(,)?) => {
        $(
            impl ops::$trait for &Func {
                type Output = Func;

                fn $method(self, rhs: &Func) -> Func {
                    Func::from_tree(simplify(&Expr::$method(
                        self.tree.clone(),
                        rhs.tree.clone(),
                    )))
                }
            }
        )*
    };
}

impl_op! { Add add, Sub sub, Mul mul, Div div }

impl ops::Neg for &Func {
    type Output = Func;

    fn neg(self) -> Func {
        Func::from_tree(simplify(&Expr::neg(self.tree.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::assert_float_absolute_eq;
    use pretty_assertions::assert_eq;

    #[test]
    fn positional_call_maps_by_signature_order() {
        let f = Func::new("x - y").unwrap();
        assert_eq!(f.call(&[5.0, 3.0]).unwrap(), 2.0);
    }

    #[test]
    fn positional_call_requires_exact_count() {
        let f = Func::new("x + y").unwrap();
        assert!(f.call(&[1.0]).is_err());
        assert!(f.call(&[1.0, 2.0, 3.0]).is_err());
    }

    #[test]
    fn mortgage_currying() {
        let f = Func::new("p*(1 + r/12)**(12*30)").unwrap();
        assert_eq!(f.variables(), ["p", "r"]);

        let Applied::Func(curried) = f.apply(&Bindings::new().with("r", 0.045)).unwrap() else {
            panic!("binding a subset should curry");
        };
        assert_eq!(curried.variables(), ["p"]);

        let Applied::Number(value) = f
            .apply(&Bindings::new().with("r", 0.045).with("p", 100000.0))
            .unwrap()
        else {
            panic!("binding every variable should evaluate");
        };
        assert_float_absolute_eq!(value, 100000.0 * (1.0_f64 + 0.045 / 12.0).powf(360.0), 1e-6);

        // the curried function agrees with the full application
        assert_float_absolute_eq!(curried.call(&[100000.0]).unwrap(), value, 1e-6);
    }

    #[test]
    fn unknown_binding_name_is_rejected() {
        let f = Func::new("x + y").unwrap();
        let err = f.apply(&Bindings::new().with("z", 1.0)).unwrap_err();
        assert!(format!("{:?}", err.kind).contains("\"z\""));
    }

    #[test]
    fn unknown_name_suggests_similar_variables() {
        let f = Func::new("rate * 2").unwrap();
        let err = f.apply(&Bindings::new().with("rte", 1.0)).unwrap_err();
        assert!(format!("{:?}", err.kind).contains("rate"));
    }

    #[test]
    fn expression_bindings_compose() {
        let f = Func::new("x**2").unwrap();
        let Applied::Func(composed) = f.apply(&Bindings::new().with("x", "y + 1")).unwrap()
        else {
            panic!("non-numeric bindings should curry");
        };
        assert_eq!(composed.variables(), ["y"]);
        assert_eq!(composed.call(&[2.0]).unwrap(), 9.0);
    }

    #[test]
    fn derivative_is_simplified() {
        let f = Func::new("x*x").unwrap();
        let d = f.derivative("x").unwrap();
        assert_eq!(d.call(&[3.0]).unwrap(), 6.0);

        // d/dx 2**x = ln(2) * 2**x
        let g = Func::new("2**x").unwrap().derivative("x").unwrap();
        assert_float_absolute_eq!(
            g.call(&[4.0]).unwrap(),
            2f64.ln() * 16.0,
            1e-12
        );
    }

    #[test]
    fn derivative_of_sign_collapses_to_zero() {
        let f = Func::new("sign(x)").unwrap();
        assert_eq!(f.derivative("x").unwrap().tree(), &Expr::Num(0.0));
    }

    #[test]
    fn operator_overloads_simplify() {
        let f = Func::new("x").unwrap();
        let zero = Func::from(0.0);
        assert_eq!((&f * &zero).tree(), &Expr::Num(0.0));
        assert_eq!((&f + &zero).tree(), &Expr::var("x"));

        let g = Func::new("y").unwrap();
        let sum = &f + &g;
        assert_eq!(sum.variables(), ["x", "y"]);
        assert_eq!(sum.call(&[1.0, 2.0]).unwrap(), 3.0);

        let neg = -&f;
        assert_eq!(neg.call(&[2.0]).unwrap(), -2.0);

        let powed = f.pow(&Func::from(2.0));
        assert_eq!(powed.call(&[3.0]).unwrap(), 9.0);
    }

    #[test]
    fn text_round_trips_through_new() {
        let f = Func::new("p*(1 + r/12)**(12*30)").unwrap();
        let reparsed = Func::new(&f.text()).unwrap();
        assert_eq!(reparsed.tree(), f.tree());
        assert_eq!(reparsed.variables(), f.variables());
    }
}
