//! Substitution of bound variables, the basis of currying and composition.

use fnx_error::Error;
use fnx_parser::parse;
use fnx_parser::parser::ast::Expr;

/// A value that can be bound to a variable during substitution.
#[derive(Debug, Clone, PartialEq)]
pub enum Binding {
    /// A numeric value; the variable becomes a literal.
    Number(f64),

    /// Another expression; the variable becomes a copy of its tree, enabling composition.
    Expr(Expr),

    /// A parseable text fragment, parsed into a tree before substitution.
    Text(String),
}

impl From<f64> for Binding {
    fn from(value: f64) -> Self {
        Binding::Number(value)
    }
}

impl From<Expr> for Binding {
    fn from(expr: Expr) -> Self {
        Binding::Expr(expr)
    }
}

impl From<&str> for Binding {
    fn from(text: &str) -> Self {
        Binding::Text(text.to_string())
    }
}

impl From<String> for Binding {
    fn from(text: String) -> Self {
        Binding::Text(text)
    }
}

/// An ordered set of name-to-value bindings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    entries: Vec<(String, Binding)>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    pub fn new() -> Bindings {
        Bindings::default()
    }

    /// Adds a binding, replacing an existing binding of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Binding>) {
        let name = name.into();
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            entry.1 = value;
        } else {
            self.entries.push((name, value));
        }
    }

    /// Builder-style [`insert`](Bindings::insert).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Binding>) -> Bindings {
        self.insert(name, value);
        self
    }

    /// The binding for the given name, if any.
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, value)| value)
    }

    /// The bound names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// The bindings, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no bindings.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Replaces every bound variable in the tree with its bound value.
///
/// Text bindings are parsed up front, so a malformed fragment fails before any rewriting
/// happens. Variables without a binding stay free: the result's signature is a subset of the
/// input's, which is what makes partial application work.
pub fn substitute(expr: &Expr, bindings: &Bindings) -> Result<Expr, Error> {
    let resolved = bindings
        .iter()
        .map(|(name, binding)| {
            let tree = match binding {
                Binding::Number(value) => Expr::Num(*value),
                Binding::Expr(expr) => expr.clone(),
                Binding::Text(text) => parse(text)?,
            };
            Ok((name, tree))
        })
        .collect::<Result<Vec<_>, Error>>()?;
    Ok(walk(expr, &resolved))
}

fn walk(expr: &Expr, resolved: &[(&str, Expr)]) -> Expr {
    match expr {
        Expr::Num(_) => expr.clone(),
        Expr::Var(name) => resolved
            .iter()
            .find(|(n, _)| *n == name.as_str())
            .map(|(_, tree)| tree.clone())
            .unwrap_or_else(|| expr.clone()),
        Expr::Unary(op, operand) => Expr::Unary(*op, Box::new(walk(operand, resolved))),
        Expr::Binary(op, lhs, rhs) => Expr::Binary(
            *op,
            Box::new(walk(lhs, resolved)),
            Box::new(walk(rhs, resolved)),
        ),
        Expr::Call(name, arg) => Expr::Call(name.clone(), Box::new(walk(arg, resolved))),
        Expr::MultiCall(name, args) => Expr::MultiCall(
            name.clone(),
            args.iter().map(|arg| walk(arg, resolved)).collect(),
        ),
    }
}
