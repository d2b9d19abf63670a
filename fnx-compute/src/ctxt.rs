//! The evaluation context.

use crate::error::UndefinedVariable;
use fnx_error::Error;
use levenshtein::levenshtein;
use std::collections::HashMap;

/// A context to use when evaluating an expression, containing the values bound to its free
/// variables.
///
/// Contexts are created fresh per evaluation and never outlive it. Reserved constants do not
/// appear here; the tokenizer resolves them to literals before a tree exists.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: HashMap<String, f64>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Ctxt {
        Ctxt::default()
    }

    /// Add a variable to the context.
    pub fn add_var(&mut self, name: &str, value: f64) {
        self.vars.insert(name.to_string(), value);
    }

    /// Get the value of a variable in the context.
    pub fn get_var(&self, name: &str) -> Option<f64> {
        self.vars.get(name).copied()
    }

    /// Returns all variables in the context with a name similar to the given name.
    pub fn get_similar_vars(&self, name: &str) -> Vec<&str> {
        self.vars
            .keys()
            .filter(|n| levenshtein(n, name) < 2)
            .map(|n| n.as_str())
            .collect()
    }

    /// Get the value of a variable, failing with [`UndefinedVariable`] if it is not bound.
    pub(crate) fn resolve(&self, name: &str) -> Result<f64, Error> {
        self.get_var(name).ok_or_else(|| {
            Error::spanless(UndefinedVariable {
                name: name.to_string(),
                suggestions: self
                    .get_similar_vars(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_bound_variable() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("x", 4.0);
        assert_eq!(ctxt.resolve("x").unwrap(), 4.0);
    }

    #[test]
    fn resolve_suggests_similar_names() {
        let mut ctxt = Ctxt::new();
        ctxt.add_var("rate", 0.05);
        let err = ctxt.resolve("rte").unwrap_err();
        assert!(format!("{:?}", err.kind).contains("rate"));
    }
}
