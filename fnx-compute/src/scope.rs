//! Semantic analysis: collecting the free variables of a tree.

use fnx_parser::parser::ast::Expr;

/// The distinct free variables of an expression, in first-occurrence order.
///
/// This ordering is the expression's *signature*: it fixes how positional values map to
/// variables when the expression is called, and it is stable under re-parsing the printed form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    names: Vec<String>,
}

impl SymbolTable {
    /// Collects the free variables of the given tree with a post-order walk.
    pub fn of(expr: &Expr) -> SymbolTable {
        let mut table = SymbolTable::default();
        table.visit(expr);
        table
    }

    fn visit(&mut self, expr: &Expr) {
        match expr {
            Expr::Num(_) => {},
            Expr::Var(name) => self.insert(name),
            Expr::Unary(_, operand) => self.visit(operand),
            Expr::Binary(_, lhs, rhs) => {
                self.visit(lhs);
                self.visit(rhs);
            },
            Expr::Call(_, arg) => self.visit(arg),
            Expr::MultiCall(_, args) => args.iter().for_each(|arg| self.visit(arg)),
        }
    }

    fn insert(&mut self, name: &str) {
        if !self.contains(name) {
            self.names.push(name.to_string());
        }
    }

    /// The variable names, in first-occurrence order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The number of distinct variables.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if the expression has no free variables.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Returns true if the given name is one of the variables.
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

/// Returns true if the tree contains a reference to the given variable.
///
/// This is the structural constancy test used by the power rule: a subtree with no occurrence of
/// the variable is constant with respect to it, whatever its numeric value.
pub fn contains_var(expr: &Expr, name: &str) -> bool {
    match expr {
        Expr::Num(_) => false,
        Expr::Var(n) => n == name,
        Expr::Unary(_, operand) => contains_var(operand, name),
        Expr::Binary(_, lhs, rhs) => contains_var(lhs, name) || contains_var(rhs, name),
        Expr::Call(_, arg) => contains_var(arg, name),
        Expr::MultiCall(_, args) => args.iter().any(|arg| contains_var(arg, name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fnx_parser::parse;
    use pretty_assertions::assert_eq;

    #[test]
    fn signature_is_in_first_occurrence_order() {
        let expr = parse("p*(1 + r/12)**(12*30)").unwrap();
        assert_eq!(SymbolTable::of(&expr).names(), ["p", "r"]);
    }

    #[test]
    fn duplicates_collapse() {
        let expr = parse("x*x + y + x").unwrap();
        assert_eq!(SymbolTable::of(&expr).names(), ["x", "y"]);
    }

    #[test]
    fn constants_are_not_variables() {
        let expr = parse("2*pi + e").unwrap();
        assert!(SymbolTable::of(&expr).is_empty());
    }

    #[test]
    fn multi_call_arguments_are_visited() {
        let expr = parse("max(a, b, normcdf(c, 0, 1))").unwrap();
        assert_eq!(SymbolTable::of(&expr).names(), ["a", "b", "c"]);
    }

    #[test]
    fn constancy_test_is_structural() {
        let expr = parse("x**2 + sin(y)").unwrap();
        assert!(contains_var(&expr, "x"));
        assert!(contains_var(&expr, "y"));
        assert!(!contains_var(&expr, "z"));
    }
}
