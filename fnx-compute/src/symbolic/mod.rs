//! Symbolic tree-to-tree passes.
//!
//! Each pass consumes a tree by reference and produces a new tree; the input is never altered.
//! The passes return raw trees so that they compose without hidden rewriting; the public
//! [`Func`](crate::func::Func) layer is what applies [`simplify`] to user-visible results.

pub mod derivative;
pub mod simplify;
pub mod substitute;

pub use derivative::{derivative, derivative_seq};
pub use simplify::simplify;
pub use substitute::{substitute, Binding, Bindings};
