//! Evaluation and symbolic transformation of parsed math expressions.
//!
//! This crate consumes the trees produced by [`fnx_parser`] and provides the four passes over
//! them: numeric evaluation under a variable context, symbolic differentiation, algebraic
//! simplification, and substitution. The [`func::Func`] wrapper ties the passes together into a
//! callable value with positional calls, named currying, and operator overloading.
//!
//! # Example
//!
//! ```
//! use fnx_compute::func::{Applied, Func};
//! use fnx_compute::symbolic::Bindings;
//!
//! // a 30-year mortgage balance as a function of principal and rate
//! let f = Func::new("p*(1 + r/12)**(12*30)").unwrap();
//! assert_eq!(f.variables(), ["p", "r"]);
//!
//! // binding a subset of the variables curries the function
//! let Applied::Func(fixed_rate) = f.apply(&Bindings::new().with("r", 0.045)).unwrap() else {
//!     unreachable!();
//! };
//! assert_eq!(fixed_rate.variables(), ["p"]);
//!
//! // binding every variable evaluates it
//! let Applied::Number(balance) = fixed_rate.apply(&Bindings::new().with("p", 1000.0)).unwrap()
//! else {
//!     unreachable!();
//! };
//! assert!(balance > 3800.0 && balance < 3900.0);
//! ```

pub mod ctxt;
pub mod error;
pub mod eval;
pub mod func;
pub mod funcs;
pub mod scope;
pub mod symbolic;
