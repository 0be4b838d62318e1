//! Translates symbolic expression trees into Fortran 77 source fragments.
//!
//! The pipeline has three stages: the precedence-aware printer ([`printer`])
//! turns one [`expr::Expr`] into a single logical line, the piecewise lowerer
//! ([`printer::piecewise`]) turns a root `Piecewise` into an `if`/`else
//! if`/`end if` block instead, and the fixed-form wrapper ([`wrap`])
//! re-segments whatever comes out of either into 6-column-margin,
//! 72-column-max physical lines. [`driver::fcode`] wires the three together.

#![warn(missing_docs)]

/// The expression tree this crate renders: [`expr::Expr`] and its
/// supporting types ([`expr::NumberSymbol`], [`expr::FunctionId`],
/// [`expr::RelOp`], [`expr::Symbol`], [`expr::PiecewiseCond`]).
pub mod expr;

/// Error kinds returned by every fallible operation in this crate.
pub mod error;

/// The options record threaded through one [`driver::fcode`] invocation.
pub mod options;

/// The precedence-aware printer and the piecewise lowerer.
pub mod printer;

/// The Fortran-77 fixed-form line wrapper.
pub mod wrap;

/// The driver: `fcode`, `print_fcode`, and `FcodeOutput`.
pub mod driver;

pub use driver::{fcode, print_fcode, FcodeOutput};
pub use error::Error;
pub use expr::{Expr, FunctionId, NumberSymbol, PiecewiseCond, RelOp, Symbol};
pub use options::FortranOptions;
