//! Error kinds returned by a fallible emission.

/// Something went wrong while emitting Fortran for an expression tree.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[allow(clippy::module_name_repetitions)]
pub enum Error {
    /// A node has no Fortran-77 rendering — either a function with neither
    /// a user-supplied nor an implicit name, or a node on the F77
    /// blacklist. Only raised in strict mode.
    #[error("not representable in Fortran 77: {kind} {name}")]
    Unsupported {
        /// A short category, e.g. `"function"`, `"construct"`, `"relational"`.
        kind: String,
        /// The specific function or construct name.
        name: String,
    },

    /// The input tree was structurally malformed — e.g. a `Rational`
    /// constructed with a zero denominator, or a `Piecewise` whose
    /// `Otherwise` condition isn't the final branch.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
