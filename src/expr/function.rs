//! Function identities (`FunctionId`) and the F77 blacklist (`OtherKind`).

use derive_more::Display;

/// The identity of a function-call node. Either one of the fixed elementary
/// functions the printer already knows how to special-case, or an arbitrary
/// named function supplied by the caller (e.g. a user-defined `f(x)`).
#[derive(Display, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FunctionId {
    #[display(fmt = "sin")]
    Sin,
    #[display(fmt = "cos")]
    Cos,
    #[display(fmt = "tan")]
    Tan,
    #[display(fmt = "asin")]
    Asin,
    #[display(fmt = "acos")]
    Acos,
    #[display(fmt = "atan")]
    Atan,
    #[display(fmt = "atan2")]
    Atan2,
    #[display(fmt = "sinh")]
    Sinh,
    #[display(fmt = "cosh")]
    Cosh,
    #[display(fmt = "tanh")]
    Tanh,
    #[display(fmt = "sqrt")]
    Sqrt,
    #[display(fmt = "log")]
    Log,
    #[display(fmt = "exp")]
    Exp,
    #[display(fmt = "abs")]
    Abs,
    #[display(fmt = "sign")]
    Sign,
    #[display(fmt = "conjugate")]
    Conjugate,
    /// Any function not in the fixed table above, identified by name.
    #[display(fmt = "{_0}")]
    Named(String),
}

impl FunctionId {
    /// The function's canonical (non-Fortran-specific) spelling. This is
    /// what `FunctionId::Named` carries verbatim, and what the base printer
    /// uses before the Fortran specialisation has a chance to remap it.
    #[must_use]
    pub fn canonical_name(&self) -> &str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Atan2 => "atan2",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Sqrt => "sqrt",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Abs => "abs",
            Self::Sign => "sign",
            Self::Conjugate => "conjugate",
            Self::Named(name) => name,
        }
    }

    /// The name this function has as a hard-coded Fortran-77 intrinsic, if
    /// any. `Named` functions never have one — they can only be resolved via
    /// `user_functions`.
    #[must_use]
    pub fn implicit_fortran_name(&self) -> Option<&'static str> {
        match self {
            Self::Sin => Some("sin"),
            Self::Cos => Some("cos"),
            Self::Tan => Some("tan"),
            Self::Asin => Some("asin"),
            Self::Acos => Some("acos"),
            Self::Atan => Some("atan"),
            Self::Atan2 => Some("atan2"),
            Self::Sinh => Some("sinh"),
            Self::Cosh => Some("cosh"),
            Self::Tanh => Some("tanh"),
            Self::Sqrt => Some("sqrt"),
            Self::Log => Some("log"),
            Self::Exp => Some("exp"),
            Self::Abs => Some("abs"),
            Self::Sign => Some("sign"),
            Self::Conjugate => Some("conjg"),
            Self::Named(_) => None,
        }
    }
}

/// A node kind the Fortran 77 printer can never express. These are
/// recorded in the driver's "not Fortran 77" set and, in strict mode,
/// abort emission with `Unsupported`.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OtherKind {
    #[display(fmt = "derivative")]
    Derivative,
    #[display(fmt = "integral")]
    Integral,
    #[display(fmt = "limit")]
    Limit,
    #[display(fmt = "order")]
    Order,
    #[display(fmt = "interval")]
    Interval,
    #[display(fmt = "oo")]
    Infinity,
    #[display(fmt = "-oo")]
    NegativeInfinity,
    #[display(fmt = "zoo")]
    ComplexInfinity,
    #[display(fmt = "nan")]
    NaN,
    #[display(fmt = "matrix")]
    Matrix,
    #[display(fmt = "tuple")]
    Tuple,
    #[display(fmt = "dict")]
    Dict,
    #[display(fmt = "list")]
    List,
    #[display(fmt = "RootOf")]
    RootOf,
    #[display(fmt = "geometry")]
    GeometryEntity,
    #[display(fmt = "distribution")]
    Distribution,
    #[display(fmt = "wildcard")]
    Wildcard,
}

impl OtherKind {
    /// The tag used in the node's generic textual rendering, e.g.
    /// `derivative(...)`.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Derivative => "derivative",
            Self::Integral => "integral",
            Self::Limit => "limit",
            Self::Order => "order",
            Self::Interval => "interval",
            Self::Infinity => "oo",
            Self::NegativeInfinity => "-oo",
            Self::ComplexInfinity => "zoo",
            Self::NaN => "nan",
            Self::Matrix => "matrix",
            Self::Tuple => "tuple",
            Self::Dict => "dict",
            Self::List => "list",
            Self::RootOf => "RootOf",
            Self::GeometryEntity => "geometry",
            Self::Distribution => "distribution",
            Self::Wildcard => "wildcard",
        }
    }
}
