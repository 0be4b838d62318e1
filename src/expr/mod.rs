use std::collections::BTreeSet;

use num::{BigInt, BigRational};

use crate::error::Error;

/// The precedence table used by the printer to decide when a sub-expression
/// needs parenthesising.
pub mod precedence;

/// Function identities and the F77 "not representable" blacklist.
pub mod function;

/// Mathematical constants.
pub mod constant;

pub use constant::NumberSymbol;
pub use function::{FunctionId, OtherKind};

/// A comparison operator appearing in a [`Expr::Relational`] node. Only
/// meaningful inside a piecewise condition; anywhere else, a `Relational` is
/// untranslatable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

impl RelOp {
    /// The operator's Fortran-77 spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Le => "<=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Eq => "==",
            Self::Ne => "!=",
        }
    }
}

/// A symbol (free variable), carrying `is_imaginary`/`is_real` assumption
/// flags the printer needs to classify `Add`/`Mul` operands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub name: String,
    pub is_imaginary: bool,
    pub is_real: bool,
}

impl Symbol {
    /// A plain real-valued symbol with the given name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_imaginary: false,
            is_real: true,
        }
    }

    /// A symbol explicitly assumed to be imaginary.
    #[must_use]
    pub fn imaginary(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_imaginary: true,
            is_real: false,
        }
    }
}

/// The condition attached to one branch of a [`Expr::Piecewise`]. Modeled as
/// its own type rather than folding a boolean literal into `Expr`, so that
/// "the final branch is unconditional" is a case the compiler can check for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PiecewiseCond {
    Cond(Box<Expr>),
    /// The literal `true` — only valid as the final branch's condition.
    Otherwise,
}

/// An immutable algebraic expression node. Trees of `Expr` are owned by the
/// caller and never mutated by this crate; the printer only ever reads them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// A free variable.
    Symbol(Symbol),

    /// A signed arbitrary-precision integer.
    Integer(BigInt),

    /// A normalised rational number; the denominator is always positive
    /// (enforced by `num::BigRational`), with sign carried on the numerator.
    Rational(BigRational),

    /// A named mathematical constant.
    NumberSymbol(NumberSymbol),

    /// The imaginary unit, `i`.
    ImaginaryUnit,

    /// A sum of operands, in stored (unreordered) order.
    Add(Vec<Expr>),

    /// A product of operands, in stored (unreordered) order.
    Mul(Vec<Expr>),

    /// `base ** exp`.
    Pow(Box<Expr>, Box<Expr>),

    /// A call to a named function.
    Call(FunctionId, Vec<Expr>),

    /// A comparison; only valid as a piecewise condition.
    Relational(Box<Expr>, RelOp, Box<Expr>),

    /// A piecewise expression: an ordered list of (value, condition) pairs.
    /// Only valid at the root of the tree handed to the printer.
    Piecewise(Vec<(Expr, PiecewiseCond)>),

    /// A node of a kind the F77 printer cannot express:
    /// derivatives, integrals, limits, matrices, and so on. Carries its own
    /// sub-expressions (if any) purely so a generic textual form can still
    /// be produced in non-strict mode.
    Other(OtherKind, Vec<Expr>),
}

impl Expr {
    /// Construct a normalised rational number. Fails with
    /// [`Error::InvalidInput`] if `denom` is zero.
    pub fn rational(numer: BigInt, denom: BigInt) -> Result<Self, Error> {
        if denom == BigInt::from(0) {
            return Err(Error::InvalidInput("rational with zero denominator".into()));
        }
        Ok(Self::Rational(BigRational::new(numer, denom)))
    }

    /// Construct an integer expression from any type convertible to `BigInt`.
    pub fn integer(n: impl Into<BigInt>) -> Self {
        Self::Integer(n.into())
    }

    /// This node's immediate children, for generic traversal. Piecewise
    /// branches yield both their value and their condition (when present).
    #[must_use]
    pub fn children(&self) -> Vec<&Expr> {
        match self {
            Self::Symbol(_)
            | Self::Integer(_)
            | Self::Rational(_)
            | Self::NumberSymbol(_)
            | Self::ImaginaryUnit => vec![],
            Self::Add(xs) | Self::Mul(xs) => xs.iter().collect(),
            Self::Pow(b, e) => vec![b, e],
            Self::Call(_, args) | Self::Other(_, args) => args.iter().collect(),
            Self::Relational(l, _, r) => vec![l, r],
            Self::Piecewise(branches) => branches
                .iter()
                .flat_map(|(value, cond)| {
                    let mut cs = vec![value];
                    if let PiecewiseCond::Cond(c) = cond {
                        cs.push(c);
                    }
                    cs
                })
                .collect(),
        }
    }

    /// Does this expression (or any sub-expression) contain a free symbol?
    /// The complement of `is_number`.
    #[must_use]
    pub fn contains_symbol(&self) -> bool {
        matches!(self, Self::Symbol(_)) || self.children().iter().any(|c| c.contains_symbol())
    }

    /// Is this expression free of symbols? Total over every `Expr` variant.
    #[must_use]
    pub fn is_number(&self) -> bool {
        match self {
            Self::Symbol(_) | Self::Relational(..) | Self::Piecewise(_) | Self::Other(..) => {
                false
            }
            Self::Integer(_) | Self::Rational(_) | Self::NumberSymbol(_) | Self::ImaginaryUnit => {
                true
            }
            Self::Add(xs) | Self::Mul(xs) => xs.iter().all(Expr::is_number),
            Self::Pow(b, e) => b.is_number() && e.is_number(),
            Self::Call(_, args) => args.iter().all(Expr::is_number),
        }
    }

    /// Is this expression a purely real number (or, for a free symbol,
    /// assumed real)? Total, but necessarily conservative for compound
    /// expressions since this crate performs no simplification: `Add`/`Mul`
    /// are real only when every operand can individually be shown real.
    #[must_use]
    pub fn is_real(&self) -> bool {
        match self {
            Self::Symbol(s) => s.is_real,
            Self::Integer(_) | Self::Rational(_) | Self::NumberSymbol(_) => true,
            Self::ImaginaryUnit => false,
            Self::Add(xs) => xs.iter().all(Expr::is_real),
            Self::Mul(fs) => !fs.iter().any(Expr::is_imaginary) && fs.iter().all(Expr::is_real),
            Self::Pow(b, e) => b.is_real() && e.is_real(),
            Self::Call(_, args) => args.iter().all(Expr::is_real),
            Self::Relational(..) | Self::Piecewise(_) | Self::Other(..) => false,
        }
    }

    /// Is this expression purely imaginary? Recognises the `I`, symbols
    /// explicitly assumed imaginary, and a product with exactly one
    /// imaginary factor and otherwise-real factors (the `real * I` shape
    /// the Fortran `cmplx` rewriting depends on).
    #[must_use]
    pub fn is_imaginary(&self) -> bool {
        match self {
            Self::Symbol(s) => s.is_imaginary,
            Self::ImaginaryUnit => true,
            Self::Integer(_) | Self::Rational(_) | Self::NumberSymbol(_) => false,
            Self::Mul(fs) => {
                let imaginary_factors = fs.iter().filter(|f| f.is_imaginary()).count();
                imaginary_factors == 1 && fs.iter().filter(|f| !f.is_imaginary()).all(Expr::is_real)
            }
            Self::Add(ts) => !ts.is_empty() && ts.iter().all(Expr::is_imaginary),
            Self::Pow(..) | Self::Call(..) | Self::Relational(..) | Self::Piecewise(_) | Self::Other(..) => {
                false
            }
        }
    }

    /// Collect every distinct [`NumberSymbol`] occurring anywhere in this
    /// tree, in post-order traversal order.
    #[must_use]
    pub fn number_symbols(&self) -> BTreeSet<NumberSymbol> {
        let mut found = BTreeSet::new();
        self.collect_number_symbols(&mut found);
        found
    }

    fn collect_number_symbols(&self, found: &mut BTreeSet<NumberSymbol>) {
        for child in self.children() {
            child.collect_number_symbols(found);
        }
        if let Self::NumberSymbol(ns) = self {
            found.insert(*ns);
        }
    }
}
