//! The expression printer. `Printer` owns the driver-lifetime state
//! — the ordered set of nodes recorded as "not Fortran 77" — and exposes a
//! single dispatch entry point, [`fortran::render`], that the
//! driver (`crate::driver`) calls once per expression.
//!
//! This module (`mod.rs`) holds the variant-generic rendering rules that
//! don't need any Fortran-specific knowledge: how a sum's
//! terms are joined, how a product's factors are parenthesised, and so on.
//! [`fortran`] composes with these rather than subclassing them — it calls
//! straight through to the base renderer for every variant it doesn't need
//! to special-case.

use num::{BigInt, One};

use crate::{
    error::Error,
    expr::{
        precedence::{parenthesize, Precedence},
        Expr,
    },
    options::FortranOptions,
};

/// Fortran-77 specific overrides layered on top of the base printer.
pub mod fortran;

/// Piecewise-to-`if`/`else if`/`end if` lowering.
pub mod piecewise;

/// Owns the options for one driver invocation plus the accumulated
/// "not Fortran 77" incidents. Never shared across calls.
pub struct Printer<'a> {
    options: &'a FortranOptions,
    not_fortran: Vec<String>,
}

impl<'a> Printer<'a> {
    /// Create a fresh printer for one driver invocation.
    #[must_use]
    pub fn new(options: &'a FortranOptions) -> Self {
        Self {
            options,
            not_fortran: Vec::new(),
        }
    }

    #[must_use]
    pub fn options(&self) -> &FortranOptions {
        self.options
    }

    /// Consume the printer, returning every incident recorded in
    /// non-strict mode, in the order they were encountered.
    #[must_use]
    pub fn into_not_fortran(self) -> Vec<String> {
        self.not_fortran
    }

    /// Record that `description` (kind + name) isn't representable in
    /// Fortran 77. In strict mode this aborts emission with
    /// [`Error::Unsupported`]; otherwise the incident is recorded and
    /// `fallback` is returned as the node's rendering.
    pub fn flag_untranslatable(
        &mut self,
        kind: &str,
        name: &str,
        fallback: String,
    ) -> Result<String, Error> {
        if self.options.strict {
            tracing::debug!(kind, name, "aborting: not representable in Fortran 77");
            return Err(Error::Unsupported {
                kind: kind.to_string(),
                name: name.to_string(),
            });
        }
        tracing::trace!(kind, name, "recording not-Fortran-77 incident");
        self.not_fortran.push(format!("{kind} {name}"));
        Ok(fallback)
    }

    /// A symbol's name, verbatim.
    #[must_use]
    pub fn render_symbol(&self, name: &str) -> String {
        name.to_string()
    }

    /// A signed integer, in decimal.
    #[must_use]
    pub fn render_integer(&self, n: &BigInt) -> String {
        n.to_string()
    }

    /// A normalised rational: `p` alone when the
    /// denominator is `1`, else `"<p>.0/<q>.0"`.
    #[must_use]
    pub fn render_rational(&self, numer: &BigInt, denom: &BigInt) -> String {
        if denom.is_one() {
            numer.to_string()
        } else {
            format!("{numer}.0/{denom}.0")
        }
    }

    /// Render the sum `ts` using the base Add algorithm: operands
    /// keep their stored order; the first term keeps its sign, later terms
    /// drop a leading `-` in favour of `" - "`, or get `" + "` otherwise.
    pub fn render_add_base<F>(&mut self, ts: &[Expr], mut render_child: F) -> Result<String, Error>
    where
        F: FnMut(&mut Self, &Expr) -> Result<String, Error>,
    {
        let mut out = String::new();
        for (i, t) in ts.iter().enumerate() {
            let rendered = render_child(self, t)?;
            let rendered = parenthesize(t, Precedence::Add, rendered);
            if i == 0 {
                out.push_str(&rendered);
            } else if let Some(stripped) = rendered.strip_prefix('-') {
                out.push_str(" - ");
                out.push_str(stripped);
            } else {
                out.push_str(" + ");
                out.push_str(&rendered);
            }
        }
        Ok(out)
    }

    /// Render the product `fs` using the base Mul algorithm:
    /// factors joined by `*`, each parenthesised per the precedence table,
    /// with a leading `-1` factor collapsing into a unary minus.
    pub fn render_mul_base<F>(&mut self, fs: &[Expr], mut render_child: F) -> Result<String, Error>
    where
        F: FnMut(&mut Self, &Expr) -> Result<String, Error>,
    {
        if fs.is_empty() {
            return Ok("1".to_string());
        }

        let mut factors = fs;
        let mut leading_minus = false;
        if factors.len() > 1 && is_negative_one(&factors[0]) {
            leading_minus = true;
            factors = &factors[1..];
        }

        let mut parts = Vec::with_capacity(factors.len());
        for f in factors {
            let rendered = render_child(self, f)?;
            parts.push(parenthesize(f, Precedence::Mul, rendered));
        }
        let joined = parts.join("*");
        Ok(if leading_minus {
            format!("-{joined}")
        } else {
            joined
        })
    }

    /// Render `base**exp` using the base Pow algorithm, both
    /// operands parenthesised per the precedence table. The exponent slot
    /// also parenthesises another `Pow` outright (equal precedence, not
    /// just lower) so a nested power reads unambiguously as `x**(y**3)`
    /// rather than the flatter (if, under Fortran's right-associative
    /// `**`, equivalent) `x**y**3`.
    pub fn render_pow_base<F>(
        &mut self,
        base: &Expr,
        exp: &Expr,
        mut render_child: F,
    ) -> Result<String, Error>
    where
        F: FnMut(&mut Self, &Expr) -> Result<String, Error>,
    {
        let rb = render_child(self, base)?;
        let re = render_child(self, exp)?;
        let re = if matches!(exp, Expr::Pow(..)) {
            format!("({re})")
        } else {
            parenthesize(exp, Precedence::Pow, re)
        };
        Ok(format!("{}**{}", parenthesize(base, Precedence::Pow, rb), re))
    }

    /// `name(arg1, arg2, ...)`, each argument rendered and comma-separated
    /// The name has already been resolved by the Fortran specialisation by
    /// the time this runs.
    pub fn render_call_base<F>(
        &mut self,
        name: &str,
        args: &[Expr],
        mut render_child: F,
    ) -> Result<String, Error>
    where
        F: FnMut(&mut Self, &Expr) -> Result<String, Error>,
    {
        let mut rendered_args = Vec::with_capacity(args.len());
        for a in args {
            rendered_args.push(render_child(self, a)?);
        }
        Ok(format!("{name}({})", rendered_args.join(", ")))
    }
}

/// Is `expr` the literal integer or rational `-1`?
fn is_negative_one(expr: &Expr) -> bool {
    match expr {
        Expr::Integer(n) => *n == BigInt::from(-1),
        Expr::Rational(r) => r.denom().is_one() && *r.numer() == BigInt::from(-1),
        _ => false,
    }
}
