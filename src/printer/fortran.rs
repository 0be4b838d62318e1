//! The Fortran-77 specialisation: overrides the base printer for
//! complex-number rendering, `1/x` and `sqrt` recognition, number-symbol
//! parameters, function-name mapping, and the F77 blacklist.

use num::BigInt;

use crate::{
    error::Error,
    expr::{
        precedence::{parenthesize, Precedence},
        Expr,
    },
    printer::Printer,
};

impl<'a> Printer<'a> {
    /// Render `expr` as a single unwrapped line of Fortran, dispatching on
    /// variant and delegating to the base printer (`super::Printer`'s
    /// `render_*_base` methods) wherever no Fortran-specific rule applies.
    pub fn render(&mut self, expr: &Expr) -> Result<String, Error> {
        match expr {
            Expr::Symbol(s) => Ok(self.render_symbol(&s.name)),
            Expr::Integer(n) => Ok(self.render_integer(n)),
            Expr::Rational(r) => Ok(self.render_rational(r.numer(), r.denom())),
            Expr::NumberSymbol(ns) => Ok(ns.canonical_name().to_string()),
            Expr::ImaginaryUnit => Ok("cmplx(0,1)".to_string()),

            Expr::Mul(fs) if expr.is_imaginary() && expr.is_number() => {
                self.render_imaginary_mul(fs)
            }
            Expr::Mul(fs) => self.render_mul_base(fs, Self::render),

            Expr::Add(ts) => self.render_add(ts),

            Expr::Pow(base, exp) => self.render_pow(base, exp),

            Expr::Call(fid, args) => self.render_call(fid, args),

            Expr::Relational(..) => {
                let rendered = self.render_condition(expr)?;
                self.flag_untranslatable("relational", "relational", rendered)
            }

            Expr::Piecewise(_) => {
                self.flag_untranslatable("piecewise", "piecewise", "Piecewise(...)".to_string())
            }

            Expr::Other(kind, args) => {
                let mut rendered_args = Vec::with_capacity(args.len());
                for a in args {
                    rendered_args.push(self.render(a)?);
                }
                let generic = format!("{}({})", kind.tag(), rendered_args.join(", "));
                self.flag_untranslatable("construct", kind.tag(), generic)
            }
        }
    }

    /// Render a piecewise branch's condition. Unlike [`Printer::render`],
    /// this treats `Relational` as ordinary syntax rather than as the
    /// blacklisted "relational at non-piecewise position" case — the one
    /// place a `Relational` is actually well-formed.
    pub fn render_condition(&mut self, cond: &Expr) -> Result<String, Error> {
        match cond {
            Expr::Relational(lhs, op, rhs) => {
                let rl = self.render(lhs)?;
                let rr = self.render(rhs)?;
                Ok(format!(
                    "{} {} {}",
                    parenthesize(lhs, Precedence::Relational, rl),
                    op.as_str(),
                    parenthesize(rhs, Precedence::Relational, rr)
                ))
            }
            other => self.render(other),
        }
    }

    /// Pure-imaginary numeric `Mul`: `cmplx(0, render(-I*expr))`.
    fn render_imaginary_mul(&mut self, fs: &[Expr]) -> Result<String, Error> {
        let coefficient = imaginary_coefficient(&Expr::Mul(fs.to_vec()));
        let inner = self.render(&coefficient)?;
        Ok(format!("cmplx(0,{inner})"))
    }

    /// `Add` with numeric real and/or numeric imaginary operands.
    fn render_add(&mut self, ts: &[Expr]) -> Result<String, Error> {
        let mut real = Vec::new();
        let mut imaginary = Vec::new();
        let mut mixed = Vec::new();

        for t in ts {
            if t.is_real() && t.is_number() {
                real.push(t.clone());
            } else if t.is_imaginary() && t.is_number() {
                imaginary.push(t.clone());
            } else {
                mixed.push(t.clone());
            }
        }

        if imaginary.is_empty() {
            // Only real numerics (or none at all): no `cmplx` wrapping,
            // even if `real` is non-empty.
            return self.render_add_base(ts, Self::render);
        }

        let real_part = sum_or_zero(real);
        let imaginary_part = imaginary_coefficient(&sum_or_zero(imaginary));

        let real_rendered = self.render(&real_part)?;
        let imaginary_rendered = self.render(&imaginary_part)?;

        if mixed.is_empty() {
            return Ok(format!("cmplx({real_rendered},{imaginary_rendered})"));
        }

        let mixed_sum = sum_of(mixed);
        let mixed_rendered = self.render(&mixed_sum)?;
        let mixed_rendered = parenthesize(&mixed_sum, Precedence::Add, mixed_rendered);
        let (sign, term) = match mixed_rendered.strip_prefix('-') {
            Some(stripped) => ("-", stripped.to_string()),
            None => ("+", mixed_rendered),
        };

        Ok(format!(
            "cmplx({real_rendered},{imaginary_rendered}) {sign} {term}"
        ))
    }

    /// `Pow` specialisations: `x**-1 -> 1.0/x`, `x**(1/2) -> sqrt(x)`,
    /// otherwise the base Pow printer.
    fn render_pow(&mut self, base: &Expr, exp: &Expr) -> Result<String, Error> {
        if is_negative_one(exp) {
            let rb = self.render(base)?;
            return Ok(format!(
                "1.0/{}",
                parenthesize(base, Precedence::Pow, rb)
            ));
        }

        if is_one_half(exp) {
            let rb = self.render(base)?;
            return Ok(format!("sqrt({rb})"));
        }

        // A non-trivial Rational exponent renders as "<p>.0/<q>.0", a
        // string that already contains a `/`. Left bare after
        // `**`, Fortran would parse it as `(base**p.0)/q.0` instead of the
        // intended `base**(p.0/q.0)`, so the rendered fraction is always
        // parenthesised here regardless of the generic precedence table.
        if let Expr::Rational(r) = exp {
            use num::One;
            if !r.denom().is_one() {
                let rb = self.render(base)?;
                let re = self.render(exp)?;
                return Ok(format!(
                    "{}**({re})",
                    parenthesize(base, Precedence::Pow, rb)
                ));
            }
        }

        self.render_pow_base(base, exp, Self::render)
    }

    /// Function-name mapping: user map, then the implicit F77-intrinsic
    /// table, then fall back to the canonical name and flag the call as
    /// not-Fortran-77.
    fn render_call(
        &mut self,
        fid: &crate::expr::FunctionId,
        args: &[Expr],
    ) -> Result<String, Error> {
        if let Some(name) = self.options().user_functions.get(fid).cloned() {
            return self.render_call_base(&name, args, Self::render);
        }

        if let Some(name) = fid.implicit_fortran_name() {
            return self.render_call_base(name, args, Self::render);
        }

        let name = fid.canonical_name().to_string();
        let fallback = self.render_call_base(&name, args, Self::render)?;
        self.flag_untranslatable("function", &name, fallback)
    }
}

/// Given an expression known to be `is_imaginary() && is_number()`, compute
/// `-I * expr` symbolically — which, since `I*I == -1`, is simply the
/// product of `expr`'s non-imaginary factors.
fn imaginary_coefficient(expr: &Expr) -> Expr {
    match expr {
        Expr::ImaginaryUnit => Expr::Integer(BigInt::from(1)),
        Expr::Mul(fs) => {
            let rest: Vec<Expr> = fs.iter().filter(|f| !f.is_imaginary()).cloned().collect();
            match rest.len() {
                0 => Expr::Integer(BigInt::from(1)),
                1 => rest.into_iter().next().unwrap(),
                _ => Expr::Mul(rest),
            }
        }
        Expr::Add(ts) => Expr::Add(ts.iter().map(imaginary_coefficient).collect()),
        other => other.clone(),
    }
}

fn sum_or_zero(mut terms: Vec<Expr>) -> Expr {
    match terms.len() {
        0 => Expr::Integer(BigInt::from(0)),
        1 => terms.remove(0),
        _ => Expr::Add(terms),
    }
}

fn sum_of(mut terms: Vec<Expr>) -> Expr {
    if terms.len() == 1 {
        terms.remove(0)
    } else {
        Expr::Add(terms)
    }
}

fn is_negative_one(expr: &Expr) -> bool {
    match expr {
        Expr::Integer(n) => *n == BigInt::from(-1),
        Expr::Rational(r) => {
            use num::One;
            r.denom().is_one() && *r.numer() == BigInt::from(-1)
        }
        _ => false,
    }
}

fn is_one_half(expr: &Expr) -> bool {
    match expr {
        Expr::Rational(r) => *r.numer() == BigInt::from(1) && *r.denom() == BigInt::from(2),
        _ => false,
    }
}
