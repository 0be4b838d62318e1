//! The driver: walks the tree for number-symbol parameters,
//! invokes the printer or the piecewise lowering depending on the
//! root node, runs the fixed-form wrapper over the result, and
//! assembles the final header plus body.

use crate::{
    error::Error,
    expr::Expr,
    options::FortranOptions,
    printer::{piecewise, Printer},
    wrap,
};

/// The result of [`fcode`]: either a single human-readable string, or the
/// structured `(number_symbols, not_fortran, body)` tuple, named here rather
/// than left anonymous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FcodeOutput {
    /// The `human = true` form: `parameter` declarations, optional
    /// `C     Not Fortran 77:` commentary, then the wrapped body.
    Human(String),

    /// The `human = false` form.
    Structured {
        /// `(canonical name, evalf(precision))` pairs, in canonical-name
        /// order.
        number_symbols: Vec<(String, String)>,
        /// One entry per "not Fortran 77" incident recorded in non-strict
        /// mode, empty if none were.
        not_fortran: Vec<String>,
        /// The wrapped Fortran body.
        body: String,
    },
}

impl FcodeOutput {
    /// The wrapped Fortran body, regardless of which variant this is.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Human(s) => s,
            Self::Structured { body, .. } => body,
        }
    }
}

/// Convert `expr` to Fortran 77, per `options`.
pub fn fcode(expr: &Expr, options: &FortranOptions) -> Result<FcodeOutput, Error> {
    tracing::debug!(
        piecewise_root = matches!(expr, Expr::Piecewise(_)),
        strict = options.strict,
        human = options.human,
        "emitting fortran"
    );

    let number_symbols = expr.number_symbols();

    let mut printer = Printer::new(options);
    let raw_lines = if let Expr::Piecewise(branches) = expr {
        piecewise::render(&mut printer, branches)?
    } else {
        let rendered = printer.render(expr)?;
        let line = match &options.assign_to {
            Some(name) => format!("{name} = {rendered}"),
            None => rendered,
        };
        vec![line]
    };

    let body = wrap::wrap_lines(&raw_lines).join("\n");
    let not_fortran = printer.into_not_fortran();

    let symbol_decls: Vec<(String, String)> = number_symbols
        .iter()
        .map(|ns| {
            tracing::trace!(symbol = %ns, "declaring number-symbol parameter");
            (ns.canonical_name().to_string(), ns.evalf(options.precision))
        })
        .collect();

    if options.human {
        let mut human = String::new();
        for (name, value) in &symbol_decls {
            human.push_str(&format!("      parameter ({name} = {value})\n"));
        }
        if !not_fortran.is_empty() {
            human.push_str("C     Not Fortran 77:\n");
            for incident in &not_fortran {
                human.push_str(&format!("C       {incident}\n"));
            }
        }
        human.push_str(&body);
        Ok(FcodeOutput::Human(human))
    } else {
        Ok(FcodeOutput::Structured {
            number_symbols: symbol_decls,
            not_fortran,
            body,
        })
    }
}

/// Write the human form of `fcode(expr, options)` to standard output. A
/// convenience wrapper; any emission failure is propagated, not swallowed.
pub fn print_fcode(expr: &Expr, options: &FortranOptions) -> Result<(), Error> {
    let output = fcode(expr, options)?;
    println!("{}", output.body());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::{FunctionId, NumberSymbol, Symbol};
    use num::{BigInt, BigRational};

    fn int(n: i64) -> Expr {
        Expr::Integer(BigInt::from(n))
    }

    fn rat(n: i64, d: i64) -> Expr {
        Expr::Rational(BigRational::new(BigInt::from(n), BigInt::from(d)))
    }

    #[test]
    fn s1_eight_sqrt_two_times_tau_to_the_seven_halves() {
        // The printer never simplifies; (2*tau)**(7/2) only reaches the
        // tree above as "8*sqrt(2)*tau**(7/2)" because the external system
        // that builds the tree already extracted the perfect square from
        // the numeric base before handing it to this crate. "tau" is a
        // plain symbol, not a NumberSymbol, since this crate has no such
        // predefined constant.
        let tau = Expr::Symbol(Symbol::new("tau"));
        let e = Expr::Mul(vec![
            int(8),
            Expr::Call(FunctionId::Sqrt, vec![int(2)]),
            Expr::Pow(Box::new(tau), Box::new(rat(7, 2))),
        ]);
        let options = FortranOptions::default();
        let out = fcode(&e, &options).unwrap();
        assert_eq!(out.body(), "      8*sqrt(2)*tau**(7.0/2.0)");
    }

    #[test]
    fn power_of_a_product_parenthesises_both_base_and_fractional_exponent() {
        // (2*tau)**(7/2), unsimplified: the base needs parens because Mul
        // binds looser than Pow, and the rational exponent's rendered
        // "7.0/2.0" needs parens of its own so the `/` it contains can't be
        // misread as following the `**` instead of being part of it.
        let tau = Expr::Symbol(Symbol::new("tau"));
        let e = Expr::Pow(
            Box::new(Expr::Mul(vec![int(2), tau])),
            Box::new(rat(7, 2)),
        );
        let options = FortranOptions::default();
        let out = fcode(&e, &options).unwrap();
        assert_eq!(out.body(), "      (2*tau)**(7.0/2.0)");
    }

    #[test]
    fn s2_assign_to_wraps_a_function_call() {
        let x = Expr::Symbol(Symbol::new("x"));
        let e = Expr::Call(FunctionId::Sin, vec![x]);
        let options = FortranOptions::default().with_assign_to("s");
        let out = fcode(&e, &options).unwrap();
        assert_eq!(out.body(), "      s = sin(x)");
    }

    #[test]
    fn s3_pi_emits_a_parameter_declaration() {
        let e = Expr::NumberSymbol(NumberSymbol::Pi);
        let options = FortranOptions::default();
        let out = fcode(&e, &options).unwrap();
        match out {
            FcodeOutput::Human(s) => {
                assert_eq!(
                    s,
                    "      parameter (pi = 3.14159265358979)\n      pi"
                );
            }
            FcodeOutput::Structured { .. } => panic!("expected human output"),
        }
    }

    #[test]
    fn structured_mode_returns_the_number_symbol_table() {
        let e = Expr::NumberSymbol(NumberSymbol::Pi);
        let options = FortranOptions::default().structured();
        let out = fcode(&e, &options).unwrap();
        match out {
            FcodeOutput::Structured {
                number_symbols,
                not_fortran,
                body,
            } => {
                assert_eq!(number_symbols, vec![("pi".to_string(), "3.14159265358979".to_string())]);
                assert!(not_fortran.is_empty());
                assert_eq!(body, "      pi");
            }
            FcodeOutput::Human(_) => panic!("expected structured output"),
        }
    }

    #[test]
    fn strict_mode_fails_exactly_when_something_is_not_fortran_77() {
        let lenient_ok = Expr::Add(vec![int(1), int(2)]);
        let strict_options = FortranOptions::default().strict();
        assert!(fcode(&lenient_ok, &strict_options).is_ok());

        let derivative = Expr::Other(crate::expr::OtherKind::Derivative, vec![int(1)]);
        assert!(fcode(&derivative, &strict_options).is_err());

        let lenient = FortranOptions::default();
        let out = fcode(&derivative, &lenient).unwrap();
        match out {
            FcodeOutput::Human(s) => assert!(s.contains("Not Fortran 77")),
            FcodeOutput::Structured { .. } => unreachable!(),
        }
    }

    #[test]
    fn number_symbol_set_matches_what_occurs_in_the_tree() {
        let e = Expr::Add(vec![
            Expr::NumberSymbol(NumberSymbol::Pi),
            Expr::Mul(vec![int(2), Expr::NumberSymbol(NumberSymbol::E)]),
        ]);
        let options = FortranOptions::default().structured();
        let out = fcode(&e, &options).unwrap();
        match out {
            FcodeOutput::Structured { number_symbols, .. } => {
                let names: Vec<&str> = number_symbols.iter().map(|(n, _)| n.as_str()).collect();
                assert_eq!(names, vec!["E", "pi"]);
            }
            FcodeOutput::Human(_) => unreachable!(),
        }
    }
}
