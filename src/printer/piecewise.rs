//! Top-level piecewise lowering: turns a root `Piecewise`
//! into the lines of an `if` / `else if` / `end if` block. Only ever called
//! by the driver when the root of the tree *is* a `Piecewise` — anywhere
//! else, a `Piecewise` falls through to the generic "not Fortran 77" path
//! in `Printer::render`.

use crate::{
    error::Error,
    expr::{Expr, PiecewiseCond},
    printer::Printer,
};

/// Lower `branches` into the raw (unwrapped) statement lines of an
/// `if (...) then` / `else if (...) then` / `else` / `end if` block.
pub fn render(printer: &mut Printer, branches: &[(Expr, PiecewiseCond)]) -> Result<Vec<String>, Error> {
    if branches.is_empty() {
        return Err(Error::InvalidInput(
            "piecewise must have at least one branch".into(),
        ));
    }

    let last_index = branches.len() - 1;
    let mut lines = Vec::with_capacity(branches.len() * 2 + 1);

    for (i, (value, cond)) in branches.iter().enumerate() {
        let header = match cond {
            PiecewiseCond::Otherwise if i == last_index => "else".to_string(),
            PiecewiseCond::Otherwise => {
                return Err(Error::InvalidInput(
                    "`Otherwise` is only valid as the final piecewise branch's condition".into(),
                ));
            }
            PiecewiseCond::Cond(c) => {
                let rendered = printer.render_condition(c)?;
                if i == 0 {
                    format!("if ({rendered}) then")
                } else {
                    format!("else if ({rendered}) then")
                }
            }
        };
        lines.push(header);

        let rendered_value = printer.render(value)?;
        let body = match &printer.options().assign_to {
            Some(name) => format!("  {name} = {rendered_value}"),
            None => format!("  {rendered_value}"),
        };
        lines.push(body);
    }

    lines.push("end if".to_string());
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        expr::{RelOp, Symbol},
        options::FortranOptions,
    };
    use num::BigInt;

    fn int(n: i64) -> Expr {
        Expr::Integer(BigInt::from(n))
    }

    #[test]
    fn two_branch_piecewise_lowers_to_if_else() {
        let x = Expr::Symbol(Symbol::new("x"));
        let branches = vec![
            (
                x.clone(),
                PiecewiseCond::Cond(Box::new(Expr::Relational(
                    Box::new(x.clone()),
                    RelOp::Lt,
                    Box::new(int(1)),
                ))),
            ),
            (
                Expr::Pow(Box::new(x.clone()), Box::new(int(2))),
                PiecewiseCond::Otherwise,
            ),
        ];

        let options = FortranOptions::default();
        let mut printer = Printer::new(&options);
        let lines = render(&mut printer, &branches).unwrap();

        assert_eq!(
            lines,
            vec![
                "if (x < 1) then".to_string(),
                "  x".to_string(),
                "else".to_string(),
                "  x**2".to_string(),
                "end if".to_string(),
            ]
        );
    }

    #[test]
    fn assign_to_wraps_each_branch_body() {
        let x = Expr::Symbol(Symbol::new("x"));
        let branches = vec![(
            x.clone(),
            PiecewiseCond::Cond(Box::new(Expr::Relational(
                Box::new(x.clone()),
                RelOp::Lt,
                Box::new(int(1)),
            ))),
        )];

        let mut options = FortranOptions::default();
        options.assign_to = Some("s".to_string());
        let mut printer = Printer::new(&options);
        let lines = render(&mut printer, &branches).unwrap();

        assert_eq!(lines[1], "  s = x");
    }

    #[test]
    fn otherwise_before_last_branch_is_rejected() {
        let x = Expr::Symbol(Symbol::new("x"));
        let branches = vec![
            (x.clone(), PiecewiseCond::Otherwise),
            (x, PiecewiseCond::Otherwise),
        ];
        let options = FortranOptions::default();
        let mut printer = Printer::new(&options);
        assert!(render(&mut printer, &branches).is_err());
    }
}
