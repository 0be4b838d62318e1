//! The fixed-form line wrapper: re-segments each logical
//! line the printer produces into the Fortran-77 statement column (6
//! leading spaces, 66 characters) and continuation lines (the 10-character
//! prefix `"     @    "`, 62 characters). Operates on characters, never on
//! token boundaries — splitting an identifier or an `=` sign mid-line is
//! intentional.

/// Width of the first physical line's content, after the 6-space prefix.
const FIRST_LINE_WIDTH: usize = 66;

/// Width of each continuation line's content, after the 10-character prefix.
const CONTINUATION_WIDTH: usize = 62;

/// The 6-space statement-column prefix.
const STATEMENT_PREFIX: &str = "      ";

/// The continuation-line prefix: five spaces, `@`, four spaces.
const CONTINUATION_PREFIX: &str = "     @    ";

/// Wrap one logical line into one or more physical fixed-form lines.
#[must_use]
pub fn wrap_line(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut out = Vec::new();

    let first_len = chars.len().min(FIRST_LINE_WIDTH);
    let first: String = chars[..first_len].iter().collect();
    out.push(format!("{STATEMENT_PREFIX}{first}"));

    let mut idx = first_len;
    while idx < chars.len() {
        let end = (idx + CONTINUATION_WIDTH).min(chars.len());
        let hunk: String = chars[idx..end].iter().collect();
        out.push(format!("{CONTINUATION_PREFIX}{hunk}"));
        idx = end;
    }

    out
}

/// Wrap every logical line in `lines`, in order, flattening the result into
/// a single sequence of physical lines.
#[must_use]
pub fn wrap_lines(lines: &[String]) -> Vec<String> {
    lines.iter().flat_map(|line| wrap_line(line)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_line_gets_only_the_statement_prefix() {
        assert_eq!(wrap_line("x"), vec!["      x".to_string()]);
    }

    #[test]
    fn long_line_continues_with_the_at_prefix() {
        let body = "a".repeat(66) + &"b".repeat(62) + "c";
        let wrapped = wrap_line(&body);
        assert_eq!(wrapped.len(), 3);
        assert_eq!(wrapped[0], format!("      {}", "a".repeat(66)));
        assert_eq!(wrapped[1], format!("     @    {}", "b".repeat(62)));
        assert_eq!(wrapped[2], "     @    c");
    }

    #[test]
    fn no_physical_line_exceeds_72_columns() {
        let body = "x".repeat(500);
        for line in wrap_line(&body) {
            assert!(line.chars().count() <= 72);
        }
    }

    #[test]
    fn every_physical_line_begins_with_the_right_prefix() {
        let body = "x".repeat(200);
        for (i, line) in wrap_line(&body).into_iter().enumerate() {
            if i == 0 {
                assert!(line.starts_with(STATEMENT_PREFIX));
            } else {
                assert!(line.starts_with(CONTINUATION_PREFIX));
            }
        }
    }

    proptest::proptest! {
        // For any logical line, wrapping never
        // produces a physical line longer than 72 columns, and every
        // physical line begins with either the statement or continuation
        // prefix.
        #[test]
        fn arbitrary_lines_stay_within_column_discipline(body in "[a-zA-Z0-9 +*/().,=-]{0,400}") {
            let wrapped = wrap_line(&body);
            for (i, line) in wrapped.iter().enumerate() {
                prop_assert!(line.chars().count() <= 72);
                if i == 0 {
                    prop_assert!(line.starts_with(STATEMENT_PREFIX));
                } else {
                    prop_assert!(line.starts_with(CONTINUATION_PREFIX));
                }
            }
        }
    }
}
