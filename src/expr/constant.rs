use std::fmt;

/// A named mathematical constant whose numeric value is obtained on demand
/// via [`NumberSymbol::evalf`] rather than being carried around as a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumberSymbol {
    /// The ratio of a circle's circumference to its diameter.
    Pi,

    /// The limit of (1+1/n)^n as n approaches infinity.
    E,

    /// Catalan's constant.
    Catalan,

    /// Euler-Mascheroni constant γ.
    EulerGamma,

    /// The golden ratio, (1+√5)/2.
    GoldenRatio,
}

impl NumberSymbol {
    /// The symbol's canonical (Fortran-identifier-safe) name.
    #[must_use]
    pub const fn canonical_name(self) -> &'static str {
        match self {
            Self::Pi => "pi",
            Self::E => "E",
            Self::Catalan => "Catalan",
            Self::EulerGamma => "EulerGamma",
            Self::GoldenRatio => "GoldenRatio",
        }
    }

    /// The constant's value as an `f64`, to full `f64` precision.
    fn value(self) -> f64 {
        match self {
            Self::Pi => std::f64::consts::PI,
            Self::E => std::f64::consts::E,
            // Catalan's constant and the Euler-Mascheroni constant aren't in
            // `std::f64::consts`.
            Self::Catalan => 0.915_965_594_177_219_015,
            Self::EulerGamma => 0.577_215_664_901_532_860,
            Self::GoldenRatio => 1.618_033_988_749_894_848,
        }
    }

    /// Evaluate this constant to `precision` significant decimal digits,
    /// matching the textual form a Fortran `parameter` statement would carry.
    #[must_use]
    pub fn evalf(self, precision: usize) -> String {
        format_sig_figs(self.value(), precision)
    }
}

impl fmt::Display for NumberSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_name())
    }
}

// Ordered by canonical name, not declaration order, so that driver output
// lists `parameter` declarations in canonical-name order.
impl PartialOrd for NumberSymbol {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for NumberSymbol {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.canonical_name().cmp(other.canonical_name())
    }
}

/// Format `value` with `precision` significant decimal digits, fixed-point.
fn format_sig_figs(value: f64, precision: usize) -> String {
    let exponent = value.abs().log10().floor() as i32;
    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    format!("{value:.decimals$}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_reference_values_at_default_precision() {
        assert_eq!(NumberSymbol::Catalan.evalf(15), "0.915965594177219");
        assert_eq!(NumberSymbol::EulerGamma.evalf(15), "0.577215664901533");
        assert_eq!(NumberSymbol::E.evalf(15), "2.71828182845905");
        assert_eq!(NumberSymbol::GoldenRatio.evalf(15), "1.61803398874989");
        assert_eq!(NumberSymbol::Pi.evalf(15), "3.14159265358979");
    }

    #[test]
    fn honours_requested_precision() {
        assert_eq!(NumberSymbol::Pi.evalf(5), "3.1416");
    }
}
