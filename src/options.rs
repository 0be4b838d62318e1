//! The driver's options record.

use std::collections::HashMap;

use crate::expr::FunctionId;

/// Options controlling one [`crate::driver::fcode`] invocation.
#[derive(Debug, Clone)]
pub struct FortranOptions {
    /// Digits used to evaluate [`crate::expr::NumberSymbol`]s. Default 15.
    pub precision: usize,

    /// When set, wraps the rendered top-level expression (or each
    /// piecewise branch body) as `<name> = ...`.
    pub assign_to: Option<String>,

    /// Maps a function identity to its Fortran spelling, taking precedence
    /// over the fixed implicit-intrinsic table.
    pub user_functions: HashMap<FunctionId, String>,

    /// If true, any "not Fortran 77" incident aborts emission with
    /// [`crate::error::Error::Unsupported`] instead of being recorded.
    pub strict: bool,

    /// If true, `fcode` returns a single human-readable string (with
    /// `parameter` declarations and commentary prepended). If false, it
    /// returns the structured `FcodeOutput::Structured` form instead.
    pub human: bool,
}

impl Default for FortranOptions {
    fn default() -> Self {
        Self {
            precision: 15,
            assign_to: None,
            user_functions: HashMap::new(),
            strict: false,
            human: true,
        }
    }
}

impl FortranOptions {
    /// Start from the defaults and assign a target variable name.
    #[must_use]
    pub fn with_assign_to(mut self, name: impl Into<String>) -> Self {
        self.assign_to = Some(name.into());
        self
    }

    /// Start from the defaults with strict mode enabled.
    #[must_use]
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Start from the defaults, returning the structured form instead of
    /// the human-readable string.
    #[must_use]
    pub fn structured(mut self) -> Self {
        self.human = false;
        self
    }

    /// Start from the defaults with a different `NumberSymbol` precision.
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }
}
