// ============================================================================
// Descriptions
// Human-readable rendering of a comparison rule from its bounds
// ============================================================================
//
// Used for failure messages: a predicate fails, the caller renders the rule
// it was checking. Bounds are assumed already validated.
//
// Collapsing rules:
// - relative error 0 is absent, only the absolute clause renders
// - absolute error 0 with a relative error > 0 is absent
// - both clauses join with " || " (the test is abs OR rel)

use crate::comparison::{BoundDisplay, ErrorBound};
use std::fmt;

/// Left-hand side of the absolute error clause.
pub const ABSOLUTE_PREFIX: &str = "|v1-v2|";

/// Left-hand side of the symmetric relative error clause.
pub const SYMMETRIC_RELATIVE_PREFIX: &str = "|v1-v2|/max(|v1|,|v2|)";

/// Left-hand side of the asymmetric relative error clause.
pub const ASYMMETRIC_RELATIVE_PREFIX: &str = "|v1-v2|/|v1|";

/// Left-hand side of the ULP clause.
pub const ULP_PREFIX: &str = "ulp";

/// A comparison rule, rendered on `Display`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Description<'a, B> {
    relative_prefix: &'a str,
    relative_error: f64,
    absolute_prefix: &'a str,
    absolute_error: B,
}

impl<'a, B: ErrorBound> Description<'a, B> {
    /// Describe `absolute_prefix <= absolute_error || relative_prefix <= relative_error`.
    #[inline]
    pub fn new(
        relative_prefix: &'a str,
        relative_error: f64,
        absolute_prefix: &'a str,
        absolute_error: B,
    ) -> Self {
        Self {
            relative_prefix,
            relative_error,
            absolute_prefix,
            absolute_error,
        }
    }

    #[inline]
    fn has_relative(&self) -> bool {
        self.relative_error > 0.0
    }

    #[inline]
    fn has_absolute(&self) -> bool {
        !(self.absolute_error.is_zero() && self.has_relative())
    }
}

impl<B: ErrorBound> fmt::Display for Description<'_, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relative = self.has_relative();
        let absolute = self.has_absolute();

        if relative {
            write!(
                f,
                "{} <= {}",
                self.relative_prefix,
                BoundDisplay(self.relative_error)
            )?;
            if absolute {
                f.write_str(" || ")?;
            }
        }
        if absolute {
            if self.absolute_error.is_zero() {
                write!(f, "{} == 0", self.absolute_prefix)?;
            } else {
                write!(
                    f,
                    "{} <= {}",
                    self.absolute_prefix,
                    BoundDisplay(self.absolute_error)
                )?;
            }
        }
        Ok(())
    }
}

/// Describe a relative-or-absolute rule with a custom relative clause.
pub fn describe<B: ErrorBound>(relative_prefix: &str, relative_error: f64, absolute_error: B) -> String {
    Description::new(relative_prefix, relative_error, ABSOLUTE_PREFIX, absolute_error).to_string()
}

/// Describe `|v1-v2| <= absolute_error`.
pub fn description_within<B: ErrorBound>(absolute_error: B) -> String {
    describe(SYMMETRIC_RELATIVE_PREFIX, 0.0, absolute_error)
}

/// Describe the symmetric relative-or-absolute rule of `are_close`.
pub fn description_close<B: ErrorBound>(relative_error: f64, absolute_error: B) -> String {
    describe(SYMMETRIC_RELATIVE_PREFIX, relative_error, absolute_error)
}

/// Describe the asymmetric relative-or-absolute rule of `is_close_to`.
pub fn description_is_close_to<B: ErrorBound>(relative_error: f64, absolute_error: B) -> String {
    describe(ASYMMETRIC_RELATIVE_PREFIX, relative_error, absolute_error)
}

/// Describe `ulp <= ulp_error`.
pub fn description_within_ulp<U: ErrorBound>(ulp_error: U) -> String {
    Description::new(ULP_PREFIX, 0.0, ULP_PREFIX, ulp_error).to_string()
}
