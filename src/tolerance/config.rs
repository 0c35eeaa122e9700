// ============================================================================
// Tolerance Configuration
// Plain, serializable description of a comparison rule
// ============================================================================

use super::predicate::{Tolerance, UlpTolerance};
use crate::comparison::{
    validate_absolute_error, validate_asymmetric_relative_error,
    validate_symmetric_relative_error, validate_ulp_error, ComparisonResult, Equality,
    ErrorBound, UlpEquality,
};
use crate::description::{
    Description, ABSOLUTE_PREFIX, ASYMMETRIC_RELATIVE_PREFIX, SYMMETRIC_RELATIVE_PREFIX,
    ULP_PREFIX,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Relative Mode
// ============================================================================

/// Which magnitude a relative error is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RelativeMode {
    /// Against `max(|v1|,|v2|)`: neither value is privileged.
    /// Use case: convergence checks between successive iterations
    #[default]
    Symmetric,

    /// Against `|expected|` only.
    /// Use case: an actual result checked against a known reference value
    Asymmetric,
}

impl RelativeMode {
    /// Left-hand side of the relative clause in descriptions.
    #[inline]
    pub const fn prefix(self) -> &'static str {
        match self {
            RelativeMode::Symmetric => SYMMETRIC_RELATIVE_PREFIX,
            RelativeMode::Asymmetric => ASYMMETRIC_RELATIVE_PREFIX,
        }
    }
}

// ============================================================================
// Relative/Absolute Configuration
// ============================================================================

/// Configuration of a relative-or-absolute comparison.
///
/// The bound type `B` is the absolute error type of the operand width
/// (see [`Equality::Bound`]). Nothing is validated until [`validate`] or
/// [`build`] is called with the operand type.
///
/// [`validate`]: ToleranceConfig::validate
/// [`build`]: ToleranceConfig::build
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ToleranceConfig<B> {
    /// Relative error, 0 disables the relative clause
    pub relative_error: f64,

    /// Absolute error, 0 requires exact equality unless the relative clause passes
    pub absolute_error: B,

    /// Magnitude the relative error is measured against
    #[cfg_attr(feature = "serde", serde(default))]
    pub mode: RelativeMode,
}

impl<B: ErrorBound> ToleranceConfig<B> {
    /// Create a new configuration
    pub fn new(relative_error: f64, absolute_error: B, mode: RelativeMode) -> Self {
        Self {
            relative_error,
            absolute_error,
            mode,
        }
    }

    /// Exact comparison
    pub fn exact() -> Self {
        Self::new(0.0, B::ZERO, RelativeMode::Symmetric)
    }

    /// Absolute error only
    pub fn absolute(absolute_error: B) -> Self {
        Self::new(0.0, absolute_error, RelativeMode::Symmetric)
    }

    /// Symmetric relative error or absolute error (`are_close`)
    pub fn symmetric(relative_error: f64, absolute_error: B) -> Self {
        Self::new(relative_error, absolute_error, RelativeMode::Symmetric)
    }

    /// Asymmetric relative error or absolute error (`is_close_to`)
    pub fn asymmetric(relative_error: f64, absolute_error: B) -> Self {
        Self::new(relative_error, absolute_error, RelativeMode::Asymmetric)
    }

    /// Builder method: Set the relative error
    pub fn with_relative_error(mut self, relative_error: f64) -> Self {
        self.relative_error = relative_error;
        self
    }

    /// Builder method: Set the absolute error
    pub fn with_absolute_error(mut self, absolute_error: B) -> Self {
        self.absolute_error = absolute_error;
        self
    }

    /// Builder method: Set the relative mode
    pub fn with_mode(mut self, mode: RelativeMode) -> Self {
        self.mode = mode;
        self
    }

    /// Validate the configuration for operands of type `T`.
    ///
    /// # Errors
    /// Returns an invalid-argument error if either bound is invalid.
    pub fn validate<T>(&self) -> ComparisonResult<()>
    where
        T: Equality<Bound = B>,
    {
        match self.mode {
            RelativeMode::Symmetric => validate_symmetric_relative_error(self.relative_error)?,
            RelativeMode::Asymmetric => validate_asymmetric_relative_error(self.relative_error)?,
        }
        validate_absolute_error::<T>(self.absolute_error)
    }

    /// Validate and build a reusable predicate for operands of type `T`.
    ///
    /// # Errors
    /// Returns an invalid-argument error if either bound is invalid.
    pub fn build<T>(&self) -> ComparisonResult<Tolerance<T>>
    where
        T: Equality<Bound = B>,
    {
        Tolerance::new(self)
    }

    /// The rule this configuration describes.
    pub fn description(&self) -> Description<'static, B> {
        Description::new(
            self.mode.prefix(),
            self.relative_error,
            ABSOLUTE_PREFIX,
            self.absolute_error,
        )
    }
}

impl<B: ErrorBound> Default for ToleranceConfig<B> {
    fn default() -> Self {
        Self::exact()
    }
}

// ============================================================================
// ULP Configuration
// ============================================================================

/// Configuration of a ULP comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UlpConfig<U> {
    /// Maximum number of representable steps between the values
    pub ulp_error: U,
}

impl<U: ErrorBound> UlpConfig<U> {
    /// Create a new configuration
    pub fn new(ulp_error: U) -> Self {
        Self { ulp_error }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is negative.
    pub fn validate(&self) -> ComparisonResult<()> {
        validate_ulp_error(self.ulp_error)
    }

    /// Validate and build a reusable predicate for operands of type `F`.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is negative.
    pub fn build<F>(&self) -> ComparisonResult<UlpTolerance<F>>
    where
        F: UlpEquality<Ulp = U>,
    {
        UlpTolerance::new(self)
    }

    /// The rule this configuration describes.
    pub fn description(&self) -> Description<'static, U> {
        Description::new(ULP_PREFIX, 0.0, ULP_PREFIX, self.ulp_error)
    }
}
