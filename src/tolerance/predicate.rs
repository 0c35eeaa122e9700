// ============================================================================
// Tolerance Predicates
// Validated, reusable comparison rules
// ============================================================================

use super::config::{RelativeMode, ToleranceConfig, UlpConfig};
use crate::comparison::{
    AbsoluteError, AsymmetricRelativeError, ComparisonResult, Equality, SymmetricRelativeError,
    UlpEquality, UlpError,
};
use crate::description::{Description, ABSOLUTE_PREFIX, ULP_PREFIX};
use std::fmt;

/// Index of the first pair failing `test`, or the shorter length when the
/// slices differ in length and every shared pair passes.
fn first_mismatch_by<T: Copy>(a: &[T], b: &[T], test: impl Fn(T, T) -> bool) -> Option<usize> {
    a.iter()
        .zip(b)
        .position(|(&x, &y)| !test(x, y))
        .or_else(|| (a.len() != b.len()).then(|| a.len().min(b.len())))
}

#[derive(Clone, Copy, PartialEq)]
enum Relative {
    Symmetric(SymmetricRelativeError),
    Asymmetric(AsymmetricRelativeError),
}

impl Relative {
    #[inline]
    fn get(self) -> f64 {
        match self {
            Relative::Symmetric(e) => e.get(),
            Relative::Asymmetric(e) => e.get(),
        }
    }

    #[inline]
    fn mode(self) -> RelativeMode {
        match self {
            Relative::Symmetric(_) => RelativeMode::Symmetric,
            Relative::Asymmetric(_) => RelativeMode::Asymmetric,
        }
    }
}

// ============================================================================
// Relative/Absolute Predicate
// ============================================================================

/// A validated relative-or-absolute comparison rule for operands of type `T`.
///
/// Validation happens once on construction, every test afterwards runs the
/// unchecked comparison. In asymmetric mode the first operand is the
/// expected value.
///
/// # Example
/// ```
/// use numeric_equality::tolerance::ToleranceConfig;
///
/// let tolerance = ToleranceConfig::symmetric(0.01, 0.0).build::<f64>().unwrap();
/// assert!(tolerance.test(100.0, 100.9));
/// assert!(!tolerance.test(100.0, 102.0));
/// assert_eq!(tolerance.to_string(), "|v1-v2|/max(|v1|,|v2|) <= 0.01");
/// ```
pub struct Tolerance<T: Equality> {
    relative: Relative,
    absolute_error: AbsoluteError<T>,
}

impl<T: Equality> Tolerance<T> {
    /// Validate a configuration and build the predicate.
    ///
    /// # Errors
    /// Returns an invalid-argument error if either bound is invalid.
    pub fn new(config: &ToleranceConfig<T::Bound>) -> ComparisonResult<Self> {
        let relative = match config.mode {
            RelativeMode::Symmetric => {
                Relative::Symmetric(SymmetricRelativeError::new(config.relative_error)?)
            },
            RelativeMode::Asymmetric => {
                Relative::Asymmetric(AsymmetricRelativeError::new(config.relative_error)?)
            },
        };
        let tolerance = Self {
            relative,
            absolute_error: AbsoluteError::new(config.absolute_error)?,
        };
        tracing::trace!(rule = %tolerance, "built tolerance");
        Ok(tolerance)
    }

    /// Test a single pair.
    #[inline]
    pub fn test(&self, value1: T, value2: T) -> bool {
        match self.relative {
            Relative::Symmetric(e) => value1.close(value2, e, self.absolute_error),
            Relative::Asymmetric(e) => value1.close_to(value2, e, self.absolute_error),
        }
    }

    /// Index of the first failing pair.
    ///
    /// Slices of different length fail at the shorter length when every
    /// shared pair passes.
    pub fn first_mismatch(&self, values1: &[T], values2: &[T]) -> Option<usize> {
        first_mismatch_by(values1, values2, |a, b| self.test(a, b))
    }

    /// Test every pair. `false` if the slices differ in length.
    #[inline]
    pub fn test_all(&self, values1: &[T], values2: &[T]) -> bool {
        self.first_mismatch(values1, values2).is_none()
    }

    /// The configuration this predicate was built from.
    pub fn config(&self) -> ToleranceConfig<T::Bound> {
        ToleranceConfig::new(
            self.relative.get(),
            self.absolute_error.get(),
            self.relative.mode(),
        )
    }

    /// The rule this predicate tests.
    pub fn description(&self) -> Description<'static, T::Bound> {
        Description::new(
            self.relative.mode().prefix(),
            self.relative.get(),
            ABSOLUTE_PREFIX,
            self.absolute_error.get(),
        )
    }
}

impl<T: Equality> Clone for Tolerance<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Equality> Copy for Tolerance<T> {}

impl<T: Equality> fmt::Debug for Tolerance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tolerance")
            .field("relative_error", &self.relative.get())
            .field("absolute_error", &self.absolute_error.get())
            .field("mode", &self.relative.mode())
            .finish()
    }
}

impl<T: Equality> fmt::Display for Tolerance<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.description(), f)
    }
}

// ============================================================================
// ULP Predicate
// ============================================================================

/// A validated ULP comparison rule for floating operands of type `F`.
pub struct UlpTolerance<F: UlpEquality> {
    ulp_error: UlpError<F>,
}

impl<F: UlpEquality> UlpTolerance<F> {
    /// Validate a configuration and build the predicate.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is negative.
    pub fn new(config: &UlpConfig<F::Ulp>) -> ComparisonResult<Self> {
        let tolerance = Self {
            ulp_error: UlpError::new(config.ulp_error)?,
        };
        tracing::trace!(rule = %tolerance, "built ULP tolerance");
        Ok(tolerance)
    }

    /// Test a single pair.
    #[inline]
    pub fn test(&self, value1: F, value2: F) -> bool {
        value1.within_ulp(value2, self.ulp_error)
    }

    /// Index of the first failing pair, see [`Tolerance::first_mismatch`].
    pub fn first_mismatch(&self, values1: &[F], values2: &[F]) -> Option<usize> {
        first_mismatch_by(values1, values2, |a, b| self.test(a, b))
    }

    /// Test every pair. `false` if the slices differ in length.
    #[inline]
    pub fn test_all(&self, values1: &[F], values2: &[F]) -> bool {
        self.first_mismatch(values1, values2).is_none()
    }

    /// The configuration this predicate was built from.
    pub fn config(&self) -> UlpConfig<F::Ulp> {
        UlpConfig::new(self.ulp_error.get())
    }

    /// The rule this predicate tests.
    pub fn description(&self) -> Description<'static, F::Ulp> {
        Description::new(ULP_PREFIX, 0.0, ULP_PREFIX, self.ulp_error.get())
    }
}

impl<F: UlpEquality> Clone for UlpTolerance<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: UlpEquality> Copy for UlpTolerance<F> {}

impl<F: UlpEquality> fmt::Debug for UlpTolerance<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UlpTolerance")
            .field("ulp_error", &self.ulp_error.get())
            .finish()
    }
}

impl<F: UlpEquality> fmt::Display for UlpTolerance<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.description(), f)
    }
}
