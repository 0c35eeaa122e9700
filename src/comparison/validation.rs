// ============================================================================
// Bound Validation
// Validators for error bounds and the validated wrapper types
// ============================================================================
//
// Every comparison first validates its bounds. The wrapper types below can
// only be built through a validator, so the infallible comparison methods on
// `Equality`/`UlpEquality` never see an unusable bound.

use super::bound::ErrorBound;
use super::errors::{BoundKind, ComparisonError, ComparisonResult};
use super::traits::{Equality, UlpEquality};
use std::fmt;

/// Exclusive upper limit for a symmetric relative error.
///
/// `|a-b| / max(|a|,|b|)` never exceeds 2, so a bound of 2 or more accepts
/// every pair of values.
pub const MAX_SYMMETRIC_RELATIVE_ERROR: f64 = 2.0;

#[inline]
fn reject<B: ErrorBound>(error: ComparisonError, bound: B) -> ComparisonError {
    tracing::debug!(?bound, kind = %error.kind(), "rejected error bound: {}", error);
    error
}

// ============================================================================
// Validators
// ============================================================================

/// Validate an absolute error against the maximum representable difference
/// of the operand width.
///
/// Fails if the bound is negative, NaN, positive infinity, or at/above
/// `max_difference` (when the width has one). A bound at the maximum
/// difference would make every pair of values equal.
pub fn validate_absolute_error_against<B: ErrorBound>(
    absolute_error: B,
    max_difference: Option<B>,
) -> ComparisonResult<()> {
    const KIND: BoundKind = BoundKind::Absolute;
    if absolute_error.is_nan() {
        return Err(reject(ComparisonError::NotANumber(KIND), absolute_error));
    }
    if absolute_error.is_negative() {
        return Err(reject(ComparisonError::Negative(KIND), absolute_error));
    }
    if absolute_error.is_positive_infinity() {
        return Err(reject(ComparisonError::Infinite(KIND), absolute_error));
    }
    if let Some(max) = max_difference {
        if absolute_error >= max {
            return Err(reject(ComparisonError::TooLarge(KIND), absolute_error));
        }
    }
    Ok(())
}

/// Validate an absolute error for operands of type `T`.
#[inline]
pub fn validate_absolute_error<T: Equality>(absolute_error: T::Bound) -> ComparisonResult<()> {
    validate_absolute_error_against(absolute_error, T::MAX_DIFFERENCE)
}

/// Validate a symmetric relative error: must be in `[0, 2)`.
pub fn validate_symmetric_relative_error(relative_error: f64) -> ComparisonResult<()> {
    const KIND: BoundKind = BoundKind::SymmetricRelative;
    if relative_error.is_nan() {
        return Err(reject(ComparisonError::NotANumber(KIND), relative_error));
    }
    if relative_error < 0.0 {
        return Err(reject(ComparisonError::Negative(KIND), relative_error));
    }
    if relative_error >= MAX_SYMMETRIC_RELATIVE_ERROR {
        return Err(reject(ComparisonError::TooLarge(KIND), relative_error));
    }
    Ok(())
}

/// Validate an asymmetric relative error: must be finite and not negative.
///
/// There is no upper limit, `|expected-actual| / |expected|` is unbounded.
pub fn validate_asymmetric_relative_error(relative_error: f64) -> ComparisonResult<()> {
    const KIND: BoundKind = BoundKind::AsymmetricRelative;
    if relative_error.is_nan() {
        return Err(reject(ComparisonError::NotANumber(KIND), relative_error));
    }
    if relative_error < 0.0 {
        return Err(reject(ComparisonError::Negative(KIND), relative_error));
    }
    if relative_error == f64::INFINITY {
        return Err(reject(ComparisonError::Infinite(KIND), relative_error));
    }
    Ok(())
}

/// Validate a ULP error: must not be negative.
pub fn validate_ulp_error<U: ErrorBound>(ulp_error: U) -> ComparisonResult<()> {
    if ulp_error.is_negative() {
        return Err(reject(ComparisonError::Negative(BoundKind::Ulp), ulp_error));
    }
    Ok(())
}

// ============================================================================
// Validated Wrappers
// ============================================================================

/// An absolute error already validated for operands of type `T`.
pub struct AbsoluteError<T: Equality> {
    bound: T::Bound,
}

impl<T: Equality> AbsoluteError<T> {
    /// Validate and wrap an absolute error.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is unusable for `T`.
    #[inline]
    pub fn new(bound: T::Bound) -> ComparisonResult<Self> {
        validate_absolute_error::<T>(bound)?;
        Ok(Self { bound })
    }

    /// Exact comparison (zero tolerance), valid for every width.
    #[inline]
    pub fn zero() -> Self {
        Self {
            bound: T::Bound::ZERO,
        }
    }

    /// The validated bound.
    #[inline]
    pub fn get(self) -> T::Bound {
        self.bound
    }
}

impl<T: Equality> Clone for AbsoluteError<T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Equality> Copy for AbsoluteError<T> {}

impl<T: Equality> PartialEq for AbsoluteError<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound
    }
}

impl<T: Equality> fmt::Debug for AbsoluteError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AbsoluteError").field(&self.bound).finish()
    }
}

/// A symmetric relative error, validated to lie in `[0, 2)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct SymmetricRelativeError(f64);

impl SymmetricRelativeError {
    /// No relative tolerance.
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap a symmetric relative error.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is negative, NaN or `>= 2`.
    #[inline]
    pub fn new(relative_error: f64) -> ComparisonResult<Self> {
        validate_symmetric_relative_error(relative_error)?;
        Ok(Self(relative_error))
    }

    /// The validated bound.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// An asymmetric relative error, validated to be finite and not negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct AsymmetricRelativeError(f64);

impl AsymmetricRelativeError {
    /// No relative tolerance.
    pub const ZERO: Self = Self(0.0);

    /// Validate and wrap an asymmetric relative error.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is negative, NaN or infinite.
    #[inline]
    pub fn new(relative_error: f64) -> ComparisonResult<Self> {
        validate_asymmetric_relative_error(relative_error)?;
        Ok(Self(relative_error))
    }

    /// The validated bound.
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// A ULP error already validated for floating operands of type `F`.
pub struct UlpError<F: UlpEquality> {
    bound: F::Ulp,
}

impl<F: UlpEquality> UlpError<F> {
    /// Validate and wrap a ULP error.
    ///
    /// # Errors
    /// Returns an invalid-argument error if the bound is negative.
    #[inline]
    pub fn new(bound: F::Ulp) -> ComparisonResult<Self> {
        validate_ulp_error(bound)?;
        Ok(Self { bound })
    }

    /// The validated bound.
    #[inline]
    pub fn get(self) -> F::Ulp {
        self.bound
    }
}

impl<F: UlpEquality> Clone for UlpError<F> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<F: UlpEquality> Copy for UlpError<F> {}

impl<F: UlpEquality> PartialEq for UlpError<F> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bound == other.bound
    }
}

impl<F: UlpEquality> fmt::Debug for UlpError<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UlpError").field(&self.bound).finish()
    }
}
