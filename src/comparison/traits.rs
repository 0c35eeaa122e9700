// ============================================================================
// Equality Traits
// One canonical comparison implementation per primitive width
// ============================================================================

use super::bound::ErrorBound;
use super::validation::{AbsoluteError, AsymmetricRelativeError, SymmetricRelativeError, UlpError};
use std::fmt::Debug;

/// Tolerance-based equality for a primitive numeric width.
///
/// The comparison methods take validated bounds and cannot fail. They are
/// the fast path for callers that validate once and compare many values;
/// the free functions in [`crate::comparison`] validate raw bounds on every
/// call.
///
/// Relative errors are always `f64` and relative tests are evaluated in
/// double precision for every width.
///
/// # Thread Safety
/// Implementations are stateless, every method is a pure function.
pub trait Equality: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// Type of an absolute error bound for this width.
    type Bound: ErrorBound;

    /// Maximum representable difference between two values of this width.
    ///
    /// Absolute bounds at or above it are rejected. `None` for floating
    /// widths, where any finite bound is accepted.
    const MAX_DIFFERENCE: Option<Self::Bound>;

    /// Exact equality.
    ///
    /// Integers use value equality. Floating values compare bit patterns:
    /// `-0.0 != 0.0` and `NaN == NaN`.
    fn are_equal(self, other: Self) -> bool;

    /// `|self-other| <= absolute_error`.
    fn within(self, other: Self, absolute_error: AbsoluteError<Self>) -> bool;

    /// `|self-other| <= absolute_error || |self-other| <= max(|self|,|other|) * relative_error`.
    fn close(
        self,
        other: Self,
        relative_error: SymmetricRelativeError,
        absolute_error: AbsoluteError<Self>,
    ) -> bool;

    /// `|self-actual| <= absolute_error || |self-actual| <= |self| * relative_error`,
    /// where `self` is the expected value.
    fn close_to(
        self,
        actual: Self,
        relative_error: AsymmetricRelativeError,
        absolute_error: AbsoluteError<Self>,
    ) -> bool;
}

/// Units-in-the-last-place equality for floating widths.
pub trait UlpEquality: Equality {
    /// Type of a ULP bound (`i64` for `f64`, `i16` for `f32`).
    type Ulp: ErrorBound;

    /// Check the two values are at most `ulp_error` representable steps apart.
    ///
    /// `-0.0` and `0.0` are the same point. NaN is never within a realistic
    /// bound of anything.
    fn within_ulp(self, other: Self, ulp_error: UlpError<Self>) -> bool;
}
