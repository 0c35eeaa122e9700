// ============================================================================
// Error Bound Types
// Common interface over the primitive types used as tolerances
// ============================================================================

use std::fmt::{self, Debug};

/// A primitive type that can express an error bound.
///
/// Implemented for the integer types used as absolute/ULP bounds
/// (`i16`, `i32`, `i64`, `i128`) and for the floating types (`f32`, `f64`).
/// Floating bounds render in their shortest round-trip form with a
/// trailing `.0` for whole numbers (`5.0`, `0.1`), integers render plainly.
pub trait ErrorBound: Copy + PartialOrd + Debug + Send + Sync + 'static {
    /// The zero bound (exact comparison).
    const ZERO: Self;

    /// Check if the bound is NaN. Always `false` for integers.
    fn is_nan(self) -> bool;

    /// Check if the bound is positive infinity. Always `false` for integers.
    fn is_positive_infinity(self) -> bool;

    /// Check if the bound is exactly zero.
    #[inline]
    fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Check if the bound is below zero.
    #[inline]
    fn is_negative(self) -> bool {
        self < Self::ZERO
    }

    /// Write the canonical text form of the bound.
    fn fmt_bound(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

macro_rules! integer_bound_impl {
    ($t:ty) => {
        impl ErrorBound for $t {
            const ZERO: Self = 0;

            #[inline(always)]
            fn is_nan(self) -> bool {
                false
            }

            #[inline(always)]
            fn is_positive_infinity(self) -> bool {
                false
            }

            fn fmt_bound(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self)
            }
        }
    };
}

integer_bound_impl!(i16);
integer_bound_impl!(i32);
integer_bound_impl!(i64);
integer_bound_impl!(i128);

macro_rules! float_bound_impl {
    ($t:ty) => {
        impl ErrorBound for $t {
            const ZERO: Self = 0.0;

            #[inline(always)]
            fn is_nan(self) -> bool {
                <$t>::is_nan(self)
            }

            #[inline(always)]
            fn is_positive_infinity(self) -> bool {
                self == <$t>::INFINITY
            }

            // Debug keeps the fractional part of whole numbers (5.0, not 5)
            fn fmt_bound(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:?}", self)
            }
        }
    };
}

float_bound_impl!(f32);
float_bound_impl!(f64);

/// Display adapter rendering a bound in its canonical text form.
pub(crate) struct BoundDisplay<B>(pub(crate) B);

impl<B: ErrorBound> fmt::Display for BoundDisplay<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_bound(f)
    }
}
