// ============================================================================
// Floating-Point Equality
// Bit-exact, absolute, relative and ULP comparison for f32 and f64
// ============================================================================
//
// All error arithmetic runs in f64. Single-precision operands are widened
// first, so their differences cannot overflow. NaN or infinite operands
// produce a NaN or infinite delta which no finite bound accepts.

use super::traits::{Equality, UlpEquality};
use super::validation::{
    AbsoluteError, AsymmetricRelativeError, SymmetricRelativeError, UlpError,
};

/// `|a-b| <= absolute_error || |a-b| <= |reference| * relative_error`.
///
/// `reference` picks the magnitude from the operands. When finite operands
/// overflow the subtraction the test is repeated on halved operands, which
/// is exact at that magnitude.
#[inline]
fn test_close(
    a: f64,
    b: f64,
    relative_error: f64,
    absolute_error: f64,
    reference: fn(f64, f64) -> f64,
) -> bool {
    let delta = (a - b).abs();
    if delta.is_finite() {
        return delta <= absolute_error || delta <= reference(a, b) * relative_error;
    }
    if a.is_finite() && b.is_finite() {
        return test_close(a * 0.5, b * 0.5, relative_error, absolute_error * 0.5, reference);
    }
    false
}

#[inline(always)]
fn max_magnitude(a: f64, b: f64) -> f64 {
    a.abs().max(b.abs())
}

#[inline(always)]
fn expected_magnitude(expected: f64, _actual: f64) -> f64 {
    expected.abs()
}

macro_rules! float_equality_impl {
    ($t:ty, $bits:ty, $ubits:ty, $ulp:ty) => {
        impl Equality for $t {
            type Bound = $t;

            const MAX_DIFFERENCE: Option<$t> = None;

            #[inline]
            fn are_equal(self, other: Self) -> bool {
                // Every NaN is the same value
                if self.is_nan() {
                    return other.is_nan();
                }
                self.to_bits() == other.to_bits()
            }

            #[inline]
            fn within(self, other: Self, absolute_error: AbsoluteError<Self>) -> bool {
                (f64::from(self) - f64::from(other)).abs() <= f64::from(absolute_error.get())
            }

            #[inline]
            fn close(
                self,
                other: Self,
                relative_error: SymmetricRelativeError,
                absolute_error: AbsoluteError<Self>,
            ) -> bool {
                test_close(
                    f64::from(self),
                    f64::from(other),
                    relative_error.get(),
                    f64::from(absolute_error.get()),
                    max_magnitude,
                )
            }

            #[inline]
            fn close_to(
                self,
                actual: Self,
                relative_error: AsymmetricRelativeError,
                absolute_error: AbsoluteError<Self>,
            ) -> bool {
                test_close(
                    f64::from(self),
                    f64::from(actual),
                    relative_error.get(),
                    f64::from(absolute_error.get()),
                    expected_magnitude,
                )
            }
        }

        impl UlpEquality for $t {
            type Ulp = $ulp;

            #[inline]
            fn within_ulp(self, other: Self, ulp_error: UlpError<Self>) -> bool {
                let a = self.to_bits() as $bits;
                let b = other.to_bits() as $bits;
                let ulp_error = ulp_error.get() as $ubits;

                if (a ^ b) < 0 {
                    // Opposite signs: sum of both distances to zero. Each
                    // magnitude is below 2^(N-1) so the unsigned sum cannot
                    // overflow. A NaN magnitude exceeds any realistic bound.
                    let distance = (a & <$bits>::MAX) as $ubits + (b & <$bits>::MAX) as $ubits;
                    distance <= ulp_error
                } else {
                    // Same sign: NaN bit patterns can sit close together
                    (a - b).unsigned_abs() <= ulp_error && !(self + other).is_nan()
                }
            }
        }
    };
}

float_equality_impl!(f32, i32, u32, i16);
float_equality_impl!(f64, i64, u64, i64);
