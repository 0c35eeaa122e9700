// ============================================================================
// Integer Equality
// Exact, absolute and relative comparison for i8, i16, i32 and i64
// ============================================================================
//
// Narrow widths (8/16/32-bit) are widened to i64 before subtracting, so the
// difference never overflows. The 64-bit width takes an i128 bound: bounds
// that fit in i64 use overflow-checked native subtraction, larger bounds fall
// back to the full-span difference.

use super::traits::Equality;
use super::validation::{AbsoluteError, AsymmetricRelativeError, SymmetricRelativeError};

/// `-|value|`, representable for every value including `i64::MIN`.
#[inline(always)]
const fn neg_abs(value: i64) -> i64 {
    if value > 0 {
        -value
    } else {
        value
    }
}

/// Test `delta <= magnitude * relative_error` given `-magnitude`.
///
/// Both sides are negated so `|i64::MIN|` is never formed.
#[inline(always)]
fn within_relative(delta: f64, neg_magnitude: i64, relative_error: f64) -> bool {
    -delta >= neg_magnitude as f64 * relative_error
}

macro_rules! narrow_integer_equality_impl {
    ($t:ty, $bound:ty, $max_difference:expr) => {
        impl Equality for $t {
            type Bound = $bound;

            const MAX_DIFFERENCE: Option<$bound> = Some($max_difference);

            #[inline]
            fn are_equal(self, other: Self) -> bool {
                self == other
            }

            #[inline]
            fn within(self, other: Self, absolute_error: AbsoluteError<Self>) -> bool {
                (self as i64 - other as i64).abs() <= absolute_error.get() as i64
            }

            #[inline]
            fn close(
                self,
                other: Self,
                relative_error: SymmetricRelativeError,
                absolute_error: AbsoluteError<Self>,
            ) -> bool {
                let delta = (self as i64 - other as i64).abs();
                delta <= absolute_error.get() as i64
                    || within_relative(
                        delta as f64,
                        neg_abs(self as i64).min(neg_abs(other as i64)),
                        relative_error.get(),
                    )
            }

            #[inline]
            fn close_to(
                self,
                actual: Self,
                relative_error: AsymmetricRelativeError,
                absolute_error: AbsoluteError<Self>,
            ) -> bool {
                let delta = (self as i64 - actual as i64).abs();
                delta <= absolute_error.get() as i64
                    || within_relative(delta as f64, neg_abs(self as i64), relative_error.get())
            }
        }
    };
}

narrow_integer_equality_impl!(i8, i32, 0xFF);
narrow_integer_equality_impl!(i16, i32, 0xFFFF);
narrow_integer_equality_impl!(i32, i64, 0xFFFF_FFFF);

impl Equality for i64 {
    type Bound = i128;

    const MAX_DIFFERENCE: Option<i128> = Some(u64::MAX as i128);

    #[inline]
    fn are_equal(self, other: Self) -> bool {
        self == other
    }

    #[inline]
    fn within(self, other: Self, absolute_error: AbsoluteError<Self>) -> bool {
        let bound = absolute_error.get();
        match i64::try_from(bound) {
            Ok(bound) => {
                // Overflow means the difference exceeds i64::MAX, and so the bound
                let delta = if self > other {
                    self.checked_sub(other)
                } else {
                    other.checked_sub(self)
                };
                delta.is_some_and(|delta| delta <= bound)
            },
            Err(_) => i128::from(self.abs_diff(other)) <= bound,
        }
    }

    #[inline]
    fn close(
        self,
        other: Self,
        relative_error: SymmetricRelativeError,
        absolute_error: AbsoluteError<Self>,
    ) -> bool {
        let delta = self.abs_diff(other);
        i128::from(delta) <= absolute_error.get()
            || within_relative(
                delta as f64,
                neg_abs(self).min(neg_abs(other)),
                relative_error.get(),
            )
    }

    #[inline]
    fn close_to(
        self,
        actual: Self,
        relative_error: AsymmetricRelativeError,
        absolute_error: AbsoluteError<Self>,
    ) -> bool {
        let delta = self.abs_diff(actual);
        i128::from(delta) <= absolute_error.get()
            || within_relative(delta as f64, neg_abs(self), relative_error.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abs<T: Equality>(bound: T::Bound) -> AbsoluteError<T> {
        AbsoluteError::new(bound).unwrap()
    }

    fn sym(relative_error: f64) -> SymmetricRelativeError {
        SymmetricRelativeError::new(relative_error).unwrap()
    }

    fn asym(relative_error: f64) -> AsymmetricRelativeError {
        AsymmetricRelativeError::new(relative_error).unwrap()
    }

    #[test]
    fn test_neg_abs() {
        assert_eq!(neg_abs(5), -5);
        assert_eq!(neg_abs(-5), -5);
        assert_eq!(neg_abs(0), 0);
        assert_eq!(neg_abs(i64::MIN), i64::MIN);
        assert_eq!(neg_abs(i64::MAX), -i64::MAX);
    }

    #[test]
    fn test_are_equal() {
        assert!(3i8.are_equal(3));
        assert!(!3i16.are_equal(-3));
        assert!(i32::MIN.are_equal(i32::MIN));
        assert!(!i64::MIN.are_equal(i64::MAX));
    }

    #[test]
    fn test_within_narrow() {
        assert!(10i8.within(12, abs(2)));
        assert!(!10i8.within(13, abs(2)));
        // Full span minus one still fits under the largest valid bound
        assert!(i8::MIN.within(i8::MAX - 1, abs(0xFE)));
        assert!(!i8::MIN.within(i8::MAX, abs(0xFE)));

        assert!(i16::MIN.within(i16::MAX - 1, abs(0xFFFE)));
        assert!(!i16::MIN.within(i16::MAX, abs(0xFFFE)));

        assert!(i32::MAX.within(i32::MIN + 1, abs(0xFFFF_FFFE)));
        assert!(!i32::MAX.within(i32::MIN, abs(0xFFFF_FFFE)));
    }

    #[test]
    fn test_within_i64_native_bound() {
        assert!(100i64.within(-100, abs(200)));
        assert!(!100i64.within(-101, abs(200)));
        assert!(i64::MAX.within(0, abs(i64::MAX as i128)));
        // Difference overflows i64: never within an i64 bound
        assert!(!i64::MAX.within(-1, abs(i64::MAX as i128)));
        assert!(!i64::MIN.within(i64::MAX, abs(i64::MAX as i128)));
    }

    #[test]
    fn test_within_i64_wide_bound() {
        let largest = abs::<i64>(u64::MAX as i128 - 1);
        assert!(i64::MAX.within(i64::MIN + 1, largest));
        assert!((i64::MIN + 1).within(i64::MAX, largest));
        assert!(!i64::MAX.within(i64::MIN, largest));
        assert!(!i64::MIN.within(i64::MAX, largest));

        let just_over = abs::<i64>(i64::MAX as i128 + 1);
        assert!(i64::MAX.within(-1, just_over));
        assert!(!i64::MAX.within(-2, just_over));
    }

    #[test]
    fn test_close_narrow() {
        // delta = 10, max magnitude = 110
        assert!(100i32.close(110, sym(0.1), abs(0)));
        assert!(!100i32.close(111, sym(0.09), abs(0)));
        assert!(100i32.close(111, sym(0.09), abs(11)));

        // Magnitude of MIN for the narrow widths
        assert!(i8::MIN.close(-64, sym(0.5), abs(0)));
        assert!(!i8::MIN.close(-63, sym(0.5), abs(0)));
        assert!(i16::MIN.close(0, sym(1.0), abs(0)));
    }

    #[test]
    fn test_close_i64_extremes() {
        // delta = 2^62, max magnitude = 2^63
        assert!(i64::MIN.close(i64::MIN / 2, sym(0.5), abs(0)));
        assert!(!i64::MIN.close(i64::MIN / 2, sym(0.49), abs(0)));
        // Opposite extremes are a ratio of 2 apart
        assert!(!i64::MIN.close(i64::MAX, sym(1.999_999), abs(0)));
        assert!(!i64::MIN.close(i64::MAX, sym(0.0), abs(u64::MAX as i128 - 1)));
        assert!(i64::MIN.close(i64::MAX - 1, sym(0.0), abs(u64::MAX as i128 - 1)));
    }

    #[test]
    fn test_close_is_symmetric() {
        let pairs = [(1i32, 100i32), (-50, 40), (i32::MIN, 7), (0, 0)];
        for (a, b) in pairs {
            for rel in [0.0, 0.1, 0.5, 1.0, 1.5] {
                assert_eq!(a.close(b, sym(rel), abs(3)), b.close(a, sym(rel), abs(3)));
            }
        }
    }

    #[test]
    fn test_close_to_is_asymmetric() {
        // delta = 99: |1| * 0.5 fails, |100| * 0.5 fails too, but 99 <= 100 * 1.0
        assert!(!1i32.close_to(100, asym(0.5), abs(0)));
        assert!(!100i32.close_to(1, asym(0.5), abs(0)));
        assert!(!1i32.close_to(100, asym(1.0), abs(0)));
        assert!(100i32.close_to(1, asym(1.0), abs(0)));
    }

    #[test]
    fn test_close_to_unbounded_relative_error() {
        assert!(1i16.close_to(100, asym(99.0), abs(0)));
        assert!(!1i16.close_to(101, asym(99.0), abs(0)));
        assert!(i64::MIN.close_to(i64::MAX, asym(2.0), abs(0)));
        assert!(i64::MAX.close_to(i64::MIN, asym(2.1), abs(0)));
    }

    #[test]
    fn test_zero_expected() {
        // Relative tolerance against zero is zero: only the absolute bound helps
        assert!(!0i8.close_to(1, asym(1000.0), abs(0)));
        assert!(0i8.close_to(1, asym(1000.0), abs(1)));
    }
}
