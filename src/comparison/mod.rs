// ============================================================================
// Comparison Module
// Tolerance-based equality for every primitive numeric width
// ============================================================================
//
// This module provides:
// - Equality / UlpEquality: one implementation per width (i8..i64, f32, f64)
// - Validators and validated bound wrappers
// - Validating free functions: are_equal, are_within, are_close,
//   is_close_to, are_within_ulp
//
// Design principles:
// - Bounds are validated before any comparison runs
// - NaN/infinite operands are never errors, they compare unequal
// - No panics, no state, no allocation

mod bound;
mod errors;
mod float;
mod integer;
mod traits;
mod validation;

pub use bound::ErrorBound;
pub(crate) use bound::BoundDisplay;
pub use errors::{BoundKind, ComparisonError, ComparisonResult};
pub use traits::{Equality, UlpEquality};
pub use validation::{
    validate_absolute_error, validate_absolute_error_against, validate_asymmetric_relative_error,
    validate_symmetric_relative_error, validate_ulp_error, AbsoluteError,
    AsymmetricRelativeError, SymmetricRelativeError, UlpError, MAX_SYMMETRIC_RELATIVE_ERROR,
};

/// Exact equality. Floating values compare bit patterns.
#[inline]
pub fn are_equal<T: Equality>(value1: T, value2: T) -> bool {
    value1.are_equal(value2)
}

/// Check `|value1-value2| <= absolute_error`.
///
/// # Errors
/// Returns an invalid-argument error if the bound is unusable for `T`.
#[inline]
pub fn are_within<T: Equality>(value1: T, value2: T, absolute_error: T::Bound) -> ComparisonResult<bool> {
    let absolute_error = AbsoluteError::new(absolute_error)?;
    Ok(value1.within(value2, absolute_error))
}

/// Check the values are close using a symmetric relative error or an
/// absolute error:
/// `|v1-v2| <= absolute_error || |v1-v2| <= max(|v1|,|v2|) * relative_error`.
///
/// # Errors
/// Returns an invalid-argument error if either bound is invalid.
#[inline]
pub fn are_close<T: Equality>(
    value1: T,
    value2: T,
    relative_error: f64,
    absolute_error: T::Bound,
) -> ComparisonResult<bool> {
    let relative_error = SymmetricRelativeError::new(relative_error)?;
    let absolute_error = AbsoluteError::new(absolute_error)?;
    Ok(value1.close(value2, relative_error, absolute_error))
}

/// Check `actual` is close to `expected` using an asymmetric relative error
/// or an absolute error:
/// `|e-a| <= absolute_error || |e-a| <= |e| * relative_error`.
///
/// # Errors
/// Returns an invalid-argument error if either bound is invalid.
#[inline]
pub fn is_close_to<T: Equality>(
    expected: T,
    actual: T,
    relative_error: f64,
    absolute_error: T::Bound,
) -> ComparisonResult<bool> {
    let relative_error = AsymmetricRelativeError::new(relative_error)?;
    let absolute_error = AbsoluteError::new(absolute_error)?;
    Ok(expected.close_to(actual, relative_error, absolute_error))
}

/// Check the values are at most `ulp_error` units in the last place apart.
///
/// # Errors
/// Returns an invalid-argument error if the bound is negative.
#[inline]
pub fn are_within_ulp<F: UlpEquality>(value1: F, value2: F, ulp_error: F::Ulp) -> ComparisonResult<bool> {
    let ulp_error = UlpError::new(ulp_error)?;
    Ok(value1.within_ulp(value2, ulp_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use quickcheck::quickcheck;

    #[test]
    fn test_validation_precedes_comparison() {
        assert_eq!(
            are_within(1i32, 1, -1),
            Err(ComparisonError::Negative(BoundKind::Absolute))
        );
        assert_eq!(
            are_close(1.0f64, 1.0, 2.0, 0.0),
            Err(ComparisonError::TooLarge(BoundKind::SymmetricRelative))
        );
        assert_eq!(
            are_close(1.0f64, 1.0, 0.5, f64::NAN),
            Err(ComparisonError::NotANumber(BoundKind::Absolute))
        );
        assert_eq!(
            is_close_to(1i8, 1, f64::INFINITY, 0),
            Err(ComparisonError::Infinite(BoundKind::AsymmetricRelative))
        );
        assert_eq!(
            are_within_ulp(1.0f32, 1.0, -1),
            Err(ComparisonError::Negative(BoundKind::Ulp))
        );
    }

    #[test]
    fn test_free_functions() {
        assert!(are_equal(7u8 as i16, 7));
        assert!(!are_equal(-0.0f64, 0.0));
        assert_eq!(are_within(5i16, 9, 4), Ok(true));
        assert_eq!(are_close(100.0f64, 100.9, 0.01, 0.0), Ok(true));
        assert_eq!(are_close(100.0f64, 102.0, 0.01, 0.0), Ok(false));
        assert_eq!(is_close_to(10i32, 12, 0.2, 0), Ok(true));
        assert_eq!(is_close_to(12i32, 10, 0.1, 0), Ok(false));
        assert_eq!(are_within_ulp(1.0f64, 1.0 + f64::EPSILON, 1), Ok(true));
    }

    #[test]
    fn test_i64_overflow_safety() {
        let largest = u64::MAX as i128 - 1;
        assert_eq!(are_within(i64::MAX, i64::MIN + 1, largest), Ok(true));
        assert_eq!(are_within(i64::MAX, i64::MIN, largest), Ok(false));
        assert!(are_within(i64::MAX, i64::MIN, u64::MAX as i128).is_err());
    }

    quickcheck! {
        fn prop_bit_exact_reflexive(x: f64) -> bool {
            are_equal(x, x)
        }

        fn prop_integer_exact_matches_eq(a: i32, b: i32) -> bool {
            are_equal(a, b) == (a == b)
        }
    }

    proptest! {
        #[test]
        fn prop_within_is_monotonic(
            a in any::<i64>(),
            b in any::<i64>(),
            e1 in 0i128..(u64::MAX as i128),
            e2 in 0i128..(u64::MAX as i128),
        ) {
            let (lo, hi) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
            if are_within(a, b, lo).unwrap() {
                prop_assert!(are_within(a, b, hi).unwrap());
            }
        }

        #[test]
        fn prop_float_within_is_monotonic(
            a in any::<f64>(),
            b in any::<f64>(),
            e1 in 0.0f64..1e6,
            e2 in 0.0f64..1e6,
        ) {
            let (lo, hi) = if e1 <= e2 { (e1, e2) } else { (e2, e1) };
            if are_within(a, b, lo).unwrap() {
                prop_assert!(are_within(a, b, hi).unwrap());
            }
        }

        #[test]
        fn prop_are_close_is_symmetric(
            a in any::<f64>(),
            b in any::<f64>(),
            rel in 0.0f64..2.0,
            abs in 0.0f64..10.0,
        ) {
            prop_assert_eq!(are_close(a, b, rel, abs), are_close(b, a, rel, abs));
        }

        #[test]
        fn prop_integer_are_close_is_symmetric(
            a in any::<i64>(),
            b in any::<i64>(),
            rel in 0.0f64..2.0,
            abs in 0i128..1000,
        ) {
            prop_assert_eq!(are_close(a, b, rel, abs), are_close(b, a, rel, abs));
        }

        #[test]
        fn prop_ulp_is_symmetric(a in any::<f32>(), b in any::<f32>(), ulp in 0i16..i16::MAX) {
            prop_assert_eq!(are_within_ulp(a, b, ulp), are_within_ulp(b, a, ulp));
        }

        #[test]
        fn prop_ulp_next_up(bits in 0u64..0x7FEF_FFFF_FFFF_FFFF) {
            let x = f64::from_bits(bits);
            let y = f64::from_bits(bits + 1);
            prop_assert!(are_within_ulp(x, y, 1).unwrap());
            prop_assert!(!are_within_ulp(x, y, 0).unwrap());
        }
    }
}
