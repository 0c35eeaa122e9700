// ============================================================================
// Numeric Equality Library
// Tolerance-based equality predicates for every primitive numeric width
// ============================================================================

//! # Numeric Equality
//!
//! Exact, absolute-error, relative-error and ULP-error equality for
//! `i8`, `i16`, `i32`, `i64`, `f32` and `f64`, plus human-readable
//! descriptions of each rule for test failure messages.
//!
//! ## Features
//!
//! - **Bit-exact floating equality**: `-0.0 != 0.0`, `NaN == NaN`
//! - **Overflow-safe integer differences** up to the full `i64` span
//! - **Symmetric** (`max(|v1|,|v2|)`) and **asymmetric** (`|expected|`)
//!   relative errors, evaluated in double precision
//! - **ULP distance** across the sign boundary, `-0.0` and `0.0` are one point
//! - **Validate once, compare many**: validated bound types and reusable
//!   [`Tolerance`](tolerance::Tolerance) predicates
//!
//! ## Example
//!
//! ```rust
//! use numeric_equality::prelude::*;
//!
//! // Validating free functions
//! assert_eq!(are_close(100.0, 100.9, 0.01, 0.0), Ok(true));
//! assert_eq!(are_within(i64::MAX, i64::MIN + 1, u64::MAX as i128 - 1), Ok(true));
//! assert_eq!(are_within_ulp(0.0f32, -0.0, 0), Ok(true));
//! assert!(are_close(1.0, 1.0, 2.0, 0.0).is_err());
//!
//! // Reusable predicate with a description for failure messages
//! let tolerance = ToleranceConfig::symmetric(0.1, 5.0).build::<f64>().unwrap();
//! assert!(tolerance.test_all(&[100.0, 1.0], &[109.0, 5.5]));
//! assert_eq!(
//!     tolerance.to_string(),
//!     "|v1-v2|/max(|v1|,|v2|) <= 0.1 || |v1-v2| <= 5.0"
//! );
//! ```

pub mod comparison;
pub mod description;
pub mod tolerance;

#[cfg(feature = "logging")]
pub mod logging;

// Re-exports for convenience
pub mod prelude {
    pub use crate::comparison::{
        are_close, are_equal, are_within, are_within_ulp, is_close_to, AbsoluteError,
        AsymmetricRelativeError, BoundKind, ComparisonError, ComparisonResult, Equality,
        ErrorBound, SymmetricRelativeError, UlpEquality, UlpError,
    };
    pub use crate::description::{
        description_close, description_is_close_to, description_within, description_within_ulp,
        Description,
    };
    pub use crate::tolerance::{RelativeMode, Tolerance, ToleranceConfig, UlpConfig, UlpTolerance};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;

    /// A failing comparison renders the rule it was checking.
    fn check<T: Equality>(tolerance: &Tolerance<T>, expected: T, actual: T) -> Result<(), String> {
        if tolerance.test(expected, actual) {
            Ok(())
        } else {
            Err(format!("{:?} != {:?} ({})", expected, actual, tolerance))
        }
    }

    #[test]
    fn test_end_to_end_failure_message() {
        let tolerance = ToleranceConfig::symmetric(0.01, 0.0).build::<f64>().unwrap();

        assert!(check(&tolerance, 100.0, 100.9).is_ok());
        assert_eq!(
            check(&tolerance, 100.0, 102.0).unwrap_err(),
            "100.0 != 102.0 (|v1-v2|/max(|v1|,|v2|) <= 0.01)"
        );
    }

    #[test]
    fn test_validate_once_compare_many() {
        let absolute = AbsoluteError::<i32>::new(1).unwrap();
        let relative = SymmetricRelativeError::new(0.1).unwrap();

        let expected: Vec<i32> = (0..1000).collect();
        let actual: Vec<i32> = expected.iter().map(|v| v + v / 20).collect();

        assert!(expected
            .iter()
            .zip(&actual)
            .all(|(&e, &a)| e.close(a, relative, absolute)));
        assert_eq!(
            description_close(relative.get(), absolute.get()),
            "|v1-v2|/max(|v1|,|v2|) <= 0.1 || |v1-v2| <= 1"
        );
    }

    #[test]
    fn test_every_width_rejects_negative_absolute_error() {
        let negative = Err(ComparisonError::Negative(BoundKind::Absolute));
        assert_eq!(are_within(0i8, 0, -1), negative);
        assert_eq!(are_within(0i16, 0, -1), negative);
        assert_eq!(are_within(0i32, 0, -1), negative);
        assert_eq!(are_within(0i64, 0, -1), negative);
        assert_eq!(are_within(0.0f32, 0.0, -1.0), negative);
        assert_eq!(are_within(0.0f64, 0.0, -1.0), negative);
    }

    #[test]
    fn test_ulp_and_description_agree() {
        let tolerance = UlpConfig::new(0i16).build::<f32>().unwrap();
        assert!(tolerance.test(0.0, -0.0));
        assert!(!tolerance.test(1.0, 1.0 + f32::EPSILON));
        assert_eq!(tolerance.to_string(), description_within_ulp(0i16));
    }
}
