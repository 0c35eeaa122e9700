// ============================================================================
// Comparison Errors
// Error types for rejected error bounds
// ============================================================================

use std::fmt;

/// The kind of error bound that was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundKind {
    /// Absolute error `|v1-v2| <= bound`
    Absolute,
    /// Relative error against `max(|v1|,|v2|)`
    SymmetricRelative,
    /// Relative error against `|expected|`
    AsymmetricRelative,
    /// Units in the last place
    Ulp,
}

impl fmt::Display for BoundKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundKind::Absolute => write!(f, "absolute error"),
            BoundKind::SymmetricRelative => write!(f, "symmetric relative error"),
            BoundKind::AsymmetricRelative => write!(f, "asymmetric relative error"),
            BoundKind::Ulp => write!(f, "ULP error"),
        }
    }
}

/// Errors raised when an error bound is outside its valid domain.
///
/// Every variant is an invalid-argument condition: the caller supplied a
/// bound that cannot describe a meaningful equality test. There is no
/// recovery; the comparison is never attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ComparisonError {
    /// Bound is below zero
    Negative(BoundKind),
    /// Bound is NaN
    NotANumber(BoundKind),
    /// Bound is positive infinity
    Infinite(BoundKind),
    /// Bound is at or above the largest meaningful value for the width
    TooLarge(BoundKind),
}

impl ComparisonError {
    /// The kind of bound that was rejected.
    #[inline]
    pub const fn kind(&self) -> BoundKind {
        match *self {
            ComparisonError::Negative(kind)
            | ComparisonError::NotANumber(kind)
            | ComparisonError::Infinite(kind)
            | ComparisonError::TooLarge(kind) => kind,
        }
    }
}

impl fmt::Display for ComparisonError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ComparisonError::Negative(kind) => {
                write!(f, "invalid {}: must not be negative", kind)
            },
            ComparisonError::NotANumber(kind) => write!(f, "invalid {}: is NaN", kind),
            ComparisonError::Infinite(kind) => write!(f, "invalid {}: is infinite", kind),
            ComparisonError::TooLarge(kind) => write!(
                f,
                "invalid {}: every pair of values would compare equal",
                kind
            ),
        }
    }
}

impl std::error::Error for ComparisonError {}

/// Result type alias for bound validation
pub type ComparisonResult<T> = Result<T, ComparisonError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ComparisonError::Negative(BoundKind::Absolute).to_string(),
            "invalid absolute error: must not be negative"
        );
        assert_eq!(
            ComparisonError::TooLarge(BoundKind::SymmetricRelative).to_string(),
            "invalid symmetric relative error: every pair of values would compare equal"
        );
        assert_eq!(
            ComparisonError::NotANumber(BoundKind::Ulp).to_string(),
            "invalid ULP error: is NaN"
        );
    }

    #[test]
    fn test_error_kind() {
        assert_eq!(
            ComparisonError::Infinite(BoundKind::AsymmetricRelative).kind(),
            BoundKind::AsymmetricRelative
        );
        assert_eq!(ComparisonError::Negative(BoundKind::Ulp).kind(), BoundKind::Ulp);
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            ComparisonError::Negative(BoundKind::Absolute),
            ComparisonError::Negative(BoundKind::Absolute)
        );
        assert_ne!(
            ComparisonError::Negative(BoundKind::Absolute),
            ComparisonError::Negative(BoundKind::Ulp)
        );
    }
}
