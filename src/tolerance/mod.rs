// ============================================================================
// Tolerance Module
// Configuration and validated, reusable comparison predicates
// ============================================================================

mod config;
mod predicate;

pub use config::{RelativeMode, ToleranceConfig, UlpConfig};
pub use predicate::{Tolerance, UlpTolerance};
