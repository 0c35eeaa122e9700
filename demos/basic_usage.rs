// ============================================================================
// Basic Usage Example
// ============================================================================

use numeric_equality::prelude::*;

fn main() {
    #[cfg(feature = "logging")]
    numeric_equality::logging::init(tracing::Level::TRACE);

    println!("=== Numeric Equality Example ===\n");

    // Exact equality compares bit patterns for floating values
    println!("are_equal(NaN, NaN)   = {}", are_equal(f64::NAN, f64::NAN));
    println!("are_equal(-0.0, 0.0)  = {}", are_equal(-0.0f64, 0.0));

    // Absolute, relative and ULP comparisons validate their bounds first
    println!(
        "are_close(100.0, 100.9, rel=0.01) = {:?}",
        are_close(100.0, 100.9, 0.01, 0.0)
    );
    println!(
        "are_close(100.0, 102.0, rel=0.01) = {:?}",
        are_close(100.0, 102.0, 0.01, 0.0)
    );
    println!(
        "is_close_to(1, 100, rel=0.5)      = {:?}",
        is_close_to(1i32, 100, 0.5, 0)
    );
    println!(
        "are_within(i64::MAX, i64::MIN + 1) = {:?}",
        are_within(i64::MAX, i64::MIN + 1, u64::MAX as i128 - 1)
    );
    println!(
        "are_within_ulp(1.0, 1.0 + EPSILON, 1) = {:?}",
        are_within_ulp(1.0f64, 1.0 + f64::EPSILON, 1)
    );

    // Invalid bounds are rejected before comparing
    match are_close(1.0f64, 1.0, 2.0, 0.0) {
        Ok(result) => println!("unexpected result: {}", result),
        Err(e) => println!("rejected: {}", e),
    }

    // Validate once, compare many
    println!("\n=== Reusable Tolerance ===");
    let tolerance = match ToleranceConfig::symmetric(1e-3, 1e-9).build::<f64>() {
        Ok(tolerance) => tolerance,
        Err(e) => {
            println!("invalid tolerance: {}", e);
            return;
        },
    };

    let expected = [1.0, 2.0, 3.0, 4.0];
    let actual = [1.0004, 1.9995, 3.1, 4.0];
    match tolerance.first_mismatch(&expected, &actual) {
        None => println!("all values match ({})", tolerance),
        Some(i) => println!(
            "index {}: {} != {} ({})",
            i, expected[i], actual[i], tolerance
        ),
    }
}
