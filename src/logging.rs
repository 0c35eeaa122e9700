// ============================================================================
// Logging
// Optional tracing subscriber for binaries, demos and benchmarks
// ============================================================================

use tracing::Level;

/// Install a formatting subscriber printing events at `level` and above.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is kept.
pub fn init(level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
        .is_ok()
}
