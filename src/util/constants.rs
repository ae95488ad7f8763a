// FileHunt - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "FileHunt";

/// Current application version.
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Traversal limits
// =============================================================================

/// Default maximum directory recursion depth.
///
/// Deep enough for any realistic tree; a bound exists so a pathological
/// directory structure cannot recurse without limit.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Hard upper bound on max depth (prevents configuration mistakes).
pub const ABSOLUTE_MAX_DEPTH: usize = 256;

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG nor --debug is set.
///
/// "warn" keeps stderr clean for normal CLI runs; the render module owns
/// all user-facing output.
pub const DEFAULT_LOG_LEVEL: &str = "warn";
