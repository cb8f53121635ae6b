//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default HTTP method for probe requests.
pub const METHOD: &str = "GET";

/// Default request timeout in seconds.
pub const TIMEOUT_SECS: u64 = 30;

/// Default request timeout as Duration.
#[must_use]
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS)
}
