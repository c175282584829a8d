//! Shared constants and invariants

pub const WELL_KNOWN_CONFIG_PATH: &str = "/.well-known/openid-configuration";

pub const DEFAULT_HTTP_TIMEOUT_MS: u64 = 5000;

/// Refresh at 1/fraction of the validity window; 2 means half-life.
pub const DEFAULT_REFRESH_FRACTION: u32 = 2;
/// Fractions below 2 would push the deadline past the usable window.
pub const MIN_REFRESH_FRACTION: u32 = 2;

pub const DEFAULT_RETRY_BASE_DELAY_MS: u64 = 500;
pub const DEFAULT_RETRY_MAX_DELAY_MS: u64 = 30_000;
