//! Configuration error types

use thiserror::Error;

/// Errors raised when Jaro-Winkler tunables are out of range
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Scaling factor is negative, NaN or infinite
    #[error("invalid scaling factor: {0} (must be finite and >= 0)")]
    InvalidScalingFactor(f64),

    /// The largest possible boost would push a score above 1.0
    #[error("scaling factor {scaling_factor} with prefix cap {prefix_cap} can boost a score above 1.0")]
    BoostOverflow {
        scaling_factor: f64,
        prefix_cap: usize,
    },

    /// Boost threshold is outside [0, 1]
    #[error("invalid boost threshold: {0} (must be within [0, 1])")]
    InvalidBoostThreshold(f64),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
