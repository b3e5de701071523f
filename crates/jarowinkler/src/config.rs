//! Jaro / Jaro-Winkler constants and the tunable boost parameters.
//!
//! The free functions in [`crate::jaro`] and [`crate::winkler`] always use the
//! constants below. [`WinklerConfig`] exists for callers that need a different
//! prefix cap, scaling factor or threshold and goes through
//! [`crate::jaro_winkler_distance_with`].

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{ConfigError, ConfigResult};

/// Weight of the matched fraction of the first sequence
pub const JARO_WEIGHT_STRING_A: f64 = 1.0 / 3.0;
/// Weight of the matched fraction of the second sequence
pub const JARO_WEIGHT_STRING_B: f64 = 1.0 / 3.0;
/// Weight of the transposition term
pub const JARO_WEIGHT_TRANSPOSITIONS: f64 = 1.0 / 3.0;

/// Maximum number of leading symbols rewarded by the Winkler boost
pub const JARO_WINKLER_PREFIX_SIZE: usize = 4;
/// Boost per shared leading symbol
pub const JARO_WINKLER_SCALING_FACTOR: f64 = 0.1;
/// Jaro scores at or below this value are returned without a boost
pub const JARO_WINKLER_BOOST_THRESHOLD: f64 = 0.7;

/// Prefix boost parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WinklerConfig {
    /// Maximum common prefix length counted
    pub prefix_cap: usize,
    /// Boost applied per common prefix symbol
    pub scaling_factor: f64,
    /// Boost is only applied to Jaro scores strictly above this value
    pub boost_threshold: f64,
}

impl Default for WinklerConfig {
    fn default() -> Self {
        Self {
            prefix_cap: JARO_WINKLER_PREFIX_SIZE,
            scaling_factor: JARO_WINKLER_SCALING_FACTOR,
            boost_threshold: JARO_WINKLER_BOOST_THRESHOLD,
        }
    }
}

impl WinklerConfig {
    /// Build a validated config
    pub fn new(prefix_cap: usize, scaling_factor: f64, boost_threshold: f64) -> ConfigResult<Self> {
        let config = Self {
            prefix_cap,
            scaling_factor,
            boost_threshold,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that every boosted score stays within [0, 1].
    ///
    /// The boost adds `scaling_factor * prefix_len * (1 - d)`, so the score is
    /// bounded by 1 exactly when `scaling_factor * prefix_cap <= 1`.
    pub fn validate(&self) -> ConfigResult<()> {
        let result = self.check();
        if let Err(err) = &result {
            warn!(error = %err, "rejected Jaro-Winkler config");
        }
        result
    }

    fn check(&self) -> ConfigResult<()> {
        if !self.scaling_factor.is_finite() || self.scaling_factor < 0.0 {
            return Err(ConfigError::InvalidScalingFactor(self.scaling_factor));
        }

        if self.scaling_factor * self.prefix_cap as f64 > 1.0 {
            return Err(ConfigError::BoostOverflow {
                scaling_factor: self.scaling_factor,
                prefix_cap: self.prefix_cap,
            });
        }

        if !(0.0..=1.0).contains(&self.boost_threshold) {
            return Err(ConfigError::InvalidBoostThreshold(self.boost_threshold));
        }

        Ok(())
    }
}
