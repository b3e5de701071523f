//! Jaro and Jaro-Winkler similarity
//!
//! Pure, allocation-light scoring of two symbol sequences, returning a value
//! in [0, 1]. Any `T: PartialEq` works as a symbol: bytes, `char`s, code
//! points or whole tokens.
//!
//! - [`jaro_distance`] - bounded-window matching with half-transpositions
//! - [`jaro_winkler_distance`] - Jaro plus a common-prefix boost above 0.7
//! - [`jaro_winkler_distance_with`] - same, with a custom [`WinklerConfig`]
//! - [`text`] - `&str` helpers over `char`s or UTF-8 bytes
//!
//! # Example
//!
//! ```rust
//! use jarowinkler::{jaro_distance, jaro_winkler_str};
//!
//! let score = jaro_distance(b"DIXON", b"DICKSONX");
//! assert!((score - 0.767).abs() < 1e-3);
//!
//! assert!(jaro_winkler_str("MARTHA", "MARHTA") > 0.96);
//! ```

pub mod config;
pub mod error;
pub mod jaro;
pub mod text;
pub mod winkler;

// Re-export main types at crate root
pub use config::{
    WinklerConfig, JARO_WEIGHT_STRING_A, JARO_WEIGHT_STRING_B, JARO_WEIGHT_TRANSPOSITIONS,
    JARO_WINKLER_BOOST_THRESHOLD, JARO_WINKLER_PREFIX_SIZE, JARO_WINKLER_SCALING_FACTOR,
};
pub use error::{ConfigError, ConfigResult};
pub use jaro::{jaro_distance, match_stats, match_window, MatchStats};
pub use text::{jaro_str, jaro_str_bytes, jaro_winkler_str, jaro_winkler_str_bytes};
pub use winkler::{common_prefix_len, jaro_winkler_distance, jaro_winkler_distance_with};
