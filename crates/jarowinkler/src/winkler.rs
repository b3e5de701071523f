//! Jaro-Winkler similarity: Jaro plus a bonus for a shared leading prefix

use crate::config::WinklerConfig;
use crate::jaro::jaro_distance;

/// Length of the common leading run of `a` and `b`, capped at `cap`
#[inline]
pub fn common_prefix_len<T: PartialEq>(a: &[T], b: &[T], cap: usize) -> usize {
    a.iter()
        .zip(b)
        .take(cap)
        .take_while(|(x, y)| x == y)
        .count()
}

/// Jaro-Winkler similarity of `a` and `b` in [0, 1], using the reference
/// constants (prefix cap 4, scaling factor 0.1, threshold 0.7).
///
/// ```rust
/// use jarowinkler::jaro_winkler_distance;
///
/// assert!((jaro_winkler_distance(b"MARTHA", b"MARHTA") - 0.961).abs() < 1e-3);
/// ```
pub fn jaro_winkler_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    jaro_winkler_distance_with(a, b, &WinklerConfig::default())
}

/// Jaro-Winkler similarity with caller-supplied boost parameters.
///
/// Scores stay within [0, 1] as long as `config` passes
/// [`WinklerConfig::validate`].
pub fn jaro_winkler_distance_with<T: PartialEq>(a: &[T], b: &[T], config: &WinklerConfig) -> f64 {
    let distance = jaro_distance(a, b);

    if distance <= config.boost_threshold {
        return distance;
    }

    let prefix = common_prefix_len(a, b, config.prefix_cap);
    distance + config.scaling_factor * prefix as f64 * (1.0 - distance)
}
