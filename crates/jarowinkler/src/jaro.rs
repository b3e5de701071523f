//! Jaro similarity
//!
//! Symbols of `a` are matched greedily against the first unmatched equal symbol
//! of `b` inside a window of half-width `max(len_a, len_b) / 2 - 1`. Matched
//! symbols that line up differently in the two sequences count as
//! transpositions, halved with integer division.

use tracing::trace;

use crate::config::{JARO_WEIGHT_STRING_A, JARO_WEIGHT_STRING_B, JARO_WEIGHT_TRANSPOSITIONS};

/// Matching statistics of one Jaro comparison
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchStats {
    /// Number of matched symbol pairs (`m`)
    pub matches: usize,
    /// Matched pairs that disagree in lockstep order (`t`, not yet halved)
    pub transpositions: usize,
}

/// Half-width of the matching window for sequences of these lengths
#[inline]
pub fn match_window(a_len: usize, b_len: usize) -> usize {
    (a_len.max(b_len) / 2).saturating_sub(1)
}

/// Count matches and transpositions between `a` and `b`
pub fn match_stats<T: PartialEq>(a: &[T], b: &[T]) -> MatchStats {
    if a.is_empty() || b.is_empty() {
        return MatchStats::default();
    }

    let max_range = match_window(a.len(), b.len());

    let mut a_match = vec![false; a.len()];
    let mut b_match = vec![false; b.len()];
    let mut matches = 0;

    for (a_index, symbol) in a.iter().enumerate() {
        let min_index = a_index.saturating_sub(max_range);
        let max_index = (a_index + max_range + 1).min(b.len());

        // min_index never decreases and max_index is capped at b.len(), so an
        // empty window stays empty for every later a_index.
        if min_index >= max_index {
            break;
        }

        let window = b[min_index..max_index]
            .iter()
            .zip(&mut b_match[min_index..max_index]);
        for (candidate, taken) in window {
            if !*taken && candidate == symbol {
                *taken = true;
                a_match[a_index] = true;
                matches += 1;
                break;
            }
        }
    }

    if matches == 0 {
        return MatchStats::default();
    }

    let a_position = matched_positions(&a_match, matches);
    let b_position = matched_positions(&b_match, matches);
    debug_assert_eq!(a_position.len(), b_position.len());

    let transpositions = a_position
        .iter()
        .zip(&b_position)
        .filter(|&(&i, &j)| a[i] != b[j])
        .count();

    MatchStats {
        matches,
        transpositions,
    }
}

/// Indices of the set flags in `mask`, in order
fn matched_positions(mask: &[bool], count: usize) -> Vec<usize> {
    let mut positions = Vec::with_capacity(count);
    positions.extend(
        mask.iter()
            .enumerate()
            .filter_map(|(index, &hit)| hit.then_some(index)),
    );
    positions
}

/// Jaro similarity of `a` and `b` in [0, 1].
///
/// Returns 0.0 when either sequence is empty or nothing matches, and 1.0 for
/// identical non-empty sequences.
///
/// ```rust
/// use jarowinkler::jaro_distance;
///
/// let a: Vec<char> = "MARTHA".chars().collect();
/// let b: Vec<char> = "MARHTA".chars().collect();
/// assert!((jaro_distance(&a, &b) - 0.944).abs() < 1e-3);
/// ```
pub fn jaro_distance<T: PartialEq>(a: &[T], b: &[T]) -> f64 {
    let stats = match_stats(a, b);

    trace!(
        a_len = a.len(),
        b_len = b.len(),
        matches = stats.matches,
        transpositions = stats.transpositions,
        "jaro match scan"
    );

    if stats.matches == 0 {
        return 0.0;
    }

    let m = stats.matches as f64;
    let half_transpositions = stats.transpositions / 2;

    // Each ratio is exactly 1.0 for identical inputs, keeping the sum exact
    JARO_WEIGHT_STRING_A * (m / a.len() as f64)
        + JARO_WEIGHT_STRING_B * (m / b.len() as f64)
        + JARO_WEIGHT_TRANSPOSITIONS * ((stats.matches - half_transpositions) as f64 / m)
}
