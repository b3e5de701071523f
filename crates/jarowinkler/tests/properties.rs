//! Property checks for Jaro and Jaro-Winkler over a fixed corpus of pairs

use jarowinkler::{
    jaro_distance, jaro_str, jaro_winkler_distance, jaro_winkler_str, match_stats, match_window,
    JARO_WINKLER_BOOST_THRESHOLD,
};
use pretty_assertions::assert_eq;

/// Install a test subscriber so `RUST_LOG=jarowinkler=trace` shows match scans
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const CORPUS: &[&str] = &[
    "",
    "A",
    "AB",
    "BA",
    "ABC",
    "XYZ",
    "MARTHA",
    "MARHTA",
    "DIXON",
    "DICKSONX",
    "DWAYNE",
    "DUANE",
    "JELLYFISH",
    "SMELLYFISH",
    "CRATE",
    "TRACE",
    "kitten",
    "sitting",
    "example",
    "exemple",
    "author_of",
    "is_author_of",
    "maintainer_of",
    "AAAAAA",
    "AAABBB",
    "ABCDEFGHIJKLMNOP",
    "PONMLKJIHGFEDCBA",
    "café",
    "Straße",
    "Strasse",
];

fn pairs() -> impl Iterator<Item = (&'static str, &'static str)> {
    CORPUS
        .iter()
        .flat_map(|a| CORPUS.iter().map(move |b| (*a, *b)))
}

#[test]
fn test_symmetry() {
    init_tracing();
    for (a, b) in pairs() {
        assert_eq!(jaro_str(a, b), jaro_str(b, a), "jaro({a:?}, {b:?})");
    }
}

#[test]
fn test_identity() {
    for a in CORPUS.iter().filter(|s| !s.is_empty()) {
        assert_eq!(jaro_str(a, a), 1.0, "jaro({a:?}, {a:?})");
        assert_eq!(jaro_winkler_str(a, a), 1.0, "jaro_winkler({a:?}, {a:?})");
    }
}

#[test]
fn test_empty_is_zero() {
    for a in CORPUS {
        assert_eq!(jaro_str(a, ""), 0.0);
        assert_eq!(jaro_str("", a), 0.0);
        assert_eq!(jaro_winkler_str(a, ""), 0.0);
        assert_eq!(jaro_winkler_str("", a), 0.0);
    }
}

#[test]
fn test_bounded_range() {
    for (a, b) in pairs() {
        let j = jaro_str(a, b);
        let jw = jaro_winkler_str(a, b);
        assert!((0.0..=1.0).contains(&j), "jaro({a:?}, {b:?}) = {j}");
        assert!((0.0..=1.0).contains(&jw), "jaro_winkler({a:?}, {b:?}) = {jw}");
    }
}

#[test]
fn test_boost_never_decreases() {
    for (a, b) in pairs() {
        assert!(
            jaro_winkler_str(a, b) >= jaro_str(a, b),
            "jaro_winkler({a:?}, {b:?}) fell below jaro"
        );
    }
}

#[test]
fn test_threshold_gating() {
    for (a, b) in pairs() {
        let j = jaro_str(a, b);
        if j <= JARO_WINKLER_BOOST_THRESHOLD {
            assert_eq!(jaro_winkler_str(a, b), j, "({a:?}, {b:?}) was boosted");
        }
    }
}

#[test]
fn test_literal_cases() {
    init_tracing();
    assert!((jaro_str("MARTHA", "MARHTA") - 0.944).abs() < 1e-3);
    assert!((jaro_str("DIXON", "DICKSONX") - 0.767).abs() < 1e-3);
    assert!((jaro_winkler_str("MARTHA", "MARHTA") - 0.961).abs() < 1e-3);
    assert_eq!(jaro_str("", "ABC"), 0.0);
    assert_eq!(jaro_str("ABC", "ABC"), 1.0);
    assert_eq!(jaro_str("ABC", "XYZ"), 0.0);
}

#[test]
fn test_same_order_different_length_has_no_transpositions() {
    let stats = match_stats(b"ABC", b"ABCDEF");
    assert_eq!(stats.matches, 3);
    assert_eq!(stats.transpositions, 0);

    let stats = match_stats(b"DIXON", b"DICKSONX");
    assert_eq!(stats.transpositions, 0);
}

#[test]
fn test_window_boundary() {
    // Ten distinct symbols give a window half-width of 4
    let a: Vec<u32> = (1..=10).collect();
    assert_eq!(match_window(a.len(), 10), 4);

    // Symbol 1 sits at index 0 of a; index 4 of b is inside the window
    let inside = [11, 12, 13, 14, 1, 15, 16, 17, 18, 19];
    assert_eq!(match_stats(&a, &inside).matches, 1);
    assert!((jaro_distance(&a, &inside) - 0.4).abs() < 1e-12);

    // Index 5 is one past the window
    let outside = [11, 12, 13, 14, 15, 1, 16, 17, 18, 19];
    assert_eq!(match_stats(&a, &outside).matches, 0);
    assert_eq!(jaro_distance(&a, &outside), 0.0);
    assert_eq!(jaro_winkler_distance(&a, &outside), 0.0);
}

#[test]
fn test_reversed_sequence_outside_window() {
    // Symbols near the ends of a reversed alphabet are too far apart to match
    let forward = "ABCDEFGHIJKLMNOP";
    let reversed = "PONMLKJIHGFEDCBA";
    let stats = match_stats(forward.as_bytes(), reversed.as_bytes());
    assert!(stats.matches < forward.len());
    assert!(jaro_str(forward, reversed) < 1.0);
}
