//! `&str` conveniences.
//!
//! The `*_str` functions compare Unicode scalar values, so `"café"` has four
//! symbols. The `*_str_bytes` functions compare raw UTF-8 bytes, which is
//! faster and equivalent for ASCII input. No normalization or case folding is
//! applied in either case.

use crate::jaro::jaro_distance;
use crate::winkler::jaro_winkler_distance;

/// Jaro similarity over the `char`s of two strings
pub fn jaro_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_distance(&a, &b)
}

/// Jaro-Winkler similarity over the `char`s of two strings
pub fn jaro_winkler_str(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    jaro_winkler_distance(&a, &b)
}

/// Jaro similarity over the UTF-8 bytes of two strings
#[inline]
pub fn jaro_str_bytes(a: &str, b: &str) -> f64 {
    jaro_distance(a.as_bytes(), b.as_bytes())
}

/// Jaro-Winkler similarity over the UTF-8 bytes of two strings
#[inline]
pub fn jaro_winkler_str_bytes(a: &str, b: &str) -> f64 {
    jaro_winkler_distance(a.as_bytes(), b.as_bytes())
}
