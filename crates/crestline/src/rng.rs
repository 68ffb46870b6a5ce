//! Stateless seeded noise for reproducible "organic" variation.
//!
//! A sine-based hash of `(seed, index)` rather than a stateful generator:
//! every call site can pull the value it needs without threading RNG state,
//! and the same inputs always produce the same output across processes.

/// Deterministic noise value in `[0, 1)` for a `(seed, index)` pair.
///
/// Successive indices are visually uncorrelated; callers that derive several
/// features from one seed should use disjoint index ranges.
#[inline]
pub fn unit_noise(seed: f64, index: f64) -> f64 {
    let x = (seed * 12.9898 + index * 78.233).sin() * 10000.0;
    // f64::fract keeps the sign of its input, which would leak negative
    // values out of the contract range
    x - x.floor()
}

/// Deterministic noise value in `[-1, 1)` for a `(seed, index)` pair.
#[inline]
pub fn centered_noise(seed: f64, index: f64) -> f64 {
    (unit_noise(seed, index) - 0.5) * 2.0
}

// ====== TESTS ======
