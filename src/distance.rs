//! Minkowski distance family.
//!
//! The clustering engines only ever need the Euclidean (p = 2) and Manhattan
//! (p = 1) specializations, which are exposed as named functions over the
//! general [`minkowski`] form.

/// Computes the Minkowski distance of order `p` between two equal-length
/// vectors: `(Σ |xᵢ − yᵢ|^p)^(1/p)`.
///
/// Pure, `O(D)` in the vector dimension. Equal lengths are the caller's
/// contract; this is only checked in debug builds.
pub fn minkowski(p: f64, x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len(), "distance over mismatched dimensions");
    let sum: f64 = x
        .iter()
        .zip(y.iter())
        .map(|(a, b)| (a - b).abs().powf(p))
        .sum();
    sum.powf(1.0 / p)
}

/// Computes the Euclidean distance (Minkowski order 2).
pub fn euclidean(x: &[f64], y: &[f64]) -> f64 {
    minkowski(2.0, x, y)
}

/// Computes the Manhattan distance (Minkowski order 1).
pub fn manhattan(x: &[f64], y: &[f64]) -> f64 {
    minkowski(1.0, x, y)
}
