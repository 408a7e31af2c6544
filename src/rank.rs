//! Ranking order for completion candidates.

use std::cmp::Ordering;

/// Orders two `(word, weight)` candidates: heavier first, then by word.
///
/// Weights compare with `f64::total_cmp`, so the order is total even when a
/// NaN weight was inserted (positive NaN ranks above every finite weight).
/// `-0.0` is folded into `0.0` first, so the two tie and fall back to the word.
pub fn rank_order<W: Ord>(a: &(W, f64), b: &(W, f64)) -> Ordering {
    (b.1 + 0.0)
        .total_cmp(&(a.1 + 0.0))
        .then_with(|| a.0.cmp(&b.0))
}

/// Sorts candidates by [`rank_order`] and keeps the first `k`.
pub fn top_k<W: Ord>(mut candidates: Vec<(W, f64)>, k: usize) -> Vec<(W, f64)> {
    if k == 0 {
        return Vec::new();
    }
    candidates.sort_unstable_by(rank_order);
    candidates.truncate(k);
    candidates
}
