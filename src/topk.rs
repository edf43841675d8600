//! Node ranking over per-node score vectors.
//!
//! The metrics in this crate all produce a `Vec<f64>` indexed by node id
//! (clustering coefficients, shortest-path lengths, degree counts). `top_k`
//! turns such a vector into a small leaderboard without sorting all of it.

use ordered_float::NotNan;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// The `k` highest-scoring nodes as `(node, score)`, best first.
///
/// Zero and negative scores are rankable; only NaN entries are skipped.
/// Equal scores prefer the lower node id, both for who makes the cut and for
/// output order, so results are stable across runs.
pub fn top_k(scores: &[f64], k: usize) -> Vec<(usize, f64)> {
    if k == 0 || scores.is_empty() {
        return Vec::new();
    }
    // Min-heap of the current best k. Reversing the node id inside the entry
    // makes the highest id the smallest on score ties, so it is evicted
    // first and low ids survive.
    let mut heap = BinaryHeap::with_capacity(k + 1);
    for (node, &score) in scores.iter().enumerate() {
        let Ok(score) = NotNan::new(score) else {
            continue;
        };
        heap.push(Reverse((score, Reverse(node))));
        if heap.len() > k {
            heap.pop();
        }
    }
    let mut ranked: Vec<(usize, f64)> =
        heap.into_iter().map(|Reverse((score, Reverse(node)))| (node, score.into_inner())).collect();
    ranked.sort_unstable_by(|a, b| {
        b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(&b.0))
    });
    ranked
}

/// Scale scores so they sum to 1. Left untouched when the total is zero,
/// negative or non-finite.
pub fn normalize(scores: &mut [f64]) {
    let total: f64 = scores.iter().sum();
    if total.is_finite() && total > 0.0 {
        for s in scores {
            *s /= total;
        }
    }
}
