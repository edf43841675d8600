//! Shortest-path metrics: per-source length vectors, average distance and
//! diameter.
//!
//! All of these are hop-count metrics over the unweighted view of the matrix.
//! The all-pairs aggregates only sample sources with at least one outgoing
//! edge and skip unreachable targets, so disconnected input degrades to
//! per-component answers instead of infinities.

use crate::bfs::{bfs_distances_into, bfs_layering};
use crate::graph::AdjacencyMatrix;
use crate::Result;

/// Hop distance from `source` to every node, `f64::INFINITY` where no path
/// exists. `lengths[source]` is always 0.
pub fn shortest_path_lengths(graph: &AdjacencyMatrix, source: usize) -> Result<Vec<f64>> {
    let layering = bfs_layering(graph, source)?;
    let n = graph.node_count();
    Ok((0..n).map(|v| layering.distance_to(v).map_or(f64::INFINITY, |d| d as f64)).collect())
}

/// Mean of the per-source mean finite distances.
///
/// Each source with at least one outgoing edge contributes the mean of its
/// finite distances, the zero distance to itself included. Sources without
/// out-edges contribute nothing; with no qualifying source at all the
/// average is 0.
pub fn average_distance(graph: &AdjacencyMatrix) -> f64 {
    let n = graph.node_count();
    let mut distance = Vec::new();
    let mut queue = Vec::new();
    let mut mean_total = 0.0;
    let mut sources = 0usize;

    for source in 0..n {
        if graph.out_degree(source) == 0 {
            continue;
        }
        bfs_distances_into(graph, source, &mut distance, &mut queue);
        mean_total += mean_reached_distance(&distance, &queue);
        sources += 1;
    }
    if sources == 0 {
        return 0.0;
    }
    mean_total / sources as f64
}

/// Longest finite shortest path over all sources with out-edges, 0 when no
/// source qualifies.
pub fn diameter(graph: &AdjacencyMatrix) -> usize {
    let n = graph.node_count();
    let mut distance = Vec::new();
    let mut queue = Vec::new();
    let mut diameter = 0usize;

    for source in 0..n {
        if graph.out_degree(source) == 0 {
            continue;
        }
        bfs_distances_into(graph, source, &mut distance, &mut queue);
        diameter = diameter.max(eccentricity_of(&distance, &queue));
    }
    diameter
}

/// Per-source average over the reached set. The queue lists exactly the
/// nodes with finite distance and always contains the source itself.
fn mean_reached_distance(distance: &[usize], queue: &[usize]) -> f64 {
    let total: usize = queue.iter().map(|&v| distance[v]).sum();
    total as f64 / queue.len() as f64
}

/// Enqueue order is nondecreasing in distance, so the queue tail holds the
/// farthest reached node.
fn eccentricity_of(distance: &[usize], queue: &[usize]) -> usize {
    queue.last().map_or(0, |&far| distance[far])
}

#[cfg(feature = "parallel")]
pub use parallel::{average_distance_parallel, diameter_parallel};

#[cfg(feature = "parallel")]
mod parallel {
    use super::*;
    use rayon::prelude::*;

    /// Parallel [`average_distance`]: one BFS per source, per-thread scratch
    /// buffers. Per-source means are collected in source order and summed
    /// serially, so the result is bitwise identical to the serial version.
    pub fn average_distance_parallel(graph: &AdjacencyMatrix) -> f64 {
        let n = graph.node_count();
        let means: Vec<f64> = (0..n)
            .into_par_iter()
            .filter(|&source| graph.out_degree(source) > 0)
            .map_init(
                || (Vec::new(), Vec::new()),
                |(distance, queue), source| {
                    bfs_distances_into(graph, source, distance, queue);
                    mean_reached_distance(distance, queue)
                },
            )
            .collect();
        if means.is_empty() {
            return 0.0;
        }
        means.iter().sum::<f64>() / means.len() as f64
    }

    /// Parallel [`diameter`].
    pub fn diameter_parallel(graph: &AdjacencyMatrix) -> usize {
        let n = graph.node_count();
        (0..n)
            .into_par_iter()
            .filter(|&source| graph.out_degree(source) > 0)
            .map_init(
                || (Vec::new(), Vec::new()),
                |(distance, queue), source| {
                    bfs_distances_into(graph, source, distance, queue);
                    eccentricity_of(distance, queue)
                },
            )
            .reduce(|| 0, usize::max)
    }
}
