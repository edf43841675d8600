//! Local clustering coefficients.
//!
//! A node's neighborhood is its set of in-neighbors, read down the node's
//! column. On the symmetric matrices this crate usually analyzes that matches
//! the out-neighbor set; on asymmetric input the two views differ and the
//! column view is authoritative here.

use crate::graph::AdjacencyMatrix;
use crate::{Error, Result};

/// Fraction of `node`'s neighbor pairs that are themselves linked, in
/// `[0, 1]`.
///
/// With fewer than two neighbors the coefficient is 0. Otherwise the entries
/// of the neighbor-induced submatrix are summed and halved to count each
/// undirected link once, and the count is normalized by `k * (k - 1) / 2`
/// possible pairs.
pub fn clustering_coefficient(graph: &AdjacencyMatrix, node: usize) -> Result<f64> {
    let n = graph.node_count();
    if node >= n {
        return Err(Error::NodeOutOfBounds { node, nodes: n });
    }
    Ok(local_coefficient(graph, node))
}

/// Coefficient of every node, indexed by node id.
pub fn clustering_coefficients(graph: &AdjacencyMatrix) -> Vec<f64> {
    (0..graph.node_count()).map(|node| local_coefficient(graph, node)).collect()
}

/// Parallel [`clustering_coefficients`]. Each node's coefficient only reads
/// the shared matrix, so the split is per node.
#[cfg(feature = "parallel")]
pub fn clustering_coefficients_parallel(graph: &AdjacencyMatrix) -> Vec<f64> {
    use rayon::prelude::*;
    (0..graph.node_count()).into_par_iter().map(|node| local_coefficient(graph, node)).collect()
}

fn local_coefficient(graph: &AdjacencyMatrix, node: usize) -> f64 {
    let neighbors = graph.in_neighbors(node);
    let k = neighbors.len();
    if k < 2 {
        return 0.0;
    }
    let mut submatrix_total = 0.0;
    for &i in &neighbors {
        for &j in &neighbors {
            submatrix_total += graph.get(i, j);
        }
    }
    let links = submatrix_total / 2.0;
    2.0 * links / (k * (k - 1)) as f64
}
