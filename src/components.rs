//! Connectivity tests and component decomposition.
//!
//! A component is materialized as a full-size copy of the input matrix with
//! every row and column outside the member set zeroed. Keeping the original
//! dimensions means node indices stay valid across the decomposition, at the
//! cost of `n * n` storage per component.

use crate::bfs::bfs_distances_into;
use crate::graph::AdjacencyMatrix;

/// Whether every node is reachable from node 0.
///
/// Graphs with zero or one node count as connected.
pub fn is_connected(graph: &AdjacencyMatrix) -> bool {
    let n = graph.node_count();
    if n <= 1 {
        return true;
    }
    let mut distance = Vec::new();
    let mut queue = Vec::new();
    bfs_distances_into(graph, 0, &mut distance, &mut queue);
    // The queue holds each reached node exactly once.
    queue.len() == n
}

/// Decompose the graph into reachability components.
///
/// Seeds are claimed lowest-index-first: expand from the smallest node not
/// yet in any component, emit the reached set as a zero-padded matrix, and
/// repeat until every node is claimed. Expansion follows out-edges, so on an
/// asymmetric matrix the emitted sets are reach sets and may overlap; on a
/// symmetric matrix they are the usual disjoint connected components.
///
/// Isolated nodes come out as all-zero singleton matrices.
pub fn find_components(graph: &AdjacencyMatrix) -> Vec<AdjacencyMatrix> {
    let n = graph.node_count();
    let mut components = Vec::new();
    let mut claimed = vec![false; n];
    let mut distance = Vec::new();
    let mut queue = Vec::new();

    for seed in 0..n {
        if claimed[seed] {
            continue;
        }
        bfs_distances_into(graph, seed, &mut distance, &mut queue);

        // Copy every member row, then every member column in full. On an
        // asymmetric matrix the column copy also carries edges whose source
        // lies outside the member set.
        let mut component = AdjacencyMatrix::zeros(n);
        for &v in &queue {
            claimed[v] = true;
            component.row_mut(v).copy_from_slice(graph.row(v));
        }
        for &v in &queue {
            for i in 0..n {
                component.set(i, v, graph.get(i, v));
            }
        }
        components.push(component);
    }
    components
}

/// Number of nodes with at least one outgoing edge.
///
/// This is the size measure used for components: zero-padded rows do not
/// count, so an isolated singleton component has size 0.
pub fn linked_node_count(matrix: &AdjacencyMatrix) -> usize {
    (0..matrix.node_count()).filter(|&i| matrix.row(i).iter().any(|&w| w != 0.0)).count()
}

/// The component with the most linked nodes, together with that count.
///
/// Ties keep the earliest component. `None` only when `components` is empty;
/// a list of all-zero matrices yields the first with count 0.
pub fn largest_component(components: &[AdjacencyMatrix]) -> Option<(&AdjacencyMatrix, usize)> {
    let mut best: Option<(&AdjacencyMatrix, usize)> = None;
    for component in components {
        let size = linked_node_count(component);
        let replace = match best {
            None => true,
            Some((_, max)) => size > max,
        };
        if replace {
            best = Some((component, size));
        }
    }
    best
}
