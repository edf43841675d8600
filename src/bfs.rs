//! Breadth-first layering.
//!
//! A layering records, for one start node, which nodes sit at each hop
//! distance. Layer 0 is the start node itself, layer `d + 1` holds the nodes
//! first reached from layer `d`, and the final layer is always empty: it is
//! the frontier that found nothing new and it terminates the expansion.
//! Distances are first-write, so every node appears in exactly one layer.

use crate::graph::AdjacencyMatrix;
use crate::{Error, Result};

pub(crate) const UNREACHED: usize = usize::MAX;

/// Result of a breadth-first expansion from one start node.
#[derive(Debug, Clone, PartialEq)]
pub struct Layering {
    layers: Vec<Vec<usize>>,
    distance: Vec<usize>,
}

impl Layering {
    /// Hop layers, in order. `layers()[d]` holds the nodes at distance `d`,
    /// ascending. The last layer is always the empty terminal frontier.
    pub fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    /// Hop distance from the start node, or `None` when `node` was never
    /// reached (or lies outside the graph).
    pub fn distance_to(&self, node: usize) -> Option<usize> {
        self.distance.get(node).copied().filter(|&d| d != UNREACHED)
    }

    /// Number of nodes reached, the start node included.
    ///
    /// The terminal frontier is empty, so summing layer sizes counts each
    /// reached node exactly once.
    pub fn reached_count(&self) -> usize {
        self.layers.iter().map(Vec::len).sum()
    }

    /// All reached nodes, ascending.
    pub fn reached_nodes(&self) -> Vec<usize> {
        (0..self.distance.len()).filter(|&v| self.distance[v] != UNREACHED).collect()
    }

    /// Largest hop distance assigned, 0 when nothing beyond the start was
    /// reached.
    pub fn eccentricity(&self) -> usize {
        self.layers.len() - 2
    }
}

/// Expand breadth-first from `start` and report the full layering.
///
/// An isolated start yields `[[start], []]`. Self-loops never re-enter a
/// layer: the start node already holds distance 0.
pub fn bfs_layering(graph: &AdjacencyMatrix, start: usize) -> Result<Layering> {
    let n = graph.node_count();
    if start >= n {
        return Err(Error::NodeOutOfBounds { node: start, nodes: n });
    }

    let mut distance = Vec::new();
    let mut queue = Vec::new();
    bfs_distances_into(graph, start, &mut distance, &mut queue);

    let mut eccentricity = 0;
    for v in 0..n {
        if distance[v] != UNREACHED {
            eccentricity = eccentricity.max(distance[v]);
        }
    }

    // One slot per populated layer plus the empty terminal frontier. Nodes
    // are bucketed in index order, so each layer comes out ascending.
    let mut layers = vec![Vec::new(); eccentricity + 2];
    for v in 0..n {
        if distance[v] != UNREACHED {
            layers[distance[v]].push(v);
        }
    }

    Ok(Layering { layers, distance })
}

/// Allocation-free BFS core shared by the distance metrics.
///
/// Fills `distance` with hop counts (`UNREACHED` sentinel elsewhere) and
/// `queue` with the reached set in discovery order; both buffers are reused
/// across calls. The queue doubles as the FIFO: `head` walks it in place, so
/// enqueue order is nondecreasing in distance and the last element always
/// carries the largest distance.
pub(crate) fn bfs_distances_into(
    graph: &AdjacencyMatrix,
    start: usize,
    distance: &mut Vec<usize>,
    queue: &mut Vec<usize>,
) {
    let n = graph.node_count();
    distance.clear();
    distance.resize(n, UNREACHED);
    queue.clear();

    distance[start] = 0;
    queue.push(start);

    let mut head = 0usize;
    while head < queue.len() {
        let v = queue[head];
        head += 1;
        let next = distance[v] + 1;
        for (j, &w) in graph.row(v).iter().enumerate() {
            if w != 0.0 && distance[j] == UNREACHED {
                distance[j] = next;
                queue.push(j);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_layers_step_outward() {
        // Directed 4-ring: 0 -> 1 -> 2 -> 3 -> 0.
        let g = AdjacencyMatrix::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)], false).unwrap();
        let layering = bfs_layering(&g, 0).unwrap();
        assert_eq!(
            layering.layers(),
            &[vec![0], vec![1], vec![2], vec![3], vec![]]
        );
        assert_eq!(layering.distance_to(3), Some(3));
        assert_eq!(layering.eccentricity(), 3);
        assert_eq!(layering.reached_count(), 4);
    }

    #[test]
    fn first_write_keeps_nodes_in_one_layer() {
        // Diamond with a chord: 3 is reachable at distance 2 via 1 or 2, and
        // again at distance 3 via the 2 -> 4 -> 3 detour. It must stay in
        // layer 2.
        let edges = [(0, 1), (0, 2), (1, 3), (2, 4), (4, 3)];
        let g = AdjacencyMatrix::from_edges(5, &edges, false).unwrap();
        let layering = bfs_layering(&g, 0).unwrap();
        assert_eq!(layering.layers(), &[vec![0], vec![1, 2], vec![3, 4], vec![]]);
        assert_eq!(layering.distance_to(3), Some(2));
    }

    #[test]
    fn isolated_start_yields_singleton_plus_terminal() {
        let g = AdjacencyMatrix::zeros(3);
        let layering = bfs_layering(&g, 1).unwrap();
        assert_eq!(layering.layers(), &[vec![1], vec![]]);
        assert_eq!(layering.reached_count(), 1);
        assert_eq!(layering.eccentricity(), 0);
        assert_eq!(layering.distance_to(0), None);
        assert_eq!(layering.reached_nodes(), vec![1]);
    }

    #[test]
    fn self_loop_does_not_requeue_the_start() {
        let mut g = AdjacencyMatrix::zeros(2);
        g.set(0, 0, 1.0);
        g.set(0, 1, 1.0);
        let layering = bfs_layering(&g, 0).unwrap();
        assert_eq!(layering.layers(), &[vec![0], vec![1], vec![]]);
    }

    #[test]
    fn start_out_of_range_is_rejected() {
        let g = AdjacencyMatrix::zeros(2);
        assert!(bfs_layering(&g, 2).is_err());
        assert!(bfs_layering(&AdjacencyMatrix::zeros(0), 0).is_err());
    }

    #[test]
    fn distance_lookup_ignores_out_of_range_nodes() {
        let g = AdjacencyMatrix::from_edges(2, &[(0, 1)], false).unwrap();
        let layering = bfs_layering(&g, 0).unwrap();
        assert_eq!(layering.distance_to(1), Some(1));
        assert_eq!(layering.distance_to(99), None);
    }
}
