//! Dense adjacency-matrix storage.
//!
//! The square matrix is the only graph representation in this crate. Row `i`,
//! column `j` holds the weight of the edge `i -> j`; entries are expected to
//! be non-negative, and traversal treats any nonzero entry as an edge, so 0/1
//! and weighted matrices traverse identically.

use crate::{Error, Result};

/// Owned dense adjacency matrix, row-major, `n * n` entries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjacencyMatrix {
    nodes: usize,
    entries: Vec<f64>,
}

impl AdjacencyMatrix {
    /// All-zero matrix over `nodes` nodes.
    pub fn zeros(nodes: usize) -> Self {
        Self { nodes, entries: vec![0.0; nodes * nodes] }
    }

    /// Build from nested rows, validating squareness.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let nodes = rows.len();
        let mut entries = Vec::with_capacity(nodes * nodes);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != nodes {
                return Err(Error::NotSquare { rows: nodes, row: i, cols: row.len() });
            }
            entries.extend_from_slice(row);
        }
        Ok(Self { nodes, entries })
    }

    /// Build a 0/1 matrix over `nodes` nodes from an index edge list.
    ///
    /// With `symmetric`, every edge is mirrored (undirected storage).
    /// Duplicate edges collapse onto the same entry.
    pub fn from_edges(nodes: usize, edges: &[(usize, usize)], symmetric: bool) -> Result<Self> {
        let mut matrix = Self::zeros(nodes);
        for &(u, v) in edges {
            for node in [u, v] {
                if node >= nodes {
                    return Err(Error::NodeOutOfBounds { node, nodes });
                }
            }
            matrix.entries[u * nodes + v] = 1.0;
            if symmetric {
                matrix.entries[v * nodes + u] = 1.0;
            }
        }
        Ok(matrix)
    }

    pub fn node_count(&self) -> usize {
        self.nodes
    }

    pub fn is_empty(&self) -> bool {
        self.nodes == 0
    }

    /// Entry at row `i`, column `j` (the weight of `i -> j`).
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.nodes && j < self.nodes, "entry ({i}, {j}) out of range for {} nodes", self.nodes);
        self.entries[i * self.nodes + j]
    }

    pub fn set(&mut self, i: usize, j: usize, weight: f64) {
        assert!(i < self.nodes && j < self.nodes, "entry ({i}, {j}) out of range for {} nodes", self.nodes);
        self.entries[i * self.nodes + j] = weight;
    }

    /// Row `i` as a slice: the out-edge weights of node `i`.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i * self.nodes..(i + 1) * self.nodes]
    }

    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        &mut self.entries[i * self.nodes..(i + 1) * self.nodes]
    }

    /// Columns `j` with a nonzero entry in row `i`, ascending.
    pub fn out_neighbors(&self, i: usize) -> Vec<usize> {
        self.row(i).iter().enumerate().filter(|(_, &w)| w != 0.0).map(|(j, _)| j).collect()
    }

    /// Rows `i` with a nonzero entry in column `j`, ascending.
    ///
    /// This is the incoming-edge view; the clustering coefficient defines a
    /// node's neighborhood through it.
    pub fn in_neighbors(&self, j: usize) -> Vec<usize> {
        (0..self.nodes).filter(|&i| self.entries[i * self.nodes + j] != 0.0).collect()
    }

    pub fn out_degree(&self, i: usize) -> usize {
        self.row(i).iter().filter(|&&w| w != 0.0).count()
    }

    /// Sum of row `i` (total outgoing weight).
    pub fn row_total(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// Sum of column `j` (total incoming weight).
    pub fn column_total(&self, j: usize) -> f64 {
        (0..self.nodes).map(|i| self.entries[i * self.nodes + j]).sum()
    }
}
