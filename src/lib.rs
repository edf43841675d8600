//! `relnet`: graph analysis over relational incident networks.
//!
//! The crate loads the terrorism-incident corpora (node tables with 0/1
//! feature blocks, label vocabularies, URI edge lists), derives dense
//! adjacency matrices from them, and answers structural questions about
//! those matrices: breadth-first layerings, connectivity, component
//! decomposition, shortest-path metrics and clustering coefficients.
//!
//! Public invariants (must not drift):
//! - **Node order**: outputs are indexed by node id \(0..n-1\) of the input
//!   matrix; dataset-derived matrices index nodes by table row order.
//! - **Determinism**: identical inputs give identical outputs. Layers list
//!   nodes ascending, component seeds are claimed lowest-index-first, rank
//!   ties prefer the lower node id.
//! - **Sentinels over errors**: unreachable and isolated nodes are normal
//!   outcomes reported through `f64::INFINITY` and zero values; errors are
//!   reserved for malformed input.
//!
//! Swappable (allowed to change without breaking the contract):
//! - iteration strategy (serial vs the `parallel` feature)
//! - internal scratch layouts (so long as invariants hold)

pub mod bfs;
pub mod clustering;
pub mod components;
pub mod dataset;
pub mod distance;
pub mod graph;
pub mod topk;

pub use bfs::{bfs_layering, Layering};
pub use clustering::{clustering_coefficient, clustering_coefficients};
pub use components::{find_components, is_connected, largest_component, linked_node_count};
pub use dataset::{
    adjacency_from_edges, load_attack_dataset, load_relationship_dataset, parse_edge_file,
    parse_label_file, parse_node_table, prune_isolated, AttackData, NodeTable, RelationKind,
    RelationshipData, TableSchema,
};
pub use distance::{average_distance, diameter, shortest_path_lengths};
pub use graph::AdjacencyMatrix;
pub use topk::{normalize, top_k};

#[cfg(feature = "parallel")]
pub use clustering::clustering_coefficients_parallel;
#[cfg(feature = "parallel")]
pub use distance::{average_distance_parallel, diameter_parallel};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("node index out of bounds: {node} >= {nodes}")]
    NodeOutOfBounds { node: usize, nodes: usize },
    #[error("matrix is not square: {rows} rows but row {row} has {cols} columns")]
    NotSquare { rows: usize, row: usize, cols: usize },
    #[error("length mismatch: expected {expected} entries, got {got}")]
    LengthMismatch { expected: usize, got: usize },
    #[error("edge endpoint is not a known node id: {0:?}")]
    UnknownNode(String),
    #[error("{path}:{line}: {msg}")]
    Malformed { path: String, line: usize, msg: String },
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
