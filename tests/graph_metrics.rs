use proptest::prelude::*;
use relnet::{
    average_distance, bfs_layering, clustering_coefficient, clustering_coefficients, diameter,
    find_components, is_connected, largest_component, linked_node_count, shortest_path_lengths,
    top_k, AdjacencyMatrix,
};

fn directed_ring(n: usize) -> AdjacencyMatrix {
    let edges: Vec<(usize, usize)> = (0..n).map(|i| (i, (i + 1) % n)).collect();
    AdjacencyMatrix::from_edges(n, &edges, false).unwrap()
}

fn two_triangles() -> AdjacencyMatrix {
    // 0--1--2--0   3--4--5--3, no cross edges.
    let edges = [(0, 1), (1, 2), (2, 0), (3, 4), (4, 5), (5, 3)];
    AdjacencyMatrix::from_edges(6, &edges, true).unwrap()
}

/// Minimal union-find, used as an oracle for component counts on symmetric
/// graphs.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self { parent: (0..n).collect() }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            let root = self.find(self.parent[x]);
            self.parent[x] = root;
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            self.parent[ra] = rb;
        }
    }
}

#[test]
fn four_ring_end_to_end() {
    let g = directed_ring(4);

    assert!(is_connected(&g));
    assert_eq!(diameter(&g), 3);
    assert_eq!(shortest_path_lengths(&g, 0).unwrap(), vec![0.0, 1.0, 2.0, 3.0]);

    // Every source sees finite distances {0, 1, 2, 3}. The per-source mean
    // includes the source's own zero, so each mean is 6/4 and the overall
    // average comes out 1.5, not the 2.0 a self-excluding mean would give.
    assert!((average_distance(&g) - 1.5).abs() < 1e-12);

    // One in-neighbor per node, so every coefficient hits the k < 2 guard.
    assert_eq!(clustering_coefficients(&g), vec![0.0; 4]);
}

#[test]
fn two_triangles_decompose_cleanly() {
    let g = two_triangles();

    assert!(!is_connected(&g));
    let components = find_components(&g);
    assert_eq!(components.len(), 2);
    for component in &components {
        assert_eq!(component.node_count(), 6);
        assert_eq!(linked_node_count(component), 3);
    }

    let (largest, size) = largest_component(&components).unwrap();
    assert_eq!(size, 3);
    assert!(std::ptr::eq(largest, &components[0]));

    // Within a triangle every pair of a node's two neighbors is linked.
    for node in 0..6 {
        assert!((clustering_coefficient(&g, node).unwrap() - 1.0).abs() < 1e-12);
    }

    // Each triangle keeps its own distances: means over {0, 1, 1}.
    assert!((average_distance(&g) - 2.0 / 3.0).abs() < 1e-12);
    assert_eq!(diameter(&g), 1);
}

#[test]
fn layering_partitions_the_reach_set() {
    // 0--1--2--3--4 path plus a 5--6 pair, undirected.
    let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (5, 6)];
    let g = AdjacencyMatrix::from_edges(7, &edges, true).unwrap();
    let layering = bfs_layering(&g, 2).unwrap();

    let layers = layering.layers();
    assert_eq!(layers, &[vec![2], vec![1, 3], vec![0, 4], vec![]]);
    assert!(layers.last().unwrap().is_empty());

    // Layers are disjoint and union to the reach set.
    let mut seen = Vec::new();
    for layer in layers {
        for &v in layer {
            assert!(!seen.contains(&v), "node {v} appears in two layers");
            seen.push(v);
        }
    }
    seen.sort_unstable();
    assert_eq!(seen, layering.reached_nodes());
    assert_eq!(layering.reached_count(), 5);
    assert_eq!(layering.distance_to(5), None);
}

#[test]
fn isolated_singletons_never_win_largest() {
    // A single linked pair next to two isolated nodes. The pair's component
    // counts 2 linked nodes; isolated singletons have all-zero rows and
    // count 0.
    let g = AdjacencyMatrix::from_edges(4, &[(0, 1)], true).unwrap();
    let components = find_components(&g);
    assert_eq!(components.len(), 3);
    assert_eq!(linked_node_count(&components[0]), 2);
    assert_eq!(linked_node_count(&components[1]), 0);
    assert_eq!(linked_node_count(&components[2]), 0);

    let (_, size) = largest_component(&components).unwrap();
    assert_eq!(size, 2);

    // All-zero input: every component is an all-zero matrix and the scan
    // falls back to the first one with size 0.
    let empty = AdjacencyMatrix::zeros(3);
    let empty_components = find_components(&empty);
    assert_eq!(empty_components.len(), 3);
    let (first, size) = largest_component(&empty_components).unwrap();
    assert_eq!(size, 0);
    assert!(std::ptr::eq(first, &empty_components[0]));
}

#[test]
fn clustering_uses_incoming_neighbors() {
    // Asymmetric fixture: 1 -> 0, 2 -> 0, 3 -> 0 and a one-way 1 -> 2.
    // Node 0 has three in-neighbors but zero out-degree; an out-neighbor
    // convention would score 0 without even reaching the pair count.
    let g = AdjacencyMatrix::from_edges(4, &[(1, 0), (2, 0), (3, 0), (1, 2)], false).unwrap();
    let cc = clustering_coefficient(&g, 0).unwrap();
    // k = 3, submatrix sum = 1, halved to 0.5 links: 2 * 0.5 / 6.
    assert!((cc - 1.0 / 6.0).abs() < 1e-12);
}

#[test]
fn clustering_leaderboard_is_stable() {
    // Two triangles: all six nodes tie at 1.0, so the leaderboard is decided
    // by node id.
    let g = two_triangles();
    let scores = clustering_coefficients(&g);
    let top = top_k(&scores, 3);
    assert_eq!(top.len(), 3);
    assert_eq!(top[0].0, 0);
    assert_eq!(top[1].0, 1);
    assert_eq!(top[2].0, 2);
}

fn symmetric_graph() -> impl Strategy<Value = (usize, Vec<(usize, usize)>)> {
    (1usize..16).prop_flat_map(|n| {
        let edges = prop::collection::vec((0..n, 0..n), 0..32);
        (Just(n), edges)
    })
}

proptest! {
    // Property: on symmetric input the decomposition matches a union-find
    // partition, component count included, and connectivity agrees with a
    // single-component decomposition.
    #[test]
    fn prop_components_match_union_find((n, edges) in symmetric_graph()) {
        let g = AdjacencyMatrix::from_edges(n, &edges, true).unwrap();
        let components = find_components(&g);

        let mut oracle = UnionFind::new(n);
        for &(u, v) in &edges {
            oracle.union(u, v);
        }
        let mut roots: Vec<usize> = (0..n).map(|v| oracle.find(v)).collect();
        roots.sort_unstable();
        roots.dedup();
        prop_assert_eq!(components.len(), roots.len());

        // Every node with an edge has a nonzero row in exactly one
        // component, and that row is copied verbatim from the input.
        for v in 0..n {
            if g.out_degree(v) == 0 {
                continue;
            }
            let holders: Vec<&AdjacencyMatrix> = components
                .iter()
                .filter(|c| c.row(v).iter().any(|&w| w != 0.0))
                .collect();
            prop_assert_eq!(holders.len(), 1, "node {} held by {} components", v, holders.len());
            prop_assert_eq!(holders[0].row(v), g.row(v));
        }

        prop_assert_eq!(is_connected(&g), components.len() == 1);
    }

    // Property: a source is at distance zero from itself, and the average
    // distance can never exceed the diameter.
    #[test]
    fn prop_distance_identities((n, edges) in symmetric_graph(), source in 0usize..16) {
        let g = AdjacencyMatrix::from_edges(n, &edges, true).unwrap();
        let source = source % n;

        let lengths = shortest_path_lengths(&g, source).unwrap();
        prop_assert_eq!(lengths.len(), n);
        prop_assert_eq!(lengths[source], 0.0);

        prop_assert!(average_distance(&g) <= diameter(&g) as f64 + 1e-9);
    }

    // Property: coefficients stay in [0, 1] on loop-free 0/1 symmetric
    // matrices. A self-loop puts a node inside its own neighborhood and the
    // pair normalization no longer caps at 1, so loops are filtered out.
    #[test]
    fn prop_clustering_in_unit_interval((n, edges) in symmetric_graph()) {
        let edges: Vec<(usize, usize)> = edges.into_iter().filter(|&(u, v)| u != v).collect();
        let g = AdjacencyMatrix::from_edges(n, &edges, true).unwrap();
        for (node, cc) in clustering_coefficients(&g).iter().enumerate() {
            prop_assert!((0.0..=1.0).contains(cc), "node {} scored {}", node, cc);
        }
    }
}
