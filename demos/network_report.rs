//! End-to-end sketch: load a corpus (or synthesize one) and print a
//! structural report.
//!
//! This walks the whole analysis surface in one pass:
//! - component decomposition and the largest-component size
//! - diameter and average distance of the network
//! - a clustering-coefficient leaderboard via `top_k`

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use relnet::{
    average_distance, clustering_coefficients, diameter, find_components, is_connected,
    largest_component, linked_node_count, load_attack_dataset, top_k, AdjacencyMatrix,
};

/// Seeded two-community graph, dense within blocks, sparse across.
fn sbm_two_block(n: usize, p_in: f64, p_out: f64, seed: u64) -> AdjacencyMatrix {
    assert!(n >= 4);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut matrix = AdjacencyMatrix::zeros(n);
    let half = n / 2;
    for i in 0..n {
        for j in (i + 1)..n {
            let same = (i < half) == (j < half);
            let p = if same { p_in } else { p_out };
            if rng.random::<f64>() < p {
                matrix.set(i, j, 1.0);
                matrix.set(j, i, 1.0);
            }
        }
    }
    matrix
}

fn main() {
    // If you have the attack corpus on disk, point to its directory:
    //
    // RELNET_ATTACK_DIR=/path/to/TerrorAttack cargo run --example network_report
    //
    // Otherwise a seeded two-block graph stands in (realistic topology,
    // deterministic).
    let (graph, source) = if let Ok(dir) = std::env::var("RELNET_ATTACK_DIR") {
        let data = load_attack_dataset(&dir).expect("failed to load RELNET_ATTACK_DIR");
        let graph = data.colocation_matrix().expect("corpus edges reference unknown nodes");
        (graph, format!("attack corpus at {dir} ({} incidents)", data.nodes.len()))
    } else {
        (sbm_two_block(200, 0.08, 0.004, 123), "seeded two-block graph".to_string())
    };

    let n = graph.node_count();
    println!("source: {source}");
    println!("graph: n={n}, connected={}", is_connected(&graph));

    let components = find_components(&graph);
    println!("components: {}", components.len());
    if let Some((largest, size)) = largest_component(&components) {
        println!("largest component: {size} linked nodes (of {})", linked_node_count(&graph));
        println!("largest diameter: {}", diameter(largest));
    }

    println!("diameter: {}", diameter(&graph));
    println!("average distance: {:.4}", average_distance(&graph));

    let scores = clustering_coefficients(&graph);
    println!();
    println!("top-5 by clustering coefficient:");
    for (node, score) in top_k(&scores, 5) {
        println!("  node {node:4}  cc={score:.4}");
    }
}
