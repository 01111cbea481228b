use crate::error::{Error, Result};
use crate::{Graph, GraphOptions};
use indexmap::IndexSet;
use rustc_hash::FxBuildHasher;

type HashMap<K, V> = hashbrown::HashMap<K, V, FxBuildHasher>;

/// Quotient graph produced by [`condense`].
#[derive(Debug, Clone)]
pub struct Condensation {
    /// Undirected quotient graph; one vertex per distinct partition label.
    pub graph: Graph,
    /// Sum of the fine vertex weights merged into each coarse vertex.
    pub vertex_weight: Vec<f64>,
    /// Sum of the fine edge weights merged into each coarse edge.
    pub edge_weight: Vec<f64>,
    /// Coarse vertex of every fine vertex.
    pub assignment: Vec<usize>,
}

/// Contracts every partition class of `graph` into a single vertex.
///
/// Coarse vertices are numbered in the order their label first appears when scanning fine
/// vertices by index. Edges inside a class disappear; parallel edges between two classes are
/// merged and their weights summed. Edge direction is ignored.
pub fn condense(
    graph: &Graph,
    partition: &[usize],
    vertex_weight: &[f64],
    edge_weight: &[f64],
) -> Result<Condensation> {
    check_len("partition", graph.vertex_count(), partition.len())?;
    check_len("vertex weight", graph.vertex_count(), vertex_weight.len())?;
    check_len("edge weight", graph.edge_count(), edge_weight.len())?;

    let mut classes: IndexSet<usize, FxBuildHasher> = IndexSet::default();
    let assignment: Vec<usize> = partition
        .iter()
        .map(|&label| classes.insert_full(label).0)
        .collect();

    let mut coarse_vertex_weight: Vec<f64> = vec![0.0; classes.len()];
    for (v, &c) in assignment.iter().enumerate() {
        coarse_vertex_weight[c] += vertex_weight[v];
    }

    let mut coarse = Graph::with_vertices(GraphOptions { directed: false }, classes.len());
    let mut coarse_edge_weight: Vec<f64> = Vec::new();
    let mut edge_index: HashMap<(usize, usize), usize> = HashMap::default();
    for (e, u, v) in graph.undirected().edges() {
        let (cu, cv) = (assignment[u], assignment[v]);
        if cu == cv {
            continue;
        }
        let key = (cu.min(cv), cu.max(cv));
        match edge_index.get(&key) {
            Some(&ce) => coarse_edge_weight[ce] += edge_weight[e],
            None => {
                let ce = coarse.add_edge(key.0, key.1)?;
                edge_index.insert(key, ce);
                coarse_edge_weight.push(edge_weight[e]);
            }
        }
    }

    Ok(Condensation {
        graph: coarse,
        vertex_weight: coarse_vertex_weight,
        edge_weight: coarse_edge_weight,
        assignment,
    })
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::LengthMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
