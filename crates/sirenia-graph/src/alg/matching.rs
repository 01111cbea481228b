use crate::UndirectedView;
use crate::error::{Error, Result};
use std::cmp::Ordering;

/// Greedy heavy-edge matching.
///
/// Vertices are visited by increasing degree (ties by index), and each unmatched vertex is paired
/// with the unmatched neighbour across its heaviest visible edge. Low-degree vertices go first so
/// that leaves are not starved by hubs. Without weights every edge weighs `1.0`.
///
/// Returns an edge mask over the underlying graph's edges. Self-loops are never matched.
pub fn maximum_weight_matching(
    view: UndirectedView<'_>,
    weight: Option<&[f64]>,
) -> Result<Vec<bool>> {
    let g = view.graph();
    if let Some(w) = weight {
        if w.len() != g.edge_count() {
            return Err(Error::LengthMismatch {
                what: "edge weight",
                expected: g.edge_count(),
                got: w.len(),
            });
        }
    }

    let mut order: Vec<(usize, usize)> = view.vertices().map(|v| (view.degree(v), v)).collect();
    order.sort_unstable();

    let mut matched_vertex: Vec<bool> = vec![false; g.vertex_count()];
    let mut matched_edge: Vec<bool> = vec![false; g.edge_count()];

    for (_, v) in order {
        if matched_vertex[v] {
            continue;
        }
        let mut best: Option<(usize, usize, f64)> = None;
        for (w, e) in view.incident(v) {
            if w == v || matched_vertex[w] {
                continue;
            }
            let we = weight.map_or(1.0, |ws| ws[e]);
            let better = match best {
                None => true,
                Some((_, _, bw)) => we.total_cmp(&bw) == Ordering::Greater,
            };
            if better {
                best = Some((w, e, we));
            }
        }
        if let Some((w, e, _)) = best {
            matched_vertex[v] = true;
            matched_vertex[w] = true;
            matched_edge[e] = true;
        }
    }

    Ok(matched_edge)
}

#[cfg(test)]
mod tests {
    use super::maximum_weight_matching;
    use crate::{Graph, GraphOptions};

    fn matched_pairs(g: &Graph, mask: &[bool]) -> Vec<(usize, usize)> {
        g.edges()
            .iter()
            .zip(mask)
            .filter(|(_, m)| **m)
            .map(|(&e, _)| e)
            .collect()
    }

    #[test]
    fn matching_is_vertex_disjoint() {
        let g = Graph::from_edges(
            GraphOptions::default(),
            6,
            [(0, 1), (1, 2), (2, 3), (3, 4), (4, 5), (5, 0), (0, 3)],
        )
        .unwrap();
        let mask = maximum_weight_matching(g.undirected(), None).unwrap();
        let mut seen = [false; 6];
        for (u, v) in matched_pairs(&g, &mask) {
            assert!(!seen[u] && !seen[v], "vertex matched twice");
            seen[u] = true;
            seen[v] = true;
        }
        assert_eq!(seen.iter().filter(|&&s| s).count(), 6);
    }

    #[test]
    fn heavier_edges_win() {
        // 0 - 1 - 2 with the right edge much heavier.
        let g = Graph::from_edges(GraphOptions::default(), 3, [(0, 1), (1, 2)]).unwrap();
        let mask = maximum_weight_matching(g.undirected(), Some(&[1.0, 5.0])).unwrap();
        // Vertex 0 (degree 1) is visited first and only sees edge 0.
        assert_eq!(mask, vec![true, false]);

        let g = Graph::from_edges(GraphOptions::default(), 3, [(1, 0), (1, 2), (0, 2)]).unwrap();
        let mask = maximum_weight_matching(g.undirected(), Some(&[1.0, 1.0, 9.0])).unwrap();
        assert_eq!(mask, vec![false, false, true]);
    }

    #[test]
    fn star_matches_a_single_edge() {
        let g = Graph::from_edges(GraphOptions::default(), 5, (1..5).map(|leaf| (0, leaf))).unwrap();
        let mask = maximum_weight_matching(g.undirected(), None).unwrap();
        assert_eq!(mask.iter().filter(|&&m| m).count(), 1);
    }

    #[test]
    fn rejects_weight_of_wrong_length() {
        let g = Graph::from_edges(GraphOptions::default(), 2, [(0, 1)]).unwrap();
        assert!(maximum_weight_matching(g.undirected(), Some(&[])).is_err());
    }
}
