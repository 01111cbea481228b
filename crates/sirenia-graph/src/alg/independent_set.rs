use crate::UndirectedView;

/// Greedy maximal independent vertex set.
///
/// With `prefer_high_degree` vertices are considered by decreasing degree (ties by index), which
/// makes hubs the aggregation centres; otherwise by index. The result is maximal: every visible
/// vertex outside the set has at least one neighbour inside it, unless it only has self-loops.
pub fn maximal_independent_set(view: UndirectedView<'_>, prefer_high_degree: bool) -> Vec<bool> {
    let n = view.graph().vertex_count();
    let mut order: Vec<usize> = view.vertices().collect();
    if prefer_high_degree {
        order.sort_by_key(|&v| (std::cmp::Reverse(view.degree(v)), v));
    }

    let mut in_set: Vec<bool> = vec![false; n];
    let mut blocked: Vec<bool> = vec![false; n];
    for v in order {
        if blocked[v] {
            continue;
        }
        in_set[v] = true;
        blocked[v] = true;
        for w in view.neighbors(v) {
            blocked[w] = true;
        }
    }
    in_set
}
