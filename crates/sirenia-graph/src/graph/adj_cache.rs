//! Adjacency cache used by [`Graph`](super::Graph).
//!
//! Coarsening and force evaluation walk the neighbourhood of every vertex once per sweep, so the
//! undirected incidence lists are flattened into a single CSR buffer and rebuilt lazily after
//! mutation.

#[derive(Debug, Clone)]
pub(in crate::graph) struct UndirectedAdjCache {
    offsets: Vec<usize>,
    // (neighbor, edge index) pairs; self-loops appear once.
    incident: Vec<(usize, usize)>,
}

impl UndirectedAdjCache {
    pub(in crate::graph) fn build(vertex_count: usize, edges: &[(usize, usize)]) -> Self {
        let mut degree: Vec<usize> = vec![0; vertex_count];
        for &(u, v) in edges {
            degree[u] += 1;
            if u != v {
                degree[v] += 1;
            }
        }

        let mut offsets: Vec<usize> = Vec::with_capacity(vertex_count + 1);
        offsets.push(0);
        let mut acc = 0usize;
        for d in &degree {
            acc += d;
            offsets.push(acc);
        }

        let mut cursor: Vec<usize> = offsets[..vertex_count].to_vec();
        let mut incident: Vec<(usize, usize)> = vec![(0, 0); acc];
        for (e, &(u, v)) in edges.iter().enumerate() {
            incident[cursor[u]] = (v, e);
            cursor[u] += 1;
            if u != v {
                incident[cursor[v]] = (u, e);
                cursor[v] += 1;
            }
        }

        Self { offsets, incident }
    }

    pub(in crate::graph) fn incident(&self, v: usize) -> &[(usize, usize)] {
        let start = self.offsets[v];
        let end = self.offsets[v + 1];
        &self.incident[start..end]
    }
}
