use crate::UndirectedView;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Components {
    /// Component label per vertex of the underlying graph; `None` for vertices outside the view.
    pub labels: Vec<Option<usize>>,
    /// Vertex count per component label.
    pub sizes: Vec<usize>,
}

impl Components {
    pub fn count(&self) -> usize {
        self.sizes.len()
    }
}

/// Labels connected components in the order their lowest vertex appears.
pub fn label_components(view: UndirectedView<'_>) -> Components {
    let n = view.graph().vertex_count();
    let mut labels: Vec<Option<usize>> = vec![None; n];
    let mut sizes: Vec<usize> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();

    for start in view.vertices() {
        if labels[start].is_some() {
            continue;
        }
        let label = sizes.len();
        let mut size = 0usize;
        labels[start] = Some(label);
        stack.clear();
        stack.push(start);
        while let Some(v) = stack.pop() {
            size += 1;
            for w in view.neighbors(v) {
                if labels[w].is_none() {
                    labels[w] = Some(label);
                    stack.push(w);
                }
            }
        }
        sizes.push(size);
    }

    Components { labels, sizes }
}

/// Copies labels from `sources` to their unlabelled neighbours in one pass.
///
/// Each vertex that is not a source and has no label takes the label of its first labelled source
/// neighbour in adjacency order. Returns the number of vertices that received a label.
pub fn infect_labels(
    view: UndirectedView<'_>,
    labels: &mut [Option<usize>],
    sources: &[bool],
) -> usize {
    let mut infected = 0usize;
    for v in view.vertices() {
        if sources[v] || labels[v].is_some() {
            continue;
        }
        let anchor = view
            .neighbors(v)
            .find(|&w| sources[w] && labels[w].is_some());
        if let Some(w) = anchor {
            labels[v] = labels[w];
            infected += 1;
        }
    }
    infected
}
