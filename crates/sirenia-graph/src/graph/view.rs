//! Non-owning undirected views over a [`Graph`](super::Graph).

use super::Graph;
use crate::error::{Error, Result};

/// Undirected, optionally filtered view of a graph.
///
/// A vertex filtered out of the view has no incident edges; an edge is visible only when the
/// edge filter keeps it and both of its endpoints are visible.
#[derive(Debug, Clone, Copy)]
pub struct UndirectedView<'a> {
    graph: &'a Graph,
    vertex_filter: Option<&'a [bool]>,
    edge_filter: Option<&'a [bool]>,
}

impl<'a> UndirectedView<'a> {
    pub(super) fn new(graph: &'a Graph) -> Self {
        Self {
            graph,
            vertex_filter: None,
            edge_filter: None,
        }
    }

    pub fn graph(&self) -> &'a Graph {
        self.graph
    }

    pub fn with_vertex_filter(self, mask: &'a [bool]) -> Result<Self> {
        if mask.len() != self.graph.vertex_count() {
            return Err(Error::LengthMismatch {
                what: "vertex filter",
                expected: self.graph.vertex_count(),
                got: mask.len(),
            });
        }
        Ok(Self {
            vertex_filter: Some(mask),
            ..self
        })
    }

    pub fn with_edge_filter(self, mask: &'a [bool]) -> Result<Self> {
        if mask.len() != self.graph.edge_count() {
            return Err(Error::LengthMismatch {
                what: "edge filter",
                expected: self.graph.edge_count(),
                got: mask.len(),
            });
        }
        Ok(Self {
            edge_filter: Some(mask),
            ..self
        })
    }

    /// Drops both filters, keeping the underlying graph.
    pub fn unfiltered(self) -> Self {
        Self::new(self.graph)
    }

    pub fn contains_vertex(&self, v: usize) -> bool {
        v < self.graph.vertex_count() && self.vertex_filter.is_none_or(|m| m[v])
    }

    pub fn contains_edge(&self, edge: usize) -> bool {
        let Some((u, v)) = self.graph.edge(edge) else {
            return false;
        };
        self.edge_filter.is_none_or(|m| m[edge])
            && self.contains_vertex(u)
            && self.contains_vertex(v)
    }

    pub fn vertices(&self) -> impl Iterator<Item = usize> + 'a {
        let this = *self;
        (0..self.graph.vertex_count()).filter(move |&v| this.contains_vertex(v))
    }

    pub fn vertex_count(&self) -> usize {
        match self.vertex_filter {
            None => self.graph.vertex_count(),
            Some(m) => m.iter().filter(|&&keep| keep).count(),
        }
    }

    /// Visible edges as `(edge, source, target)`, in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, usize)> + 'a {
        let this = *self;
        self.graph
            .edges()
            .iter()
            .enumerate()
            .filter(move |&(e, _)| this.contains_edge(e))
            .map(|(e, &(u, v))| (e, u, v))
    }

    /// Visible incident edges of `v` as `(neighbor, edge)`.
    pub fn incident(&self, v: usize) -> impl Iterator<Item = (usize, usize)> + 'a {
        let this = *self;
        let slice: &'a [(usize, usize)] = if self.contains_vertex(v) {
            self.graph.undirected_adj().incident(v)
        } else {
            &[]
        };
        slice.iter().copied().filter(move |&(w, e)| {
            this.edge_filter.is_none_or(|m| m[e]) && this.contains_vertex(w)
        })
    }

    pub fn neighbors(&self, v: usize) -> impl Iterator<Item = usize> + 'a {
        self.incident(v).map(|(w, _)| w)
    }

    pub fn degree(&self, v: usize) -> usize {
        self.incident(v).count()
    }
}
