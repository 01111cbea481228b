//! Graph container.
//!
//! Vertices are `0..vertex_count()`. Edges are `(source, target)` pairs addressed by insertion
//! index; parallel edges and self-loops are stored as given. Directedness is recorded but the
//! layout code only ever reads a graph through [`Graph::undirected`].

use crate::error::{Error, Result};
use std::cell::OnceCell;
use std::ops::Range;

mod adj_cache;
mod options;
mod view;

use adj_cache::UndirectedAdjCache;
pub use options::GraphOptions;
pub use view::UndirectedView;

#[derive(Debug, Clone, Default)]
pub struct Graph {
    options: GraphOptions,
    vertex_count: usize,
    edges: Vec<(usize, usize)>,

    // Built on first traversal and dropped on mutation, so queries stay on `&self`.
    undirected_adj: OnceCell<UndirectedAdjCache>,
}

impl Graph {
    pub fn new(options: GraphOptions) -> Self {
        Self {
            options,
            vertex_count: 0,
            edges: Vec::new(),
            undirected_adj: OnceCell::new(),
        }
    }

    pub fn with_vertices(options: GraphOptions, vertex_count: usize) -> Self {
        let mut g = Self::new(options);
        g.vertex_count = vertex_count;
        g
    }

    /// Builds a graph with `vertex_count` vertices and the given edges, in order.
    pub fn from_edges<I>(options: GraphOptions, vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut g = Self::with_vertices(options, vertex_count);
        for (u, v) in edges {
            g.add_edge(u, v)?;
        }
        Ok(g)
    }

    pub fn options(&self) -> GraphOptions {
        self.options
    }

    pub fn is_directed(&self) -> bool {
        self.options.directed
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_vertex(&mut self) -> usize {
        self.add_vertices(1).start
    }

    pub fn add_vertices(&mut self, count: usize) -> Range<usize> {
        let start = self.vertex_count;
        self.vertex_count += count;
        self.invalidate_adj();
        start..self.vertex_count
    }

    /// Appends an edge and returns its index.
    pub fn add_edge(&mut self, source: usize, target: usize) -> Result<usize> {
        let edge = self.edges.len();
        for vertex in [source, target] {
            if vertex >= self.vertex_count {
                return Err(Error::MissingEndpoint {
                    edge,
                    vertex,
                    vertex_count: self.vertex_count,
                });
            }
        }
        self.edges.push((source, target));
        self.invalidate_adj();
        Ok(edge)
    }

    pub fn edge(&self, edge: usize) -> Option<(usize, usize)> {
        self.edges.get(edge).copied()
    }

    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Unfiltered view that traverses every edge in both directions.
    pub fn undirected(&self) -> UndirectedView<'_> {
        UndirectedView::new(self)
    }

    fn invalidate_adj(&mut self) {
        self.undirected_adj.take();
    }

    fn undirected_adj(&self) -> &UndirectedAdjCache {
        self.undirected_adj
            .get_or_init(|| UndirectedAdjCache::build(self.vertex_count, &self.edges))
    }
}
