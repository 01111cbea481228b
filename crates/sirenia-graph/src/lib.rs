#![forbid(unsafe_code)]

//! Index-based graph container used by `sirenia`.
//!
//! Vertices are dense `usize` indices and edges keep their insertion order, so every per-vertex or
//! per-edge property is a plain slice indexed the same way. The [`alg`] module carries the graph
//! primitives the multilevel layout needs while coarsening: heuristic matchings, maximal
//! independent sets, component labelling and condensation into quotient graphs.

pub mod alg;
pub mod error;
mod graph;

pub use error::{Error, Result};
pub use graph::{Graph, GraphOptions, UndirectedView};
