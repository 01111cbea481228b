#![forbid(unsafe_code)]

//! Multilevel force-directed graph layout.
//!
//! Large graphs are contracted into a hierarchy of smaller graphs (edge contraction, maximal
//! independent vertex sets, or a hybrid that switches between them), laid out from the coarsest
//! level down with a Barnes-Hut spring-electrical kernel, and refined level by level.
//!
//! Graph storage and the contraction primitives live in `sirenia-graph`.

pub mod algo;
pub mod error;
mod positions;
mod properties;
pub mod rng;

pub use algo::{
    Algorithm, CoarseningMethod, CoarseningOptions, Extent, PlacementOptions, RandomOptions,
    SfdpOptions,
};
pub use error::{Error, Result};
pub use positions::{LayoutResult, Positions};
pub use properties::Properties;
pub use sirenia_graph::{Graph, GraphOptions};

/// Headless layout entry point.
pub fn layout(
    graph: &Graph,
    props: &Properties<'_>,
    algorithm: &Algorithm,
) -> Result<LayoutResult> {
    match algorithm {
        Algorithm::Sfdp(opts) => algo::sfdp::layout(graph, props, opts),
        Algorithm::Random(opts) => algo::random::layout(graph, opts),
    }
}
