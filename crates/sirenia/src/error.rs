#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Graph(#[from] sirenia_graph::Error),
    #[error("invalid option `{name}`: {reason}")]
    InvalidOption { name: &'static str, reason: String },
    #[error("shape has {got} extents but the layout has {expected} dimensions")]
    ShapeDimension { expected: usize, got: usize },
    #[error("{what} has length {got}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("positions have {got} coordinates per vertex, expected {expected}")]
    PositionDimension { expected: usize, got: usize },
    #[error("pinned vertices are only supported with multilevel placement disabled")]
    PinnedMultilevel,
    #[error("vertex {vertex} maps to coarse vertex {coarse}, but the coarse layout has {coarse_count} vertices")]
    AssignmentOutOfRange {
        vertex: usize,
        coarse: usize,
        coarse_count: usize,
    },
    #[error("vertex {vertex} is outside the independent set and has no neighbour inside it")]
    UnanchoredVertex { vertex: usize },
    #[error("hierarchy level {level} has no contraction towards the next finer level")]
    HierarchyInconsistent { level: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
