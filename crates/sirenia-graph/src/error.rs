#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("edge {edge} references missing vertex {vertex} (graph has {vertex_count} vertices)")]
    MissingEndpoint {
        edge: usize,
        vertex: usize,
        vertex_count: usize,
    },
    #[error("{what} has length {got}, expected {expected}")]
    LengthMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("vertex {vertex} was left without a partition label")]
    UnlabeledVertex { vertex: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
