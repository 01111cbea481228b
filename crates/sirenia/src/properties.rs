use crate::error::{Error, Result};
use crate::positions::Positions;
use sirenia_graph::Graph;

/// Optional per-vertex and per-edge inputs of a layout call, indexed like the graph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Properties<'a> {
    /// Vertex masses for repulsion; `1.0` when absent.
    pub vertex_weight: Option<&'a [f64]>,
    /// Edge weights for attraction and matching; `1.0` when absent.
    pub edge_weight: Option<&'a [f64]>,
    /// Vertices that keep their initial position.
    pub pin: Option<&'a [bool]>,
    /// Initial positions; a seeded random layout is used when absent.
    pub positions: Option<&'a Positions>,
}

impl Properties<'_> {
    pub fn validate(&self, graph: &Graph, dim: usize) -> Result<()> {
        let n = graph.vertex_count();
        if let Some(w) = self.vertex_weight {
            check_len("vertex weight", n, w.len())?;
            check_weights("vertexWeight", w)?;
        }
        if let Some(w) = self.edge_weight {
            check_len("edge weight", graph.edge_count(), w.len())?;
            check_weights("edgeWeight", w)?;
        }
        if let Some(pin) = self.pin {
            check_len("pin mask", n, pin.len())?;
        }
        if let Some(p) = self.positions {
            check_len("initial positions", n, p.len())?;
            if p.dim() != dim {
                return Err(Error::PositionDimension {
                    expected: dim,
                    got: p.dim(),
                });
            }
        }
        Ok(())
    }
}

fn check_len(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(Error::LengthMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}

fn check_weights(name: &'static str, weights: &[f64]) -> Result<()> {
    match weights.iter().position(|w| !(w.is_finite() && *w >= 0.0)) {
        Some(idx) => Err(Error::InvalidOption {
            name,
            reason: format!("weight at index {idx} is {}", weights[idx]),
        }),
        None => Ok(()),
    }
}
