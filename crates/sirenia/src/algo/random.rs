use super::{Extent, RandomOptions, validate_dim, validate_shape};
use crate::error::Result;
use crate::positions::{LayoutResult, Positions};
use crate::rng::XorShift64Star;
use sirenia_graph::Graph;

pub fn layout(graph: &Graph, opts: &RandomOptions) -> Result<LayoutResult> {
    opts.validate()?;
    let mut rng = XorShift64Star::new(opts.random_seed);
    let positions = random_layout(
        graph.vertex_count(),
        opts.shape.as_deref(),
        opts.dim,
        &mut rng,
    )?;
    Ok(LayoutResult { positions })
}

/// Places `n` points uniformly inside an axis-aligned box.
///
/// Without a shape every axis spans `[0, sqrt(n))`. Coordinates are drawn one axis at a time,
/// all vertices for the first axis, then all for the second, and so on.
pub fn random_layout(
    n: usize,
    shape: Option<&[Extent]>,
    dim: usize,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    validate_dim(dim)?;
    let bounds: Vec<(f64, f64)> = match shape {
        Some(shape) => {
            validate_shape(shape, dim)?;
            shape.iter().map(|e| e.bounds()).collect()
        }
        None => vec![(0.0, (n as f64).sqrt()); dim],
    };

    let mut positions = Positions::zeros(n, dim);
    for (axis, &(low, high)) in bounds.iter().enumerate() {
        for v in 0..n {
            positions.get_mut(v)[axis] = rng.uniform(low, high);
        }
    }
    Ok(positions)
}
