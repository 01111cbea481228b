pub mod random;
pub mod sfdp;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Largest supported layout dimension. The Barnes-Hut tree fans out into `2^dim` children.
pub const MAX_DIMENSION: usize = 8;

#[derive(Debug, Clone)]
pub enum Algorithm {
    /// Multilevel spring-electrical placement.
    Sfdp(SfdpOptions),
    /// Uniform random placement inside an axis-aligned box.
    Random(RandomOptions),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SfdpOptions {
    /// Seed of the single random stream used for initial layouts and propagation jitter.
    pub random_seed: u64,
    pub dim: usize,
    /// `None` enables the multilevel scheme only above
    /// [`MULTILEVEL_VERTEX_FLOOR`](sfdp::MULTILEVEL_VERTEX_FLOOR) vertices.
    pub multilevel: Option<bool>,
    pub placement: PlacementOptions,
    pub coarsening: CoarseningOptions,
}

impl Default for SfdpOptions {
    fn default() -> Self {
        Self {
            random_seed: 0,
            dim: 2,
            multilevel: None,
            placement: PlacementOptions::default(),
            coarsening: CoarseningOptions::default(),
        }
    }
}

impl SfdpOptions {
    pub fn validate(&self) -> Result<()> {
        validate_dim(self.dim)?;
        self.placement.validate()?;
        self.coarsening.validate()
    }
}

/// Parameters of a single-level placement run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlacementOptions {
    /// Relative strength of repulsion against attraction.
    pub c: f64,
    /// Ideal edge length; defaults to the average edge length of the initial layout.
    pub k: Option<f64>,
    /// Repulsion decays as `1 / d^p`.
    pub p: f64,
    /// Barnes-Hut opening criterion.
    pub theta: f64,
    /// Initial step length; defaults to `10 * max(average edge length, k)`.
    pub init_step: Option<f64>,
    pub cooling_step: f64,
    pub adaptive_cooling: bool,
    /// Maximum depth of the Barnes-Hut tree.
    pub max_level: usize,
    /// Convergence threshold, relative to `k`.
    pub epsilon: f64,
    /// Sweep cap; `0` runs until convergence.
    pub max_iter: usize,
}

impl Default for PlacementOptions {
    fn default() -> Self {
        Self {
            c: 0.2,
            k: None,
            p: 2.0,
            theta: 0.6,
            init_step: None,
            cooling_step: 0.9,
            adaptive_cooling: true,
            max_level: 11,
            epsilon: 0.1,
            max_iter: 0,
        }
    }
}

impl PlacementOptions {
    /// Deepest Barnes-Hut tree we are willing to build regardless of `max_level`.
    pub const MAX_TREE_DEPTH: usize = 32;

    pub fn validate(&self) -> Result<()> {
        positive("c", self.c)?;
        positive("p", self.p)?;
        non_negative("theta", self.theta)?;
        non_negative("epsilon", self.epsilon)?;
        if let Some(k) = self.k {
            positive("k", k)?;
        }
        if let Some(step) = self.init_step {
            positive("initStep", step)?;
        }
        unit_interval("coolingStep", self.cooling_step)?;
        if self.max_level > Self::MAX_TREE_DEPTH {
            return Err(Error::InvalidOption {
                name: "maxLevel",
                reason: format!(
                    "{} exceeds the supported tree depth {}",
                    self.max_level,
                    Self::MAX_TREE_DEPTH
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoarseningMethod {
    /// Edge contraction only; stops once matchings stop shrinking the graph.
    Ec,
    /// Maximal independent vertex set aggregation only.
    Mivs,
    /// Edge contraction, switching to independent sets when contraction stalls.
    #[default]
    Hybrid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CoarseningOptions {
    pub method: CoarseningMethod,
    /// An independent-set step keeping more than this share of vertices ends coarsening.
    pub mivs_thres: f64,
    /// An edge-contraction step keeping more than this share of vertices counts as stalled.
    pub ec_thres: f64,
    /// Feed aggregated vertex/edge weights to every level and keep `k` constant across levels.
    pub weighted_coarse: bool,
    /// Upper bound on the number of levels, the original graph included.
    pub max_levels: Option<usize>,
}

impl Default for CoarseningOptions {
    fn default() -> Self {
        Self {
            method: CoarseningMethod::Hybrid,
            mivs_thres: 0.9,
            ec_thres: 0.75,
            weighted_coarse: false,
            max_levels: None,
        }
    }
}

impl CoarseningOptions {
    pub fn validate(&self) -> Result<()> {
        unit_interval("mivsThres", self.mivs_thres)?;
        unit_interval("ecThres", self.ec_thres)?;
        if self.max_levels == Some(0) {
            return Err(Error::InvalidOption {
                name: "maxLevels",
                reason: "at least one level is required".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RandomOptions {
    pub random_seed: u64,
    pub dim: usize,
    /// One extent per dimension; a box of side `sqrt(n)` when absent.
    pub shape: Option<Vec<Extent>>,
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            random_seed: 0,
            dim: 2,
            shape: None,
        }
    }
}

impl RandomOptions {
    pub fn validate(&self) -> Result<()> {
        validate_dim(self.dim)?;
        if let Some(shape) = &self.shape {
            validate_shape(shape, self.dim)?;
        }
        Ok(())
    }
}

/// Extent of a random layout along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Extent {
    /// Range from zero to the given value, whichever side of zero it lies on.
    Size(f64),
    /// Range between two values, in either order.
    Range(f64, f64),
}

impl Extent {
    /// `(low, high)` with `low <= high`.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Extent::Size(s) => (s.min(0.0), s.max(0.0)),
            Extent::Range(a, b) => (a.min(b), a.max(b)),
        }
    }
}

pub(crate) fn validate_dim(dim: usize) -> Result<()> {
    if dim == 0 || dim > MAX_DIMENSION {
        return Err(Error::InvalidOption {
            name: "dim",
            reason: format!("{dim} is outside 1..={MAX_DIMENSION}"),
        });
    }
    Ok(())
}

pub(crate) fn validate_shape(shape: &[Extent], dim: usize) -> Result<()> {
    if shape.len() != dim {
        return Err(Error::ShapeDimension {
            expected: dim,
            got: shape.len(),
        });
    }
    for extent in shape {
        let (low, high) = extent.bounds();
        if !(low.is_finite() && high.is_finite()) {
            return Err(Error::InvalidOption {
                name: "shape",
                reason: format!("extent {extent:?} is not finite"),
            });
        }
    }
    Ok(())
}

fn positive(name: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v > 0.0 {
        return Ok(());
    }
    Err(Error::InvalidOption {
        name,
        reason: format!("{v} must be finite and positive"),
    })
}

fn non_negative(name: &'static str, v: f64) -> Result<()> {
    if v.is_finite() && v >= 0.0 {
        return Ok(());
    }
    Err(Error::InvalidOption {
        name,
        reason: format!("{v} must be finite and non-negative"),
    })
}

fn unit_interval(name: &'static str, v: f64) -> Result<()> {
    if v > 0.0 && v <= 1.0 {
        return Ok(());
    }
    Err(Error::InvalidOption {
        name,
        reason: format!("{v} must lie in (0, 1]"),
    })
}
