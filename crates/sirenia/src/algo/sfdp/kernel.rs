//! Spring-electrical placement at a single resolution.
//!
//! Every sweep computes, for each vertex, the sum of
//! - repulsion `C * K^(1 + p) * w_u * w_v / |d|^p` from every other vertex (Barnes-Hut approximated),
//! - attraction `w_e * |d|^2 / K` along each incident edge,
//!
//! and moves each free vertex by `step` along its normalized force.

use super::tree::{OrthantTree, Repulsion};
use crate::positions::Positions;
use sirenia_graph::UndirectedView;

/// Sweep budget used when `max_iter` is `0`.
pub const UNBOUNDED_ITERATION_CAP: usize = 10_000;

/// Consecutive energy decreases needed before adaptive cooling lengthens the step again.
const PROGRESS_PERIOD: usize = 5;

#[derive(Debug, Clone, Copy)]
pub struct KernelParams {
    pub c: f64,
    pub k: f64,
    pub p: f64,
    pub theta: f64,
    pub init_step: f64,
    pub cooling_step: f64,
    pub adaptive_cooling: bool,
    pub max_level: usize,
    pub epsilon: f64,
    pub max_iter: usize,
}

/// Per-vertex and per-edge inputs; absent weights are `1.0`, absent pins are free.
#[derive(Debug, Clone, Copy, Default)]
pub struct KernelInput<'a> {
    pub vertex_weight: Option<&'a [f64]>,
    pub edge_weight: Option<&'a [f64]>,
    pub pin: Option<&'a [bool]>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacementStats {
    pub iterations: usize,
    /// `false` when the sweep budget ran out first.
    pub converged: bool,
    pub final_step: f64,
}

struct SpringElectrical {
    /// `C * K^(1 + p)`.
    strength: f64,
    p: f64,
    /// Separation used for coincident points.
    nudge: f64,
}

impl Repulsion for SpringElectrical {
    fn accumulate(&self, x: &[f64], weight_v: f64, y: &[f64], weight_u: f64, force: &mut [f64]) {
        let dist: f64 = x
            .iter()
            .zip(y)
            .map(|(a, b)| (a - b) * (a - b))
            .sum::<f64>()
            .sqrt();
        let scale = self.strength * weight_v * weight_u / dist.powf(self.p + 1.0);
        for (i, f) in force.iter_mut().enumerate() {
            *f += (x[i] - y[i]) * scale;
        }
    }

    fn coincident(&self, weight_v: f64, weight_u: f64, away: f64, force: &mut [f64]) {
        // Separate along the first axis.
        force[0] += away * self.strength * weight_v * weight_u / self.nudge.powf(self.p);
    }
}

/// Mean Euclidean length of the non-loop edges of `view`; `0.0` without such edges.
pub fn average_edge_length(view: UndirectedView<'_>, positions: &Positions) -> f64 {
    let mut total = 0.0;
    let mut count = 0usize;
    for (_, u, v) in view.edges() {
        if u == v {
            continue;
        }
        total += positions.distance(u, v);
        count += 1;
    }
    if count == 0 {
        return 0.0;
    }
    total / count as f64
}

/// Runs force-directed sweeps on `positions` in place.
pub fn place(
    view: UndirectedView<'_>,
    positions: &mut Positions,
    input: &KernelInput<'_>,
    params: &KernelParams,
) -> PlacementStats {
    let n = positions.len();
    let dim = positions.dim();
    let pinned = |v: usize| input.pin.is_some_and(|pin| pin[v]);
    let mut step = params.init_step;

    if (0..n).all(pinned) {
        return PlacementStats {
            iterations: 0,
            converged: true,
            final_step: step,
        };
    }

    let unit_weights: Vec<f64>;
    let vertex_weight: &[f64] = match input.vertex_weight {
        Some(w) => w,
        None => {
            unit_weights = vec![1.0; n];
            &unit_weights
        }
    };
    let model = SpringElectrical {
        strength: params.c * params.k.powf(1.0 + params.p),
        p: params.p,
        nudge: params.k * 1e-3,
    };
    let cap = if params.max_iter == 0 {
        UNBOUNDED_ITERATION_CAP
    } else {
        params.max_iter
    };

    let mut forces = vec![0.0; n * dim];
    let mut energy_prev = f64::INFINITY;
    let mut progress = 0usize;

    for iteration in 1..=cap {
        forces.iter_mut().for_each(|f| *f = 0.0);

        let tree = OrthantTree::build(positions, vertex_weight, params.max_level);
        for v in 0..n {
            if pinned(v) {
                continue;
            }
            tree.repulsion_on(
                v,
                positions,
                vertex_weight,
                params.theta,
                &model,
                &mut forces[v * dim..(v + 1) * dim],
            );
        }

        for (e, u, v) in view.edges() {
            if u == v {
                continue;
            }
            let w = input.edge_weight.map_or(1.0, |w| w[e]);
            let dist = positions.distance(u, v);
            let scale = w * dist / params.k;
            for i in 0..dim {
                let pull = (positions.get(u)[i] - positions.get(v)[i]) * scale;
                forces[u * dim + i] -= pull;
                forces[v * dim + i] += pull;
            }
        }

        let mut energy = 0.0;
        let mut moved = 0usize;
        let mut displacement = 0.0;
        for v in 0..n {
            if pinned(v) {
                continue;
            }
            let f = &forces[v * dim..(v + 1) * dim];
            let norm2: f64 = f.iter().map(|x| x * x).sum();
            let norm = norm2.sqrt();
            if !(norm.is_finite() && norm > 0.0) {
                continue;
            }
            energy += norm2;
            for (x, fi) in positions.get_mut(v).iter_mut().zip(f) {
                *x += step * fi / norm;
            }
            moved += 1;
            displacement += step;
        }

        let converged = moved == 0 || displacement / (moved as f64) < params.epsilon * params.k;

        if params.adaptive_cooling {
            if energy < energy_prev {
                progress += 1;
                if progress >= PROGRESS_PERIOD {
                    progress = 0;
                    step /= params.cooling_step;
                }
            } else {
                progress = 0;
                step *= params.cooling_step;
            }
        } else {
            step *= params.cooling_step;
        }
        energy_prev = energy;

        if converged {
            return PlacementStats {
                iterations: iteration,
                converged: true,
                final_step: step,
            };
        }
    }

    PlacementStats {
        iterations: cap,
        converged: false,
        final_step: step,
    }
}
