//! Coarse-to-fine transfer of positions.

use super::coarsen::Contraction;
use crate::error::{Error, Result};
use crate::positions::Positions;
use crate::rng::XorShift64Star;
use sirenia_graph::Graph;

/// Places every vertex of `fine` on its coarse parent, offset by `U(-jitter, jitter)` per
/// coordinate.
pub fn propagate_positions(
    fine: &Graph,
    assignment: &[usize],
    coarse_positions: &Positions,
    jitter: f64,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    let n = fine.vertex_count();
    if assignment.len() != n {
        return Err(Error::LengthMismatch {
            what: "assignment",
            expected: n,
            got: assignment.len(),
        });
    }

    let dim = coarse_positions.dim();
    let mut positions = Positions::zeros(n, dim);
    for (v, &parent) in assignment.iter().enumerate() {
        if parent >= coarse_positions.len() {
            return Err(Error::AssignmentOutOfRange {
                vertex: v,
                coarse: parent,
                coarse_count: coarse_positions.len(),
            });
        }
        let row = positions.get_mut(v);
        row.copy_from_slice(coarse_positions.get(parent));
        if jitter > 0.0 {
            for x in row.iter_mut() {
                *x += jitter * rng.next_f64_signed();
            }
        }
    }
    Ok(positions)
}

/// Propagation across an independent-set contraction.
///
/// Set members land exactly on their coarse parent. Every other vertex is then placed at the mean
/// of its set-member neighbours, offset by `U(-jitter, jitter)` per coordinate.
pub fn propagate_positions_mivs(
    fine: &Graph,
    assignment: &[usize],
    independent_set: &[bool],
    coarse_positions: &Positions,
    jitter: f64,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    let n = fine.vertex_count();
    if independent_set.len() != n {
        return Err(Error::LengthMismatch {
            what: "independent set mask",
            expected: n,
            got: independent_set.len(),
        });
    }
    let mut positions = propagate_positions(fine, assignment, coarse_positions, 0.0, rng)?;

    let view = fine.undirected();
    let dim = positions.dim();
    let mut mean = vec![0.0; dim];
    for v in 0..n {
        if independent_set[v] {
            continue;
        }
        mean.iter_mut().for_each(|m| *m = 0.0);
        let mut anchors = 0usize;
        for w in view.neighbors(v) {
            if !independent_set[w] {
                continue;
            }
            for (m, x) in mean.iter_mut().zip(positions.get(w)) {
                *m += x;
            }
            anchors += 1;
        }
        if anchors == 0 {
            return Err(Error::UnanchoredVertex { vertex: v });
        }

        let row = positions.get_mut(v);
        for (x, m) in row.iter_mut().zip(&mean) {
            *x = m / anchors as f64;
            if jitter > 0.0 {
                *x += jitter * rng.next_f64_signed();
            }
        }
    }
    Ok(positions)
}

/// Dispatches on the contraction kind.
pub fn propagate(
    fine: &Graph,
    contraction: &Contraction,
    coarse_positions: &Positions,
    jitter: f64,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    match &contraction.independent_set {
        Some(set) => propagate_positions_mivs(
            fine,
            &contraction.assignment,
            set,
            coarse_positions,
            jitter,
            rng,
        ),
        None => propagate_positions(
            fine,
            &contraction.assignment,
            coarse_positions,
            jitter,
            rng,
        ),
    }
}
