//! Multilevel spring-electrical layout.
//!
//! The graph is contracted into a hierarchy of ever smaller graphs. The coarsest one gets a random
//! layout, and each level is refined by a single-level placement before its positions are
//! carried down to the next finer level.

pub mod coarsen;
pub mod kernel;
pub mod propagate;
pub mod schedule;
mod tree;

use crate::algo::SfdpOptions;
use crate::algo::random::random_layout;
use crate::error::{Error, Result};
use crate::positions::{LayoutResult, Positions};
use crate::properties::Properties;
use crate::rng::XorShift64Star;
use coarsen::build_hierarchy;
use kernel::{KernelInput, KernelParams, average_edge_length, place};
use schedule::{ScaleSeries, ideal_length_or_fallback};
use sirenia_graph::Graph;
use tracing::{debug, trace};

/// With `multilevel: None`, graphs above this many vertices are laid out through a hierarchy.
pub const MULTILEVEL_VERTEX_FLOOR: usize = 1000;

/// Graphs up to this many vertices use exact all-pairs repulsion.
pub const FLAT_TREE_VERTEX_FLOOR: usize = 50;

/// Propagation jitter as a fraction of the coarser level's ideal length.
const JITTER_FRACTION: f64 = 1e-3;

/// Where a driver invocation sits in the hierarchy walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reentry {
    /// Called by the user.
    TopLevel,
    /// Refinement of hierarchy level `index` (coarsest is `0`); never builds another hierarchy.
    Level { index: usize },
}

pub fn layout(graph: &Graph, props: &Properties<'_>, opts: &SfdpOptions) -> Result<LayoutResult> {
    let positions = sfdp_layout(graph, props, opts)?;
    Ok(LayoutResult { positions })
}

/// Lays out `graph` and returns one position per vertex.
pub fn sfdp_layout(graph: &Graph, props: &Properties<'_>, opts: &SfdpOptions) -> Result<Positions> {
    opts.validate()?;
    props.validate(graph, opts.dim)?;

    let n = graph.vertex_count();
    let multilevel = opts.multilevel.unwrap_or(n > MULTILEVEL_VERTEX_FLOOR);
    if multilevel && props.pin.is_some_and(|pin| pin.iter().any(|&p| p)) {
        return Err(Error::PinnedMultilevel);
    }

    let mut rng = XorShift64Star::new(opts.random_seed);
    run(graph, props, opts, multilevel, Reentry::TopLevel, &mut rng)
}

fn run(
    graph: &Graph,
    props: &Properties<'_>,
    opts: &SfdpOptions,
    multilevel: bool,
    reentry: Reentry,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    let n = graph.vertex_count();
    if n <= 2 {
        return Ok(trivial_positions(n, opts.dim));
    }
    if reentry != Reentry::TopLevel || !multilevel {
        return single_level(graph, props, opts, reentry, rng);
    }
    multilevel_walk(graph, props, opts, rng)
}

/// Layouts for graphs too small to need placement: the origin, then the all-ones corner.
fn trivial_positions(n: usize, dim: usize) -> Positions {
    let mut positions = Positions::zeros(n, dim);
    if n == 2 {
        positions.get_mut(1).iter_mut().for_each(|x| *x = 1.0);
    }
    positions
}

fn single_level(
    graph: &Graph,
    props: &Properties<'_>,
    opts: &SfdpOptions,
    reentry: Reentry,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    let n = graph.vertex_count();
    let mut positions = match props.positions {
        Some(p) => p.clone(),
        None => random_layout(n, None, opts.dim, rng)?,
    };

    let view = graph.undirected();
    let placement = &opts.placement;
    let avg = average_edge_length(view, &positions);
    let k = placement.k.unwrap_or_else(|| ideal_length_or_fallback(avg));
    let init_step = placement.init_step.unwrap_or(10.0 * avg.max(k));
    let max_level = if n <= FLAT_TREE_VERTEX_FLOOR {
        0
    } else {
        placement.max_level
    };

    let params = KernelParams {
        c: placement.c,
        k,
        p: placement.p,
        theta: placement.theta,
        init_step,
        cooling_step: placement.cooling_step,
        adaptive_cooling: placement.adaptive_cooling,
        max_level,
        epsilon: placement.epsilon,
        max_iter: placement.max_iter,
    };
    let input = KernelInput {
        vertex_weight: props.vertex_weight,
        edge_weight: props.edge_weight,
        pin: props.pin,
    };
    let stats = place(view, &mut positions, &input, &params);
    trace!(
        ?reentry,
        vertices = n,
        k,
        iterations = stats.iterations,
        converged = stats.converged,
        final_step = stats.final_step,
        "placement finished"
    );
    Ok(positions)
}

fn multilevel_walk(
    graph: &Graph,
    props: &Properties<'_>,
    opts: &SfdpOptions,
    rng: &mut XorShift64Star,
) -> Result<Positions> {
    let vertex_weight = props
        .vertex_weight
        .map_or_else(|| vec![1.0; graph.vertex_count()], <[f64]>::to_vec);
    let edge_weight = props
        .edge_weight
        .map_or_else(|| vec![1.0; graph.edge_count()], <[f64]>::to_vec);
    let hierarchy = build_hierarchy(graph, vertex_weight, edge_weight, &opts.coarsening)?;
    let levels = hierarchy.levels();
    let Some(coarsest) = hierarchy.coarsest() else {
        return Err(Error::HierarchyInconsistent { level: 0 });
    };

    let mut positions = random_layout(coarsest.vertex_count(), None, opts.dim, rng)?;
    let scales = ScaleSeries::for_hierarchy(
        average_edge_length(coarsest.graph.undirected(), &positions),
        levels.len(),
        opts.coarsening.weighted_coarse,
    );
    debug!(
        levels = levels.len(),
        coarsest_vertices = coarsest.vertex_count(),
        k_coarsest = scales.values()[0],
        gamma = scales.gamma(),
        "built hierarchy"
    );

    for (index, level) in levels.iter().enumerate() {
        let k = scales.values()[index];
        let avg = average_edge_length(level.graph.undirected(), &positions);
        let mut level_opts = opts.clone();
        level_opts.multilevel = Some(false);
        level_opts.placement.k = Some(k);
        level_opts.placement.init_step = Some((2.0 * k).max(avg / 10.0));
        level_opts.placement.adaptive_cooling = false;

        let level_props = if opts.coarsening.weighted_coarse {
            Properties {
                vertex_weight: Some(level.vertex_weight.as_slice()),
                edge_weight: Some(level.edge_weight.as_slice()),
                pin: None,
                positions: Some(&positions),
            }
        } else {
            Properties {
                positions: Some(&positions),
                ..Default::default()
            }
        };

        debug!(
            level = index,
            vertices = level.vertex_count(),
            k,
            "placing level"
        );
        let placed = run(
            &level.graph,
            &level_props,
            &level_opts,
            false,
            Reentry::Level { index },
            rng,
        )?;

        positions = match levels.get(index + 1) {
            Some(finer) => {
                let contraction = level
                    .contraction
                    .as_ref()
                    .ok_or(Error::HierarchyInconsistent { level: index })?;
                propagate::propagate(
                    &finer.graph,
                    contraction,
                    &placed,
                    k * JITTER_FRACTION,
                    rng,
                )?
            }
            None => placed,
        };
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::{MULTILEVEL_VERTEX_FLOOR, sfdp_layout};
    use crate::Error;
    use crate::algo::SfdpOptions;
    use crate::positions::Positions;
    use crate::properties::Properties;
    use sirenia_graph::{Graph, GraphOptions};

    #[test]
    fn pins_are_rejected_with_multilevel_placement() {
        let g = Graph::from_edges(GraphOptions::default(), 4, [(0, 1), (1, 2), (2, 3)]).unwrap();
        let pin = [true, false, false, false];
        let props = Properties {
            pin: Some(&pin),
            ..Default::default()
        };
        let opts = SfdpOptions {
            multilevel: Some(true),
            ..Default::default()
        };
        assert!(matches!(
            sfdp_layout(&g, &props, &opts),
            Err(Error::PinnedMultilevel)
        ));
    }

    #[test]
    fn pinned_vertex_keeps_its_initial_position() {
        let g = Graph::from_edges(GraphOptions::default(), 3, [(0, 1), (1, 2)]).unwrap();
        let initial = Positions::from_rows(2, [[0.0, 0.0], [3.0, 0.0], [3.0, 3.0]]).unwrap();
        let pin = [false, true, false];
        let props = Properties {
            pin: Some(&pin),
            positions: Some(&initial),
            ..Default::default()
        };
        let mut opts = SfdpOptions::default();
        opts.placement.max_iter = 50;
        let p = sfdp_layout(&g, &props, &opts).unwrap();
        assert_eq!(p.get(1), &[3.0, 0.0]);
    }

    #[test]
    fn small_graphs_default_to_a_single_level() {
        assert!(MULTILEVEL_VERTEX_FLOOR >= 3);
        let g = Graph::from_edges(GraphOptions::default(), 3, [(0, 1), (1, 2)]).unwrap();
        let mut opts = SfdpOptions::default();
        opts.placement.max_iter = 20;
        let p = sfdp_layout(&g, &Properties::default(), &opts).unwrap();
        assert_eq!(p.len(), 3);
    }

    #[test]
    fn initial_positions_must_match_the_layout_dimension() {
        let g = Graph::with_vertices(GraphOptions::default(), 3);
        let initial = Positions::zeros(3, 3);
        let props = Properties {
            positions: Some(&initial),
            ..Default::default()
        };
        assert!(matches!(
            sfdp_layout(&g, &props, &SfdpOptions::default()),
            Err(Error::PositionDimension {
                expected: 2,
                got: 3
            })
        ));
    }
}
