//! Hierarchy construction by repeated graph contraction.

use crate::algo::{CoarseningMethod, CoarseningOptions};
use crate::error::{Error, Result};
use sirenia_graph::{Graph, alg};
use std::borrow::Cow;
use tracing::debug;

/// How one level was contracted from the next finer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoarseningMode {
    /// Heavy-edge matching; matched pairs merge.
    EdgeContraction,
    /// Maximal independent vertex set; every other vertex joins an adjacent member.
    IndependentSet,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorState {
    Contracting(CoarseningMode),
    Stopped,
}

/// Verdict on a candidate coarse graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Accept the candidate and coarsen it further.
    Keep,
    /// Discard the candidate and coarsen the same level again in the current mode.
    Retry,
    /// Discard the candidate; the previous level is the coarsest.
    Stop,
}

/// Decides from vertex counts alone which contraction to apply and when to stop.
#[derive(Debug, Clone)]
pub struct StrategySelector {
    method: CoarseningMethod,
    mivs_thres: f64,
    ec_thres: f64,
    state: SelectorState,
}

impl StrategySelector {
    pub fn new(opts: &CoarseningOptions) -> Self {
        let mode = match opts.method {
            CoarseningMethod::Mivs => CoarseningMode::IndependentSet,
            CoarseningMethod::Ec | CoarseningMethod::Hybrid => CoarseningMode::EdgeContraction,
        };
        Self {
            method: opts.method,
            mivs_thres: opts.mivs_thres,
            ec_thres: opts.ec_thres,
            state: SelectorState::Contracting(mode),
        }
    }

    pub fn state(&self) -> SelectorState {
        self.state
    }

    /// Mode for the next contraction, or `None` once stopped.
    pub fn mode(&self) -> Option<CoarseningMode> {
        match self.state {
            SelectorState::Contracting(mode) => Some(mode),
            SelectorState::Stopped => None,
        }
    }

    pub fn stop(&mut self) {
        self.state = SelectorState::Stopped;
    }

    /// Judges a candidate with `candidate` vertices produced from a level with `previous`.
    pub fn observe(&mut self, previous: usize, candidate: usize) -> Step {
        let Some(mode) = self.mode() else {
            return Step::Stop;
        };
        let (prev, cand) = (previous as f64, candidate as f64);

        let mut switched = false;
        match mode {
            CoarseningMode::IndependentSet => {
                if cand > self.mivs_thres * prev {
                    self.stop();
                    return Step::Stop;
                }
                // Pure independent-set coarsening also honours the matching threshold.
                if cand > self.ec_thres * prev && self.method != CoarseningMethod::Hybrid {
                    self.stop();
                    return Step::Stop;
                }
            }
            CoarseningMode::EdgeContraction => {
                if cand > self.ec_thres * prev {
                    if self.method == CoarseningMethod::Ec {
                        self.stop();
                        return Step::Stop;
                    }
                    self.state = SelectorState::Contracting(CoarseningMode::IndependentSet);
                    switched = true;
                }
            }
        }

        if candidate <= 2 {
            self.stop();
            return Step::Stop;
        }
        if candidate >= previous {
            if switched {
                return Step::Retry;
            }
            self.stop();
            return Step::Stop;
        }
        Step::Keep
    }
}

/// Fine-to-coarse mapping stored on the coarser of two consecutive levels.
#[derive(Debug, Clone)]
pub struct Contraction {
    /// Vertex of this level for every vertex of the next finer level.
    pub assignment: Vec<usize>,
    /// Independent-set membership over the next finer level's vertices, for independent-set
    /// contractions.
    pub independent_set: Option<Vec<bool>>,
    pub mode: CoarseningMode,
}

/// One immutable snapshot of the hierarchy.
#[derive(Debug, Clone)]
pub struct Level<'g> {
    /// Borrowed at the finest level, owned at every coarser one.
    pub graph: Cow<'g, Graph>,
    pub vertex_weight: Vec<f64>,
    pub edge_weight: Vec<f64>,
    /// `None` at the finest level.
    pub contraction: Option<Contraction>,
}

impl Level<'_> {
    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }
}

/// Levels ordered coarsest first; the last level is the input graph.
#[derive(Debug, Clone)]
pub struct Hierarchy<'g> {
    levels: Vec<Level<'g>>,
}

impl<'g> Hierarchy<'g> {
    pub fn levels(&self) -> &[Level<'g>] {
        &self.levels
    }

    pub fn coarsest(&self) -> Option<&Level<'g>> {
        self.levels.first()
    }

    pub fn finest(&self) -> Option<&Level<'g>> {
        self.levels.last()
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }
}

/// Result of one contraction.
#[derive(Debug, Clone)]
pub struct CoarseStep {
    pub graph: Graph,
    pub vertex_weight: Vec<f64>,
    pub edge_weight: Vec<f64>,
    pub assignment: Vec<usize>,
    pub independent_set: Option<Vec<bool>>,
}

/// Contracts `graph` once in the given mode, aggregating weights.
pub fn coarsen_once(
    graph: &Graph,
    vertex_weight: &[f64],
    edge_weight: &[f64],
    mode: CoarseningMode,
) -> Result<CoarseStep> {
    let view = graph.undirected();
    let (labels, independent_set) = match mode {
        CoarseningMode::EdgeContraction => {
            let matching = alg::maximum_weight_matching(view, Some(edge_weight))?;
            let matched = view.with_edge_filter(&matching)?;
            (alg::label_components(matched).labels, None)
        }
        CoarseningMode::IndependentSet => {
            let set = alg::maximal_independent_set(view, true);
            let members = view.with_vertex_filter(&set)?;
            let mut labels = alg::label_components(members).labels;
            alg::infect_labels(view, &mut labels, &set);
            (labels, Some(set))
        }
    };

    let mut partition: Vec<usize> = Vec::with_capacity(labels.len());
    for (vertex, label) in labels.into_iter().enumerate() {
        match label {
            Some(label) => partition.push(label),
            None => return Err(sirenia_graph::Error::UnlabeledVertex { vertex }.into()),
        }
    }

    let c = alg::condense(graph, &partition, vertex_weight, edge_weight)?;
    Ok(CoarseStep {
        graph: c.graph,
        vertex_weight: c.vertex_weight,
        edge_weight: c.edge_weight,
        assignment: c.assignment,
        independent_set,
    })
}

/// Builds the contraction hierarchy of `graph`, returned coarsest first.
pub fn build_hierarchy<'g>(
    graph: &'g Graph,
    vertex_weight: Vec<f64>,
    edge_weight: Vec<f64>,
    opts: &CoarseningOptions,
) -> Result<Hierarchy<'g>> {
    if vertex_weight.len() != graph.vertex_count() {
        return Err(Error::LengthMismatch {
            what: "vertex weight",
            expected: graph.vertex_count(),
            got: vertex_weight.len(),
        });
    }
    if edge_weight.len() != graph.edge_count() {
        return Err(Error::LengthMismatch {
            what: "edge weight",
            expected: graph.edge_count(),
            got: edge_weight.len(),
        });
    }

    let mut levels: Vec<Level<'g>> = vec![Level {
        graph: Cow::Borrowed(graph),
        vertex_weight,
        edge_weight,
        contraction: None,
    }];
    if graph.vertex_count() <= 2 {
        return Ok(Hierarchy { levels });
    }

    let max_levels = opts.max_levels.unwrap_or(usize::MAX);
    let mut selector = StrategySelector::new(opts);
    while levels.len() < max_levels {
        let Some(mode) = selector.mode() else {
            break;
        };
        let Some(current) = levels.last() else {
            break;
        };
        let step = coarsen_once(
            &current.graph,
            &current.vertex_weight,
            &current.edge_weight,
            mode,
        )?;
        let previous = current.vertex_count();
        let candidate = step.graph.vertex_count();
        match selector.observe(previous, candidate) {
            Step::Stop => break,
            Step::Retry => continue,
            Step::Keep => {}
        }

        debug!(
            level = levels.len(),
            ?mode,
            vertices = candidate,
            edges = step.graph.edge_count(),
            "accepted coarse level"
        );
        levels.push(Level {
            graph: Cow::Owned(step.graph),
            vertex_weight: step.vertex_weight,
            edge_weight: step.edge_weight,
            contraction: Some(Contraction {
                assignment: step.assignment,
                independent_set: step.independent_set,
                mode,
            }),
        });
    }

    levels.reverse();
    Ok(Hierarchy { levels })
}
