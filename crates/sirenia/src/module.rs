//! The layout-module contract and the layered module built on the split
//! heuristic.

use sirenia_layered::{
    Adjacency, EdgeSubgraphs, HierarchyLevels, Level, LevelNode, SplitHeuristic, cross_count,
    cross_count_gated,
};

use crate::attributes::GraphAttributes;
use crate::error::{AlgorithmFailure, LayoutError, PreconditionViolation, Result};

/// The polymorphic contract every concrete layout algorithm satisfies.
///
/// A call either completes, having mutated orders and coordinates in place,
/// or reports a categorized failure. Callers that must keep the previous
/// drawing on failure run the module on a scratch copy (see
/// [`GraphLayout::call`](crate::dispatch::GraphLayout::call)).
pub trait LayoutModule {
    fn call(&mut self, attrs: &mut GraphAttributes) -> Result<()>;
}

/// Layered layout: alternating down/up sweeps of the split heuristic over
/// the ranking, keeping the layering with the fewest crossings, then
/// rank/order grid coordinates.
#[derive(Debug)]
pub struct LayeredLayout {
    heuristic: SplitHeuristic,
    sweeps: usize,
}

impl Default for LayeredLayout {
    fn default() -> Self {
        Self::with_sweeps(4)
    }
}

impl LayeredLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sweeps(sweeps: usize) -> Self {
        Self {
            heuristic: SplitHeuristic::new(),
            sweeps,
        }
    }

    /// Coordinates only, no crossing-minimization sweeps.
    pub fn quick() -> Self {
        Self::with_sweeps(0)
    }
}

impl LayoutModule for LayeredLayout {
    fn call(&mut self, attrs: &mut GraphAttributes) -> Result<()> {
        validate(attrs)?;

        let Some(max_rank) = attrs.max_rank() else {
            return Ok(());
        };

        let mut ranks = initial_ranks(attrs, max_rank);
        let (down, up) = neighbor_lists(attrs);
        let subgraphs = collect_subgraphs(attrs);

        let mut pos: Vec<usize> = vec![0; attrs.node_count()];
        for layer in &ranks {
            for (i, &v) in layer.iter().enumerate() {
                pos[v] = i;
            }
        }

        if self.sweeps > 0 && ranks.len() > 1 {
            self.heuristic.init(&build_hierarchy(&ranks, &down, &pos));

            let mut best = ranks.clone();
            let mut best_cc = layering_crossings(&ranks, &down, &pos, subgraphs.as_ref());

            for i in 0..self.sweeps {
                if i % 2 == 0 {
                    for r in 1..ranks.len() {
                        sweep_level(
                            &mut self.heuristic,
                            &mut ranks[r],
                            &down,
                            &mut pos,
                            subgraphs.as_ref(),
                        );
                    }
                } else {
                    for r in (0..ranks.len() - 1).rev() {
                        sweep_level(
                            &mut self.heuristic,
                            &mut ranks[r],
                            &up,
                            &mut pos,
                            subgraphs.as_ref(),
                        );
                    }
                }

                let cc = layering_crossings(&ranks, &down, &pos, subgraphs.as_ref());
                if cc < best_cc {
                    best_cc = cc;
                    best = ranks.clone();
                }
            }

            self.heuristic.cleanup();
            ranks = best;
        }

        let nodesep = attrs.nodesep;
        let ranksep = attrs.ranksep;
        for (r, layer) in ranks.iter().enumerate() {
            for (i, &v) in layer.iter().enumerate() {
                let node = attrs.node_mut(v).expect("ranked node must exist");
                node.order = i;
                node.x = i as f64 * nodesep;
                node.y = r as f64 * ranksep;
            }
        }

        Ok(())
    }
}

fn validate(attrs: &GraphAttributes) -> Result<()> {
    let nodes = attrs.nodes();
    for (e, edge) in attrs.edges().iter().enumerate() {
        if edge.source >= nodes.len() || edge.target >= nodes.len() {
            return Err(LayoutError::algorithm_with(
                AlgorithmFailure::IllegalParameter,
                format!("edge {e} references a missing node"),
            ));
        }
        if edge.source == edge.target {
            return Err(LayoutError::precondition_with(
                PreconditionViolation::SelfLoop,
                format!("node {} connects to itself", edge.source),
            ));
        }
        let rs = nodes[edge.source].rank;
        let rt = nodes[edge.target].rank;
        if rs.abs_diff(rt) != 1 {
            return Err(LayoutError::algorithm_with(
                AlgorithmFailure::IllegalParameter,
                format!("edge {e} connects ranks {rs} and {rt}, which are not adjacent"),
            ));
        }
    }
    Ok(())
}

// Node ids per rank, ordered by their current (order, id).
fn initial_ranks(attrs: &GraphAttributes, max_rank: usize) -> Vec<Vec<usize>> {
    let mut ranks: Vec<Vec<(usize, usize)>> = vec![Vec::new(); max_rank + 1];
    for (v, node) in attrs.nodes().iter().enumerate() {
        ranks[node.rank].push((node.order, v));
    }
    ranks
        .into_iter()
        .map(|mut layer| {
            layer.sort_unstable();
            layer.into_iter().map(|(_, v)| v).collect()
        })
        .collect()
}

// Per node: (edge id, neighbor) pairs toward the rank below and above.
fn neighbor_lists(attrs: &GraphAttributes) -> (Vec<Vec<(usize, usize)>>, Vec<Vec<(usize, usize)>>) {
    let n = attrs.node_count();
    let mut down: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    let mut up: Vec<Vec<(usize, usize)>> = vec![Vec::new(); n];
    for (e, edge) in attrs.edges().iter().enumerate() {
        let (lo, hi) = if attrs.nodes()[edge.source].rank < attrs.nodes()[edge.target].rank {
            (edge.source, edge.target)
        } else {
            (edge.target, edge.source)
        };
        down[hi].push((e, lo));
        up[lo].push((e, hi));
    }
    (down, up)
}

fn collect_subgraphs(attrs: &GraphAttributes) -> Option<EdgeSubgraphs> {
    if !attrs.has_subgraphs() {
        return None;
    }
    let mut subgraphs = EdgeSubgraphs::new();
    for (e, edge) in attrs.edges().iter().enumerate() {
        if edge.subgraphs != 0 {
            subgraphs.insert(e, edge.subgraphs);
        }
    }
    Some(subgraphs)
}

fn build_level(layer: &[usize], adjacency: &[Vec<(usize, usize)>], pos: &[usize]) -> Level {
    layer
        .iter()
        .map(|&v| {
            LevelNode::with_adjacency(
                v,
                adjacency[v]
                    .iter()
                    .map(|&(edge, u)| Adjacency {
                        edge,
                        position: pos[u],
                    })
                    .collect(),
            )
        })
        .collect()
}

fn build_hierarchy(
    ranks: &[Vec<usize>],
    down: &[Vec<(usize, usize)>],
    pos: &[usize],
) -> HierarchyLevels {
    let mut levels = HierarchyLevels::new();
    for layer in ranks {
        levels.push(build_level(layer, down, pos));
    }
    levels
}

fn sweep_level(
    heuristic: &mut SplitHeuristic,
    layer: &mut Vec<usize>,
    adjacency: &[Vec<(usize, usize)>],
    pos: &mut [usize],
    subgraphs: Option<&EdgeSubgraphs>,
) {
    let mut level = build_level(layer, adjacency, pos);
    match subgraphs {
        Some(sg) => heuristic.call_gated(&mut level, sg),
        None => heuristic.call(&mut level),
    }
    *layer = level.ids();
    for (i, &v) in layer.iter().enumerate() {
        pos[v] = i;
    }
}

fn layering_crossings(
    ranks: &[Vec<usize>],
    down: &[Vec<(usize, usize)>],
    pos: &[usize],
    subgraphs: Option<&EdgeSubgraphs>,
) -> u64 {
    ranks
        .iter()
        .skip(1)
        .map(|layer| {
            let level = build_level(layer, down, pos);
            match subgraphs {
                Some(sg) => cross_count_gated(&level, sg),
                None => cross_count(&level),
            }
        })
        .sum()
}
