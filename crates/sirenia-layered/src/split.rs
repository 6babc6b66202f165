//! The split heuristic for two-layer crossing minimization.
//!
//! Recursive divide and conquer: pick the median node of a range by
//! barycenter, partition the rest by pairwise crossing cost against that
//! pivot, recurse into both groups. Crossing minimization is NP-hard; this
//! is a heuristic and does not guarantee the optimum, but a call never
//! leaves the level worse than it found it.

use std::cmp::Ordering;

use crate::crossings::CrossingsMatrix;
use crate::hierarchy::{EdgeSubgraphs, HierarchyLevels, Level, LevelNode};

/// One instance owns a crossings matrix and scratch buffers reused across
/// calls. Not safe for concurrent calls; concurrent layout of independent
/// hierarchies requires independent instances.
#[derive(Debug, Default)]
pub struct SplitHeuristic {
    matrix: CrossingsMatrix,
    order: Vec<usize>,
    buffer: Vec<usize>,
    median: Vec<usize>,
    barycenters: Vec<Option<f64>>,
    initialized: bool,
}

impl SplitHeuristic {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sizes the crossings matrix and scratch buffers for the widest level of
    /// `levels`. Must run once before any `call`.
    pub fn init(&mut self, levels: &HierarchyLevels) {
        let width = levels.max_level_width();
        self.matrix.reserve(width);
        self.order.reserve(width);
        self.buffer.reserve(width);
        self.median.reserve(width);
        self.barycenters.reserve(width);
        self.initialized = true;
    }

    /// Reorders `level` in place to reduce crossings against the fixed
    /// neighbor.
    pub fn call(&mut self, level: &mut Level) {
        debug_assert!(self.initialized, "SplitHeuristic::call before init");
        if level.len() <= 1 {
            return;
        }
        self.matrix.init(level);
        self.run(level);
    }

    /// Simultaneous-drawing variant: crossing costs are gated by edge
    /// subgraph membership, so edges of disjoint subgraphs never repel each
    /// other.
    pub fn call_gated(&mut self, level: &mut Level, subgraphs: &EdgeSubgraphs) {
        debug_assert!(self.initialized, "SplitHeuristic::call before init");
        if level.len() <= 1 {
            return;
        }
        self.matrix.init_gated(level, subgraphs);
        self.run(level);
    }

    /// Releases matrix and scratch storage. `init` must run again before
    /// further calls.
    pub fn cleanup(&mut self) {
        self.matrix.release();
        self.order = Vec::new();
        self.buffer = Vec::new();
        self.median = Vec::new();
        self.barycenters = Vec::new();
        self.initialized = false;
    }

    fn run(&mut self, level: &mut Level) {
        let n = level.len();

        self.barycenters.clear();
        self.barycenters.extend(level.iter().map(LevelNode::barycenter));

        self.order.clear();
        self.order.extend(0..n);
        let before = self.matrix.order_crossings(&self.order);

        self.rec_call(level, 0, n);

        // Keep whichever order crosses less; ties keep the input order.
        let after = self.matrix.order_crossings(&self.order);
        if after < before {
            level.apply_permutation(&self.order);
        }
    }

    fn rec_call(&mut self, level: &Level, low: usize, high: usize) {
        if high - low <= 1 {
            return;
        }

        let pivot_slot = self.select_pivot(level, low, high);
        let pivot = self.order[pivot_slot];

        // Stable partition around the pivot: a node goes left when placing it
        // before the pivot costs no more than placing it after.
        self.buffer.clear();
        for k in low..high {
            let node = self.order[k];
            if node != pivot && self.matrix.at(node, pivot) <= self.matrix.at(pivot, node) {
                self.buffer.push(node);
            }
        }
        let split = self.buffer.len();
        for k in low..high {
            let node = self.order[k];
            if node != pivot && self.matrix.at(node, pivot) > self.matrix.at(pivot, node) {
                self.buffer.push(node);
            }
        }

        let mid = low + split;
        self.order[low..mid].copy_from_slice(&self.buffer[..split]);
        self.order[mid] = pivot;
        self.order[mid + 1..high].copy_from_slice(&self.buffer[split..]);

        // The pivot sits between the groups, so both sub-ranges are strictly
        // smaller than the input range.
        self.rec_call(level, low, mid);
        self.rec_call(level, mid + 1, high);
    }

    // Slot of the range's median node by (barycenter, original id). Ranges
    // whose barycenters cannot discriminate fall back to the midpoint slot to
    // keep the split balanced.
    fn select_pivot(&mut self, level: &Level, low: usize, high: usize) -> usize {
        let Self {
            order,
            median,
            barycenters,
            ..
        } = self;

        let first = barycenters[order[low]];
        if order[low + 1..high]
            .iter()
            .all(|&node| barycenters[node] == first)
        {
            return low + (high - low) / 2;
        }

        median.clear();
        median.extend_from_slice(&order[low..high]);
        let k = (high - low - 1) / 2;
        median.select_nth_unstable_by(k, |&a, &b| cmp_by_barycenter(level, barycenters, a, b));
        let pivot = median[k];

        low + order[low..high]
            .iter()
            .position(|&node| node == pivot)
            .expect("median node must come from the range")
    }
}

fn cmp_by_barycenter(
    level: &Level,
    barycenters: &[Option<f64>],
    a: usize,
    b: usize,
) -> Ordering {
    match (barycenters[a], barycenters[b]) {
        (None, Some(_)) => return Ordering::Less,
        (Some(_), None) => return Ordering::Greater,
        (Some(x), Some(y)) => {
            if x < y {
                return Ordering::Less;
            }
            if x > y {
                return Ordering::Greater;
            }
        }
        (None, None) => {}
    }
    level.nodes()[a].id.cmp(&level.nodes()[b].id)
}
