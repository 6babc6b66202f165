//! The mutable drawing a layout module operates on.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeAttributes {
    pub rank: usize,
    /// Position within the rank; modules overwrite this.
    pub order: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EdgeAttributes {
    pub source: usize,
    pub target: usize,
    /// Subgraph membership bitmask for simultaneous drawing; 0 means the
    /// edge belongs to the plain (single) drawing.
    pub subgraphs: u32,
}

/// Ranked nodes, edges and spacing of one drawing. Hosts may serialize the
/// whole structure for debug dumps; the library itself never does I/O.
#[derive(Debug, Clone, Serialize)]
pub struct GraphAttributes {
    nodes: Vec<NodeAttributes>,
    edges: Vec<EdgeAttributes>,
    pub nodesep: f64,
    pub ranksep: f64,
}

impl Default for GraphAttributes {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            nodesep: 50.0,
            ranksep: 50.0,
        }
    }
}

impl GraphAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node on `rank`; its initial order is its insertion position
    /// within that rank.
    pub fn add_node(&mut self, rank: usize) -> usize {
        let order = self.nodes.iter().filter(|n| n.rank == rank).count();
        self.nodes.push(NodeAttributes {
            rank,
            order,
            x: 0.0,
            y: 0.0,
        });
        self.nodes.len() - 1
    }

    pub fn add_edge(&mut self, source: usize, target: usize) -> usize {
        self.edges.push(EdgeAttributes {
            source,
            target,
            subgraphs: 0,
        });
        self.edges.len() - 1
    }

    /// Marks `edge` as belonging to the overlaid subgraph with the given
    /// index (0..32). Any nonzero membership switches the layered module
    /// into simultaneous-drawing mode.
    pub fn add_edge_to_subgraph(&mut self, edge: usize, subgraph: u32) {
        debug_assert!(subgraph < 32, "subgraph index out of range");
        if let Some(e) = self.edges.get_mut(edge) {
            e.subgraphs |= 1 << subgraph;
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[NodeAttributes] {
        &self.nodes
    }

    pub fn edges(&self) -> &[EdgeAttributes] {
        &self.edges
    }

    pub fn node(&self, index: usize) -> Option<&NodeAttributes> {
        self.nodes.get(index)
    }

    pub fn node_mut(&mut self, index: usize) -> Option<&mut NodeAttributes> {
        self.nodes.get_mut(index)
    }

    pub fn max_rank(&self) -> Option<usize> {
        self.nodes.iter().map(|n| n.rank).max()
    }

    pub fn has_subgraphs(&self) -> bool {
        self.edges.iter().any(|e| e.subgraphs != 0)
    }
}
