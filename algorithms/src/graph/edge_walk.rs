//! Edge-consuming depth-first walk over a directed graph.
//!
//! Variables:
//!   V       = number of vertices, labelled 1..=V
//!   out[u]  = ordered set of out-neighbours of u
//!
//! Equations:
//!   add_edge(u, v):  out[u] = out[u] ∪ {v}     (parallel edges collapse)
//!   visit(x):        for i in out[x] ascending, while still present:
//!                        out[x] -= {i};  emit (x, i);  visit(i)
//!
//! A vertex may be entered any number of times; each edge is emitted once.

use std::collections::BTreeSet;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex {vertex} is outside 1..={count}")]
    VertexOutOfRange { vertex: usize, count: usize },
    #[error("graph of {count} vertices exceeds the limit of {MAX_VERTICES}")]
    TooManyVertices { count: usize },
}

pub const MAX_VERTICES: usize = 1 << 22;

#[derive(Debug, Clone, Default)]
pub struct EdgeSet {
    // out[0] is unused so vertex labels index directly
    out: Vec<BTreeSet<usize>>,
}

impl EdgeSet {
    /// Create a graph with vertices `1..=v` and no edges.
    pub fn new(v: usize) -> Result<Self, GraphError> {
        if v > MAX_VERTICES {
            return Err(GraphError::TooManyVertices { count: v });
        }
        Ok(Self {
            out: vec![BTreeSet::new(); v + 1],
        })
    }

    pub fn vertex_count(&self) -> usize {
        self.out.len().saturating_sub(1)
    }

    pub fn edge_count(&self) -> usize {
        self.out.iter().map(BTreeSet::len).sum()
    }

    /// Add the directed edge u -> v. Re-adding an edge is a no-op.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check(u)?;
        self.check(v)?;
        self.out[u].insert(v);
        Ok(())
    }

    /// Remaining out-neighbours of `u`, ascending.
    pub fn neighbours(&self, u: usize) -> Result<impl Iterator<Item = usize> + '_, GraphError> {
        self.check(u)?;
        Ok(self.out[u].iter().copied())
    }

    /// Walk from `start`, removing and returning edges in traversal order.
    ///
    /// Frames live on an explicit stack; on return to a frame the scan
    /// resumes at the smallest remaining neighbour, which is where the
    /// recursive scan would be since every smaller edge was already taken.
    pub fn walk(&mut self, start: usize) -> Result<Vec<(usize, usize)>, GraphError> {
        self.check(start)?;
        let mut order = Vec::new();
        let mut stack = vec![start];
        while let Some(&x) = stack.last() {
            match self.out[x].pop_first() {
                Some(i) => {
                    order.push((x, i));
                    stack.push(i);
                }
                None => {
                    stack.pop();
                }
            }
        }
        tracing::debug!(start, edges = order.len(), left = self.edge_count(), "edge walk finished");
        Ok(order)
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex == 0 || vertex > self.vertex_count() {
            return Err(GraphError::VertexOutOfRange {
                vertex,
                count: self.vertex_count(),
            });
        }
        Ok(())
    }
}
