//! Vertex type with a capacity-bounded list of outgoing edges.
//!
//! Vertices never own their neighbours. An edge is a [`VertexId`] into the
//! arena of the [`Graph`](super::Graph) that created both endpoints, so shared
//! targets and cycles need no reference counting.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Stable index of a vertex inside its owning graph arena.
///
/// Ids are only handed out by [`Graph::add_vertex`](super::Graph::add_vertex)
/// and are meaningless outside that graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(usize);

impl VertexId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the arena index of this vertex.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A named, valued node holding at most `capacity` outgoing edges.
///
/// Name, value and capacity are fixed at construction. Edges only ever
/// accumulate, in insertion order, and `edges().len() <= capacity()` holds at
/// all times.
///
/// # Example
///
/// ```rust
/// use netlist_core::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("a", 1, 1);
/// let b = graph.add_vertex("b", 2, 0);
///
/// graph.add_edge(a, b).unwrap();
/// assert!(graph.add_edge(a, b).is_err());
///
/// let vertex = &graph[a];
/// assert_eq!(vertex.name(), "a");
/// assert_eq!(vertex.edges(), &[b]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Vertex<T> {
    name: String,
    value: T,
    capacity: usize,
    edges: Vec<VertexId>,
}

impl<T> Vertex<T> {
    /// Creates a vertex with no edges. A capacity of 0 is allowed.
    #[must_use]
    pub fn new(name: impl Into<String>, value: T, capacity: usize) -> Self {
        Self {
            name: name.into(),
            value,
            capacity,
            edges: Vec::with_capacity(capacity),
        }
    }

    /// Appends an outgoing edge to `target`.
    ///
    /// Duplicates and self-loops are accepted.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityExceeded` if the vertex already holds
    /// `capacity` edges. The edge list is left unchanged.
    pub fn add_edge(&mut self, target: VertexId) -> Result<()> {
        if self.is_full() {
            return Err(self.capacity_exceeded());
        }
        self.edges.push(target);
        Ok(())
    }

    /// Returns the outgoing edges in insertion order.
    #[must_use]
    pub fn edges(&self) -> &[VertexId] {
        &self.edges
    }

    /// Returns the vertex name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the vertex payload.
    #[must_use]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns the maximum number of outgoing edges.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true if at least one outgoing edge exists.
    #[must_use]
    pub fn has_edges(&self) -> bool {
        !self.edges.is_empty()
    }

    /// Returns true if no further edge can be added.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.edges.len() >= self.capacity
    }

    /// Returns how many more edges this vertex accepts.
    #[must_use]
    pub fn remaining_capacity(&self) -> usize {
        self.capacity.saturating_sub(self.edges.len())
    }

    pub(crate) fn capacity_exceeded(&self) -> Error {
        Error::CapacityExceeded {
            name: self.name.clone(),
            capacity: self.capacity,
        }
    }
}
