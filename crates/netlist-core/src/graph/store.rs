//! Arena storage for vertices and the edge-creation entry point.
//!
//! Every vertex lives in one `Vec` owned by [`Graph`], addressed by
//! [`VertexId`]. Adjacency stays embedded in each vertex; the graph only adds
//! the arena and the [`EdgeMode`] used when connecting two vertices.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::Result;

use super::vertex::{Vertex, VertexId};

/// How [`Graph::add_edge`] connects two vertices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeMode {
    /// `from -> to` only.
    #[default]
    Directed,
    /// `from -> to` and `to -> from`.
    Bidirectional,
}

/// Arena of capacity-bounded vertices.
///
/// # Example
///
/// ```rust
/// use netlist_core::graph::{EdgeMode, Graph};
///
/// let mut graph = Graph::with_edge_mode(EdgeMode::Bidirectional);
/// let a = graph.add_vertex("a", (), 1);
/// let b = graph.add_vertex("b", (), 1);
/// graph.add_edge(a, b).unwrap();
///
/// assert_eq!(graph[a].edges(), &[b]);
/// assert_eq!(graph[b].edges(), &[a]);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    edge_mode: EdgeMode,
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Graph<T> {
    /// Creates an empty directed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::with_edge_mode(EdgeMode::Directed)
    }

    /// Creates an empty graph using `edge_mode` for [`Graph::add_edge`].
    #[must_use]
    pub fn with_edge_mode(edge_mode: EdgeMode) -> Self {
        Self {
            vertices: Vec::new(),
            edge_mode,
        }
    }

    /// Returns the configured edge mode.
    #[must_use]
    pub fn edge_mode(&self) -> EdgeMode {
        self.edge_mode
    }

    /// Moves a new vertex into the arena and returns its id.
    pub fn add_vertex(&mut self, name: impl Into<String>, value: T, capacity: usize) -> VertexId {
        let id = VertexId::new(self.vertices.len());
        self.vertices.push(Vertex::new(name, value, capacity));
        id
    }

    /// Connects `from` to `to` according to the graph's [`EdgeMode`].
    ///
    /// In bidirectional mode both directions are checked before either is
    /// written, so a rejection never leaves a one-sided connection. A
    /// bidirectional self-loop stores a single edge.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityExceeded` naming the first vertex without room.
    ///
    /// # Panics
    ///
    /// Panics if either id does not belong to this graph.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        if self.edge_mode == EdgeMode::Bidirectional && from != to {
            for (source, target) in [(from, to), (to, from)] {
                let vertex = &self[source];
                if vertex.is_full() {
                    let err = vertex.capacity_exceeded();
                    tracing::warn!(from = %source, to = %target, error = %err, "Edge rejected");
                    return Err(err);
                }
            }
            self.vertex_mut(from).add_edge(to)?;
            return self.vertex_mut(to).add_edge(from);
        }

        self.vertex_mut(from).add_edge(to).inspect_err(|err| {
            tracing::warn!(%from, %to, error = %err, "Edge rejected");
        })
    }

    /// Gets a vertex by id.
    #[must_use]
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index())
    }

    /// Returns the outgoing edges of `id`, or an empty slice for a foreign id.
    #[must_use]
    pub fn edges(&self, id: VertexId) -> &[VertexId] {
        self.vertex(id).map(Vertex::edges).unwrap_or_default()
    }

    /// Returns the id of the first vertex named `name`.
    ///
    /// Names are not required to be unique.
    #[must_use]
    pub fn find_by_name(&self, name: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .position(|v| v.name() == name)
            .map(VertexId::new)
    }

    /// Returns all vertex ids in construction order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the arena holds no vertex.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns the total number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.edges().len()).sum()
    }

    fn vertex_mut(&mut self, id: VertexId) -> &mut Vertex<T> {
        &mut self.vertices[id.index()]
    }
}

impl<T> Index<VertexId> for Graph<T> {
    type Output = Vertex<T>;

    fn index(&self, id: VertexId) -> &Self::Output {
        &self.vertices[id.index()]
    }
}
