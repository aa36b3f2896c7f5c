//! Circuit construction and netlist rendering.
//!
//! A [`Circuit`] owns a [`Graph`] of [`ComponentKind`] vertices and the
//! [`ComponentNamer`] that names them. The netlist is the text trace of an
//! iterative depth-first traversal:
//!
//! - the start component's name and a newline,
//! - then, for every other visited component, its name followed by `->` when
//!   it has outgoing edges or by a newline when it has none.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::NetlistConfig;
use crate::error::Result;
use crate::graph::traversal::{dfs_iterative, dfs_recursive_with};
use crate::graph::{EdgeMode, Graph, VertexId};

use super::component::{ComponentKind, ComponentNamer};

const EDGE_SEPARATOR: &str = "->";

/// One visited component in a [`NetlistReport`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetlistEntry {
    /// Component name.
    pub name: String,
    /// Component kind.
    pub kind: ComponentKind,
    /// Whether the component has outgoing connections.
    pub has_edges: bool,
}

/// Structured form of a netlist traversal, in visit order.
///
/// Unlike the text trace, `visits` includes the start component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetlistReport {
    /// Name of the component the traversal started from.
    pub start: String,
    /// Every reachable component, in iterative traversal order.
    pub visits: Vec<NetlistEntry>,
}

/// A chain of components wired through a capacity-bounded graph.
///
/// # Example
///
/// ```rust
/// use netlist_core::{Circuit, ComponentKind};
///
/// let mut circuit = Circuit::new();
/// let socket = circuit.add_component(ComponentKind::ThreeTerminalSocket);
/// let amp = circuit.add_component(ComponentKind::Lm741);
/// let wire = circuit.add_component(ComponentKind::Wire);
/// circuit.add_components(socket, &[wire, amp]).unwrap();
///
/// assert_eq!(circuit.netlist(socket), "ThreeTerminalSocket\nWire#0->LM741#0\n");
/// ```
#[derive(Debug, Default)]
pub struct Circuit {
    graph: Graph<ComponentKind>,
    namer: ComponentNamer,
}

impl Circuit {
    /// Creates an empty circuit with directed connections.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty circuit connecting components with `edge_mode`.
    #[must_use]
    pub fn with_edge_mode(edge_mode: EdgeMode) -> Self {
        Self {
            graph: Graph::with_edge_mode(edge_mode),
            namer: ComponentNamer::new(),
        }
    }

    /// Creates an empty circuit from loaded configuration.
    #[must_use]
    pub fn from_config(config: &NetlistConfig) -> Self {
        Self::with_edge_mode(config.graph.edge_mode)
    }

    /// Adds a component of `kind` and returns its id.
    pub fn add_component(&mut self, kind: ComponentKind) -> VertexId {
        let name = self.namer.next_name(kind);
        tracing::debug!(%name, capacity = kind.terminal_count(), "Component added");
        self.graph.add_vertex(name, kind, kind.terminal_count())
    }

    /// Connects `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `Error::CapacityExceeded` if a component has no free terminal.
    pub fn connect(&mut self, from: VertexId, to: VertexId) -> Result<()> {
        self.graph.add_edge(from, to)
    }

    /// Chains components: `from -> to[0]`, `to[0] -> to[1]`, and so on.
    ///
    /// An empty `to` is a no-op. Every link is attempted in order; a
    /// rejected link is skipped and the chain carries on from its target.
    ///
    /// # Errors
    ///
    /// Returns the `Error::CapacityExceeded` of the first rejected link,
    /// after all remaining links have been made.
    pub fn add_components(&mut self, from: VertexId, to: &[VertexId]) -> Result<()> {
        let mut first_error = None;
        let mut previous = from;
        for &next in to {
            if let Err(err) = self.connect(previous, next) {
                first_error.get_or_insert(err);
            }
            previous = next;
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Renders the netlist text trace starting at `from`.
    #[must_use]
    pub fn netlist(&self, from: VertexId) -> String {
        let mut netlist = format!("{}\n", self.graph[from].name());

        dfs_iterative(&self.graph, from, |visit| {
            if visit.id == from {
                return;
            }
            netlist.push_str(visit.vertex.name());
            netlist.push_str(if visit.has_edges { EDGE_SEPARATOR } else { "\n" });
        });

        netlist
    }

    /// Builds the structured report of the traversal used by [`Circuit::netlist`].
    #[must_use]
    pub fn report(&self, from: VertexId) -> NetlistReport {
        let mut visits = Vec::new();
        dfs_iterative(&self.graph, from, |visit| {
            visits.push(NetlistEntry {
                name: visit.vertex.name().to_string(),
                kind: *visit.vertex.value(),
                has_edges: visit.has_edges,
            });
        });

        NetlistReport {
            start: self.graph[from].name().to_string(),
            visits,
        }
    }

    /// Returns the recursive depth-first visit order from `from`.
    #[must_use]
    pub fn depth_first_recursive(&self, from: VertexId) -> Vec<VertexId> {
        let mut order = Vec::new();
        dfs_recursive_with(&self.graph, from, &mut HashSet::new(), |visit| {
            tracing::debug!(name = visit.vertex.name(), kind = %visit.vertex.value(), "Visited");
            order.push(visit.id);
        });
        order
    }

    /// Returns the name of a component.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this circuit.
    #[must_use]
    pub fn name(&self, id: VertexId) -> &str {
        self.graph[id].name()
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<ComponentKind> {
        &self.graph
    }

    /// Returns the namer holding this circuit's counters.
    #[must_use]
    pub fn namer(&self) -> &ComponentNamer {
        &self.namer
    }
}
