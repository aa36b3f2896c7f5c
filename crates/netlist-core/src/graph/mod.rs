//! Capacity-bounded vertex graph.
//!
//! Provides the vertex type, the arena that owns every vertex, and the two
//! depth-first traversal strategies.
//!
//! # Example
//!
//! ```rust
//! use netlist_core::graph::Graph;
//! use netlist_core::graph::traversal::dfs_iterative;
//!
//! let mut graph = Graph::new();
//! let s = graph.add_vertex("S", (), 1);
//! let m = graph.add_vertex("M", (), 1);
//! let l = graph.add_vertex("L", (), 0);
//! graph.add_edge(s, m).unwrap();
//! graph.add_edge(m, l).unwrap();
//!
//! let mut names = Vec::new();
//! dfs_iterative(&graph, s, |visit| names.push(visit.vertex.name().to_owned()));
//! assert_eq!(names, ["S", "M", "L"]);
//! ```

mod store;
pub mod traversal;
mod vertex;

#[cfg(test)]
mod vertex_tests;

pub use store::{EdgeMode, Graph};
pub use traversal::Visit;
pub use vertex::{Vertex, VertexId};
