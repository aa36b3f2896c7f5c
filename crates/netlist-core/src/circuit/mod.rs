//! Circuit domain built on the vertex graph.
//!
//! Components are vertices whose value is their [`ComponentKind`] and whose
//! capacity is the kind's terminal count. Wiring goes through
//! [`Graph::add_edge`](crate::graph::Graph::add_edge), so a component never
//! holds more connections than it has terminals.

mod component;
mod netlist;


pub use component::{ComponentKind, ComponentNamer, IdAssigner};
pub use netlist::{Circuit, NetlistEntry, NetlistReport};
