//! # netlist-core
//!
//! A directed graph of named, typed vertices whose out-degree is bounded by a
//! per-vertex capacity, two depth-first traversals over it, and a small
//! circuit layer that renders a traversal as a netlist trace.
//!
//! ## Modules
//!
//! - [`graph`] - `Vertex`, the `Graph` arena and the traversal algorithms
//! - [`circuit`] - component kinds, naming and netlist rendering
//! - [`config`] - layered configuration (defaults, TOML, environment)
//! - [`error`] - crate error type
//!
//! ## Quick Start
//!
//! ```rust
//! use netlist_core::{Circuit, ComponentKind};
//!
//! let mut circuit = Circuit::new();
//! let socket = circuit.add_component(ComponentKind::ThreeTerminalSocket);
//! let amp = circuit.add_component(ComponentKind::Lm741);
//! let wire = circuit.add_component(ComponentKind::Wire);
//! circuit.add_components(socket, &[wire, amp])?;
//!
//! let loop_wire = circuit.add_component(ComponentKind::Wire);
//! circuit.add_components(amp, &[loop_wire, amp])?;
//!
//! assert_eq!(
//!     circuit.netlist(socket),
//!     "ThreeTerminalSocket\nWire#0->LM741#0->Wire#1->"
//! );
//! # Ok::<(), netlist_core::Error>(())
//! ```
//!
//! Everything is single-threaded and synchronous. Traversals borrow the graph
//! immutably, so edges cannot be added while one is running.

#![warn(missing_docs)]

pub mod circuit;
pub mod config;
pub mod error;
#[cfg(test)]
mod error_tests;
pub mod graph;

pub use circuit::{Circuit, ComponentKind, ComponentNamer, IdAssigner, NetlistEntry, NetlistReport};
pub use config::{NetlistConfig, OutputFormat};
pub use error::{Error, Result};
pub use graph::{EdgeMode, Graph, Vertex, VertexId, Visit};
