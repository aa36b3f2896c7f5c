//! Error types for netlist-core.

use thiserror::Error;

/// Errors raised by graph construction and configuration loading.
///
/// Every variant is recoverable: the operation that produced it left all
/// existing state untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An edge was added to a vertex that already holds `capacity` edges.
    #[error("vertex \"{name}\" cannot have more than {capacity} edges")]
    CapacityExceeded {
        /// Name of the vertex that rejected the edge.
        name: String,
        /// Maximum number of outgoing edges of that vertex.
        capacity: usize,
    },

    /// Configuration could not be loaded or parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Returns true if this error is a capacity rejection.
    #[must_use]
    pub fn is_capacity_exceeded(&self) -> bool {
        matches!(self, Self::CapacityExceeded { .. })
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Self::Config(err.to_string())
    }
}

/// Result type alias for netlist-core operations.
pub type Result<T> = std::result::Result<T, Error>;
