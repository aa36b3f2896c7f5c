//! Component kinds and their name assignment.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of circuit component stored as a vertex value.
///
/// Each kind fixes the vertex capacity through its terminal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComponentKind {
    /// LM741 operational amplifier.
    #[serde(rename = "LM741")]
    Lm741,
    /// Two-ended wire.
    Wire,
    /// Three-terminal socket.
    ThreeTerminalSocket,
}

impl ComponentKind {
    /// All kinds, in declaration order.
    pub const ALL: [ComponentKind; 3] = [Self::Lm741, Self::Wire, Self::ThreeTerminalSocket];

    /// Returns the display label, also used as the name prefix.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Lm741 => "LM741",
            Self::Wire => "Wire",
            Self::ThreeTerminalSocket => "ThreeTerminalSocket",
        }
    }

    /// Returns the number of terminals, used as the vertex capacity.
    #[must_use]
    pub fn terminal_count(self) -> usize {
        match self {
            Self::Lm741 => 6,
            Self::Wire => 2,
            Self::ThreeTerminalSocket => 3,
        }
    }

    /// Returns true if instances are named `Label#N`.
    ///
    /// Sockets all share the bare label as their name.
    #[must_use]
    pub fn is_numbered(self) -> bool {
        !matches!(self, Self::ThreeTerminalSocket)
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Monotonic id counter starting at 0.
#[derive(Debug, Default, Clone)]
pub struct IdAssigner {
    count: u64,
}

impl IdAssigner {
    /// Creates a counter at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current id and advances the counter.
    pub fn next_id(&mut self) -> u64 {
        let id = self.count;
        self.count += 1;
        id
    }

    /// Returns how many ids have been handed out.
    #[must_use]
    pub fn issued(&self) -> u64 {
        self.count
    }
}

/// Generates component names with one [`IdAssigner`] per kind.
///
/// Counters never reset and are scoped to this namer, so two circuits number
/// their components independently.
#[derive(Debug, Default, Clone)]
pub struct ComponentNamer {
    assigners: HashMap<ComponentKind, IdAssigner>,
}

impl ComponentNamer {
    /// Creates a namer with every counter at 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the next name for `kind`.
    pub fn next_name(&mut self, kind: ComponentKind) -> String {
        if !kind.is_numbered() {
            return kind.label().to_string();
        }
        let id = self.assigners.entry(kind).or_default().next_id();
        format!("{}#{}", kind.label(), id)
    }

    /// Returns how many numbered names were generated for `kind`.
    #[must_use]
    pub fn issued(&self, kind: ComponentKind) -> u64 {
        self.assigners.get(&kind).map_or(0, IdAssigner::issued)
    }
}
