//! Selecting a policy by name.

use std::fmt;
use std::str::FromStr;

use crate::common::Error;

/// The built-in replacement policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    Fifo,
    Lru,
    Optimal,
    Clock,
}

impl PolicyKind {
    /// Every built-in policy, in report order.
    pub const ALL: [PolicyKind; 4] = [
        PolicyKind::Fifo,
        PolicyKind::Lru,
        PolicyKind::Optimal,
        PolicyKind::Clock,
    ];

    /// Display name, matching [`EvictionPolicy::name`](super::EvictionPolicy::name).
    pub fn name(self) -> &'static str {
        match self {
            PolicyKind::Fifo => "FIFO",
            PolicyKind::Lru => "LRU",
            PolicyKind::Optimal => "Optimal",
            PolicyKind::Clock => "Clock",
        }
    }
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PolicyKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fifo" => Ok(PolicyKind::Fifo),
            "lru" => Ok(PolicyKind::Lru),
            "optimal" | "opt" | "min" => Ok(PolicyKind::Optimal),
            "clock" | "second-chance" => Ok(PolicyKind::Clock),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}
