//! Side-by-side results for several policies over one reference string.

use std::fmt;

use super::SimulationStats;
use crate::policy::PolicyKind;

/// Result of one policy in a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyResult {
    pub kind: PolicyKind,
    pub stats: SimulationStats,
}

/// Fault counts for several policies run against the same input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonReport {
    /// Frame capacity every policy ran with.
    pub frames: usize,

    /// Length of the reference string.
    pub references: usize,

    /// One entry per policy, in the order requested.
    pub results: Vec<PolicyResult>,
}

impl ComparisonReport {
    /// Fault count for `kind`, if it was part of the comparison.
    pub fn faults(&self, kind: PolicyKind) -> Option<usize> {
        self.stats(kind).map(|stats| stats.faults)
    }

    /// Full statistics for `kind`, if it was part of the comparison.
    pub fn stats(&self, kind: PolicyKind) -> Option<&SimulationStats> {
        self.results
            .iter()
            .find(|result| result.kind == kind)
            .map(|result| &result.stats)
    }

    /// The policy with the fewest faults. Ties go to the earlier entry.
    pub fn best(&self) -> Option<PolicyKind> {
        self.results
            .iter()
            .min_by_key(|result| result.stats.faults)
            .map(|result| result.kind)
    }
}

impl fmt::Display for ComparisonReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- Simulation Results ---")?;
        writeln!(f, "References: {}", self.references)?;
        writeln!(f, "Frames: {}", self.frames)?;
        writeln!(f)?;
        writeln!(f, "Page faults:")?;
        for result in &self.results {
            writeln!(
                f,
                "- {:<8} {:>6} page faults (hit rate {:.2}%)",
                result.kind.name(),
                result.stats.faults,
                result.stats.hit_rate() * 100.0
            )?;
        }
        Ok(())
    }
}
