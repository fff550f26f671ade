//! Per-run simulation statistics.

use std::fmt;

/// Counters collected while replaying one reference string.
///
/// Invariants once a run completes:
/// - `hits + faults == references`
/// - `evictions <= faults`
///
/// # Example
/// ```
/// use evictionsim::{simulate, FifoPolicy};
///
/// let stats = simulate(FifoPolicy::new(2).unwrap(), &[1, 2, 1, 3]);
/// assert_eq!(stats.faults, 3);
/// assert_eq!(stats.hits, 1);
/// println!("{}", stats);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SimulationStats {
    /// Number of references replayed.
    pub references: usize,

    /// References that found their page resident.
    pub hits: usize,

    /// References that missed (page faults).
    pub faults: usize,

    /// Faults that displaced a resident page.
    pub evictions: usize,
}

impl SimulationStats {
    /// Create a stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of references that hit (0.0 to 1.0).
    pub fn hit_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.hits as f64 / self.references as f64
        }
    }

    /// Fraction of references that faulted (0.0 to 1.0).
    pub fn fault_rate(&self) -> f64 {
        if self.references == 0 {
            0.0
        } else {
            self.faults as f64 / self.references as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stats {{ references: {}, hits: {}, faults: {}, evictions: {}, hit_rate: {:.2}% }}",
            self.references,
            self.hits,
            self.faults,
            self.evictions,
            self.hit_rate() * 100.0
        )
    }
}
