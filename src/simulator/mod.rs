//! The eviction simulator.
//!
//! Replays a reference string through a policy and counts page faults.
//!
//! # Components
//! - [`simulate`] - drive any [`EvictionPolicy`] over a reference string
//! - [`simulate_fifo`], [`simulate_lru`], [`simulate_optimal`],
//!   [`simulate_clock`] - fault count for one built-in policy
//! - [`compare`] / [`sweep`] / [`belady_anomalies`] - multi-run analyses
//! - [`SimulationStats`] / [`ComparisonReport`] - results
//!
//! Every run builds its own frame set, so runs never observe each other
//! and repeating a run gives the same answer.

mod report;
mod stats;

pub use report::{ComparisonReport, PolicyResult};
pub use stats::SimulationStats;

use tracing::{debug, trace};

use crate::common::{Error, Result};
use crate::policy::{
    Access, ClockPolicy, EvictionPolicy, FifoPolicy, LruPolicy, OptimalPolicy, PolicyKind,
};

/// Replay `refs` through `policy` once.
pub fn simulate<P, E>(mut policy: E, refs: &[P]) -> SimulationStats
where
    P: Copy,
    E: EvictionPolicy<P>,
{
    let mut stats = SimulationStats::new();

    for (position, &page) in refs.iter().enumerate() {
        match policy.on_reference(page) {
            Access::Hit => stats.hits += 1,
            Access::Fault { evicted } => {
                stats.faults += 1;
                if evicted.is_some() {
                    stats.evictions += 1;
                    trace!(policy = policy.name(), position, "evicted resident page");
                }
            }
        }
    }
    stats.references = refs.len();

    debug!(
        policy = policy.name(),
        capacity = policy.capacity(),
        references = stats.references,
        faults = stats.faults,
        evictions = stats.evictions,
        "simulation finished"
    );
    stats
}

/// Page faults under FIFO replacement.
///
/// # Errors
/// `Error::InvalidCapacity` if `capacity` is 0.
pub fn simulate_fifo<P: Copy + Eq>(refs: &[P], capacity: usize) -> Result<usize> {
    Ok(simulate(FifoPolicy::new(capacity)?, refs).faults)
}

/// Page faults under LRU replacement.
///
/// # Errors
/// `Error::InvalidCapacity` if `capacity` is 0.
pub fn simulate_lru<P: Copy + Eq>(refs: &[P], capacity: usize) -> Result<usize> {
    Ok(simulate(LruPolicy::new(capacity)?, refs).faults)
}

/// Page faults under Optimal (clairvoyant) replacement.
///
/// # Errors
/// `Error::InvalidCapacity` if `capacity` is 0.
pub fn simulate_optimal<P: Copy + Eq>(refs: &[P], capacity: usize) -> Result<usize> {
    Ok(simulate(OptimalPolicy::new(refs, capacity)?, refs).faults)
}

/// Page faults under Clock (second-chance) replacement.
///
/// # Errors
/// `Error::InvalidCapacity` if `capacity` is 0.
pub fn simulate_clock<P: Copy + Eq>(refs: &[P], capacity: usize) -> Result<usize> {
    Ok(simulate(ClockPolicy::new(capacity)?, refs).faults)
}

/// Run one built-in policy and return its full statistics.
pub fn run_policy<P: Copy + Eq>(
    kind: PolicyKind,
    refs: &[P],
    capacity: usize,
) -> Result<SimulationStats> {
    let stats = match kind {
        PolicyKind::Fifo => simulate(FifoPolicy::new(capacity)?, refs),
        PolicyKind::Lru => simulate(LruPolicy::new(capacity)?, refs),
        PolicyKind::Optimal => simulate(OptimalPolicy::new(refs, capacity)?, refs),
        PolicyKind::Clock => simulate(ClockPolicy::new(capacity)?, refs),
    };
    Ok(stats)
}

/// Run each of `kinds` against the same input.
///
/// # Example
/// ```
/// use evictionsim::{compare, PolicyKind};
///
/// let refs = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
/// let report = compare(&refs, 3, &PolicyKind::ALL).unwrap();
/// assert_eq!(report.faults(PolicyKind::Fifo), Some(15));
/// assert_eq!(report.faults(PolicyKind::Lru), Some(12));
/// assert_eq!(report.faults(PolicyKind::Optimal), Some(9));
/// ```
pub fn compare<P: Copy + Eq>(
    refs: &[P],
    capacity: usize,
    kinds: &[PolicyKind],
) -> Result<ComparisonReport> {
    let results = kinds
        .iter()
        .map(|&kind| {
            run_policy(kind, refs, capacity).map(|stats| PolicyResult { kind, stats })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(ComparisonReport {
        frames: capacity,
        references: refs.len(),
        results,
    })
}

/// Fault counts for `kind` at each capacity, as `(capacity, faults)` pairs.
///
/// # Errors
/// `Error::InvalidCapacity` if any capacity is 0.
pub fn sweep<P, I>(kind: PolicyKind, refs: &[P], capacities: I) -> Result<Vec<(usize, usize)>>
where
    P: Copy + Eq,
    I: IntoIterator<Item = usize>,
{
    capacities
        .into_iter()
        .map(|capacity| run_policy(kind, refs, capacity).map(|stats| (capacity, stats.faults)))
        .collect()
}

/// Capacities `c` in `1..max_capacity` where FIFO faults more with `c + 1`
/// frames than with `c` (Bélády's anomaly).
///
/// # Errors
/// `Error::InvalidCapacity` if `max_capacity` is 0.
pub fn belady_anomalies<P: Copy + Eq>(refs: &[P], max_capacity: usize) -> Result<Vec<usize>> {
    if max_capacity == 0 {
        return Err(Error::InvalidCapacity(0));
    }

    let faults = sweep(PolicyKind::Fifo, refs, 1..=max_capacity)?;
    let anomalies: Vec<usize> = faults
        .windows(2)
        .filter(|pair| pair[1].1 > pair[0].1)
        .map(|pair| pair[0].0)
        .collect();

    if !anomalies.is_empty() {
        debug!(?anomalies, "FIFO fault count rose with more frames");
    }
    Ok(anomalies)
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: [u32; 20] = [7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1];
    const BELADY: [u32; 12] = [1, 2, 3, 4, 1, 2, 5, 1, 2, 3, 4, 5];

    #[test]
    fn test_simulate_counts() {
        let stats = simulate(LruPolicy::new(3).unwrap(), &CANONICAL);
        assert_eq!(stats.references, 20);
        assert_eq!(stats.faults, 12);
        assert_eq!(stats.hits, 8);
        assert_eq!(stats.evictions, 9);
    }

    #[test]
    fn test_canonical_fault_counts() {
        assert_eq!(simulate_fifo(&CANONICAL, 3).unwrap(), 15);
        assert_eq!(simulate_lru(&CANONICAL, 3).unwrap(), 12);
        assert_eq!(simulate_optimal(&CANONICAL, 3).unwrap(), 9);
        assert_eq!(simulate_clock(&CANONICAL, 3).unwrap(), 14);
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(simulate_fifo(&CANONICAL, 0), Err(Error::InvalidCapacity(0))));
        assert!(simulate_lru(&CANONICAL, 0).is_err());
        assert!(simulate_optimal(&CANONICAL, 0).is_err());
        assert!(simulate_clock(&CANONICAL, 0).is_err());
        assert!(compare(&CANONICAL, 0, &PolicyKind::ALL).is_err());
    }

    #[test]
    fn test_empty_reference_string() {
        let refs: [u32; 0] = [];
        for kind in PolicyKind::ALL {
            let stats = run_policy(kind, &refs, 4).unwrap();
            assert_eq!(stats, SimulationStats::new());
        }
    }

    #[test]
    fn test_compare_preserves_requested_order() {
        let kinds = [PolicyKind::Clock, PolicyKind::Fifo];
        let report = compare(&CANONICAL, 3, &kinds).unwrap();
        let order: Vec<_> = report.results.iter().map(|r| r.kind).collect();
        assert_eq!(order, kinds);
        assert_eq!(report.references, 20);
        assert_eq!(report.frames, 3);
    }

    #[test]
    fn test_sweep() {
        let faults = sweep(PolicyKind::Fifo, &BELADY, 3..=4).unwrap();
        assert_eq!(faults, vec![(3, 9), (4, 10)]);
        assert!(sweep(PolicyKind::Lru, &BELADY, [0]).is_err());
    }

    #[test]
    fn test_belady_anomalies() {
        assert_eq!(belady_anomalies(&BELADY, 5).unwrap(), vec![3]);
        assert!(belady_anomalies(&[1u32, 2, 3], 3).unwrap().is_empty());
        assert!(belady_anomalies(&BELADY, 0).is_err());
    }
}
