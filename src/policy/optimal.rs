//! Optimal (Bélády's MIN) replacement policy.
//!
//! Clairvoyant: the victim is chosen by looking ahead in the reference
//! string, so it cannot be realized online. Used as a lower bound for the
//! other policies.

use super::{check_capacity, Access, EvictionPolicy};
use crate::common::Result;

/// Evicts the resident page whose next use lies farthest in the future.
///
/// The policy is bound to the reference string it will be fed and keeps a
/// cursor into it. Each call to [`on_reference`](EvictionPolicy::on_reference)
/// consumes the reference at the cursor.
///
/// # Tie-break
/// Residents are scanned in residency order (load order, with each
/// replacement appended at the end). The first resident that is never used
/// again is evicted; otherwise the first one with the farthest next use.
#[derive(Debug, Clone)]
pub struct OptimalPolicy<'a, P> {
    refs: &'a [P],

    /// Index of the reference about to be processed.
    cursor: usize,

    /// Resident pages in residency order.
    frames: Vec<P>,

    capacity: usize,
}

impl<'a, P: Copy + Eq> OptimalPolicy<'a, P> {
    /// Create an empty frame set that will replay `refs`.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(refs: &'a [P], capacity: usize) -> Result<Self> {
        Ok(Self {
            refs,
            cursor: 0,
            frames: Vec::new(),
            capacity: check_capacity(capacity)?,
        })
    }

    /// Resident pages in residency order.
    pub fn residents(&self) -> &[P] {
        &self.frames
    }

    /// Index of the next reference to `page` strictly after the cursor.
    fn next_use(&self, page: &P) -> Option<usize> {
        let start = self.cursor + 1;
        self.refs
            .get(start..)?
            .iter()
            .position(|p| p == page)
            .map(|offset| start + offset)
    }

    /// Position in `frames` of the page to evict.
    fn victim_index(&self) -> usize {
        let mut victim = 0;
        let mut farthest: Option<usize> = None;

        for (idx, resident) in self.frames.iter().enumerate() {
            match self.next_use(resident) {
                None => return idx,
                Some(next) if farthest.map_or(true, |f| next > f) => {
                    farthest = Some(next);
                    victim = idx;
                }
                Some(_) => {}
            }
        }
        victim
    }
}

impl<P: Copy + Eq> EvictionPolicy<P> for OptimalPolicy<'_, P> {
    fn name(&self) -> &'static str {
        "Optimal"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_count(&self) -> usize {
        self.frames.len()
    }

    fn is_resident(&self, page: &P) -> bool {
        self.frames.contains(page)
    }

    fn on_reference(&mut self, page: P) -> Access<P> {
        debug_assert!(
            self.refs.get(self.cursor).map_or(true, |expected| *expected == page),
            "OptimalPolicy fed a page out of sequence"
        );

        let access = if self.frames.contains(&page) {
            Access::Hit
        } else if self.frames.len() < self.capacity {
            self.frames.push(page);
            Access::Fault { evicted: None }
        } else {
            let evicted = self.frames.remove(self.victim_index());
            self.frames.push(page);
            Access::Fault {
                evicted: Some(evicted),
            }
        };

        self.cursor += 1;
        access
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn replay(refs: &[u32], capacity: usize) -> Vec<Access<u32>> {
        let mut policy = OptimalPolicy::new(refs, capacity).unwrap();
        refs.iter().map(|&p| policy.on_reference(p)).collect()
    }

    #[test]
    fn test_optimal_evicts_never_used_again() {
        // At the reference to 4: 1 recurs, 2 recurs, 3 never does.
        let accesses = replay(&[1, 2, 3, 4, 1, 2], 3);
        assert_eq!(accesses[3], Access::Fault { evicted: Some(3) });
        assert!(accesses[4].is_hit());
        assert!(accesses[5].is_hit());
    }

    #[test]
    fn test_optimal_evicts_farthest_next_use() {
        // At the reference to 4: next uses are 1 -> 6, 2 -> 4, 3 -> 5.
        let accesses = replay(&[1, 2, 3, 4, 2, 3, 1], 3);
        assert_eq!(accesses[3], Access::Fault { evicted: Some(1) });
    }

    #[test]
    fn test_optimal_tie_break_first_in_residency_order() {
        // Neither 1 nor 2 is used again: the first resident scanned wins.
        let accesses = replay(&[1, 2, 3, 3], 2);
        assert_eq!(accesses[2], Access::Fault { evicted: Some(1) });
    }

    #[test]
    fn test_optimal_replacement_appends_to_residency_order() {
        let refs = [1, 2, 3, 4];
        let mut policy = OptimalPolicy::new(&refs, 2).unwrap();
        for &p in &refs[..3] {
            policy.on_reference(p);
        }
        // 1 was evicted for 3, which went to the back.
        assert_eq!(policy.residents(), &[2, 3]);

        assert_eq!(policy.on_reference(4), Access::Fault { evicted: Some(2) });
        assert_eq!(policy.residents(), &[3, 4]);
    }

    #[test]
    fn test_optimal_zero_capacity_rejected() {
        assert!(OptimalPolicy::<u32>::new(&[1, 2], 0).is_err());
    }
}
