//! CLOCK (second-chance) replacement policy.
//!
//! # Ring layout
//! ```text
//!            hand
//!             ↓
//!   ┌───────┬───────┬───────┬───────┐
//!   │ 7 (1) │ 0 (0) │ 1 (1) │ empty │   page (used bit)
//!   └───────┴───────┴───────┴───────┘
//!     slot 0  slot 1  slot 2  slot 3     (wraps to slot 0)
//! ```
//!
//! On a miss the hand sweeps forward. A slot with its used bit set is
//! demoted and skipped; the first empty or unused slot receives the page.

use super::{check_capacity, Access, EvictionPolicy};
use crate::common::{FrameId, Result};

/// One frame of the clock ring.
///
/// An empty slot always has `used == false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<P> {
    page: Option<P>,
    used: bool,
}

impl<P> Slot<P> {
    const EMPTY: Self = Slot {
        page: None,
        used: false,
    };

    /// The page in this slot, if any.
    pub fn page(&self) -> Option<&P> {
        self.page.as_ref()
    }

    /// Whether the used (second-chance) bit is set.
    pub fn is_used(&self) -> bool {
        self.used
    }
}

/// Second-chance replacement over a fixed ring of frames.
#[derive(Debug, Clone)]
pub struct ClockPolicy<P> {
    /// Fixed-size ring; never grows or shrinks after construction.
    slots: Box<[Slot<P>]>,

    /// Next slot to inspect on a miss.
    hand: FrameId,
}

impl<P: Copy + Eq> ClockPolicy<P> {
    /// Create a ring of `capacity` empty slots with the hand at slot 0.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        let capacity = check_capacity(capacity)?;
        Ok(Self {
            slots: vec![Slot::EMPTY; capacity].into_boxed_slice(),
            hand: FrameId::default(),
        })
    }

    /// Current hand position.
    pub fn hand(&self) -> FrameId {
        self.hand
    }

    /// Inspect a slot of the ring.
    pub fn slot(&self, frame_id: FrameId) -> Option<&Slot<P>> {
        self.slots.get(frame_id.0)
    }

    fn find(&self, page: &P) -> Option<FrameId> {
        self.slots
            .iter()
            .position(|slot| slot.page.as_ref() == Some(page))
            .map(FrameId::new)
    }
}

impl<P: Copy + Eq> EvictionPolicy<P> for ClockPolicy<P> {
    fn name(&self) -> &'static str {
        "Clock"
    }

    fn capacity(&self) -> usize {
        self.slots.len()
    }

    fn resident_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.page.is_some()).count()
    }

    fn is_resident(&self, page: &P) -> bool {
        self.find(page).is_some()
    }

    fn on_reference(&mut self, page: P) -> Access<P> {
        if let Some(frame_id) = self.find(&page) {
            self.slots[frame_id.0].used = true;
            return Access::Hit;
        }

        let capacity = self.slots.len();

        // Each pass over a used slot clears its bit, so after one full
        // revolution the hand reaches a slot with used == false.
        loop {
            let frame_id = self.hand;
            self.hand = frame_id.next(capacity);

            let slot = &mut self.slots[frame_id.0];
            if slot.used {
                slot.used = false;
                continue;
            }

            let evicted = slot.page.replace(page);
            slot.used = true;
            return Access::Fault { evicted };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pages(policy: &ClockPolicy<u32>) -> Vec<Option<u32>> {
        (0..policy.capacity())
            .map(|i| policy.slot(FrameId::new(i)).and_then(|s| s.page().copied()))
            .collect()
    }

    #[test]
    fn test_clock_fills_empty_slots_in_order() {
        let mut policy = ClockPolicy::new(3).unwrap();

        for page in [7, 0, 1] {
            assert_eq!(policy.on_reference(page), Access::Fault { evicted: None });
        }
        assert_eq!(pages(&policy), vec![Some(7), Some(0), Some(1)]);
        assert_eq!(policy.hand(), FrameId::new(0));
    }

    #[test]
    fn test_clock_all_used_sweeps_full_revolution() {
        let mut policy = ClockPolicy::new(3).unwrap();
        for page in [7, 0, 1] {
            policy.on_reference(page);
        }

        // Every bit is set: one revolution clears them all, then slot 0 goes.
        assert_eq!(policy.on_reference(2), Access::Fault { evicted: Some(7) });
        assert_eq!(policy.hand(), FrameId::new(1));
        assert!(policy.slot(FrameId::new(0)).unwrap().is_used());
        assert!(!policy.slot(FrameId::new(1)).unwrap().is_used());
        assert!(!policy.slot(FrameId::new(2)).unwrap().is_used());
    }

    #[test]
    fn test_clock_hit_grants_second_chance() {
        let mut policy = ClockPolicy::new(3).unwrap();
        for page in [7, 0, 1, 2] {
            policy.on_reference(page);
        }
        // Ring: [2(1), 0(0), 1(0)], hand at slot 1.
        assert_eq!(policy.on_reference(0), Access::Hit);
        assert_eq!(policy.hand(), FrameId::new(1));

        // Slot 1 is spared (bit cleared), slot 2 is evicted.
        assert_eq!(policy.on_reference(3), Access::Fault { evicted: Some(1) });
        assert_eq!(pages(&policy), vec![Some(2), Some(0), Some(3)]);
        assert_eq!(policy.hand(), FrameId::new(0));
    }

    #[test]
    fn test_clock_single_slot() {
        let mut policy = ClockPolicy::new(1).unwrap();
        assert_eq!(policy.on_reference(1), Access::Fault { evicted: None });
        assert_eq!(policy.on_reference(1), Access::Hit);
        assert_eq!(policy.on_reference(2), Access::Fault { evicted: Some(1) });
        assert_eq!(policy.resident_count(), 1);
        assert_eq!(policy.hand(), FrameId::new(0));
    }

    #[test]
    fn test_clock_zero_capacity_rejected() {
        assert!(ClockPolicy::<u32>::new(0).is_err());
    }
}
