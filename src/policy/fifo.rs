//! FIFO (First-In-First-Out) replacement policy.

use std::collections::VecDeque;

use super::{check_capacity, Access, EvictionPolicy};
use crate::common::Result;

/// Evicts pages in the order they were loaded.
///
/// Re-referencing a resident page does not change its position, which is
/// what makes FIFO susceptible to Bélády's anomaly.
#[derive(Debug, Clone)]
pub struct FifoPolicy<P> {
    /// Resident pages in arrival order (front = oldest).
    queue: VecDeque<P>,

    capacity: usize,
}

impl<P: Copy + Eq> FifoPolicy<P> {
    /// Create an empty FIFO frame set.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            queue: VecDeque::new(),
            capacity: check_capacity(capacity)?,
        })
    }

    /// Resident pages, oldest first.
    pub fn residents(&self) -> impl Iterator<Item = &P> {
        self.queue.iter()
    }
}

impl<P: Copy + Eq> EvictionPolicy<P> for FifoPolicy<P> {
    fn name(&self) -> &'static str {
        "FIFO"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_count(&self) -> usize {
        self.queue.len()
    }

    fn is_resident(&self, page: &P) -> bool {
        self.queue.contains(page)
    }

    fn on_reference(&mut self, page: P) -> Access<P> {
        if self.queue.contains(&page) {
            return Access::Hit;
        }

        let evicted = if self.queue.len() == self.capacity {
            self.queue.pop_front()
        } else {
            None
        };
        self.queue.push_back(page);

        Access::Fault { evicted }
    }
}
