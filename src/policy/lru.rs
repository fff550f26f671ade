//! LRU (Least Recently Used) replacement policy.

use std::collections::VecDeque;

use super::{check_capacity, Access, EvictionPolicy};
use crate::common::Result;

/// Evicts the page whose last reference is oldest.
///
/// Same eviction end as [`FifoPolicy`](super::FifoPolicy); the difference
/// is that a hit moves the page to the most-recently-used end.
#[derive(Debug, Clone)]
pub struct LruPolicy<P> {
    /// Resident pages from least (front) to most (back) recently used.
    order: VecDeque<P>,

    capacity: usize,
}

impl<P: Copy + Eq> LruPolicy<P> {
    /// Create an empty LRU frame set.
    ///
    /// # Errors
    /// `Error::InvalidCapacity` if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            order: VecDeque::new(),
            capacity: check_capacity(capacity)?,
        })
    }

    /// Resident pages, least recently used first.
    pub fn residents(&self) -> impl Iterator<Item = &P> {
        self.order.iter()
    }
}

impl<P: Copy + Eq> EvictionPolicy<P> for LruPolicy<P> {
    fn name(&self) -> &'static str {
        "LRU"
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn resident_count(&self) -> usize {
        self.order.len()
    }

    fn is_resident(&self, page: &P) -> bool {
        self.order.contains(page)
    }

    fn on_reference(&mut self, page: P) -> Access<P> {
        if let Some(pos) = self.order.iter().position(|&p| p == page) {
            self.order.remove(pos);
            self.order.push_back(page);
            return Access::Hit;
        }

        let evicted = if self.order.len() == self.capacity {
            self.order.pop_front()
        } else {
            None
        };
        self.order.push_back(page);

        Access::Fault { evicted }
    }
}
