//! Page-replacement policies.
//!
//! Every policy implements [`EvictionPolicy`]: it is fed one page reference
//! at a time and answers whether that reference faulted.
//!
//! Implemented policies:
//! - [`FifoPolicy`] - evict the page that arrived first
//! - [`LruPolicy`] - evict the least recently used page
//! - [`OptimalPolicy`] - evict the page used farthest in the future (clairvoyant)
//! - [`ClockPolicy`] - second-chance ring with a used bit per frame
//!
//! New policies (LFU, 2Q, ...) plug in by implementing the trait; nothing
//! else in the crate needs to change except [`PolicyKind`] if the policy
//! should be selectable by name.

mod clock;
mod fifo;
mod kind;
mod lru;
mod optimal;

pub use clock::{ClockPolicy, Slot};
pub use fifo::FifoPolicy;
pub use kind::PolicyKind;
pub use lru::LruPolicy;
pub use optimal::OptimalPolicy;

use crate::common::{Error, Result};

/// Outcome of a single page reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access<P> {
    /// The page was resident.
    Hit,

    /// The page was absent and has been loaded.
    ///
    /// `evicted` holds the page displaced to make room, or `None` if a free
    /// frame was used.
    Fault { evicted: Option<P> },
}

impl<P> Access<P> {
    /// Whether this reference was a page fault.
    #[inline]
    pub fn is_fault(&self) -> bool {
        matches!(self, Access::Fault { .. })
    }

    /// Whether this reference was a hit.
    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, Access::Hit)
    }

    /// The page evicted by this reference, if any.
    pub fn evicted(&self) -> Option<&P> {
        match self {
            Access::Fault { evicted } => evicted.as_ref(),
            Access::Hit => None,
        }
    }
}

/// A page-replacement policy over a fixed number of frames.
///
/// Implementations own their frame-set state outright; two policy values
/// never share anything, so independent simulations can run in any order.
pub trait EvictionPolicy<P> {
    /// Short display name ("FIFO", "LRU", ...).
    fn name(&self) -> &'static str;

    /// Maximum number of resident pages.
    fn capacity(&self) -> usize;

    /// Number of pages currently resident.
    fn resident_count(&self) -> usize;

    /// Whether `page` currently occupies a frame.
    fn is_resident(&self, page: &P) -> bool;

    /// Process one reference to `page`, updating residency.
    fn on_reference(&mut self, page: P) -> Access<P>;
}

/// Reject a zero frame capacity.
pub(crate) fn check_capacity(capacity: usize) -> Result<usize> {
    if capacity == 0 {
        return Err(Error::InvalidCapacity(0));
    }
    Ok(capacity)
}
