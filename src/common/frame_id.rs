//! Frame identifier type.

use std::fmt;

/// Identifies a frame slot in a fixed-size frame ring.
///
/// Wraps a `usize` so it can index the slot array directly:
/// `slots[frame_id.0]`.
///
/// # Example
/// ```
/// use evictionsim::FrameId;
///
/// let frame_id = FrameId::new(2);
/// assert_eq!(frame_id.next(3), FrameId::new(0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FrameId(pub usize);

impl FrameId {
    /// Create a new FrameId.
    #[inline]
    pub fn new(id: usize) -> Self {
        FrameId(id)
    }

    /// The following slot in a ring of `capacity` frames, wrapping to 0.
    #[inline]
    pub fn next(self, capacity: usize) -> Self {
        FrameId((self.0 + 1) % capacity)
    }
}

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frame({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_id_new() {
        let fid = FrameId::new(10);
        assert_eq!(fid.0, 10);
    }

    #[test]
    fn test_frame_id_next_wraps() {
        assert_eq!(FrameId::new(0).next(3), FrameId::new(1));
        assert_eq!(FrameId::new(2).next(3), FrameId::new(0));
        assert_eq!(FrameId::new(0).next(1), FrameId::new(0));
    }

    #[test]
    fn test_frame_id_display() {
        assert_eq!(format!("{}", FrameId::new(42)), "Frame(42)");
    }
}
