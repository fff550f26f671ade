//! Configuration constants for evictionsim.

/// Number of frames used when none is given.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// The textbook reference string used when no input is given.
///
/// With [`DEFAULT_FRAME_COUNT`] frames this produces 15 FIFO faults,
/// 12 LRU faults and 9 Optimal faults.
pub const DEFAULT_REFERENCE_STRING: &str = "7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1";

/// Largest frame count a `--sweep` will run; larger requests are clamped.
pub const MAX_SWEEP_FRAMES: usize = 1024;
