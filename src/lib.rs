//! evictionsim - compare page-replacement policies on a reference string.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          evictionsim                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │        Input (trace/)  "7, 0, 1, 2" → Vec<PageId>        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │           Simulator (simulator/)                         │   │
//! │  │   simulate · compare · sweep · belady_anomalies          │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  Policies: FIFO | LRU | Optimal | Clock          │   │   │
//! │  │   │         (one EvictionPolicy trait)               │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │      SimulationStats + ComparisonReport (display)        │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (PageId, FrameId, Error, config)
//! - [`policy`] - The replacement policies
//! - [`simulator`] - Replaying reference strings and collecting results
//! - [`trace`] - Parsing reference strings and frame counts
//!
//! # Quick Start
//! ```
//! use evictionsim::{parse_reference_string, simulate_lru, simulate_optimal};
//!
//! let refs = parse_reference_string("1, 2, 3, 1, 4, 2").unwrap();
//! let lru = simulate_lru(&refs, 3).unwrap();
//! let opt = simulate_optimal(&refs, 3).unwrap();
//! assert!(opt <= lru);
//! ```

pub mod common;
pub mod error;
pub mod policy;
pub mod simulator;
pub mod trace;

// Re-export commonly used items at crate root for convenience
pub use common::config::{DEFAULT_FRAME_COUNT, DEFAULT_REFERENCE_STRING};
pub use common::{Error, FrameId, PageId, Result};

pub use policy::{
    Access, ClockPolicy, EvictionPolicy, FifoPolicy, LruPolicy, OptimalPolicy, PolicyKind,
};
pub use simulator::{
    belady_anomalies, compare, run_policy, simulate, simulate_clock, simulate_fifo,
    simulate_lru, simulate_optimal, sweep, ComparisonReport, PolicyResult, SimulationStats,
};
pub use trace::{distinct_pages, load_reference_file, parse_frame_count, parse_reference_string};
