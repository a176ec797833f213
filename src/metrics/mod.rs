// Package metrics provides counters and timers for the mining loop.

pub mod counter;
pub mod estimate;
pub mod mined;
pub mod miner;
pub mod timer;

#[cfg(test)]
mod miner_test;

// Re-export main types
pub use counter::Counter;
pub use estimate::estimate_net_height;
pub use mined::{BlockHash, MinedBlocks};
pub use miner::{MetricsSnapshot, MinerMetrics};
pub use timer::Timer;
