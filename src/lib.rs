// Package hashmeter provides in-process instrumentation for a long-running
// mining/validation loop: event counters, a reentrant wall-clock timer for
// overlapping work spans, and the throughput rate derived from the two.

#[path = "shared/time/mod.rs"]
pub mod time;

pub mod metrics;

#[cfg(test)]
mod tests;

// Re-export main types
pub use metrics::{
    estimate_net_height, BlockHash, Counter, MetricsSnapshot, MinedBlocks, MinerMetrics, Timer,
};
