// Package metrics: the long-lived metrics handle for the mining loop.

use std::sync::atomic::{AtomicI64, Ordering};

use crate::time;

use super::{BlockHash, Counter, MinedBlocks, Timer};

/// All instrumentation for the mining/validation loop in one long-lived
/// value. Constructed once near process start and shared by `Arc` with
/// every subsystem that records events; kept off language-level globals so
/// the loop stays testable in isolation.
pub struct MinerMetrics {
    /// Transactions this node has validated.
    pub transactions_validated: Counter,
    /// Solver invocations.
    pub solver_runs: Counter,
    /// Candidate solutions checked against the target.
    pub solution_target_checks: Counter,
    /// Active mining time across all worker threads.
    pub mining_timer: Timer,
    /// Millisecond wall-clock mark of when mining began. Zero until
    /// `mark_start_time` is called.
    started_at: AtomicI64,
    mined: MinedBlocks,
}

impl MinerMetrics {
    /// Creates a fresh metrics handle with all gauges at zero.
    pub fn new() -> Self {
        Self {
            transactions_validated: Counter::new(),
            solver_runs: Counter::new(),
            solution_target_checks: Counter::new(),
            mining_timer: Timer::new(),
            started_at: AtomicI64::new(0),
            mined: MinedBlocks::new(),
        }
    }

    /// Marks the moment the mining loop started.
    pub fn mark_start_time(&self) {
        self.started_at.store(time::now_millis(), Ordering::Relaxed);
    }

    /// Seconds since `mark_start_time`, or None before it was called.
    pub fn uptime_secs(&self) -> Option<i64> {
        let started = self.started_at.load(Ordering::Relaxed);
        (started > 0).then(|| (time::now_millis() - started).max(0) / 1000)
    }

    /// Local solution rate in solutions per second. NaN until the mining
    /// timer has completed at least one active span.
    pub fn local_solution_rate(&self) -> f64 {
        self.mining_timer.rate(&self.solution_target_checks)
    }

    /// Records a block mined by this node.
    pub fn track_mined_block(&self, hash: BlockHash) {
        self.mined.track(hash);
    }

    /// Number of blocks mined during this process.
    pub fn mined_block_count(&self) -> usize {
        self.mined.len()
    }

    /// Hashes of blocks mined during this process, oldest first.
    pub fn mined_block_hashes(&self) -> Vec<BlockHash> {
        self.mined.hashes()
    }

    /// One point-in-time read of every displayed metric. Each field is an
    /// independent snapshot; repeated reads are not mutually consistent.
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            transactions_validated: self.transactions_validated.get(),
            solver_runs: self.solver_runs.get(),
            solution_target_checks: self.solution_target_checks.get(),
            mining_active: self.mining_timer.running(),
            mining_threads: self.mining_timer.thread_count(),
            mining_millis: self.mining_timer.elapsed_millis(),
            solution_rate: self.local_solution_rate(),
            uptime_secs: self.uptime_secs(),
            mined_blocks: self.mined.len(),
        }
    }
}

impl Default for MinerMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Point-in-time view of the miner metrics for display consumers.
#[derive(Clone, Debug)]
pub struct MetricsSnapshot {
    pub transactions_validated: u64,
    pub solver_runs: u64,
    pub solution_target_checks: u64,
    pub mining_active: bool,
    pub mining_threads: u64,
    pub mining_millis: i64,
    /// NaN while no active mining span has completed yet.
    pub solution_rate: f64,
    pub uptime_secs: Option<i64>,
    pub mined_blocks: usize,
}
