// Package metrics: reentrant wall-clock timer for overlapping work spans.

use parking_lot::Mutex;
use tracing::warn;

use crate::time;

use super::Counter;

/// Guarded state of the timer. All three fields move together under one
/// lock so edge detection and the clock sample are a single atomic step.
struct TimerState {
    /// Callers currently inside a start/stop bracket.
    threads: u64,
    /// Millisecond timestamp of the 0 -> 1 transition. Meaningless while
    /// `threads == 0`.
    start_time: i64,
    /// Sum of completed active spans, in milliseconds.
    total_time: i64,
}

/// Reentrant timer measuring the wall-clock union of overlapping spans.
///
/// Any number of callers may bracket their work with `start`/`stop`; the
/// clock is sampled only when the caller count crosses zero, so a period
/// during which several callers overlap accumulates a single wall-clock
/// span rather than one span per caller.
pub struct Timer {
    state: Mutex<TimerState>,
    clock: fn() -> i64,
}

impl Timer {
    /// Creates a timer driven by the system clock.
    pub fn new() -> Self {
        Self::with_clock(time::now_millis)
    }

    /// Creates a timer driven by an explicit millisecond clock. Lets
    /// tests exercise the edge sampling without real sleeps.
    pub fn with_clock(clock: fn() -> i64) -> Self {
        Self {
            state: Mutex::new(TimerState {
                threads: 0,
                start_time: 0,
                total_time: 0,
            }),
            clock,
        }
    }

    /// Starts timing on the first concurrent call and counts the rest.
    pub fn start(&self) {
        let mut s = self.state.lock();
        if s.threads == 0 {
            s.start_time = (self.clock)();
        }
        s.threads += 1;
    }

    /// Counts down one caller and stops timing when the last one leaves.
    ///
    /// # Panics
    ///
    /// Panics when called without a matching prior [`Timer::start`]: a
    /// negative caller count has no valid interpretation and would corrupt
    /// every later edge sample, so the violation fails loudly instead of
    /// being clamped away.
    pub fn stop(&self) {
        let mut s = self.state.lock();
        assert!(
            s.threads > 0,
            "Timer::stop called without a matching Timer::start"
        );
        s.threads -= 1;
        if s.threads == 0 {
            let elapsed = (self.clock)() - s.start_time;
            if elapsed < 0 {
                warn!(
                    elapsed_ms = elapsed,
                    "clock ran backwards across an active span, clamping to zero"
                );
            }
            s.total_time += elapsed.max(0);
        }
    }

    /// Whether any caller is inside a start/stop bracket right now.
    /// A snapshot only; it may be stale by the time it is observed.
    pub fn running(&self) -> bool {
        self.state.lock().threads > 0
    }

    /// Number of callers currently inside a start/stop bracket.
    pub fn thread_count(&self) -> u64 {
        self.state.lock().threads
    }

    /// Total of completed active spans, in milliseconds. A span that is
    /// still open is not included until its last caller stops.
    pub fn elapsed_millis(&self) -> i64 {
        self.state.lock().total_time
    }

    /// Events per second: the counter's value over the accumulated active
    /// time. Returns NaN while no active span has completed yet, so "no
    /// measurement" is never mistaken for a measured zero.
    ///
    /// The counter and timer snapshots are read independently; a momentary
    /// mismatch between the two shows up as rate jitter, not corruption.
    pub fn rate(&self, count: &Counter) -> f64 {
        let total_time = self.state.lock().total_time;
        if total_time == 0 {
            return f64::NAN;
        }
        count.get() as f64 / (total_time as f64 / 1000.0)
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
