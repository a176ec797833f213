#[cfg(test)]
mod tests {
    use crate::metrics::MinerMetrics;

    #[test]
    fn test_fresh_handle_has_no_data() {
        let m = MinerMetrics::new();
        let snap = m.snapshot();
        assert_eq!(snap.transactions_validated, 0);
        assert_eq!(snap.solver_runs, 0);
        assert_eq!(snap.solution_target_checks, 0);
        assert!(!snap.mining_active);
        assert_eq!(snap.mining_threads, 0);
        assert_eq!(snap.mining_millis, 0);
        assert!(snap.solution_rate.is_nan());
        assert_eq!(snap.uptime_secs, None);
        assert_eq!(snap.mined_blocks, 0);
    }

    #[test]
    fn test_snapshot_reflects_recorded_events() {
        let m = MinerMetrics::new();
        m.transactions_validated.increment();
        m.transactions_validated.increment();
        m.solver_runs.increment();
        m.solution_target_checks.increment();
        m.mining_timer.start();

        let snap = m.snapshot();
        assert_eq!(snap.transactions_validated, 2);
        assert_eq!(snap.solver_runs, 1);
        assert_eq!(snap.solution_target_checks, 1);
        assert!(snap.mining_active);
        assert_eq!(snap.mining_threads, 1);

        m.mining_timer.stop();
        assert!(!m.mining_timer.running());
    }

    #[test]
    fn test_uptime_starts_after_mark() {
        let m = MinerMetrics::new();
        assert_eq!(m.uptime_secs(), None);
        m.mark_start_time();
        let uptime = m.uptime_secs().unwrap();
        assert!(uptime >= 0);
    }

    #[test]
    fn test_tracks_mined_blocks_in_order() {
        let m = MinerMetrics::new();
        let first = [0x11u8; 32];
        let second = [0x22u8; 32];
        m.track_mined_block(first);
        m.track_mined_block(second);

        assert_eq!(m.mined_block_count(), 2);
        assert_eq!(m.mined_block_hashes(), vec![first, second]);
    }

    #[test]
    fn test_local_solution_rate_follows_mining_timer() {
        let m = MinerMetrics::new();
        assert!(m.local_solution_rate().is_nan());
        // The rate becomes numeric only once a mining span completes;
        // the exact value is covered by the timer tests.
    }
}
