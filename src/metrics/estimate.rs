// Package metrics: network height estimation from elapsed chain time.

/// Estimates the network's current block height.
///
/// Extrapolates how many blocks should have elapsed between the anchor and
/// the tip's median timestamp at the expected per-block spacing, and
/// returns the larger of that estimate and the locally known `height` (the
/// estimate never says the network is behind what this node has already
/// seen). The anchor is the last known checkpoint, or genesis when no
/// checkpoint exists (`checkpoint_height == 0`).
///
/// All timestamps are in the same unit as `target_spacing` (seconds in
/// practice). A non-positive spacing yields no extrapolation.
pub fn estimate_net_height(
    height: i64,
    tip_median_time: i64,
    checkpoint_height: i64,
    checkpoint_time: i64,
    genesis_time: i64,
    target_spacing: i64,
) -> i64 {
    if target_spacing <= 0 {
        return height;
    }
    let (anchor_height, anchor_time) = if checkpoint_height > 0 {
        (checkpoint_height, checkpoint_time)
    } else {
        (0, genesis_time)
    };
    let elapsed = (tip_median_time - anchor_time).max(0);
    let estimated = anchor_height + elapsed / target_spacing;
    height.max(estimated)
}
