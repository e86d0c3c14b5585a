//! Scroll/time progress mapping.
//!
//! Every function takes the progress value and its domain explicitly; nothing
//! in here reads a clock or a scroll position. Callers that work in
//! unnormalized units (elapsed seconds, scroll pixels) pass the matching
//! domain instead of pre-normalizing.

use crate::error::{ArabesqueError, ArabesqueResult};

/// Epsilon used by [`active_index`] so that progress 1.0 still lands in the
/// last bucket instead of one past it. The value is part of the bucketing
/// contract, not a tuning knob.
const ACTIVE_INDEX_EPS: f64 = 0.1;

/// Linearly map `value` from `domain` into `range`, clamped at the domain
/// boundaries. A degenerate domain (`d0 == d1`) maps everything to `r0`.
pub fn map_progress(value: f64, domain: [f64; 2], range: [f64; 2]) -> f64 {
    let [d0, d1] = domain;
    let [r0, r1] = range;
    if d0 == d1 || value <= d0 {
        return r0;
    }
    if value >= d1 {
        return r1;
    }
    let t = (value - d0) / (d1 - d0);
    r0 + (r1 - r0) * t
}

/// Clamped-linear interpolation across consecutive `(domain, range)` stops.
///
/// Values before the first stop take its range value; values after the last
/// stop take the last range value. Stops must be non-empty and sorted by
/// domain.
pub fn map_piecewise(value: f64, stops: &[(f64, f64)]) -> ArabesqueResult<f64> {
    if stops.is_empty() {
        return Err(ArabesqueError::invalid_spec(
            "piecewise mapping needs at least one stop",
        ));
    }
    if !stops.windows(2).all(|w| w[0].0 <= w[1].0) {
        return Err(ArabesqueError::invalid_spec(
            "piecewise stops must be sorted by domain",
        ));
    }

    let idx = stops.partition_point(|s| s.0 <= value);
    if idx == 0 {
        return Ok(stops[0].1);
    }
    if idx >= stops.len() {
        return Ok(stops[stops.len() - 1].1);
    }

    let a = stops[idx - 1];
    let b = stops[idx];
    Ok(map_progress(value, [a.0, b.0], [a.1, b.1]))
}

/// Bucket unit progress into an item index in `[0, count)`.
///
/// `value` is clamped into `[0, 1]` first; `count == 0` is an invalid spec.
pub fn active_index(value: f64, count: usize) -> ArabesqueResult<usize> {
    if count == 0 {
        return Err(ArabesqueError::invalid_spec(
            "active_index count must be >= 1",
        ));
    }
    let v = value.clamp(0.0, 1.0);
    let idx = (v * (count as f64 - ACTIVE_INDEX_EPS)).floor() as usize;
    Ok(idx.min(count - 1))
}

/// Sub-domain of unit progress occupied by item `index` in a staggered
/// sequence of `count` items.
///
/// Each item runs for `item_share` of the whole sequence; starts are spaced
/// evenly so the first window opens at 0 and the last closes at 1. Feed the
/// result to [`map_progress`] to get item-local progress.
pub fn stagger_domain(index: usize, count: usize, item_share: f64) -> ArabesqueResult<[f64; 2]> {
    if count == 0 {
        return Err(ArabesqueError::invalid_spec(
            "stagger_domain count must be >= 1",
        ));
    }
    if index >= count {
        return Err(ArabesqueError::invalid_spec(
            "stagger_domain index must be < count",
        ));
    }
    let share = if item_share.is_finite() {
        item_share.clamp(0.0, 1.0)
    } else {
        1.0
    };
    if count == 1 {
        return Ok([0.0, share]);
    }
    let start = index as f64 * (1.0 - share) / (count as f64 - 1.0);
    Ok([start, start + share])
}
