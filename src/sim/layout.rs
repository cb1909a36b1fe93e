//! Initial platform layout generation
//!
//! Rejection sampling under two pairwise constraints: no AABB overlap, and
//! no diagonal proximity (both axes within `min_gap` at once). The sampling
//! is bounded; when a candidate cannot be found the constraints are relaxed
//! in stages instead of spinning forever on an overpacked window.

use glam::Vec2;
use rand::Rng;

use super::collision::Rect;
use crate::tuning::Tuning;

/// Samples per placement stage before the constraints are relaxed
const MAX_STRICT_ATTEMPTS: u32 = 1000;

/// Generate `platform_count` non-overlapping top-left positions, in the
/// index order used by all later per-platform passes.
///
/// Placement stages per platform:
/// 1. overlap-free AND gap-respecting,
/// 2. overlap-free only (gap constraint relaxed),
/// 3. any in-bounds position.
/// Stages 2 and 3 are logged; they only trigger when the requested count
/// does not fit the window under the strict constraints.
pub fn generate(rng: &mut impl Rng, tuning: &Tuning) -> Vec<Vec2> {
    let size = Vec2::new(tuning.platform_w, tuning.platform_h);
    let mut placed: Vec<Rect> = Vec::with_capacity(tuning.platform_count);

    for index in 0..tuning.platform_count {
        let candidate = place_one(rng, tuning, &placed, size, index);
        placed.push(candidate);
    }

    placed.into_iter().map(|rect| rect.pos).collect()
}

fn place_one(
    rng: &mut impl Rng,
    tuning: &Tuning,
    placed: &[Rect],
    size: Vec2,
    index: usize,
) -> Rect {
    for _ in 0..MAX_STRICT_ATTEMPTS {
        let candidate = sample(rng, tuning, size);
        let ok = placed
            .iter()
            .all(|p| !candidate.overlaps(p) && !candidate.too_close(p, tuning.min_gap));
        if ok {
            return candidate;
        }
    }

    log::warn!("platform {index}: no gap-respecting spot found, relaxing gap constraint");
    for _ in 0..MAX_STRICT_ATTEMPTS {
        let candidate = sample(rng, tuning, size);
        if placed.iter().all(|p| !candidate.overlaps(p)) {
            return candidate;
        }
    }

    log::warn!("platform {index}: window is overpacked, accepting an overlapping spot");
    sample(rng, tuning, size)
}

fn sample(rng: &mut impl Rng, tuning: &Tuning, size: Vec2) -> Rect {
    let x = rng.random_range(0.0..tuning.window_w - tuning.platform_w);
    let y = rng.random_range(0.0..tuning.window_h - tuning.platform_h);
    Rect::new(Vec2::new(x, y), size)
}
