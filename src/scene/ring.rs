//! Ring layout: evenly spaced slots on a horizontal circle.

use std::f32::consts::TAU;

/// Ring radius, world units.
pub const RING_RADIUS: f32 = 3.0;

/// Resting height of an egg center above the scene origin.
pub const BASE_HEIGHT: f32 = 0.0;

/// Ground-plane angle of a slot, chosen so that
/// `atan2(position.z, position.x)` of the slot equals its angle.
#[inline]
pub fn slot_angle(index: usize, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    index as f32 / count as f32 * TAU
}

/// Slot positions for a ring of `count` eggs:
/// `(r cos θ, y0, r sin θ)` with `θ = index / count · τ`.
///
/// Computed once per session and cached by the app. An empty ring yields
/// an empty vector rather than dividing by zero.
pub fn ring_positions(count: usize, radius: f32, base_y: f32) -> Vec<[f32; 3]> {
    (0..count)
        .map(|i| {
            let theta = slot_angle(i, count);
            [radius * theta.cos(), base_y, radius * theta.sin()]
        })
        .collect()
}
