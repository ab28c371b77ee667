//! Renderer-agnostic scene state: ring layout, per-egg visual state
//! machines, drop markers and the orbit/zoom camera.
//!
//! No egui types are imported anywhere under this module so the scene
//! stays renderer-agnostic; the binary's painting code consumes plain
//! `[f32; 3]` positions and scalar intensities.

pub mod camera;
pub mod egg;
pub mod marker;
pub mod ring;

/// Refresh rate the original per-frame tuning constants assume.
pub const REF_FPS: f32 = 60.0;

/// Fraction of the remaining distance covered per frame at [`REF_FPS`].
pub const EASE_PER_FRAME: f32 = 0.1;

/// Linear interpolation as a single fused multiply-add.
#[inline(always)]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    t.mul_add(b - a, a)
}

/// Exponential ease factor for one frame of `dt` seconds.
///
/// At 60 Hz this is the classic `current += (target - current) * 0.1`
/// step, but it composes across frame rates: two half-length frames move
/// exactly as far as one full frame.
#[inline(always)]
pub fn ease_step(dt: f32) -> f32 {
    1.0 - (1.0 - EASE_PER_FRAME).powf(dt * REF_FPS)
}

/// Wrap an angle into (-PI, PI].
#[inline(always)]
pub fn wrap_angle(a: f32) -> f32 {
    a.sin().atan2(a.cos())
}
