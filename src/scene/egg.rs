//! Per-egg visual state machine.
//!
//! Each egg owns four continuous values: spin rotation, vertical lift,
//! body scale and glow intensity. Every frame the targets are derived
//! from the interaction flags and the current values ease toward them;
//! the spin never stops. The painting layer reads the values back and
//! applies them to the drawn silhouette, so none of this touches a
//! renderer type.

use crate::scene::{ease_step, lerp};

/// Spin rate, radians per second (0.02 rad per frame at 60 Hz).
pub const SPIN_RATE: f32 = 1.2;

/// Vertical raise of a selected egg, world units.
pub const RAISE: f32 = 0.5;

/// Body scale targets.
pub const SCALE_SELECTED: f32 = 1.2;
pub const SCALE_HOVERED: f32 = 1.1;
pub const SCALE_IDLE: f32 = 1.0;

/// Glow intensity targets.
pub const GLOW_SELECTED: f32 = 1.2;
pub const GLOW_IDLE: f32 = 0.4;

/// Vertical elongation: the displayed body scale is `(s, 1.3 s, s)`.
pub const HEIGHT_RATIO: f32 = 1.3;

/// Body half-width at scale 1.0, world units.
pub const BODY_RADIUS: f32 = 0.45;

/// Surface finish preset; the painter maps it to highlight size and
/// strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Finish {
    pub metallic: f32,
    pub roughness: f32,
}

/// Glossy once selected, matte otherwise.
pub const FINISH_SELECTED: Finish = Finish { metallic: 0.6, roughness: 0.2 };
pub const FINISH_IDLE: Finish = Finish { metallic: 0.15, roughness: 0.65 };

/// Continuous display state for one egg.
#[derive(Debug, Clone, Copy)]
pub struct EggVisual {
    /// Accumulated spin around the vertical axis, radians.
    pub rotation: f32,
    /// Current height above the slot base, world units.
    pub lift: f32,
    /// Current uniform body scale.
    pub scale: f32,
    /// Current glow intensity.
    pub glow: f32,
}

impl Default for EggVisual {
    fn default() -> Self {
        Self {
            rotation: 0.0,
            lift: 0.0,
            scale: SCALE_IDLE,
            glow: GLOW_IDLE,
        }
    }
}

impl EggVisual {
    /// Advance one frame of `dt` seconds toward the targets implied by
    /// the interaction flags. The ease is exponential: values approach
    /// their targets asymptotically and never overshoot.
    pub fn advance(&mut self, dt: f32, hovered: bool, selected: bool) {
        self.rotation += SPIN_RATE * dt;

        let lift_target = if selected { RAISE } else { 0.0 };
        let scale_target = if selected {
            SCALE_SELECTED
        } else if hovered {
            SCALE_HOVERED
        } else {
            SCALE_IDLE
        };
        let glow_target = if selected { GLOW_SELECTED } else { GLOW_IDLE };

        let k = ease_step(dt);
        self.lift = lerp(self.lift, lift_target, k);
        self.scale = lerp(self.scale, scale_target, k);
        self.glow = lerp(self.glow, glow_target, k);
    }

    /// Anisotropic scale applied to the silhouette.
    pub fn body_scale(&self) -> [f32; 3] {
        [self.scale, self.scale * HEIGHT_RATIO, self.scale]
    }

    /// Finish preset for the current selection flag.
    pub fn finish(selected: bool) -> Finish {
        if selected {
            FINISH_SELECTED
        } else {
            FINISH_IDLE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(visual: &mut EggVisual, hovered: bool, selected: bool) {
        for _ in 0..600 {
            visual.advance(FRAME, hovered, selected);
        }
    }

    #[test]
    fn spin_accumulates_at_the_reference_rate() {
        let mut v = EggVisual::default();
        v.advance(FRAME, false, false);
        assert!((v.rotation - 0.02).abs() < 1e-4);
        v.advance(FRAME, true, true);
        assert!((v.rotation - 0.04).abs() < 1e-4);
    }

    #[test]
    fn selection_raises_scales_and_glows() {
        let mut v = EggVisual::default();
        settle(&mut v, false, true);
        assert!((v.lift - RAISE).abs() < 1e-3);
        assert!((v.scale - SCALE_SELECTED).abs() < 1e-3);
        assert!((v.glow - GLOW_SELECTED).abs() < 1e-3);
    }

    #[test]
    fn hover_scales_without_raising() {
        let mut v = EggVisual::default();
        settle(&mut v, true, false);
        assert!((v.scale - SCALE_HOVERED).abs() < 1e-3);
        assert!(v.lift.abs() < 1e-3);
        assert!((v.glow - GLOW_IDLE).abs() < 1e-3);
    }

    #[test]
    fn deselection_settles_back_to_idle() {
        let mut v = EggVisual::default();
        settle(&mut v, false, true);
        settle(&mut v, false, false);
        assert!(v.lift.abs() < 1e-3);
        assert!((v.scale - SCALE_IDLE).abs() < 1e-3);
        assert!((v.glow - GLOW_IDLE).abs() < 1e-3);
    }

    #[test]
    fn ease_is_frame_rate_independent() {
        let mut coarse = EggVisual::default();
        coarse.advance(0.1, false, true);

        let mut fine = EggVisual::default();
        for _ in 0..6 {
            fine.advance(0.1 / 6.0, false, true);
        }

        assert!((coarse.lift - fine.lift).abs() < 1e-4);
        assert!((coarse.scale - fine.scale).abs() < 1e-4);
        assert!((coarse.rotation - fine.rotation).abs() < 1e-4);
    }

    #[test]
    fn body_scale_is_elongated_vertically() {
        let v = EggVisual {
            scale: 1.2,
            ..EggVisual::default()
        };
        let s = v.body_scale();
        assert!((s[0] - 1.2).abs() < 1e-6);
        assert!((s[1] - 1.56).abs() < 1e-5);
        assert_eq!(s[0], s[2]);
    }

    #[test]
    fn finish_switches_on_selection() {
        assert_eq!(EggVisual::finish(true), FINISH_SELECTED);
        assert_eq!(EggVisual::finish(false), FINISH_IDLE);
        assert!(FINISH_SELECTED.roughness < FINISH_IDLE.roughness);
    }
}
