//! Orbit/zoom camera.
//!
//! The camera circles the scene origin at a fixed height. Horizontal
//! scroll feeds an accumulator that maps straight to ground distance
//! (snapped, never eased), dragging orbits the azimuth, and `project`
//! turns world points into pixel offsets from the viewport center for
//! the painting layer.

/// Camera height above the ground plane, world units.
pub const CAM_HEIGHT: f32 = 5.0;

/// Ground distance from the origin at zoom 1.0.
pub const BASE_DISTANCE: f32 = 10.0;

/// Zoom accumulator bounds.
pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.0;

/// Zoom change per horizontal scroll unit.
pub const SCROLL_RATE: f32 = 0.001;

/// Orbit change per dragged pixel, radians.
pub const DRAG_RATE: f32 = 0.008;

/// Vertical field of view, degrees.
pub const FOV_Y_DEG: f32 = 50.0;

/// Near-plane cull depth, world units.
const NEAR: f32 = 0.1;

/// Horizontal-scroll zoom accumulator. The scalar never leaves
/// [`ZOOM_MIN`, `ZOOM_MAX`].
#[derive(Debug, Clone, Copy)]
pub struct ZoomState {
    scalar: f32,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self { scalar: 1.0 }
    }
}

impl ZoomState {
    /// Feed one wheel event. Only predominantly horizontal gestures move
    /// the accumulator. Returns true when the scalar actually changed.
    pub fn on_scroll(&mut self, dx: f32, dy: f32) -> bool {
        if dx.abs() <= dy.abs() {
            return false;
        }
        let next = (self.scalar + dx * SCROLL_RATE).clamp(ZOOM_MIN, ZOOM_MAX);
        let changed = next != self.scalar;
        self.scalar = next;
        changed
    }

    pub fn scalar(&self) -> f32 {
        self.scalar
    }

    /// Camera ground distance derived from the accumulator.
    pub fn distance(&self) -> f32 {
        BASE_DISTANCE / self.scalar
    }
}

/// A projected world point: pixel offsets from the viewport center plus
/// view-space depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    /// Pixels right of the viewport center.
    pub x: f32,
    /// Pixels below the viewport center.
    pub y: f32,
    /// View-space depth, world units.
    pub depth: f32,
}

/// Orbit rig: azimuth around the vertical axis plus the zoom accumulator.
#[derive(Debug, Clone, Copy)]
pub struct CameraRig {
    /// Ground-plane angle of the eye, `atan2(eye.z, eye.x)`.
    pub azimuth: f32,
    pub zoom: ZoomState,
}

impl Default for CameraRig {
    /// Eye starts on the +Z side at `(0, 5, 10)`, looking at the origin.
    fn default() -> Self {
        Self {
            azimuth: std::f32::consts::FRAC_PI_2,
            zoom: ZoomState::default(),
        }
    }
}

impl CameraRig {
    /// Eye position: fixed height, ground distance from the zoom.
    pub fn eye(&self) -> [f32; 3] {
        let h = self.zoom.distance();
        [h * self.azimuth.cos(), CAM_HEIGHT, h * self.azimuth.sin()]
    }

    /// Ground-plane viewing angle, fed to the facing gate.
    pub fn viewer_angle(&self) -> f32 {
        self.azimuth
    }

    /// Orbit by a horizontal drag of `drag_px` pixels.
    pub fn drag_orbit(&mut self, drag_px: f32) {
        self.azimuth += drag_px * DRAG_RATE;
    }

    /// Project a world point onto the viewport. `None` when the point
    /// falls behind the near plane.
    ///
    /// Look-at basis aimed at the origin, then a perspective divide.
    pub fn project(&self, world: [f32; 3], viewport_w: f32, viewport_h: f32) -> Option<Projected> {
        let eye = self.eye();
        let rel = [world[0] - eye[0], world[1] - eye[1], world[2] - eye[2]];

        let fwd = normalize([-eye[0], -eye[1], -eye[2]]);
        let right = normalize(cross(fwd, [0.0, 1.0, 0.0]));
        let up = cross(right, fwd);

        let vx = dot(rel, right);
        let vy = dot(rel, up);
        let vz = dot(rel, fwd);

        if vz < NEAR {
            return None;
        }

        let tan_v = (FOV_Y_DEG.to_radians() * 0.5).tan();
        let aspect = viewport_w / viewport_h;
        let ndc_x = vx / (vz * tan_v * aspect);
        let ndc_y = -vy / (vz * tan_v);

        Some(Projected {
            x: ndc_x * viewport_w * 0.5,
            y: ndc_y * viewport_h * 0.5,
            depth: vz,
        })
    }

    /// Pixels per world unit at a given view depth.
    pub fn screen_scale(&self, depth: f32, viewport_h: f32) -> f32 {
        let tan_v = (FOV_Y_DEG.to_radians() * 0.5).tan();
        viewport_h * 0.5 / (tan_v * depth.max(NEAR))
    }
}

#[inline]
fn dot(a: [f32; 3], b: [f32; 3]) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn cross(a: [f32; 3], b: [f32; 3]) -> [f32; 3] {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn normalize(v: [f32; 3]) -> [f32; 3] {
    let inv = 1.0 / dot(v, v).sqrt().max(1e-6);
    [v[0] * inv, v[1] * inv, v[2] * inv]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const VIEW_W: f32 = 1280.0;
    const VIEW_H: f32 = 800.0;

    #[test]
    fn default_eye_matches_the_fixed_placement() {
        let rig = CameraRig::default();
        let eye = rig.eye();
        assert!(eye[0].abs() < 1e-4);
        assert!((eye[1] - CAM_HEIGHT).abs() < 1e-6);
        assert!((eye[2] - BASE_DISTANCE).abs() < 1e-4);
        assert!((rig.viewer_angle() - FRAC_PI_2).abs() < 1e-6);
    }

    #[test]
    fn zoom_scalar_is_always_clamped() {
        let mut zoom = ZoomState::default();
        let deltas = [
            (300.0, 0.0),
            (5000.0, 10.0),
            (-40.0, 1.0),
            (-9000.0, 0.0),
            (120.0, -3.0),
            (100_000.0, 0.0),
            (-100_000.0, 0.0),
        ];
        for (dx, dy) in deltas {
            zoom.on_scroll(dx, dy);
            assert!(zoom.scalar() >= ZOOM_MIN);
            assert!(zoom.scalar() <= ZOOM_MAX);
        }
    }

    #[test]
    fn vertical_scroll_is_ignored() {
        let mut zoom = ZoomState::default();
        assert!(!zoom.on_scroll(10.0, -30.0));
        assert!(!zoom.on_scroll(5.0, 5.0));
        assert_eq!(zoom.scalar(), 1.0);
        assert!(zoom.on_scroll(-30.0, 10.0));
        assert!((zoom.scalar() - 0.97).abs() < 1e-4);
    }

    #[test]
    fn distance_is_inverse_to_zoom() {
        let mut zoom = ZoomState::default();
        assert!((zoom.distance() - BASE_DISTANCE).abs() < 1e-6);
        zoom.on_scroll(1000.0, 0.0);
        assert!((zoom.scalar() - 2.0).abs() < 1e-4);
        assert!((zoom.distance() - 5.0).abs() < 1e-3);
    }

    #[test]
    fn origin_projects_to_the_viewport_center() {
        let rig = CameraRig::default();
        let p = rig.project([0.0, 0.0, 0.0], VIEW_W, VIEW_H).unwrap();
        assert!(p.x.abs() < 0.5);
        assert!(p.y.abs() < 0.5);
        let expected = (CAM_HEIGHT * CAM_HEIGHT + BASE_DISTANCE * BASE_DISTANCE).sqrt();
        assert!((p.depth - expected).abs() < 1e-3);
    }

    #[test]
    fn x_axis_point_lands_right_of_center() {
        let rig = CameraRig::default();
        let p = rig.project([3.0, 0.0, 0.0], VIEW_W, VIEW_H).unwrap();
        assert!(p.x > 10.0);
    }

    #[test]
    fn points_behind_the_eye_are_culled() {
        let rig = CameraRig::default();
        assert!(rig.project([0.0, 5.0, 30.0], VIEW_W, VIEW_H).is_none());
    }

    #[test]
    fn orbit_keeps_the_origin_centered() {
        let mut rig = CameraRig::default();
        rig.drag_orbit(137.0);
        let p = rig.project([0.0, 0.0, 0.0], VIEW_W, VIEW_H).unwrap();
        assert!(p.x.abs() < 0.5);
        assert!(p.y.abs() < 0.5);
    }

    #[test]
    fn screen_scale_shrinks_with_depth() {
        let rig = CameraRig::default();
        let near = rig.screen_scale(5.0, VIEW_H);
        let far = rig.screen_scale(10.0, VIEW_H);
        assert!((near - 2.0 * far).abs() < 1e-3);
    }

    #[test]
    fn closer_points_are_larger_on_screen() {
        let rig = CameraRig::default();
        let near = rig.project([0.0, 0.0, 3.0], VIEW_W, VIEW_H).unwrap();
        let far = rig.project([0.0, 0.0, -3.0], VIEW_W, VIEW_H).unwrap();
        assert!(near.depth < far.depth);
        assert!(rig.screen_scale(near.depth, VIEW_H) > rig.screen_scale(far.depth, VIEW_H));
    }
}
