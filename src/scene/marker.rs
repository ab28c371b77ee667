//! Falling drop marker: the one-shot effect played the first time an egg
//! cracks.
//!
//! The marker is created lazily when its egg first enters the cracked
//! set and is never destroyed; once the fall completes it holds the rest
//! height while the tumble keeps accumulating.

/// Duration of the full fall, seconds.
pub const DROP_SECS: f32 = 1.0;

/// Start height above the egg base.
pub const DROP_START: f32 = 2.0;

/// Rest height above the egg base.
pub const DROP_REST: f32 = 0.2;

/// Passive tumble rates around two axes, radians per second. Deliberately
/// incommensurate so the axes stay out of phase.
pub const TUMBLE_RATE: [f32; 2] = [2.4, 1.7];

#[derive(Debug, Clone, Copy, Default)]
pub struct DropMarker {
    /// Normalized fall progress in [0, 1].
    pub progress: f32,
    /// Accumulated rotation around two axes.
    pub spin: [f32; 2],
}

impl DropMarker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one frame. Progress accumulates elapsed seconds and clamps
    /// at the rest point; the tumble continues after the marker lands.
    pub fn advance(&mut self, dt: f32) {
        self.progress = (self.progress + dt / DROP_SECS).min(1.0);
        self.spin[0] += TUMBLE_RATE[0] * dt;
        self.spin[1] += TUMBLE_RATE[1] * dt;
    }

    /// Height of the marker center for an egg based at `base_y`.
    /// Exact at both endpoints of the fall.
    pub fn height(&self, base_y: f32) -> f32 {
        let p = self.progress;
        (1.0 - p) * (base_y + DROP_START) + p * (base_y + DROP_REST)
    }

    /// True once the marker holds its terminal height.
    pub fn rested(&self) -> bool {
        self.progress >= 1.0
    }
}
