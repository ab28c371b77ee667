//! Interaction controller: crack triggers, the optional facing gate and
//! the caption auto-clear deadline.
//!
//! All state is plain memory mutated on the UI thread. The auto-clear is
//! an owned `Option<Instant>` deadline polled once per frame; overwriting
//! it on a newer crack is the cancel-and-reschedule, so at most one clear
//! is ever pending.

use std::time::{Duration, Instant};

use log::{debug, info, warn};

use crate::scene::ring::slot_angle;
use crate::scene::wrap_angle;

/// Angular half-width of the facing gate.
pub const FACING_LIMIT: f32 = std::f32::consts::PI / 2.5;

/// Default caption auto-clear delay.
pub const AUTO_CLEAR: Duration = Duration::from_millis(3000);

/// What a crack trigger did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrackOutcome {
    /// First crack of this egg: marker drops, egg selected.
    Cracked,
    /// Already cracked: selection and pending clear refreshed.
    Reselected,
    /// The egg is turned away from the viewer; nothing changed.
    NotFacing,
    /// Index outside the ring; nothing changed.
    OutOfRange,
}

/// Mutable interaction state for one session.
///
/// Cracked flags are monotonic: set by the first accepted crack of an
/// index, never cleared afterwards. The selection moves freely and may
/// clear on the deadline.
#[derive(Debug, Clone)]
pub struct InteractionState {
    cracked: Vec<bool>,
    selected: Option<usize>,
    clear_deadline: Option<Instant>,
    /// Reject cracks on eggs turned away from the viewer.
    pub facing_gate: bool,
    /// Auto-clear delay; `None` keeps a caption until the next crack.
    pub auto_clear: Option<Duration>,
}

impl InteractionState {
    pub fn new(count: usize) -> Self {
        Self {
            cracked: vec![false; count],
            selected: None,
            clear_deadline: None,
            facing_gate: false,
            auto_clear: Some(AUTO_CLEAR),
        }
    }

    pub fn egg_count(&self) -> usize {
        self.cracked.len()
    }

    pub fn is_cracked(&self, index: usize) -> bool {
        self.cracked.get(index).copied().unwrap_or(false)
    }

    pub fn cracked_count(&self) -> usize {
        self.cracked.iter().filter(|c| **c).count()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn has_pending_clear(&self) -> bool {
        self.clear_deadline.is_some()
    }

    /// Crack trigger for `index` with the camera at `viewer_angle` (the
    /// ground-plane angle `atan2(eye.z, eye.x)`).
    ///
    /// Accepted triggers mark the index cracked (at most once), move the
    /// selection and restart the pending auto-clear. Rejections leave
    /// every field untouched.
    pub fn crack(&mut self, index: usize, viewer_angle: f32, now: Instant) -> CrackOutcome {
        let count = self.cracked.len();
        if index >= count {
            warn!("crack({index}) ignored: ring has {count} eggs");
            return CrackOutcome::OutOfRange;
        }

        if self.facing_gate {
            let diff = wrap_angle(slot_angle(index, count) - viewer_angle);
            if diff.abs() >= FACING_LIMIT {
                debug!(
                    "crack({index}) rejected by facing gate: off by {:.2} rad",
                    diff.abs()
                );
                return CrackOutcome::NotFacing;
            }
        }

        let first = !self.cracked[index];
        self.cracked[index] = true;
        self.selected = Some(index);
        self.clear_deadline = self.auto_clear.map(|delay| now + delay);

        if first {
            info!("cracked egg {index}");
            CrackOutcome::Cracked
        } else {
            debug!("egg {index} reselected");
            CrackOutcome::Reselected
        }
    }

    /// Fire the auto-clear once its deadline passes. Called every frame.
    pub fn tick(&mut self, now: Instant) {
        if self.clear_deadline.map_or(false, |d| now >= d) {
            debug!("caption auto-cleared");
            self.selected = None;
            self.clear_deadline = None;
        }
    }

    /// Drop the selection immediately and cancel any pending clear.
    pub fn clear_selection(&mut self) {
        self.selected = None;
        self.clear_deadline = None;
    }

    /// Change the auto-clear delay at runtime. Disabling it also cancels
    /// any pending clear, so the caption on screen stays up; a new delay
    /// applies from the next crack.
    pub fn set_auto_clear(&mut self, delay: Option<Duration>) {
        self.auto_clear = delay;
        if delay.is_none() {
            self.clear_deadline = None;
        }
    }
}
