//! `HuntApp` — the top-level egui application state.
//!
//! This module declares the `HuntApp` struct and its constructor. All
//! methods are split across the sibling sub-modules:
//!
//! - `toolbar`  — runtime toggles and the reset-view button
//! - `viewport` — scene input, animation advance and the painted 3D view
//! - `panel`    — caption overlay and the stats side panel

pub mod panel;
pub mod toolbar;
pub mod viewport;

use std::time::{Duration, Instant};

use eframe::egui;

use egg_carousel::content::{EggRecord, EGGS};
use egg_carousel::interact::InteractionState;
use egg_carousel::scene::camera::CameraRig;
use egg_carousel::scene::egg::EggVisual;
use egg_carousel::scene::marker::DropMarker;
use egg_carousel::scene::ring::{ring_positions, BASE_HEIGHT, RING_RADIUS};

// ─── Application state ───────────────────────────────────────────────────────

pub struct HuntApp {
    /// Content records on the ring (a prefix of the full table).
    pub eggs: &'static [EggRecord],
    /// Slot positions, computed once at startup.
    pub positions: Vec<[f32; 3]>,
    /// Per-egg display state, same order as `eggs`.
    pub visuals: Vec<EggVisual>,
    /// Drop markers, created lazily on the first crack of each egg.
    pub markers: Vec<Option<DropMarker>>,
    pub interaction: InteractionState,
    pub camera: CameraRig,
    /// Egg index currently under the pointer.
    pub hovered: Option<usize>,
    /// Last selection shown by the caption; kept so the panel can fade
    /// out with its text intact.
    pub last_caption: Option<usize>,
    /// Caption overlay opacity, eased toward the selection state.
    pub caption_alpha: f32,
    /// Auto-clear delay restored when the toolbar toggle re-enables it.
    pub caption_delay: Duration,
    pub show_stats: bool,
    pub last_frame_time: Instant,
    /// Smoothed frame time for the stats panel, seconds.
    pub frame_time: f32,
    pub app_start: Instant,
}

/// Startup configuration distilled from the command line.
#[derive(Debug, Clone, Copy)]
pub struct HuntOptions {
    pub egg_count: usize,
    pub facing_gate: bool,
    pub keep_caption: bool,
    pub caption_delay: Duration,
    pub show_stats: bool,
}

impl HuntApp {
    pub fn new(opts: HuntOptions) -> Self {
        let eggs = &EGGS[..opts.egg_count.min(EGGS.len())];
        let mut interaction = InteractionState::new(eggs.len());
        interaction.facing_gate = opts.facing_gate;
        interaction.set_auto_clear(if opts.keep_caption {
            None
        } else {
            Some(opts.caption_delay)
        });

        Self {
            eggs,
            positions: ring_positions(eggs.len(), RING_RADIUS, BASE_HEIGHT),
            visuals: vec![EggVisual::default(); eggs.len()],
            markers: vec![None; eggs.len()],
            interaction,
            camera: CameraRig::default(),
            hovered: None,
            last_caption: None,
            caption_alpha: 0.0,
            caption_delay: opts.caption_delay,
            show_stats: opts.show_stats,
            last_frame_time: Instant::now(),
            frame_time: 1.0 / 60.0,
            app_start: Instant::now(),
        }
    }
}

/// Shell color as an egui color with separate intensity and alpha.
pub(crate) fn tint(color: [f32; 3], intensity: f32, alpha: f32) -> egui::Color32 {
    let r = (color[0] * intensity * 255.0).clamp(0.0, 255.0) as u8;
    let g = (color[1] * intensity * 255.0).clamp(0.0, 255.0) as u8;
    let b = (color[2] * intensity * 255.0).clamp(0.0, 255.0) as u8;
    let a = (alpha * 255.0).clamp(0.0, 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(r, g, b, a)
}
