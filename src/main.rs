//! Interactive 3-D Easter egg carousel.
//!
//! Eight pastel eggs spin on a ring; click one to crack it open and read
//! the task hidden inside. The whole scene is painted with egui
//! primitives through a small hand-rolled perspective projection, so the
//! only windowing dependency is eframe itself.

use std::time::Duration;

use clap::Parser;
use eframe::egui;

use egg_carousel::content::EGGS;

mod app;

use app::{HuntApp, HuntOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Interactive 3-D Easter egg carousel")]
struct Args {
    /// Only accept clicks on eggs facing the camera
    #[arg(long)]
    facing_gate: bool,

    /// Keep captions on screen until dismissed
    #[arg(long)]
    keep_caption: bool,

    /// Seconds a caption stays up before clearing itself
    #[arg(long, default_value_t = 3.0)]
    caption_secs: f32,

    /// Number of eggs on the ring
    #[arg(long, default_value_t = EGGS.len())]
    eggs: usize,

    /// Open with the stats panel visible
    #[arg(long)]
    stats: bool,
}

/// Clamp the caption-secs flag to something `Duration` can hold;
/// negative and NaN collapse to zero, oversized values cap at an hour.
fn caption_delay(secs: f32) -> Duration {
    Duration::from_secs_f32(secs.max(0.0).min(3600.0))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    log::info!(
        "Starting carousel: {} eggs, facing gate {}",
        args.eggs.min(EGGS.len()),
        if args.facing_gate { "on" } else { "off" }
    );

    let opts = HuntOptions {
        egg_count: args.eggs,
        facing_gate: args.facing_gate,
        keep_caption: args.keep_caption,
        caption_delay: caption_delay(args.caption_secs),
        show_stats: args.stats,
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Egg Carousel",
        options,
        Box::new(move |_cc| Ok(Box::new(HuntApp::new(opts)))),
    )
    .expect("Failed to start Egg Carousel");
}

impl eframe::App for HuntApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        ctx.set_visuals(egui::Visuals::dark());

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        if self.show_stats {
            egui::SidePanel::right("stats")
                .default_width(220.0)
                .show(ctx, |ui| {
                    self.draw_stats(ui);
                });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.draw_viewport(ui);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caption_delay_accepts_ordinary_flags() {
        assert_eq!(caption_delay(3.0), Duration::from_secs(3));
        assert_eq!(caption_delay(0.5), Duration::from_millis(500));
    }

    #[test]
    fn caption_delay_survives_hostile_flags() {
        assert_eq!(caption_delay(-4.0), Duration::ZERO);
        assert_eq!(caption_delay(f32::NAN), Duration::ZERO);
        assert_eq!(caption_delay(1e20), Duration::from_secs(3600));
        assert_eq!(caption_delay(f32::INFINITY), Duration::from_secs(3600));
    }
}
