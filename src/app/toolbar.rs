//! Toolbar rendering for `HuntApp`.
//!
//! Draws the crack-rule toggles, the caption auto-hide switch, the view
//! reset button, and the stats panel toggle.

use eframe::egui;

use egg_carousel::scene::camera::CameraRig;

use super::HuntApp;

impl HuntApp {
    /// Render the top toolbar strip.
    pub fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(4.0);

            // Crack rules
            if ui
                .checkbox(&mut self.interaction.facing_gate, "Facing gate")
                .changed()
            {
                log::debug!(
                    "facing gate {}",
                    if self.interaction.facing_gate { "on" } else { "off" }
                );
            }

            let mut auto_hide = self.interaction.auto_clear.is_some();
            if ui.checkbox(&mut auto_hide, "Auto-hide caption").changed() {
                self.interaction
                    .set_auto_clear(auto_hide.then_some(self.caption_delay));
            }

            ui.separator();

            // View
            if ui.button("Reset view").clicked() {
                self.camera = CameraRig::default();
            }

            ui.toggle_value(&mut self.show_stats, "Stats");

            ui.separator();

            ui.label(format!(
                "{}/{} cracked",
                self.interaction.cracked_count(),
                self.eggs.len()
            ));
        });
    }
}
