//! Caption overlay and the stats side panel.
//!
//! The caption is a pure projection of the current selection through the
//! content table, painted as a floating panel over the viewport. It keeps
//! the last selected record while fading out so the text does not vanish
//! mid-fade.

use eframe::egui;

use egg_carousel::content::caption_for;

use super::{tint, HuntApp};

/// Caption panel width, clamped to the viewport.
const PANEL_W: f32 = 440.0;
/// Approximate glyph width used for the greedy wrap, pixels.
const GLYPH_W: f32 = 7.6;

impl HuntApp {
    /// Paint the caption overlay for the current (or fading) selection.
    pub(crate) fn draw_caption(&self, painter: &egui::Painter, rect: egui::Rect) {
        let alpha = self.caption_alpha;
        if alpha < 0.01 {
            return;
        }
        let rec = match caption_for(self.eggs, self.last_caption) {
            Some(rec) => rec,
            None => return,
        };

        let panel_w = PANEL_W.min(rect.width() - 40.0);
        let max_chars = ((panel_w - 32.0) / GLYPH_W) as usize;
        let task_lines = wrap_text(rec.task, max_chars);

        // Dynamic height: header + optional story + wrapped task.
        let story_h = if rec.story.is_some() { 18.0 } else { 0.0 };
        let panel_h = 46.0 + story_h + task_lines.len() as f32 * 19.0;

        let panel_rect = egui::Rect::from_min_size(
            egui::pos2(
                rect.center().x - panel_w * 0.5,
                rect.bottom() - panel_h - 24.0,
            ),
            egui::vec2(panel_w, panel_h),
        );

        let accent = tint(rec.color, 1.0, alpha);

        // Glow shadow
        painter.rect_filled(panel_rect.expand(3.0), 6.0, tint(rec.color, 1.0, alpha * 0.12));

        // Main background: the shell color, darkened enough for the text.
        painter.rect(
            panel_rect,
            4.0,
            tint(rec.color, 0.22, alpha * 0.92),
            egui::Stroke::new(1.5, tint(rec.color, 1.0, alpha * 0.7)),
        );

        // Top scanline accent
        painter.rect_filled(
            egui::Rect::from_min_size(panel_rect.left_top(), egui::vec2(panel_w, 2.0)),
            0.0,
            accent,
        );

        // Corner brackets
        let bk_len = 12.0;
        let bk_stroke = egui::Stroke::new(1.5, accent);
        painter.line_segment(
            [panel_rect.left_top(), panel_rect.left_top() + egui::vec2(bk_len, 0.0)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.left_top(), panel_rect.left_top() + egui::vec2(0.0, bk_len)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.right_top(), panel_rect.right_top() + egui::vec2(-bk_len, 0.0)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.right_top(), panel_rect.right_top() + egui::vec2(0.0, bk_len)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.left_bottom(), panel_rect.left_bottom() + egui::vec2(bk_len, 0.0)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.left_bottom(), panel_rect.left_bottom() + egui::vec2(0.0, -bk_len)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.right_bottom(), panel_rect.right_bottom() + egui::vec2(-bk_len, 0.0)],
            bk_stroke,
        );
        painter.line_segment(
            [panel_rect.right_bottom(), panel_rect.right_bottom() + egui::vec2(0.0, -bk_len)],
            bk_stroke,
        );

        let left = panel_rect.left() + 16.0;
        let mut y = panel_rect.top() + 12.0;

        // Header: color dot + title
        painter.circle_filled(egui::pos2(left + 2.0, y + 6.0), 5.0, accent);
        painter.text(
            egui::pos2(left + 14.0, y),
            egui::Align2::LEFT_TOP,
            rec.title,
            egui::FontId::proportional(13.0),
            accent,
        );
        y += 22.0;

        if let Some(story) = rec.story {
            painter.text(
                egui::pos2(left, y),
                egui::Align2::LEFT_TOP,
                story,
                egui::FontId::proportional(11.5),
                egui::Color32::from_rgba_unmultiplied(168, 175, 205, (alpha * 220.0) as u8),
            );
            y += 18.0;
        }

        for line in &task_lines {
            painter.text(
                egui::pos2(left, y),
                egui::Align2::LEFT_TOP,
                line,
                egui::FontId::proportional(14.0),
                egui::Color32::from_rgba_unmultiplied(235, 238, 250, (alpha * 255.0) as u8),
            );
            y += 19.0;
        }
    }

    /// Stats side panel contents.
    pub fn draw_stats(&self, ui: &mut egui::Ui) {
        ui.heading("Scene");
        ui.separator();

        ui.label(format!("frame: {:.1} ms", self.frame_time * 1000.0));
        ui.label(format!(
            "zoom: {:.2} (distance {:.1})",
            self.camera.zoom.scalar(),
            self.camera.zoom.distance()
        ));
        ui.label(format!("azimuth: {:.0}°", self.camera.azimuth.to_degrees()));
        ui.label(format!("uptime: {:.0} s", self.app_start.elapsed().as_secs_f32()));

        ui.separator();
        ui.colored_label(
            egui::Color32::from_rgb(255, 200, 90),
            format!("cracked: {}/{}", self.interaction.cracked_count(), self.eggs.len()),
        );
        if let Some(i) = self.interaction.selected() {
            ui.colored_label(
                tint(self.eggs[i].color, 1.2, 1.0),
                format!("selected: {}", self.eggs[i].title),
            );
        } else {
            ui.label("selected: none");
        }

        ui.separator();
        ui.heading("Eggs");
        for (i, rec) in self.eggs.iter().enumerate() {
            let state = match &self.markers[i] {
                Some(m) if m.rested() => "rested",
                Some(_) => "falling",
                None => "intact",
            };
            ui.label(format!("{} — {}", rec.title, state));
        }
    }
}

/// Greedy word wrap by character count; the captions are short.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(8);
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let fits = line.chars().count() + 1 + word.chars().count() <= max_chars;
        if !line.is_empty() && !fits {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_the_limit() {
        let lines = wrap_text("carry the egg spoon for ten careful steps", 16);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.chars().count() <= 16);
        }
        assert_eq!(lines.join(" "), "carry the egg spoon for ten careful steps");
    }

    #[test]
    fn wrap_keeps_short_text_on_one_line() {
        let lines = wrap_text("hop three times", 40);
        assert_eq!(lines, vec!["hop three times".to_string()]);
    }

    #[test]
    fn wrap_handles_empty_text() {
        assert!(wrap_text("", 20).is_empty());
        assert!(wrap_text("   ", 20).is_empty());
    }

    #[test]
    fn wrap_never_drops_an_oversized_word() {
        let lines = wrap_text("supercalifragilistic egg", 10);
        assert_eq!(lines[0], "supercalifragilistic");
        assert_eq!(lines[1], "egg");
    }
}
