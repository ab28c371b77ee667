//! Scene viewport: input handling, per-frame animation advance and the
//! painted 3D view.
//!
//! There is no retained scene graph. Each frame the ring is projected
//! through `scene::camera` and painted back-to-front with plain painter
//! primitives; eggs and markers are depth-sorted together so near
//! sprites cover far ones.

use std::f32::consts::TAU;
use std::time::Instant;

use eframe::egui;
use log::debug;

use egg_carousel::scene::camera::Projected;
use egg_carousel::scene::egg::{self, EggVisual};
use egg_carousel::scene::marker::DropMarker;
use egg_carousel::scene::{ease_step, lerp};

use super::{tint, HuntApp};

/// Ground plane height; egg bottoms rest on it at scale 1.0.
const GROUND_Y: f32 = -0.6;
/// Ground disk radius, world units.
const GROUND_RADIUS: f32 = 4.6;
/// Marker half-size, world units.
const MARKER_RADIUS: f32 = 0.16;
/// Radial push that keeps a marker beside its egg instead of inside it.
const MARKER_PUSH: f32 = 1.22;
/// Pointer slack around an egg's screen ellipse, pixels.
const HIT_SLACK: f32 = 4.0;

/// Depth-sorted draw item.
enum Sprite {
    Egg(usize),
    Marker(usize),
}

impl HuntApp {
    /// One frame: input, animation advance, paint.
    pub fn draw_viewport(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let response = ui.allocate_response(
            size,
            egui::Sense::click_and_drag().union(egui::Sense::hover()),
        );
        let rect = response.rect;

        let now = Instant::now();
        let dt = (now - self.last_frame_time).as_secs_f32().min(0.1);
        self.last_frame_time = now;
        self.frame_time = lerp(self.frame_time, dt, 0.1);

        self.handle_input(ui, &response, now);
        self.advance(dt, now);

        let painter = ui.painter_at(rect);
        self.paint_scene(&painter, rect);
        self.draw_caption(&painter, rect);

        // The scene animates continuously.
        ui.ctx().request_repaint();
    }

    fn handle_input(&mut self, ui: &egui::Ui, response: &egui::Response, now: Instant) {
        let rect = response.rect;

        // Horizontal wheel drives the zoom accumulator; the camera
        // distance snaps to it immediately.
        let scroll = ui.input(|i| i.raw_scroll_delta);
        if self.camera.zoom.on_scroll(scroll.x, scroll.y) {
            debug!(
                "zoom {:.3} -> camera distance {:.2}",
                self.camera.zoom.scalar(),
                self.camera.zoom.distance()
            );
        }

        if response.dragged() {
            self.camera.drag_orbit(-response.drag_delta().x);
        }

        self.hovered = response.hover_pos().and_then(|pos| self.egg_under(pos, rect));
        if self.hovered.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        }

        if response.clicked() {
            let hit = response
                .interact_pointer_pos()
                .and_then(|pos| self.egg_under(pos, rect));
            match hit {
                Some(index) => {
                    self.interaction.crack(index, self.camera.viewer_angle(), now);
                }
                None => self.interaction.clear_selection(),
            }
        }

        if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.interaction.clear_selection();
        }
        if ui.input(|i| i.key_pressed(egui::Key::D)) {
            self.show_stats = !self.show_stats;
        }
    }

    fn advance(&mut self, dt: f32, now: Instant) {
        self.interaction.tick(now);

        for (i, visual) in self.visuals.iter_mut().enumerate() {
            let hovered = self.hovered == Some(i);
            let selected = self.interaction.selected() == Some(i);
            visual.advance(dt, hovered, selected);
        }

        // Markers appear on first crack and then live forever.
        for (i, slot) in self.markers.iter_mut().enumerate() {
            if self.interaction.is_cracked(i) {
                slot.get_or_insert_with(DropMarker::new).advance(dt);
            }
        }

        if let Some(i) = self.interaction.selected() {
            self.last_caption = Some(i);
        }
        let target = if self.interaction.selected().is_some() {
            1.0
        } else {
            0.0
        };
        self.caption_alpha = lerp(self.caption_alpha, target, ease_step(dt));
    }

    /// Topmost egg whose screen ellipse contains `pos`.
    fn egg_under(&self, pos: egui::Pos2, rect: egui::Rect) -> Option<usize> {
        let size = rect.size();
        let center = rect.center();
        let mut best: Option<(usize, f32)> = None;

        for (i, &slot) in self.positions.iter().enumerate() {
            let v = &self.visuals[i];
            let world = [slot[0], slot[1] + v.lift, slot[2]];
            let p = match self.camera.project(world, size.x, size.y) {
                Some(p) => p,
                None => continue,
            };
            let px = self.camera.screen_scale(p.depth, size.y);
            let half_w = egg::BODY_RADIUS * v.scale * px + HIT_SLACK;
            let half_h = egg::BODY_RADIUS * egg::HEIGHT_RATIO * v.scale * px + HIT_SLACK;
            let dx = (pos.x - (center.x + p.x)) / half_w;
            let dy = (pos.y - (center.y + p.y)) / half_h;
            if dx * dx + dy * dy > 1.0 {
                continue;
            }
            if best.map_or(true, |(_, depth)| p.depth < depth) {
                best = Some((i, p.depth));
            }
        }

        best.map(|(i, _)| i)
    }

    fn paint_scene(&self, painter: &egui::Painter, rect: egui::Rect) {
        let size = rect.size();
        let center = rect.center();

        // Sky backdrop, slightly lighter below the horizon.
        painter.rect_filled(rect, 0.0, egui::Color32::from_rgb(24, 26, 38));
        let lower = egui::Rect::from_min_max(egui::pos2(rect.left(), center.y), rect.max);
        painter.rect_filled(lower, 0.0, egui::Color32::from_rgb(31, 34, 50));

        self.paint_ground(painter, center, size);

        for i in 0..self.positions.len() {
            self.paint_shadow(painter, center, size, i);
        }

        // Depth sort eggs and markers together, far to near.
        let mut order: Vec<(Projected, Sprite)> = Vec::with_capacity(self.positions.len() * 2);
        for (i, &slot) in self.positions.iter().enumerate() {
            let v = &self.visuals[i];
            let egg_world = [slot[0], slot[1] + v.lift, slot[2]];
            if let Some(p) = self.camera.project(egg_world, size.x, size.y) {
                order.push((p, Sprite::Egg(i)));
            }
            if let Some(m) = &self.markers[i] {
                let marker_world = [
                    slot[0] * MARKER_PUSH,
                    m.height(slot[1]),
                    slot[2] * MARKER_PUSH,
                ];
                if let Some(p) = self.camera.project(marker_world, size.x, size.y) {
                    order.push((p, Sprite::Marker(i)));
                }
            }
        }
        order.sort_by(|a, b| {
            b.0.depth
                .partial_cmp(&a.0.depth)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        for (p, sprite) in &order {
            match *sprite {
                Sprite::Egg(i) => self.paint_egg(painter, center, size, *p, i),
                Sprite::Marker(i) => self.paint_marker(painter, center, size, *p, i),
            }
        }

        self.paint_hud(painter, rect);
    }

    fn paint_ground(&self, painter: &egui::Painter, center: egui::Pos2, size: egui::Vec2) {
        const SEGMENTS: usize = 40;
        let mut points = Vec::with_capacity(SEGMENTS);
        for s in 0..SEGMENTS {
            let a = s as f32 / SEGMENTS as f32 * TAU;
            let world = [GROUND_RADIUS * a.cos(), GROUND_Y, GROUND_RADIUS * a.sin()];
            match self.camera.project(world, size.x, size.y) {
                Some(p) => points.push(center + egui::vec2(p.x, p.y)),
                None => return,
            }
        }
        painter.add(egui::Shape::convex_polygon(
            points,
            egui::Color32::from_rgb(38, 42, 60),
            egui::Stroke::new(1.0, egui::Color32::from_rgb(54, 60, 86)),
        ));
    }

    fn paint_shadow(&self, painter: &egui::Painter, center: egui::Pos2, size: egui::Vec2, i: usize) {
        let v = &self.visuals[i];
        let slot = self.positions[i];
        let p = match self
            .camera
            .project([slot[0], GROUND_Y + 0.02, slot[2]], size.x, size.y)
        {
            Some(p) => p,
            None => return,
        };
        let px = self.camera.screen_scale(p.depth, size.y);
        let half_w = egg::BODY_RADIUS * v.scale * px;

        // Lifted eggs throw a wider, fainter shadow.
        let spread = 1.0 + v.lift * 0.4;
        let alpha = (70.0 * (1.0 - v.lift * 0.6)).max(18.0) as u8;
        let sp = center + egui::vec2(p.x, p.y);

        const SEGMENTS: usize = 20;
        let points: Vec<egui::Pos2> = (0..SEGMENTS)
            .map(|s| {
                let a = s as f32 / SEGMENTS as f32 * TAU;
                egui::pos2(
                    sp.x + a.cos() * half_w * spread,
                    sp.y + a.sin() * half_w * spread * 0.32,
                )
            })
            .collect();
        painter.add(egui::Shape::convex_polygon(
            points,
            egui::Color32::from_rgba_unmultiplied(8, 9, 14, alpha),
            egui::Stroke::NONE,
        ));
    }

    fn paint_egg(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        size: egui::Vec2,
        p: Projected,
        i: usize,
    ) {
        let v = &self.visuals[i];
        let rec = &self.eggs[i];
        let selected = self.interaction.selected() == Some(i);

        let sp = center + egui::vec2(p.x, p.y);
        let px = self.camera.screen_scale(p.depth, size.y);
        let body = v.body_scale();
        let half_w = egg::BODY_RADIUS * body[0] * px;
        let half_h = egg::BODY_RADIUS * body[1] * px;

        // Glow halo: stacked silhouettes in the shell color.
        let glow_alpha = (v.glow * 0.22).min(0.6);
        for (expand, fade) in [(1.5_f32, 0.45_f32), (1.22, 1.0)] {
            painter.add(egui::Shape::convex_polygon(
                egg_outline(sp, half_w * expand, half_h * expand),
                tint(rec.color, 1.0, glow_alpha * fade),
                egui::Stroke::NONE,
            ));
        }

        // Body, brightened by the glow, with a darker rim.
        painter.add(egui::Shape::convex_polygon(
            egg_outline(sp, half_w, half_h),
            tint(rec.color, 0.55 + v.glow * 0.45, 1.0),
            egui::Stroke::new(1.0, tint(rec.color, 0.35, 1.0)),
        ));

        // Speckles slide across the shell as the egg spins.
        for (row, phase) in [(-0.45_f32, 0.0_f32), (0.05, 2.1), (0.5, 4.2)] {
            let a = v.rotation + phase;
            let facing = a.cos();
            if facing <= 0.05 {
                continue;
            }
            painter.circle_filled(
                egui::pos2(sp.x + a.sin() * half_w * 0.55, sp.y + row * half_h * 0.5),
                (half_w * 0.11 * facing).max(0.6),
                tint(rec.color, 1.45, 0.8),
            );
        }

        // Specular highlight from the finish preset.
        let finish = EggVisual::finish(selected);
        let hl_r = half_w * (0.16 + finish.roughness * 0.22);
        let hl_alpha = 0.2 + finish.metallic * 0.5;
        painter.circle_filled(
            egui::pos2(sp.x - half_w * 0.34, sp.y - half_h * 0.42),
            hl_r,
            egui::Color32::from_rgba_unmultiplied(255, 255, 255, (hl_alpha * 255.0) as u8),
        );
    }

    fn paint_marker(
        &self,
        painter: &egui::Painter,
        center: egui::Pos2,
        size: egui::Vec2,
        p: Projected,
        i: usize,
    ) {
        let m = match &self.markers[i] {
            Some(m) => m,
            None => return,
        };
        let rec = &self.eggs[i];
        let sp = center + egui::vec2(p.x, p.y);
        let px = self.camera.screen_scale(p.depth, size.y);
        let r = MARKER_RADIUS * px;

        // Foreshorten one axis with the second spin to fake the tumble.
        let squash = m.spin[1].cos().abs().max(0.25);
        let points: Vec<egui::Pos2> = (0..4)
            .map(|k| {
                let a = m.spin[0] + k as f32 * std::f32::consts::FRAC_PI_2;
                egui::pos2(sp.x + a.cos() * r * squash, sp.y + a.sin() * r)
            })
            .collect();
        painter.add(egui::Shape::convex_polygon(
            points,
            tint(rec.color, 1.3, 0.95),
            egui::Stroke::new(1.0, egui::Color32::from_rgba_unmultiplied(255, 255, 255, 170)),
        ));
    }

    fn paint_hud(&self, painter: &egui::Painter, rect: egui::Rect) {
        let dim = egui::Color32::from_rgba_unmultiplied(190, 200, 235, 200);
        let faint = egui::Color32::from_rgba_unmultiplied(150, 158, 190, 140);
        painter.text(
            rect.left_top() + egui::vec2(12.0, 10.0),
            egui::Align2::LEFT_TOP,
            "EGG CAROUSEL",
            egui::FontId::proportional(13.0),
            dim,
        );
        painter.text(
            rect.left_top() + egui::vec2(12.0, 28.0),
            egui::Align2::LEFT_TOP,
            "click an egg to crack it · drag to orbit · scroll sideways to zoom",
            egui::FontId::proportional(11.0),
            faint,
        );
        if self.interaction.facing_gate {
            painter.text(
                rect.left_top() + egui::vec2(12.0, 44.0),
                egui::Align2::LEFT_TOP,
                "facing gate on: only eggs turned toward you will crack",
                egui::FontId::proportional(11.0),
                faint,
            );
        }
    }
}

/// Screen-space egg silhouette: an oval pinched toward the top.
fn egg_outline(center: egui::Pos2, half_w: f32, half_h: f32) -> Vec<egui::Pos2> {
    const SEGMENTS: usize = 28;
    (0..SEGMENTS)
        .map(|s| {
            let a = s as f32 / SEGMENTS as f32 * TAU;
            let pinch = 1.0 - 0.18 * a.cos().max(0.0);
            egui::pos2(
                center.x + a.sin() * half_w * pinch,
                center.y - a.cos() * half_h,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HuntOptions;
    use std::time::Duration;

    fn test_app(egg_count: usize) -> HuntApp {
        HuntApp::new(HuntOptions {
            egg_count,
            facing_gate: false,
            keep_caption: false,
            caption_delay: Duration::from_secs(3),
            show_stats: false,
        })
    }

    fn viewport() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(1280.0, 800.0))
    }

    #[test]
    fn pointer_on_an_egg_hits_it() {
        let app = test_app(8);
        let rect = viewport();
        let size = rect.size();

        // Slot 2 faces the default camera; aim at its projected center.
        let slot = app.positions[2];
        let p = app.camera.project(slot, size.x, size.y).unwrap();
        let pos = rect.center() + egui::vec2(p.x, p.y);
        assert_eq!(app.egg_under(pos, rect), Some(2));
    }

    #[test]
    fn pointer_in_empty_sky_hits_nothing() {
        let app = test_app(8);
        let rect = viewport();
        assert_eq!(app.egg_under(egui::pos2(8.0, 8.0), rect), None);
    }

    #[test]
    fn empty_ring_never_hits() {
        let app = test_app(0);
        let rect = viewport();
        assert_eq!(app.egg_under(rect.center(), rect), None);
    }

    #[test]
    fn advance_drives_markers_and_the_caption_fade() {
        let mut app = test_app(8);
        let t0 = Instant::now();

        for _ in 0..10 {
            app.advance(1.0 / 60.0, t0);
        }
        assert!(app.markers.iter().all(|m| m.is_none()));
        assert!(app.caption_alpha < 0.01);

        app.interaction.crack(3, app.camera.viewer_angle(), t0);
        for _ in 0..120 {
            app.advance(1.0 / 60.0, t0);
        }

        // Only the cracked slot owns a marker, and the caption is up.
        assert_eq!(app.markers.iter().filter(|m| m.is_some()).count(), 1);
        assert!(app.markers[3].map_or(false, |m| m.rested()));
        assert!(app.caption_alpha > 0.9);
        assert_eq!(app.last_caption, Some(3));

        // Deselection fades the caption out; the marker and the shown
        // record both stay.
        app.interaction.clear_selection();
        for _ in 0..240 {
            app.advance(1.0 / 60.0, t0);
        }
        assert!(app.markers[3].is_some());
        assert!(app.caption_alpha < 0.05);
        assert_eq!(app.last_caption, Some(3));
    }

    #[test]
    fn egg_outline_is_a_closed_convex_loop() {
        let pts = egg_outline(egui::pos2(100.0, 100.0), 20.0, 26.0);
        assert_eq!(pts.len(), 28);
        // Convexity: every cross product of successive edges keeps sign.
        let mut sign = 0.0_f32;
        for i in 0..pts.len() {
            let a = pts[i];
            let b = pts[(i + 1) % pts.len()];
            let c = pts[(i + 2) % pts.len()];
            let cross = (b.x - a.x) * (c.y - b.y) - (b.y - a.y) * (c.x - b.x);
            if sign == 0.0 {
                sign = cross.signum();
            } else if cross != 0.0 {
                assert_eq!(cross.signum(), sign);
            }
        }
    }
}
