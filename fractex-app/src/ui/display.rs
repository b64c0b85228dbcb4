use eframe::egui;

use crate::app::FractexApp;
use crate::session::UiEvent;

impl FractexApp {
    /// Central panel: the rendered fractal. A primary click zooms in on the
    /// clicked point.
    pub(crate) fn draw_display(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let size = self.session.display_size();
            let side = size as f32;

            ui.vertical_centered(|ui| {
                let (response, painter) =
                    ui.allocate_painter(egui::vec2(side, side), egui::Sense::click());

                let tex_id = self.session.surface_mut().texture(ctx).id();
                let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                painter.image(tex_id, response.rect, uv, egui::Color32::WHITE);

                self.cursor_plane = response
                    .hover_pos()
                    .and_then(|pos| pixel_under(response.rect, size, pos))
                    .map(|(px, py)| self.session.plane_at(px, py));

                if response.clicked_by(egui::PointerButton::Primary) {
                    if let Some((px, py)) = response
                        .interact_pointer_pos()
                        .and_then(|pos| pixel_under(response.rect, size, pos))
                    {
                        self.dispatch(UiEvent::Click { px, py });
                    }
                }
            });
        });
    }
}

/// Display pixel under `pos`, scaling from UI points to buffer pixels.
fn pixel_under(rect: egui::Rect, size: u32, pos: egui::Pos2) -> Option<(u32, u32)> {
    if !rect.contains(pos) || rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let fx = (pos.x - rect.min.x) / rect.width();
    let fy = (pos.y - rect.min.y) / rect.height();
    let last = size.saturating_sub(1);
    let px = ((fx * size as f32) as u32).min(last);
    let py = ((fy * size as f32) as u32).min(last);
    Some((px, py))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect() -> egui::Rect {
        egui::Rect::from_min_size(egui::pos2(10.0, 20.0), egui::vec2(600.0, 600.0))
    }

    #[test]
    fn top_left_corner_is_pixel_zero() {
        assert_eq!(pixel_under(rect(), 600, egui::pos2(10.0, 20.0)), Some((0, 0)));
    }

    #[test]
    fn bottom_right_edge_is_clamped_to_last_pixel() {
        assert_eq!(
            pixel_under(rect(), 600, egui::pos2(610.0, 620.0)),
            Some((599, 599))
        );
    }

    #[test]
    fn scales_points_to_pixels() {
        // A 600-point display backed by a 300-pixel buffer.
        assert_eq!(
            pixel_under(rect(), 300, egui::pos2(310.0, 120.0)),
            Some((150, 50))
        );
    }

    #[test]
    fn outside_is_none() {
        assert_eq!(pixel_under(rect(), 600, egui::pos2(5.0, 30.0)), None);
        assert_eq!(pixel_under(rect(), 600, egui::pos2(30.0, 700.0)), None);
    }
}
