use eframe::egui;

use crate::app::FractexApp;

impl FractexApp {
    pub(crate) fn draw_save_error_window(&mut self, ctx: &egui::Context) {
        let Some(message) = self.save_error.clone() else {
            return;
        };
        let mut open = true;
        let mut dismissed = false;
        egui::Window::new("Cannot Save Image")
            .open(&mut open)
            .resizable(false)
            .collapsible(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.colored_label(egui::Color32::from_rgb(255, 120, 100), message);
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    dismissed = ui.button("OK").clicked();
                });
            });
        if !open || dismissed || ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            self.save_error = None;
        }
    }
}
