use std::path::PathBuf;

use eframe::egui;

use fractex_core::FractalRule;

use crate::app::{FractexApp, Status};
use crate::preferences::AppPreferences;
use crate::session::UiEvent;

impl FractexApp {
    /// Top panel: fractal selector.
    pub(crate) fn draw_rule_panel(&mut self, ctx: &egui::Context) {
        let mut selected = None;
        let current = self.session.rule();

        egui::TopBottomPanel::top("rule_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label("Fractal:");
                egui::ComboBox::from_id_salt(egui::Id::new("rule_select"))
                    .selected_text(current.label())
                    .show_ui(ui, |ui| {
                        for rule in FractalRule::ALL {
                            // Re-picking the active rule still resets the view.
                            if ui.selectable_label(rule == current, rule.label()).clicked() {
                                selected = Some(rule);
                            }
                        }
                    });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let vp = self.session.viewport();
                    ui.monospace(format!("View: {:.3e} × {:.3e}", vp.width, vp.height));
                });
            });
        });

        if let Some(rule) = selected {
            self.dispatch(UiEvent::RuleSelected(rule));
        }
    }

    /// Bottom panel: Save and Reset buttons, status line, cursor readout.
    pub(crate) fn draw_button_panel(&mut self, ctx: &egui::Context) {
        let mut save = false;
        let mut reset = false;

        egui::TopBottomPanel::bottom("button_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                save = ui.button("Save").clicked();
                reset = ui.button("Reset").clicked();

                ui.separator();
                match &self.status {
                    Status::None => {}
                    Status::Info(msg) => {
                        ui.label(msg);
                    }
                    Status::Warning(msg) => {
                        ui.colored_label(egui::Color32::from_rgb(255, 180, 50), msg);
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some((x, y)) = self.cursor_plane {
                        ui.monospace(format!("{x:+.10} {y:+.10}i"));
                    }
                });
            });
        });

        if save {
            self.request_save();
        }
        if reset {
            self.dispatch(UiEvent::Reset);
        }
    }

    fn request_save(&mut self) {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Save Image")
            .add_filter("PNG Images", &["png"])
            .set_file_name("fractal.png");
        if let Some(dir) = initial_save_dir(&self.preferences) {
            dialog = dialog.set_directory(dir);
        }
        if let Some(path) = dialog.save_file() {
            self.dispatch(UiEvent::Save(path));
        }
    }
}

/// Default folder for the save dialog: the last one saved to, if it still exists.
fn initial_save_dir(prefs: &AppPreferences) -> Option<PathBuf> {
    prefs
        .last_save_dir
        .as_ref()
        .filter(|dir| dir.is_dir())
        .cloned()
}
