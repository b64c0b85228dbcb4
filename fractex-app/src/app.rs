use eframe::egui;
use tracing::info;

use crate::canvas::Canvas;
use crate::preferences::AppPreferences;
use crate::session::{Session, SessionOutcome, UiEvent};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub(crate) const WINDOW_TITLE: &str = "Fractal Explorer";
/// Height reserved for the top and bottom control panels.
const PANEL_ALLOWANCE: f32 = 96.0;
/// Horizontal padding around the display.
const SIDE_ALLOWANCE: f32 = 16.0;

// ---------------------------------------------------------------------------
// Status line
// ---------------------------------------------------------------------------

/// Short message shown next to the buttons after an action.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Status {
    None,
    Info(String),
    Warning(String),
}

// ---------------------------------------------------------------------------
// Application struct
// ---------------------------------------------------------------------------

pub(crate) struct FractexApp {
    pub(crate) session: Session<Canvas>,
    pub(crate) preferences: AppPreferences,

    // UI state
    pub(crate) status: Status,
    /// Message for the "Cannot Save Image" window, while it is open.
    pub(crate) save_error: Option<String>,
    /// Plane coordinate under the pointer, if it is over the display.
    pub(crate) cursor_plane: Option<(f64, f64)>,
}

impl FractexApp {
    pub(crate) fn new(preferences: AppPreferences) -> fractex_render::Result<Self> {
        let canvas = Canvas::new(preferences.display_size)?;
        let session = Session::new(canvas, preferences.zoom_factor);
        Ok(Self {
            session,
            preferences,
            status: Status::None,
            save_error: None,
            cursor_plane: None,
        })
    }

    /// Route an event to the session and reflect the outcome in the UI.
    pub(crate) fn dispatch(&mut self, event: UiEvent) {
        self.status = match self.session.handle(event) {
            SessionOutcome::Rendered(stats) => Status::Info(format!(
                "Rendered in {} ms",
                stats.elapsed.as_millis()
            )),
            SessionOutcome::ZoomRejected(e) => {
                Status::Warning(format!("Zoom limit reached ({e}); use Reset to start over"))
            }
            SessionOutcome::Saved(path) => {
                self.remember_save_dir(&path);
                Status::Info(format!("Saved {}", short_name(&path)))
            }
            SessionOutcome::SaveFailed(message) => {
                self.save_error = Some(message);
                Status::None
            }
            SessionOutcome::Ignored => return,
        };
    }

    fn remember_save_dir(&mut self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            self.preferences.last_save_dir = Some(parent.to_path_buf());
        }
    }
}

fn short_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// eframe::App
// ---------------------------------------------------------------------------

impl eframe::App for FractexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.draw_rule_panel(ctx);
        self.draw_button_panel(ctx);
        self.draw_display(ctx);
        self.draw_save_error_window(ctx);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.preferences.save();
        info!("Saved preferences on exit");
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub(crate) fn run() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Starting Fractex");

    let prefs = AppPreferences::load();
    let side = prefs.display_size as f32;

    let viewport = egui::ViewportBuilder::default()
        .with_title(WINDOW_TITLE)
        .with_inner_size([side + SIDE_ALLOWANCE, side + PANEL_ALLOWANCE])
        .with_resizable(false);

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(FractexApp::new(prefs)?))),
    )
}
