use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use fractex_core::{CoreError, FractalRule, Viewport};
use fractex_render::{export_png, render_into, ExportMetadata, RenderStats, Surface};

/// A discrete user action delivered to the session.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum UiEvent {
    /// Primary click on the display, in pixel coordinates.
    Click { px: u32, py: u32 },
    Reset,
    Save(PathBuf),
    RuleSelected(FractalRule),
}

/// What handling an event did.
#[derive(Debug)]
pub(crate) enum SessionOutcome {
    Rendered(RenderStats),
    /// The zoom would have produced an unusable viewport; nothing changed.
    ZoomRejected(CoreError),
    Saved(PathBuf),
    /// Encoding or writing the image failed; nothing changed.
    SaveFailed(String),
    /// The event did not apply (e.g. a click outside the display).
    Ignored,
}

/// One viewer session: the active rule, the visible region, and the surface
/// holding the last rendered frame.
///
/// Every viewport change re-renders synchronously before `handle` returns,
/// so a save always sees a complete frame.
pub(crate) struct Session<S: Surface> {
    rule: FractalRule,
    viewport: Viewport,
    zoom_factor: f64,
    surface: S,
}

impl<S: Surface> Session<S> {
    /// Start on the initial view of the default rule and render it.
    pub(crate) fn new(surface: S, zoom_factor: f64) -> Self {
        let rule = FractalRule::default();
        let mut session = Self {
            rule,
            viewport: Viewport::initial(rule),
            zoom_factor,
            surface,
        };
        session.redraw();
        session
    }

    pub(crate) fn rule(&self) -> FractalRule {
        self.rule
    }

    pub(crate) fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[cfg(test)]
    pub(crate) fn surface(&self) -> &S {
        &self.surface
    }

    pub(crate) fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub(crate) fn display_size(&self) -> u32 {
        self.surface.size()
    }

    /// Plane coordinate under a display pixel.
    pub(crate) fn plane_at(&self, px: u32, py: u32) -> (f64, f64) {
        self.viewport.pixel_to_plane(self.display_size(), px, py)
    }

    pub(crate) fn handle(&mut self, event: UiEvent) -> SessionOutcome {
        match event {
            UiEvent::Click { px, py } => {
                let size = self.display_size();
                if px >= size || py >= size {
                    return SessionOutcome::Ignored;
                }
                let (x, y) = self.plane_at(px, py);
                match self.viewport.recenter_and_zoom(x, y, self.zoom_factor) {
                    Ok(()) => SessionOutcome::Rendered(self.redraw()),
                    Err(e) => {
                        warn!("Zoom at ({x}, {y}) rejected: {e}");
                        SessionOutcome::ZoomRejected(e)
                    }
                }
            }
            UiEvent::Reset => {
                self.viewport.reset_to_initial(self.rule);
                SessionOutcome::Rendered(self.redraw())
            }
            UiEvent::RuleSelected(rule) => {
                debug!(rule = rule.label(), "Fractal selected");
                self.rule = rule;
                self.viewport.reset_to_initial(rule);
                SessionOutcome::Rendered(self.redraw())
            }
            UiEvent::Save(path) => self.save(path),
        }
    }

    fn redraw(&mut self) -> RenderStats {
        render_into(&self.rule, &self.viewport, &mut self.surface)
    }

    fn save(&self, path: PathBuf) -> SessionOutcome {
        let metadata = ExportMetadata {
            rule: self.rule,
            viewport: self.viewport,
        };
        match export_png(&self.surface.snapshot(), &path, &metadata) {
            Ok(written) => {
                info!("Saved image to {}", written.display());
                SessionOutcome::Saved(written)
            }
            Err(e) => {
                error!("Save failed: {e}");
                SessionOutcome::SaveFailed(e.to_string())
            }
        }
    }
}
