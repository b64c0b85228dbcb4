use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, warn};

/// Accepted side lengths of the square display, in pixels.
pub const DISPLAY_SIZE_RANGE: std::ops::RangeInclusive<u32> = 16..=4096;

// ---------------------------------------------------------------------------
// Application preferences
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppPreferences {
    /// Side length of the square fractal display.
    #[serde(default = "default_display_size")]
    pub display_size: u32,
    /// Extent multiplier applied on each click; below 1 zooms in.
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Folder the save dialog opens in.
    #[serde(default)]
    pub last_save_dir: Option<PathBuf>,
}

fn default_display_size() -> u32 {
    600
}
fn default_zoom_factor() -> f64 {
    0.5
}

impl Default for AppPreferences {
    fn default() -> Self {
        Self {
            display_size: default_display_size(),
            zoom_factor: default_zoom_factor(),
            last_save_dir: None,
        }
    }
}

impl AppPreferences {
    /// Load preferences from the config directory, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No preferences file at {}", path.display());
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<AppPreferences>(&json) {
                Ok(prefs) => {
                    info!("Loaded preferences from {}", path.display());
                    return prefs.sanitized();
                }
                Err(e) => error!("Failed to parse preferences: {e}"),
            },
            Err(e) => error!("Failed to read preferences file: {e}"),
        }
        Self::default()
    }

    /// Persist preferences to disk.
    pub fn save(&self) {
        self.save_to(&config_path());
    }

    pub fn save_to(&self, path: &Path) {
        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                error!("Failed to create config directory: {e}");
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(json) => {
                if let Err(e) = fs::write(path, &json) {
                    error!("Failed to write preferences: {e}");
                } else {
                    debug!("Saved preferences");
                }
            }
            Err(e) => error!("Failed to serialize preferences: {e}"),
        }
    }

    /// Replace out-of-range values with the nearest usable ones.
    fn sanitized(mut self) -> Self {
        let size = self
            .display_size
            .clamp(*DISPLAY_SIZE_RANGE.start(), *DISPLAY_SIZE_RANGE.end());
        if size != self.display_size {
            warn!("display_size {} out of range, using {size}", self.display_size);
            self.display_size = size;
        }
        if !(self.zoom_factor > 0.0 && self.zoom_factor < 1.0) {
            warn!(
                "zoom_factor {} must lie in (0, 1), using {}",
                self.zoom_factor,
                default_zoom_factor()
            );
            self.zoom_factor = default_zoom_factor();
        }
        self
    }
}

fn config_path() -> PathBuf {
    crate::app_dir::config_directory().join("preferences.json")
}
