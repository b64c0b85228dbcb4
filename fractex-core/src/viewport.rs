use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CoreError;
use crate::fractal::{Fractal, FractalRule};
use crate::mapping::map_to_plane;

/// Smallest width or height a zoom may produce.
///
/// Below this the per-pixel spacing of a 600-pixel display approaches the
/// resolution of `f64` around the set, and neighbouring pixels collapse onto
/// the same plane coordinate.
pub const MIN_EXTENT: f64 = 1e-13;

/// The visible rectangle of the complex plane.
///
/// `origin_x`/`origin_y` is the corner mapped to pixel `(0, 0)`. Width and
/// height are positive and finite whenever the viewport comes from
/// [`Viewport::new`], deserialization, or a successful zoom. A struct literal
/// is not checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    pub origin_x: f64,
    pub origin_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Create a viewport with explicit bounds.
    pub fn new(origin_x: f64, origin_y: f64, width: f64, height: f64) -> crate::Result<Self> {
        let vp = Self {
            origin_x,
            origin_y,
            width,
            height,
        };
        vp.validate()?;
        Ok(vp)
    }

    /// The initial view of `rule`.
    pub fn initial(rule: FractalRule) -> Self {
        rule.initial_range()
    }

    /// Overwrite this viewport with the initial extent of `rule`.
    pub fn reset_to_initial(&mut self, rule: FractalRule) {
        *self = rule.initial_range();
        debug!(rule = rule.label(), "Viewport reset");
    }

    /// Center the view on `(center_x, center_y)` and scale both extents by
    /// `zoom_factor`. A factor below 1 zooms in.
    ///
    /// Fails without touching the viewport if the result would be
    /// non-finite or narrower than [`MIN_EXTENT`].
    pub fn recenter_and_zoom(
        &mut self,
        center_x: f64,
        center_y: f64,
        zoom_factor: f64,
    ) -> crate::Result<()> {
        if !zoom_factor.is_finite() || zoom_factor <= 0.0 {
            return Err(CoreError::InvalidZoomFactor(zoom_factor));
        }

        let width = self.width * zoom_factor;
        let height = self.height * zoom_factor;
        let next = Self {
            origin_x: center_x - width / 2.0,
            origin_y: center_y - height / 2.0,
            width,
            height,
        };
        next.validate()?;

        *self = next;
        debug!(
            center_x,
            center_y,
            width = self.width,
            "Viewport recentered"
        );
        Ok(())
    }

    /// Plane coordinate of a pixel on a `display_size`-square display.
    #[inline]
    pub fn pixel_to_plane(&self, display_size: u32, px: u32, py: u32) -> (f64, f64) {
        (
            map_to_plane(self.origin_x, self.max_x(), display_size, px),
            map_to_plane(self.origin_y, self.max_y(), display_size, py),
        )
    }

    #[inline]
    pub fn max_x(&self) -> f64 {
        self.origin_x + self.width
    }

    #[inline]
    pub fn max_y(&self) -> f64 {
        self.origin_y + self.height
    }

    /// Center of the visible rectangle.
    pub fn center(&self) -> (f64, f64) {
        (
            self.origin_x + self.width / 2.0,
            self.origin_y + self.height / 2.0,
        )
    }

    fn validate(&self) -> crate::Result<()> {
        let fields = [self.origin_x, self.origin_y, self.width, self.height];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(CoreError::DegenerateViewport {
                reason: format!("non-finite bounds {self:?}"),
            });
        }
        if self.width < MIN_EXTENT || self.height < MIN_EXTENT {
            return Err(CoreError::DegenerateViewport {
                reason: format!(
                    "extent {}×{} is below the minimum {MIN_EXTENT:e}",
                    self.width, self.height
                ),
            });
        }
        Ok(())
    }
}

/// Unchecked wire form; deserialization goes through [`Viewport::new`].
#[derive(Deserialize)]
struct RawViewport {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = CoreError;

    fn try_from(raw: RawViewport) -> crate::Result<Self> {
        Self::new(raw.origin_x, raw.origin_y, raw.width, raw.height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::initial(FractalRule::default())
    }
}
