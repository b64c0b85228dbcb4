use serde::{Deserialize, Serialize};

use crate::mandelbrot::Mandelbrot;
use crate::viewport::Viewport;

/// The outcome of iterating a single point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EscapeResult {
    /// The orbit left the radius-2 disc after this many steps.
    Escaped(u32),

    /// The iteration budget ran out first. The point is presumed to lie in
    /// the bounded set, which is an approximation rather than a proof.
    Bounded,
}

impl EscapeResult {
    /// Integer form: the iteration count, or `-1` for [`Bounded`](Self::Bounded).
    #[inline]
    pub fn to_sentinel(self) -> i32 {
        match self {
            Self::Escaped(n) => n as i32,
            Self::Bounded => -1,
        }
    }

    #[inline]
    pub fn is_bounded(self) -> bool {
        matches!(self, Self::Bounded)
    }
}

/// Trait implemented by all fractal types.
///
/// Renderers are generic over `F: Fractal` so the iteration loop can be
/// inlined; [`FractalRule`] picks the concrete type at the call site.
pub trait Fractal {
    /// The region of the plane shown before any user interaction.
    fn initial_range(&self) -> Viewport;

    /// Iterate the point `(x, y)` of the complex plane.
    fn iterate(&self, x: f64, y: f64) -> EscapeResult;
}

/// The set of fractals selectable in the UI.
///
/// New fractals are added as new variants, not registered at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FractalRule {
    #[default]
    Mandelbrot,
}

impl FractalRule {
    /// Every variant, in dropdown order.
    pub const ALL: [FractalRule; 1] = [FractalRule::Mandelbrot];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mandelbrot => "Mandelbrot",
        }
    }
}

impl Fractal for FractalRule {
    fn initial_range(&self) -> Viewport {
        match self {
            Self::Mandelbrot => Mandelbrot.initial_range(),
        }
    }

    #[inline]
    fn iterate(&self, x: f64, y: f64) -> EscapeResult {
        match self {
            Self::Mandelbrot => Mandelbrot.iterate(x, y),
        }
    }
}

impl std::fmt::Display for FractalRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
