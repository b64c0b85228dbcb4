use std::time::{Duration, Instant};

use tracing::debug;

use fractex_core::{map_to_plane, Fractal, Viewport};

use crate::buffer::PixelBuffer;
use crate::color::escape_color;
use crate::surface::Surface;

/// Summary of one full render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStats {
    pub elapsed: Duration,
    /// Pixels whose point never escaped.
    pub bounded_pixels: usize,
}

/// Render `fractal` over `viewport` into every pixel of `surface`.
///
/// Pixel row 0 maps to `viewport.origin_y`; there is no axis flip. The pass
/// is synchronous and always covers the whole surface, after which
/// [`Surface::repaint`] is called exactly once.
pub fn render_into<F, S>(fractal: &F, viewport: &Viewport, surface: &mut S) -> RenderStats
where
    F: Fractal + ?Sized,
    S: Surface + ?Sized,
{
    let start = Instant::now();
    let size = surface.size();
    let (max_x, max_y) = (viewport.max_x(), viewport.max_y());
    let mut bounded_pixels = 0;

    for px in 0..size {
        let x = map_to_plane(viewport.origin_x, max_x, size, px);
        for py in 0..size {
            let y = map_to_plane(viewport.origin_y, max_y, size, py);
            let result = fractal.iterate(x, y);
            if result.is_bounded() {
                bounded_pixels += 1;
            }
            surface.set_pixel(px, py, escape_color(result));
        }
    }

    surface.repaint();

    let elapsed = start.elapsed();
    debug!(
        elapsed_ms = elapsed.as_millis(),
        size,
        bounded_pixels,
        "Render complete"
    );
    RenderStats {
        elapsed,
        bounded_pixels,
    }
}

/// Render into a fresh `display_size × display_size` buffer.
pub fn render<F>(fractal: &F, viewport: &Viewport, display_size: u32) -> crate::Result<PixelBuffer>
where
    F: Fractal + ?Sized,
{
    let mut buffer = PixelBuffer::new(display_size)?;
    render_into(fractal, viewport, &mut buffer);
    Ok(buffer)
}
