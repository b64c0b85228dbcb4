use crate::fractal::{EscapeResult, Fractal};
use crate::viewport::Viewport;

/// Iteration budget before a point is declared bounded.
///
/// Raising it sharpens detail near the boundary at proportional cost.
pub const MAX_ITERATIONS: u32 = 2000;

/// The Mandelbrot set: `z_{n+1} = z_n² + c`, starting from `z₀ = 0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Mandelbrot;

impl Fractal for Mandelbrot {
    /// `(-2 - 1.5i)` to `(1 + 1.5i)`.
    fn initial_range(&self) -> Viewport {
        Viewport {
            origin_x: -2.0,
            origin_y: -1.5,
            width: 3.0,
            height: 3.0,
        }
    }

    fn iterate(&self, x: f64, y: f64) -> EscapeResult {
        let mut z_re = 0.0_f64;
        let mut z_im = 0.0_f64;
        let mut count = 0;

        while count < MAX_ITERATIONS && z_re * z_re + z_im * z_im < 4.0 {
            let next_re = z_re * z_re - z_im * z_im + x;
            let next_im = 2.0 * z_re * z_im + y;
            z_re = next_re;
            z_im = next_im;
            count += 1;
        }

        if count == MAX_ITERATIONS {
            EscapeResult::Bounded
        } else {
            EscapeResult::Escaped(count)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin_is_bounded() {
        assert_eq!(Mandelbrot.iterate(0.0, 0.0), EscapeResult::Bounded);
    }

    #[test]
    fn minus_one_is_bounded() {
        // c = -1 gives the orbit 0 → -1 → 0 → -1 … (period 2)
        assert_eq!(Mandelbrot.iterate(-1.0, 0.0), EscapeResult::Bounded);
    }

    #[test]
    fn far_point_escapes_after_one_step() {
        // z₁ = 2 + 2i, |z₁|² = 8.
        assert_eq!(Mandelbrot.iterate(2.0, 2.0), EscapeResult::Escaped(1));
    }

    #[test]
    fn known_escape_count() {
        // c = 1: z₁ = 1, z₂ = 2 (|z|² = 4, not < 4) → stops after 2 steps.
        assert_eq!(Mandelbrot.iterate(1.0, 0.0), EscapeResult::Escaped(2));
    }

    #[test]
    fn point_on_escape_circle_escapes_immediately_after_first_step() {
        // c = -2: z₁ = -2, |z₁|² = 4 → loop stops.
        assert_eq!(Mandelbrot.iterate(-2.0, 0.0), EscapeResult::Escaped(1));
    }

    #[test]
    fn escape_count_stays_below_budget() {
        for &(x, y) in &[(0.3, 0.5), (-0.75, 0.1), (0.26, 0.0), (-1.8, 0.01)] {
            if let EscapeResult::Escaped(n) = Mandelbrot.iterate(x, y) {
                assert!(n < MAX_ITERATIONS);
            }
        }
    }

    #[test]
    fn deterministic_results() {
        let points = [(0.0, 0.0), (-0.75, 0.1), (0.3, 0.5), (-2.0, 0.0), (1.0, 1.0)];
        let run1: Vec<_> = points.iter().map(|&(x, y)| Mandelbrot.iterate(x, y)).collect();
        let run2: Vec<_> = points.iter().map(|&(x, y)| Mandelbrot.iterate(x, y)).collect();
        assert_eq!(run1, run2, "iteration results must be deterministic");
    }

    #[test]
    fn initial_range_matches_reference_extent() {
        let vp = Mandelbrot.initial_range();
        assert_eq!(vp.origin_x, -2.0);
        assert_eq!(vp.origin_y, -1.5);
        assert_eq!(vp.width, 3.0);
        assert_eq!(vp.height, 3.0);
    }
}
