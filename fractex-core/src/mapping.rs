//! Linear mapping between pixel indices and complex-plane coordinates.

/// Map a pixel index onto the interval `[range_min, range_max)`.
///
/// `pixel_index == display_size` is accepted and yields `range_max`, which
/// lets callers address the far edge of the display. The caller must
/// guarantee `display_size > 0`.
#[inline]
pub fn map_to_plane(range_min: f64, range_max: f64, display_size: u32, pixel_index: u32) -> f64 {
    let range = range_max - range_min;
    range_min + range * pixel_index as f64 / display_size as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn first_pixel_maps_to_range_min() {
        for &(min, max) in &[(-2.0, 1.0), (-1.5, 1.5), (0.25, 0.26), (-1e-6, 1e-6)] {
            for &n in &[1u32, 3, 600, 4096] {
                assert_eq!(map_to_plane(min, max, n, 0), min);
            }
        }
    }

    #[test]
    fn display_size_maps_to_range_max() {
        for &(min, max) in &[(-2.0, 1.0), (-1.5, 1.5), (10.0, 11.0)] {
            for &n in &[1u32, 7, 600] {
                let v = map_to_plane(min, max, n, n);
                assert!((v - max).abs() < EPSILON, "{min}..{max} over {n}: {v}");
            }
        }
    }

    #[test]
    fn midpoint_is_linear() {
        let v = map_to_plane(-2.0, 1.0, 600, 300);
        assert!((v - (-0.5)).abs() < EPSILON);
    }
}
