//! Escape-count to color mapping.

use fractex_core::EscapeResult;

/// Hue assigned to points that escape on the very first step.
const BASE_HUE: f32 = 0.7;

/// Escape counts per full turn of the color wheel.
const HUE_PERIOD: f32 = 200.0;

pub const BLACK: [u8; 3] = [0, 0, 0];

/// Color of a single escape result.
///
/// Bounded points are black. Escaped points walk the hue wheel starting at
/// violet; hues past 1.0 wrap around.
#[inline]
pub fn escape_color(result: EscapeResult) -> [u8; 3] {
    match result {
        EscapeResult::Bounded => BLACK,
        EscapeResult::Escaped(n) => {
            let hue = BASE_HUE + n as f32 / HUE_PERIOD;
            hsb_to_rgb(hue, 1.0, 1.0)
        }
    }
}

/// Convert hue/saturation/brightness to 8-bit RGB.
///
/// Only the fractional part of `hue` is used, so `1.25` and `0.25` give
/// the same color. Each channel is `value * 255 + 0.5` truncated, computed
/// in `f32`, which fixes the exact byte values of every escape count.
pub fn hsb_to_rgb(hue: f32, saturation: f32, brightness: f32) -> [u8; 3] {
    let channel = |v: f32| (v * 255.0 + 0.5) as u8;

    if saturation == 0.0 {
        let v = channel(brightness);
        return [v, v, v];
    }

    let h = (hue - hue.floor()) * 6.0;
    let f = h - h.floor();
    let p = brightness * (1.0 - saturation);
    let q = brightness * (1.0 - saturation * f);
    let t = brightness * (1.0 - saturation * (1.0 - f));

    let (r, g, b) = match h as u32 {
        0 => (brightness, t, p),
        1 => (q, brightness, p),
        2 => (p, brightness, t),
        3 => (p, q, brightness),
        4 => (t, p, brightness),
        5 => (brightness, p, q),
        // `hue - floor(hue)` can round up to exactly 1.0 for tiny negative hues.
        _ => (brightness, t, p),
    };
    [channel(r), channel(g), channel(b)]
}
