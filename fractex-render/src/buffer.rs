use crate::error::RenderError;
use crate::surface::Surface;

/// Bytes per pixel in a [`PixelBuffer`].
pub const BYTES_PER_PIXEL: usize = 3;

/// A square RGB pixel buffer.
///
/// Dimensions are fixed at construction; `pixels` holds 3 bytes per pixel
/// in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    size: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a `size × size` buffer filled with black.
    pub fn new(size: u32) -> crate::Result<Self> {
        if size == 0 {
            return Err(RenderError::InvalidDimensions {
                width: size,
                height: size,
            });
        }
        Ok(Self {
            size,
            pixels: vec![0u8; size as usize * size as usize * BYTES_PER_PIXEL],
        })
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Color of the pixel at `(x, y)`.
    ///
    /// Panics if the coordinate lies outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let i = self.index(x, y);
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2]]
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.size && y < self.size, "pixel ({x}, {y}) out of bounds");
        (y as usize * self.size as usize + x as usize) * BYTES_PER_PIXEL
    }
}

impl Surface for PixelBuffer {
    fn size(&self) -> u32 {
        self.size
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        let i = self.index(x, y);
        self.pixels[i..i + BYTES_PER_PIXEL].copy_from_slice(&rgb);
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn snapshot(&self) -> PixelBuffer {
        self.clone()
    }

    /// Nothing is displayed, so there is nothing to refresh.
    fn repaint(&mut self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_is_black() {
        let buf = PixelBuffer::new(4).unwrap();
        assert_eq!(buf.pixels().len(), 4 * 4 * 3);
        assert!(buf.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            PixelBuffer::new(0),
            Err(RenderError::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn set_pixel_writes_one_pixel() {
        let mut buf = PixelBuffer::new(8).unwrap();
        buf.set_pixel(2, 1, [255, 10, 20]);

        assert_eq!(buf.pixel(2, 1), [255, 10, 20]);
        let idx = (8 + 2) * 3;
        assert_eq!(&buf.pixels()[idx..idx + 3], &[255, 10, 20]);

        // Neighbours are untouched.
        assert_eq!(buf.pixel(1, 1), [0, 0, 0]);
        assert_eq!(buf.pixel(2, 2), [0, 0, 0]);
    }

    #[test]
    fn clear_resets_to_black() {
        let mut buf = PixelBuffer::new(3).unwrap();
        buf.set_pixel(0, 0, [1, 2, 3]);
        buf.set_pixel(2, 2, [4, 5, 6]);
        buf.clear();
        assert_eq!(buf, PixelBuffer::new(3).unwrap());
    }
}
