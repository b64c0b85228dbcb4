use crate::buffer::PixelBuffer;

/// A square drawing target the renderer writes into.
///
/// [`PixelBuffer`] is the headless implementation; the viewer wraps one and
/// uploads it to the screen on [`repaint`](Self::repaint).
pub trait Surface {
    /// Side length in pixels.
    fn size(&self) -> u32;

    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]);

    /// Fill the whole surface with black.
    fn clear(&mut self);

    /// Copy of the current raster, as read by the save path.
    fn snapshot(&self) -> PixelBuffer;

    /// Called once after a full render pass has been written.
    fn repaint(&mut self);
}
