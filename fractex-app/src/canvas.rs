use eframe::egui;

use fractex_render::{PixelBuffer, Surface};

/// Surface backing the on-screen display.
///
/// Pixels land in an in-memory buffer; `repaint` marks it for upload and
/// the next frame turns it into an egui texture.
pub(crate) struct Canvas {
    buffer: PixelBuffer,
    texture: Option<egui::TextureHandle>,
    dirty: bool,
}

impl Canvas {
    pub(crate) fn new(size: u32) -> fractex_render::Result<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(size)?,
            texture: None,
            dirty: false,
        })
    }

    /// Texture for the last completed render, uploading it first if needed.
    pub(crate) fn texture(&mut self, ctx: &egui::Context) -> &egui::TextureHandle {
        let buffer = &self.buffer;
        let image = || {
            let size = buffer.size() as usize;
            egui::ColorImage::from_rgb([size, size], buffer.pixels())
        };
        if self.dirty {
            if let Some(tex) = self.texture.as_mut() {
                tex.set(image(), egui::TextureOptions::NEAREST);
            }
            self.dirty = false;
        }
        self.texture
            .get_or_insert_with(|| ctx.load_texture("fractal", image(), egui::TextureOptions::NEAREST))
    }
}

impl Surface for Canvas {
    fn size(&self) -> u32 {
        self.buffer.size()
    }

    fn set_pixel(&mut self, x: u32, y: u32, rgb: [u8; 3]) {
        self.buffer.set_pixel(x, y, rgb);
    }

    fn clear(&mut self) {
        self.buffer.clear();
        self.dirty = true;
    }

    fn snapshot(&self) -> PixelBuffer {
        self.buffer.clone()
    }

    fn repaint(&mut self) {
        self.dirty = true;
    }
}
