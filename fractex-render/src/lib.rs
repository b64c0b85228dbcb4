pub mod buffer;
pub mod color;
pub mod error;
pub mod export;
pub mod renderer;
pub mod surface;

pub use buffer::PixelBuffer;
pub use color::{escape_color, hsb_to_rgb};
pub use error::{ExportError, RenderError};
pub use export::{export_png, png_path, ExportMetadata};
pub use renderer::{render, render_into, RenderStats};
pub use surface::Surface;

/// Convenience result type for the render crate.
pub type Result<T> = std::result::Result<T, RenderError>;
