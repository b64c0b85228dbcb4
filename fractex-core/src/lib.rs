pub mod error;
pub mod fractal;
pub mod mandelbrot;
pub mod mapping;
pub mod viewport;

// Re-export primary types for convenience.
pub use error::CoreError;
pub use fractal::{EscapeResult, Fractal, FractalRule};
pub use mandelbrot::{Mandelbrot, MAX_ITERATIONS};
pub use mapping::map_to_plane;
pub use viewport::{Viewport, MIN_EXTENT};

/// Convenience result type for the core crate.
pub type Result<T> = std::result::Result<T, CoreError>;
