//! PNG export with embedded metadata (tEXt chunks).

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use tracing::debug;

use fractex_core::{FractalRule, Viewport, MAX_ITERATIONS};

use crate::buffer::PixelBuffer;
use crate::error::ExportError;

/// Description of the view an image was rendered from.
pub struct ExportMetadata {
    pub rule: FractalRule,
    pub viewport: Viewport,
}

/// Resolve the file a save request should write to.
///
/// A bare name (or one ending in a dot) gets `.png` appended. Any other
/// extension than `png` (case-insensitive) is rejected.
pub fn png_path(path: &Path) -> Result<PathBuf, ExportError> {
    let has_png_suffix = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.to_ascii_lowercase().ends_with(".png"));
    if has_png_suffix {
        return Ok(path.to_path_buf());
    }
    match path.extension().and_then(|e| e.to_str()) {
        None | Some("") => Ok(path.with_extension("png")),
        Some(_) => Err(ExportError::UnsupportedFormat(path.to_path_buf())),
    }
}

/// Write `buffer` as an RGB PNG with the view described in tEXt chunks.
///
/// Returns the path actually written, after [`png_path`] normalisation.
pub fn export_png(
    buffer: &PixelBuffer,
    path: &Path,
    metadata: &ExportMetadata,
) -> Result<PathBuf, ExportError> {
    let path = png_path(path)?;
    let file = File::create(&path).map_err(|source| ExportError::Io {
        path: path.clone(),
        source,
    })?;
    let writer = BufWriter::new(file);

    let size = buffer.size();
    let mut encoder = png::Encoder::new(writer, size, size);
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Default);

    encoder.add_text_chunk("Software".to_string(), "Fractex".to_string())?;
    for (key, value) in build_metadata_pairs(metadata, size) {
        encoder.add_text_chunk(key, value)?;
    }

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(buffer.pixels())?;
    png_writer.finish()?;

    debug!("Exported PNG {size}x{size} to {}", path.display());
    Ok(path)
}

fn build_metadata_pairs(meta: &ExportMetadata, size: u32) -> Vec<(String, String)> {
    let vp = &meta.viewport;
    vec![
        ("Fractex.Fractal".into(), meta.rule.label().to_string()),
        ("Fractex.OriginX".into(), format!("{:e}", vp.origin_x)),
        ("Fractex.OriginY".into(), format!("{:e}", vp.origin_y)),
        ("Fractex.Width".into(), format!("{:e}", vp.width)),
        ("Fractex.Height".into(), format!("{:e}", vp.height)),
        ("Fractex.MaxIterations".into(), MAX_ITERATIONS.to_string()),
        ("Fractex.Resolution".into(), format!("{size}x{size}")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Surface;

    fn meta() -> ExportMetadata {
        ExportMetadata {
            rule: FractalRule::Mandelbrot,
            viewport: Viewport::default(),
        }
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("fractex_test_{name}"));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir
    }

    #[test]
    fn png_path_normalisation() {
        assert_eq!(png_path(Path::new("out")).unwrap(), PathBuf::from("out.png"));
        assert_eq!(png_path(Path::new("a.png")).unwrap(), PathBuf::from("a.png"));
        assert_eq!(png_path(Path::new("a.PNG")).unwrap(), PathBuf::from("a.PNG"));
        assert!(matches!(
            png_path(Path::new("a.jpg")),
            Err(ExportError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn png_path_trailing_dot_and_dotfile() {
        assert_eq!(png_path(Path::new("foo.")).unwrap(), PathBuf::from("foo.png"));
        assert_eq!(png_path(Path::new("dir/foo.")).unwrap(), PathBuf::from("dir/foo.png"));
        assert_eq!(png_path(Path::new(".png")).unwrap(), PathBuf::from(".png"));
        assert_eq!(png_path(Path::new("dir/.PNG")).unwrap(), PathBuf::from("dir/.PNG"));
    }

    #[test]
    fn export_creates_valid_png() {
        let dir = scratch_dir("export");
        let mut buf = PixelBuffer::new(4).unwrap();
        buf.set_pixel(1, 2, [200, 100, 50]);

        let written = export_png(&buf, &dir.join("image"), &meta()).expect("export should succeed");
        assert_eq!(written, dir.join("image.png"));

        let decoder = png::Decoder::new(File::open(&written).expect("file should exist"));
        let mut reader = decoder.read_info().expect("should read info");
        let mut data = vec![0u8; reader.output_buffer_size()];
        let frame = reader.next_frame(&mut data).expect("should decode");
        assert_eq!((frame.width, frame.height), (4, 4));
        assert_eq!(frame.color_type, png::ColorType::Rgb);
        assert_eq!(&data[..frame.buffer_size()], buf.pixels());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn export_embeds_text_chunks() {
        let dir = scratch_dir("export_meta");
        let buf = PixelBuffer::new(2).unwrap();
        let written = export_png(&buf, &dir.join("meta.png"), &meta()).unwrap();

        let decoder = png::Decoder::new(File::open(&written).expect("file should exist"));
        let reader = decoder.read_info().expect("should read info");
        let texts = &reader.info().uncompressed_latin1_text;
        assert!(texts
            .iter()
            .any(|t| t.keyword == "Software" && t.text == "Fractex"));
        assert!(texts
            .iter()
            .any(|t| t.keyword == "Fractex.Fractal" && t.text == "Mandelbrot"));
        assert!(texts
            .iter()
            .any(|t| t.keyword == "Fractex.Resolution" && t.text == "2x2"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn unwritable_path_is_an_io_error() {
        let dir = scratch_dir("export_missing");
        let target = dir.join("no").join("such").join("dir.png");
        let buf = PixelBuffer::new(2).unwrap();
        let err = export_png(&buf, &target, &meta()).unwrap_err();
        assert!(matches!(err, ExportError::Io { .. }), "got {err}");
        assert!(!target.exists());

        let _ = std::fs::remove_dir_all(&dir);
    }
}
