//! PNG input and output for pixel buffers

use crate::buffer::{BufferError, PixelBuffer};
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// Image decoding or encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Decoded image does not fit in a pixel buffer
    #[error("Buffer error: {0}")]
    Buffer(#[from] BufferError),
}

/// Load any image format the `image` crate understands into a pixel buffer.
///
/// Alpha ends up in the padding byte of each pixel.
pub fn load_image(path: &Path) -> Result<PixelBuffer, OutputError> {
    let image = image::open(path)?.to_rgba8();
    Ok(PixelBuffer::from_rgba_image(&image)?)
}

/// Save a pixel buffer to a PNG file.
///
/// Creates missing parent directories.
pub fn save_png(buffer: &PixelBuffer, path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    buffer.to_rgba_image().save(path)?;
    Ok(())
}

/// Default output path for an input image: `{stem}_{suffix}.png` next to it.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use pixhost::output::default_output_path;
///
/// let out = default_output_path(Path::new("sprites/hero.png"), "epx");
/// assert_eq!(out, Path::new("sprites/hero_epx.png"));
/// ```
pub fn default_output_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("output");
    let name = format!("{}_{}.png", stem, suffix);
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.join(name),
        _ => PathBuf::from(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::pack_rgb;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load() {
        let temp = TempDir::new().expect("should create temp dir");
        let path = temp.path().join("nested").join("frame.png");

        let mut buffer = PixelBuffer::new(3, 2);
        buffer.set(1, 1, pack_rgb(10, 20, 30));
        save_png(&buffer, &path).expect("should save png");

        let loaded = load_image(&path).expect("should load png");
        assert_eq!(loaded.dimensions(), (3, 2));
        // Saved as opaque, so the padding byte comes back as 0xFF.
        assert_eq!(loaded.get(1, 1).map(|p| p & 0x00FF_FFFF), Some(pack_rgb(10, 20, 30)));
        assert_eq!(loaded.get(1, 1).map(|p| p >> 24), Some(0xFF));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().expect("should create temp dir");
        let result = load_image(&temp.path().join("missing.png"));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_output_path_without_parent() {
        assert_eq!(default_output_path(Path::new("hero.png"), "x"), PathBuf::from("hero_x.png"));
    }
}
