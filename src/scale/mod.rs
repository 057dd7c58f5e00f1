//! Present strategies
//!
//! Turning the rendered source buffer into the buffer that is shown is a
//! runtime choice between a straight copy and EPX upscaling.
//!
//! # Module Structure
//!
//! - [`epx`] - EPX 2x edge-preserving upscaler, sequential and row-parallel

pub mod epx;

pub use epx::{epx, epx_block, epx_parallel, epx_region, upscale};

use crate::buffer::PixelBuffer;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the source buffer is presented.
///
/// | Mode | Scale | Notes |
/// |------|-------|-------|
/// | `identity` | 1x | Copies the overlapping region |
/// | `epx` | 2x | Edge-preserving pixel expansion |
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ScaleMode {
    /// Present the source as-is
    Identity,
    /// EPX 2x upscaling (default)
    #[default]
    Epx,
}

impl ScaleMode {
    /// Returns the scale factor produced by this mode.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixhost::scale::ScaleMode;
    ///
    /// assert_eq!(ScaleMode::Identity.scale_factor(), 1);
    /// assert_eq!(ScaleMode::Epx.scale_factor(), 2);
    /// ```
    pub fn scale_factor(&self) -> u32 {
        match self {
            ScaleMode::Identity => 1,
            ScaleMode::Epx => 2,
        }
    }

    /// Destination size for a source of `width` x `height`.
    pub fn present_size(&self, width: u32, height: u32) -> (u32, u32) {
        let factor = self.scale_factor();
        (width * factor, height * factor)
    }

    /// Returns true when presenting needs a separate destination buffer.
    pub fn needs_destination(&self) -> bool {
        self.scale_factor() != 1
    }

    /// Present `src` into `dst`.
    ///
    /// A missing destination does nothing. The destination is never resized;
    /// whatever part of the output does not fit is dropped.
    pub fn present(&self, src: &PixelBuffer, dst: Option<&mut PixelBuffer>, parallel: bool) {
        let Some(dst) = dst else {
            return;
        };

        tracing::trace!(
            mode = %self,
            src_width = src.width(),
            src_height = src.height(),
            dst_width = dst.width(),
            dst_height = dst.height(),
            "present"
        );

        match self {
            ScaleMode::Identity => copy_region(src, dst),
            ScaleMode::Epx if parallel => epx_parallel(src, dst),
            ScaleMode::Epx => epx(src, dst),
        }
    }
}

impl std::fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScaleMode::Identity => write!(f, "identity"),
            ScaleMode::Epx => write!(f, "epx"),
        }
    }
}

/// Copy the region both buffers share, row by row.
fn copy_region(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let width = src.width().min(dst.width()) as usize;
    let height = src.height().min(dst.height());
    if width == 0 {
        return;
    }

    let stride = dst.width() as usize;
    for y in 0..height {
        let start = y as usize * stride;
        dst.as_mut_slice()[start..start + width].copy_from_slice(&src.row(y)[..width]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::pack_rgb;

    const SENTINEL: u32 = 0xDEAD_BEEF;

    #[test]
    fn test_default_is_epx() {
        assert_eq!(ScaleMode::default(), ScaleMode::Epx);
    }

    #[test]
    fn test_present_size() {
        assert_eq!(ScaleMode::Epx.present_size(320, 240), (640, 480));
        assert_eq!(ScaleMode::Identity.present_size(320, 240), (320, 240));
        assert!(!ScaleMode::Identity.needs_destination());
        assert!(ScaleMode::Epx.needs_destination());
    }

    #[test]
    fn test_display_matches_serde() {
        for mode in [ScaleMode::Identity, ScaleMode::Epx] {
            let json = serde_json::to_string(&mode).unwrap();
            assert_eq!(json, format!("\"{}\"", mode));
        }
    }

    #[test]
    fn test_missing_destination_is_noop() {
        let src = PixelBuffer::filled(2, 2, 1);
        ScaleMode::Epx.present(&src, None, true);
        ScaleMode::Identity.present(&src, None, false);
    }

    #[test]
    fn test_identity_copies_overlap_only() {
        let src = PixelBuffer::from_pixels(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let mut dst = PixelBuffer::filled(2, 3, SENTINEL);
        ScaleMode::Identity.present(&src, Some(&mut dst), false);
        assert_eq!(dst.as_slice(), &[1, 2, 4, 5, SENTINEL, SENTINEL]);
    }

    #[test]
    fn test_epx_present_parallel_matches_sequential() {
        let red = pack_rgb(255, 0, 0);
        let mut src = PixelBuffer::new(5, 4);
        src.fill_rect(1, 1, 3, 2, red);

        let mut seq = PixelBuffer::new(10, 8);
        let mut par = PixelBuffer::new(10, 8);
        ScaleMode::Epx.present(&src, Some(&mut seq), false);
        ScaleMode::Epx.present(&src, Some(&mut par), true);
        assert_eq!(seq, par);
    }
}
