//! EPX (Eric's Pixel Expansion) 2x upscaling.
//!
//! EPX doubles a pixel-art image while keeping hard edges hard and turning
//! staircase diagonals into smoother steps. Each source pixel P becomes a 2x2
//! block, and each corner of the block may take the color of a neighbor when
//! the two neighbors meeting at that corner agree.
//!
//! # Algorithm
//!
//! For each source pixel P with neighbors:
//! ```text
//!     A
//!   C P B
//!     D
//! ```
//!
//! The output 2x2 block is:
//! ```text
//!   1 2
//!   4 3
//! ```
//!
//! - 1 = (C == A && C != D && A != B) ? A : P
//! - 2 = (A == B && A != C && B != D) ? B : P
//! - 3 = (B == D && B != A && D != C) ? D : P
//! - 4 = (D == C && D != B && C != A) ? C : P
//!
//! Neighbors outside the source are replaced by P. Pixels are compared as
//! whole packed values, padding byte included.
//!
//! # Destination clipping
//!
//! The destination is never resized. When it is smaller than twice the source,
//! only the source region whose blocks fit completely is processed and the
//! remaining destination pixels are left untouched.
//!
//! # Example
//!
//! ```
//! use pixhost::buffer::{pack_rgb, PixelBuffer};
//! use pixhost::scale::epx::upscale;
//!
//! let src = PixelBuffer::filled(16, 16, pack_rgb(0, 128, 0));
//! let out = upscale(&src);
//! assert_eq!(out.dimensions(), (32, 32));
//! ```

use crate::buffer::PixelBuffer;
use rayon::prelude::*;

/// Compute the 2x2 output block for one source pixel.
///
/// `a`, `b`, `c` and `d` are the neighbors above, right, left and below.
/// Returns `[top_left, top_right, bottom_left, bottom_right]`.
pub fn epx_block(p: u32, a: u32, b: u32, c: u32, d: u32) -> [u32; 4] {
    let top_left = if c == a && c != d && a != b { a } else { p };
    let top_right = if a == b && a != c && b != d { b } else { p };
    let bottom_right = if b == d && b != a && d != c { d } else { p };
    let bottom_left = if d == c && d != b && c != a { c } else { p };
    [top_left, top_right, bottom_left, bottom_right]
}

/// The source region `(mx, my)` whose output blocks fit in `dst`.
///
/// Always satisfies `2 * mx <= dst.width()` and `2 * my <= dst.height()`.
pub fn epx_region(src: &PixelBuffer, dst: &PixelBuffer) -> (u32, u32) {
    (src.width().min(dst.width() / 2), src.height().min(dst.height() / 2))
}

/// Upscale `src` into `dst` on the calling thread.
pub fn epx(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let (mx, my) = epx_region(src, dst);
    if mx == 0 || my == 0 {
        return;
    }

    let stride = dst.width() as usize;
    for (y, rows) in dst.as_mut_slice().chunks_mut(stride * 2).take(my as usize).enumerate() {
        epx_row(src, y as u32, mx, rows, stride);
    }
}

/// Upscale `src` into `dst`, spreading rows of output blocks over the rayon
/// thread pool. Produces exactly the same pixels as [`epx`].
pub fn epx_parallel(src: &PixelBuffer, dst: &mut PixelBuffer) {
    let (mx, my) = epx_region(src, dst);
    if mx == 0 || my == 0 {
        return;
    }

    let stride = dst.width() as usize;
    dst.as_mut_slice()
        .par_chunks_mut(stride * 2)
        .take(my as usize)
        .enumerate()
        .for_each(|(y, rows)| epx_row(src, y as u32, mx, rows, stride));
}

/// Allocate a 2W x 2H buffer and fill it from `src`.
pub fn upscale(src: &PixelBuffer) -> PixelBuffer {
    let mut out = PixelBuffer::new(src.width() * 2, src.height() * 2);
    epx_parallel(src, &mut out);
    out
}

/// Write the output blocks for source row `y`, columns `0..mx`.
///
/// `rows` is the pair of destination rows `2y` and `2y + 1`.
fn epx_row(src: &PixelBuffer, y: u32, mx: u32, rows: &mut [u32], stride: usize) {
    let (top, bottom) = rows.split_at_mut(stride);
    let width = src.width() as usize;

    let current = src.row(y);
    let above = if y > 0 { src.row(y - 1) } else { current };
    let below = if y + 1 < src.height() { src.row(y + 1) } else { current };

    for x in 0..mx as usize {
        let p = current[x];
        let a = above[x];
        let b = if x + 1 < width { current[x + 1] } else { p };
        let c = if x > 0 { current[x - 1] } else { p };
        let d = below[x];

        let [tl, tr, bl, br] = epx_block(p, a, b, c, d);
        top[2 * x] = tl;
        top[2 * x + 1] = tr;
        bottom[2 * x] = bl;
        bottom[2 * x + 1] = br;
    }
}
