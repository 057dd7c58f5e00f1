//! Integration tests for the EPX filter
//!
//! Checks the filter's structural guarantees on generated images:
//! - every output pixel comes from the source pixel's neighborhood
//! - uniform images stay uniform
//! - the destination is clipped, never resized
//! - the parallel filter matches the sequential one

use pixhost::buffer::{pack_rgb, PixelBuffer};
use pixhost::scale::{epx, epx_parallel, epx_region, upscale, ScaleMode};

// ============================================================================
// Test Utilities
// ============================================================================

/// Deterministic generator for test images with a small palette, so that
/// neighbor equality (and therefore EPX corner rules) actually triggers.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) as u32
    }
}

fn noise_image(width: u32, height: u32, colors: u32, seed: u64) -> PixelBuffer {
    let palette: Vec<u32> =
        (0..colors).map(|i| pack_rgb((i * 40) as u8, (255 - i * 30) as u8, (i * 7) as u8)).collect();
    let mut rng = Lcg(seed);
    let pixels =
        (0..width * height).map(|_| palette[(rng.next() % colors) as usize]).collect::<Vec<_>>();
    PixelBuffer::from_pixels(width, height, pixels).unwrap()
}

/// Source pixel and its four clamped neighbors.
fn neighborhood(src: &PixelBuffer, x: u32, y: u32) -> [u32; 5] {
    let p = src.get(x, y).unwrap();
    let at = |dx: i64, dy: i64| {
        let nx = x as i64 + dx;
        let ny = y as i64 + dy;
        if nx < 0 || ny < 0 {
            return p;
        }
        src.get(nx as u32, ny as u32).unwrap_or(p)
    };
    [p, at(0, -1), at(1, 0), at(-1, 0), at(0, 1)]
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_output_colors_come_from_neighborhood() {
    for (seed, (w, h)) in [(1, (7, 5)), (2, (1, 9)), (3, (12, 1)), (4, (16, 16))] {
        let src = noise_image(w, h, 3, seed);
        let out = upscale(&src);
        assert_eq!(out.dimensions(), (w * 2, h * 2));

        for y in 0..h {
            for x in 0..w {
                let allowed = neighborhood(&src, x, y);
                for (ox, oy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                    let got = out.get(x * 2 + ox, y * 2 + oy).unwrap();
                    assert!(
                        allowed.contains(&got),
                        "seed {} pixel ({}, {}) sub ({}, {}) produced a foreign color",
                        seed,
                        x,
                        y,
                        ox,
                        oy
                    );
                }
            }
        }
    }
}

#[test]
fn test_noise_actually_smooths_something() {
    // Guards the property test above against a filter that only copies P.
    let src = noise_image(16, 16, 2, 9);
    let out = upscale(&src);
    let mut changed = 0;
    for y in 0..16 {
        for x in 0..16 {
            let p = src.get(x, y).unwrap();
            for (ox, oy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
                if out.get(x * 2 + ox, y * 2 + oy) != Some(p) {
                    changed += 1;
                }
            }
        }
    }
    assert!(changed > 0);
}

#[test]
fn test_uniform_source_gives_uniform_destination() {
    let color = pack_rgb(12, 34, 56);
    let src = PixelBuffer::filled(9, 7, color);
    let mut dst = PixelBuffer::new(18, 14);
    epx(&src, &mut dst);
    assert!(dst.as_slice().iter().all(|&p| p == color));
}

#[test]
fn test_single_pixel_expands_to_four_copies() {
    let color = pack_rgb(200, 100, 50);
    let src = PixelBuffer::filled(1, 1, color);
    let out = upscale(&src);
    assert_eq!(out.as_slice(), &[color; 4]);
}

#[test]
fn test_small_destination_is_clipped() {
    const UNTOUCHED: u32 = 0x1234_5678;
    let src = noise_image(4, 4, 3, 5);
    let mut dst = PixelBuffer::filled(3, 3, UNTOUCHED);

    let (mx, my) = epx_region(&src, &dst);
    assert!(2 * mx <= dst.width() && 2 * my <= dst.height());
    assert_eq!((mx, my), (1, 1));

    epx(&src, &mut dst);
    assert_eq!(dst.dimensions(), (3, 3));
    for i in 0..3 {
        assert_eq!(dst.get(2, i), Some(UNTOUCHED));
        assert_eq!(dst.get(i, 2), Some(UNTOUCHED));
    }

    // The written block matches what a full-size run produces there.
    let full = upscale(&src);
    for y in 0..2 {
        for x in 0..2 {
            assert_eq!(dst.get(x, y), full.get(x, y));
        }
    }
}

#[test]
fn test_larger_destination_leaves_margin() {
    const UNTOUCHED: u32 = 0x0ABC_DEF0;
    let src = noise_image(3, 2, 4, 6);
    let mut dst = PixelBuffer::filled(10, 10, UNTOUCHED);
    epx_parallel(&src, &mut dst);

    let full = upscale(&src);
    for y in 0..10 {
        for x in 0..10 {
            let expected = if x < 6 && y < 4 { full.get(x, y).unwrap() } else { UNTOUCHED };
            assert_eq!(dst.get(x, y), Some(expected));
        }
    }
}

#[test]
fn test_parallel_matches_sequential() {
    for (seed, (w, h)) in [(11, (64, 48)), (12, (33, 17)), (13, (1, 1)), (14, (5, 100))] {
        let src = noise_image(w, h, 3, seed);
        let mut seq = PixelBuffer::new(w * 2, h * 2);
        let mut par = PixelBuffer::new(w * 2, h * 2);
        epx(&src, &mut seq);
        epx_parallel(&src, &mut par);
        assert_eq!(seq, par, "seed {}", seed);
    }
}

#[test]
fn test_parallel_on_custom_pool() {
    let src = noise_image(40, 30, 3, 21);
    let expected = upscale(&src);

    let pool = rayon::ThreadPoolBuilder::new().num_threads(3).build().unwrap();
    let mut dst = PixelBuffer::new(80, 60);
    pool.install(|| ScaleMode::Epx.present(&src, Some(&mut dst), true));
    assert_eq!(dst, expected);
}

#[test]
fn test_identity_mode_preserves_pixels() {
    let src = noise_image(6, 4, 5, 31);
    let mut dst = PixelBuffer::new(6, 4);
    ScaleMode::Identity.present(&src, Some(&mut dst), true);
    assert_eq!(dst, src);
}
