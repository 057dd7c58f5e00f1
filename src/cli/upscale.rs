//! CLI dispatch for the `pixhost upscale` command.
//!
//! Loads an image into a pixel buffer, presents it with the selected mode
//! into a freshly sized destination, and saves the result as PNG.

use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use crate::buffer::PixelBuffer;
use crate::config::CliOverrides;
use crate::output::{default_output_path, load_image, save_png};
use crate::scale::ScaleMode;

use super::{resolve_config, EXIT_ERROR, EXIT_INVALID_ARGS, EXIT_SUCCESS};

/// `--jobs` implies parallel filtering, overriding `present.parallel`.
fn upscale_overrides(
    mode: Option<ScaleMode>,
    jobs: Option<usize>,
    sequential: bool,
    opaque: bool,
) -> CliOverrides {
    let parallel = if sequential {
        Some(false)
    } else {
        jobs.map(|_| true)
    };
    CliOverrides { mode, parallel, opaque: opaque.then_some(true), ..Default::default() }
}

/// Execute the upscale command.
pub fn run_upscale(
    config_path: Option<&Path>,
    input: &Path,
    output: Option<&Path>,
    mode: Option<ScaleMode>,
    jobs: Option<usize>,
    sequential: bool,
    opaque: bool,
) -> ExitCode {
    if jobs == Some(0) {
        eprintln!("Error: --jobs must be at least 1");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }
    if sequential && jobs.is_some() {
        eprintln!("Error: --jobs cannot be combined with --sequential");
        return ExitCode::from(EXIT_INVALID_ARGS);
    }

    let overrides = upscale_overrides(mode, jobs, sequential, opaque);
    let config = match resolve_config(config_path, &overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };
    let present = &config.present;

    let mut src = match load_image(input) {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Error: Cannot read '{}': {}", input.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
    };
    if present.opaque {
        src.clear_padding();
    }

    let (width, height) = present.mode.present_size(src.width(), src.height());
    let mut dst = PixelBuffer::new(width, height);

    let start = Instant::now();
    match jobs {
        Some(n) => {
            let pool = match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(p) => p,
                Err(e) => {
                    eprintln!("Error: Cannot start {} worker threads: {}", n, e);
                    return ExitCode::from(EXIT_ERROR);
                }
            };
            pool.install(|| present.mode.present(&src, Some(&mut dst), true));
        }
        _ => present.mode.present(&src, Some(&mut dst), present.parallel),
    }
    tracing::debug!(
        mode = %present.mode,
        width = src.width(),
        height = src.height(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "upscaled"
    );

    let target = match output {
        Some(p) => p.to_path_buf(),
        None => default_output_path(input, &present.mode.to_string()),
    };
    if let Err(e) = save_png(&dst, &target) {
        eprintln!("Error: Cannot write '{}': {}", target.display(), e);
        return ExitCode::from(EXIT_ERROR);
    }

    eprintln!("Wrote: {} ({}x{})", target.display(), width, height);
    ExitCode::from(EXIT_SUCCESS)
}
