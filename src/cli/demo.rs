//! CLI dispatch for the `pixhost demo` command.

use std::path::Path;
use std::process::ExitCode;

use clap::ValueEnum;

use crate::config::CliOverrides;
use crate::output::save_png;
use crate::scale::ScaleMode;
use crate::shell::{codes, demo::DemoGame, Shell};

use super::{resolve_config, EXIT_ERROR, EXIT_SUCCESS};

/// Arrow keys that can be held for a demo run
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HeldKey {
    Left,
    Right,
    Up,
    Down,
}

impl HeldKey {
    fn code(self) -> u32 {
        match self {
            HeldKey::Left => codes::LEFT,
            HeldKey::Right => codes::RIGHT,
            HeldKey::Up => codes::UP,
            HeldKey::Down => codes::DOWN,
        }
    }
}

/// Execute the demo command.
pub fn run_demo(
    config_path: Option<&Path>,
    frames: u64,
    output: Option<&Path>,
    mode: Option<ScaleMode>,
    width: Option<u32>,
    height: Option<u32>,
    cmdline: &str,
    hold: &[HeldKey],
) -> ExitCode {
    let overrides = CliOverrides { width, height, mode, ..Default::default() };
    let config = match resolve_config(config_path, &overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let mut shell = Shell::new(DemoGame::new(), config, cmdline);
    shell.start();
    for key in hold {
        shell.key_down(key.code());
    }
    let rendered = shell.run_frames(frames);

    let (w, h) = shell.presented().dimensions();
    let (sw, sh) = shell.screen().dimensions();
    eprintln!("Rendered {} frames ({}x{} presented as {}x{})", rendered, sw, sh, w, h);

    if let Some(path) = output {
        if let Err(e) = save_png(shell.presented(), path) {
            eprintln!("Error: Cannot write '{}': {}", path.display(), e);
            return ExitCode::from(EXIT_ERROR);
        }
        eprintln!("Wrote: {}", path.display());
    }

    shell.shutdown();
    ExitCode::from(EXIT_SUCCESS)
}
