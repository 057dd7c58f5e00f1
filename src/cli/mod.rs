//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod args;
mod demo;
mod upscale;

// Re-export subcommand types used in Commands enum
pub use demo::HeldKey;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::config::{self, CliOverrides, ShellConfig};
use crate::scale::ScaleMode;

pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;
pub(crate) const EXIT_INVALID_ARGS: u8 = 2;

/// pixhost - headless frame host with EPX upscaling
#[derive(Parser)]
#[command(name = "pixhost")]
#[command(about = "pixhost - EPX pixel-art upscaling, command-line tokenizing and a headless frame host")]
#[command(version)]
pub struct Cli {
    /// Show debug diagnostics on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to pixhost.toml (default: search upward from the current directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a raw command line into arguments using Windows quoting rules
    Args {
        /// The raw command line, passed as a single argument
        #[arg(allow_hyphen_values = true)]
        line: String,

        /// Maximum number of arguments to keep (default: args.max from config)
        #[arg(long)]
        max: Option<usize>,

        /// Print the arguments as a JSON array instead of one per line
        #[arg(long)]
        json: bool,
    },
    /// Upscale an image with the selected present mode
    Upscale {
        /// Input image (PNG or any format the image crate reads)
        input: PathBuf,

        /// Output PNG (default: {input}_{mode}.png)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Present mode (default: present.mode from config)
        #[arg(long, value_enum)]
        mode: Option<ScaleMode>,

        /// Number of worker threads for the EPX filter (implies parallel)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Run the filter on the calling thread only
        #[arg(long)]
        sequential: bool,

        /// Ignore alpha when comparing pixels
        #[arg(long)]
        opaque: bool,
    },
    /// Drive the built-in demo through the shell and save the last frame
    Demo {
        /// Number of frames to render
        #[arg(long, default_value = "60")]
        frames: u64,

        /// Save the presented frame to this PNG
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Present mode (default: present.mode from config)
        #[arg(long, value_enum)]
        mode: Option<ScaleMode>,

        /// Source buffer width (default: screen.width from config)
        #[arg(long)]
        width: Option<u32>,

        /// Source buffer height (default: screen.height from config)
        #[arg(long)]
        height: Option<u32>,

        /// Raw command line handed to the demo's init
        #[arg(long, default_value = "pixhost-demo", allow_hyphen_values = true)]
        cmdline: String,

        /// Keys held down for the whole run (left, right, up, down)
        #[arg(long = "hold", value_enum)]
        hold: Vec<HeldKey>,
    },
}

/// Load the config file and apply command-line overrides, printing any error.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<ShellConfig, ExitCode> {
    let loaded = match config::load_config(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Err(ExitCode::from(EXIT_ERROR));
        }
    };

    config::apply_overrides(loaded, overrides).map_err(|e| {
        eprintln!("Error: {}", e);
        ExitCode::from(EXIT_INVALID_ARGS)
    })
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    crate::logging::init(cli.verbose);
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Args { line, max, json } => args::run_args(config_path, &line, max, json),
        Commands::Upscale { input, output, mode, jobs, sequential, opaque } => {
            upscale::run_upscale(
                config_path,
                &input,
                output.as_deref(),
                mode,
                jobs,
                sequential,
                opaque,
            )
        }
        Commands::Demo { frames, output, mode, width, height, cmdline, hold } => demo::run_demo(
            config_path,
            frames,
            output.as_deref(),
            mode,
            width,
            height,
            &cmdline,
            &hold,
        ),
    }
}
