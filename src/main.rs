//! pixhost - Command-line tool for EPX upscaling and headless frame hosting

use std::process::ExitCode;

use pixhost::cli;

fn main() -> ExitCode {
    cli::run()
}
