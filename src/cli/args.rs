//! CLI dispatch for the `pixhost args` command.

use std::path::Path;
use std::process::ExitCode;

use crate::cmdline::ArgVector;
use crate::config::CliOverrides;

use super::{resolve_config, EXIT_ERROR, EXIT_SUCCESS};

/// Execute the args command.
pub fn run_args(config_path: Option<&Path>, line: &str, max: Option<usize>, json: bool) -> ExitCode {
    let overrides = CliOverrides { max_args: max, ..Default::default() };
    let config = match resolve_config(config_path, &overrides) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let args = ArgVector::parse(line, config.args.max);
    tracing::debug!(count = args.len(), max = config.args.max, "tokenized command line");

    if json {
        match serde_json::to_string(&args) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    } else {
        for arg in args.iter() {
            println!("{}", arg);
        }
    }

    ExitCode::from(EXIT_SUCCESS)
}
