//! pixhost - Headless frame host with EPX pixel-art upscaling
//!
//! This library provides:
//! - A command-line tokenizer with Windows quoting rules ([`cmdline`])
//! - Packed 32-bit pixel buffers ([`buffer`])
//! - The EPX 2x upscaler and runtime present strategies ([`scale`])
//! - A headless shell that drives a game's init/render/deinit ([`shell`])

pub mod buffer;
pub mod cli;
pub mod cmdline;
pub mod config;
pub mod logging;
pub mod output;
pub mod scale;
pub mod shell;
