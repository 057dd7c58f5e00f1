//! Headless host shell
//!
//! The shell owns everything a game needs between frames: the off-screen
//! source buffer, the upscaled present buffer, the keyboard table and the
//! argument vector. A game plugs in through the [`Game`] trait and receives
//! that state explicitly through a [`FrameContext`] on every tick.
//!
//! Opening a window and blitting [`Shell::presented`] to it is left to the
//! embedding host; this module only drives the frame lifecycle:
//!
//! 1. [`Shell::start`] clears the key table and calls [`Game::init`]
//! 2. each [`Shell::tick`] calls [`Game::render`] and then presents
//! 3. [`Shell::shutdown`] (or a `false` from render, Escape, or a right
//!    button release) calls
//!    [`Game::deinit`] exactly once
//!
//! # Example
//!
//! ```
//! use pixhost::config::ShellConfig;
//! use pixhost::shell::{demo::DemoGame, Shell};
//!
//! let config = ShellConfig::default();
//! let mut shell = Shell::new(DemoGame::new(), config, "demo.exe --fast");
//! shell.start();
//! assert!(shell.tick_with(1.0 / 30.0));
//! assert_eq!(shell.presented().dimensions(), (640, 480));
//! shell.shutdown();
//! ```

pub mod demo;
pub mod keys;

pub use keys::{codes, KeyState};

use crate::buffer::PixelBuffer;
use crate::cmdline::ArgVector;
use crate::config::ShellConfig;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Everything a render call may read or draw into for one frame.
pub struct FrameContext<'a> {
    /// The source buffer, drawn at screen resolution
    pub pixels: &'a mut PixelBuffer,
    /// Keys held down at the start of this frame
    pub keys: &'a KeyState,
    /// Seconds since the previous frame was presented
    pub elapsed_seconds: f64,
}

/// The renderer the shell drives.
pub trait Game {
    /// Called once before the first frame.
    fn init(&mut self, _args: &ArgVector) {}

    /// Draw one frame. Returning `false` stops the shell.
    fn render(&mut self, frame: &mut FrameContext<'_>) -> bool;

    /// Called once when the shell stops.
    fn deinit(&mut self) {}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Created,
    Running,
    Stopped,
}

pub struct Shell<G: Game> {
    game: G,
    config: ShellConfig,
    args: ArgVector,
    screen: PixelBuffer,
    scaled: Option<PixelBuffer>,
    /// Padding-cleared copy of `screen`, only kept in opaque mode
    staged: Option<PixelBuffer>,
    keys: KeyState,
    last_present: Instant,
    phase: Phase,
    frames: u64,
}

impl<G: Game> Shell<G> {
    /// Create a shell for `game`, tokenizing `command_line` into the
    /// argument vector handed to [`Game::init`].
    pub fn new(game: G, config: ShellConfig, command_line: &str) -> Self {
        let args = ArgVector::parse(command_line, config.args.max);
        let (width, height) = (config.screen.width, config.screen.height);
        let mode = config.present.mode;

        let scaled = mode.needs_destination().then(|| {
            let (w, h) = mode.present_size(width, height);
            PixelBuffer::new(w, h)
        });

        let staged = config.present.opaque.then(|| PixelBuffer::new(width, height));

        debug!(width, height, %mode, args = args.len(), "shell created");

        Self {
            game,
            config,
            args,
            screen: PixelBuffer::new(width, height),
            scaled,
            staged,
            keys: KeyState::new(),
            last_present: Instant::now(),
            phase: Phase::Created,
            frames: 0,
        }
    }

    /// Initialize the game. Does nothing if the shell was already started.
    pub fn start(&mut self) {
        if self.phase != Phase::Created {
            return;
        }
        self.keys.clear();
        self.game.init(&self.args);
        self.last_present = Instant::now();
        self.phase = Phase::Running;
        info!(title = %self.config.screen.title, args = ?self.args.as_slice(), "shell started");
    }

    /// Render and present one frame, timing it against the last present.
    pub fn tick(&mut self) -> bool {
        let elapsed = self.last_present.elapsed().as_secs_f64();
        self.tick_with(elapsed)
    }

    /// Render and present one frame with an explicit elapsed time.
    ///
    /// Returns whether the shell is still running afterwards.
    pub fn tick_with(&mut self, elapsed_seconds: f64) -> bool {
        if self.phase != Phase::Running {
            return false;
        }

        let mut frame =
            FrameContext { pixels: &mut self.screen, keys: &self.keys, elapsed_seconds };
        let keep_running = self.game.render(&mut frame);
        self.frames += 1;

        if !keep_running {
            debug!(frame = self.frames, "render requested stop");
            self.shutdown();
            return false;
        }

        self.present();
        true
    }

    /// Run `frames` ticks at the configured frame interval without sleeping.
    ///
    /// Stops early if the game does. Returns the number of frames rendered.
    pub fn run_frames(&mut self, frames: u64) -> u64 {
        self.start();
        let step = self.frame_interval().as_secs_f64();
        let before = self.frames;
        for _ in 0..frames {
            if !self.tick_with(step) {
                break;
            }
        }
        self.frames - before
    }

    /// Produce the present buffer from the source buffer.
    ///
    /// The source buffer is only read; opaque mode clears padding on the
    /// staged copy.
    fn present(&mut self) {
        let present = &self.config.present;
        let source = match self.staged.as_mut() {
            Some(staged) => {
                staged.as_mut_slice().copy_from_slice(self.screen.as_slice());
                staged.clear_padding();
                &*staged
            }
            None => &self.screen,
        };
        present.mode.present(source, self.scaled.as_mut(), present.parallel);
        self.last_present = Instant::now();
    }

    pub fn key_down(&mut self, code: u32) {
        self.keys.press(code);
        if code == codes::ESCAPE {
            self.request_quit();
        }
    }

    pub fn key_up(&mut self, code: u32) {
        self.keys.release(code);
    }

    /// A mouse button was released. The right button quits.
    pub fn mouse_up(&mut self, button: MouseButton) {
        if button == MouseButton::Right {
            self.request_quit();
        }
    }

    /// Quit input only counts once the game is running.
    fn request_quit(&mut self) {
        if self.phase == Phase::Running {
            self.shutdown();
        }
    }

    /// Stop the shell, calling [`Game::deinit`] if the game was initialized.
    pub fn shutdown(&mut self) {
        if self.phase == Phase::Running {
            self.game.deinit();
            info!(frames = self.frames, "shell stopped");
        }
        self.phase = Phase::Stopped;
    }

    pub fn is_running(&self) -> bool {
        self.phase == Phase::Running
    }

    /// The buffer a host would show: the upscaled buffer when the present
    /// mode scales, otherwise the (padding-cleared, if opaque) source.
    pub fn presented(&self) -> &PixelBuffer {
        self.scaled.as_ref().or(self.staged.as_ref()).unwrap_or(&self.screen)
    }

    /// The source buffer at screen resolution.
    pub fn screen(&self) -> &PixelBuffer {
        &self.screen
    }

    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    pub fn args(&self) -> &ArgVector {
        &self.args
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    pub fn frame_count(&self) -> u64 {
        self.frames
    }

    pub fn frame_interval(&self) -> Duration {
        self.config.frame_interval()
    }
}

impl<G: Game> Drop for Shell<G> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
