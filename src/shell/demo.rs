//! Built-in demo game
//!
//! A green crosshair steered with the arrow keys and a box bouncing around
//! the screen. Enough to exercise every part of the shell without any assets.

use super::{codes, FrameContext, Game};
use crate::buffer::pack_rgb;
use crate::cmdline::ArgVector;
use tracing::debug;

pub const BACKGROUND: u32 = pack_rgb(0, 0, 0);
pub const FOREGROUND: u32 = pack_rgb(0, 255, 0);

/// Half the size of the crosshair and the box.
const ARM: i32 = 5;

#[derive(Debug, Clone)]
pub struct DemoGame {
    cross: Option<(i32, i32)>,
    bouncer: Option<(i32, i32)>,
    velocity: (i32, i32),
    frame_limit: Option<u64>,
    frames: u64,
    total_seconds: f64,
}

impl Default for DemoGame {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGame {
    pub fn new() -> Self {
        Self {
            cross: None,
            bouncer: None,
            velocity: (1, 1),
            frame_limit: None,
            frames: 0,
            total_seconds: 0.0,
        }
    }

    /// Stop after `frames` frames have been rendered.
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    /// Pixels the box moves per frame on each axis.
    pub fn with_velocity(mut self, dx: i32, dy: i32) -> Self {
        self.velocity = (dx, dy);
        self
    }

    pub fn cross(&self) -> Option<(i32, i32)> {
        self.cross
    }

    pub fn bouncer(&self) -> Option<(i32, i32)> {
        self.bouncer
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Sum of the elapsed times passed to every render call.
    pub fn total_seconds(&self) -> f64 {
        self.total_seconds
    }
}

impl Game for DemoGame {
    fn init(&mut self, args: &ArgVector) {
        debug!(args = ?args.as_slice(), "demo init");
        self.frames = 0;
        self.total_seconds = 0.0;
    }

    fn render(&mut self, frame: &mut FrameContext<'_>) -> bool {
        let (width, height) = frame.pixels.dimensions();
        let (width, height) = (width as i32, height as i32);
        let center = (width / 2, height / 2);
        let (mut x, mut y) = self.cross.unwrap_or(center);
        let (mut bx, mut by) = self.bouncer.unwrap_or(center);

        let pixels = &mut *frame.pixels;
        pixels.fill(BACKGROUND);
        pixels.hline(x - ARM, x + ARM, y, FOREGROUND);
        pixels.vline(x, y - ARM, y + ARM, FOREGROUND);
        pixels.rect(bx - ARM, by - ARM, bx + ARM, by + ARM, FOREGROUND);

        let keys = frame.keys;
        if keys.is_down(codes::RIGHT) {
            x += 1;
        }
        if keys.is_down(codes::LEFT) {
            x -= 1;
        }
        if keys.is_down(codes::DOWN) {
            y += 1;
        }
        if keys.is_down(codes::UP) {
            y -= 1;
        }

        bx += self.velocity.0;
        if bx < 0 || bx > width {
            self.velocity.0 = -self.velocity.0;
        }
        by += self.velocity.1;
        if by < 0 || by > height {
            self.velocity.1 = -self.velocity.1;
        }

        self.cross = Some((x, y));
        self.bouncer = Some((bx, by));
        self.frames += 1;
        self.total_seconds += frame.elapsed_seconds;

        self.frame_limit.map_or(true, |limit| self.frames < limit)
    }

    fn deinit(&mut self) {
        debug!(frames = self.frames, seconds = self.total_seconds, "demo deinit");
    }
}
