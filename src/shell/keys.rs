//! Keyboard state table
//!
//! Holds the up/down state of the 256 virtual key codes. Codes outside that
//! range are ignored.

/// Number of virtual key codes tracked.
pub const MAX_KEYS: usize = 256;

/// Virtual key codes
pub mod codes {
    pub const ESCAPE: u32 = 0x1B;
    pub const SPACE: u32 = 0x20;
    pub const LEFT: u32 = 0x25;
    pub const UP: u32 = 0x26;
    pub const RIGHT: u32 = 0x27;
    pub const DOWN: u32 = 0x28;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyState {
    down: [bool; MAX_KEYS],
}

impl Default for KeyState {
    fn default() -> Self {
        Self { down: [false; MAX_KEYS] }
    }
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, code: u32) {
        if let Some(slot) = self.down.get_mut(code as usize) {
            *slot = true;
        }
    }

    pub fn release(&mut self, code: u32) {
        if let Some(slot) = self.down.get_mut(code as usize) {
            *slot = false;
        }
    }

    pub fn is_down(&self, code: u32) -> bool {
        self.down.get(code as usize).copied().unwrap_or(false)
    }

    /// Release every key.
    pub fn clear(&mut self) {
        self.down = [false; MAX_KEYS];
    }

    /// Number of keys currently held.
    pub fn held(&self) -> usize {
        self.down.iter().filter(|&&d| d).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_release() {
        let mut keys = KeyState::new();
        keys.press(codes::LEFT);
        assert!(keys.is_down(codes::LEFT));
        assert!(!keys.is_down(codes::RIGHT));
        keys.release(codes::LEFT);
        assert!(!keys.is_down(codes::LEFT));
    }

    #[test]
    fn test_out_of_range_ignored() {
        let mut keys = KeyState::new();
        keys.press(256);
        keys.press(u32::MAX);
        assert_eq!(keys.held(), 0);
        assert!(!keys.is_down(300));
    }

    #[test]
    fn test_clear() {
        let mut keys = KeyState::new();
        keys.press(codes::UP);
        keys.press(codes::SPACE);
        assert_eq!(keys.held(), 2);
        keys.clear();
        assert_eq!(keys.held(), 0);
    }
}
