//! Held-key tracking for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout: a key
//! counts as held until it is released or until no press/repeat for it has been seen
//! for `key_release_timeout_ms`. Time is passed in by the caller.
//!
//! Soft drop is the one key whose hold matters between repeats, so until its first
//! repeat arrives it is kept for the longer `repeat_delay_ms`. Without that, a held
//! Down would drop out in the gap before terminal auto-repeat starts and then come
//! back. The debounced keys keep the short timeout so a tap stays a single action.

use crossterm::event::{KeyEvent, KeyEventKind};

use crate::map::{map_key, Key};
use crate::types::KeyState;

// Terminal auto-repeat typically re-sends a held key every ~30-50ms after an initial
// delay, so a key silent for this long is treated as released.
pub const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Typical terminal auto-repeat delay before the first repeat of a held key.
pub const DEFAULT_REPEAT_DELAY_MS: u32 = 500;

/// Tracks which game keys are held.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    /// Last press/repeat time of each key; `None` when released.
    last_seen_ms: [Option<u64>; Key::ALL.len()],
    /// Whether a repeat has arrived since the key was pressed.
    repeated: [bool; Key::ALL.len()],
    key_release_timeout_ms: u32,
    repeat_delay_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            last_seen_ms: [None; Key::ALL.len()],
            repeated: [false; Key::ALL.len()],
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            repeat_delay_ms: DEFAULT_REPEAT_DELAY_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    pub fn with_repeat_delay_ms(mut self, delay_ms: u32) -> Self {
        self.repeat_delay_ms = delay_ms;
        self
    }

    pub fn repeat_delay_ms(&self) -> u32 {
        self.repeat_delay_ms
    }

    /// Feed one terminal key event. Returns the game key it maps to, if any.
    pub fn handle_key_event(&mut self, event: KeyEvent, now_ms: u64) -> Option<Key> {
        let key = map_key(event.code)?;
        match event.kind {
            KeyEventKind::Press => self.press(key, now_ms),
            KeyEventKind::Repeat => self.repeat(key, now_ms),
            KeyEventKind::Release => self.release(key),
        }
        Some(key)
    }

    pub fn press(&mut self, key: Key, now_ms: u64) {
        self.last_seen_ms[key.index()] = Some(now_ms);
        self.repeated[key.index()] = false;
    }

    /// Record a terminal auto-repeat of `key`.
    pub fn repeat(&mut self, key: Key, now_ms: u64) {
        self.last_seen_ms[key.index()] = Some(now_ms);
        self.repeated[key.index()] = true;
    }

    pub fn release(&mut self, key: Key) {
        self.last_seen_ms[key.index()] = None;
        self.repeated[key.index()] = false;
    }

    pub fn release_all(&mut self) {
        self.last_seen_ms = [None; Key::ALL.len()];
        self.repeated = [false; Key::ALL.len()];
    }

    pub fn is_held(&self, key: Key, now_ms: u64) -> bool {
        self.last_seen_ms[key.index()]
            .is_some_and(|seen| now_ms.saturating_sub(seen) <= u64::from(self.hold_window_ms(key)))
    }

    /// How long `key` stays held after its last press or repeat.
    fn hold_window_ms(&self, key: Key) -> u32 {
        if key == Key::Down && !self.repeated[key.index()] {
            self.key_release_timeout_ms.max(self.repeat_delay_ms)
        } else {
            self.key_release_timeout_ms
        }
    }

    /// Expire stale keys and report the held set for this frame.
    pub fn key_state(&mut self, now_ms: u64) -> KeyState {
        for key in Key::ALL {
            if !self.is_held(key, now_ms) {
                self.release(key);
            }
        }

        KeyState {
            left: self.is_held(Key::Left, now_ms),
            right: self.is_held(Key::Right, now_ms),
            rotate: self.is_held(Key::Rotate, now_ms),
            down: self.is_held(Key::Down, now_ms),
            restart: self.is_held(Key::Restart, now_ms),
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    fn event(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_press_then_release() {
        let mut t = KeyTracker::new();
        assert_eq!(
            t.handle_key_event(event(KeyCode::Left, KeyEventKind::Press), 0),
            Some(Key::Left)
        );
        assert!(t.key_state(10).left);

        t.handle_key_event(event(KeyCode::Left, KeyEventKind::Release), 20);
        assert_eq!(t.key_state(20), KeyState::default());
    }

    #[test]
    fn test_auto_release_after_timeout() {
        let mut t = KeyTracker::new().with_key_release_timeout_ms(100);
        t.handle_key_event(event(KeyCode::Left, KeyEventKind::Press), 1_000);

        assert!(t.key_state(1_100).left);
        assert!(!t.key_state(1_101).left);
        // Stays released once expired.
        assert!(!t.is_held(Key::Left, 1_050));
    }

    #[test]
    fn test_down_held_through_repeat_delay() {
        let mut t = KeyTracker::new();
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Press), 0);

        // No repeat yet: the gap before auto-repeat starts does not release soft drop.
        for now in (0..=500).step_by(16) {
            assert!(t.key_state(now).down, "released at {now}");
        }

        // Once repeats flow, the short timeout applies again.
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Repeat), 500);
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Repeat), 540);
        assert!(t.key_state(690).down);
        assert!(!t.key_state(691).down);
    }

    #[test]
    fn test_down_tap_expires_after_repeat_delay() {
        let mut t = KeyTracker::new();
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Press), 0);
        assert!(t.key_state(500).down);
        assert!(!t.key_state(501).down);

        // A new press waits out the repeat delay again.
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Repeat), 600);
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Press), 700);
        assert!(t.key_state(1_100).down);
    }

    #[test]
    fn test_repeat_delay_only_extends_down() {
        let mut t = KeyTracker::new();
        t.press(Key::Left, 0);
        t.press(Key::Rotate, 0);
        t.press(Key::Down, 0);

        let keys = t.key_state(151);
        assert!(!keys.left && !keys.rotate);
        assert!(keys.down);
    }

    #[test]
    fn test_release_event_ends_soft_drop_immediately() {
        let mut t = KeyTracker::new();
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Press), 0);
        t.handle_key_event(event(KeyCode::Down, KeyEventKind::Release), 30);
        assert!(!t.key_state(30).down);
    }

    #[test]
    fn test_repeat_keeps_key_held() {
        let mut t = KeyTracker::new();
        t.handle_key_event(event(KeyCode::Char('w'), KeyEventKind::Press), 0);
        for now in (40..=400).step_by(40) {
            t.handle_key_event(event(KeyCode::Char('w'), KeyEventKind::Repeat), now);
            assert!(t.key_state(now + 10).rotate);
        }
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let mut t = KeyTracker::new();
        assert_eq!(
            t.handle_key_event(event(KeyCode::Char('x'), KeyEventKind::Press), 0),
            None
        );
        assert_eq!(t.key_state(0), KeyState::default());
    }

    #[test]
    fn test_left_and_right_held_together() {
        let mut t = KeyTracker::new();
        t.press(Key::Left, 0);
        t.press(Key::Right, 5);
        let keys = t.key_state(10);
        assert!(keys.left && keys.right);

        t.release_all();
        assert_eq!(t.key_state(10), KeyState::default());
    }
}
