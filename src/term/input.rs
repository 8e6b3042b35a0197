//! Keyboard adapter: crossterm key events to the button port bit layout.
//!
//! Terminals do not reliably deliver key releases, so a pressed line stays
//! asserted for a short hold window and then drops, the same trick the
//! hardware debouncer plays in reverse.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::hal::buttons::{
    is_valid_button, ButtonDriver, BUTTON_ACTION, BUTTON_DOWN, BUTTON_LEFT, BUTTON_MASK,
    BUTTON_RIGHT, BUTTON_UP,
};
use crate::types::Status;

/// Ticks a pressed key keeps its line asserted without a repeat event.
const HOLD_TICKS: u8 = 8;

/// Map a key code onto a button line, if any.
pub fn key_to_button(code: KeyCode) -> Option<u8> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(BUTTON_LEFT),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(BUTTON_RIGHT),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(BUTTON_UP),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(BUTTON_DOWN),
        KeyCode::Char(' ') | KeyCode::Enter => Some(BUTTON_ACTION),
        _ => None,
    }
}

/// Quit on q, Escape, or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
        KeyCode::Char('c') | KeyCode::Char('C') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// The five button lines, held alive per-line by a tick countdown.
#[derive(Debug, Clone, Default)]
pub struct TermButtons {
    hold: [u8; 5],
}

impl TermButtons {
    pub fn new() -> Self {
        TermButtons::default()
    }

    /// Assert the button lines set in `mask` for the hold window.
    pub fn press(&mut self, mask: u8) {
        for (line, hold) in self.hold.iter_mut().enumerate() {
            if mask & (0x08 << line) != 0 {
                *hold = HOLD_TICKS;
            }
        }
    }

    /// Advance one tick; lines past their hold window drop.
    pub fn tick(&mut self) {
        for hold in &mut self.hold {
            *hold = hold.saturating_sub(1);
        }
    }
}

impl ButtonDriver for TermButtons {
    fn poll_all(&mut self) -> u8 {
        let mut mask = 0;
        for (line, hold) in self.hold.iter().enumerate() {
            if *hold > 0 {
                mask |= 0x08 << line;
            }
        }
        mask & BUTTON_MASK
    }

    fn poll_one(&mut self, mask: u8) -> Status {
        if !is_valid_button(mask) {
            return Status::INVALID_INPUT;
        }
        Status::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pressed_lines_assert_then_decay() {
        let mut buttons = TermButtons::new();
        buttons.press(BUTTON_LEFT | BUTTON_ACTION);
        assert_eq!(buttons.poll_all(), BUTTON_LEFT | BUTTON_ACTION);

        for _ in 0..HOLD_TICKS {
            buttons.tick();
        }
        assert_eq!(buttons.poll_all(), 0);
    }

    #[test]
    fn poll_one_validates_the_line_mask() {
        let mut buttons = TermButtons::new();
        assert!(buttons.poll_one(BUTTON_UP).is_ok());
        assert_eq!(buttons.poll_one(0x04), Status::INVALID_INPUT);
        assert_eq!(buttons.poll_one(BUTTON_UP | BUTTON_DOWN), Status::INVALID_INPUT);
    }
}
