//! Terminal frontend: a host-side stand-in for the real panel hardware.
//!
//! [`Panel`] is a pure in-memory pixel store implementing the display
//! collaborator trait, usable in tests without a terminal. [`Screen`]
//! flushes a panel to a real terminal with crossterm, and the input/audio
//! adapters stand in for the button port and the PWM tone generator.

pub mod audio;
pub mod input;
pub mod panel;
pub mod screen;

pub use audio::SilentAudio;
pub use input::{key_to_button, should_quit, TermButtons};
pub use panel::Panel;
pub use screen::Screen;
