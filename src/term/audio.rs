//! Audio adapter: a silent tone generator for terminal play.
//!
//! Keeps the driver-side tone bank and records what would be playing, so
//! game code and tests exercise the full audio path without a PWM.

use crate::hal::audio::{AudioDriver, NOTES, TONE_INDEX_MASK};
use crate::types::Status;

#[derive(Debug, Clone)]
pub struct SilentAudio {
    bank: [u8; 32],
    playing: Option<u8>,
}

impl SilentAudio {
    pub fn new(bank: [u8; 32]) -> Self {
        SilentAudio {
            bank,
            playing: None,
        }
    }

    /// Tone index currently "playing", if any.
    pub fn playing(&self) -> Option<u8> {
        self.playing
    }

    /// Bank period value for the playing tone.
    pub fn period(&self) -> Option<u8> {
        self.playing.map(|tone| self.bank[tone as usize])
    }
}

impl Default for SilentAudio {
    fn default() -> Self {
        SilentAudio::new(NOTES)
    }
}

impl AudioDriver for SilentAudio {
    fn play_tone(&mut self, tone: u8) -> Status {
        self.playing = Some(tone & TONE_INDEX_MASK);
        Status::OK
    }

    fn silence(&mut self) -> Status {
        self.playing = None;
        Status::OK
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tone_byte_length_bits_are_ignored() {
        let mut audio = SilentAudio::default();
        // Length hint in bits [7:5], tone 25 (deep buzz) in bits [4:0].
        assert!(audio.play_tone(0b101_11001).is_ok());
        assert_eq!(audio.playing(), Some(25));
        assert_eq!(audio.period(), Some(0xFF));

        assert!(audio.silence().is_ok());
        assert_eq!(audio.playing(), None);
    }
}
