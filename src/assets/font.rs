//! The built-in font: 24-bit glyph bitmaps on a 5x5 logical-pixel cell.
//!
//! Letters are looked up case-insensitively; digits resolve from either
//! their ASCII code or their raw value 0-9. Anything unknown renders as a
//! space rather than failing, so text paths never stall on bad input.

use crate::hal::FontLookup;

/// Raw (non-printable) code that renders as an arrow glyph.
pub const ARROW_SYMBOL: u8 = 10;

const LETTER_A: [u8; 3] = [0x03, 0xE4, 0xF0];
const LETTER_B: [u8; 3] = [0xFD, 0x6A, 0xA0];
const LETTER_C: [u8; 3] = [0x74, 0x62, 0xA0];
const LETTER_D: [u8; 3] = [0xFC, 0x62, 0xE0];
const LETTER_E: [u8; 3] = [0xFD, 0x6B, 0x10];
const LETTER_F: [u8; 3] = [0xFD, 0x29, 0x00];
const LETTER_G: [u8; 3] = [0x74, 0x66, 0xA0];
const LETTER_H: [u8; 3] = [0xF9, 0x09, 0xF0];
const LETTER_I: [u8; 3] = [0x04, 0x7F, 0x10];
const LETTER_J: [u8; 3] = [0x94, 0x7D, 0x00];
const LETTER_K: [u8; 3] = [0xF9, 0x15, 0x10];
const LETTER_L: [u8; 3] = [0xF8, 0x42, 0x10];
const LETTER_M: [u8; 3] = [0xFA, 0x08, 0x8F];
const LETTER_N: [u8; 3] = [0xFA, 0x09, 0xF0];
const LETTER_O: [u8; 3] = [0x74, 0x62, 0xE0];
const LETTER_P: [u8; 3] = [0xFD, 0x28, 0x80];
const LETTER_Q: [u8; 3] = [0x74, 0x64, 0xD0];
const LETTER_R: [u8; 3] = [0xFD, 0x2C, 0x90];
const LETTER_S: [u8; 3] = [0xED, 0x6B, 0x70];
const LETTER_T: [u8; 3] = [0x04, 0x3F, 0x00];
const LETTER_U: [u8; 3] = [0xF0, 0x43, 0xE0];
const LETTER_V: [u8; 3] = [0xF0, 0x45, 0xC0];
const LETTER_W: [u8; 3] = [0xF0, 0x4C, 0x1F];
const LETTER_X: [u8; 3] = [0xD9, 0x09, 0xB0];
const LETTER_Y: [u8; 3] = [0xC1, 0x06, 0x4C];
const LETTER_Z: [u8; 3] = [0x8C, 0xEB, 0x90];

const NUMBER_0: [u8; 3] = [0x03, 0xA2, 0xE0];
const NUMBER_1: [u8; 3] = [0x02, 0x7E, 0x10];
const NUMBER_2: [u8; 3] = [0x4C, 0xEA, 0x90];
const NUMBER_3: [u8; 3] = [0x8D, 0x6A, 0xA0];
const NUMBER_4: [u8; 3] = [0xE1, 0x09, 0xF0];
const NUMBER_5: [u8; 3] = [0xED, 0x6B, 0x70];
const NUMBER_6: [u8; 3] = [0xFD, 0x6B, 0x70];
const NUMBER_7: [u8; 3] = [0x8C, 0xA9, 0x80];
const NUMBER_8: [u8; 3] = [0xFD, 0x6B, 0xF0];
const NUMBER_9: [u8; 3] = [0xED, 0x6B, 0xF0];

const CHAR_SPACE: [u8; 3] = [0x00, 0x00, 0x00];
const CHAR_COMMA: [u8; 3] = [0x00, 0x4C, 0x00];
const CHAR_PERIOD: [u8; 3] = [0x00, 0xC6, 0x00];
const CHAR_APOSTROPHE: [u8; 3] = [0x01, 0x30, 0x00];
const CHAR_QUESTION: [u8; 3] = [0x44, 0x2A, 0xC0];
const CHAR_COLON: [u8; 3] = [0x00, 0x36, 0x00];
const CHAR_EXCLAIM: [u8; 3] = [0x00, 0x3A, 0x00];
const SYMBOL_ARROW: [u8; 3] = [0x21, 0x2A, 0xE2];
const CHAR_QUOTES: [u8; 3] = [0x26, 0x09, 0x80];
const CHAR_SEMI: [u8; 3] = [0x00, 0x54, 0x00];
const CHAR_DOLLAR: [u8; 3] = [0x6D, 0x7F, 0x5B];
const CHAR_HYPHEN: [u8; 3] = [0x01, 0x08, 0x40];
const CHAR_LFPARENTH: [u8; 3] = [0x00, 0x1D, 0x10];
const CHAR_RTPARENTH: [u8; 3] = [0x04, 0x5C, 0x00];

/// The built-in glyph source.
#[derive(Debug, Clone, Copy, Default)]
pub struct Font;

impl FontLookup for Font {
    fn glyph(&self, character: u8) -> [u8; 3] {
        match character {
            b'a' | b'A' => LETTER_A,
            b'b' | b'B' => LETTER_B,
            b'c' | b'C' => LETTER_C,
            b'd' | b'D' => LETTER_D,
            b'e' | b'E' => LETTER_E,
            b'f' | b'F' => LETTER_F,
            b'g' | b'G' => LETTER_G,
            b'h' | b'H' => LETTER_H,
            b'i' | b'I' => LETTER_I,
            b'j' | b'J' => LETTER_J,
            b'k' | b'K' => LETTER_K,
            b'l' | b'L' => LETTER_L,
            b'm' | b'M' => LETTER_M,
            b'n' | b'N' => LETTER_N,
            b'o' | b'O' => LETTER_O,
            b'p' | b'P' => LETTER_P,
            b'q' | b'Q' => LETTER_Q,
            b'r' | b'R' => LETTER_R,
            b's' | b'S' => LETTER_S,
            b't' | b'T' => LETTER_T,
            b'u' | b'U' => LETTER_U,
            b'v' | b'V' => LETTER_V,
            b'w' | b'W' => LETTER_W,
            b'x' | b'X' => LETTER_X,
            b'y' | b'Y' => LETTER_Y,
            b'z' | b'Z' => LETTER_Z,
            0 | b'0' => NUMBER_0,
            1 | b'1' => NUMBER_1,
            2 | b'2' => NUMBER_2,
            3 | b'3' => NUMBER_3,
            4 | b'4' => NUMBER_4,
            5 | b'5' => NUMBER_5,
            6 | b'6' => NUMBER_6,
            7 | b'7' => NUMBER_7,
            8 | b'8' => NUMBER_8,
            9 | b'9' => NUMBER_9,
            b',' => CHAR_COMMA,
            b'.' => CHAR_PERIOD,
            b'\'' => CHAR_APOSTROPHE,
            b'?' => CHAR_QUESTION,
            b':' => CHAR_COLON,
            b'!' => CHAR_EXCLAIM,
            ARROW_SYMBOL => SYMBOL_ARROW,
            b'"' => CHAR_QUOTES,
            b';' => CHAR_SEMI,
            b'$' => CHAR_DOLLAR,
            b'-' => CHAR_HYPHEN,
            b'(' => CHAR_LFPARENTH,
            b')' => CHAR_RTPARENTH,
            _ => CHAR_SPACE,
        }
    }
}
