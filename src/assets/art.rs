//! Demo sprite artwork and canned messages.
//!
//! Sprite art is packed one tile-nibble per walk step of the
//! `(width+2) x (height+2)` draw loop, high nibble first. The 13-byte
//! arrays cover the largest sprite size the flag fields can encode
//! (a 5x5-tile walk needs 25 nibbles).

use crate::hal::ArtLookup;
use crate::types::SpriteFlags;

/// Art index of the player sprite.
pub const KIND_PLAYER: u8 = 0;

/// Art index of the falling hazard sprite.
pub const KIND_HAZARD: u8 = 1;

/// Hatched placeholder drawn for any unknown art index.
pub const ERROR_ART: [u8; 13] = [0x96; 13];

/// Fully transparent-off art, useful for staged sprites.
pub const EMPTY_ART: [u8; 13] = [0x00; 13];

/// 2x2-tile player: a hollow box.
const PLAYER_ART: [u8; 2] = [0x96, 0x69];

/// 2x2-tile hazard: solid block.
const HAZARD_ART: [u8; 2] = [0xFF, 0xFF];

pub const DEATH_MESSAGE: [&[u8]; 2] = [b"You", b"Died."];
pub const WIN_MESSAGE: [&[u8]; 2] = [b"You", b"Won!"];

/// The built-in artwork source.
///
/// Kinds without dedicated art resolve to [`ERROR_ART`], which is long
/// enough for any sprite size, so lookup itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameArt;

impl ArtLookup for GameArt {
    fn sprite_art(&self, kind: u8, flags: SpriteFlags) -> &[u8] {
        let _ = flags;
        match kind {
            KIND_PLAYER => &PLAYER_ART,
            KIND_HAZARD => &HAZARD_ART,
            _ => &ERROR_ART,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_kinds_have_dedicated_art() {
        let art = GameArt;
        let flags = SpriteFlags::ALIVE;
        assert_eq!(art.sprite_art(KIND_PLAYER, flags), &PLAYER_ART);
        assert_eq!(art.sprite_art(KIND_HAZARD, flags), &HAZARD_ART);
    }

    #[test]
    fn unknown_kind_gets_the_error_placeholder() {
        let art = GameArt;
        let bitmap = art.sprite_art(0xEE, SpriteFlags::ALIVE.with_size_tiles(3, 3));
        assert_eq!(bitmap, &ERROR_ART);
        // 25 walk nibbles for a 3x3-unit sprite; 13 bytes carry 26.
        assert!(bitmap.len() * 2 >= 25);
    }
}
