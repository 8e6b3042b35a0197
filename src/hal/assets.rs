//! Asset collaborators: opaque bitmap lookup for glyphs and sprite art.

use crate::types::SpriteFlags;

/// Fixed-size 5x5 glyph source.
pub trait FontLookup {
    /// 24-bit glyph bitmap for a character, most significant bit first.
    /// Unknown characters resolve to a blank glyph rather than failing.
    fn glyph(&self, character: u8) -> [u8; 3];
}

/// Sprite artwork source.
pub trait ArtLookup {
    /// Packed 1-bit art for a sprite kind, one nibble of tile art per
    /// `(width+2) x (height+2)` walk step. The returned slice must cover the
    /// sprite size encoded in `flags`.
    fn sprite_art(&self, kind: u8, flags: SpriteFlags) -> &[u8];
}
