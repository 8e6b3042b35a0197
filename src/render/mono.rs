//! Pixel compositor: expands 1-bit art through the color table and issues
//! rectangular writes to the display collaborator.

use crate::core::Sprite;
use crate::hal::{ArtLookup, DisplayDriver};
use crate::render::addr;
use crate::types::{
    SpriteFlags, Status, MAX_PIXELS, PIXEL_SIZE, PIXEL_SQUARE, SCREEN_RES, TILE_SIZE,
};

/// Byte capacity of the tile staging buffer (2 bytes per physical pixel).
const STAGE_BYTES: usize = (MAX_PIXELS as usize) * 2;

/// The 1-bit to RGB565 expansion table: one color pair for off bits, one
/// for on bits, each as a big-endian byte pair. Set at renderer
/// construction and fixed for the renderer's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorTable {
    /// Background color, `[hi, lo]`.
    pub off: [u8; 2],
    /// Foreground color, `[hi, lo]`.
    pub on: [u8; 2],
}

impl ColorTable {
    /// Black off, white on.
    pub const DEFAULT: ColorTable = ColorTable {
        off: [0x00, 0x00],
        on: [0xFF, 0xFF],
    };

    /// Color byte pair `(hi, lo)` for one art bit.
    pub const fn bytes(self, on: bool) -> (u8, u8) {
        if on {
            (self.on[0], self.on[1])
        } else {
            (self.off[0], self.off[1])
        }
    }
}

impl Default for ColorTable {
    fn default() -> Self {
        ColorTable::DEFAULT
    }
}

/// A square block of logical pixels addressed on the tile grid.
///
/// `address` packs the tile coordinates high byte first; `size` is the edge
/// length in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub address: u16,
    pub size: u8,
}

/// The rendering pipeline over a display collaborator.
///
/// Owns the display for its lifetime and the color table configured at
/// construction. All operations return the shared status byte; collaborator
/// failures come back decorated with `DOWNSTREAM_ERROR`.
#[derive(Debug)]
pub struct Renderer<D: DisplayDriver> {
    display: D,
    colors: ColorTable,
}

impl<D: DisplayDriver> Renderer<D> {
    pub fn new(display: D, colors: ColorTable) -> Self {
        Renderer { display, colors }
    }

    pub fn colors(&self) -> ColorTable {
        self.colors
    }

    pub fn display(&self) -> &D {
        &self.display
    }

    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }

    pub fn into_display(self) -> D {
        self.display
    }

    /// Blank the whole panel through the display collaborator.
    pub fn clear_screen(&mut self) -> Status {
        let status = self.display.clear_screen();
        if !status.is_ok() {
            return Status::DOWNSTREAM_ERROR | status;
        }
        Status::OK
    }

    /// Draw one logical pixel in the on color.
    ///
    /// `address` is a packed physical-pixel address; both coordinates must
    /// be on the panel or the call fails with `INVALID_INPUT` before any
    /// write. The logical pixel covers a `PIXEL_SIZE x PIXEL_SIZE` block.
    pub fn draw_pixel(&mut self, address: u16) -> Status {
        let row = addr::hi(address);
        let col = addr::lo(address);

        if row > SCREEN_RES - 1 || col > SCREEN_RES - 1 {
            return Status::INVALID_INPUT;
        }

        let mut block = [0u8; (PIXEL_SQUARE as usize) * 2];
        let (hi, lo) = self.colors.bytes(true);
        for pair in block.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let status = self.display.draw_rect(
            row,
            row + PIXEL_SIZE - 1,
            col,
            col + PIXEL_SIZE - 1,
            &block,
        );
        if !status.is_ok() {
            return Status::DOWNSTREAM_ERROR | status;
        }
        Status::OK
    }

    /// Expand a 1-bit tile bitmap into color pairs and write it in one rect.
    ///
    /// `art` is read most-significant-bit first, row-major within the tile,
    /// one bit per logical pixel. The pixel count is validated against the
    /// staging buffer before anything is written; an undersized bitmap is
    /// `INVALID_INPUT` as well.
    pub fn draw_tile(&mut self, tile: Tile, art: &[u8]) -> Status {
        let size = tile.size as usize;
        let pixel_count = size * size * PIXEL_SQUARE as usize;
        if pixel_count == 0 || pixel_count > MAX_PIXELS as usize {
            return Status::INVALID_INPUT;
        }

        let bits = size * size;
        if art.len() * 8 < bits {
            return Status::INVALID_INPUT;
        }

        let row = addr::tile_to_pixel(addr::hi(tile.address), tile.size);
        let col = addr::tile_to_pixel(addr::lo(tile.address), tile.size);
        if row > SCREEN_RES - 1 || col > SCREEN_RES - 1 {
            return Status::INVALID_INPUT;
        }

        let mut staged = [0u8; STAGE_BYTES];
        // Byte stride from one physical-pixel row of the tile to the next.
        let row_stride = PIXEL_SIZE as usize * size * 2;

        for i in 0..bits {
            let byte = art[i >> 3];
            let on = (byte >> (7 - (i & 7))) & 0x01 == 1;
            let (hi, lo) = self.colors.bytes(on);

            // Index of the hi byte of the top-left physical pixel of this
            // logical pixel.
            let mut dex = (i / size) * size * PIXEL_SQUARE as usize * 2
                + (i % size) * PIXEL_SIZE as usize * 2;

            for _ in 0..PIXEL_SIZE {
                let mut k = 0;
                while k < PIXEL_SIZE as usize * 2 {
                    staged[dex + k] = hi;
                    staged[dex + k + 1] = lo;
                    k += 2;
                }
                dex += row_stride;
            }
        }

        let extent = tile.size * PIXEL_SIZE;
        let status = self.display.draw_rect(
            row,
            row + extent - 1,
            col,
            col + extent - 1,
            &staged[..pixel_count * 2],
        );
        if !status.is_ok() {
            return Status::DOWNSTREAM_ERROR | status;
        }
        Status::OK
    }

    /// Draw a sprite's artwork tile by tile.
    ///
    /// Walks the `(width+2) x (height+2)` tile block covering the sprite and
    /// its art padding, feeding one nibble of packed art per tile. The
    /// border policy rewrites the sprite's own address when a coordinate
    /// leaves the tile grid, so the entity may come back moved; the field is
    /// left holding tile-grid coordinates.
    pub fn draw_sprite(&mut self, sprite: &mut Sprite, assets: &impl ArtLookup) -> Status {
        let art = assets.sprite_art(sprite.animation, sprite.flags);
        self.blit_sprite(sprite, art, NibbleFeed::Stream)
    }

    /// Flood a sprite's tile block with the off color.
    ///
    /// Same walk and address write-back as [`Renderer::draw_sprite`], but
    /// the art nibbles come from the off-color byte pair instead of the
    /// sprite's animation.
    pub fn clear_sprite(&mut self, sprite: &mut Sprite) -> Status {
        let art = self.colors.off;
        self.blit_sprite(sprite, &art, NibbleFeed::Cycle)
    }

    /// Redraw every in-play, live sprite in `[0, count)`.
    ///
    /// The first failing sprite aborts the pass with its status.
    pub fn redraw_sprites(
        &mut self,
        sprites: &mut [Sprite],
        count: u8,
        assets: &impl ArtLookup,
    ) -> Status {
        if count as usize > sprites.len() {
            return Status::MAX_SPRITES_EXCEEDED | Status::INVALID_INPUT;
        }

        const VISIBLE: SpriteFlags = SpriteFlags::IN_PLAY.union(SpriteFlags::ALIVE);

        for sprite in &mut sprites[..count as usize] {
            if !sprite.flags.contains(VISIBLE) {
                continue;
            }
            let status = self.draw_sprite(sprite, assets);
            if !status.is_ok() {
                return status;
            }
        }
        Status::OK
    }

    /// The shared sprite tile walk.
    ///
    /// Tiles run top to bottom within a column of the walk, then left to
    /// right, consuming the high nibble of each art byte before the low one.
    /// A corrected border coordinate retries the same walk index rather than
    /// skipping a tile. The first failing tile aborts the walk.
    fn blit_sprite(&mut self, sprite: &mut Sprite, art: &[u8], feed: NibbleFeed) -> Status {
        let width = sprite.flags.width_tiles();
        let height = sprite.flags.height_tiles();

        if let NibbleFeed::Stream = feed {
            let nibbles = (width as usize + 2) * (height as usize + 2);
            if art.len() * 2 < nibbles {
                return Status::INVALID_INPUT;
            }
        }

        let mut row = sprite.address.y();
        let mut col = sprite.address.x();
        let col_start = col;

        let mut high_half = true;
        let mut dex = 0usize;

        let mut i = 0;
        while i < width + 2 {
            if let Some(fixed) = addr::correct_tile_axis(row) {
                row = fixed;
                sprite.address.set_y(fixed);
                continue;
            }

            let mut j = 0;
            while j < height + 2 {
                if let Some(fixed) = addr::correct_tile_axis(col) {
                    col = fixed;
                    sprite.address.set_x(fixed);
                    continue;
                }

                let tile = Tile {
                    address: addr::pack(row, col),
                    size: TILE_SIZE,
                };

                let index = match feed {
                    NibbleFeed::Stream => dex,
                    NibbleFeed::Cycle => dex & 0x01,
                };
                let nibble = if high_half {
                    high_half = false;
                    art[index] & 0xF0
                } else {
                    high_half = true;
                    dex += 1;
                    (art[index] & 0x0F) << 4
                };

                let status = self.draw_tile(tile, &[nibble]);
                if !status.is_ok() {
                    return status;
                }

                col = col.wrapping_add(1);
                j += 1;
            }

            row = row.wrapping_add(1);
            col = col_start;
            i += 1;
        }

        Status::OK
    }
}

/// How the sprite walk indexes its art bytes.
#[derive(Debug, Clone, Copy)]
enum NibbleFeed {
    /// Consume the art stream front to back (sprite artwork).
    Stream,
    /// Alternate between two bytes forever (color-pair flood).
    Cycle,
}
