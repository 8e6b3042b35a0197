//! Text renderer: fixed-cell glyphs composed from logical pixels.
//!
//! Addresses here are logical-pixel addresses (packed high byte first);
//! conversion to physical pixels happens on entry. Strings run along the
//! row axis at a fixed 5-logical-pixel pitch, message lines stack along the
//! column axis 6 logical pixels apart.

use crate::hal::{DisplayDriver, FontLookup};
use crate::render::addr;
use crate::render::mono::Renderer;
use crate::types::{Status, CHAR_CELL_BYTES, CHAR_PITCH, MAX_LINES, MAX_LINE_LENGTH, PIXEL_SIZE};

/// Logical-pixel line pitch of a multi-line message.
const LINE_PITCH: u8 = 6;

impl<D: DisplayDriver> Renderer<D> {
    /// Draw one glyph at a logical-pixel address.
    ///
    /// The 24-bit glyph bitmap is walked most significant bit first down a
    /// 5-logical-row raster, wrapping to the next glyph column after 5 rows;
    /// each set bit costs one [`Renderer::draw_pixel`] call. Clear bits are
    /// skipped, so overdrawing an occupied cell leaves the old background.
    /// The first failing pixel aborts the glyph.
    pub fn write_char(&mut self, character: u8, address: u16, font: &impl FontLookup) -> Status {
        let pixel_address = addr::logical_to_pixel(address);
        let row = addr::hi(pixel_address);
        let col = addr::lo(pixel_address);

        let glyph = font.glyph(character);

        // Raster counters in physical pixels: rows advance down the glyph
        // column, wrapping into the next column after the fifth row.
        let mut col_ctr: u8 = 0;
        let mut row_ctr: u8 = 0;

        for byte in glyph {
            for bit in 0..8 {
                if byte & (0x80 >> bit) != 0 {
                    let pixel = addr::pack(row.wrapping_add(col_ctr), col.wrapping_add(row_ctr));
                    let status = self.draw_pixel(pixel);
                    if !status.is_ok() {
                        return status;
                    }
                }

                row_ctr += PIXEL_SIZE;
                if row_ctr > PIXEL_SIZE * 4 {
                    row_ctr = 0;
                    col_ctr += PIXEL_SIZE;
                }
            }
        }

        Status::OK
    }

    /// Draw a string left to right from a logical-pixel address.
    ///
    /// Characters advance by the fixed 5-logical-pixel pitch; the first
    /// failing glyph aborts the rest.
    pub fn write_string(&mut self, text: &[u8], address: u16, font: &impl FontLookup) -> Status {
        let row = addr::hi(address);
        let col = addr::lo(address);

        for (i, &character) in text.iter().enumerate() {
            let offset = row.wrapping_add((CHAR_PITCH as usize).wrapping_mul(i) as u8);
            let status = self.write_char(character, addr::pack(offset, col), font);
            if !status.is_ok() {
                return status;
            }
        }

        Status::OK
    }

    /// Flood one glyph cell with the off color in a single rect write.
    ///
    /// Unlike drawing, erasure covers the full 5x5 logical-pixel bounding
    /// box, not just the set bits.
    pub fn erase_char(&mut self, address: u16) -> Status {
        let pixel_address = addr::logical_to_pixel(address);
        let row_start = addr::hi(pixel_address);
        let col_start = addr::lo(pixel_address);
        let row_end = row_start.wrapping_add(CHAR_PITCH * PIXEL_SIZE - 1);
        let col_end = col_start.wrapping_add(CHAR_PITCH * PIXEL_SIZE - 1);

        let mut blank = [0u8; CHAR_CELL_BYTES];
        let (hi, lo) = self.colors().bytes(false);
        for pair in blank.chunks_exact_mut(2) {
            pair[0] = hi;
            pair[1] = lo;
        }

        let status = self
            .display_mut()
            .draw_rect(row_start, row_end, col_start, col_end, &blank);
        if !status.is_ok() {
            return Status::DOWNSTREAM_ERROR | status;
        }
        Status::OK
    }

    /// Erase `length` glyph cells left to right from a logical-pixel address.
    pub fn erase_string(&mut self, address: u16, length: u8) -> Status {
        let mut row = addr::hi(address);
        let col = addr::lo(address);

        for _ in 0..length {
            let status = self.erase_char(addr::pack(row, col));
            if !status.is_ok() {
                return status;
            }
            row = row.wrapping_add(CHAR_PITCH);
        }

        Status::OK
    }

    /// Draw a multi-line message centered on the panel.
    ///
    /// Rejects oversized messages with `INVALID_INPUT` before any write:
    /// at most `MAX_LINES` lines of at most `MAX_LINE_LENGTH` characters.
    /// Empty lines consume their pitch without drawing. The first failing
    /// line aborts the rest.
    pub fn display_message(&mut self, lines: &[&[u8]], font: &impl FontLookup) -> Status {
        if lines.len() > MAX_LINES as usize {
            return Status::INVALID_INPUT;
        }
        if lines.iter().any(|line| line.len() > MAX_LINE_LENGTH as usize) {
            return Status::INVALID_INPUT;
        }

        let top = (MAX_LINES - lines.len() as u8) / 2 * LINE_PITCH;

        for (index, line) in lines.iter().enumerate() {
            if line.is_empty() {
                continue;
            }

            let indent = (MAX_LINE_LENGTH - line.len() as u8) * CHAR_PITCH / 2;
            let col = top + index as u8 * LINE_PITCH;

            let status = self.write_string(line, addr::pack(indent, col), font);
            if !status.is_ok() {
                return status;
            }
        }

        Status::OK
    }
}
