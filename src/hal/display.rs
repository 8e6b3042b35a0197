//! Display collaborator: addressed rectangle writes of RGB565 pixel data.

use crate::types::Status;

/// A panel that accepts rectangular pixel writes.
///
/// `pixels` carries two bytes per pixel (RGB565, high byte first), filling
/// the addressed window column-fastest. Both window bounds are inclusive.
/// Writes are synchronous; a slow panel blocks the caller.
pub trait DisplayDriver {
    /// Write a pixel buffer to the window
    /// `[row_start, row_end] x [col_start, col_end]`.
    fn draw_rect(
        &mut self,
        row_start: u8,
        row_end: u8,
        col_start: u8,
        col_end: u8,
        pixels: &[u8],
    ) -> Status;

    /// Blank the entire panel.
    fn clear_screen(&mut self) -> Status;
}
