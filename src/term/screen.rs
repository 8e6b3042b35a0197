//! Screen: flushes a [`Panel`] to a real terminal.
//!
//! Each terminal cell shows two logical pixels stacked with a half-block
//! glyph, so the 240x240 panel renders as a 120x60 character grid. The
//! panel's row axis runs horizontally, matching how the hardware is
//! mounted. Draws diff against the previous frame and only touch changed
//! cells.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::panel::Panel;
use crate::types::PIXEL_SIZE;

/// Terminal cells across: one per logical pixel along the row axis.
pub const VIEW_WIDTH: u16 = 120;

/// Terminal cells down: two logical pixels per cell along the column axis.
pub const VIEW_HEIGHT: u16 = 60;

/// One rendered terminal cell: the colors of its upper and lower pixel.
type CellColors = (u16, u16);

pub struct Screen {
    stdout: io::Stdout,
    last: Option<Vec<CellColors>>,
}

impl Screen {
    pub fn new() -> Self {
        Screen {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint every cell.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush the panel contents to the terminal.
    pub fn draw(&mut self, panel: &Panel) -> Result<()> {
        let next = sample_cells(panel);
        let full = self.last.as_ref().map(|l| l.len()) != Some(next.len());

        let mut painted_any = false;
        for ty in 0..VIEW_HEIGHT {
            let mut tx = 0;
            while tx < VIEW_WIDTH {
                let i = (ty * VIEW_WIDTH + tx) as usize;
                let changed = full || self.last.as_ref().map(|l| l[i]) != Some(next[i]);
                if !changed {
                    tx += 1;
                    continue;
                }

                // Start of a changed run; one cursor move covers it.
                self.stdout.queue(cursor::MoveTo(tx, ty))?;
                while tx < VIEW_WIDTH {
                    let i = (ty * VIEW_WIDTH + tx) as usize;
                    if !full && self.last.as_ref().map(|l| l[i]) == Some(next[i]) {
                        break;
                    }
                    let (upper, lower) = next[i];
                    self.stdout.queue(SetForegroundColor(rgb565_to_color(upper)))?;
                    self.stdout.queue(SetBackgroundColor(rgb565_to_color(lower)))?;
                    self.stdout.queue(Print('\u{2580}'))?;
                    painted_any = true;
                    tx += 1;
                }
            }
        }

        if painted_any || full {
            self.stdout.queue(ResetColor)?;
            self.stdout.flush()?;
        }
        self.last = Some(next);
        Ok(())
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::new()
    }
}

/// Sample the panel down to terminal cells.
///
/// Cell `(tx, ty)` shows the logical pixels at row-axis position `tx` and
/// column-axis positions `2*ty` and `2*ty + 1`; logical pixels are uniform
/// blocks, so sampling their top-left physical pixel is lossless.
fn sample_cells(panel: &Panel) -> Vec<CellColors> {
    let mut cells = Vec::with_capacity((VIEW_WIDTH * VIEW_HEIGHT) as usize);
    for ty in 0..VIEW_HEIGHT {
        for tx in 0..VIEW_WIDTH {
            let row = (tx as u8) * PIXEL_SIZE;
            let upper = panel.pixel(row, (2 * ty as u8) * PIXEL_SIZE);
            let lower = panel.pixel(row, (2 * ty as u8 + 1) * PIXEL_SIZE);
            cells.push((upper, lower));
        }
    }
    cells
}

fn rgb565_to_color(pixel: u16) -> Color {
    Color::Rgb {
        r: (((pixel >> 11) & 0x1F) << 3) as u8,
        g: (((pixel >> 5) & 0x3F) << 2) as u8,
        b: ((pixel & 0x1F) << 3) as u8,
    }
}
