//! Render module - coordinate mapping and the monochrome-to-RGB565 pipeline.
//!
//! Addresses pack two grid coordinates into one `u16`, high byte first. The
//! panel is mounted with the controller's row axis horizontal: glyph columns,
//! string pitch, and sprite width all advance along the row window, line
//! spacing and sprite height along the column window.
//!
//! Draw and erase operations mutate a sprite's stored address when the
//! boundary policy corrects it at the panel border; the signatures take
//! `&mut Sprite` to make that contract visible.

pub mod addr;
pub mod mono;
pub mod text;

pub use mono::{ColorTable, Renderer, Tile};
