//! Shared value types and wire-format constants.
//!
//! The packed byte layouts here (sprite flags, velocity, addresses, status
//! codes) are the external format the art assets and game code were built
//! against. Accessors change how the bits are reached, never where they live.

use bitflags::bitflags;

/// Hard upper bound on engine capacity.
pub const MAX_SPRITES: u8 = 255;

/// Panel resolution in physical pixels, both axes (square panel).
pub const SCREEN_RES: u8 = 240;

/// Edge length of a logical pixel in physical pixels.
pub const PIXEL_SIZE: u8 = 2;

/// Physical pixels per logical pixel.
pub const PIXEL_SQUARE: u8 = PIXEL_SIZE * PIXEL_SIZE;

/// Edge length of a tile in logical pixels.
pub const TILE_SIZE: u8 = 2;

/// Capacity of the tile staging buffer, in physical pixels.
pub const MAX_PIXELS: u8 = 64;

/// Largest valid tile coordinate on either axis.
pub const TILE_AXIS_MAX: u8 = (SCREEN_RES / PIXEL_SIZE) / TILE_SIZE - 1;

/// Glyphs are 5x5 logical pixels; strings advance by this pitch.
pub const CHAR_PITCH: u8 = 5;

/// Byte size of a full glyph cell in the 2-byte-per-pixel output format.
pub const CHAR_CELL_BYTES: usize =
    (CHAR_PITCH as usize) * (CHAR_PITCH as usize) * (PIXEL_SQUARE as usize) * 2;

/// Most lines a full-screen message can hold (6 logical pixels per line).
pub const MAX_LINES: u8 = SCREEN_RES / (6 * PIXEL_SIZE);

/// Most characters a message line can hold.
pub const MAX_LINE_LENGTH: u8 = SCREEN_RES / (CHAR_PITCH * PIXEL_SIZE);

/// Engine flag bit: a collision involving the player has been latched.
pub const GAME_FLAG_PLAYER_HIT: u8 = 0x01;

/// Engine flag bit: the game is over.
pub const GAME_FLAG_GAME_OVER: u8 = 0x80;

bitflags! {
    /// OR-able status byte shared by every engine, render, and driver
    /// operation. `Status::OK` (all bits clear) is the only success value;
    /// callers may mask individual bits to diagnose cause.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    #[must_use]
    pub struct Status: u8 {
        const INVALID_INPUT = 1;
        const MAX_SPRITES_EXCEEDED = 2;
        const COLLISION_DETECTED = 16;
        const DOWNSTREAM_ERROR = 32;
        const FAILED_OP = 64;
        const UNKNOWN_ERROR = 128;
    }
}

impl Status {
    /// Success: no fault bits set.
    pub const OK: Status = Status::empty();

    pub const fn is_ok(self) -> bool {
        self.bits() == 0
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::OK
    }
}

bitflags! {
    /// Sprite attribute byte.
    ///
    /// Bits [5:4] and [7:6] are two-bit width/height fields, exposed through
    /// [`SpriteFlags::width_tiles`] and [`SpriteFlags::height_tiles`] rather
    /// than as individual flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SpriteFlags: u8 {
        /// Participates in collision scans.
        const COLLIDES = 0b0000_0001;
        /// In play, as opposed to staged off-board.
        const IN_PLAY = 0b0000_0010;
        /// Alive, as opposed to awaiting repack.
        const ALIVE = 0b0000_0100;
        /// Moves each tick, as opposed to fixed scenery.
        const MOBILE = 0b0000_1000;
        /// Width field, raw tile units.
        const WIDTH = 0b0011_0000;
        /// Height field, raw tile units.
        const HEIGHT = 0b1100_0000;
    }
}

impl Default for SpriteFlags {
    fn default() -> Self {
        SpriteFlags::empty()
    }
}

impl SpriteFlags {
    const WIDTH_SHIFT: u8 = 4;
    const HEIGHT_SHIFT: u8 = 6;

    /// Raw width field (0-3 tile units).
    pub const fn width_tiles(self) -> u8 {
        (self.bits() & Self::WIDTH.bits()) >> Self::WIDTH_SHIFT
    }

    /// Raw height field (0-3 tile units).
    pub const fn height_tiles(self) -> u8 {
        (self.bits() & Self::HEIGHT.bits()) >> Self::HEIGHT_SHIFT
    }

    /// Returns the flags with the width and height fields replaced.
    /// Values above 3 are truncated to the two-bit fields.
    pub const fn with_size_tiles(self, width: u8, height: u8) -> Self {
        let cleared = self.bits() & !(Self::WIDTH.bits() | Self::HEIGHT.bits());
        Self::from_bits_retain(
            cleared
                | ((width & 0x03) << Self::WIDTH_SHIFT)
                | ((height & 0x03) << Self::HEIGHT_SHIFT),
        )
    }
}

/// The eight compass directions, clockwise from north.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// Decode a 3-bit direction value. Values above 7 decode to `None`.
    pub const fn from_bits(bits: u8) -> Option<Direction> {
        match bits {
            0 => Some(Direction::North),
            1 => Some(Direction::NorthEast),
            2 => Some(Direction::East),
            3 => Some(Direction::SouthEast),
            4 => Some(Direction::South),
            5 => Some(Direction::SouthWest),
            6 => Some(Direction::West),
            7 => Some(Direction::NorthWest),
            _ => None,
        }
    }

    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// One-unit step as `(dx, dy)`, with y growing southward.
    pub const fn step(self) -> (i8, i8) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Packed velocity byte: bits [2:0] direction, bits [7:3] speed.
///
/// The speed field is carried but never read by the motion step, which
/// always moves exactly one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Velocity(u8);

impl Velocity {
    const DIRECTION_MASK: u8 = 0x07;

    pub const fn from_bits(bits: u8) -> Self {
        Velocity(bits)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn new(direction: Direction, speed: u8) -> Self {
        Velocity((speed << 3) | direction.bits())
    }

    /// Direction from bits [2:0]. The mask keeps the value in 0-7, so this
    /// only returns `None` if the decode table itself is inconsistent.
    pub const fn direction(self) -> Option<Direction> {
        Direction::from_bits(self.0 & Self::DIRECTION_MASK)
    }

    /// Speed field, bits [7:3].
    pub const fn speed(self) -> u8 {
        self.0 >> 3
    }
}

/// Packed grid address: high byte row/Y, low byte column/X.
///
/// Which grid the coordinates live in (sprite, tile, or pixel) depends on
/// the operation; draw paths document the space they leave the field in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteAddress(u16);

impl SpriteAddress {
    pub const fn new(x: u8, y: u8) -> Self {
        SpriteAddress(((y as u16) << 8) | x as u16)
    }

    pub const fn from_bits(bits: u16) -> Self {
        SpriteAddress(bits)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Column, low byte.
    pub const fn x(self) -> u8 {
        self.0 as u8
    }

    /// Row, high byte.
    pub const fn y(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub fn set_x(&mut self, x: u8) {
        self.0 = (self.0 & 0xFF00) | x as u16;
    }

    pub fn set_y(&mut self, y: u8) {
        self.0 = (self.0 & 0x00FF) | ((y as u16) << 8);
    }
}

/// Indices of the first colliding pair found by a scan: `(first << 8) | second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColliderPair(u16);

impl ColliderPair {
    pub const fn new() -> Self {
        ColliderPair(0)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Outer-scan index, always the smaller of the two.
    pub const fn first(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Inner-scan index.
    pub const fn second(self) -> u8 {
        self.0 as u8
    }

    pub(crate) fn set(&mut self, first: u8, second: u8) {
        self.0 = ((first as u16) << 8) | second as u16;
    }
}
