//! The sprite entity: a positioned, flagged game object.

use crate::types::{SpriteAddress, SpriteFlags, Velocity};

/// A game entity, 4 bytes of packed wire state.
///
/// The `address` field holds coordinates in whatever grid the last operation
/// left it in: the sprite grid at rest, the tile grid transiently while a
/// draw or erase is correcting it at the panel border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sprite {
    pub address: SpriteAddress,
    pub velocity: Velocity,
    pub flags: SpriteFlags,
    pub animation: u8,
}

impl Sprite {
    /// Reset state for a slot: stationary, alive-only flags, the given art.
    ///
    /// In-play, collision, and mobile bits start cleared; the caller stages
    /// the sprite into the game by setting them. Slot choice is the caller's
    /// responsibility, there is no bounds validation here.
    pub const fn new(start_address: SpriteAddress, kind: u8) -> Self {
        Sprite {
            address: start_address,
            velocity: Velocity::from_bits(0),
            flags: SpriteFlags::ALIVE,
            animation: kind,
        }
    }
}
