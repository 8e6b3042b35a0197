//! Engine state and the per-tick passes: move, collide, repack.
//!
//! The engine borrows caller-owned sprite storage and never allocates.
//! All operations validate their inputs against the stored capacity before
//! touching any state, and report faults through the shared [`Status`] byte.

use crate::core::Sprite;
use crate::types::{ColliderPair, SpriteFlags, Status};

/// A running game instance bound to caller-owned sprite storage.
///
/// Slot 0 is reserved for the permanent entity (conventionally the player);
/// [`Engine::repack_sprites`] never reassigns it. `capacity` bounds every
/// index an operation will touch, and construction guarantees the backing
/// slice covers it.
#[derive(Debug)]
pub struct Engine<'a> {
    /// Sprite slots this instance may use; the hard maximum is capped by the
    /// `u8` index type.
    capacity: u8,
    /// Eight game-defined bits, untouched by the engine itself.
    engine_flags: u8,
    /// Caller-owned backing storage.
    sprites: &'a mut [Sprite],
}

impl<'a> Engine<'a> {
    /// Bind an engine instance to caller-owned storage.
    ///
    /// Fails with `INVALID_INPUT` if the backing slice is shorter than the
    /// requested capacity.
    pub fn new(capacity: u8, engine_flags: u8, sprites: &'a mut [Sprite]) -> Result<Self, Status> {
        if sprites.len() < capacity as usize {
            return Err(Status::INVALID_INPUT);
        }
        Ok(Engine {
            capacity,
            engine_flags,
            sprites,
        })
    }

    pub fn capacity(&self) -> u8 {
        self.capacity
    }

    pub fn engine_flags(&self) -> u8 {
        self.engine_flags
    }

    pub fn set_engine_flags(&mut self, flags: u8) {
        self.engine_flags = flags;
    }

    /// The sprite slots inside capacity.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites[..self.capacity as usize]
    }

    pub fn sprites_mut(&mut self) -> &mut [Sprite] {
        &mut self.sprites[..self.capacity as usize]
    }

    /// Bounds-checked single-slot access.
    pub fn sprite(&self, index: u8) -> Option<&Sprite> {
        if index < self.capacity {
            Some(&self.sprites[index as usize])
        } else {
            None
        }
    }

    pub fn sprite_mut(&mut self, index: u8) -> Option<&mut Sprite> {
        if index < self.capacity {
            Some(&mut self.sprites[index as usize])
        } else {
            None
        }
    }

    /// Advance every mobile, live sprite one step along its compass heading.
    ///
    /// Coordinates wrap naturally at the 8-bit boundary; only the address
    /// field changes. The speed bits of the velocity byte are not read.
    pub fn move_sprites(&mut self, sprite_count: u8) -> Status {
        if sprite_count > self.capacity {
            return Status::MAX_SPRITES_EXCEEDED | Status::INVALID_INPUT;
        }

        const MOVES: SpriteFlags = SpriteFlags::MOBILE.union(SpriteFlags::ALIVE);

        for sprite in &mut self.sprites[..sprite_count as usize] {
            if !sprite.flags.contains(MOVES) {
                continue;
            }

            // The 3-bit mask keeps the heading in 0-7; an undecodable value
            // means the state is corrupt and the pass must stop.
            let direction = match sprite.velocity.direction() {
                Some(direction) => direction,
                None => return Status::UNKNOWN_ERROR,
            };

            let (dx, dy) = direction.step();
            sprite
                .address
                .set_x(sprite.address.x().wrapping_add_signed(dx));
            sprite
                .address
                .set_y(sprite.address.y().wrapping_add_signed(dy));
        }

        Status::OK
    }

    /// Scan collision-enabled sprites pairwise for bounding-box overlap.
    ///
    /// The scan is deterministic: outer index ascending from `start`, inner
    /// ascending from one past it, over the full capacity. On the first
    /// overlapping pair the indices are written to `colliders` as
    /// `(first << 8) | second` and the scan stops with `COLLISION_DETECTED`.
    /// Callers wanting later pairs re-invoke with `start` past the hit.
    pub fn detect_collisions(&self, start: u8, colliders: &mut ColliderPair) -> Status {
        if start >= self.capacity {
            return Status::MAX_SPRITES_EXCEEDED | Status::INVALID_INPUT;
        }

        for i in start..self.capacity.saturating_sub(1) {
            let a = &self.sprites[i as usize];
            if !a.flags.contains(SpriteFlags::COLLIDES) {
                continue;
            }

            for j in (i + 1)..self.capacity {
                let b = &self.sprites[j as usize];
                if !b.flags.contains(SpriteFlags::COLLIDES) {
                    continue;
                }

                if boxes_overlap(a, b) {
                    colliders.set(i, j);
                    return Status::COLLISION_DETECTED;
                }
            }
        }

        Status::OK
    }

    /// Reclaim dead slots by copying live sprites over them.
    ///
    /// Slot 0 is reserved and never moved. The write cursor advances once
    /// per slot read regardless of liveness and a live slot is copied only
    /// when the cursor trails the read index, so survivors keep both their
    /// order and their positions; dead slots are not squeezed out, they are
    /// freed for reuse in place. `new_count` therefore always comes back
    /// equal to `old_count`. Downstream code depends on these exact cursor
    /// semantics; do not substitute a gap-closing compaction.
    pub fn repack_sprites(&mut self, old_count: u8, new_count: &mut u8) -> Status {
        if old_count > self.capacity {
            return Status::INVALID_INPUT | Status::MAX_SPRITES_EXCEEDED;
        }

        let mut write: u8 = 1;

        for read in 1..old_count {
            if self.sprites[read as usize].flags.contains(SpriteFlags::ALIVE) && write != read {
                self.sprites[write as usize] = self.sprites[read as usize];
            }
            write += 1;
        }

        *new_count = write;
        Status::OK
    }
}

/// Axis-aligned bounding-box overlap on the packed addresses.
///
/// Width spans the low address byte, height the high byte, both taken as
/// the raw two-bit tile fields. The separation tests are strict, so boxes
/// that merely touch edge-to-edge still count as overlapping.
fn boxes_overlap(a: &Sprite, b: &Sprite) -> bool {
    let (ax, ay) = (a.address.x() as u16, a.address.y() as u16);
    let (bx, by) = (b.address.x() as u16, b.address.y() as u16);
    let (aw, ah) = (a.flags.width_tiles() as u16, a.flags.height_tiles() as u16);
    let (bw, bh) = (b.flags.width_tiles() as u16, b.flags.height_tiles() as u16);

    !((ax + aw < bx) || (bx + bw < ax) || (ay + ah < by) || (by + bh < ay))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Direction, SpriteAddress, Velocity};

    fn mobile_sprite(x: u8, y: u8, direction: Direction) -> Sprite {
        let mut sprite = Sprite::new(SpriteAddress::new(x, y), 0);
        sprite.flags |= SpriteFlags::MOBILE;
        sprite.velocity = Velocity::new(direction, 0);
        sprite
    }

    #[test]
    fn new_rejects_short_backing() {
        let mut slots = [Sprite::default(); 4];
        assert!(Engine::new(8, 0, &mut slots).is_err());
        assert!(Engine::new(4, 0, &mut slots).is_ok());
    }

    #[test]
    fn move_steps_one_unit_east() {
        let mut slots = [Sprite::default(); 2];
        slots[0] = mobile_sprite(10, 20, Direction::East);
        let mut engine = Engine::new(2, 0, &mut slots).unwrap();

        assert!(engine.move_sprites(2).is_ok());
        assert_eq!(engine.sprite(0).unwrap().address, SpriteAddress::new(11, 20));
    }

    #[test]
    fn move_rejects_count_past_capacity() {
        let mut slots = [Sprite::default(); 2];
        let mut engine = Engine::new(2, 0, &mut slots).unwrap();
        let status = engine.move_sprites(3);
        assert!(status.contains(Status::MAX_SPRITES_EXCEEDED));
        assert!(status.contains(Status::INVALID_INPUT));
    }

    #[test]
    fn repack_leaves_slot_zero_alone() {
        let mut slots = [Sprite::default(); 4];
        slots[0] = Sprite::new(SpriteAddress::new(1, 1), 9);
        let player = slots[0];
        let mut engine = Engine::new(4, 0, &mut slots).unwrap();

        let mut new_count = 0;
        assert!(engine.repack_sprites(4, &mut new_count).is_ok());
        assert_eq!(new_count, 4);
        assert_eq!(*engine.sprite(0).unwrap(), player);
    }
}
