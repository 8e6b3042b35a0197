//! Engine tests - motion, collision, and repack contracts.

use monosprite::core::{Engine, Sprite};
use monosprite::types::{
    ColliderPair, Direction, SpriteAddress, SpriteFlags, Status, Velocity,
};

fn mover(x: u8, y: u8, direction: Direction) -> Sprite {
    let mut sprite = Sprite::new(SpriteAddress::new(x, y), 0);
    sprite.flags |= SpriteFlags::MOBILE;
    sprite.velocity = Velocity::new(direction, 0);
    sprite
}

fn collider(x: u8, y: u8, width: u8, height: u8) -> Sprite {
    let mut sprite = Sprite::new(SpriteAddress::new(x, y), 0);
    sprite.flags |= SpriteFlags::COLLIDES;
    sprite.flags = sprite.flags.with_size_tiles(width, height);
    sprite
}

#[test]
fn test_engine_init_validates_backing() {
    let mut slots = [Sprite::default(); 4];
    assert_eq!(Engine::new(5, 0, &mut slots).err(), Some(Status::INVALID_INPUT));

    let mut slots = [Sprite::default(); 4];
    assert!(Engine::new(4, 0, &mut slots).is_ok());
}

#[test]
fn test_move_steps_all_eight_directions() {
    let cases = [
        (Direction::North, (0i16, -1i16)),
        (Direction::NorthEast, (1, -1)),
        (Direction::East, (1, 0)),
        (Direction::SouthEast, (1, 1)),
        (Direction::South, (0, 1)),
        (Direction::SouthWest, (-1, 1)),
        (Direction::West, (-1, 0)),
        (Direction::NorthWest, (-1, -1)),
    ];

    for (direction, (dx, dy)) in cases {
        let mut slots = [Sprite::default(); 1];
        slots[0] = mover(100, 100, direction);
        let mut engine = Engine::new(1, 0, &mut slots).unwrap();

        assert!(engine.move_sprites(1).is_ok());

        let sprite = engine.sprite(0).unwrap();
        assert_eq!(
            sprite.address.x() as i16,
            100 + dx,
            "x after {direction:?}"
        );
        assert_eq!(
            sprite.address.y() as i16,
            100 + dy,
            "y after {direction:?}"
        );
    }
}

#[test]
fn test_move_wraps_at_byte_boundaries() {
    let mut slots = [Sprite::default(); 2];
    slots[0] = mover(0, 0, Direction::NorthWest);
    slots[1] = mover(255, 255, Direction::SouthEast);
    let mut engine = Engine::new(2, 0, &mut slots).unwrap();

    assert!(engine.move_sprites(2).is_ok());

    assert_eq!(engine.sprite(0).unwrap().address, SpriteAddress::new(255, 255));
    assert_eq!(engine.sprite(1).unwrap().address, SpriteAddress::new(0, 0));
}

#[test]
fn test_move_requires_mobile_and_alive() {
    let mut slots = [Sprite::default(); 3];

    // Mobile but dead.
    slots[0] = mover(10, 10, Direction::East);
    slots[0].flags -= SpriteFlags::ALIVE;

    // Alive but fixed.
    slots[1] = Sprite::new(SpriteAddress::new(20, 20), 0);
    slots[1].velocity = Velocity::new(Direction::East, 0);

    // Both: the only one that moves.
    slots[2] = mover(30, 30, Direction::East);

    let mut engine = Engine::new(3, 0, &mut slots).unwrap();
    assert!(engine.move_sprites(3).is_ok());

    assert_eq!(engine.sprite(0).unwrap().address, SpriteAddress::new(10, 10));
    assert_eq!(engine.sprite(1).unwrap().address, SpriteAddress::new(20, 20));
    assert_eq!(engine.sprite(2).unwrap().address, SpriteAddress::new(31, 30));
}

#[test]
fn test_move_touches_only_the_address() {
    let mut slots = [Sprite::default(); 1];
    slots[0] = mover(50, 60, Direction::SouthWest);
    slots[0].flags = slots[0].flags.with_size_tiles(2, 1);
    slots[0].animation = 7;
    slots[0].velocity = Velocity::new(Direction::SouthWest, 13);
    let before = slots[0];

    let mut engine = Engine::new(1, 0, &mut slots).unwrap();
    assert!(engine.move_sprites(1).is_ok());

    let after = *engine.sprite(0).unwrap();
    assert_eq!(after.velocity, before.velocity);
    assert_eq!(after.flags, before.flags);
    assert_eq!(after.animation, before.animation);
    assert_ne!(after.address, before.address);
}

#[test]
fn test_move_respects_the_count_prefix() {
    let mut slots = [Sprite::default(); 2];
    slots[0] = mover(10, 10, Direction::East);
    slots[1] = mover(20, 20, Direction::East);
    let mut engine = Engine::new(2, 0, &mut slots).unwrap();

    assert!(engine.move_sprites(1).is_ok());

    assert_eq!(engine.sprite(0).unwrap().address, SpriteAddress::new(11, 10));
    assert_eq!(engine.sprite(1).unwrap().address, SpriteAddress::new(20, 20));
}

#[test]
fn test_move_rejects_count_past_capacity() {
    let mut slots = [Sprite::default(); 2];
    let mut engine = Engine::new(2, 0, &mut slots).unwrap();

    let status = engine.move_sprites(3);
    assert_eq!(
        status,
        Status::MAX_SPRITES_EXCEEDED | Status::INVALID_INPUT
    );
    // No partial mutation on a rejected call.
    assert_eq!(engine.sprite(0).unwrap().address, SpriteAddress::default());
}

#[test]
fn test_detect_reports_the_reference_scenario() {
    // Capacity 4: two 1x1 colliders stacked at (10, 10).
    let mut slots = [Sprite::default(); 4];
    slots[1] = collider(10, 10, 1, 1);
    slots[2] = collider(10, 10, 1, 1);
    let engine = Engine::new(4, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    let status = engine.detect_collisions(0, &mut pair);

    assert_eq!(status, Status::COLLISION_DETECTED);
    assert_eq!(pair.bits(), 0x0102);
}

#[test]
fn test_detect_rejects_start_past_capacity() {
    let mut slots = [Sprite::default(); 4];
    let engine = Engine::new(4, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    let status = engine.detect_collisions(4, &mut pair);
    assert_eq!(
        status,
        Status::MAX_SPRITES_EXCEEDED | Status::INVALID_INPUT
    );
}

#[test]
fn test_detect_scan_order_is_deterministic() {
    // Three overlapping colliders: the smallest index pair wins.
    let mut slots = [Sprite::default(); 5];
    slots[1] = collider(40, 40, 0, 0);
    slots[2] = collider(40, 40, 0, 0);
    slots[3] = collider(40, 40, 0, 0);
    let engine = Engine::new(5, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    assert_eq!(engine.detect_collisions(0, &mut pair), Status::COLLISION_DETECTED);
    assert_eq!((pair.first(), pair.second()), (1, 2));

    // Resuming past the first hit finds the next pair in order.
    assert_eq!(engine.detect_collisions(2, &mut pair), Status::COLLISION_DETECTED);
    assert_eq!((pair.first(), pair.second()), (2, 3));
}

#[test]
fn test_detect_skips_collision_disabled_sprites() {
    let mut slots = [Sprite::default(); 3];
    slots[1] = collider(10, 10, 1, 1);
    slots[2] = collider(10, 10, 1, 1);
    slots[2].flags -= SpriteFlags::COLLIDES;
    let engine = Engine::new(3, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    assert!(engine.detect_collisions(0, &mut pair).is_ok());
}

#[test]
fn test_detect_separated_boxes_do_not_collide() {
    let mut slots = [Sprite::default(); 3];
    slots[1] = collider(10, 10, 2, 2);
    // Past the first box on the x axis: 10 + 2 < 13.
    slots[2] = collider(13, 10, 2, 2);
    let engine = Engine::new(3, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    assert!(engine.detect_collisions(0, &mut pair).is_ok());
}

#[test]
fn test_detect_edge_touch_counts_as_overlap() {
    // The separation test is strict, so 10 + 2 == 12 still overlaps.
    let mut slots = [Sprite::default(); 3];
    slots[1] = collider(10, 10, 2, 2);
    slots[2] = collider(12, 10, 2, 2);
    let engine = Engine::new(3, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    assert_eq!(engine.detect_collisions(0, &mut pair), Status::COLLISION_DETECTED);
    assert_eq!(pair.bits(), 0x0102);
}

#[test]
fn test_fresh_sprite_does_not_self_collide() {
    // SpriteInit then an immediate scan: the lone collider reports nothing.
    let mut slots = [Sprite::default(); 4];
    slots[1] = Sprite::new(SpriteAddress::new(30, 30), 0);
    slots[1].flags |= SpriteFlags::COLLIDES;
    let engine = Engine::new(4, 0, &mut slots).unwrap();

    let mut pair = ColliderPair::new();
    assert!(engine.detect_collisions(0, &mut pair).is_ok());
}

#[test]
fn test_repack_count_comes_back_unchanged() {
    let mut slots = [Sprite::default(); 6];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = Sprite::new(SpriteAddress::new(i as u8, 0), i as u8);
    }
    // Kill slots 2 and 4.
    slots[2].flags -= SpriteFlags::ALIVE;
    slots[4].flags -= SpriteFlags::ALIVE;

    let mut engine = Engine::new(6, 0, &mut slots).unwrap();
    let mut new_count = 0;
    assert!(engine.repack_sprites(6, &mut new_count).is_ok());
    assert_eq!(new_count, 6);
}

#[test]
fn test_repack_write_cursor_tracks_the_read_cursor() {
    // The write cursor advances once per slot regardless of liveness, so it
    // never trails the read cursor and survivors stay exactly where they
    // were; dead slots are not squeezed out.
    let mut slots = [Sprite::default(); 5];
    for (i, slot) in slots.iter_mut().enumerate() {
        *slot = Sprite::new(SpriteAddress::new(i as u8, 10), i as u8);
    }
    slots[1].flags -= SpriteFlags::ALIVE;
    slots[3].flags -= SpriteFlags::ALIVE;
    let before = slots;

    let mut engine = Engine::new(5, 0, &mut slots).unwrap();
    let mut new_count = 0;
    assert!(engine.repack_sprites(5, &mut new_count).is_ok());

    assert_eq!(new_count, 5);
    assert_eq!(engine.sprites(), &before[..]);
}

#[test]
fn test_repack_never_touches_slot_zero() {
    let mut slots = [Sprite::default(); 3];
    slots[0] = Sprite::new(SpriteAddress::new(9, 9), 42);
    slots[0].flags -= SpriteFlags::ALIVE; // even dead, the player slot stays
    let player = slots[0];

    let mut engine = Engine::new(3, 0, &mut slots).unwrap();
    let mut new_count = 0;
    assert!(engine.repack_sprites(3, &mut new_count).is_ok());
    assert_eq!(*engine.sprite(0).unwrap(), player);
}

#[test]
fn test_repack_rejects_count_past_capacity() {
    let mut slots = [Sprite::default(); 3];
    let mut engine = Engine::new(3, 0, &mut slots).unwrap();

    let mut new_count = 0xAA;
    let status = engine.repack_sprites(4, &mut new_count);
    assert_eq!(
        status,
        Status::INVALID_INPUT | Status::MAX_SPRITES_EXCEEDED
    );
    // The output is untouched on a rejected call.
    assert_eq!(new_count, 0xAA);
}

#[test]
fn test_full_tick_sequence() {
    // One tick the way the game loop runs it: move, collide, repack.
    let mut slots = [Sprite::default(); 4];
    slots[0] = collider(30, 30, 1, 1);
    slots[1] = collider(31, 30, 1, 1);
    slots[1].flags |= SpriteFlags::MOBILE;
    slots[1].velocity = Velocity::new(Direction::West, 0);
    let mut engine = Engine::new(4, 0, &mut slots).unwrap();

    assert!(engine.move_sprites(4).is_ok());
    assert_eq!(engine.sprite(1).unwrap().address, SpriteAddress::new(30, 30));

    let mut pair = ColliderPair::new();
    assert_eq!(engine.detect_collisions(0, &mut pair), Status::COLLISION_DETECTED);
    assert_eq!(pair.bits(), 0x0001);

    engine.sprite_mut(1).unwrap().flags -= SpriteFlags::ALIVE;
    let mut new_count = 0;
    assert!(engine.repack_sprites(4, &mut new_count).is_ok());
    assert_eq!(new_count, 4);
}
