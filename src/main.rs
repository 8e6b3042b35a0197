//! Terminal demo game (default binary): dodge the falling blocks.
//!
//! Drives the full engine tick - move, collide, repack, redraw - against
//! the terminal-emulated panel. Arrow keys or WASD slide the player along
//! the bottom edge, space restarts after a hit, q quits.

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};

use monosprite::assets::art::{DEATH_MESSAGE, KIND_HAZARD, KIND_PLAYER, WIN_MESSAGE};
use monosprite::assets::{Font, GameArt};
use monosprite::core::{Engine, Sprite};
use monosprite::hal::buttons::{BUTTON_ACTION, BUTTON_LEFT, BUTTON_RIGHT};
use monosprite::hal::{AudioDriver, ButtonDriver};
use monosprite::render::{addr, ColorTable, Renderer};
use monosprite::term::{key_to_button, should_quit, Panel, Screen, SilentAudio, TermButtons};
use monosprite::types::{
    ColliderPair, Direction, SpriteAddress, SpriteFlags, Status, Velocity, GAME_FLAG_GAME_OVER,
    GAME_FLAG_PLAYER_HIT, TILE_AXIS_MAX,
};

/// Sprite slots: the player plus up to eleven hazards.
const SLOTS: usize = 12;

/// ~60 ticks per second, the panel hardware's frame clock.
const TICK_MS: u64 = 16;

/// Ticks between hazard spawns.
const SPAWN_TICKS: u32 = 45;

/// Directions as seen on the mounted panel: the row axis runs horizontally,
/// the column axis vertically.
const SCREEN_LEFT: Direction = Direction::North;
const SCREEN_RIGHT: Direction = Direction::South;
const SCREEN_DOWN: Direction = Direction::East;

/// Sprites cover two tiles per axis, so their addresses stay two short of
/// the last tile index.
const LAST_SPRITE_TILE: u8 = TILE_AXIS_MAX - 2;

/// Tone indices from the default bank: a scoring beep and the death buzz.
const TONE_SCORE: u8 = 28;
const TONE_DEATH: u8 = 25;

/// Dodged hazards needed to win a round.
const WIN_SCORE: u32 = 100;

fn main() -> Result<()> {
    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

/// Bridge an engine status byte into the binary's error flow.
fn check(status: Status) -> Result<()> {
    if status.is_ok() {
        Ok(())
    } else {
        Err(anyhow!("engine fault, status {:#010b}", status.bits()))
    }
}

fn player_sprite() -> Sprite {
    let mut player = Sprite::new(
        SpriteAddress::new(LAST_SPRITE_TILE, TILE_AXIS_MAX / 2),
        KIND_PLAYER,
    );
    player.flags |= SpriteFlags::IN_PLAY | SpriteFlags::COLLIDES;
    player
}

/// Small LCG, enough to scatter hazard lanes.
struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    fn new(seed: u32) -> Self {
        SimpleRng {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state % max
    }
}

fn run(screen: &mut Screen) -> Result<()> {
    let mut slots = [Sprite::default(); SLOTS];
    slots[0] = player_sprite();
    let mut engine =
        Engine::new(SLOTS as u8, 0, &mut slots).map_err(|s| anyhow!("init status {}", s.bits()))?;

    let mut renderer = Renderer::new(Panel::new(), ColorTable::DEFAULT);
    let mut buttons = TermButtons::new();
    let mut audio = SilentAudio::default();
    let font = Font;
    let art = GameArt;
    let mut rng = SimpleRng::new(0x5EED);

    let mut score: u32 = 0;
    let mut ticks: u32 = 0;
    let mut tone_ticks: u8 = 0;

    check(renderer.clear_screen())?;
    check(renderer.write_string(b"SCORE", addr::pack(2, 2), &font))?;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        screen.draw(renderer.display())?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Release {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(mask) = key_to_button(key.code) {
                        buttons.press(mask);
                    }
                }
            }
        }

        if last_tick.elapsed() < tick_duration {
            continue;
        }
        last_tick = Instant::now();
        ticks += 1;

        if tone_ticks > 0 {
            tone_ticks -= 1;
            if tone_ticks == 0 {
                check(audio.silence())?;
            }
        }

        let mask = buttons.poll_all();
        buttons.tick();

        // Erase every visible sprite at its pre-move position.
        for index in 0..engine.capacity() {
            let visible = SpriteFlags::IN_PLAY | SpriteFlags::ALIVE;
            if let Some(sprite) = engine.sprite_mut(index) {
                if sprite.flags.contains(visible) {
                    check(renderer.clear_sprite(sprite))?;
                }
            }
        }

        steer_player(&mut engine, mask);
        check(engine.move_sprites(engine.capacity()))?;

        // Hazards that cleared the bottom edge score and free their slot.
        let mut landed: ArrayVec<u8, SLOTS> = ArrayVec::new();
        for (index, sprite) in engine.sprites().iter().enumerate().skip(1) {
            if sprite.flags.contains(SpriteFlags::ALIVE) && sprite.address.x() > LAST_SPRITE_TILE {
                landed.push(index as u8);
            }
        }
        for index in landed {
            if let Some(sprite) = engine.sprite_mut(index) {
                sprite.flags = SpriteFlags::empty();
            }
            score += 1;
            check(audio.play_tone(TONE_SCORE))?;
            tone_ticks = 6;
        }

        let mut ending: Option<&[&[u8]]> = None;

        let mut pair = ColliderPair::new();
        let collision = engine.detect_collisions(0, &mut pair);
        if collision.contains(Status::COLLISION_DETECTED) {
            if pair.first() == 0 {
                engine.set_engine_flags(GAME_FLAG_PLAYER_HIT | GAME_FLAG_GAME_OVER);
                check(audio.play_tone(TONE_DEATH))?;
                ending = Some(&DEATH_MESSAGE);
            }
        } else if !collision.is_ok() {
            check(collision)?;
        }

        if ending.is_none() && score >= WIN_SCORE {
            engine.set_engine_flags(GAME_FLAG_GAME_OVER);
            ending = Some(&WIN_MESSAGE);
        }

        if let Some(message) = ending {
            if !end_round(screen, &mut renderer, &font, message)? {
                return Ok(());
            }

            // Restart: blank the board and re-stage the player.
            check(audio.silence())?;
            for sprite in engine.sprites_mut().iter_mut().skip(1) {
                *sprite = Sprite::default();
            }
            engine.sprites_mut()[0] = player_sprite();
            engine.set_engine_flags(0);
            score = 0;
            ticks = 0;
            check(renderer.clear_screen())?;
            check(renderer.write_string(b"SCORE", addr::pack(2, 2), &font))?;
            screen.invalidate();
            continue;
        }

        let mut live_count = 0;
        check(engine.repack_sprites(engine.capacity(), &mut live_count))?;

        if ticks % SPAWN_TICKS == 0 {
            spawn_hazard(&mut engine, &mut rng);
        }

        let capacity = engine.capacity();
        check(renderer.redraw_sprites(engine.sprites_mut(), capacity, &art))?;

        draw_score(&mut renderer, &font, score)?;
    }
}

/// Point the player along the held direction, or park it.
fn steer_player(engine: &mut Engine<'_>, mask: u8) {
    if let Some(player) = engine.sprite_mut(0) {
        let row = player.address.y();
        if mask & BUTTON_LEFT != 0 && row > 0 {
            player.velocity = Velocity::new(SCREEN_LEFT, 0);
            player.flags |= SpriteFlags::MOBILE;
        } else if mask & BUTTON_RIGHT != 0 && row < LAST_SPRITE_TILE {
            player.velocity = Velocity::new(SCREEN_RIGHT, 0);
            player.flags |= SpriteFlags::MOBILE;
        } else {
            player.flags -= SpriteFlags::MOBILE;
        }
    }
}

/// Stage a hazard into the first free slot, if one is open.
fn spawn_hazard(engine: &mut Engine<'_>, rng: &mut SimpleRng) {
    let free = (1..engine.capacity())
        .find(|&i| !engine.sprites()[i as usize].flags.contains(SpriteFlags::ALIVE));

    if let Some(index) = free {
        let lane = rng.next_range(LAST_SPRITE_TILE as u32 + 1) as u8;
        let mut hazard = Sprite::new(SpriteAddress::new(4, lane), KIND_HAZARD);
        hazard.velocity = Velocity::new(SCREEN_DOWN, 0);
        hazard.flags |= SpriteFlags::IN_PLAY | SpriteFlags::COLLIDES | SpriteFlags::MOBILE;
        if let Some(slot) = engine.sprite_mut(index) {
            *slot = hazard;
        }
    }
}

fn draw_score(renderer: &mut Renderer<Panel>, font: &Font, score: u32) -> Result<()> {
    let digits = [
        b'0' + ((score / 100) % 10) as u8,
        b'0' + ((score / 10) % 10) as u8,
        b'0' + (score % 10) as u8,
    ];
    let digit_address = addr::pack(2 + 6 * 5, 2);
    check(renderer.erase_string(digit_address, 3))?;
    check(renderer.write_string(&digits, digit_address, font))?;
    Ok(())
}

/// Show an end-of-round screen; true means restart, false means quit.
fn end_round(
    screen: &mut Screen,
    renderer: &mut Renderer<Panel>,
    font: &Font,
    message: &[&[u8]],
) -> Result<bool> {
    check(renderer.clear_screen())?;
    check(renderer.display_message(message, font))?;
    screen.invalidate();
    screen.draw(renderer.display())?;

    loop {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if should_quit(key) {
                    return Ok(false);
                }
                if key_to_button(key.code) == Some(BUTTON_ACTION) {
                    return Ok(true);
                }
            }
        }
    }
}
