//! monosprite - a tiny 2D sprite engine and monochrome-to-RGB565 render
//! pipeline for small square panels.
//!
//! The crate is split the way the hardware is:
//!
//! - [`types`]: packed wire formats (flags, velocity, addresses, status)
//! - [`core`]: the engine - sprite storage and the move/collide/repack tick
//! - [`hal`]: collaborator traits for the display, audio, buttons, and
//!   asset lookups
//! - [`render`]: coordinate mapping and the 1-bit-to-color pixel pipeline
//! - [`assets`]: the built-in glyph set and demo art
//! - [`term`]: a terminal-emulated panel and input adapters for host play
//!
//! The engine never allocates: callers own the sprite array and the engine
//! borrows it for its lifetime. Every operation reports through the shared
//! OR-able status byte.
//!
//! # Example
//!
//! ```
//! use monosprite::core::{Engine, Sprite};
//! use monosprite::types::{ColliderPair, SpriteAddress, SpriteFlags};
//!
//! let mut slots = [Sprite::default(); 8];
//! slots[1] = Sprite::new(SpriteAddress::new(10, 10), 0);
//! slots[1].flags |= SpriteFlags::COLLIDES;
//!
//! let engine = Engine::new(8, 0, &mut slots).expect("backing covers capacity");
//!
//! let mut pair = ColliderPair::new();
//! let status = engine.detect_collisions(0, &mut pair);
//! assert!(status.is_ok()); // a lone sprite collides with nothing
//! ```

pub mod assets;
pub mod core;
pub mod hal;
pub mod render;
pub mod term;
pub mod types;
