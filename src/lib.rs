//! Loopstrip is the core engine of an infinite looping, auto-advancing,
//! responsively-sized image carousel, expressed as a host-agnostic state
//! machine.
//!
//! # Engine overview
//!
//! 1. **Track**: `&[Item] -> Track`, three concatenated copies (3xN slots),
//!    so every reachable center position has a real element to render.
//! 2. **Position**: `Idle -> Advancing -> (Recentering) -> Idle`, the single
//!    authoritative center position, with the two-tick silent re-center that
//!    makes the wraparound invisible.
//! 3. **Layout/View**: pure projection of `(Track, center, viewport)` into
//!    per-slot [`SlotFrame`] descriptors for the rendering layer.
//! 4. **Autoplay/Engine**: the driver. Phase-aligned timer decisions, pause
//!    on pointer hover, deferred resize, and the transition watchdog.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Host-driven time**: every wait is a host callback; `now` is an
//!   explicit millisecond parameter, so the engine is deterministic and
//!   simulable (see the `loopstrip simulate` binary).
//! - **One transition in flight**: `advance()` is refused until the previous
//!   move has settled, so the center can never race ahead of the visuals.
#![forbid(unsafe_code)]

pub mod autoplay;
pub mod config;
pub mod ease;
pub mod engine;
pub mod error;
pub mod layout;
pub mod position;
pub mod track;
pub mod view;

pub use autoplay::Autoplay;
pub use config::CarouselConfig;
pub use ease::Ease;
pub use engine::{CarouselEngine, EngineUpdate};
pub use error::{LoopstripError, LoopstripResult};
pub use layout::{Breakpoint, breakpoint, card_height, card_width, x_offset};
pub use position::{Phase, PositionController, RECENTER_TICKS};
pub use track::{Item, Track, validate_items};
pub use view::{Elevation, SlotFrame, project};
