//! Frame-stepped simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One fixed-size step per frame
//! - Wall-clock time passed in by the caller
//! - No rendering, network or platform dependencies

pub mod collision;
pub mod layout;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use layout::{CLASSIC_LAYOUT, FINISH_X, PipePair};
pub use state::{GameEvent, GamePhase, GameState, Sprite, SpriteKind};
pub use tick::{TickInput, handle_input, tick};
