//! Rendering module
//!
//! `scene` builds a backend-independent draw list from the game state;
//! `canvas` paints it with the browser's 2D canvas API.

#[cfg(target_arch = "wasm32")]
pub mod canvas;
pub mod scene;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
pub use scene::{DrawCmd, SpriteImage, TextAlign, compose};
