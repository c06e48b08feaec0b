//! Flappy Board - Flappy Bird in the browser with an online leaderboard
//!
//! Core modules:
//! - `sim`: Frame-stepped simulation (physics, collisions, game phases)
//! - `leaderboard`: Score store contract, clients, and run reporting
//! - `renderer`: Scene composition and the 2D canvas backend
//! - `ui`: Name entry and leaderboard presentation
//! - `tuning`: Data-driven physics constants

pub mod leaderboard;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use settings::Settings;
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Play field size in canvas pixels
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;

    /// Sprite bounding boxes (match the sprite sheet images)
    pub const BIRD_SIZE: Vec2 = Vec2::new(36.0, 26.0);
    pub const PIPE_SIZE: Vec2 = Vec2::new(52.0, 400.0);
    pub const FINISH_SIZE: Vec2 = Vec2::new(40.0, FIELD_HEIGHT);

    /// Height of the scrolling ground strip
    pub const GROUND_HEIGHT: f32 = 24.0;

    /// Leaderboard length
    pub const LEADERBOARD_SIZE: usize = 10;
}
