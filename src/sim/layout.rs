//! Level layout: pipe pairs and the finish marker

use glam::Vec2;

use super::state::{Sprite, SpriteKind};
use crate::consts::PIPE_SIZE;

/// A pipe pair's placement, fixed for the lifetime of the pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipePair {
    /// Left edge of both segments
    pub x: f32,
    /// Y of the gap's top edge
    pub gap_top: f32,
    /// Vertical size of the gap
    pub gap_width: f32,
}

impl PipePair {
    pub const fn new(x: f32, gap_top: f32, gap_width: f32) -> Self {
        Self {
            x,
            gap_top,
            gap_width,
        }
    }

    /// Build the top and bottom segments, both moving at `speed`
    pub fn spawn(&self, speed: f32) -> [Sprite; 2] {
        let mut top = Sprite::new(
            SpriteKind::PipeTop,
            Vec2::new(self.x, self.gap_top - PIPE_SIZE.y),
            PIPE_SIZE,
        );
        top.vel.x = speed;

        let mut bottom = Sprite::new(
            SpriteKind::PipeBottom,
            Vec2::new(self.x, self.gap_top + self.gap_width),
            PIPE_SIZE,
        );
        bottom.vel.x = speed;
        bottom.flip_v = true;

        [top, bottom]
    }
}

/// The one and only level; gaps narrow toward the end
pub const CLASSIC_LAYOUT: [PipePair; 13] = [
    PipePair::new(500.0, 100.0, 140.0),
    PipePair::new(800.0, 50.0, 140.0),
    PipePair::new(1000.0, 250.0, 140.0),
    PipePair::new(1200.0, 150.0, 120.0),
    PipePair::new(1600.0, 100.0, 120.0),
    PipePair::new(1800.0, 150.0, 120.0),
    PipePair::new(2000.0, 200.0, 120.0),
    PipePair::new(2200.0, 250.0, 120.0),
    PipePair::new(2400.0, 30.0, 100.0),
    PipePair::new(2700.0, 300.0, 100.0),
    PipePair::new(3000.0, 100.0, 80.0),
    PipePair::new(3300.0, 250.0, 80.0),
    PipePair::new(3600.0, 50.0, 60.0),
];

/// X position of the finish marker
pub const FINISH_X: f32 = 3900.0;
