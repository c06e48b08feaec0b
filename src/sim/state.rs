//! Game state and core simulation types
//!
//! A `GameState` is one player's session. It owns every entity and is passed
//! explicitly to `tick` and the renderer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::layout::{CLASSIC_LAYOUT, FINISH_X};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first input
    Prestart,
    /// Active gameplay
    Running,
    /// Run ended; the bird drops to the floor
    Over,
}

/// What a sprite depicts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpriteKind {
    Bird,
    PipeTop,
    PipeBottom,
    Finish,
}

impl SpriteKind {
    /// Pipe segments count toward the score
    pub fn is_pipe(&self) -> bool {
        matches!(self, SpriteKind::PipeTop | SpriteKind::PipeBottom)
    }
}

/// A moving, drawable rectangle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprite {
    pub kind: SpriteKind,
    /// Top-left corner
    pub pos: Vec2,
    /// Pixels per frame
    pub vel: Vec2,
    /// Bounding box size
    pub size: Vec2,
    /// Rotation in degrees, clockwise
    pub angle: f32,
    pub visible: bool,
    pub flip_v: bool,
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(kind: SpriteKind, pos: Vec2, size: Vec2) -> Self {
        Self {
            kind,
            pos,
            vel: Vec2::ZERO,
            size,
            angle: 0.0,
            visible: true,
            flip_v: false,
            flip_h: false,
        }
    }

    /// Semi-implicit Euler step (one frame)
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    /// True if both sprites are visible and their boxes overlap
    pub fn touches(&self, other: &Sprite) -> bool {
        self.visible && other.visible && self.bounds().overlaps(&other.bounds())
    }
}

/// Something the host must react to, drained after each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A run began (first start or restart)
    RunStarted { run_id: u64 },
    /// A run ended with its final score
    RunEnded { run_id: u64, score: u32 },
}

/// One player's game session
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    pub phase: GamePhase,
    pub bird: Sprite,
    /// Pipe segments in pair order, then the finish marker
    pub pipes: Vec<Sprite>,
    /// Horizontal scroll of the ground strip
    pub ground_offset: f32,
    /// Timestamp (ms) of the last transition into `Over`
    pub over_since_ms: Option<f64>,
    /// Sequence number of the current (or last) run, 0 before the first
    pub run_id: u64,
    /// Score of the last completed run
    pub final_score: Option<u32>,
    /// Frames simulated this session
    pub frame: u64,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    pub fn new(tuning: Tuning) -> Self {
        let mut state = Self {
            tuning,
            phase: GamePhase::Prestart,
            bird: Sprite::new(SpriteKind::Bird, Self::bird_start(), BIRD_SIZE),
            pipes: Vec::new(),
            ground_offset: 0.0,
            over_since_ms: None,
            run_id: 0,
            final_score: None,
            frame: 0,
            events: Vec::new(),
        };
        state.spawn_layout();
        state
    }

    fn bird_start() -> Vec2 {
        Vec2::new(FIELD_WIDTH / 3.0, FIELD_HEIGHT / 2.0)
    }

    /// Replace all pipes with the fixed layout and finish marker
    pub fn spawn_layout(&mut self) {
        self.pipes.clear();
        for pair in CLASSIC_LAYOUT {
            self.pipes.extend(pair.spawn(self.tuning.pipe_speed));
        }
        let mut finish = Sprite::new(SpriteKind::Finish, Vec2::new(FINISH_X, 0.0), FINISH_SIZE);
        finish.vel.x = self.tuning.pipe_speed;
        self.pipes.push(finish);
    }

    /// Put the bird back at its start and rebuild the level
    pub fn reset(&mut self) {
        self.bird.pos.y = FIELD_HEIGHT / 2.0;
        self.bird.vel = Vec2::ZERO;
        self.bird.angle = 0.0;
        self.ground_offset = 0.0;
        self.spawn_layout();
    }

    /// Enter `Running` with a fresh run sequence number
    pub(crate) fn start_run(&mut self) {
        self.run_id += 1;
        self.phase = GamePhase::Running;
        self.final_score = None;
        self.events.push(GameEvent::RunStarted { run_id: self.run_id });
    }

    /// Enter `Over`, recording the score exactly once per run
    pub(crate) fn end_run(&mut self, now_ms: f64) {
        if self.phase != GamePhase::Running {
            return;
        }
        let score = self.score();
        self.phase = GamePhase::Over;
        self.over_since_ms = Some(now_ms);
        self.final_score = Some(score);
        log::debug!("Run {} ended with score {}", self.run_id, score);
        self.events.push(GameEvent::RunEnded {
            run_id: self.run_id,
            score,
        });
    }

    /// Half a point per pipe segment behind the bird, i.e. one per crossed pair
    pub fn score(&self) -> u32 {
        let behind = self
            .pipes
            .iter()
            .filter(|p| p.kind.is_pipe() && p.pos.x < self.bird.pos.x)
            .count() as u32;
        behind / 2
    }

    /// True once the restart cooldown has elapsed in `Over`
    pub fn can_restart(&self, now_ms: f64) -> bool {
        self.phase == GamePhase::Over
            && self
                .over_since_ms
                .is_none_or(|t| now_ms - t >= self.tuning.restart_cooldown_ms)
    }

    /// Take pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Tuning::default())
    }
}
