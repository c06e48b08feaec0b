//! Fixed cadence simulation tick
//!
//! One call advances the session by one frame. Wall-clock time is only used
//! for the restart cooldown and is passed in by the host.

use super::state::{GamePhase, GameState};
use crate::consts::FIELD_HEIGHT;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Key, click or touch since the last tick
    pub jump: bool,
}

/// Apply one player input. Returns true if it changed anything.
pub fn handle_input(state: &mut GameState, now_ms: f64) -> bool {
    match state.phase {
        GamePhase::Prestart => {
            // The level scrolled past a hovering bird; every run starts fresh
            state.reset();
            state.start_run();
            log::info!("Run {} started", state.run_id);
            true
        }
        GamePhase::Running => {
            state.bird.vel.y = state.tuning.jump_velocity;
            true
        }
        GamePhase::Over => {
            if !state.can_restart(now_ms) {
                return false;
            }
            state.reset();
            state.start_run();
            log::info!("Run {} started (restart)", state.run_id);
            true
        }
    }
}

/// Advance the game state by one frame
pub fn tick(state: &mut GameState, input: &TickInput, now_ms: f64) {
    if input.jump {
        handle_input(state, now_ms);
    }

    state.frame += 1;
    state.bird.advance();

    match state.phase {
        GamePhase::Prestart => {
            scroll_world(state);
        }

        GamePhase::Running => {
            scroll_world(state);
            tilt_bird(state);
            apply_gravity(state);

            let bird = state.bird.bounds();
            if bird.min.y < 0.0 || bird.max().y > FIELD_HEIGHT {
                state.bird.vel.y = 0.0;
                state.end_run(now_ms);
            } else if state.pipes.iter().any(|p| state.bird.touches(p)) {
                state.end_run(now_ms);
            }
        }

        GamePhase::Over => {
            // Pipes stay put, the bird drops to the floor
            apply_gravity(state);
            let floor = FIELD_HEIGHT - state.bird.size.y;
            if state.bird.pos.y >= floor {
                state.bird.pos.y = floor;
                state.bird.vel.y = 0.0;
            }
        }
    }
}

/// Move pipes, finish marker and ground strip at the pipe speed
fn scroll_world(state: &mut GameState) {
    for pipe in &mut state.pipes {
        pipe.advance();
    }
    state.ground_offset += state.tuning.pipe_speed;
    if state.ground_offset < -state.tuning.ground_wrap {
        state.ground_offset = 0.0;
    }
}

fn tilt_bird(state: &mut GameState) {
    let t = &state.tuning;
    let bird = &mut state.bird;
    if bird.vel.y < 0.0 {
        bird.angle = t.climb_angle;
    } else if bird.angle < t.dive_angle {
        bird.angle = (bird.angle + t.tilt_step).min(t.dive_angle);
    }
}

fn apply_gravity(state: &mut GameState) {
    let t = &state.tuning;
    let vel = &mut state.bird.vel.y;
    *vel = (*vel + t.gravity).min(t.max_fall_speed);
}
