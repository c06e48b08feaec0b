//! Data-driven game balance
//!
//! Physics constants are per-frame quantities: velocities are pixels per
//! frame, accelerations are pixels per frame squared, angles are degrees.

use serde::{Deserialize, Serialize};

/// Physics and pacing knobs for a game session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Simulation frames per second
    pub fps: u32,
    /// Vertical velocity set by a jump (negative is up)
    pub jump_velocity: f32,
    /// Cap on downward velocity
    pub max_fall_speed: f32,
    /// Downward acceleration applied each frame
    pub gravity: f32,
    /// Horizontal velocity of pipes, finish marker and ground
    pub pipe_speed: f32,
    /// Bird angle while climbing
    pub climb_angle: f32,
    /// Bird angle limit while diving
    pub dive_angle: f32,
    /// Angle added per falling frame
    pub tilt_step: f32,
    /// Minimum time in `Over` before input restarts the run
    pub restart_cooldown_ms: f64,
    /// Ground strip offset at which it wraps back to zero
    pub ground_wrap: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            fps: 40,
            jump_velocity: -10.0,
            max_fall_speed: 10.0,
            gravity: 1.0,
            pipe_speed: -2.0,
            climb_angle: -15.0,
            dive_angle: 70.0,
            tilt_step: 4.0,
            restart_cooldown_ms: 1000.0,
            ground_wrap: 23.0,
        }
    }
}

impl Tuning {
    /// Milliseconds between frames
    pub fn frame_interval_ms(&self) -> i32 {
        (1000 / self.fps.max(1)) as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_interval() {
        assert_eq!(Tuning::default().frame_interval_ms(), 25);
        let zero = Tuning {
            fps: 0,
            ..Default::default()
        };
        assert_eq!(zero.frame_interval_ms(), 1000);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{"gravity": 0.5}"#).unwrap();
        assert_eq!(tuning.gravity, 0.5);
        assert_eq!(tuning.max_fall_speed, 10.0);
        assert_eq!(tuning.fps, 40);
    }
}
