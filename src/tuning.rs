//! Data-driven game balance per variant
//!
//! Defaults carry the shipped constants; hosts may deserialize overrides.

use serde::{Deserialize, Serialize};

/// Pong balance knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PongTuning {
    /// Tilt gain applied producer-side to the raw sensor x-axis
    pub tilt_gain: f32,
    /// Per-tick display step of the ball, both axes
    pub ball_speed: f32,
    pub ball_radius: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Paddle rows as fractions of surface height
    pub top_row: f32,
    pub bottom_row: f32,
    /// Velocity amplification on paddle bounce
    pub bounce_accel: f32,
}

impl Default for PongTuning {
    fn default() -> Self {
        Self {
            tilt_gain: crate::consts::PONG_TILT_GAIN,
            ball_speed: 8.0,
            ball_radius: 30.0,
            paddle_width: 250.0,
            paddle_height: 40.0,
            top_row: 0.10,
            bottom_row: 0.90,
            bounce_accel: 1.1,
        }
    }
}

/// Catcher balance knobs
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CatcherTuning {
    /// Tilt gain applied producer-side to the raw sensor x-axis
    pub tilt_gain: f32,
    /// Per-frame spawn probability once the surface is ready
    pub spawn_chance: f32,
    /// Half-extent bounds for spawned shapes
    pub min_size: f32,
    pub max_size: f32,
    /// Fall-speed bounds for spawned shapes
    pub min_fall_speed: f32,
    pub max_fall_speed: f32,
    /// Fall advances by `fall_speed * dt * fall_scale` each frame
    pub fall_scale: f32,
    pub basket_width: f32,
    pub basket_height: f32,
    /// Basket row as a fraction of surface height
    pub basket_row: f32,
}

impl Default for CatcherTuning {
    fn default() -> Self {
        Self {
            tilt_gain: crate::consts::CATCHER_TILT_GAIN,
            spawn_chance: 0.02,
            min_size: 30.0,
            max_size: 60.0,
            min_fall_speed: 5.0,
            max_fall_speed: 15.0,
            fall_scale: 20.0,
            basket_width: 250.0,
            basket_height: 60.0,
            basket_row: 0.92,
        }
    }
}
