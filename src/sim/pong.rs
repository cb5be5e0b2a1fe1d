//! PongAlone: a solo pong against two mirrored paddles
//!
//! Both paddles share one x-coordinate driven by the tilt scalar. The ball
//! advances by a fixed display step per tick (no delta scaling in this
//! variant), wall bounces flip the horizontal velocity, paddle bounces invert
//! and amplify the vertical velocity, and a miss ends the run.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{PaddleSide, missed_paddle, paddle_hit, wall_bounce};
use super::rect::Rect;
use super::{GameStatus, Surface, TickInput};
use crate::consts::WHITE;
use crate::tuning::PongTuning;

/// A ball entity, replaced wholesale each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: u32,
}

/// A paddle: center position and full extents
///
/// The y-coordinate is fixed once warm-up has placed the paddle on its row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

impl Paddle {
    /// The paddle's rectangle from its center and half extents
    pub fn rect(&self) -> Rect {
        Rect::centered(self.pos, self.width, self.height)
    }

    /// Clamp an x-coordinate so the paddle's visible extent stays on screen
    #[inline]
    pub fn clamp_x(x: f32, width: f32, surface_width: f32) -> f32 {
        x.clamp(width / 2.0, surface_width - width / 2.0)
    }
}

/// Complete pong game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PongState {
    pub ball: Ball,
    pub paddle_top: Paddle,
    pub paddle_bottom: Paddle,
    /// Non-negative, monotone while Playing, frozen at GameOver
    pub score: u32,
    pub status: GameStatus,
    tuning: PongTuning,
}

impl PongState {
    /// Create a fresh state awaiting surface dimensions
    pub fn new(tuning: PongTuning) -> Self {
        let paddle = Paddle {
            pos: Vec2::ZERO,
            width: tuning.paddle_width,
            height: tuning.paddle_height,
            color: WHITE,
        };
        Self {
            ball: Ball {
                pos: Vec2::ZERO,
                vel: Vec2::splat(tuning.ball_speed),
                radius: tuning.ball_radius,
                color: WHITE,
            },
            paddle_top: paddle,
            paddle_bottom: paddle,
            score: 0,
            status: GameStatus::Initializing,
            tuning,
        }
    }

    /// Place entities once real surface dimensions are known
    fn warm_up(&mut self, surface: Surface) {
        let center = Vec2::new(surface.width / 2.0, surface.height / 2.0);
        self.ball.pos = center;
        self.paddle_top.pos = Vec2::new(center.x, surface.height * self.tuning.top_row);
        self.paddle_bottom.pos = Vec2::new(center.x, surface.height * self.tuning.bottom_row);
        self.status = GameStatus::Playing;
        log::info!(
            "pong warmed up: surface {}x{}",
            surface.width,
            surface.height
        );
    }

    /// Advance by one display frame
    ///
    /// The pong variant ignores measured delta time: one call is one fixed
    /// display step.
    pub fn tick(&mut self, input: &TickInput, surface: Surface) {
        if input.pause {
            match self.status {
                GameStatus::Playing => {
                    self.status = GameStatus::Paused;
                    return;
                }
                GameStatus::Paused => self.status = GameStatus::Playing,
                _ => {}
            }
        }

        match self.status {
            GameStatus::Initializing => {
                if surface.is_ready() {
                    self.warm_up(surface);
                }
                return;
            }
            GameStatus::Paused | GameStatus::GameOver => return,
            GameStatus::Playing => {}
        }
        if !surface.is_ready() {
            return;
        }

        let paddle_x = Paddle::clamp_x(
            self.paddle_bottom.pos.x + input.tilt,
            self.paddle_bottom.width,
            surface.width,
        );

        let new_pos = self.ball.pos + self.ball.vel;
        let mut vel = self.ball.vel;

        // Wall bounce is independent of the paddle test below
        if wall_bounce(new_pos.x, self.ball.radius, surface.width) {
            vel.x = -vel.x;
        }

        let top_rect = Rect::centered(
            Vec2::new(paddle_x, self.paddle_top.pos.y),
            self.paddle_top.width,
            self.paddle_top.height,
        );
        let bottom_rect = Rect::centered(
            Vec2::new(paddle_x, self.paddle_bottom.pos.y),
            self.paddle_bottom.width,
            self.paddle_bottom.height,
        );

        // The paddle test reads the pre-bounce vertical velocity sign
        let vy = self.ball.vel.y;
        let hit = paddle_hit(new_pos, self.ball.radius, vy, &top_rect, PaddleSide::Top)
            || paddle_hit(
                new_pos,
                self.ball.radius,
                vy,
                &bottom_rect,
                PaddleSide::Bottom,
            );

        if hit {
            vel.y *= -self.tuning.bounce_accel;
            vel.x *= self.tuning.bounce_accel;
            self.score += 1;
        } else if missed_paddle(new_pos.y, vy, self.paddle_top.pos.y, self.paddle_bottom.pos.y) {
            self.status = GameStatus::GameOver;
            log::info!("pong over: score {}", self.score);
        }

        self.ball.pos = new_pos;
        self.ball.vel = vel;
        self.paddle_top.pos.x = paddle_x;
        self.paddle_bottom.pos.x = paddle_x;
    }

    /// Reset for a new round: score 0, geometry re-derived on the next tick
    pub fn reset(&mut self) {
        *self = Self::new(self.tuning);
    }
}
