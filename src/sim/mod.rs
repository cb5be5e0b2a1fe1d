//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - No rendering or platform dependencies
//!
//! Each game state is replaced wholesale once per tick; the host reads the
//! resulting value and never mutates it between ticks.

pub mod catcher;
pub mod collision;
pub mod pong;
pub mod rect;

pub use catcher::{Basket, CatcherState, Shape, ShapeKind};
pub use collision::{PaddleSide, missed_paddle, paddle_hit, rects_overlap, wall_bounce};
pub use pong::{Ball, Paddle, PongState};
pub use rect::Rect;

use serde::{Deserialize, Serialize};

/// Discrete game lifecycle state
///
/// `Initializing` covers the window before the render surface has reported
/// its dimensions; entities cannot be positioned until then. The first tick
/// with a ready surface performs warm-up and moves to `Playing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for the render surface to report nonzero dimensions
    Initializing,
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (terminal)
    GameOver,
}

/// Current drawable surface dimensions, as reported by the host each frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Surface {
    pub width: f32,
    pub height: f32,
}

impl Surface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Whether the surface has reported real dimensions yet
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Last-known tilt scalar (sign-inverted, gain already applied)
    pub tilt: f32,
    /// Pause toggle
    pub pause: bool,
}
