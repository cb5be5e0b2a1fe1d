//! Collision predicates for the per-frame update
//!
//! All checks are pure functions over well-formed floats; there are no error
//! conditions. Wall bounce is evaluated independently of (and before) the
//! paddle test, and the paddle test reads the pre-bounce vertical velocity:
//! both orderings are part of the observable behavior and must hold.

use glam::Vec2;

use super::rect::Rect;

/// Which paddle a hit test is against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddleSide {
    Top,
    Bottom,
}

/// Whether the ball's horizontal velocity sign must flip this tick
///
/// True when the ball center, inset by its radius, has crossed either
/// vertical screen edge.
#[inline]
pub fn wall_bounce(ball_x: f32, radius: f32, surface_width: f32) -> bool {
    ball_x < radius || ball_x > surface_width - radius
}

/// Paddle collision test
///
/// A hit requires all three of:
/// - the ball's leading vertical edge lies within the paddle's band,
/// - the vertical velocity is directed toward that paddle,
/// - the ball center is strictly inside the paddle's horizontal span.
pub fn paddle_hit(ball_pos: Vec2, radius: f32, vel_y: f32, paddle: &Rect, side: PaddleSide) -> bool {
    let in_band = match side {
        PaddleSide::Top => ball_pos.y - radius < paddle.bottom && ball_pos.y + radius > paddle.top,
        PaddleSide::Bottom => {
            ball_pos.y + radius > paddle.top && ball_pos.y - radius < paddle.bottom
        }
    };
    let inward = match side {
        PaddleSide::Top => vel_y < 0.0,
        PaddleSide::Bottom => vel_y > 0.0,
    };
    in_band && inward && paddle.spans_x(ball_pos.x)
}

/// Whether the ball has gone past a paddle row while moving toward it
///
/// Evaluated only when no paddle hit occurred this tick; a true result ends
/// the run.
#[inline]
pub fn missed_paddle(ball_y: f32, vel_y: f32, top_row_y: f32, bottom_row_y: f32) -> bool {
    (ball_y < top_row_y && vel_y < 0.0) || (ball_y > bottom_row_y && vel_y > 0.0)
}

/// Axis-aligned overlap between the basket rectangle and a shape's bbox
#[inline]
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.overlaps(b)
}
