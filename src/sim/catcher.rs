//! ShapeCatcher: catch falling shapes of the announced kind
//!
//! Shapes spawn stochastically above the visible area and fall with measured
//! delta time. Every shape touching the basket is removed; only those
//! matching the current target kind score, and a successful catch rolls a new
//! target. Shapes that leave the bottom of the surface vanish silently.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::rects_overlap;
use super::rect::Rect;
use super::{GameStatus, Surface, TickInput};
use crate::consts::WHITE;
use crate::tuning::CatcherTuning;

/// Shape categories a falling shape can take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShapeKind {
    Circle,
    Square,
    Star,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Star];

    /// Display name used in the instruction line
    pub fn name(&self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::Square => "Square",
            ShapeKind::Star => "Star",
        }
    }
}

/// Colors the spawner draws from
const PALETTE: [u32; 6] = [
    0xE5_3935, // red
    0xFB_8C00, // orange
    0xFD_D835, // yellow
    0x43_A047, // green
    0x1E_88E5, // blue
    0x8E_24AA, // purple
];

/// A falling shape entity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Shape {
    pub id: u32,
    pub kind: ShapeKind,
    pub pos: Vec2,
    /// Half extent of the bounding box
    pub size: f32,
    pub color: u32,
    pub fall_speed: f32,
}

impl Shape {
    /// Bounding box `[x-size, x+size] x [y-size, y+size]`
    pub fn bbox(&self) -> Rect {
        Rect::around(self.pos, self.size)
    }
}

/// The player's basket, horizontally clamped to the surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Basket {
    pub x: f32,
    /// Row the basket sits on; fixed once warm-up has placed it
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub color: u32,
}

impl Basket {
    pub fn rect(&self) -> Rect {
        Rect::centered(Vec2::new(self.x, self.y), self.width, self.height)
    }
}

fn skipped_rng() -> Pcg32 {
    Pcg32::seed_from_u64(0)
}

/// Complete catcher game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatcherState {
    pub shapes: Vec<Shape>,
    pub basket: Basket,
    /// Non-negative, monotone while Playing
    pub score: u32,
    pub status: GameStatus,
    /// Shape category currently worth scoring
    pub target: ShapeKind,
    /// Player-facing line naming the target
    pub instruction: String,
    /// Run seed for reproducibility
    seed: u64,
    #[serde(skip, default = "skipped_rng")]
    rng: Pcg32,
    next_id: u32,
    tuning: CatcherTuning,
}

impl CatcherState {
    /// Create a fresh state awaiting surface dimensions
    pub fn new(seed: u64, tuning: CatcherTuning) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let target = ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())];
        Self {
            shapes: Vec::new(),
            basket: Basket {
                x: 0.0,
                y: 0.0,
                width: tuning.basket_width,
                height: tuning.basket_height,
                color: WHITE,
            },
            score: 0,
            status: GameStatus::Initializing,
            target,
            instruction: instruction_for(target),
            seed,
            rng,
            next_id: 1,
            tuning,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Center the basket once real surface dimensions are known
    fn warm_up(&mut self, surface: Surface) {
        self.basket.x = surface.width / 2.0;
        self.basket.y = surface.height * self.tuning.basket_row;
        self.status = GameStatus::Playing;
        log::info!(
            "catcher warmed up: surface {}x{}, target {}",
            surface.width,
            surface.height,
            self.target.name()
        );
    }

    /// Spawn one shape just above the visible area
    fn spawn_shape(&mut self, surface: Surface) {
        let kind = ShapeKind::ALL[self.rng.random_range(0..ShapeKind::ALL.len())];
        let size = self
            .rng
            .random_range(self.tuning.min_size..=self.tuning.max_size);
        let shape = Shape {
            id: self.next_entity_id(),
            kind,
            pos: Vec2::new(self.rng.random_range(size..=surface.width - size), -size),
            size,
            color: PALETTE[self.rng.random_range(0..PALETTE.len())],
            fall_speed: self
                .rng
                .random_range(self.tuning.min_fall_speed..=self.tuning.max_fall_speed),
        };
        self.shapes.push(shape);
    }

    /// Pick a new target from the kinds other than the current one
    fn retarget(&mut self) {
        let others: Vec<ShapeKind> = ShapeKind::ALL
            .iter()
            .copied()
            .filter(|k| *k != self.target)
            .collect();
        self.target = others[self.rng.random_range(0..others.len())];
        self.instruction = instruction_for(self.target);
        log::debug!("new target: {}", self.target.name());
    }

    /// Advance by one frame with measured delta time in seconds
    pub fn tick(&mut self, input: &TickInput, surface: Surface, dt: f32) {
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

        self.basket.x = (self.basket.x + input.tilt).clamp(
            self.basket.width / 2.0,
            surface.width - self.basket.width / 2.0,
        );

        if self.rng.random::<f32>() < self.tuning.spawn_chance {
            self.spawn_shape(surface);
        }

        let fall_scale = self.tuning.fall_scale;
        for shape in &mut self.shapes {
            shape.pos.y += shape.fall_speed * dt * fall_scale;
        }

        // Every overlapping shape is caught; only target matches score.
        // Off-screen shapes are dropped with no penalty.
        let basket_rect = self.basket.rect();
        let target = self.target;
        let mut caught_matches = 0u32;
        self.shapes.retain(|shape| {
            if rects_overlap(&basket_rect, &shape.bbox()) {
                if shape.kind == target {
                    caught_matches += 1;
                }
                return false;
            }
            shape.pos.y - shape.size <= surface.height
        });

        if caught_matches > 0 {
            self.score += caught_matches;
            self.retarget();
        }
    }

    /// Reset for a new round: score 0, geometry re-derived on the next tick
    pub fn reset(&mut self) {
        *self = Self::new(self.seed.wrapping_add(1), self.tuning);
    }
}

fn instruction_for(target: ShapeKind) -> String {
    format!("Catch the {}!", target.name())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TICK_DT;
    use proptest::prelude::*;

    const SURFACE: Surface = Surface {
        width: 1080.0,
        height: 1920.0,
    };

    fn warmed_state() -> CatcherState {
        let mut state = CatcherState::new(7, CatcherTuning::default());
        state.tick(&TickInput::default(), SURFACE, TICK_DT);
        assert_eq!(state.status, GameStatus::Playing);
        state
    }

    fn shape_on_basket(state: &CatcherState, kind: ShapeKind) -> Shape {
        Shape {
            id: 9999,
            kind,
            pos: Vec2::new(state.basket.x, state.basket.y),
            size: 40.0,
            color: WHITE,
            fall_speed: 0.0,
        }
    }

    #[test]
    fn test_warm_up_centers_basket() {
        let state = warmed_state();
        assert_eq!(state.basket.x, SURFACE.width / 2.0);
        assert!(state.basket.y > 0.0);
    }

    #[test]
    fn test_stays_initializing_without_surface() {
        let mut state = CatcherState::new(7, CatcherTuning::default());
        for _ in 0..10 {
            state.tick(&TickInput::default(), Surface::default(), TICK_DT);
        }
        assert_eq!(state.status, GameStatus::Initializing);
        assert!(state.shapes.is_empty());
    }

    #[test]
    fn test_shapes_eventually_spawn_and_fall() {
        let mut state = warmed_state();
        for _ in 0..1000 {
            state.tick(&TickInput::default(), SURFACE, TICK_DT);
        }
        assert!(state.next_id > 1, "spawner never fired in 1000 frames");
    }

    #[test]
    fn test_fall_is_delta_scaled() {
        let mut state = warmed_state();
        let mut shape = shape_on_basket(&state, state.target);
        shape.pos = Vec2::new(50.0, 100.0);
        shape.fall_speed = 3.0;
        state.shapes.push(shape);
        let dt = 0.05;
        let y_before = state.shapes[0].pos.y;
        // Pin the spawner out of the way by checking only our shape
        state.tick(&TickInput::default(), SURFACE, dt);
        let ours = state.shapes.iter().find(|s| s.id == 9999).unwrap();
        assert!((ours.pos.y - (y_before + 3.0 * dt * 20.0)).abs() < 1e-4);
    }

    #[test]
    fn test_catching_target_scores_and_retargets() {
        let mut state = warmed_state();
        let old_target = state.target;
        state.shapes.push(shape_on_basket(&state, old_target));
        state.tick(&TickInput::default(), SURFACE, TICK_DT);
        assert_eq!(state.score, 1);
        assert!(state.shapes.iter().all(|s| s.id != 9999));
        assert_ne!(state.target, old_target);
        assert!(state.instruction.contains(state.target.name()));
    }

    #[test]
    fn test_catching_non_target_removes_without_score() {
        let mut state = warmed_state();
        let old_target = state.target;
        let other = ShapeKind::ALL
            .iter()
            .copied()
            .find(|k| *k != old_target)
            .unwrap();
        state.shapes.push(shape_on_basket(&state, other));
        state.tick(&TickInput::default(), SURFACE, TICK_DT);
        assert_eq!(state.score, 0);
        assert!(state.shapes.iter().all(|s| s.id != 9999));
        assert_eq!(state.target, old_target);
    }

    #[test]
    fn test_offscreen_shape_dropped_without_penalty() {
        let mut state = warmed_state();
        let mut shape = shape_on_basket(&state, state.target);
        // Fully below the surface bottom
        shape.pos = Vec2::new(50.0, SURFACE.height + shape.size + 1.0);
        state.shapes.push(shape);
        state.tick(&TickInput::default(), SURFACE, TICK_DT);
        assert!(state.shapes.iter().all(|s| s.id != 9999));
        assert_eq!(state.score, 0);
    }

    #[test]
    fn test_pause_freezes_world() {
        let mut state = warmed_state();
        let mut shape = shape_on_basket(&state, state.target);
        shape.pos = Vec2::new(50.0, 100.0);
        shape.fall_speed = 3.0;
        state.shapes.push(shape);
        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        state.tick(&pause, SURFACE, TICK_DT);
        assert_eq!(state.status, GameStatus::Paused);
        state.tick(&TickInput::default(), SURFACE, TICK_DT);
        assert_eq!(state.shapes.last().unwrap().pos.y, 100.0);
    }

    #[test]
    fn test_same_seed_same_run() {
        let mut a = CatcherState::new(42, CatcherTuning::default());
        let mut b = CatcherState::new(42, CatcherTuning::default());
        for i in 0..500 {
            let input = TickInput {
                tilt: (i as f32 * 0.1).sin() * 10.0,
                pause: false,
            };
            a.tick(&input, SURFACE, TICK_DT);
            b.tick(&input, SURFACE, TICK_DT);
        }
        assert_eq!(a.shapes, b.shapes);
        assert_eq!(a.score, b.score);
        assert_eq!(a.target, b.target);
    }

    proptest! {
        #[test]
        fn prop_basket_always_clamped(tilt in -1.0e4f32..1.0e4, start_x in 0.0f32..1080.0) {
            let mut state = warmed_state();
            state.basket.x = start_x;
            state.tick(&TickInput { tilt, pause: false }, SURFACE, TICK_DT);
            let half = state.basket.width / 2.0;
            prop_assert!(state.basket.x >= half);
            prop_assert!(state.basket.x <= SURFACE.width - half);
        }
    }
}
