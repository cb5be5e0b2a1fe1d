//! Cooperative host loop for one game screen
//!
//! One session owns one game state and drives it at display cadence: read
//! the last-known tilt, tick, yield ~16 ms, repeat until the run ends. The
//! finished score is committed to the persisted leaderboard exactly once per
//! session; "play again" resets the state and re-arms the commit.

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::consts::{FRAME_INTERVAL_MS, TICK_DT};
use crate::leaderboard::Leaderboard;
use crate::persistence::KeyValueStore;
use crate::sim::{CatcherState, GameStatus, PongState, Surface, TickInput};
use crate::tilt::TiltSignal;

/// A tilt-driven game a session can host
pub trait TiltGame {
    /// Advance one frame; `dt` is the measured frame time in seconds
    fn tick(&mut self, input: &TickInput, surface: Surface, dt: f32);
    fn status(&self) -> GameStatus;
    fn score(&self) -> u32;
    /// Return to the initial state: score 0, awaiting surface dimensions
    fn reset(&mut self);
}

impl TiltGame for PongState {
    fn tick(&mut self, input: &TickInput, surface: Surface, _dt: f32) {
        // Pong uses a fixed display step, not measured time
        PongState::tick(self, input, surface);
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn reset(&mut self) {
        PongState::reset(self);
    }
}

impl TiltGame for CatcherState {
    fn tick(&mut self, input: &TickInput, surface: Surface, dt: f32) {
        CatcherState::tick(self, input, surface, dt);
    }

    fn status(&self) -> GameStatus {
        self.status
    }

    fn score(&self) -> u32 {
        self.score
    }

    fn reset(&mut self) {
        CatcherState::reset(self);
    }
}

/// Host loop around a single game state
pub struct Session<G: TiltGame, S: KeyValueStore> {
    game: G,
    tilt: Arc<TiltSignal>,
    store: S,
    surface: Surface,
    pause_requested: bool,
    score_recorded: bool,
}

impl<G: TiltGame, S: KeyValueStore> Session<G, S> {
    pub fn new(game: G, tilt: Arc<TiltSignal>, store: S) -> Self {
        Self {
            game,
            tilt,
            store,
            surface: Surface::default(),
            pause_requested: false,
            score_recorded: false,
        }
    }

    /// Push the current drawable dimensions from the render layer
    pub fn set_surface(&mut self, width: f32, height: f32) {
        self.surface = Surface::new(width, height);
    }

    /// Request a pause toggle on the next frame (one-shot)
    pub fn request_pause(&mut self) {
        self.pause_requested = true;
    }

    pub fn game(&self) -> &G {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut G {
        &mut self.game
    }

    /// Current persisted leaderboard
    pub fn leaderboard(&self) -> Leaderboard {
        Leaderboard::load(&self.store)
    }

    /// Advance one frame
    pub fn step(&mut self) {
        let input = TickInput {
            tilt: self.tilt.get(),
            pause: std::mem::take(&mut self.pause_requested),
        };
        let was_over = self.game.status() == GameStatus::GameOver;
        self.game.tick(&input, self.surface, TICK_DT);
        if !was_over && self.game.status() == GameStatus::GameOver {
            self.commit_score();
        }
    }

    /// Run at display cadence until the game ends
    pub fn run(&mut self) {
        while self.game.status() != GameStatus::GameOver {
            self.step();
            thread::sleep(Duration::from_millis(FRAME_INTERVAL_MS));
        }
    }

    /// Reset the game for a fresh round and re-arm score recording
    pub fn play_again(&mut self) {
        self.game.reset();
        self.score_recorded = false;
        log::info!("session reset for a new round");
    }

    /// Record the finished score, once per session
    fn commit_score(&mut self) {
        if self.score_recorded {
            return;
        }
        self.score_recorded = true;

        let score = self.game.score();
        let mut board = Leaderboard::load(&self.store);
        if board.record(score) {
            if let Err(e) = board.save(&mut self.store) {
                log::warn!("failed to persist leaderboard: {}", e);
            } else {
                log::info!("recorded score {} (top: {:?})", score, board.top_score());
            }
        } else {
            log::info!("score {} did not make the leaderboard", score);
        }
    }
}
