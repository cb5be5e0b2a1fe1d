//! Tilt Arcade - tilt-controlled single-screen arcade games
//!
//! Core modules:
//! - `sim`: Deterministic simulation for both game variants (pong, catcher)
//! - `tilt`: Shared tilt-scalar channel between sensor producer and tick loop
//! - `session`: Fixed-cadence host loop with leaderboard commit on game over
//! - `leaderboard`: Persisted top-10 score list
//! - `persistence`: Named key-value store abstraction
//! - `tuning`: Data-driven per-variant constants

pub mod leaderboard;
pub mod persistence;
pub mod session;
pub mod sim;
pub mod tilt;
pub mod tuning;

pub use leaderboard::Leaderboard;
pub use session::{Session, TiltGame};
pub use sim::{CatcherState, GameStatus, PongState, Surface, TickInput};
pub use tilt::TiltSignal;
pub use tuning::{CatcherTuning, PongTuning};

/// Game configuration constants
pub mod consts {
    /// Nominal frame interval for the cooperative loop (~60 Hz)
    pub const FRAME_INTERVAL_MS: u64 = 16;
    /// Fixed timestep handed to the simulation each frame, in seconds
    pub const TICK_DT: f32 = FRAME_INTERVAL_MS as f32 / 1000.0;

    /// Tilt gain per variant (sensor x-axis is sign-inverted and scaled)
    pub const PONG_TILT_GAIN: f32 = 5.0;
    pub const CATCHER_TILT_GAIN: f32 = 2.5;

    /// Maximum leaderboard entries
    pub const MAX_SCORES: usize = 10;

    /// Packed 0xRRGGBB color for entity defaults
    pub const WHITE: u32 = 0xFF_FF_FF;
}
