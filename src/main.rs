//! Tilt Arcade entry point
//!
//! Headless demo: runs a pong session to game over with a synthetic tilt
//! producer standing in for the accelerometer, then prints the persisted
//! leaderboard. Real hosts wire a render surface and a sensor instead.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use tilt_arcade::consts::PONG_TILT_GAIN;
use tilt_arcade::persistence::FileStore;
use tilt_arcade::sim::PongState;
use tilt_arcade::tuning::PongTuning;
use tilt_arcade::{Session, TiltGame, TiltSignal, leaderboard};

fn main() -> std::io::Result<()> {
    env_logger::init();
    log::info!("Tilt Arcade (headless demo) starting...");

    let root = std::env::temp_dir().join("tilt-arcade");
    let store = FileStore::open(&root, leaderboard::STORE_NAME)?;

    let tilt = TiltSignal::new();
    let producer = tilt.producer(PONG_TILT_GAIN);

    // Synthetic sensor: a slow sine sweep on the accelerometer x-axis,
    // delivered out-of-band like the real listener would be
    let stop = Arc::new(AtomicBool::new(false));
    let sensor = {
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut t = 0.0f32;
            while !stop.load(Ordering::Relaxed) {
                producer.report((t * 0.8).sin() * 1.5);
                t += 0.005;
                thread::sleep(Duration::from_millis(5));
            }
        })
    };

    let mut session = Session::new(PongState::new(PongTuning::default()), tilt, store);
    session.set_surface(1080.0, 1920.0);
    session.run();

    stop.store(true, Ordering::Relaxed);
    let _ = sensor.join();

    let score = session.game().score();
    log::info!("run over with score {}", score);

    println!("Final score: {}", score);
    println!("Leaderboard:");
    for (rank, entry) in session.leaderboard().scores().iter().enumerate() {
        println!("  {:>2}. {}", rank + 1, entry);
    }

    Ok(())
}
