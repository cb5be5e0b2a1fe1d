//! Shared tilt scalar between the sensor producer and the tick loop
//!
//! The sensor side delivers samples at a platform-determined rate; the
//! simulation reads only the last-known value once per tick. Last-write-wins
//! with no ordering guarantee relative to the tick is acceptable here: this
//! is a continuous control signal, not a discrete event stream.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

/// A shared cell holding the latest tilt scalar as f32 bits
#[derive(Debug, Default)]
pub struct TiltSignal {
    bits: AtomicU32,
}

impl TiltSignal {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            bits: AtomicU32::new(0.0f32.to_bits()),
        })
    }

    /// Latest tilt scalar (gain already applied)
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    fn set(&self, value: f32) {
        self.bits.store(value.to_bits(), Ordering::Relaxed);
    }

    /// Producer handle with the variant's gain baked in
    ///
    /// The handle's lifetime is the sensor registration's: dropping it is the
    /// unregister step, on every exit path.
    pub fn producer(self: &Arc<Self>, gain: f32) -> TiltProducer {
        TiltProducer {
            signal: Arc::clone(self),
            gain,
        }
    }
}

/// Writes accelerometer samples into a [`TiltSignal`]
#[derive(Debug, Clone)]
pub struct TiltProducer {
    signal: Arc<TiltSignal>,
    gain: f32,
}

impl TiltProducer {
    /// Report a raw accelerometer x-axis sample
    ///
    /// Leftward device tilt yields a positive paddle displacement: the raw
    /// value is sign-inverted and scaled by the variant's gain.
    pub fn report(&self, raw_x: f32) {
        self.signal.set(-raw_x * self.gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_inversion_and_gain() {
        let signal = TiltSignal::new();
        let producer = signal.producer(5.0);
        producer.report(-2.0);
        assert_eq!(signal.get(), 10.0);
        producer.report(1.5);
        assert_eq!(signal.get(), -7.5);
    }

    #[test]
    fn test_last_write_wins() {
        let signal = TiltSignal::new();
        let producer = signal.producer(2.5);
        for i in 0..100 {
            producer.report(i as f32);
        }
        assert_eq!(signal.get(), -99.0 * 2.5);
    }

    #[test]
    fn test_cross_thread_delivery() {
        let signal = TiltSignal::new();
        let producer = signal.producer(1.0);
        let handle = std::thread::spawn(move || {
            producer.report(-4.0);
        });
        handle.join().unwrap();
        assert_eq!(signal.get(), 4.0);
    }
}
