// src/adapters/std_clock.rs

use crate::common::hal_traits::RadarClock;
use core::time::Duration;
use std::time::Instant;

/// Wall-clock implementation backed by `std::time::Instant`.
///
/// `now` counts from the moment the clock was created.
#[derive(Debug, Copy, Clone)]
pub struct StdClock {
    origin: Instant,
}

impl StdClock {
    pub fn new() -> Self {
        StdClock { origin: Instant::now() }
    }
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl RadarClock for StdClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }

    fn delay(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
