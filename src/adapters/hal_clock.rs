// src/adapters/hal_clock.rs

use crate::common::hal_traits::RadarClock;
use core::time::Duration;
use embedded_hal::delay::DelayNs;

/// Clock built from an `embedded-hal` delay provider and a tick source.
///
/// `ticks` returns the time since boot, typically read from a free-running
/// timer or RTIC/embassy monotonic.
pub struct HalClock<D, F> {
    delay: D,
    ticks: F,
}

impl<D, F> HalClock<D, F>
where
    D: DelayNs,
    F: Fn() -> Duration,
{
    pub fn new(delay: D, ticks: F) -> Self {
        HalClock { delay, ticks }
    }

    /// Release the delay provider.
    pub fn free(self) -> D {
        self.delay
    }
}

impl<D, F> RadarClock for HalClock<D, F>
where
    D: DelayNs,
    F: Fn() -> Duration,
{
    fn now(&self) -> Duration {
        (self.ticks)()
    }

    fn delay(&mut self, duration: Duration) {
        let micros = u32::try_from(duration.as_micros()).unwrap_or(u32::MAX);
        self.delay.delay_us(micros);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
