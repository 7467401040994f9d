// src/common/config.rs

use super::timing;
use core::time::Duration;

/// Default lower bound of the accepted range, in cm.
pub const DEFAULT_MIN_DISTANCE: i32 = 0;
/// Default upper bound of the accepted range, in cm (sensor's rated reach).
pub const DEFAULT_MAX_DISTANCE: i32 = 600;

/// Runtime configuration of the driver.
///
/// Every field can be changed at any time; changes apply from the next
/// parsed line or poll and never touch the reading already stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct DriverConfig {
    /// Smallest accepted distance in cm (inclusive).
    pub min_distance: i32,
    /// Largest accepted distance in cm (inclusive).
    ///
    /// A range with `min_distance > max_distance` is not rejected; it simply
    /// accepts nothing.
    pub max_distance: i32,
    /// Minimum spacing between two transport drains.
    pub poll_interval: Duration,
    pub init_settle: Duration,
    pub restart_settle: Duration,
    pub factory_reset_settle: Duration,
    /// Deadline for writing a complete command.
    pub write_timeout: Duration,
    /// Baud rate suggested to the transport by [`crate::Ld2420::begin`].
    pub baud_rate: u32,
}

impl DriverConfig {
    /// Whether `distance` lies inside the configured inclusive range.
    #[inline]
    pub fn accepts(&self, distance: i32) -> bool {
        (self.min_distance..=self.max_distance).contains(&distance)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            min_distance: DEFAULT_MIN_DISTANCE,
            max_distance: DEFAULT_MAX_DISTANCE,
            poll_interval: timing::DEFAULT_POLL_INTERVAL,
            init_settle: timing::INIT_SETTLE,
            restart_settle: timing::RESTART_SETTLE,
            factory_reset_settle: timing::FACTORY_RESET_SETTLE,
            write_timeout: timing::DEFAULT_WRITE_TIMEOUT,
            baud_rate: timing::DEFAULT_BAUD_RATE,
        }
    }
}
