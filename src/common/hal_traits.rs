// src/common/hal_traits.rs

use core::fmt::Debug;
use core::time::Duration;

/// Abstraction for the monotonic time and blocking delays the driver needs.
///
/// `now` is measured from an arbitrary fixed origin (boot, process start, ...)
/// and must never go backwards. Tests implement this with simulated time so
/// settle delays complete instantly.
pub trait RadarClock {
    /// Current monotonic time since the clock's origin.
    fn now(&self) -> Duration;

    /// Block for at least the specified duration.
    fn delay(&mut self, duration: Duration);

    /// Block for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32) {
        self.delay(Duration::from_millis(ms as u64));
    }
}

/// Abstraction for the byte stream connecting the host to the radar.
///
/// Reads and writes are non-blocking in the `nb` sense; the driver never
/// waits on reads and only spins on writes up to the configured timeout.
pub trait RadarSerial {
    /// Associated error type for communication errors.
    type Error: Debug;

    /// Number of received bytes that can be read without blocking.
    ///
    /// Implementations that can only tell "some" from "none" may return 1
    /// while anything is buffered.
    fn bytes_available(&mut self) -> usize;

    /// Attempts to read a single byte from the serial interface.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if no byte is available yet.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte to the serial interface.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` if the transmit buffer is full.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;

    /// Suggests a line rate to the transport.
    ///
    /// Transports that are configured elsewhere (or have no notion of baud
    /// rate) keep the default, which ignores the hint.
    fn apply_baud_hint(&mut self, _baud: u32) -> Result<(), Self::Error> {
        Ok(())
    }
}
