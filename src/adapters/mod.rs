// src/adapters/mod.rs

// Ready-made transport and clock implementations for common platforms.
// Each one is behind the feature named after what it wraps.

#[cfg(feature = "std")]
pub mod std_clock;

#[cfg(feature = "embedded-io")]
pub mod io_serial;

#[cfg(feature = "embedded-hal")]
pub mod hal_clock;

#[cfg(feature = "std")]
pub use std_clock::StdClock;

#[cfg(feature = "embedded-io")]
pub use io_serial::IoSerial;

#[cfg(feature = "embedded-hal")]
pub use hal_clock::HalClock;
