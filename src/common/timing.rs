// src/common/timing.rs

use core::time::Duration;

// The LD2420 acknowledges commands with binary frames this driver does not
// read, so every command is followed by a fixed wall-clock wait instead.

// === Settle Windows ===

/// Wait after the init command before the sensor streams telemetry.
pub const INIT_SETTLE: Duration = Duration::from_millis(100);
/// Wait after a restart command for the module to reboot.
pub const RESTART_SETTLE: Duration = Duration::from_millis(500);
/// Wait after a factory reset for the module to rewrite its settings and reboot.
pub const FACTORY_RESET_SETTLE: Duration = Duration::from_millis(1000);

// === Polling ===

/// Default minimum spacing between two transport drains.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(10);

// === Serial ===

/// Factory default line rate of the LD2420 UART.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;

/// Upper bound for pushing a whole command out of the UART.
/// The longest command is 18 bytes, about 1.6 ms at 115200 baud.
pub const DEFAULT_WRITE_TIMEOUT: Duration = Duration::from_millis(50);

/// Back-off between retries while the transmit buffer reports `WouldBlock`.
pub const WRITE_RETRY_DELAY: Duration = Duration::from_micros(100);
