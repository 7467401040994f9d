// src/driver/mock.rs

// Test doubles shared by the driver tests.

use crate::common::hal_traits::{RadarClock, RadarSerial};
use core::time::Duration;
use std::collections::VecDeque;

// --- Mock Clock ---
#[derive(Debug, Default)]
pub struct MockClock {
    pub now: Duration,
    pub delays: Vec<Duration>,
}

impl MockClock {
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }

    pub fn advance_ms(&mut self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    pub fn total_delay(&self) -> Duration {
        self.delays.iter().sum()
    }
}

impl RadarClock for MockClock {
    fn now(&self) -> Duration {
        self.now
    }

    fn delay(&mut self, duration: Duration) {
        self.delays.push(duration);
        self.advance(duration);
    }
}

// --- Mock Comm Error ---
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct MockCommError;

// --- Mock Serial ---
#[derive(Debug, Default)]
pub struct MockSerial {
    pub rx: VecDeque<u8>,
    pub written: Vec<u8>,
    pub flushes: usize,
    pub reads: usize,
    pub baud: Option<u32>,
    /// Every write returns `WouldBlock`.
    pub stall_writes: bool,
    /// Every write fails.
    pub fail_writes: bool,
    /// Reads fail once this many bytes have been read.
    pub fail_reads_after: Option<usize>,
}

impl MockSerial {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rx(data: &[u8]) -> Self {
        let mut serial = Self::new();
        serial.stage(data);
        serial
    }

    pub fn stage(&mut self, data: &[u8]) {
        self.rx.extend(data.iter().copied());
    }
}

impl RadarSerial for MockSerial {
    type Error = MockCommError;

    fn bytes_available(&mut self) -> usize {
        self.rx.len()
    }

    fn read_byte(&mut self) -> nb::Result<u8, Self::Error> {
        if let Some(limit) = self.fail_reads_after {
            if self.reads >= limit {
                return Err(nb::Error::Other(MockCommError));
            }
        }
        match self.rx.pop_front() {
            Some(byte) => {
                self.reads += 1;
                Ok(byte)
            }
            None => Err(nb::Error::WouldBlock),
        }
    }

    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error> {
        if self.fail_writes {
            return Err(nb::Error::Other(MockCommError));
        }
        if self.stall_writes {
            return Err(nb::Error::WouldBlock);
        }
        self.written.push(byte);
        Ok(())
    }

    fn flush(&mut self) -> nb::Result<(), Self::Error> {
        self.flushes += 1;
        Ok(())
    }

    fn apply_baud_hint(&mut self, baud: u32) -> Result<(), Self::Error> {
        self.baud = Some(baud);
        Ok(())
    }
}
