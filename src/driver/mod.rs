// src/driver/mod.rs

//! Host-side driver for the LD2420 presence radar.
//!
//! The owner binds a transport with [`Ld2420::begin`] and calls
//! [`Ld2420::update`] from its main loop. Each due update drains whatever
//! the UART has buffered, turns `Range <n>` lines into [`Reading`]s and
//! notifies the registered callbacks in this order: state change,
//! detection, data update.

pub mod callbacks;
mod io_helpers;
pub mod state;

#[cfg(test)]
mod mock;

use core::time::Duration;
use log::{debug, log, warn, Level};

use crate::common::{
    command::{encode_hex_command, Command},
    config::DriverConfig,
    error::Ld2420Error,
    hal_traits::{RadarClock, RadarSerial},
    line::LineAssembler,
    parse::parse_range_line,
    types::{DetectionState, Reading},
};

pub use callbacks::{
    DataUpdateCallback, DetectionCallback, EventKind, StateChangeCallback, Subscriptions,
};
pub use state::DetectionTracker;

/// Where the driver is in its bring-up.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Lifecycle {
    /// Never started, or the last `begin` failed.
    #[default]
    Uninitialized,
    Initialized,
    /// `end` was called. State stays readable; polling does nothing.
    ShutDown,
}

/// Result of feeding one line to the driver.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// The line was a range report inside the configured range and is now
    /// the current reading.
    Accepted(Reading),
    /// A range report outside the configured range. Nothing changed.
    Rejected { distance: i32 },
    /// Not a range report.
    Ignored,
}

impl ParseOutcome {
    #[inline]
    pub fn is_accepted(&self) -> bool {
        matches!(self, ParseOutcome::Accepted(_))
    }
}

/// Result of one [`Ld2420::update`] call.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PollStatus {
    /// Not initialized, or no transport bound.
    Inactive,
    /// Called again before the poll interval elapsed; the transport was not touched.
    RateLimited,
    /// The transport was drained.
    Drained { lines: usize, accepted: usize },
}

/// LD2420 driver instance.
///
/// `S` is the byte transport, `C` the clock used for polling cadence,
/// timestamps and settle delays. `'cb` bounds the borrowed callbacks.
///
/// The driver has no internal locking. Hosts sharing it between threads must
/// serialize every `&mut self` call themselves.
#[derive(Debug)]
pub struct Ld2420<'cb, S, C>
where
    S: RadarSerial,
    C: RadarClock,
{
    transport: Option<S>,
    clock: C,
    config: DriverConfig,
    lifecycle: Lifecycle,
    reading: Reading,
    tracker: DetectionTracker,
    last_poll: Duration,
    lines: LineAssembler,
    discarded_lines: u32,
    debug: bool,
    subscriptions: Subscriptions<'cb>,
}

impl<'cb, S, C> Ld2420<'cb, S, C>
where
    S: RadarSerial,
    C: RadarClock,
{
    pub fn new(clock: C) -> Self {
        Self::with_config(clock, DriverConfig::default())
    }

    pub fn with_config(clock: C, config: DriverConfig) -> Self {
        Ld2420 {
            transport: None,
            clock,
            config,
            lifecycle: Lifecycle::Uninitialized,
            reading: Reading::default(),
            tracker: DetectionTracker::new(),
            last_poll: Duration::ZERO,
            lines: LineAssembler::new(),
            discarded_lines: 0,
            debug: false,
            subscriptions: Subscriptions::default(),
        }
    }

    // --- Lifecycle ---

    /// Binds `transport` and initializes the sensor using the configured baud rate.
    pub fn begin(&mut self, transport: S) -> Result<(), Ld2420Error<S::Error>> {
        let baud = self.config.baud_rate;
        self.begin_with_baud(transport, baud)
    }

    /// Binds `transport`, passes it `baud` as a hint, sends the init command,
    /// waits for the sensor to settle and discards stale input.
    ///
    /// On failure the driver stays uninitialized but keeps the transport,
    /// which [`Ld2420::end`] hands back. Calling `begin` again replaces any
    /// previously bound transport and re-runs the whole sequence.
    pub fn begin_with_baud(&mut self, transport: S, baud: u32) -> Result<(), Ld2420Error<S::Error>> {
        self.transport = Some(transport);
        self.lifecycle = Lifecycle::Uninitialized;
        debug!("ld2420: starting at {} baud", baud);

        match self.initialize(baud) {
            Ok(()) => {
                self.lifecycle = Lifecycle::Initialized;
                debug!("ld2420: initialized");
                Ok(())
            }
            Err(e) => {
                warn!("ld2420: initialization failed: {:?}", e);
                Err(e)
            }
        }
    }

    fn initialize(&mut self, baud: u32) -> Result<(), Ld2420Error<S::Error>> {
        let transport = self.transport.as_mut().ok_or(Ld2420Error::NoTransport)?;
        transport.apply_baud_hint(baud).map_err(Ld2420Error::Io)?;
        self.run_init_sequence()
    }

    /// Reboots the sensor and re-runs the init sequence.
    pub fn restart(&mut self) -> Result<(), Ld2420Error<S::Error>> {
        self.reset_with(Command::Restart)
    }

    /// Restores factory settings, then re-runs the init sequence.
    pub fn factory_reset(&mut self) -> Result<(), Ld2420Error<S::Error>> {
        self.reset_with(Command::FactoryReset)
    }

    fn reset_with(&mut self, command: Command) -> Result<(), Ld2420Error<S::Error>> {
        self.ensure_initialized()?;
        self.send_command(command)?;
        self.run_init_sequence()
    }

    /// Unbinds and returns the transport. Later updates do nothing; the last
    /// reading and the configuration stay available.
    pub fn end(&mut self) -> Option<S> {
        self.lifecycle = Lifecycle::ShutDown;
        self.lines.reset();
        debug!("ld2420: shut down");
        self.transport.take()
    }

    fn ensure_initialized(&self) -> Result<(), Ld2420Error<S::Error>> {
        if self.transport.is_none() {
            return Err(Ld2420Error::NoTransport);
        }
        if self.lifecycle != Lifecycle::Initialized {
            return Err(Ld2420Error::NotInitialized);
        }
        Ok(())
    }

    // --- Commands ---

    /// Encodes a caller-supplied hex string and writes it to the transport.
    ///
    /// Nothing is written if the string is malformed. No settle delay is
    /// applied and no response is read.
    pub fn send_raw_command(&mut self, hex: &str) -> Result<(), Ld2420Error<S::Error>> {
        if self.transport.is_none() {
            return Err(Ld2420Error::NoTransport);
        }
        let bytes = encode_hex_command(hex)?;
        self.send_command_bytes(&bytes)
    }

    // --- Polling & Parsing ---

    /// Drains and parses buffered telemetry if a poll is due.
    pub fn update(&mut self) -> PollStatus {
        if self.lifecycle != Lifecycle::Initialized || self.transport.is_none() {
            return PollStatus::Inactive;
        }

        let now = self.clock.now();
        if now.saturating_sub(self.last_poll) < self.config.poll_interval {
            return PollStatus::RateLimited;
        }
        self.last_poll = now;

        self.drain()
    }

    /// Interprets one telemetry line. Works whether or not a transport is bound.
    pub fn parse_line(&mut self, line: &str) -> ParseOutcome {
        match parse_range_line(line) {
            Some(distance) => self.accept_distance(distance),
            None => {
                log!(self.line_log_level(), "ld2420: ignoring line {:?}", line.trim());
                ParseOutcome::Ignored
            }
        }
    }

    /// Applies range filtering, the state machine and callbacks to a parsed distance.
    fn accept_distance(&mut self, distance: i32) -> ParseOutcome {
        if !self.config.accepts(distance) {
            log!(
                self.line_log_level(),
                "ld2420: rejecting {} cm outside [{}, {}]",
                distance,
                self.config.min_distance,
                self.config.max_distance
            );
            return ParseOutcome::Rejected { distance };
        }

        let state = DetectionState::from_distance(distance);
        let reading = Reading {
            distance,
            state,
            timestamp: self.clock.now(),
            valid: true,
        };

        self.transition_to(state);
        self.reading = reading;

        if state == DetectionState::DetectionActive {
            self.subscriptions.notify_detection(distance);
        }
        self.subscriptions.notify_data_update(reading);

        ParseOutcome::Accepted(reading)
    }

    /// Sets the detection state, notifying the state-change callback if it
    /// differs from the current one. Returns whether a transition happened.
    ///
    /// This is the only way to reach [`DetectionState::DetectionLost`]. The
    /// stored reading is left as it was.
    pub fn transition_to(&mut self, state: DetectionState) -> bool {
        match self.tracker.advance(state) {
            Some((old, new)) => {
                debug!("ld2420: state {} -> {}", old, new);
                self.subscriptions.notify_state_change(old, new);
                true
            }
            None => false,
        }
    }

    fn line_log_level(&self) -> Level {
        if self.debug {
            Level::Debug
        } else {
            Level::Trace
        }
    }

    // --- Configuration ---

    /// Sets the inclusive accepted range in cm. An inverted range is stored
    /// as given and accepts nothing.
    pub fn set_distance_range(&mut self, min_distance: i32, max_distance: i32) {
        self.config.min_distance = min_distance;
        self.config.max_distance = max_distance;
    }

    pub fn set_poll_interval(&mut self, interval: Duration) {
        self.config.poll_interval = interval;
    }

    pub fn set_config(&mut self, config: DriverConfig) {
        self.config = config;
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Raises per-line log messages from `trace` to `debug`.
    pub fn set_debug(&mut self, enabled: bool) {
        self.debug = enabled;
    }

    // --- Callbacks ---

    /// Registers the detection callback, replacing any previous one.
    pub fn on_detection(&mut self, callback: DetectionCallback<'cb>) {
        self.subscriptions.set_detection(Some(callback));
    }

    /// Registers the state-change callback, replacing any previous one.
    pub fn on_state_change(&mut self, callback: StateChangeCallback<'cb>) {
        self.subscriptions.set_state_change(Some(callback));
    }

    /// Registers the data-update callback, replacing any previous one.
    pub fn on_data_update(&mut self, callback: DataUpdateCallback<'cb>) {
        self.subscriptions.set_data_update(Some(callback));
    }

    pub fn unsubscribe(&mut self, kind: EventKind) {
        self.subscriptions.clear(kind);
    }

    // --- Accessors ---

    /// Copy of the last accepted reading, or the default reading.
    pub fn reading(&self) -> Reading {
        self.reading
    }

    pub fn distance(&self) -> i32 {
        self.reading.distance
    }

    pub fn state(&self) -> DetectionState {
        self.tracker.current()
    }

    pub fn is_detecting(&self) -> bool {
        self.state() == DetectionState::DetectionActive
    }

    pub fn is_data_valid(&self) -> bool {
        self.reading.valid
    }

    /// Timestamp of the last accepted reading.
    pub fn last_update_time(&self) -> Duration {
        self.reading.timestamp
    }

    /// Time of the last transport drain (or of initialization).
    pub fn last_poll_time(&self) -> Duration {
        self.last_poll
    }

    pub fn is_initialized(&self) -> bool {
        self.lifecycle == Lifecycle::Initialized
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Number of over-long lines dropped since construction.
    pub fn discarded_lines(&self) -> u32 {
        self.discarded_lines
    }
}
