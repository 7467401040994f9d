// src/driver/io_helpers.rs

use super::{Ld2420, PollStatus};
use crate::common::{
    command::Command,
    error::Ld2420Error,
    hal_traits::{RadarClock, RadarSerial},
    line::LineEvent,
    parse::parse_range_line,
    timing,
};
use core::time::Duration;
use log::{debug, log, warn};
use nb::Result as NbResult;

/// Upper bound on bytes thrown away while clearing stale input, so a sensor
/// that never stops talking cannot pin `begin` in the discard loop.
pub(super) const DISCARD_LIMIT: usize = 4096;

impl<'cb, S, C> Ld2420<'cb, S, C>
where
    S: RadarSerial,
    C: RadarClock,
{
    /// Executes a non-blocking transport operation (`f`) repeatedly until it
    /// stops returning `WouldBlock`, returning the final result or a timeout.
    pub(super) fn execute_blocking_io_with_timeout<FN, T>(
        &mut self,
        timeout: Duration,
        mut f: FN,
    ) -> Result<T, Ld2420Error<S::Error>>
    where
        FN: FnMut(&mut S) -> NbResult<T, S::Error>,
    {
        let transport = self.transport.as_mut().ok_or(Ld2420Error::NoTransport)?;
        let deadline = self.clock.now().checked_add(timeout).unwrap_or(Duration::MAX);

        loop {
            match f(transport) {
                Ok(result) => return Ok(result),
                Err(nb::Error::WouldBlock) => {
                    if self.clock.now() >= deadline {
                        return Err(Ld2420Error::Timeout);
                    }
                    self.clock.delay(timing::WRITE_RETRY_DELAY);
                }
                Err(nb::Error::Other(e)) => return Err(Ld2420Error::Io(e)),
            }
        }
    }

    /// Writes already encoded command bytes, in order, then flushes.
    pub(super) fn send_command_bytes(&mut self, bytes: &[u8]) -> Result<(), Ld2420Error<S::Error>> {
        let timeout = self.config.write_timeout;
        for &byte in bytes {
            self.execute_blocking_io_with_timeout(timeout, |transport| transport.write_byte(byte))?;
        }
        self.execute_blocking_io_with_timeout(timeout, |transport| transport.flush())?;
        Ok(())
    }

    /// Sends one of the fixed commands and blocks for its settle window.
    pub(super) fn send_command(&mut self, command: Command) -> Result<(), Ld2420Error<S::Error>> {
        let bytes = command.encode()?;
        debug!("ld2420: sending {} command ({} bytes)", command, bytes.len());
        self.send_command_bytes(&bytes)?;
        let settle = command.settle(&self.config);
        self.clock.delay(settle);
        Ok(())
    }

    /// Init command, settle, then drop whatever the sensor printed meanwhile.
    pub(super) fn run_init_sequence(&mut self) -> Result<(), Ld2420Error<S::Error>> {
        self.send_command(Command::Init)?;
        let discarded = self.discard_input()?;
        if discarded > 0 {
            debug!("ld2420: discarded {} stale bytes", discarded);
        }
        self.last_poll = self.clock.now();
        Ok(())
    }

    /// Reads and drops buffered input, along with any partial line.
    pub(super) fn discard_input(&mut self) -> Result<usize, Ld2420Error<S::Error>> {
        self.lines.reset();
        let transport = self.transport.as_mut().ok_or(Ld2420Error::NoTransport)?;

        let mut discarded = 0;
        while discarded < DISCARD_LIMIT && transport.bytes_available() > 0 {
            match transport.read_byte() {
                Ok(_) => discarded += 1,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => return Err(Ld2420Error::Io(e)),
            }
        }
        Ok(discarded)
    }

    /// Reads everything currently buffered and parses each completed line.
    ///
    /// Never waits for more data. A read error ends the pass early; the next
    /// poll simply tries again.
    pub(super) fn drain(&mut self) -> PollStatus {
        let level = self.line_log_level();
        let mut lines = 0;
        let mut accepted = 0;

        loop {
            let Some(transport) = self.transport.as_mut() else {
                break;
            };
            if transport.bytes_available() == 0 {
                break;
            }
            let byte = match transport.read_byte() {
                Ok(byte) => byte,
                Err(nb::Error::WouldBlock) => break,
                Err(nb::Error::Other(e)) => {
                    warn!("ld2420: read failed, ending poll early: {:?}", e);
                    break;
                }
            };

            let distance = match self.lines.push(byte) {
                None => continue,
                Some(LineEvent::Discarded { dropped }) => {
                    self.discarded_lines = self.discarded_lines.saturating_add(1);
                    warn!("ld2420: dropped over-long line ({} bytes)", dropped);
                    continue;
                }
                Some(LineEvent::Line(bytes)) => {
                    lines += 1;
                    let text = match core::str::from_utf8(bytes) {
                        Ok(text) => text,
                        Err(e) => {
                            log!(
                                level,
                                "ld2420: line has invalid UTF-8 at byte {}, keeping prefix",
                                e.valid_up_to()
                            );
                            // The prefix up to the first bad byte is valid by construction.
                            core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or_default()
                        }
                    };
                    log!(level, "ld2420: rx {:?}", text);
                    parse_range_line(text)
                }
            };

            if let Some(distance) = distance {
                if self.accept_distance(distance).is_accepted() {
                    accepted += 1;
                }
            }
        }

        PollStatus::Drained { lines, accepted }
    }
}
