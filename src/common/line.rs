// src/common/line.rs

use heapless::Vec;

/// Default capacity of a telemetry line, delimiter excluded.
pub const LINE_BUFFER_SIZE: usize = 128;

/// Line terminator of the ASCII telemetry.
pub const LINE_DELIMITER: u8 = b'\n';

/// What a byte completed, if anything.
#[derive(Debug, PartialEq, Eq)]
pub enum LineEvent<'a> {
    /// A full line, delimiter consumed and excluded.
    Line(&'a [u8]),
    /// A line exceeded the capacity and was dropped up to its delimiter.
    Discarded { dropped: usize },
}

/// Bounded accumulator turning a byte stream into lines.
///
/// Partial lines survive between calls, so a report split across two reads
/// is still seen whole. A line longer than `N` bytes is thrown away together
/// with everything up to the next delimiter; assembly resumes cleanly after it.
#[derive(Debug, Default)]
pub struct LineAssembler<const N: usize = LINE_BUFFER_SIZE> {
    buffer: Vec<u8, N>,
    // Bytes dropped from the current oversized line; `Some` while discarding.
    dropping: Option<usize>,
    // The previous call handed out `buffer`; clear before reuse.
    completed: bool,
}

impl<const N: usize> LineAssembler<N> {
    pub const fn new() -> Self {
        LineAssembler {
            buffer: Vec::new(),
            dropping: None,
            completed: false,
        }
    }

    /// Feeds one byte.
    pub fn push(&mut self, byte: u8) -> Option<LineEvent<'_>> {
        if self.completed {
            self.buffer.clear();
            self.completed = false;
        }

        if byte == LINE_DELIMITER {
            if let Some(dropped) = self.dropping.take() {
                return Some(LineEvent::Discarded { dropped });
            }
            self.completed = true;
            return Some(LineEvent::Line(&self.buffer));
        }

        if let Some(dropped) = self.dropping.as_mut() {
            *dropped += 1;
            return None;
        }

        if self.buffer.push(byte).is_err() {
            self.dropping = Some(self.buffer.len() + 1);
            self.buffer.clear();
        }
        None
    }

    /// Bytes of the line currently being assembled.
    pub fn pending(&self) -> usize {
        if self.completed {
            0
        } else {
            self.buffer.len()
        }
    }

    /// Whether an oversized line is being skipped.
    pub fn is_discarding(&self) -> bool {
        self.dropping.is_some()
    }

    /// Drops any partial line and overflow state.
    pub fn reset(&mut self) {
        self.buffer.clear();
        self.dropping = None;
        self.completed = false;
    }
}
