//! LD2420 command definitions and the hex command encoder.
//!
//! Commands are kept as the hex strings the vendor documents and turned into
//! raw bytes right before transmission. The module answers with binary ACK
//! frames which this crate does not interpret.

use core::fmt;
use core::time::Duration;

use arrayvec::ArrayVec;

use super::{config::DriverConfig, error::HexError};

/// Capacity of an encoded command, in bytes.
pub const MAX_COMMAND_LEN: usize = 64;

/// Raw command bytes ready for the wire.
pub type CommandBytes = ArrayVec<u8, MAX_COMMAND_LEN>;

/// The fixed commands the driver sends to the sensor.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Command {
    /// Puts the module into range-reporting mode.
    Init,
    /// Reboots the module.
    Restart,
    /// Restores factory settings and reboots.
    FactoryReset,
}

impl Command {
    /// The vendor hex string for this command (`FD FC FB FA` header,
    /// `04 03 02 01` footer).
    pub const fn hex(&self) -> &'static str {
        match self {
            Command::Init => "FDFCFBFA0800120000006400000004030201",
            Command::Restart => "FDFCFBFA0400A100000004030201",
            Command::FactoryReset => "FDFCFBFA0400A200000004030201",
        }
    }

    /// Decodes [`Command::hex`] into wire bytes.
    pub fn encode(&self) -> Result<CommandBytes, HexError> {
        encode_hex_command(self.hex())
    }

    /// How long the sensor needs after receiving this command.
    pub fn settle(&self, config: &DriverConfig) -> Duration {
        match self {
            Command::Init => config.init_settle,
            Command::Restart => config.restart_settle,
            Command::FactoryReset => config.factory_reset_settle,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Command::Init => "init",
            Command::Restart => "restart",
            Command::FactoryReset => "factory-reset",
        };
        f.write_str(name)
    }
}

/// Normalized digit stream: whitespace removed, uppercased, and every `0X`
/// marker dropped wherever it appears. `X` is never a hex digit, so dropping
/// it cannot change the meaning of an otherwise valid command.
fn normalized_digits(command: &str) -> impl Iterator<Item = char> + '_ {
    let mut chars = command
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_ascii_uppercase())
        .peekable();

    core::iter::from_fn(move || loop {
        let c = chars.next()?;
        if c == '0' && chars.peek() == Some(&'X') {
            chars.next();
            continue;
        }
        return Some(c);
    })
}

/// Checks that `command` normalizes to an even number of hex digits.
///
/// Does not consider [`MAX_COMMAND_LEN`].
pub fn validate_hex_command(command: &str) -> bool {
    let mut digits = 0usize;
    for c in normalized_digits(command) {
        if !c.is_ascii_hexdigit() {
            return false;
        }
        digits += 1;
    }
    digits % 2 == 0
}

/// Encodes a hex command string such as `"FD FC 0x0A"` into bytes.
///
/// Each pair of digits becomes one byte, most-significant nibble first. The
/// whole string is validated before anything is returned, so a malformed
/// command never yields a partial byte sequence.
pub fn encode_hex_command(command: &str) -> Result<CommandBytes, HexError> {
    let mut bytes = CommandBytes::new();
    let mut high_nibble: Option<u8> = None;
    let mut digits = 0usize;

    for c in normalized_digits(command) {
        let nibble = c
            .to_digit(16)
            .ok_or(HexError::InvalidDigit { character: c, position: digits })? as u8;
        digits += 1;

        match high_nibble.take() {
            None => high_nibble = Some(nibble),
            Some(high) => bytes
                .try_push((high << 4) | nibble)
                .map_err(|_| HexError::TooLong { capacity: MAX_COMMAND_LEN })?,
        }
    }

    if high_nibble.is_some() {
        return Err(HexError::OddLength { digits });
    }
    Ok(bytes)
}
