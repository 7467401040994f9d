// src/common/mod.rs

// --- Declare all public modules within common ---
pub mod command;
pub mod config;
pub mod error;
pub mod hal_traits;
pub mod line;
pub mod parse;
pub mod timing;
pub mod types;

// --- Re-export key types/traits/functions for easier access ---

// From command.rs
pub use command::{encode_hex_command, validate_hex_command, Command, CommandBytes};

// From config.rs
pub use config::DriverConfig;

// From error.rs
pub use error::{HexError, Ld2420Error};

// From hal_traits.rs
pub use hal_traits::{RadarClock, RadarSerial};

// From line.rs
pub use line::{LineAssembler, LineEvent};

// From parse.rs
pub use parse::{parse_int_prefix, parse_range_line};

// From types.rs
pub use types::{DetectionState, Reading};
