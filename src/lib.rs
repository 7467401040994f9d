// src/lib.rs

#![cfg_attr(not(any(test, feature = "std")), no_std)]

pub mod adapters;
pub mod common;
pub mod driver;

// Re-export key types for convenience
pub use common::{Command, DetectionState, DriverConfig, Ld2420Error, Reading};
pub use driver::{Ld2420, Lifecycle, ParseOutcome, PollStatus};

/// Library name and version, e.g. `"ld2420 0.1.0"`.
pub const fn version_info() -> &'static str {
    concat!("ld2420 ", env!("CARGO_PKG_VERSION"))
}
