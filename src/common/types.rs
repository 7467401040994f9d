// src/common/types.rs

use core::fmt;
use core::time::Duration;

/// Presence state reported to subscribers.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum DetectionState {
    /// Nothing in range, or the sensor reported a distance of zero.
    #[default]
    NoDetection,
    /// A target is being reported at a non-zero distance.
    DetectionActive,
    /// Tracking was lost. Never produced by the parser; set explicitly by the
    /// owner (e.g. on transport disconnect) via
    /// [`crate::Ld2420::transition_to`].
    DetectionLost,
}

impl DetectionState {
    /// State implied by an accepted distance reading.
    #[inline]
    pub const fn from_distance(distance: i32) -> Self {
        if distance > 0 {
            DetectionState::DetectionActive
        } else {
            DetectionState::NoDetection
        }
    }
}

impl fmt::Display for DetectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DetectionState::NoDetection => "no detection",
            DetectionState::DetectionActive => "detection active",
            DetectionState::DetectionLost => "detection lost",
        };
        f.write_str(name)
    }
}

/// One accepted distance report.
///
/// The default value (distance 0, `NoDetection`, timestamp zero, not valid)
/// is what the driver reports before anything has been accepted.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub struct Reading {
    /// Distance in cm.
    pub distance: i32,
    /// State derived from `distance` when the reading was accepted.
    pub state: DetectionState,
    /// Driver clock time at which the line was parsed.
    pub timestamp: Duration,
    /// Set on every accepted reading; only the default reading is invalid.
    pub valid: bool,
}
