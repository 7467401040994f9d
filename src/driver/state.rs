// src/driver/state.rs

use crate::common::DetectionState;

/// Holds the current detection state and reports changes.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct DetectionTracker {
    current: DetectionState,
}

impl DetectionTracker {
    pub const fn new() -> Self {
        DetectionTracker {
            current: DetectionState::NoDetection,
        }
    }

    #[inline]
    pub const fn current(&self) -> DetectionState {
        self.current
    }

    /// Moves to `next`, returning `(old, new)` only if the state changed.
    pub fn advance(&mut self, next: DetectionState) -> Option<(DetectionState, DetectionState)> {
        if next == self.current {
            return None;
        }
        let old = core::mem::replace(&mut self.current, next);
        Some((old, next))
    }
}
