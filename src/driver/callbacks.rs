// src/driver/callbacks.rs

use core::fmt;

use crate::common::{DetectionState, Reading};

/// Called with the distance (cm) of every accepted reading that means presence.
pub type DetectionCallback<'a> = &'a mut dyn FnMut(i32);
/// Called with `(old, new)` whenever the detection state changes.
pub type StateChangeCallback<'a> = &'a mut dyn FnMut(DetectionState, DetectionState);
/// Called with a copy of every accepted reading.
pub type DataUpdateCallback<'a> = &'a mut dyn FnMut(Reading);

/// Selects one callback slot.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EventKind {
    Detection,
    StateChange,
    DataUpdate,
}

/// One optional borrowed handler per event kind.
///
/// Handlers are borrowed for `'a`, so whatever they capture outlives the
/// driver by construction, and the driver cannot be re-entered from inside
/// one of them.
#[derive(Default)]
pub struct Subscriptions<'a> {
    detection: Option<DetectionCallback<'a>>,
    state_change: Option<StateChangeCallback<'a>>,
    data_update: Option<DataUpdateCallback<'a>>,
}

impl<'a> Subscriptions<'a> {
    pub fn set_detection(&mut self, callback: Option<DetectionCallback<'a>>) {
        self.detection = callback;
    }

    pub fn set_state_change(&mut self, callback: Option<StateChangeCallback<'a>>) {
        self.state_change = callback;
    }

    pub fn set_data_update(&mut self, callback: Option<DataUpdateCallback<'a>>) {
        self.data_update = callback;
    }

    /// Empties the slot for `kind`.
    pub fn clear(&mut self, kind: EventKind) {
        match kind {
            EventKind::Detection => self.detection = None,
            EventKind::StateChange => self.state_change = None,
            EventKind::DataUpdate => self.data_update = None,
        }
    }

    pub fn is_set(&self, kind: EventKind) -> bool {
        match kind {
            EventKind::Detection => self.detection.is_some(),
            EventKind::StateChange => self.state_change.is_some(),
            EventKind::DataUpdate => self.data_update.is_some(),
        }
    }

    pub(crate) fn notify_detection(&mut self, distance: i32) {
        if let Some(callback) = self.detection.as_mut() {
            callback(distance);
        }
    }

    pub(crate) fn notify_state_change(&mut self, old: DetectionState, new: DetectionState) {
        if let Some(callback) = self.state_change.as_mut() {
            callback(old, new);
        }
    }

    pub(crate) fn notify_data_update(&mut self, reading: Reading) {
        if let Some(callback) = self.data_update.as_mut() {
            callback(reading);
        }
    }
}

impl fmt::Debug for Subscriptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscriptions")
            .field("detection", &self.detection.is_some())
            .field("state_change", &self.state_change.is_some())
            .field("data_update", &self.data_update.is_some())
            .finish()
    }
}
