//! In-process host stand-in.
//!
//! [`Loopback`] plays the host's part between a [`ControlSurface`] and an
//! [`AudioEngine`]: it queues whatever the surface requests and, on
//! [`flush()`](Loopback::flush), delivers it to the engine and echoes the
//! resulting state back to the surface. Nothing is shared between the two
//! components; every value crosses as a message, in order.
//!
//! ```ignore
//! let mut engine = create_engine();
//! let mut surface = create_surface();
//! let mut host = Loopback::new();
//!
//! surface.render(&mut ui, &mut host);
//! host.flush(&mut engine, &mut surface);
//! ```

use std::collections::VecDeque;

use gainpad_core::{HostRequest, ParameterId, ParameterValue, UiHost};
use gainpad_engine::{AudioEngine, Instrument};
use gainpad_surface::ControlSurface;

/// A finished edit gesture, as a host would store it for undo.
#[derive(Debug, Clone, PartialEq)]
pub struct EditGroup {
    /// Parameter the gesture edited.
    pub id: ParameterId,
    /// Every value sent during the gesture, in order.
    pub values: Vec<ParameterValue>,
}

/// Message queue between the surface and the engine.
#[derive(Debug, Default)]
pub struct Loopback {
    pending: VecDeque<HostRequest>,
    file_choice: Option<String>,
    open_group: Option<EditGroup>,
    undo_history: Vec<EditGroup>,
}

impl Loopback {
    /// Create an empty loopback whose file picker gets cancelled.
    pub fn new() -> Self {
        Self::default()
    }

    /// What the simulated file picker returns next. `None` cancels it.
    pub fn set_file_choice(&mut self, path: Option<&str>) {
        self.file_choice = path.map(str::to_owned);
    }

    /// Requests queued since the last flush.
    pub fn pending(&self) -> impl Iterator<Item = &HostRequest> {
        self.pending.iter()
    }

    /// Completed gestures, oldest first.
    pub fn undo_history(&self) -> &[EditGroup] {
        &self.undo_history
    }

    /// Returns true while a gesture is open.
    pub fn in_gesture(&self) -> bool {
        self.open_group.is_some()
    }

    /// Deliver every queued request, in order.
    pub fn flush<I: Instrument>(&mut self, engine: &mut AudioEngine<I>, surface: &mut ControlSurface) {
        while let Some(request) = self.pending.pop_front() {
            match request {
                HostRequest::EditParameter { id, started: true } => {
                    if self.open_group.is_some() {
                        log::warn!("Gesture on parameter {} opened twice", id);
                    }
                    self.open_group = Some(EditGroup { id, values: Vec::new() });
                }
                HostRequest::EditParameter { id, started: false } => match self.open_group.take() {
                    Some(group) if group.id == id => self.undo_history.push(group),
                    other => {
                        log::warn!("Gesture end for parameter {} without a matching begin", id);
                        self.open_group = other;
                    }
                },
                HostRequest::SetParameterValue { id, value } => {
                    if let Err(err) = engine.try_set_parameter_value(id, value) {
                        log::error!("Engine rejected parameter edit: {}", err);
                        continue;
                    }
                    let stored = engine.parameter_value(id);
                    match &mut self.open_group {
                        Some(group) if group.id == id => group.values.push(stored),
                        _ => self.undo_history.push(EditGroup { id, values: vec![stored] }),
                    }
                    surface.parameter_changed(id, stored);
                }
                HostRequest::RequestStateFile { key } => {
                    let Some(path) = self.file_choice.take() else {
                        log::debug!("File picker for {:?} cancelled", key);
                        continue;
                    };
                    if let Err(err) = engine.set_state(&key, &path) {
                        log::error!("Engine rejected state {:?}: {}", key, err);
                        continue;
                    }
                    if let Err(err) = surface.state_changed(&key, &path) {
                        log::error!("Surface rejected state {:?}: {}", key, err);
                    }
                }
            }
        }
    }
}

impl UiHost for Loopback {
    fn edit_parameter(&mut self, id: ParameterId, started: bool) {
        self.pending.push_back(HostRequest::EditParameter { id, started });
    }

    fn set_parameter_value(&mut self, id: ParameterId, value: ParameterValue) {
        self.pending.push_back(HostRequest::SetParameterValue { id, value });
    }

    fn request_state_file(&mut self, key: &str) {
        self.pending.push_back(HostRequest::RequestStateFile { key: key.to_owned() });
    }
}
