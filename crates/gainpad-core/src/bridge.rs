//! Requests the control surface sends back through the host.
//!
//! The surface never holds a reference to the engine. Everything it wants
//! changed goes through [`UiHost`], and the host forwards it to the engine
//! at some later point.

use crate::types::{ParameterId, ParameterValue};

/// Host services available to the control surface.
pub trait UiHost {
    /// Open or close an edit gesture on a parameter.
    ///
    /// `started == true` precedes the first value of a gesture and
    /// `started == false` follows the last one, so the host can group the
    /// values into one undo step or automation pass.
    fn edit_parameter(&mut self, id: ParameterId, started: bool);

    /// Send a new plain value for a parameter to the engine.
    fn set_parameter_value(&mut self, id: ParameterId, value: ParameterValue);

    /// Ask the host to show a file picker for the state slot `key`.
    ///
    /// Fire-and-forget: the chosen path, if any, arrives later through
    /// the surface's state-changed callback.
    fn request_state_file(&mut self, key: &str);
}

/// One recorded [`UiHost`] call.
#[derive(Debug, Clone, PartialEq)]
pub enum HostRequest {
    EditParameter { id: ParameterId, started: bool },
    SetParameterValue { id: ParameterId, value: ParameterValue },
    RequestStateFile { key: String },
}

impl UiHost for Vec<HostRequest> {
    fn edit_parameter(&mut self, id: ParameterId, started: bool) {
        self.push(HostRequest::EditParameter { id, started });
    }

    fn set_parameter_value(&mut self, id: ParameterId, value: ParameterValue) {
        self.push(HostRequest::SetParameterValue { id, value });
    }

    fn request_state_file(&mut self, key: &str) {
        self.push(HostRequest::RequestStateFile { key: key.to_owned() });
    }
}
