//! Parameter and state metadata.
//!
//! This module describes everything the host is told at load time:
//! - [`ParameterInfo`] - one entry per automatable parameter
//! - [`StateInfo`] - one entry per string-keyed state slot
//!
//! The declared set is static. [`PARAMETERS`] is indexed by [`ParameterId`]
//! and [`STATES`] by state index, exactly the way the host enumerates them.

use crate::decibel::{clamp, MAX_DB, MIN_DB};
use crate::types::{ParameterId, ParameterValue};

/// Id of the gain parameter (decibels).
pub const PARAM_GAIN: ParameterId = 0;

/// Id of the voice selector parameter (integer).
pub const PARAM_VOICE: ParameterId = 1;

/// Number of declared parameters.
pub const PARAM_COUNT: usize = 2;

/// Key of the file-path state slot.
pub const STATE_FILE: &str = "file";

/// Flags controlling parameter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterFlags {
    /// Parameter can be automated by the host.
    pub can_automate: bool,
    /// Parameter only takes whole-number values.
    pub is_integer: bool,
}

/// Metadata describing a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterInfo {
    /// Parameter identifier (its index in [`PARAMETERS`]).
    pub id: ParameterId,
    /// Full parameter name (e.g., "Gain").
    pub name: &'static str,
    /// Short parameter name for constrained UIs.
    pub short_name: &'static str,
    /// Stable lowercase identifier used by hosts that key on symbols.
    pub symbol: &'static str,
    /// Unit label (e.g., "dB").
    pub units: &'static str,
    /// Minimum plain value.
    pub min: ParameterValue,
    /// Maximum plain value.
    pub max: ParameterValue,
    /// Default plain value.
    pub default: ParameterValue,
    /// Behavioral flags.
    pub flags: ParameterFlags,
}

impl ParameterInfo {
    /// Create a continuous, automatable parameter over `[min, max]`.
    pub const fn new(
        id: ParameterId,
        name: &'static str,
        symbol: &'static str,
        min: ParameterValue,
        max: ParameterValue,
    ) -> Self {
        Self {
            id,
            name,
            short_name: name,
            symbol,
            units: "",
            min,
            max,
            default: min,
            flags: ParameterFlags {
                can_automate: true,
                is_integer: false,
            },
        }
    }

    /// Set the unit label.
    pub const fn with_units(mut self, units: &'static str) -> Self {
        self.units = units;
        self
    }

    /// Set the default plain value.
    pub const fn with_default(mut self, default: ParameterValue) -> Self {
        self.default = default;
        self
    }

    /// Mark the parameter as integer-valued.
    pub const fn integer(mut self) -> Self {
        self.flags.is_integer = true;
        self
    }

    /// Bring an arbitrary host value into this parameter's domain.
    ///
    /// Integer parameters truncate toward zero first (128.6 becomes 128),
    /// then every value is clamped into `[min, max]`. Returns `None` for NaN.
    pub fn sanitize(&self, value: ParameterValue) -> Option<ParameterValue> {
        if value.is_nan() {
            return None;
        }
        let value = if self.flags.is_integer { value.trunc() } else { value };
        Some(clamp(value, self.min, self.max))
    }
}

/// The declared parameter set, indexed by [`ParameterId`].
pub static PARAMETERS: [ParameterInfo; PARAM_COUNT] = [
    ParameterInfo::new(PARAM_GAIN, "Gain", "gain", MIN_DB, MAX_DB)
        .with_units("dB")
        .with_default(0.0),
    ParameterInfo::new(PARAM_VOICE, "Voice", "voice", 0.0, 128.0)
        .with_default(0.0)
        .integer(),
];

/// Look up a declared parameter.
#[inline]
pub fn parameter_info(id: ParameterId) -> Option<&'static ParameterInfo> {
    PARAMETERS.get(id as usize)
}

/// Metadata describing a string-keyed state slot.
///
/// The declared slot holds a filesystem path; hosts offer a file picker
/// for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateInfo {
    /// Key the host uses to deliver values.
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Value the slot holds before the host delivers anything.
    pub default_value: &'static str,
}

/// The declared state set, indexed by state index.
pub static STATES: [StateInfo; 1] = [StateInfo {
    key: STATE_FILE,
    label: "File",
    default_value: "",
}];

/// Look up a declared state slot by index.
#[inline]
pub fn state_info(index: usize) -> Option<&'static StateInfo> {
    STATES.get(index)
}
