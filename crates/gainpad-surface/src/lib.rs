//! # gainpad-surface
//!
//! The UI half of the gainpad plugin: a single fixed panel with a file
//! button and a gain slider, drawn through the toolkit-neutral [`Ui`]
//! trait. User edits go back to the host through
//! [`UiHost`](gainpad_core::UiHost), bracketed as gestures.

pub mod surface;
pub mod ui;

pub use surface::{ControlSurface, Gesture, GAIN_SLIDER_LABEL, LOAD_BUTTON_LABEL};
pub use ui::{ItemResponse, PanelFlags, Ui};
