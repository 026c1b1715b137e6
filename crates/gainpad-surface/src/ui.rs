//! Immediate-mode widget interface.
//!
//! The control surface draws through [`Ui`] rather than a concrete GUI
//! crate. An adapter over Dear ImGui or egui maps each call onto the
//! toolkit's widget of the same name; tests drive the surface with a
//! scripted implementation instead.

use gainpad_core::{Point, Size};

/// Window flags for the surface's single panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PanelFlags {
    /// The user cannot resize the panel from inside the window.
    pub no_resize: bool,
    /// The panel cannot be collapsed to its title bar.
    pub no_collapse: bool,
    /// No title bar and no window border; the panel reads as the window's
    /// background.
    pub borderless: bool,
}

impl PanelFlags {
    /// A borderless panel pinned to its position and size.
    pub const FIXED: PanelFlags = PanelFlags {
        no_resize: true,
        no_collapse: true,
        borderless: true,
    };
}

/// What happened to an item during the current frame.
///
/// Mirrors the item queries of immediate-mode toolkits: `changed` is the
/// widget's return value, `activated`/`deactivated` are the edges of the
/// user holding the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ItemResponse {
    /// The bound value was modified this frame.
    pub changed: bool,
    /// The user started interacting with the item this frame.
    pub activated: bool,
    /// The user stopped interacting with the item on the previous frame.
    pub deactivated: bool,
}

/// The widgets the control surface needs.
pub trait Ui {
    /// Open a panel. Returns `false` when its contents should be skipped
    /// (collapsed or clipped). [`end_panel()`](Self::end_panel) must be
    /// called either way.
    fn begin_panel(&mut self, title: &str, origin: Point, size: Size, flags: PanelFlags) -> bool;

    /// Close the panel opened by [`begin_panel()`](Self::begin_panel).
    fn end_panel(&mut self);

    /// A push button. Returns `true` on the frame it was clicked.
    fn button(&mut self, label: &str) -> bool;

    /// A horizontal slider editing `value` within `[min, max]`.
    fn slider_f32(&mut self, label: &str, value: &mut f32, min: f32, max: f32) -> ItemResponse;

    /// A line of static text.
    fn text(&mut self, text: &str);
}
