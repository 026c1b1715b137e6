//! Editor window geometry.

use crate::types::Size;

/// Size constraints for the plugin editor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConstraints {
    /// Size the window opens at.
    pub default_size: Size,
    /// Minimum size.
    pub min: Size,
    /// Whether the host may resize the window.
    pub resizable: bool,
    /// Keep the default aspect ratio when resizing.
    pub keep_aspect_ratio: bool,
}

impl EditorConstraints {
    /// Constraints where the default size is also the minimum, aspect kept.
    pub const fn fixed_minimum(default_size: Size) -> Self {
        Self {
            default_size,
            min: default_size,
            resizable: true,
            keep_aspect_ratio: true,
        }
    }

    /// Apply the constraints to a requested size.
    ///
    /// Non-resizable editors always get the default size. Otherwise the
    /// request is raised to the minimum and, if the aspect ratio is locked,
    /// its height is derived from the width.
    pub fn constrain(&self, requested: Size) -> Size {
        if !self.resizable {
            return self.default_size;
        }
        let width = requested.width.max(self.min.width);
        let height = if self.keep_aspect_ratio {
            (width as f64 / self.default_size.aspect_ratio()).round() as u32
        } else {
            requested.height
        };
        Size::new(width, height.max(self.min.height))
    }
}

impl Default for EditorConstraints {
    fn default() -> Self {
        Self::fixed_minimum(Size::new(400, 300))
    }
}
