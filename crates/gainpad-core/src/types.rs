//! Common types used throughout gainpad.

/// Parameter identifier.
///
/// Ids are dense indices into [`PARAMETERS`](crate::PARAMETERS), the way
/// the host addresses them.
pub type ParameterId = u32;

/// Parameter value in plain (unnormalized) units, e.g. decibels.
pub type ParameterValue = f32;

/// Size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    /// Create a new size.
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width over height. Zero-height sizes report 1.0.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            1.0
        } else {
            self.width as f64 / self.height as f64
        }
    }
}

/// A point in pixels, relative to the top-left corner of the window.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The window origin.
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };
}
