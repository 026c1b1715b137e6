//! Plugin metadata.
//!
//! Format-agnostic information the host-integration layer reports to the
//! host. Built with `const` builders so it can live in a `static`.
//!
//! ```ignore
//! pub static CONFIG: PluginConfig = PluginConfig::new("ImGui Gain")
//!     .with_label("imgui_gain")
//!     .with_maker("Someone")
//!     .with_unique_id(fourcc(b"abcd"))
//!     .with_editor();
//! ```

/// Pack four ASCII bytes into a big-endian identifier.
pub const fn fourcc(code: &[u8; 4]) -> u32 {
    u32::from_be_bytes(*code)
}

/// Format-agnostic plugin configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginConfig {
    /// Plugin name displayed in the DAW.
    pub name: &'static str,

    /// Short machine-friendly label (no spaces).
    pub label: &'static str,

    /// One-line description.
    pub description: &'static str,

    /// Maker / vendor.
    pub maker: &'static str,

    /// SPDX license identifier.
    pub license: &'static str,

    /// Version as (major, minor, patch).
    pub version: (u8, u8, u8),

    /// Unique plugin identifier, usually a [`fourcc`].
    pub unique_id: u32,

    /// Plugin category (e.g., "Fx", "Instrument").
    pub category: &'static str,

    /// Whether this plugin has an editor/GUI.
    pub has_editor: bool,
}

impl PluginConfig {
    /// Create a configuration with default values.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            label: name,
            description: "",
            maker: "Unknown Maker",
            license: "ISC",
            version: (1, 0, 0),
            unique_id: 0,
            category: "Fx",
            has_editor: false,
        }
    }

    /// Set the label.
    pub const fn with_label(mut self, label: &'static str) -> Self {
        self.label = label;
        self
    }

    /// Set the description.
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Set the maker.
    pub const fn with_maker(mut self, maker: &'static str) -> Self {
        self.maker = maker;
        self
    }

    /// Set the license.
    pub const fn with_license(mut self, license: &'static str) -> Self {
        self.license = license;
        self
    }

    /// Set the version.
    pub const fn with_version(mut self, major: u8, minor: u8, patch: u8) -> Self {
        self.version = (major, minor, patch);
        self
    }

    /// Set the unique identifier.
    pub const fn with_unique_id(mut self, unique_id: u32) -> Self {
        self.unique_id = unique_id;
        self
    }

    /// Set the category.
    pub const fn with_category(mut self, category: &'static str) -> Self {
        self.category = category;
        self
    }

    /// Enable the editor/GUI.
    pub const fn with_editor(mut self) -> Self {
        self.has_editor = true;
        self
    }
}
