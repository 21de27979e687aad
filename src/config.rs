//! Project configuration loader describing the bundle layout.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::project::BundleLayout;

const DEFAULT_CONFIG_FILE: &str = "gresources.config.json";

/// Discoverable project configuration overriding the bundle layout.
///
/// Every field falls back to the canonical CTK tree, so a partial file only
/// needs to name the values it changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProjectConfig {
    /// Resource prefix of the generated `<gresource>` group.
    pub resource_prefix: String,
    /// Directory of the primary theme's stylesheets.
    pub primary_theme_dir: String,
    /// Directory of the high-contrast theme's stylesheets.
    pub contrast_theme_dir: String,
    /// Asset subdirectory name inside each theme directory.
    pub theme_assets_dir: String,
    /// Directory of the win32 stylesheet pair.
    pub win32_theme_dir: String,
    /// Directory of cursor images.
    pub cursor_dir: String,
    /// Directory of gesture symbolic images.
    pub gesture_dir: String,
    /// Logical icon-lookup directory gesture images are aliased under.
    pub gesture_alias_dir: String,
    /// Directory of UI definition files.
    pub ui_dir: String,
    /// Root directory of the sized icon buckets.
    pub icons_dir: String,
    /// Icon size buckets, in emission order.
    pub icon_sizes: Vec<String>,
    /// Icon category buckets, in emission order within each size.
    pub icon_categories: Vec<String>,
    /// Directory of inspector UI definition files.
    pub inspector_dir: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            resource_prefix: "/org/ctk/libctk".into(),
            primary_theme_dir: "theme/Adwaita".into(),
            contrast_theme_dir: "theme/HighContrast".into(),
            theme_assets_dir: "assets".into(),
            win32_theme_dir: "theme/win32".into(),
            cursor_dir: "cursor".into(),
            gesture_dir: "gesture".into(),
            gesture_alias_dir: "icons/64x64/actions".into(),
            ui_dir: "ui".into(),
            icons_dir: "icons".into(),
            icon_sizes: vec![
                "16x16".into(),
                "22x22".into(),
                "24x24".into(),
                "32x32".into(),
                "48x48".into(),
            ],
            icon_categories: vec!["actions".into(), "status".into(), "categories".into()],
            inspector_dir: "inspector".into(),
        }
    }
}

impl ProjectConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with the canonical layout.
    pub fn discover(source_root: &Path) -> Self {
        let candidate = source_root.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Convert the configuration into an owned layout description.
    pub fn into_layout(self) -> BundleLayout {
        BundleLayout {
            resource_prefix: self.resource_prefix,
            primary_theme_dir: self.primary_theme_dir,
            contrast_theme_dir: self.contrast_theme_dir,
            theme_assets_dir: self.theme_assets_dir,
            win32_theme_dir: self.win32_theme_dir,
            cursor_dir: self.cursor_dir,
            gesture_dir: self.gesture_dir,
            gesture_alias_dir: self.gesture_alias_dir,
            ui_dir: self.ui_dir,
            icons_dir: self.icons_dir,
            icon_sizes: self.icon_sizes,
            icon_categories: self.icon_categories,
            inspector_dir: self.inspector_dir,
        }
    }
}
