//! Description of the source tree layout consumed by the generator.

use crate::config::ProjectConfig;

/// Filesystem layout of a toolkit source tree and the resource prefix its
/// bundle is published under.
///
/// All directory values are relative to the source root and use forward
/// slashes; they appear verbatim in the emitted manifest paths. The icon size
/// and category lists are ordered: the bucket traversal follows them exactly,
/// and that order is part of the output contract.
#[derive(Debug, Clone)]
pub struct BundleLayout {
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

impl Default for BundleLayout {
    fn default() -> Self {
        ProjectConfig::default().into_layout()
    }
}

impl BundleLayout {
    /// Asset directory of a theme, relative to the source root.
    pub fn theme_assets_path(&self, theme_dir: &str) -> String {
        format!("{}/{}", theme_dir, self.theme_assets_dir)
    }

    /// Icon bucket directory for a size and category, relative to the source
    /// root.
    pub fn icon_bucket_path(&self, size: &str, category: &str) -> String {
        format!("{}/{}/{}", self.icons_dir, size, category)
    }
}
