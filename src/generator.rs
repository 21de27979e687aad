//! High-level entry point composing manifest assembly and rendering.

use std::path::Path;

use anyhow::Result;

use crate::manifest::{generate_manifest, render_manifest};
use crate::project::BundleLayout;

/// Generator producing the resource-bundle manifest for a source tree.
pub struct ManifestGenerator {
    layout: BundleLayout,
}

impl ManifestGenerator {
    /// Create a generator for the provided bundle layout.
    pub fn new(layout: BundleLayout) -> Self {
        Self { layout }
    }

    /// Generate the manifest text for `source_root`.
    ///
    /// The result is a pure function of the tree's directory contents; a
    /// failed mandatory scan aborts with an error naming the path and no
    /// partial output.
    pub fn generate(&self, source_root: &Path) -> Result<String> {
        let document = generate_manifest(&self.layout, source_root)?;
        Ok(render_manifest(&document))
    }
}

impl Default for ManifestGenerator {
    fn default() -> Self {
        Self::new(BundleLayout::default())
    }
}
