//! Data structures describing the manifest while it is being assembled.
//!
//! Entries are collected as structured records first and serialized in a
//! single later pass, so ordering and attribute rules can be tested without
//! matching on rendered text.

/// Transformation applied to a resource when the bundle is compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preprocess {
    /// Convert a raster image to the toolkit's internal pixel format.
    ToPixdata,
    /// Strip ignorable blank text from an XML document.
    XmlStripblanks,
}

impl Preprocess {
    /// Attribute value used for this directive in the manifest.
    pub fn as_str(self) -> &'static str {
        match self {
            Preprocess::ToPixdata => "to-pixdata",
            Preprocess::XmlStripblanks => "xml-stripblanks",
        }
    }
}

/// One `<file>` element of the generated manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceEntry {
    /// Physical path of the resource, relative to the source root.
    pub path: String,
    /// Optional transformation directive applied at bundle-build time.
    pub preprocess: Option<Preprocess>,
    /// Whether the resource is stored compressed inside the bundle.
    pub compressed: bool,
    /// Optional logical lookup path substituted for the physical one.
    pub alias: Option<String>,
}

impl ResourceEntry {
    /// Entry with no directives.
    pub fn plain(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            preprocess: None,
            compressed: false,
            alias: None,
        }
    }

    /// Entry carrying a transformation directive.
    pub fn preprocessed(path: impl Into<String>, directive: Preprocess) -> Self {
        Self {
            preprocess: Some(directive),
            ..Self::plain(path)
        }
    }

    /// Entry exposed under a logical path different from its physical one.
    pub fn aliased(path: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: Some(alias.into()),
            ..Self::plain(path)
        }
    }

    /// Compressed entry carrying a transformation directive.
    pub fn compressed(path: impl Into<String>, directive: Preprocess) -> Self {
        Self {
            compressed: true,
            ..Self::preprocessed(path, directive)
        }
    }
}

/// An ordered run of entries emitted together.
///
/// The `leading_gap` separator is emitted unconditionally, even when the
/// neighbouring sections are empty; downstream tooling consumes the manifest
/// byte for byte, so spacing is part of the output contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestSection {
    /// Emit a blank separator line before the section's entries.
    pub leading_gap: bool,
    /// Entries in their final output order.
    pub entries: Vec<ResourceEntry>,
}

impl ManifestSection {
    /// Section preceded by a blank separator line.
    pub fn gapped(entries: Vec<ResourceEntry>) -> Self {
        Self {
            leading_gap: true,
            entries,
        }
    }

    /// Section emitted directly after the previous one.
    pub fn adjoining(entries: Vec<ResourceEntry>) -> Self {
        Self {
            leading_gap: false,
            entries,
        }
    }
}

/// Complete manifest: one resource group and its ordered sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestDocument {
    /// Resource prefix of the single `<gresource>` group.
    pub prefix: String,
    /// Sections in their final output order.
    pub sections: Vec<ManifestSection>,
}
