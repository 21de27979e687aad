//! Serialize an assembled manifest into its XML text.

use crate::models::{ManifestDocument, ResourceEntry};

/// Render the manifest document to the final XML text.
///
/// The returned text carries no trailing newline; whether one is appended is
/// the writer's concern. Attribute order within an entry is fixed (alias,
/// compressed, preprocess) and values are single-quoted, since downstream
/// tooling compares the manifest byte for byte.
pub fn render_manifest(document: &ManifestDocument) -> String {
    let mut xml = String::from("<?xml version='1.0' encoding='UTF-8'?>\n<gresources>\n");
    xml.push_str(&format!("  <gresource prefix='{}'>\n", document.prefix));

    for section in &document.sections {
        if section.leading_gap {
            xml.push('\n');
        }
        for entry in &section.entries {
            xml.push_str(&render_entry(entry));
        }
    }

    xml.push_str("  </gresource>\n</gresources>");
    xml
}

fn render_entry(entry: &ResourceEntry) -> String {
    let mut line = String::from("    <file");
    if let Some(alias) = &entry.alias {
        line.push_str(&format!(" alias='{alias}'"));
    }
    if entry.compressed {
        line.push_str(" compressed='true'");
    }
    if let Some(directive) = entry.preprocess {
        line.push_str(&format!(" preprocess='{}'", directive.as_str()));
    }
    line.push_str(&format!(">{}</file>\n", entry.path));
    line
}
