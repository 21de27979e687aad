//! Assemble the ordered manifest from the fixed sequence of directory scans.

use std::path::Path;

use anyhow::Result;

use crate::manifest::scanning::{scan_suffix, scan_suffix_optional};
use crate::models::{ManifestDocument, ManifestSection, Preprocess, ResourceEntry};
use crate::project::BundleLayout;

const PNG_SUFFIX: &str = ".png";
const SVG_SUFFIX: &str = ".svg";
const UI_SUFFIX: &str = ".ui";
const SYMBOLIC_PNG_SUFFIX: &str = ".symbolic.png";

/// Stylesheet variants bundled for the primary theme.
const PRIMARY_STYLESHEETS: [&str; 4] = [
    "ctk.css",
    "ctk-dark.css",
    "ctk-contained.css",
    "ctk-contained-dark.css",
];

/// win32 stylesheet pair.
const WIN32_STYLESHEETS: [&str; 2] = ["ctk-win32-base.css", "ctk.css"];

/// Fixed entries appended after all scans.
const TRAILING_RESOURCES: [&str; 2] = ["inspector/logo.png", "emoji/emoji.data"];

/// Build the manifest for `source_root`.
///
/// Sections are appended in a fixed order; each scan's results are sorted
/// lexicographically within its section. Every scan is mandatory except the
/// icon buckets, which are skipped when their directory is absent. Any other
/// listing failure aborts the whole generation, so no partial manifest is
/// ever produced.
pub fn generate_manifest(layout: &BundleLayout, source_root: &Path) -> Result<ManifestDocument> {
    let mut sections = Vec::new();

    sections.push(primary_stylesheet_section(layout));
    sections.extend(theme_asset_sections(
        layout,
        source_root,
        &layout.primary_theme_dir,
    )?);

    sections.push(contrast_stylesheet_section(layout));
    sections.extend(theme_asset_sections(
        layout,
        source_root,
        &layout.contrast_theme_dir,
    )?);

    sections.push(win32_stylesheet_section(layout));
    sections.push(cursor_section(layout, source_root)?);
    sections.push(gesture_section(layout, source_root)?);
    sections.push(ui_section(layout, source_root)?);
    sections.push(icon_bucket_section(layout, source_root)?);
    sections.push(inspector_section(layout, source_root)?);

    sections.push(ManifestSection::gapped(
        TRAILING_RESOURCES
            .into_iter()
            .map(ResourceEntry::plain)
            .collect(),
    ));

    Ok(ManifestDocument {
        prefix: layout.resource_prefix.clone(),
        sections,
    })
}

fn primary_stylesheet_section(layout: &BundleLayout) -> ManifestSection {
    let entries = PRIMARY_STYLESHEETS
        .iter()
        .map(|name| ResourceEntry::plain(format!("{}/{}", layout.primary_theme_dir, name)))
        .collect();
    ManifestSection::gapped(entries)
}

/// The inverse stylesheet lives next to the base one on disk but is looked up
/// under a theme directory of its own, with "Inverse" appended to the name.
fn contrast_stylesheet_section(layout: &BundleLayout) -> ManifestSection {
    let dir = &layout.contrast_theme_dir;
    let entries = vec![
        ResourceEntry::plain(format!("{dir}/ctk.css")),
        ResourceEntry::aliased(
            format!("{dir}/ctk-inverse.css"),
            format!("{dir}Inverse/ctk.css"),
        ),
        ResourceEntry::plain(format!("{dir}/ctk-contained.css")),
        ResourceEntry::plain(format!("{dir}/ctk-contained-inverse.css")),
    ];
    ManifestSection::gapped(entries)
}

fn win32_stylesheet_section(layout: &BundleLayout) -> ManifestSection {
    let entries = WIN32_STYLESHEETS
        .iter()
        .map(|name| ResourceEntry::plain(format!("{}/{}", layout.win32_theme_dir, name)))
        .collect();
    ManifestSection::gapped(entries)
}

/// Raster and vector scans over a theme's asset directory: PNGs are converted
/// to the internal pixel format, SVGs are embedded as-is.
fn theme_asset_sections(
    layout: &BundleLayout,
    source_root: &Path,
    theme_dir: &str,
) -> Result<[ManifestSection; 2]> {
    let assets_dir = layout.theme_assets_path(theme_dir);
    let dir = source_root.join(&assets_dir);

    let rasters = scan_suffix(&dir, PNG_SUFFIX)?
        .into_iter()
        .map(|name| {
            ResourceEntry::preprocessed(format!("{assets_dir}/{name}"), Preprocess::ToPixdata)
        })
        .collect();
    let vectors = scan_suffix(&dir, SVG_SUFFIX)?
        .into_iter()
        .map(|name| ResourceEntry::plain(format!("{assets_dir}/{name}")))
        .collect();

    Ok([
        ManifestSection::adjoining(rasters),
        ManifestSection::gapped(vectors),
    ])
}

fn cursor_section(layout: &BundleLayout, source_root: &Path) -> Result<ManifestSection> {
    let entries = scan_suffix(&source_root.join(&layout.cursor_dir), PNG_SUFFIX)?
        .into_iter()
        .map(|name| ResourceEntry::plain(format!("{}/{}", layout.cursor_dir, name)))
        .collect();
    Ok(ManifestSection::adjoining(entries))
}

/// Gesture images stay under their own directory on disk but are exposed
/// through the conventional icon-lookup path.
fn gesture_section(layout: &BundleLayout, source_root: &Path) -> Result<ManifestSection> {
    let entries = scan_suffix(&source_root.join(&layout.gesture_dir), SYMBOLIC_PNG_SUFFIX)?
        .into_iter()
        .map(|name| {
            ResourceEntry::aliased(
                format!("{}/{}", layout.gesture_dir, name),
                format!("{}/{}", layout.gesture_alias_dir, name),
            )
        })
        .collect();
    Ok(ManifestSection::adjoining(entries))
}

fn ui_section(layout: &BundleLayout, source_root: &Path) -> Result<ManifestSection> {
    let entries = scan_suffix(&source_root.join(&layout.ui_dir), UI_SUFFIX)?
        .into_iter()
        .map(|name| {
            ResourceEntry::preprocessed(
                format!("{}/{}", layout.ui_dir, name),
                Preprocess::XmlStripblanks,
            )
        })
        .collect();
    Ok(ManifestSection::gapped(entries))
}

/// Nested size-by-category traversal over the icon buckets. Buckets are
/// optional: icon sets are legitimately absent in minimal installations, so a
/// missing directory contributes nothing instead of failing the run.
fn icon_bucket_section(layout: &BundleLayout, source_root: &Path) -> Result<ManifestSection> {
    let mut entries = Vec::new();
    for size in &layout.icon_sizes {
        for category in &layout.icon_categories {
            let bucket = layout.icon_bucket_path(size, category);
            for name in scan_suffix_optional(&source_root.join(&bucket), PNG_SUFFIX)? {
                entries.push(ResourceEntry::plain(format!("{bucket}/{name}")));
            }
        }
    }
    Ok(ManifestSection::gapped(entries))
}

fn inspector_section(layout: &BundleLayout, source_root: &Path) -> Result<ManifestSection> {
    let entries = scan_suffix(&source_root.join(&layout.inspector_dir), UI_SUFFIX)?
        .into_iter()
        .map(|name| {
            ResourceEntry::compressed(
                format!("{}/{}", layout.inspector_dir, name),
                Preprocess::XmlStripblanks,
            )
        })
        .collect();
    Ok(ManifestSection::adjoining(entries))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manifest::render_manifest;
    use std::fs;
    use tempfile::tempdir;

    /// Create the mandatory subdirectories with no files in them.
    fn scaffold(root: &Path) {
        for dir in [
            "theme/Adwaita/assets",
            "theme/HighContrast/assets",
            "cursor",
            "gesture",
            "ui",
            "inspector",
        ] {
            fs::create_dir_all(root.join(dir)).unwrap();
        }
    }

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, b"").unwrap();
    }

    fn generate(root: &Path) -> Result<String> {
        let document = generate_manifest(&BundleLayout::default(), root)?;
        Ok(render_manifest(&document))
    }

    #[test]
    fn empty_tree_yields_the_literal_skeleton() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());

        let expected = "<?xml version='1.0' encoding='UTF-8'?>
<gresources>
  <gresource prefix='/org/ctk/libctk'>

    <file>theme/Adwaita/ctk.css</file>
    <file>theme/Adwaita/ctk-dark.css</file>
    <file>theme/Adwaita/ctk-contained.css</file>
    <file>theme/Adwaita/ctk-contained-dark.css</file>


    <file>theme/HighContrast/ctk.css</file>
    <file alias='theme/HighContrastInverse/ctk.css'>theme/HighContrast/ctk-inverse.css</file>
    <file>theme/HighContrast/ctk-contained.css</file>
    <file>theme/HighContrast/ctk-contained-inverse.css</file>


    <file>theme/win32/ctk-win32-base.css</file>
    <file>theme/win32/ctk.css</file>



    <file>inspector/logo.png</file>
    <file>emoji/emoji.data</file>
  </gresource>
</gresources>";

        assert_eq!(generate(dir.path()).unwrap(), expected);
    }

    #[test]
    fn scan_results_are_sorted_within_their_section() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "cursor/b.png");
        touch(dir.path(), "cursor/a.png");
        touch(dir.path(), "cursor/c.png");

        let xml = generate(dir.path()).unwrap();
        let block = concat!(
            "    <file>cursor/a.png</file>\n",
            "    <file>cursor/b.png</file>\n",
            "    <file>cursor/c.png</file>\n",
        );
        assert!(xml.contains(block));
    }

    #[test]
    fn theme_rasters_get_the_pixdata_directive_and_vectors_do_not() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "theme/Adwaita/assets/check.png");
        touch(dir.path(), "theme/Adwaita/assets/slider.svg");

        let xml = generate(dir.path()).unwrap();
        assert!(
            xml.contains("    <file preprocess='to-pixdata'>theme/Adwaita/assets/check.png</file>")
        );
        assert!(xml.contains("    <file>theme/Adwaita/assets/slider.svg</file>"));
    }

    #[test]
    fn gesture_scan_matches_the_compound_suffix_and_aliases_entries() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "gesture/wave.symbolic.png");
        touch(dir.path(), "gesture/icon.png");

        let xml = generate(dir.path()).unwrap();
        assert!(xml.contains(
            "    <file alias='icons/64x64/actions/wave.symbolic.png'>gesture/wave.symbolic.png</file>"
        ));
        assert!(!xml.contains("gesture/icon.png"));
    }

    #[test]
    fn ui_and_inspector_definitions_carry_their_directives() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "ui/dialog.ui");
        touch(dir.path(), "inspector/prop-list.ui");

        let xml = generate(dir.path()).unwrap();
        assert!(xml.contains("    <file preprocess='xml-stripblanks'>ui/dialog.ui</file>"));
        assert!(xml.contains(
            "    <file compressed='true' preprocess='xml-stripblanks'>inspector/prop-list.ui</file>"
        ));
    }

    #[test]
    fn icon_buckets_are_emitted_in_size_then_category_order() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "icons/48x48/actions/open.png");
        touch(dir.path(), "icons/16x16/categories/apps.png");
        touch(dir.path(), "icons/16x16/actions/close.png");

        let xml = generate(dir.path()).unwrap();
        let close = xml.find("icons/16x16/actions/close.png").unwrap();
        let apps = xml.find("icons/16x16/categories/apps.png").unwrap();
        let open = xml.find("icons/48x48/actions/open.png").unwrap();
        assert!(close < apps);
        assert!(apps < open);
    }

    #[test]
    fn absent_icon_buckets_change_only_their_own_contribution() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "icons/16x16/actions/close.png");
        touch(dir.path(), "icons/22x22/status/busy.png");

        let full = generate(dir.path()).unwrap();
        fs::remove_dir_all(dir.path().join("icons/16x16/actions")).unwrap();
        let reduced = generate(dir.path()).unwrap();

        let removed_line = "    <file>icons/16x16/actions/close.png</file>\n";
        assert_eq!(full.replacen(removed_line, "", 1), reduced);
    }

    #[test]
    fn missing_mandatory_directory_aborts_with_the_path() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        fs::remove_dir_all(dir.path().join("ui")).unwrap();

        let err = generate(dir.path()).unwrap_err();
        assert!(err.to_string().contains("ui"));
    }

    #[test]
    fn regeneration_over_an_unchanged_tree_is_byte_identical() {
        let dir = tempdir().unwrap();
        scaffold(dir.path());
        touch(dir.path(), "cursor/pointer.png");
        touch(dir.path(), "ui/dialog.ui");
        touch(dir.path(), "icons/32x32/status/warn.png");

        let first = generate(dir.path()).unwrap();
        let second = generate(dir.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_layout_changes_prefix_and_directories() {
        let dir = tempdir().unwrap();
        let mut layout = BundleLayout::default();
        layout.resource_prefix = "/org/example/widgets".into();
        layout.cursor_dir = "pointers".into();

        for sub in [
            "theme/Adwaita/assets",
            "theme/HighContrast/assets",
            "pointers",
            "gesture",
            "ui",
            "inspector",
        ] {
            fs::create_dir_all(dir.path().join(sub)).unwrap();
        }
        touch(dir.path(), "pointers/grab.png");

        let document = generate_manifest(&layout, dir.path()).unwrap();
        let xml = render_manifest(&document);
        assert!(xml.contains("<gresource prefix='/org/example/widgets'>"));
        assert!(xml.contains("    <file>pointers/grab.png</file>"));
    }
}
