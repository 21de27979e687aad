//! Manifest assembly broken into focused submodules for easier testing.

mod generation;
mod render;
mod scanning;

pub use generation::generate_manifest;
pub use render::render_manifest;
pub use scanning::{scan_suffix, scan_suffix_optional};
