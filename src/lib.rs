#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod config;
pub mod generator;
pub mod manifest;
pub mod models;
pub mod project;

pub use config::ProjectConfig;
pub use generator::ManifestGenerator;
pub use models::{ManifestDocument, ManifestSection, Preprocess, ResourceEntry};
pub use project::BundleLayout;
