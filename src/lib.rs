//! Post-build packaging library for CEF examples.
//!
//! Provides the pipeline that assembles a deployable bundle after a cargo
//! build: dependency materialization, bundle relocation, and optional UPX
//! compression. Usable both from the `cef_bundle` CLI and as a library.

pub mod cli;
pub mod error;
pub mod packager;

// Re-export commonly used types
pub use error::{Error, Result};
pub use packager::{DependencyManifest, Settings, SettingsBuilder, SourceRoot};
