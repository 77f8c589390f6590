//! Bundle assembly pipeline.
//!
//! A strictly linear, single-pass sequence: locate the CEF export, build
//! the example, materialize its runtime dependencies next to it, relocate
//! the assembled bundle to the final output directory, then optionally
//! compress. No stage retries a prior one; stage ordering (clear before
//! populate, copy before delete) is a correctness requirement.

pub mod build;
pub mod compress;
pub mod fs;
pub mod manifest;
pub mod materialize;
pub mod relocate;
pub mod settings;
pub mod source;

pub use manifest::DependencyManifest;
pub use settings::{Settings, SettingsBuilder};
pub use source::SourceRoot;

use crate::error::Result;

/// Runs the full packaging pipeline for the configured example.
pub async fn run(settings: &Settings) -> Result<()> {
    log::info!("Using example: {}", settings.example());
    log::info!("Using profile: {}", settings.profile());
    log::info!(
        "Size optimizations: skip_pdb={}, min_locales={}, include_dx_compiler={}, use_upx={}",
        settings.skip_pdb(),
        settings.min_locales(),
        settings.include_dx_compiler(),
        settings.use_upx()
    );

    let source = SourceRoot::locate().await?;
    build::run_cargo_build(settings, &source).await?;

    let manifest = DependencyManifest::for_host();
    materialize::materialize(settings, &source, &manifest).await?;
    relocate::relocate(settings).await?;

    if settings.use_upx() {
        compress::compress_binaries(settings, &manifest).await;
    }

    log::info!(
        "Build and packaging complete. Output is in {}",
        settings.final_output_dir().display()
    );
    Ok(())
}
