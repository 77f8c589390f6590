//! Dependency materialization.
//!
//! Populates the build output directory with every runtime file the
//! compiled example needs to run standalone. Each per-file operation is
//! isolated: a missing or unreadable source degrades to a warning and the
//! stage continues. Only a failure to create the destination directory
//! itself is fatal, since nothing downstream can proceed without it.

use super::{
    fs,
    manifest::{DEFAULT_LOCALE_PAK, DependencyManifest, LOCALES_DIR},
    settings::Settings,
    source::SourceRoot,
};
use crate::error::Result;
use std::path::Path;

/// Copies the manifest's runtime dependencies into the build output directory.
pub async fn materialize(
    settings: &Settings,
    source: &SourceRoot,
    manifest: &DependencyManifest,
) -> Result<()> {
    let build_dir = settings.build_output_dir();
    log::info!(
        "Copying CEF runtime files to build output directory: {}",
        build_dir.display()
    );

    fs::create_dir_all(&build_dir, false).await?;

    let mut files: Vec<&str> = manifest.files.to_vec();
    if settings.include_dx_compiler() {
        files.extend_from_slice(manifest.optional_files);
    }

    for name in files {
        copy_manifest_file(source.bin_dir(), &build_dir, name).await;
    }

    copy_locales(settings, source, &build_dir).await?;
    copy_target_manifest(settings, &build_dir).await;

    log::info!("Dependency copying complete.");
    Ok(())
}

/// Best-effort copy of a single manifest entry.
async fn copy_manifest_file(bin_dir: &Path, build_dir: &Path, name: &str) {
    let src = bin_dir.join(name);
    if !src.is_file() {
        log::warn!("CEF source file not found: {}", src.display());
        return;
    }
    if let Err(e) = fs::copy_file(&src, &build_dir.join(name)).await {
        log::warn!("Failed to copy {}: {e}", src.display());
    }
}

/// Rebuilds the destination locales directory from the source.
///
/// The destination is always reset first so stale packs from a prior run
/// with different settings cannot survive. With `min_locales` only the
/// en-US pack is shipped; otherwise the whole directory is copied.
async fn copy_locales(settings: &Settings, source: &SourceRoot, build_dir: &Path) -> Result<()> {
    let src_locales = source.bin_dir().join(LOCALES_DIR);
    if !src_locales.is_dir() {
        log::warn!("CEF locales directory not found: {}", src_locales.display());
        return Ok(());
    }

    let dest_locales = build_dir.join(LOCALES_DIR);
    fs::create_dir_all(&dest_locales, true).await?;

    if settings.min_locales() {
        let src_pak = src_locales.join(DEFAULT_LOCALE_PAK);
        if src_pak.is_file() {
            if let Err(e) = fs::copy_file(&src_pak, &dest_locales.join(DEFAULT_LOCALE_PAK)).await {
                log::warn!("Failed to copy {}: {e}", src_pak.display());
            }
        } else {
            log::warn!("English locale file not found: {}", src_pak.display());
        }
    } else if let Err(e) = fs::copy_dir(&src_locales, &dest_locales).await {
        log::warn!("Failed to copy {}: {e}", src_locales.display());
    }

    Ok(())
}

/// Copies the cefsimple application manifest when that example is packaged.
///
/// Other examples carry no manifest; absence is only a warning even for
/// cefsimple since the bundle still runs without it.
async fn copy_target_manifest(settings: &Settings, build_dir: &Path) {
    if settings.example() != "cefsimple" {
        return;
    }

    let manifest_name = "cefsimple.exe.manifest";
    let src = settings
        .project_root()
        .join("cef")
        .join("examples")
        .join("cefsimple")
        .join("win")
        .join(manifest_name);
    if !src.is_file() {
        log::warn!("Manifest file not found: {}", src.display());
        return;
    }
    if let Err(e) = fs::copy_file(&src, &build_dir.join(manifest_name)).await {
        log::warn!("Failed to copy {}: {e}", src.display());
    }
}
