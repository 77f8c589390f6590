//! UPX compression of the relocated bundle.
//!
//! Compression is a pure size optimization: an absent upx, or a failed
//! invocation on any one binary, never fails the run. Only the fixed
//! allow-list in the manifest is touched; resource and data files are never
//! repacked since their formats may not tolerate it.

use super::{manifest::DependencyManifest, settings::Settings};
use std::sync::LazyLock;

/// Check if upx is available for binary compression.
///
/// Cached result to avoid repeated subprocess calls.
pub static HAS_UPX: LazyLock<bool> = LazyLock::new(|| match which::which("upx") {
    Ok(path) => {
        log::debug!("Found upx at: {}", path.display());

        match std::process::Command::new(&path).arg("--version").output() {
            Ok(output) if output.status.success() => true,
            Ok(output) => {
                log::warn!(
                    "upx found at {} but --version check failed (exit code: {:?}). \
                     Compression will be skipped.",
                    path.display(),
                    output.status.code()
                );
                false
            }
            Err(e) => {
                log::warn!(
                    "upx found at {} but failed to execute: {}. Compression will be skipped.",
                    path.display(),
                    e
                );
                false
            }
        }
    }
    Err(e) => {
        log::debug!("upx not found in PATH: {e}");
        false
    }
});

/// Compresses the allow-listed binaries in place at the final location.
///
/// Each invocation is independent: one failure is logged and the next
/// binary is still attempted.
pub async fn compress_binaries(settings: &Settings, manifest: &DependencyManifest) {
    if !*HAS_UPX {
        log::warn!("upx not found in PATH. Skipping compression. Install upx for smaller builds.");
        return;
    }

    log::info!("upx found, compressing binaries...");
    for entry in manifest.compressible {
        let path = settings.final_output_dir().join(entry.name);
        if !path.is_file() {
            continue;
        }

        let mut cmd = tokio::process::Command::new("upx");
        cmd.arg("--best");
        if entry.force {
            cmd.arg("--force");
        }
        cmd.arg(&path);

        match cmd.status().await {
            Ok(status) if status.success() => {
                log::info!("Successfully compressed {} with upx", entry.name);
            }
            Ok(status) => {
                log::warn!(
                    "upx failed on {} (exit code: {:?})",
                    entry.name,
                    status.code()
                );
            }
            Err(e) => {
                log::warn!("Failed to run upx on {}: {e}", entry.name);
            }
        }
    }
}
