//! Bundle relocation.
//!
//! Moves everything materialized in the build output directory into the
//! final output directory, replacing whatever a prior run left there. The
//! clear-before-populate order makes the stage idempotent at the directory
//! level, and every move is copy-then-delete so the two directories may
//! live on different volumes.

use super::{fs, manifest::DEBUG_SYMBOL_EXTENSION, settings::Settings};
use crate::error::Result;

/// Moves the assembled bundle to the final output directory.
///
/// Pre-existing contents of the final directory are deleted first. Entries
/// excluded by `skip_pdb` stay behind in the build output directory;
/// everything else moves exactly once.
pub async fn relocate(settings: &Settings) -> Result<()> {
    let build_dir = settings.build_output_dir();
    let final_dir = settings.final_output_dir();
    log::info!(
        "Moving build output from {} to {}",
        build_dir.display(),
        final_dir.display()
    );

    if final_dir.is_dir() {
        for entry in fs::read_dir_entries(final_dir).await? {
            fs::remove_entry(&entry).await?;
        }
    } else {
        fs::create_dir_all(final_dir, false).await?;
    }

    for entry in fs::read_dir_entries(&build_dir).await? {
        let Some(name) = entry.file_name() else {
            continue;
        };

        if settings.skip_pdb()
            && entry.extension().and_then(|ext| ext.to_str()) == Some(DEBUG_SYMBOL_EXTENSION)
        {
            log::info!(
                "Skipping debug symbols file: {}",
                name.to_string_lossy()
            );
            continue;
        }

        fs::move_entry(&entry, &final_dir.join(name)).await?;
    }

    Ok(())
}
