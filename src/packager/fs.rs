//! File system primitives for bundle assembly.
//!
//! Copy operations overwrite existing destinations; removals are idempotent
//! (a missing path is not an error). Moves are always copy-then-delete so
//! they keep working when source and destination live on different
//! filesystems, where a rename would fail with `EXDEV`.

use crate::bail;
use crate::error::{Error, ErrorExt, Result};
use std::{
    io,
    path::{Path, PathBuf},
};
use tokio::fs;

/// Creates the given directory path, erasing it first if specified.
pub async fn create_dir_all(path: &Path, erase: bool) -> Result<()> {
    if erase {
        remove_dir_all(path).await?;
    }

    // create_dir_all is already idempotent - succeeds even if dir exists
    fs::create_dir_all(path)
        .await
        .fs_context("creating directory", path)
}

/// Removes the directory and its contents if it exists.
pub async fn remove_dir_all(path: &Path) -> Result<()> {
    match fs::remove_dir_all(path).await {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()), // Idempotent
        Err(e) => Err(e.into()),
    }
}

/// Removes a direct child of a directory regardless of its kind.
pub async fn remove_entry(path: &Path) -> Result<()> {
    let meta = match fs::symlink_metadata(path).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    if meta.is_dir() {
        fs::remove_dir_all(path)
            .await
            .fs_context("removing directory", path)
    } else {
        fs::remove_file(path)
            .await
            .fs_context("removing file", path)
    }
}

/// Makes a symbolic link to a directory.
#[cfg(unix)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a directory.
#[cfg(windows)]
fn symlink_dir(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(unix)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(src, dst)
}

/// Makes a symbolic link to a file.
#[cfg(windows)]
fn symlink_file(src: &Path, dst: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(src, dst)
}

/// Copies a regular file from one path to another, creating any parent
/// directories of the destination path as necessary.
///
/// Overwrites an existing destination file. Fails if the source path is a
/// directory or doesn't exist.
pub async fn copy_file(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{from:?} does not exist");
    }
    if !from.is_file() {
        bail!("{from:?} is not a file");
    }
    if let Some(dest_dir) = to.parent() {
        fs::create_dir_all(dest_dir)
            .await
            .fs_context("creating destination directory", dest_dir)?;
    }
    fs::copy(from, to).await.fs_context("copying file", to)?;
    Ok(())
}

/// Recursively copies a directory from one path to another, creating any
/// parent directories of the destination path as necessary.
///
/// Existing destination files are overwritten; symlinks are preserved on
/// platforms that support them. Fails if the source path is not a directory
/// or doesn't exist.
pub async fn copy_dir(from: &Path, to: &Path) -> Result<()> {
    if !from.exists() {
        bail!("{from:?} does not exist");
    }
    if !from.is_dir() {
        bail!("{from:?} is not a directory");
    }

    // Clone paths for move into blocking closure
    let from = from.to_path_buf();
    let to = to.to_path_buf();

    // Offload blocking traversal to the dedicated thread pool
    tokio::task::spawn_blocking(move || -> Result<()> {
        if let Some(parent) = to.parent() {
            std::fs::create_dir_all(parent)?;
        }

        for entry in walkdir::WalkDir::new(&from) {
            let entry = entry.map_err(|e| Error::Generic(format!("walking {from:?}: {e}")))?;
            debug_assert!(entry.path().starts_with(&from));
            let rel_path = entry
                .path()
                .strip_prefix(&from)
                .map_err(|e| Error::Generic(format!("stripping prefix {from:?}: {e}")))?;
            let dest_path = to.join(rel_path);

            if entry.file_type().is_symlink() {
                // Overwrite semantics: symlink creation fails on collision
                let _ = std::fs::remove_file(&dest_path);
                let target = std::fs::read_link(entry.path())?;
                if entry.path().is_dir() {
                    symlink_dir(&target, &dest_path)?;
                } else {
                    symlink_file(&target, &dest_path)?;
                }
            } else if entry.file_type().is_dir() {
                std::fs::create_dir_all(dest_path)?;
            } else {
                std::fs::copy(entry.path(), dest_path)?;
            }
        }

        Ok(())
    })
    .await
    .map_err(|e| Error::Generic(format!("Directory copy task panicked: {e}")))?
}

/// Moves a direct child of the build directory to the destination path.
///
/// Implemented as copy followed by delete of the source, never a rename:
/// the final output directory may be on a different volume. The source is
/// only deleted once the copy has fully succeeded.
pub async fn move_entry(from: &Path, to: &Path) -> Result<()> {
    if from.is_dir() {
        copy_dir(from, to).await?;
        fs::remove_dir_all(from)
            .await
            .fs_context("removing moved directory", from)?;
    } else {
        copy_file(from, to).await?;
        fs::remove_file(from)
            .await
            .fs_context("removing moved file", from)?;
    }
    Ok(())
}

/// Lists the direct children of a directory.
pub async fn read_dir_entries(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut entries = Vec::new();
    let mut reader = fs::read_dir(dir)
        .await
        .fs_context("reading directory", dir)?;
    while let Some(entry) = reader
        .next_entry()
        .await
        .fs_context("reading directory entry", dir)?
    {
        entries.push(entry.path());
    }
    // Deterministic processing order regardless of filesystem iteration order
    entries.sort();
    Ok(entries)
}
