//! CEF source root location.
//!
//! The prebuilt CEF distribution is expected under
//! `$HOME/.local/share/cef`, the location `export-cef-dir` writes to. Some
//! distributions nest the binaries one level deeper in a `Release/`
//! subdirectory; when that directory exists it supersedes the root.

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};

/// Resolved location of the prebuilt CEF runtime files.
#[derive(Clone, Debug)]
pub struct SourceRoot {
    /// The export directory itself (what `CEF_PATH` points at).
    root: PathBuf,

    /// Directory the runtime binaries are actually read from.
    ///
    /// Equal to `root`, or `root/Release` when that override exists.
    bin_dir: PathBuf,
}

impl SourceRoot {
    /// Locates the CEF export under the user's home directory.
    ///
    /// # Errors
    ///
    /// Fatal when the home directory cannot be determined, when the export
    /// directory is absent (the message names the export command), or when
    /// the path exists but is not a directory.
    pub async fn locate() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Generic("could not determine home directory".to_string()))?;
        Self::resolve(home.join(".local").join("share").join("cef")).await
    }

    /// Validates an export directory and probes for the `Release/` override.
    pub async fn resolve(root: PathBuf) -> Result<Self> {
        match tokio::fs::metadata(&root).await {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => return Err(Error::SourceRootNotADirectory { path: root }),
            Err(_) => return Err(Error::SourceRootMissing { path: root }),
        }

        let release = root.join("Release");
        let bin_dir = match tokio::fs::metadata(&release).await {
            Ok(meta) if meta.is_dir() => release,
            _ => root.clone(),
        };
        log::info!("Using CEF binaries from: {}", bin_dir.display());

        Ok(Self { root, bin_dir })
    }

    /// Returns the export directory (the value of `CEF_PATH`).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Returns the directory runtime binaries are copied from.
    pub fn bin_dir(&self) -> &Path {
        &self.bin_dir
    }
}
