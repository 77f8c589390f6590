//! Error types for packaging operations.
//!
//! All fatal conditions of the pipeline are expressed here; per-file
//! degradations (missing optional dependency, failed compression) are
//! logged at the call site instead of surfacing as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all packager operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors without further context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO errors annotated with the operation and path they came from
    #[error("{context} at {}: {source}", .path.display())]
    Fs {
        /// What the packager was doing
        context: String,
        /// Path the operation targeted
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// External command could not be spawned
    #[error("Failed to execute {command}: {source}")]
    CommandFailed {
        /// Command that failed
        command: String,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// Cargo reported a build failure; carries cargo's own exit code
    #[error("cargo build failed with exit code {code}")]
    BuildFailed {
        /// Exit code reported by cargo (1 when cargo was killed by a signal)
        code: i32,
    },

    /// CEF export directory is absent
    #[error(
        "CEF source path not found: '{}'. Export CEF first with \
         'cargo run -p export-cef-dir -- --force $HOME/.local/share/cef'",
        .path.display()
    )]
    SourceRootMissing {
        /// Expected export location
        path: PathBuf,
    },

    /// CEF export location exists but is not usable
    #[error("CEF source path exists but is not a directory: '{}'", .path.display())]
    SourceRootNotADirectory {
        /// Offending path
        path: PathBuf,
    },

    /// Build reported success but the executable is not where it should be
    #[error(
        "Executable not found after build at {}. \
         Build might have failed silently or output is elsewhere.",
        .path.display()
    )]
    ExecutableMissing {
        /// Expected executable location
        path: PathBuf,
    },

    /// Generic errors from anyhow
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    /// Free-form errors raised via [`bail!`](crate::bail)
    #[error("{0}")]
    Generic(String),
}

/// Return early with an [`Error::Generic`] built from a format string.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::error::Error::Generic(format!($($arg)*)))
    };
}

/// Extension trait attaching filesystem context to IO results.
pub trait ErrorExt<T> {
    /// Wraps an IO error with the operation description and the path involved.
    fn fs_context(self, context: &str, path: &std::path::Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::io::Result<T> {
    fn fs_context(self, context: &str, path: &std::path::Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            context: context.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}
