//! Cargo build invocation and post-build verification.
//!
//! The build runs with an explicit set of environment overrides applied to
//! that single child process only; the tool's own environment is never
//! mutated.

use super::{settings::Settings, source::SourceRoot};
use crate::error::{Error, Result};
use std::ffi::OsString;

/// Computes the environment overrides for the cargo invocation.
///
/// `CEF_PATH` points the build script at the export directory, and the CEF
/// binary directory is appended (never prepended or replaced) to the search
/// path so the linked example can resolve the CEF libraries. On Unix the
/// dynamic loader reads `LD_LIBRARY_PATH` rather than `PATH`, so both are
/// extended there.
fn build_env(source: &SourceRoot) -> Vec<(OsString, OsString)> {
    let mut env = vec![(
        OsString::from("CEF_PATH"),
        source.root().as_os_str().to_os_string(),
    )];

    let mut vars = vec!["PATH"];
    if cfg!(unix) {
        vars.push("LD_LIBRARY_PATH");
    }

    for var in vars {
        let mut paths: Vec<_> = std::env::var_os(var)
            .map(|val| std::env::split_paths(&val).collect())
            .unwrap_or_default();
        paths.push(source.bin_dir().to_path_buf());
        if let Ok(joined) = std::env::join_paths(paths) {
            env.push((OsString::from(var), joined));
        }
    }

    env
}

/// Builds the example with cargo and verifies the executable exists.
///
/// Build output streams straight to the user's terminal. A cargo failure is
/// fatal and carries cargo's own exit code; an executable missing after a
/// reported success is the distinct silent-failure error.
pub async fn run_cargo_build(settings: &Settings, source: &SourceRoot) -> Result<()> {
    log::info!(
        "Building example '{}' with profile '{}'...",
        settings.example(),
        settings.profile()
    );

    let status = tokio::process::Command::new("cargo")
        .args(["build", "--profile", settings.profile()])
        .args(["--example", settings.example()])
        .envs(build_env(source))
        .current_dir(settings.project_root())
        .status()
        .await
        .map_err(|source| Error::CommandFailed {
            command: "cargo".to_string(),
            source,
        })?;

    if !status.success() {
        return Err(Error::BuildFailed {
            code: status.code().unwrap_or(1),
        });
    }
    log::info!("Build successful.");

    let exe_path = settings.build_output_dir().join(settings.executable_name());
    match tokio::fs::metadata(&exe_path).await {
        Ok(meta) if meta.is_file() => Ok(()),
        _ => Err(Error::ExecutableMissing { path: exe_path }),
    }
}
