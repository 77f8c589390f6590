//! Resolved packager settings.
//!
//! All paths and toggles are resolved exactly once, before the pipeline
//! starts; nothing re-reads a toggle or re-resolves a path mid-run.

use crate::error::{Error, Result};
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Immutable configuration for one packaging run.
///
/// Constructed via [`SettingsBuilder`]. Relative paths are resolved against
/// the project root (the directory the tool is invoked from).
#[derive(Clone, Debug)]
pub struct Settings {
    /// Example target to build and package.
    example: String,

    /// Cargo build profile.
    profile: String,

    /// Cargo target directory, relative to the project root.
    cargo_target_dir: PathBuf,

    /// Final bundle location, absolute.
    final_output_dir: PathBuf,

    /// Directory all relative paths resolve against.
    project_root: PathBuf,

    /// Leave `.pdb` debug symbols behind during relocation.
    skip_pdb: bool,

    /// Ship only the en-US locale pack.
    min_locales: bool,

    /// Also copy the DirectX shader compiler libraries.
    include_dx_compiler: bool,

    /// Repack large binaries with UPX when the tool is available.
    use_upx: bool,
}

impl Settings {
    /// Returns the example name being packaged.
    pub fn example(&self) -> &str {
        &self.example
    }

    /// Returns the cargo build profile.
    pub fn profile(&self) -> &str {
        &self.profile
    }

    /// Returns the project root directory.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Returns the directory cargo places example binaries in.
    ///
    /// This is also where runtime dependencies are materialized before the
    /// bundle moves to its final location.
    pub fn build_output_dir(&self) -> PathBuf {
        self.project_root
            .join(&self.cargo_target_dir)
            .join(&self.profile)
            .join("examples")
    }

    /// Returns the final bundle directory (absolute).
    pub fn final_output_dir(&self) -> &Path {
        &self.final_output_dir
    }

    /// Returns the executable file name for the example.
    ///
    /// Automatically appends `.exe` on Windows.
    pub fn executable_name(&self) -> String {
        format!("{}{}", self.example, std::env::consts::EXE_SUFFIX)
    }

    /// Whether `.pdb` files are excluded from the final bundle.
    pub fn skip_pdb(&self) -> bool {
        self.skip_pdb
    }

    /// Whether only the en-US locale pack is shipped.
    pub fn min_locales(&self) -> bool {
        self.min_locales
    }

    /// Whether the DirectX shader compiler libraries are included.
    pub fn include_dx_compiler(&self) -> bool {
        self.include_dx_compiler
    }

    /// Whether UPX compression runs after relocation.
    pub fn use_upx(&self) -> bool {
        self.use_upx
    }
}

/// Builder for constructing [`Settings`].
#[derive(Debug, Default)]
pub struct SettingsBuilder {
    example: Option<String>,
    profile: Option<String>,
    cargo_target_dir: Option<PathBuf>,
    final_output_dir: Option<PathBuf>,
    project_root: Option<PathBuf>,
    skip_pdb: Option<bool>,
    min_locales: Option<bool>,
    include_dx_compiler: Option<bool>,
    use_upx: Option<bool>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the example to build and package.
    ///
    /// # Required
    pub fn example(mut self, name: impl Into<String>) -> Self {
        self.example = Some(name.into());
        self
    }

    /// Sets the cargo build profile. Default: `release`.
    pub fn profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Sets the cargo target directory. Default: `target`.
    pub fn cargo_target_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.cargo_target_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the final bundle location. Default: `../../cef`.
    pub fn final_output_dir<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.final_output_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets the directory relative paths resolve against.
    ///
    /// Default: the current working directory.
    pub fn project_root<P: AsRef<Path>>(mut self, dir: P) -> Self {
        self.project_root = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Excludes `.pdb` debug symbols from the bundle. Default: true.
    pub fn skip_pdb(mut self, skip: bool) -> Self {
        self.skip_pdb = Some(skip);
        self
    }

    /// Ships only the en-US locale pack. Default: true.
    pub fn min_locales(mut self, min: bool) -> Self {
        self.min_locales = Some(min);
        self
    }

    /// Includes the DirectX shader compiler libraries. Default: false.
    pub fn include_dx_compiler(mut self, include: bool) -> Self {
        self.include_dx_compiler = Some(include);
        self
    }

    /// Repacks large binaries with UPX. Default: false.
    pub fn use_upx(mut self, use_upx: bool) -> Self {
        self.use_upx = Some(use_upx);
        self
    }

    /// Resolves the final immutable [`Settings`].
    ///
    /// # Errors
    ///
    /// Fails when the example name is missing or empty, or when the current
    /// directory cannot be determined while no project root was given.
    pub fn build(self) -> Result<Settings> {
        let example = self
            .example
            .filter(|name| !name.is_empty())
            .ok_or_else(|| Error::Generic("example name must not be empty".to_string()))?;

        let project_root = match self.project_root {
            Some(root) => root,
            None => std::env::current_dir()?,
        };

        let final_output_dir = self
            .final_output_dir
            .unwrap_or_else(|| PathBuf::from("../../cef"));
        let final_output_dir = final_output_dir
            .absolutize_from(&project_root)
            .map_err(|e| Error::Generic(format!("resolving final output directory: {e}")))?
            .to_path_buf();

        Ok(Settings {
            example,
            profile: self.profile.unwrap_or_else(|| "release".to_string()),
            cargo_target_dir: self
                .cargo_target_dir
                .unwrap_or_else(|| PathBuf::from("target")),
            final_output_dir,
            project_root,
            skip_pdb: self.skip_pdb.unwrap_or(true),
            min_locales: self.min_locales.unwrap_or(true),
            include_dx_compiler: self.include_dx_compiler.unwrap_or(false),
            use_upx: self.use_upx.unwrap_or(false),
        })
    }
}
