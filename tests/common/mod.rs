//! Shared fixture helpers for packager integration tests.

#![allow(dead_code)]

use cef_bundle::{SettingsBuilder, SourceRoot};
use std::path::Path;

/// Writes a file, creating parent directories as needed.
pub fn write_file(path: &Path, contents: &[u8]) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}

/// Settings builder pre-wired for a fixture project root.
///
/// The final output directory lives inside the fixture so tests never
/// touch anything outside their tempdir.
pub fn settings_for(root: &Path) -> SettingsBuilder {
    SettingsBuilder::new()
        .example("demo")
        .project_root(root)
        .final_output_dir(root.join("out"))
}

/// Resolves a source root fixture, creating the directory first.
pub async fn source_at(dir: &Path) -> SourceRoot {
    std::fs::create_dir_all(dir).unwrap();
    SourceRoot::resolve(dir.to_path_buf()).await.unwrap()
}

/// Sorted names of a directory's direct children; empty if absent.
pub fn list_names(dir: &Path) -> Vec<String> {
    let Ok(reader) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut names: Vec<String> = reader
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
