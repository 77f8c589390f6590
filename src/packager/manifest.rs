//! Static manifest of CEF runtime dependencies.
//!
//! The manifest is compiled into the tool and selected per platform. Every
//! entry is copied best-effort: a file absent from the CEF export is a
//! warning, not an error, since a distribution may legitimately lack
//! optional components.

/// Name of the locale pack subdirectory inside a CEF distribution.
pub const LOCALES_DIR: &str = "locales";

/// The locale pack that survives `--min-locales`.
pub const DEFAULT_LOCALE_PAK: &str = "en-US.pak";

/// Extension of debug-symbol files excluded by `--skip-pdb`.
pub const DEBUG_SYMBOL_EXTENSION: &str = "pdb";

/// A binary that is safe to repack with UPX.
#[derive(Debug, Clone, Copy)]
pub struct CompressEntry {
    /// File name inside the final output directory
    pub name: &'static str,
    /// Whether upx needs `--force` for this binary
    pub force: bool,
}

/// Fixed list of runtime files a CEF example needs next to its executable.
#[derive(Debug, Clone)]
pub struct DependencyManifest {
    /// Files copied unconditionally (when present at the source)
    pub files: &'static [&'static str],
    /// Files copied only with `--include-dx-compiler`
    pub optional_files: &'static [&'static str],
    /// UPX allow-list, applied post-relocation
    pub compressible: &'static [CompressEntry],
}

impl DependencyManifest {
    /// Manifest for the Windows CEF binary distribution.
    pub fn windows() -> Self {
        Self {
            files: &[
                "libcef.dll",
                "chrome_elf.dll",
                "v8_context_snapshot.bin",
                "d3dcompiler_47.dll",
                "vk_swiftshader.dll",
                "vulkan-1.dll",
                "resources.pak",
                "chrome_100_percent.pak",
                "chrome_200_percent.pak",
                "icudtl.dat",
                "libEGL.dll",
                "libGLESv2.dll",
                "vk_swiftshader_icd.json",
            ],
            optional_files: &["dxcompiler.dll", "dxil.dll"],
            compressible: &[
                CompressEntry {
                    name: "libcef.dll",
                    force: true,
                },
                CompressEntry {
                    name: "chrome_elf.dll",
                    force: false,
                },
            ],
        }
    }

    /// Manifest for the flat Unix CEF binary distribution.
    ///
    /// The DirectX shader compiler has no Unix counterpart, so the optional
    /// list is empty there.
    pub fn unix() -> Self {
        Self {
            files: &[
                "libcef.so",
                "libEGL.so",
                "libGLESv2.so",
                "libvk_swiftshader.so",
                "libvulkan.so.1",
                "vk_swiftshader_icd.json",
                "v8_context_snapshot.bin",
                "snapshot_blob.bin",
                "chrome-sandbox",
                "resources.pak",
                "chrome_100_percent.pak",
                "chrome_200_percent.pak",
                "icudtl.dat",
            ],
            optional_files: &[],
            compressible: &[CompressEntry {
                name: "libcef.so",
                force: true,
            }],
        }
    }

    /// Manifest matching the platform the tool was compiled for.
    pub fn for_host() -> Self {
        if cfg!(windows) {
            Self::windows()
        } else {
            Self::unix()
        }
    }
}
