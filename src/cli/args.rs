//! Command line argument parsing and validation.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Post-build packager for CEF examples
#[derive(Parser, Debug)]
#[command(
    name = "cef_bundle",
    version,
    about = "Assembles a deployable CEF bundle next to a compiled example",
    long_about = "Builds a CEF example with cargo, copies the CEF runtime dependencies \
(shared libraries, resource packs, locale data) next to the compiled binary, then moves \
the assembled bundle to the final output directory.

Usage:
  cef_bundle --example cefsimple
  cef_bundle -e cefsimple -p debug -s false
  cef_bundle -e cefsimple --min-locales false --use-upx true

Exit code 0 = bundle assembled at the final output directory."
)]
pub struct Args {
    /// Name of the example to build
    #[arg(short, long, value_name = "NAME")]
    pub example: String,

    /// Build profile
    #[arg(short, long, value_name = "PROFILE", default_value = "release")]
    pub profile: String,

    /// Path to the cargo target directory
    #[arg(short = 'c', long, value_name = "DIR", default_value = "target")]
    pub cargo_target_dir: PathBuf,

    /// Path for the final output, resolved against the working directory
    #[arg(short = 'f', long, value_name = "DIR", default_value = "../../cef")]
    pub final_output_dir: PathBuf,

    /// Skip .pdb debug symbol files to reduce size
    #[arg(short = 's', long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub skip_pdb: bool,

    /// Only include the en-US locale pack
    #[arg(short = 'm', long, value_name = "BOOL", default_value_t = true, action = ArgAction::Set)]
    pub min_locales: bool,

    /// Include the DirectX shader compiler libraries
    #[arg(short = 'd', long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
    pub include_dx_compiler: bool,

    /// Compress large binaries with UPX if available
    #[arg(short = 'u', long, value_name = "BOOL", default_value_t = false, action = ArgAction::Set)]
    pub use_upx: bool,
}

impl Args {
    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.example.is_empty() {
            return Err("Example name cannot be empty".to_string());
        }

        if self.profile.is_empty() {
            return Err("Profile cannot be empty".to_string());
        }

        Ok(())
    }
}
