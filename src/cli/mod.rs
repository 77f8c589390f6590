//! Command line interface for the CEF packager.
//!
//! Maps parsed arguments onto an immutable [`Settings`] value and drives
//! the pipeline, translating outcomes into process exit codes: 0 on
//! success, cargo's own exit code on a build failure, 1 for everything
//! else fatal.

mod args;

pub use args::Args;

use crate::error::{Error, Result};
use crate::packager::{self, Settings, SettingsBuilder};
use clap::Parser;
use clap::error::ErrorKind;

/// Main CLI entry point; returns the process exit code.
pub async fn run() -> Result<i32> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // Help and version print to stdout and are a success; anything
            // else is a usage error on stderr.
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            e.print()?;
            return Ok(code);
        }
    };

    if let Err(reason) = args.validate() {
        eprintln!("Error: {reason}");
        return Ok(1);
    }

    let settings = resolve_settings(&args)?;
    match packager::run(&settings).await {
        Ok(()) => Ok(0),
        Err(Error::BuildFailed { code }) => {
            eprintln!("Error: cargo build failed");
            Ok(code)
        }
        Err(e) => Err(e),
    }
}

/// Resolves CLI arguments into pipeline settings.
fn resolve_settings(args: &Args) -> Result<Settings> {
    SettingsBuilder::new()
        .example(&args.example)
        .profile(&args.profile)
        .cargo_target_dir(&args.cargo_target_dir)
        .final_output_dir(&args.final_output_dir)
        .skip_pdb(args.skip_pdb)
        .min_locales(args.min_locales)
        .include_dx_compiler(args.include_dx_compiler)
        .use_upx(args.use_upx)
        .build()
}
