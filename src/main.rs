//! cef_bundle - Post-build packager for CEF examples.
//!
//! Builds a CEF example with cargo, copies the CEF runtime dependencies
//! next to the compiled binary, and relocates the assembled bundle to its
//! final output directory.

mod cli;
mod error;
mod packager;

use std::process;

#[tokio::main]
async fn main() {
    // Initialize logging; progress is info-level so it shows by default
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Run CLI and get exit code
    let exit_code = match cli::run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };

    process::exit(exit_code);
}
