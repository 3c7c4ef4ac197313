//! APKGO CLI - A fast Gradle wrapper for Android APK workflows
//!
//! Classifies a build-mode token, drives the project's Gradle wrapper,
//! manages release signing credentials and reformats lint XML reports.
//!
//! ## Architecture
//!
//! ```text
//! Rust CLI → commands/ flows → ./gradlew / keytool (direct)
//! ```

mod artifact;
mod cli;
mod commands;
mod config;
mod error;
mod exec;
mod keystore;
mod lint;
mod mode;
mod utils;

use clap::Parser;

use cli::Cli;
use error::ApkgoError;

fn main() {
    let cli = Cli::parse();

    match cli.execute() {
        // Every flow reports the Gradle child's exit code; propagate it.
        Ok(code) => std::process::exit(code),
        Err(err) => {
            if let Some(apkgo_err) = err.downcast_ref::<ApkgoError>() {
                apkgo_err.display_with_hints();
            } else {
                utils::terminal::print_error(&format!("{:#}", err));
            }
            std::process::exit(1);
        }
    }
}
