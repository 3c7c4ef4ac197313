//! CLI argument parsing using clap derive macros

use anyhow::Result;
use clap::Parser;

use crate::commands::debug::DebugCommand;
use crate::commands::lint::{LintCommand, ReportWhen};
use crate::commands::raw::RawCommand;
use crate::commands::release::ReleaseCommand;
use crate::mode::BuildMode;

/// APKGO - Android APK Build Wrapper
///
/// A fast CLI wrapper around the Gradle wrapper for building, signing
/// and linting an Android application project.
#[derive(Parser, Debug)]
#[command(name = "apkgo")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// When to parse and print the lint report (lint flow only)
    #[arg(long, value_enum, default_value_t = ReportWhen::OnFailure)]
    pub show_report: ReportWhen,

    /// Gradle task token selecting the flow (matched as a case-insensitive
    /// substring: debug, lint, release; anything else is a plain build)
    pub mode: String,

    /// Extra arguments forwarded verbatim to the Gradle invocation
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

impl Cli {
    /// Execute the flow selected by the mode token
    ///
    /// Returns the exit code of the underlying Gradle invocation so the
    /// caller can propagate it to the shell.
    pub fn execute(self) -> Result<i32> {
        // Set up terminal colors
        if self.no_color {
            console::set_colors_enabled(false);
            console::set_colors_enabled_stderr(false);
        }

        let mode = BuildMode::classify(&self.mode);
        if self.verbose {
            eprintln!("Task '{}' routed to the {} flow", self.mode, mode);
        }

        match mode {
            BuildMode::Debug => DebugCommand::new(self.mode, self.args).execute(self.verbose),
            BuildMode::Lint => {
                LintCommand::new(self.mode, self.args, self.show_report).execute(self.verbose)
            }
            BuildMode::Release => ReleaseCommand::new(self.mode, self.args).execute(self.verbose),
            // Unrecognized tokens become a plain Gradle invocation with no
            // extra-args forwarding.
            BuildMode::Raw => RawCommand::new(self.mode).execute(self.verbose),
        }
    }
}
