//! Gradle wrapper invocation
//!
//! Always drives the project-local wrapper rather than a globally
//! installed Gradle, so builds use the project's pinned version.

use anyhow::{Context, Result};

use crate::error::{hints, ApkgoError};
use crate::exec::subprocess::run_command;

/// Resolve the Gradle wrapper executable for the current platform
pub fn wrapper() -> &'static str {
    if cfg!(target_os = "windows") {
        "gradlew.bat"
    } else {
        "./gradlew"
    }
}

/// Run a Gradle task with pass-through arguments
///
/// Streams Gradle output to the terminal and returns the child's exit
/// code without interpreting it; each flow decides what a nonzero exit
/// means for its own post-processing.
pub fn run(task: &str, extra_args: &[String], verbose: bool) -> Result<i32> {
    let mut args = Vec::with_capacity(extra_args.len() + 1);
    args.push(task.to_string());
    args.extend_from_slice(extra_args);

    if verbose {
        eprintln!("Running: {} {}", wrapper(), args.join(" "));
    }

    let result = run_command(wrapper(), &args)
        .map_err(|_| {
            ApkgoError::missing_tool(
                wrapper(),
                format!("running the '{}' task", task),
                hints::gradle_wrapper(),
            )
        })
        .with_context(|| format!("Failed to run Gradle task '{}'", task))?;

    Ok(result.exit_code)
}
