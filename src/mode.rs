//! Build mode classification
//!
//! The mode token is the raw Gradle task name (e.g. `assembleDebug`,
//! `bundleRelease`, `lintProdRelease`). Flows are selected by
//! case-insensitive substring match so custom task names still route to
//! the right flow.

use std::fmt;

/// Flow selected from the raw mode token
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    /// Debug build, opens the debug APK on success
    Debug,
    /// Lint run, reformats the XML report
    Lint,
    /// Release build with signing credentials, opens the release APK on success
    Release,
    /// Plain Gradle invocation for anything unrecognized
    Raw,
}

impl BuildMode {
    /// Classify a mode token by case-insensitive substring match
    ///
    /// Checked in order: debug, lint, release. A token containing more
    /// than one keyword routes to the first match, so `lintDebug` is a
    /// debug build and `lintRelease` is a lint run.
    pub fn classify(token: &str) -> Self {
        let upper = token.to_uppercase();

        if upper.contains("DEBUG") {
            BuildMode::Debug
        } else if upper.contains("LINT") {
            BuildMode::Lint
        } else if upper.contains("RELEASE") {
            BuildMode::Release
        } else {
            BuildMode::Raw
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildMode::Debug => write!(f, "debug"),
            BuildMode::Lint => write!(f, "lint"),
            BuildMode::Release => write!(f, "release"),
            BuildMode::Raw => write!(f, "raw"),
        }
    }
}
