//! Error types and helpers for user-friendly error messages
//!
//! This module provides custom error types with actionable hints and
//! suggestions to help users quickly resolve common issues.

use std::path::PathBuf;

use thiserror::Error;

/// Custom error types with helpful context and suggestions
#[derive(Error, Debug)]
pub enum ApkgoError {
    /// Signing or environment configuration errors
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },

    /// Tool/executable not found or misconfigured
    #[error("Missing tool: {tool}")]
    MissingTool {
        tool: String,
        required_for: String,
        hint: String,
    },

    /// Lint report file missing or malformed
    #[error("Lint report error for {path}: {message}")]
    Report {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<anyhow::Error>,
        hint: Option<String>,
    },
}

impl ApkgoError {
    /// Create a configuration error with a hint
    pub fn config_error_with_hint(
        message: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
            hint: Some(hint.into()),
        }
    }

    /// Create a missing tool error
    pub fn missing_tool(
        tool: impl Into<String>,
        required_for: impl Into<String>,
        hint: impl Into<String>,
    ) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            required_for: required_for.into(),
            hint: hint.into(),
        }
    }

    /// Create a lint report error with source and hint
    pub fn report_error(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: Option<anyhow::Error>,
        hint: impl Into<String>,
    ) -> Self {
        Self::Report {
            path: path.into(),
            message: message.into(),
            source,
            hint: Some(hint.into()),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        match self {
            ApkgoError::Config { hint, .. } | ApkgoError::Report { hint, .. } => {
                if let Some(h) = hint {
                    eprintln!("\n{} {}", style("HINT:").yellow().bold(), h);
                }
            }
            ApkgoError::MissingTool { hint, .. } => {
                eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
            }
        }

        eprintln!();
    }
}

/// Common error hints for missing tools and configuration
pub mod hints {
    /// Get hint for missing keytool
    pub fn keytool() -> &'static str {
        "keytool ships with the Java Development Kit:\n\
         • macOS: brew install openjdk\n\
         • Ubuntu: sudo apt install default-jdk\n\
         • Termux: pkg install openjdk-17\n\
         \n\
         Ensure the JDK bin directory is in your PATH."
    }

    /// Get hint for missing Gradle wrapper
    pub fn gradle_wrapper() -> &'static str {
        "Could not run the Gradle wrapper. Make sure you are in the root of an\n\
         Android project containing gradlew, and that it is executable:\n\
         • Run: chmod +x gradlew"
    }

    /// Get hint for missing signing configuration
    pub fn signing_config() -> &'static str {
        "Release builds need signing credentials. Provide them in a .env file\n\
         in the project root (KEY=VALUE per line, # comments) or export them\n\
         in the environment:\n\
         • KEYSTORE_PATH=/path/to/release.keystore\n\
         • KEYSTORE_PASSWORD=...\n\
         • KEY_PASSWORD=...\n\
         • KEY_ALIAS=..."
    }

    /// Get hint for a missing or malformed lint report
    pub fn lint_report() -> &'static str {
        "The lint report is expected at app/lint-baseline.xml and must be\n\
         freshly produced by the lint run. Check that the Gradle lint task\n\
         is configured to write its baseline there."
    }
}
