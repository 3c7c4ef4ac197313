//! `.env` file parsing
//!
//! A flat KEY=VALUE file in the project root holding local secrets that
//! should not live in the shell profile or the Gradle scripts. Parsed
//! into an immutable map; lookups fall back to the process environment,
//! with file values taking precedence.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};

/// Default environment file name, looked up in the current directory
pub const ENV_FILE: &str = ".env";

/// Key/value pairs loaded from an environment file
#[derive(Debug, Default)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Load an environment file, treating an absent file as empty
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Ok(Self::parse(&content))
    }

    /// Parse environment file content
    ///
    /// Blank lines and lines starting with `#` are ignored. Remaining
    /// lines are split on the first `=` with key and value trimmed;
    /// lines without `=` are skipped. Later definitions of the same key
    /// overwrite earlier ones.
    pub fn parse(content: &str) -> Self {
        let mut values = HashMap::new();

        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some((key, value)) = line.split_once('=') {
                values.insert(key.trim().to_string(), value.trim().to_string());
            }
        }

        Self { values }
    }

    /// Look up a variable, preferring the file over the process environment
    ///
    /// Empty values count as unset either way.
    pub fn var(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| std::env::var(key).ok())
            .filter(|v| !v.is_empty())
    }
}
