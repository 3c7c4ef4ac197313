//! Release flow implementation
//!
//! Order matters here: signing credentials are resolved before anything
//! touches the filesystem or spawns a build, so a misconfigured
//! environment fails before any expensive work.

use std::path::Path;

use anyhow::Result;

use crate::artifact::{self, RELEASE_APK};
use crate::config::env_file::{EnvFile, ENV_FILE};
use crate::config::signing::SigningConfig;
use crate::exec::gradle;
use crate::keystore;

/// Build a signed release APK and open it on success
#[derive(Debug)]
pub struct ReleaseCommand {
    /// Raw Gradle task token
    mode: String,

    /// Pass-through arguments for Gradle
    extra_args: Vec<String>,
}

impl ReleaseCommand {
    pub fn new(mode: String, extra_args: Vec<String>) -> Self {
        Self { mode, extra_args }
    }

    /// Execute the release flow
    pub fn execute(self, verbose: bool) -> Result<i32> {
        let env = EnvFile::load(Path::new(ENV_FILE))?;
        let signing = SigningConfig::resolve(&env)?;

        keystore::ensure(&signing, verbose)?;

        let code = gradle::run(&self.mode, &self.extra_args, verbose)?;

        if code == 0 {
            artifact::open_apk(Path::new(RELEASE_APK));
        }

        Ok(code)
    }
}
