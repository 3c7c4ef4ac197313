//! Debug flow implementation

use std::path::Path;

use anyhow::Result;

use crate::artifact::{self, DEBUG_APK};
use crate::exec::gradle;

/// Build a debug APK and open it on success
#[derive(Debug)]
pub struct DebugCommand {
    /// Raw Gradle task token
    mode: String,

    /// Pass-through arguments for Gradle
    extra_args: Vec<String>,
}

impl DebugCommand {
    pub fn new(mode: String, extra_args: Vec<String>) -> Self {
        Self { mode, extra_args }
    }

    /// Execute the debug flow
    pub fn execute(self, verbose: bool) -> Result<i32> {
        let code = gradle::run(&self.mode, &self.extra_args, verbose)?;

        if code == 0 {
            artifact::open_apk(Path::new(DEBUG_APK));
        }

        Ok(code)
    }
}
