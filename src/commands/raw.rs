//! Plain build fallthrough for unrecognized mode tokens

use anyhow::Result;

use crate::exec::gradle;

/// Forward an unrecognized task token straight to Gradle
///
/// No extra arguments are forwarded and no post-processing happens;
/// the Gradle exit code is propagated as-is.
#[derive(Debug)]
pub struct RawCommand {
    /// Raw Gradle task token
    mode: String,
}

impl RawCommand {
    pub fn new(mode: String) -> Self {
        Self { mode }
    }

    /// Execute the plain build
    pub fn execute(self, verbose: bool) -> Result<i32> {
        gradle::run(&self.mode, &[], verbose)
    }
}
