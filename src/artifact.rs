//! Build artifact locations and opening
//!
//! Output paths follow the standard Android Gradle plugin layout and
//! are fixed relative to the project root.

use std::path::Path;

use crate::utils::terminal::print_warning;

/// Debug APK produced by the debug flow
pub const DEBUG_APK: &str = "app/build/outputs/apk/debug/app-debug.apk";

/// Release APK produced by the release flow
pub const RELEASE_APK: &str = "app/build/outputs/apk/release/app-release.apk";

/// Open an APK with the system opener
///
/// On Android/Termux this hands the APK to the installer. Failure to
/// open is a warning, not an error; the build itself already succeeded.
pub fn open_apk(path: &Path) {
    println!("Opening {}", path.display());

    if let Err(e) = open::that(path) {
        print_warning(&format!("failed to open {}: {}", path.display(), e));
    }
}
