//! Subprocess execution
//!
//! All invocations are synchronous, share the terminal with the child
//! (Gradle progress output, keytool's interactive prompts) and are
//! awaited to completion; there is no timeout or cancellation. A hung
//! child blocks the tool, which is acceptable for an interactive
//! developer utility.

use std::process::{Command, ExitStatus, Stdio};

use anyhow::{Context, Result};

/// Result of a subprocess execution
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded (exit code 0)
    pub success: bool,

    /// Process exit code (-1 if terminated by signal)
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a CommandResult from an exit status
    pub fn from_status(status: ExitStatus) -> Self {
        Self {
            success: status.success(),
            exit_code: status.code().unwrap_or(-1),
        }
    }
}

/// Run a command to completion with inherited stdio
pub fn run_command(program: &str, args: &[String]) -> Result<CommandResult> {
    let status = Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .with_context(|| format!("Failed to execute {}", program))?;

    Ok(CommandResult::from_status(status))
}

/// Check if a command exists in PATH
pub fn command_exists(program: &str) -> bool {
    which::which(program).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_run_command_success() {
        let args = vec!["-c".to_string(), "exit 0".to_string()];
        let result = run_command("sh", &args).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    #[cfg(unix)]
    fn test_run_command_reports_exit_code() {
        let args = vec!["-c".to_string(), "exit 7".to_string()];
        let result = run_command("sh", &args).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 7);
    }

    #[test]
    fn test_run_command_missing_program_is_error() {
        let result = run_command("definitely-not-a-real-program", &[]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_exists() {
        assert!(!command_exists("definitely-not-a-real-program"));
    }
}
