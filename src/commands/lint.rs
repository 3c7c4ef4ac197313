//! Lint flow implementation

use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::exec::gradle;
use crate::lint::{self, REPORT_PATH};

/// When to parse and print the lint report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportWhen {
    /// Only when the lint task exits nonzero
    ///
    /// This is the historical behavior: a successful run that still
    /// recorded issues stays silent. Use `always` to see those.
    OnFailure,

    /// After every run, regardless of exit code
    Always,

    /// Never; just run the task
    Never,
}

impl std::fmt::Display for ReportWhen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportWhen::OnFailure => write!(f, "on-failure"),
            ReportWhen::Always => write!(f, "always"),
            ReportWhen::Never => write!(f, "never"),
        }
    }
}

impl ReportWhen {
    /// Decide whether to show the report for a given Gradle exit code
    fn should_show(self, exit_code: i32) -> bool {
        match self {
            ReportWhen::OnFailure => exit_code != 0,
            ReportWhen::Always => true,
            ReportWhen::Never => false,
        }
    }
}

/// Run the lint task and reformat its XML report
#[derive(Debug)]
pub struct LintCommand {
    /// Raw Gradle task token
    mode: String,

    /// Pass-through arguments for Gradle
    extra_args: Vec<String>,

    /// Report display policy
    show_report: ReportWhen,
}

impl LintCommand {
    pub fn new(mode: String, extra_args: Vec<String>, show_report: ReportWhen) -> Self {
        Self {
            mode,
            extra_args,
            show_report,
        }
    }

    /// Execute the lint flow
    pub fn execute(self, verbose: bool) -> Result<i32> {
        // The report must come from this run, not a stale one.
        let report = Path::new(REPORT_PATH);
        if report.exists() {
            std::fs::remove_file(report)
                .with_context(|| format!("Failed to remove stale report {}", report.display()))?;

            if verbose {
                eprintln!("Removed stale report {}", report.display());
            }
        }

        let code = gradle::run(&self.mode, &self.extra_args, verbose)?;

        if self.show_report.should_show(code) {
            let issues = lint::parse_report(report)?;
            let source_root = std::env::current_dir()?.join("app");
            lint::print_issues(&issues, &source_root);
        }

        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_on_failure_shows_only_for_nonzero_exit() {
        assert!(!ReportWhen::OnFailure.should_show(0));
        assert!(ReportWhen::OnFailure.should_show(1));
        assert!(ReportWhen::OnFailure.should_show(-1));
    }

    #[test]
    fn test_always_and_never_ignore_exit_code() {
        assert!(ReportWhen::Always.should_show(0));
        assert!(ReportWhen::Always.should_show(1));
        assert!(!ReportWhen::Never.should_show(0));
        assert!(!ReportWhen::Never.should_show(1));
    }
}
