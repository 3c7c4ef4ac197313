//! Lint report parsing and rendering
//!
//! Android lint writes its findings as an XML document of `<issue>`
//! elements, each with a nested `<location>`. This module extracts the
//! issues and reprints them as `file:line:column` headers a terminal or
//! editor can jump to.

use std::path::Path;

use anyhow::Result;
use console::style;

use crate::error::{hints, ApkgoError};

/// Report path produced by the Gradle lint task, relative to the
/// project root
pub const REPORT_PATH: &str = "app/lint-baseline.xml";

/// A single lint finding
///
/// `line` and `column` are kept as the raw attribute strings; they are
/// only ever reprinted, never computed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintIssue {
    /// Human-readable description of the finding
    pub message: String,

    /// Source file the finding points at, relative to the module root
    pub file: String,

    /// Line number as written in the report
    pub line: String,

    /// Column number as written in the report
    pub column: String,
}

/// Parse a lint report file into its located issues
///
/// A missing or malformed file is an error; the report is expected to
/// be freshly written by the lint run that just finished.
pub fn parse_report(path: &Path) -> Result<Vec<LintIssue>> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ApkgoError::report_error(
            path,
            "failed to read report",
            Some(e.into()),
            hints::lint_report(),
        )
    })?;

    parse_str(&content).map_err(|e| {
        ApkgoError::report_error(
            path,
            "failed to parse report",
            Some(e),
            hints::lint_report(),
        )
        .into()
    })
}

/// Parse lint report XML content
///
/// Issues without a `<location>` child carry no position to print and
/// are skipped. Missing attributes become empty strings rather than
/// errors, matching how lint omits columns for some checks.
pub fn parse_str(content: &str) -> Result<Vec<LintIssue>> {
    let doc = roxmltree::Document::parse(content)?;

    let issues = doc
        .root_element()
        .children()
        .filter(|node| node.has_tag_name("issue"))
        .filter_map(|issue| {
            let location = issue
                .children()
                .find(|child| child.has_tag_name("location"))?;

            Some(LintIssue {
                message: issue.attribute("message").unwrap_or_default().to_string(),
                file: location.attribute("file").unwrap_or_default().to_string(),
                line: location.attribute("line").unwrap_or_default().to_string(),
                column: location.attribute("column").unwrap_or_default().to_string(),
            })
        })
        .collect();

    Ok(issues)
}

/// Print issues as highlighted header + message blocks
///
/// One block per issue in document order: a bold red
/// `<root>/<file>:<line>:<column>` header, the message, a blank line.
pub fn print_issues(issues: &[LintIssue], source_root: &Path) {
    for issue in issues {
        let header = format!(
            "{}/{}:{}:{}",
            source_root.display(),
            issue.file,
            issue.line,
            issue.column
        );
        println!("{}", style(header).red().bold());
        println!("{}\n", issue.message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_ISSUES: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<issues format="6">
    <issue message="Unused resource R.string.title">
        <location file="src/main/res/values/strings.xml" line="4" column="13"/>
    </issue>
    <issue message="Hardcoded string">
        <location file="src/main/res/layout/activity_main.xml" line="21" column="9"/>
    </issue>
</issues>
"#;

    #[test]
    fn test_parse_two_issues_in_document_order() {
        let issues = parse_str(TWO_ISSUES).unwrap();

        assert_eq!(issues.len(), 2);
        assert_eq!(issues[0].message, "Unused resource R.string.title");
        assert_eq!(issues[0].file, "src/main/res/values/strings.xml");
        assert_eq!(issues[0].line, "4");
        assert_eq!(issues[0].column, "13");
        assert_eq!(issues[1].message, "Hardcoded string");
        assert_eq!(issues[1].line, "21");
    }

    #[test]
    fn test_parse_skips_issue_without_location() {
        let content = r#"
<issues>
    <issue message="No location here"/>
    <issue message="Located">
        <location file="Foo.java" line="1" column="2"/>
    </issue>
</issues>
"#;

        let issues = parse_str(content).unwrap();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Located");
    }

    #[test]
    fn test_parse_missing_attributes_become_empty() {
        let content = r#"
<issues>
    <issue>
        <location file="Foo.java"/>
    </issue>
</issues>
"#;

        let issues = parse_str(content).unwrap();
        assert_eq!(issues[0].message, "");
        assert_eq!(issues[0].line, "");
        assert_eq!(issues[0].column, "");
    }

    #[test]
    fn test_parse_empty_report() {
        let issues = parse_str("<issues/>").unwrap();
        assert!(issues.is_empty());
    }

    #[test]
    fn test_parse_malformed_xml_is_error() {
        assert!(parse_str("<issues><issue message=").is_err());
    }

    #[test]
    fn test_parse_report_missing_file_is_error() {
        let err = parse_report(Path::new("/nonexistent/lint-baseline.xml")).unwrap_err();
        assert!(err.to_string().contains("lint-baseline.xml"));
    }
}
