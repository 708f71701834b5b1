use anyhow::Result;
use regex::Regex;

use crate::core;
use crate::db::{DEFAULT_BRANCH_PATTERN, DEFAULT_HOST_URL, Database};
use crate::git::Git;
use crate::views::DoctorIssueView;

pub fn run(db: &Database, git: &Git, porcelain: bool, fix: bool) -> Result<()> {
    let mut settings = db.settings()?;
    let mut issues = Vec::new();
    let mut changed = false;

    if let Err(err) = Regex::new(&settings.branch_pattern) {
        issues.push(DoctorIssueView {
            severity: "error".to_string(),
            code: "invalid_branch_pattern".to_string(),
            message: format!("stored pattern does not compile: {err}"),
        });
        if fix {
            settings.branch_pattern = DEFAULT_BRANCH_PATTERN.to_string();
            changed = true;
        }
    }

    if settings.host_url.trim().is_empty() {
        issues.push(DoctorIssueView {
            severity: "error".to_string(),
            code: "blank_host_url".to_string(),
            message: "host URL is blank; issue links cannot be composed".to_string(),
        });
        if fix {
            settings.host_url = DEFAULT_HOST_URL.to_string();
            changed = true;
        }
    } else if !settings.host_url.starts_with("https://")
        && !settings.host_url.starts_with("http://")
    {
        issues.push(DoctorIssueView {
            severity: "warning".to_string(),
            code: "non_http_host_url".to_string(),
            message: format!("host URL '{}' is not http(s)", settings.host_url),
        });
    }

    if !settings.path_pattern.is_empty() && !settings.path_pattern.contains("{0}") {
        issues.push(DoctorIssueView {
            severity: "warning".to_string(),
            code: "path_missing_placeholder".to_string(),
            message: format!(
                "path template '{}' never references capture {{0}}",
                settings.path_pattern
            ),
        });
    }

    match git.first_remote_url()? {
        None => issues.push(DoctorIssueView {
            severity: "warning".to_string(),
            code: "no_remote".to_string(),
            message: "no git remote configured; branch links are unavailable".to_string(),
        }),
        Some(raw) => {
            if core::https_base_url(&raw).is_none() {
                issues.push(DoctorIssueView {
                    severity: "warning".to_string(),
                    code: "unrecognized_remote".to_string(),
                    message: format!("remote '{raw}' is neither SSH shorthand nor http(s)"),
                });
            }
        }
    }

    if changed {
        db.update_settings(&settings)?;
    }

    if porcelain {
        return crate::views::print_json(
            &serde_json::json!({ "issues": issues, "fix_applied": fix }),
        );
    }

    if issues.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("doctor: {} issue(s)", issues.len());
        for issue in &issues {
            println!("- [{}] {}: {}", issue.severity, issue.code, issue.message);
        }
    }
    if fix {
        println!("doctor maintenance applied where possible");
    }

    Ok(())
}
