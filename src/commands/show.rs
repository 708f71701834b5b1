use anyhow::{Result, anyhow};

use crate::commands::shared::resolve_current;
use crate::db::Database;
use crate::git::Git;
use crate::service::Resolution;

#[derive(Debug, Clone, Copy)]
pub enum ShowTarget {
    Key,
    Url,
    Markdown,
    BranchUrl { markdown: bool },
}

/// Prints exactly one value to stdout so the output can be piped into a
/// clipboard tool or another script without trimming.
pub fn run(db: &Database, git: &Git, target: ShowTarget) -> Result<()> {
    let resolution = resolve_current(db, git)?;
    let value = render(&resolution, target)?;
    println!("{value}");
    Ok(())
}

fn render(resolution: &Resolution, target: ShowTarget) -> Result<String> {
    let branch = resolution
        .branch
        .as_deref()
        .ok_or_else(|| anyhow!("no branch checked out"))?;

    match target {
        ShowTarget::Key => issue_key(resolution, branch).cloned(),
        ShowTarget::Url => issue_url(resolution, branch).cloned(),
        ShowTarget::Markdown => {
            let key = issue_key(resolution, branch)?;
            let url = issue_url(resolution, branch)?;
            Ok(format!("[{key}]({url})"))
        }
        ShowTarget::BranchUrl { markdown } => {
            let url = resolution.branch_url.as_ref().ok_or_else(|| {
                anyhow!("no browsable remote for branch '{branch}'; check `git remote -v`")
            })?;
            if markdown {
                Ok(format!("[{branch}]({url})"))
            } else {
                Ok(url.clone())
            }
        }
    }
}

fn issue_key<'a>(resolution: &'a Resolution, branch: &str) -> Result<&'a String> {
    resolution
        .issue_key
        .as_ref()
        .ok_or_else(|| anyhow!("no issue detected in branch '{branch}'"))
}

fn issue_url<'a>(resolution: &'a Resolution, branch: &str) -> Result<&'a String> {
    resolution.issue_url.as_ref().ok_or_else(|| {
        anyhow!("no issue link for branch '{branch}'; check `issuelink config show`")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Settings;

    fn resolved(branch: &str) -> Resolution {
        Resolution::resolve(
            Some(branch),
            Some("git@github.com:org/repo.git"),
            &Settings::default(),
        )
    }

    #[test]
    fn renders_key_url_and_markdown() {
        let resolution = resolved("feature/PROJ-123-desc");
        assert_eq!(
            render(&resolution, ShowTarget::Key).expect("key"),
            "PROJ-123"
        );
        assert_eq!(
            render(&resolution, ShowTarget::Url).expect("url"),
            "https://jira.company.com/browse/PROJ-123"
        );
        assert_eq!(
            render(&resolution, ShowTarget::Markdown).expect("markdown"),
            "[PROJ-123](https://jira.company.com/browse/PROJ-123)"
        );
    }

    #[test]
    fn renders_branch_url_plain_and_markdown() {
        let resolution = resolved("feature/PROJ-123-desc");
        assert_eq!(
            render(&resolution, ShowTarget::BranchUrl { markdown: false }).expect("url"),
            "https://github.com/org/repo/tree/feature/PROJ-123-desc"
        );
        assert_eq!(
            render(&resolution, ShowTarget::BranchUrl { markdown: true }).expect("markdown"),
            "[feature/PROJ-123-desc](https://github.com/org/repo/tree/feature/PROJ-123-desc)"
        );
    }

    #[test]
    fn unmatched_branch_reports_neutral_error() {
        let resolution = resolved("main");
        let err = render(&resolution, ShowTarget::Key).unwrap_err();
        assert!(err.to_string().contains("no issue detected"));
    }

    #[test]
    fn missing_branch_reports_no_branch() {
        let resolution = Resolution::default();
        let err = render(&resolution, ShowTarget::Key).unwrap_err();
        assert!(err.to_string().contains("no branch checked out"));
    }
}
