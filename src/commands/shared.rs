use anyhow::Result;

use crate::db::Database;
use crate::git::Git;
use crate::service::Resolution;

/// One resolution for the repository as it is right now: current branch and
/// first remote from git, settings from the database, everything else pure.
pub fn resolve_current(db: &Database, git: &Git) -> Result<Resolution> {
    let settings = db.settings()?;
    let branch = git.current_branch()?;
    let remote = git.first_remote_url()?;
    Ok(Resolution::resolve(
        branch.as_deref(),
        remote.as_deref(),
        &settings,
    ))
}
