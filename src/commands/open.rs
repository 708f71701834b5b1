use anyhow::{Result, anyhow};

use crate::commands::shared::resolve_current;
use crate::db::Database;
use crate::git::Git;
use crate::util::browser;

pub fn run(db: &Database, git: &Git) -> Result<()> {
    let resolution = resolve_current(db, git)?;
    let branch = resolution
        .branch
        .as_deref()
        .ok_or_else(|| anyhow!("no branch checked out"))?;
    let url = resolution
        .issue_url
        .as_deref()
        .ok_or_else(|| anyhow!("no issue detected in branch '{branch}'"))?;

    browser::open_url(url)?;
    println!("opening {url}");
    Ok(())
}
