use anyhow::Result;

use crate::db::Database;
use crate::views::{HistoryEntryView, print_json};

pub fn run(db: &Database, limit: u32, porcelain: bool) -> Result<()> {
    let records = db.recent_resolutions(limit)?;

    if porcelain {
        let entries: Vec<HistoryEntryView> = records
            .iter()
            .map(|rec| HistoryEntryView {
                branch: rec.branch.clone(),
                issue_key: rec.issue_key.clone(),
                issue_url: rec.issue_url.clone(),
                resolved_at: rec.resolved_at.clone(),
            })
            .collect();
        return print_json(&entries);
    }

    if records.is_empty() {
        println!("no resolutions recorded yet");
        return Ok(());
    }

    for rec in &records {
        match rec.issue_url.as_deref() {
            Some(url) => println!("{}  {}  {}  {}", rec.resolved_at, rec.issue_key, rec.branch, url),
            None => println!("{}  {}  {}", rec.resolved_at, rec.issue_key, rec.branch),
        }
    }
    Ok(())
}
