use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use anyhow::Result;

use crate::db::Database;
use crate::git::Git;
use crate::service::{LinkWatcher, Resolution};
use crate::views::WatchEventView;

static STOP: AtomicBool = AtomicBool::new(false);

/// Called from the process-wide Ctrl-C handler.
pub fn request_stop() {
    STOP.store(true, Ordering::SeqCst);
}

fn stop_requested() -> bool {
    STOP.load(Ordering::SeqCst)
}

pub struct WatchRunOptions {
    pub porcelain: bool,
    pub poll_ms: u64,
    pub once: bool,
}

pub fn run(db: &Database, git: &Git, opts: WatchRunOptions) -> Result<()> {
    let settings = db.settings()?;
    let mut watcher = LinkWatcher::new();
    let porcelain = opts.porcelain;
    watcher.subscribe(move |resolution: &Resolution| print_event(resolution, porcelain));

    loop {
        let branch = git.current_branch()?;
        let remote = git.first_remote_url()?;
        let changed = watcher.observe(branch.as_deref(), remote.as_deref(), &settings);

        if changed
            && let Some(resolution) = watcher.last()
            && let (Some(branch), Some(key)) = (&resolution.branch, &resolution.issue_key)
        {
            db.record_resolution(branch, key, resolution.issue_url.as_deref())?;
        }

        if opts.once || stop_requested() {
            break;
        }
        std::thread::sleep(Duration::from_millis(opts.poll_ms));
        if stop_requested() {
            break;
        }
    }
    Ok(())
}

fn print_event(resolution: &Resolution, porcelain: bool) {
    if porcelain {
        let view = WatchEventView {
            branch: resolution.branch.clone(),
            issue_key: resolution.issue_key.clone(),
            issue_url: resolution.issue_url.clone(),
            branch_url: resolution.branch_url.clone(),
        };
        // one JSON object per line
        if let Ok(line) = serde_json::to_string(&view) {
            println!("{line}");
        }
        return;
    }

    match (&resolution.branch, &resolution.issue_key) {
        (None, _) => println!("no branch checked out"),
        (Some(branch), None) => println!("{branch}: no issue detected"),
        (Some(branch), Some(key)) => match &resolution.issue_url {
            Some(url) => println!("{branch}: {key} {url}"),
            None => println!("{branch}: {key}"),
        },
    }
}
