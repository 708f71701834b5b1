use std::io::{IsTerminal, stdin, stdout};

use anyhow::Result;
use crossterm::style::Stylize;

use crate::commands::shared::resolve_current;
use crate::db::Database;
use crate::git::Git;
use crate::service::Resolution;
use crate::ui::tui;
use crate::util::terminal::osc8_hyperlink;
use crate::views::print_json;

pub fn run(db: &Database, git: &Git, porcelain: bool, interactive: bool) -> Result<()> {
    let resolution = resolve_current(db, git)?;

    if let (Some(branch), Some(key)) = (&resolution.branch, &resolution.issue_key) {
        db.record_resolution(branch, key, resolution.issue_url.as_deref())?;
    }

    if porcelain {
        return print_json(&resolution.to_view());
    }

    let is_tty = stdout().is_terminal() && stdin().is_terminal();
    if interactive && is_tty {
        return tui::run_issue_panel(db, git);
    }

    let should_color = is_tty && std::env::var_os("NO_COLOR").is_none();
    print_plain(&resolution, should_color);
    Ok(())
}

fn print_plain(resolution: &Resolution, color: bool) {
    let Some(branch) = resolution.branch.as_deref() else {
        println!("no branch checked out");
        return;
    };

    println!("branch  {}", paint(branch, color));
    println!("issue   {}", field(resolution.issue_key.as_deref(), color));
    println!("url     {}", link_field(resolution.issue_url.as_deref(), color));
    println!("remote  {}", link_field(resolution.branch_url.as_deref(), color));
}

fn paint(value: &str, color: bool) -> String {
    if color {
        value.bold().to_string()
    } else {
        value.to_string()
    }
}

fn field(value: Option<&str>, color: bool) -> String {
    match value {
        Some(value) => paint(value, color),
        None => none_marker(color),
    }
}

fn link_field(value: Option<&str>, color: bool) -> String {
    match value {
        Some(url) if color => osc8_hyperlink(url, url),
        Some(url) => url.to_string(),
        None => none_marker(color),
    }
}

fn none_marker(color: bool) -> String {
    if color {
        "(none)".dark_grey().to_string()
    } else {
        "(none)".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_field_falls_back_to_none_marker() {
        assert_eq!(field(None, false), "(none)");
        assert_eq!(field(Some("PROJ-1"), false), "PROJ-1");
    }

    #[test]
    fn colored_link_field_emits_osc8_sequences() {
        let out = link_field(Some("https://h.com/browse/A-1"), true);
        assert!(out.contains("\u{1b}]8;;"));
    }

    #[test]
    fn plain_link_field_is_the_bare_url() {
        let out = link_field(Some("https://h.com/browse/A-1"), false);
        assert_eq!(out, "https://h.com/browse/A-1");
    }
}
