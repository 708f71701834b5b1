use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::db::Database;
use crate::git::Git;
use crate::service::Resolution;
use crate::util::browser;
use crate::util::terminal::truncate_for_display;

/// Full-screen panel for the current branch's issue resolution. Refreshes
/// itself when the checked-out branch changes under it.
pub fn run_issue_panel(db: &Database, git: &Git) -> Result<()> {
    let settings = db.settings()?;
    let remote = git.first_remote_url()?;
    let mut branch = git.current_branch()?;
    let mut resolution = Resolution::resolve(branch.as_deref(), remote.as_deref(), &settings);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    loop {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
                .split(f.area());

            let width = usize::from(chunks[0].width.saturating_sub(12).max(16));
            let items: Vec<ListItem<'_>> = vec![
                field_item("branch", resolution.branch.as_deref(), width),
                field_item("issue", resolution.issue_key.as_deref(), width),
                field_item("url", resolution.issue_url.as_deref(), width),
                field_item("remote", resolution.branch_url.as_deref(), width),
            ];
            let list = List::new(items)
                .block(Block::default().title("Issue Link").borders(Borders::ALL));

            let groups = match &resolution.captured_groups {
                Some(groups) if !groups.is_empty() => groups.join(", "),
                Some(_) => "(pattern matched, no groups)".to_string(),
                None => "(no match)".to_string(),
            };
            let details = format!(
                "Captures: {groups}\n\nKeys:\n  o  open issue in browser\n  r  refresh\n  q  quit"
            );
            let paragraph =
                Paragraph::new(details).block(Block::default().title("Details").borders(Borders::ALL));

            f.render_widget(list, chunks[0]);
            f.render_widget(paragraph, chunks[1]);
        })?;

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('r') => {
                        branch = git.current_branch()?;
                        resolution =
                            Resolution::resolve(branch.as_deref(), remote.as_deref(), &settings);
                    }
                    KeyCode::Char('o') => {
                        if let Some(url) = &resolution.issue_url {
                            let _ = browser::open_url(url);
                        }
                    }
                    _ => {}
                }
            }
        } else {
            let seen = git.current_branch().unwrap_or(None);
            if seen != branch {
                branch = seen;
                resolution = Resolution::resolve(branch.as_deref(), remote.as_deref(), &settings);
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

fn field_item<'a>(label: &'a str, value: Option<&str>, width: usize) -> ListItem<'a> {
    let text = value.map_or_else(
        || "(none)".to_string(),
        |value| truncate_for_display(value, width),
    );
    ListItem::new(format!("{label:<7} {text}"))
}
