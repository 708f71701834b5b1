use std::io::{IsTerminal, stdin, stdout};

use anyhow::{Result, anyhow};
use dialoguer::{Input, theme::ColorfulTheme};
use regex::Regex;

use crate::cli::{ConfigAction, ConfigArgs, ConfigKey};
use crate::db::{Database, Settings};
use crate::ui::interaction::{confirm_yes_no, prompt_or_cancel};
use crate::views::{ConfigView, print_json};

pub fn run(db: &Database, args: &ConfigArgs, porcelain: bool, yes: bool) -> Result<()> {
    match &args.action {
        None | Some(ConfigAction::Show) => show(db, porcelain),
        Some(ConfigAction::Get(key_args)) => get(db, key_args.key),
        Some(ConfigAction::Set(set_args)) => set(db, set_args.key, &set_args.value),
        Some(ConfigAction::Edit) => edit(db),
        Some(ConfigAction::Reset) => reset(db, yes),
    }
}

fn show(db: &Database, porcelain: bool) -> Result<()> {
    let settings = db.settings()?;
    if porcelain {
        return print_json(&ConfigView {
            host_url: settings.host_url,
            path_pattern: settings.path_pattern,
            branch_pattern: settings.branch_pattern,
        });
    }
    println!("host     {}", settings.host_url);
    println!("path     {}", settings.path_pattern);
    println!("pattern  {}", settings.branch_pattern);
    Ok(())
}

fn get(db: &Database, key: ConfigKey) -> Result<()> {
    let settings = db.settings()?;
    let value = match key {
        ConfigKey::Host => settings.host_url,
        ConfigKey::Path => settings.path_pattern,
        ConfigKey::Pattern => settings.branch_pattern,
    };
    println!("{value}");
    Ok(())
}

fn set(db: &Database, key: ConfigKey, value: &str) -> Result<()> {
    let mut settings = db.settings()?;
    match key {
        ConfigKey::Host => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(anyhow!("host URL cannot be blank"));
            }
            settings.host_url = trimmed.to_string();
        }
        ConfigKey::Path => settings.path_pattern = value.to_string(),
        // Rejected at edit time; extraction never reports compile errors.
        ConfigKey::Pattern => {
            validate_pattern(value)?;
            settings.branch_pattern = value.to_string();
        }
    }
    db.update_settings(&settings)?;
    println!("updated {}", key_name(key));
    Ok(())
}

fn edit(db: &Database) -> Result<()> {
    if !(stdout().is_terminal() && stdin().is_terminal()) {
        return Err(anyhow!(
            "config edit needs a terminal; use `issuelink config set <key> <value>`"
        ));
    }

    let current = db.settings()?;
    let theme = ColorfulTheme::default();

    let host_url = prompt_or_cancel(
        Input::<String>::with_theme(&theme)
            .with_prompt("Issue tracker host URL")
            .default(current.host_url.clone())
            .validate_with(|input: &String| -> Result<(), &str> {
                if input.trim().is_empty() {
                    Err("host URL cannot be blank")
                } else {
                    Ok(())
                }
            })
            .interact_text(),
    )?;

    let path_pattern = prompt_or_cancel(
        Input::<String>::with_theme(&theme)
            .with_prompt("Issue path template ({0} is the first capture)")
            .default(current.path_pattern.clone())
            .interact_text(),
    )?;

    let branch_pattern = prompt_or_cancel(
        Input::<String>::with_theme(&theme)
            .with_prompt("Branch extraction pattern (regex)")
            .default(current.branch_pattern.clone())
            .validate_with(|input: &String| -> Result<(), String> {
                Regex::new(input)
                    .map(|_| ())
                    .map_err(|err| format!("invalid pattern: {err}"))
            })
            .interact_text(),
    )?;

    db.update_settings(&Settings {
        host_url: host_url.trim().to_string(),
        path_pattern,
        branch_pattern,
    })?;
    println!("configuration saved");
    Ok(())
}

fn reset(db: &Database, yes: bool) -> Result<()> {
    let confirmed = yes
        || !(stdout().is_terminal() && stdin().is_terminal())
        || confirm_yes_no("Reset issue-link configuration to defaults?")?;
    if !confirmed {
        println!("reset skipped");
        return Ok(());
    }
    db.update_settings(&Settings::default())?;
    println!("configuration reset to defaults");
    Ok(())
}

fn validate_pattern(value: &str) -> Result<()> {
    Regex::new(value)
        .map(|_| ())
        .map_err(|err| anyhow!("invalid branch pattern: {err}"))
}

fn key_name(key: ConfigKey) -> &'static str {
    match key {
        ConfigKey::Host => "host",
        ConfigKey::Path => "path",
        ConfigKey::Pattern => "pattern",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pattern_validation_accepts_compiling_regex() {
        assert!(validate_pattern(r"([A-Z]+-\d+)").is_ok());
    }

    #[test]
    fn pattern_validation_rejects_broken_regex_with_message() {
        let err = validate_pattern("([invalid").unwrap_err();
        assert!(err.to_string().contains("invalid branch pattern"));
    }
}
