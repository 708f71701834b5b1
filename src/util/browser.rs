use std::process::{Command, Stdio};

use anyhow::{Context, Result};

/// Hands a URL to the platform's URL opener. Fire-and-forget: the opener
/// process is not waited on.
pub fn open_url(url: &str) -> Result<()> {
    let (program, args): (&str, &[&str]) = if cfg!(target_os = "macos") {
        ("open", &[])
    } else if cfg!(target_os = "windows") {
        ("cmd", &["/c", "start", ""])
    } else {
        ("xdg-open", &[])
    };

    Command::new(program)
        .args(args)
        .arg(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .with_context(|| format!("failed to launch {program} for {url}"))?;
    Ok(())
}
