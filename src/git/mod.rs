use std::path::PathBuf;
use std::process::Command;

use anyhow::{Context, Result, anyhow};

#[derive(Debug, Clone)]
pub struct Git {
    root: PathBuf,
}

impl Git {
    pub fn discover() -> Result<Self> {
        let output = Command::new("git")
            .args(["rev-parse", "--show-toplevel"])
            .output()
            .context("failed to run git rev-parse --show-toplevel")?;
        if !output.status.success() {
            return Err(anyhow!("not inside a git repository"));
        }
        let root = String::from_utf8(output.stdout)?.trim().to_string();
        Ok(Self {
            root: PathBuf::from(root),
        })
    }

    pub fn git_dir(&self) -> Result<PathBuf> {
        let out = self.capture(["rev-parse", "--git-dir"])?;
        let path = PathBuf::from(out.trim());
        if path.is_absolute() {
            Ok(path)
        } else {
            Ok(self.root.join(path))
        }
    }

    /// Name of the checked-out branch, or `None` on detached HEAD and in
    /// repositories with no commits yet.
    pub fn current_branch(&self) -> Result<Option<String>> {
        let out = self.capture(["branch", "--show-current"])?;
        let name = out.trim();
        if name.is_empty() {
            tracing::debug!("no current branch (detached HEAD or empty repo)");
            return Ok(None);
        }
        Ok(Some(name.to_string()))
    }

    /// Raw URL of the first configured remote, in `git remote` listing
    /// order. The text is returned untouched; normalization is the
    /// caller's concern.
    pub fn first_remote_url(&self) -> Result<Option<String>> {
        let remotes = self.capture(["remote"])?;
        let Some(remote) = remotes.lines().map(str::trim).find(|r| !r.is_empty()) else {
            return Ok(None);
        };

        let output = Command::new("git")
            .current_dir(&self.root)
            .args(["remote", "get-url", remote])
            .output()
            .with_context(|| format!("failed to read {remote} remote URL"))?;
        if !output.status.success() {
            return Ok(None);
        }
        let raw = String::from_utf8(output.stdout)?.trim().to_string();
        if raw.is_empty() {
            return Ok(None);
        }
        tracing::debug!(remote, url = %raw, "resolved first remote");
        Ok(Some(raw))
    }

    fn capture<const N: usize>(&self, args: [&str; N]) -> Result<String> {
        let output = Command::new("git")
            .current_dir(&self.root)
            .args(args)
            .output()
            .with_context(|| format!("failed to run git {:?}", args))?;
        if !output.status.success() {
            return Err(anyhow!(
                "git command failed {:?}: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            ));
        }
        Ok(String::from_utf8(output.stdout)?)
    }
}
