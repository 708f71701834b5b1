use std::path::Path;

use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};

pub const DEFAULT_HOST_URL: &str = "https://jira.company.com";
pub const DEFAULT_PATH_PATTERN: &str = "/browse/{0}";
pub const DEFAULT_BRANCH_PATTERN: &str = r"([A-Z][A-Z0-9]+-\d+)";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host_url: String,
    pub path_pattern: String,
    pub branch_pattern: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host_url: DEFAULT_HOST_URL.to_string(),
            path_pattern: DEFAULT_PATH_PATTERN.to_string(),
            branch_pattern: DEFAULT_BRANCH_PATTERN.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResolutionRecord {
    pub id: i64,
    pub branch: String,
    pub issue_key: String,
    pub issue_url: Option<String>,
    pub resolved_at: String,
}

pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("failed to open sqlite at {}", path.display()))?;
        let db = Self { conn };
        db.migrate()?;
        Ok(db)
    }

    fn migrate(&self) -> Result<()> {
        self.conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS settings (
                id INTEGER PRIMARY KEY CHECK (id = 1),
                host_url TEXT NOT NULL,
                path_pattern TEXT NOT NULL,
                branch_pattern TEXT NOT NULL,
                updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            CREATE TABLE IF NOT EXISTS resolutions (
                id INTEGER PRIMARY KEY,
                branch TEXT NOT NULL,
                issue_key TEXT NOT NULL,
                issue_url TEXT NULL,
                resolved_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            );
            ",
        )?;
        self.seed_settings_if_missing()?;
        Ok(())
    }

    fn seed_settings_if_missing(&self) -> Result<()> {
        let defaults = Settings::default();
        self.conn.execute(
            "INSERT INTO settings(id, host_url, path_pattern, branch_pattern)
             VALUES (1, ?1, ?2, ?3)
             ON CONFLICT(id) DO NOTHING",
            params![
                defaults.host_url,
                defaults.path_pattern,
                defaults.branch_pattern
            ],
        )?;
        Ok(())
    }

    pub fn settings(&self) -> Result<Settings> {
        self.conn
            .query_row(
                "SELECT host_url, path_pattern, branch_pattern FROM settings WHERE id = 1",
                [],
                |row| {
                    Ok(Settings {
                        host_url: row.get(0)?,
                        path_pattern: row.get(1)?,
                        branch_pattern: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| anyhow!("settings row missing"))
    }

    pub fn update_settings(&self, settings: &Settings) -> Result<()> {
        self.conn.execute(
            "UPDATE settings
             SET host_url = ?1, path_pattern = ?2, branch_pattern = ?3,
                 updated_at = CURRENT_TIMESTAMP
             WHERE id = 1",
            params![
                settings.host_url,
                settings.path_pattern,
                settings.branch_pattern
            ],
        )?;
        Ok(())
    }

    /// Appends one resolved issue key to the history log. Consecutive
    /// duplicates for the same branch are skipped.
    pub fn record_resolution(
        &self,
        branch: &str,
        issue_key: &str,
        issue_url: Option<&str>,
    ) -> Result<()> {
        let last: Option<(String, String)> = self
            .conn
            .query_row(
                "SELECT branch, issue_key FROM resolutions ORDER BY id DESC LIMIT 1",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        if let Some((last_branch, last_key)) = last
            && last_branch == branch
            && last_key == issue_key
        {
            return Ok(());
        }

        self.conn.execute(
            "INSERT INTO resolutions(branch, issue_key, issue_url) VALUES (?1, ?2, ?3)",
            params![branch, issue_key, issue_url],
        )?;
        Ok(())
    }

    pub fn recent_resolutions(&self, limit: u32) -> Result<Vec<ResolutionRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, branch, issue_key, issue_url, resolved_at
             FROM resolutions ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(params![limit], |row| {
            Ok(ResolutionRecord {
                id: row.get(0)?,
                branch: row.get(1)?,
                issue_key: row.get(2)?,
                issue_url: row.get(3)?,
                resolved_at: row.get(4)?,
            })
        })?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }
}
