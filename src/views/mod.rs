use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatusView {
    pub branch: Option<String>,
    pub issue_key: Option<String>,
    pub captured_groups: Vec<String>,
    pub issue_url: Option<String>,
    pub branch_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub host_url: String,
    pub path_pattern: String,
    pub branch_pattern: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WatchEventView {
    pub branch: Option<String>,
    pub issue_key: Option<String>,
    pub issue_url: Option<String>,
    pub branch_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryView {
    pub branch: String,
    pub issue_key: String,
    pub issue_url: Option<String>,
    pub resolved_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DoctorIssueView {
    pub severity: String,
    pub code: String,
    pub message: String,
}

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
