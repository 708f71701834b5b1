use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "issuelink",
    version,
    about = "Turn the checked-out branch name into issue keys and links"
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    #[arg(
        short = 'P',
        long,
        global = true,
        help = "Output machine-readable JSON"
    )]
    pub porcelain: bool,
    #[arg(
        short = 'y',
        long,
        global = true,
        help = "Skip interactive confirmations"
    )]
    pub yes: bool,
    #[arg(
        short = 'i',
        long,
        global = true,
        help = "Launch interactive fullscreen panel for `issuelink` (no subcommand)"
    )]
    pub interactive: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Print the extracted issue key
    Key,
    /// Print the composed issue URL
    Url,
    /// Print the issue as a markdown link
    Markdown,
    /// Print the web URL of the current branch on its remote
    BranchUrl(BranchUrlArgs),
    /// Open the issue URL in the system browser
    Open,
    /// Show or edit the issue-link configuration
    Config(ConfigArgs),
    /// Watch the repository and report issue-key changes
    Watch(WatchArgs),
    /// List recently resolved issue keys
    History(HistoryArgs),
    /// Validate the stored configuration
    Doctor(DoctorArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Debug, Args)]
pub struct BranchUrlArgs {
    #[arg(short = 'm', long, help = "Print as a markdown link instead of a bare URL")]
    pub markdown: bool,
}

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: Option<ConfigAction>,
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print all configured values
    Show,
    /// Print a single configured value
    Get(ConfigKeyArgs),
    /// Set a single configured value
    Set(ConfigSetArgs),
    /// Edit all values interactively
    Edit,
    /// Restore the default configuration
    Reset,
}

#[derive(Debug, Args)]
pub struct ConfigKeyArgs {
    #[arg(value_enum, help = "Configuration key")]
    pub key: ConfigKey,
}

#[derive(Debug, Args)]
pub struct ConfigSetArgs {
    #[arg(value_enum, help = "Configuration key")]
    pub key: ConfigKey,
    #[arg(help = "New value")]
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ConfigKey {
    /// Base URL of the issue tracker
    Host,
    /// Path template with {0}-style placeholders
    Path,
    /// Regex applied to branch names
    Pattern,
}

#[derive(Debug, Args)]
pub struct WatchArgs {
    #[arg(
        long,
        default_value_t = 1000,
        help = "Polling interval in milliseconds"
    )]
    pub poll_ms: u64,
    #[arg(long, help = "Emit the current state once and exit")]
    pub once: bool,
}

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[arg(short = 'l', long, default_value_t = 20, help = "Maximum entries to list")]
    pub limit: u32,
}

#[derive(Debug, Args)]
pub struct DoctorArgs {
    #[arg(short = 'f', long, help = "Reset broken values to their defaults")]
    pub fix: bool,
}

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(help = "Shell to generate completions for")]
    pub shell: Option<clap_complete::Shell>,
}
