use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Commands};
use crate::commands;
use crate::db::Database;
use crate::git::Git;

pub struct AppContext {
    cli: Cli,
    git: Git,
    db: Database,
}

impl AppContext {
    fn build() -> Result<Self> {
        let cli = Cli::parse();
        let git = Git::discover()?;
        let git_dir = git.git_dir()?;
        let db_path = git_dir.join("issuelink.db");
        let db = Database::open(&db_path)?;

        Ok(Self { cli, git, db })
    }
}

pub fn run() -> Result<()> {
    // Dialoguer Ctrl-C workaround from console-rs/dialoguer#294: keep the
    // SIGINT handler non-fatal and recover cursor state on prompt errors.
    // The watch loop reuses the same handler as its stop signal.
    ctrlc::set_handler(|| {
        commands::watch::request_stop();
    })
    .context("failed to install Ctrl-C handler")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    let ctx = AppContext::build()?;
    dispatch(&ctx)
}

fn dispatch(ctx: &AppContext) -> Result<()> {
    match &ctx.cli.command {
        None => commands::status::run(
            &ctx.db,
            &ctx.git,
            ctx.cli.global.porcelain,
            ctx.cli.global.interactive,
        ),
        Some(Commands::Key) => {
            commands::show::run(&ctx.db, &ctx.git, commands::show::ShowTarget::Key)
        }
        Some(Commands::Url) => {
            commands::show::run(&ctx.db, &ctx.git, commands::show::ShowTarget::Url)
        }
        Some(Commands::Markdown) => {
            commands::show::run(&ctx.db, &ctx.git, commands::show::ShowTarget::Markdown)
        }
        Some(Commands::BranchUrl(args)) => commands::show::run(
            &ctx.db,
            &ctx.git,
            commands::show::ShowTarget::BranchUrl {
                markdown: args.markdown,
            },
        ),
        Some(Commands::Open) => commands::open::run(&ctx.db, &ctx.git),
        Some(Commands::Config(args)) => commands::config::run(
            &ctx.db,
            args,
            ctx.cli.global.porcelain,
            ctx.cli.global.yes,
        ),
        Some(Commands::Watch(args)) => commands::watch::run(
            &ctx.db,
            &ctx.git,
            commands::watch::WatchRunOptions {
                porcelain: ctx.cli.global.porcelain,
                poll_ms: args.poll_ms,
                once: args.once,
            },
        ),
        Some(Commands::History(args)) => {
            commands::history::run(&ctx.db, args.limit, ctx.cli.global.porcelain)
        }
        Some(Commands::Doctor(args)) => {
            commands::doctor::run(&ctx.db, &ctx.git, ctx.cli.global.porcelain, args.fix)
        }
        Some(Commands::Completions(args)) => commands::completions::run(args.shell),
    }
}
