mod config;
mod context;
mod domain;
mod error;
mod infra;
mod render;
mod services;
mod workflow;

use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::AppConfig;
use crate::context::AppContext;
use crate::error::AppResult;
use crate::infra::github::GitHubClient;
use crate::workflow::changelog::ChangeLogGenerator;

#[derive(Parser)]
#[command(
    name = "changelog-gen",
    author,
    version,
    about = "Render a repository's commit history into dated change logs"
)]
struct Cli {
    /// Repository to read, as `owner/name`.
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repository: Option<String>,

    /// Access token sent to the GitHub API.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    if let Err(error) = run(cli).await {
        error!("{error}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> AppResult<()> {
    let cwd = std::env::current_dir()?;
    let config = AppConfig::load(&cwd, cli.repository, cli.token)?;

    let client = GitHubClient::new(config.repository.clone(), config.auth_token.clone());
    let context = AppContext::new(config, Arc::new(client));

    let report = ChangeLogGenerator::new(&context).run().await;
    info!(
        commits = report.commits,
        text_saved = report.text_saved,
        markdown_saved = report.markdown_saved,
        "Change log run finished"
    );

    Ok(())
}

/// Logs to stderr at INFO unless RUST_LOG says otherwise.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr),
        )
        .init();
}
