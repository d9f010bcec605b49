mod console;
mod run;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use redpersona_persona::TgiClient;
use redpersona_reddit::RedditSource;

use crate::console::{read_username, ConsoleProgress};

#[derive(Debug, Parser)]
#[command(name = "redpersona", version)]
#[command(about = "Build a persona summary from a Reddit user's recent posts and comments")]
struct Cli {
    /// Reddit username or profile URL (prompted for when omitted)
    user: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = redpersona_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let input = match cli.user {
        Some(user) => user,
        None => read_username(std::io::stdin().lock(), std::io::stdout())?,
    };

    let source = RedditSource::new(config.reddit.clone());
    let generator = TgiClient::from_config(&config.generator)?;
    let mut progress = ConsoleProgress::new(std::io::stdout());

    run::run(
        &input,
        &source,
        &generator,
        config.fetch_limit,
        &std::env::current_dir()?,
        &mut progress,
        &mut std::io::stdout(),
    )
    .await?;

    Ok(())
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
