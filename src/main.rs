use anyhow::Error;
use args::{Args, StartSubCommand, SubCommands};
use clap::Parser;
use clients::log_gateway::CloudWatchLogGateway;
use repos::config::get_aws_region;
use tracing::debug;

mod args;
mod clients;
mod commands;
mod error;
mod handler;
mod models;
mod repos;
mod utils;

#[tokio::main]
async fn main() -> Result<(), Error> {
    let dotenv = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "mcp_deploy=info".to_string()),
        )
        .init();
    if let Ok(path) = dotenv {
        debug!("Loaded environment from {}", path.display());
    }
    let args = Args::parse();
    match args.subcmd {
        Some(SubCommands::Start(start_cmd)) => {
            commands::start::run(&start_cmd).await?;
        }
        Some(SubCommands::Config(config_cmd)) => {
            commands::config::run(&config_cmd)?;
        }
        Some(SubCommands::LogGroups) => {
            let gateway = CloudWatchLogGateway::from_env(get_aws_region()).await;
            commands::logs::list_groups(&gateway).await?;
        }
        Some(SubCommands::LogEvents(events_cmd)) => {
            let gateway = CloudWatchLogGateway::from_env(get_aws_region()).await;
            commands::logs::list_events(&gateway, &events_cmd).await?;
        }
        None => {
            commands::start::run(&StartSubCommand::default()).await?;
        }
    };
    Ok(())
}
