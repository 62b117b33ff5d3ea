use clap::{Parser, Subcommand};

use crate::clients::log_gateway::DEFAULT_EVENT_LIMIT;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = r###"
mcp-deploy answers chat-completion requests in the shape chat clients expect
and lets you inspect CloudWatch log groups over HTTP.

The chat endpoint is a stub: every request receives the same placeholder
completion. AWS credentials and region come from the usual AWS environment
variables or profile, and a .env file in the working directory is honoured.
"###
)]
pub struct Args {
    #[command(subcommand)]
    pub subcmd: Option<SubCommands>,
}

#[derive(Subcommand, Debug)]
pub enum SubCommands {
    /// Start the HTTP server. This is the default when no subcommand is given.
    Start(StartSubCommand),
    /// Set or get configuration values in mcp-deploy.toml.
    Config(ConfigSubCommand),
    /// Print the log groups visible to the configured AWS account as JSON.
    LogGroups,
    /// Print events from a log group as JSON.
    LogEvents(LogEventsSubCommand),
}

#[derive(Parser, Debug, Default)]
pub struct StartSubCommand {
    /// Address to bind. Overrides the config file and MCP_DEPLOY_HOST.
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on. Overrides the config file and MCP_DEPLOY_PORT.
    #[arg(short, long)]
    pub port: Option<u16>,
}

#[derive(Parser, Debug)]
pub struct ConfigSubCommand {
    /// Set a configuration value. Use the format key=value.
    /// `mcp-deploy config --set port=9000`
    #[arg(short, long)]
    pub set: Option<String>,

    /// Get your current configuration value.
    /// `mcp-deploy config --get port`
    #[arg(short, long)]
    pub get: Option<String>,
}

#[derive(Parser, Debug)]
pub struct LogEventsSubCommand {
    /// Name of the log group, e.g. /aws/lambda/my-function
    pub log_group_name: String,

    /// Maximum number of events to return
    #[arg(short, long, default_value_t = DEFAULT_EVENT_LIMIT, allow_negative_numbers = true)]
    pub limit: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand() {
        let args = Args::try_parse_from(["mcp-deploy"]).unwrap();
        assert!(args.subcmd.is_none());
    }

    #[test]
    fn test_start_overrides() {
        let args = Args::try_parse_from(["mcp-deploy", "start", "--host", "0.0.0.0", "-p", "9000"])
            .unwrap();
        match args.subcmd {
            Some(SubCommands::Start(start)) => {
                assert_eq!(start.host.as_deref(), Some("0.0.0.0"));
                assert_eq!(start.port, Some(9000));
            }
            other => panic!("unexpected subcommand: {:?}", other),
        }
    }

    #[test]
    fn test_log_events_default_limit() {
        let args = Args::try_parse_from(["mcp-deploy", "log-events", "/aws/lambda/fn"]).unwrap();
        match args.subcmd {
            Some(SubCommands::LogEvents(cmd)) => {
                assert_eq!(cmd.log_group_name, "/aws/lambda/fn");
                assert_eq!(cmd.limit, 10);
            }
            other => panic!("unexpected subcommand: {:?}", other),
        }
    }

    #[test]
    fn test_config_set() {
        let args = Args::try_parse_from(["mcp-deploy", "config", "--set", "port=9000"]).unwrap();
        match args.subcmd {
            Some(SubCommands::Config(cmd)) => {
                assert_eq!(cmd.set.as_deref(), Some("port=9000"));
                assert!(cmd.get.is_none());
            }
            other => panic!("unexpected subcommand: {:?}", other),
        }
    }
}
