use anyhow::Error;

use crate::args::LogEventsSubCommand;
use crate::clients::log_gateway::{with_timeout, LogGateway};
use crate::models::log::{LogEventsResponse, LogGroupsResponse};
use crate::repos::config::get_log_gateway_timeout;

pub async fn list_groups(gateway: &dyn LogGateway) -> Result<(), Error> {
    let log_groups = with_timeout(get_log_gateway_timeout(), gateway.list_log_groups()).await?;
    let json = serde_json::to_string_pretty(&LogGroupsResponse { log_groups })?;
    println!("{}", json);
    Ok(())
}

pub async fn list_events(gateway: &dyn LogGateway, cmd: &LogEventsSubCommand) -> Result<(), Error> {
    let log_events = with_timeout(
        get_log_gateway_timeout(),
        gateway.get_log_events(&cmd.log_group_name, cmd.limit),
    )
    .await?;
    let json = serde_json::to_string_pretty(&LogEventsResponse { log_events })?;
    println!("{}", json);
    Ok(())
}
