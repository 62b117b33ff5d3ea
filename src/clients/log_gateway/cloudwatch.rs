use async_trait::async_trait;
use aws_config::retry::RetryConfig;
use aws_sdk_cloudwatchlogs::error::DisplayErrorContext;
use aws_sdk_cloudwatchlogs::types;
use tracing::{debug, error};

use super::{LogGateway, LogGatewayError};
use crate::models::log::{LogEvent, LogGroup};

/// CloudWatch Logs backed gateway.
#[derive(Clone)]
pub struct CloudWatchLogGateway {
    client: aws_sdk_cloudwatchlogs::Client,
}

impl CloudWatchLogGateway {
    /// Loads credentials and region from the standard AWS environment chain.
    /// `region` overrides whatever the chain resolves. SDK retries are turned
    /// off so each request makes exactly one call.
    pub async fn from_env(region: Option<String>) -> Self {
        let mut loader = aws_config::from_env().retry_config(RetryConfig::disabled());
        if let Some(region) = region {
            loader = loader.region(aws_config::Region::new(region));
        }
        let config = loader.load().await;
        debug!("CloudWatch Logs region: {:?}", config.region());
        CloudWatchLogGateway {
            client: aws_sdk_cloudwatchlogs::Client::new(&config),
        }
    }
}

fn service_error<E>(operation: &str, e: E) -> LogGatewayError
where
    E: std::error::Error,
{
    let message = DisplayErrorContext(&e).to_string();
    error!("CloudWatch Logs {} failed: {}", operation, message);
    LogGatewayError::Service(message)
}

fn to_log_group(group: &types::LogGroup) -> LogGroup {
    LogGroup {
        log_group_name: group.log_group_name().map(str::to_string),
        creation_time: group.creation_time(),
        retention_in_days: group.retention_in_days(),
        metric_filter_count: group.metric_filter_count(),
        arn: group.arn().map(str::to_string),
        stored_bytes: group.stored_bytes(),
        kms_key_id: group.kms_key_id().map(str::to_string),
        data_protection_status: group
            .data_protection_status()
            .map(|s| s.as_str().to_string()),
        log_group_class: group.log_group_class().map(|c| c.as_str().to_string()),
        log_group_arn: group.log_group_arn().map(str::to_string),
        inherited_properties: group
            .inherited_properties()
            .iter()
            .map(|p| p.as_str().to_string())
            .collect(),
        deletion_protection_enabled: group.deletion_protection_enabled(),
        bearer_token_authentication_enabled: group.bearer_token_authentication_enabled(),
    }
}

fn to_log_event(event: &types::FilteredLogEvent) -> LogEvent {
    LogEvent {
        log_stream_name: event.log_stream_name().map(str::to_string),
        timestamp: event.timestamp(),
        message: event.message().map(str::to_string),
        ingestion_time: event.ingestion_time(),
        event_id: event.event_id().map(str::to_string),
    }
}

#[async_trait]
impl LogGateway for CloudWatchLogGateway {
    async fn list_log_groups(&self) -> Result<Vec<LogGroup>, LogGatewayError> {
        let output = self
            .client
            .describe_log_groups()
            .send()
            .await
            .map_err(|e| service_error("DescribeLogGroups", e))?;

        Ok(output.log_groups().iter().map(to_log_group).collect())
    }

    // GetLogEvents needs a stream name, so events are read group-wide with
    // FilterLogEvents instead.
    async fn get_log_events(
        &self,
        log_group_name: &str,
        limit: i32,
    ) -> Result<Vec<LogEvent>, LogGatewayError> {
        let output = self
            .client
            .filter_log_events()
            .log_group_name(log_group_name)
            .limit(limit)
            .send()
            .await
            .map_err(|e| service_error("FilterLogEvents", e))?;

        Ok(output.events().iter().map(to_log_event).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_group_mapping() {
        let group = types::LogGroup::builder()
            .log_group_name("/aws/lambda/fn")
            .creation_time(1700000000000)
            .retention_in_days(14)
            .stored_bytes(2048)
            .log_group_class(types::LogGroupClass::Standard)
            .arn("arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn:*")
            .metric_filter_count(2)
            .kms_key_id("alias/logs")
            .data_protection_status(types::DataProtectionStatus::Activated)
            .log_group_arn("arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn")
            .inherited_properties(types::InheritedProperty::AccountDataProtection)
            .deletion_protection_enabled(true)
            .bearer_token_authentication_enabled(false)
            .build();

        let mapped = to_log_group(&group);
        assert_eq!(mapped.log_group_name.as_deref(), Some("/aws/lambda/fn"));
        assert_eq!(mapped.creation_time, Some(1700000000000));
        assert_eq!(mapped.retention_in_days, Some(14));
        assert_eq!(mapped.stored_bytes, Some(2048));
        assert_eq!(mapped.log_group_class.as_deref(), Some("STANDARD"));
        assert_eq!(
            mapped.arn.as_deref(),
            Some("arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn:*")
        );
        assert_eq!(mapped.metric_filter_count, Some(2));
        assert_eq!(mapped.kms_key_id.as_deref(), Some("alias/logs"));
        assert_eq!(mapped.data_protection_status.as_deref(), Some("ACTIVATED"));
        assert_eq!(
            mapped.log_group_arn.as_deref(),
            Some("arn:aws:logs:us-east-1:123456789012:log-group:/aws/lambda/fn")
        );
        assert_eq!(mapped.inherited_properties, vec!["ACCOUNT_DATA_PROTECTION"]);
        assert_eq!(mapped.deletion_protection_enabled, Some(true));
        assert_eq!(mapped.bearer_token_authentication_enabled, Some(false));
    }

    #[test]
    fn test_sparse_log_group_mapping() {
        let group = types::LogGroup::builder().log_group_name("bare").build();

        let mapped = to_log_group(&group);
        assert_eq!(mapped.log_group_name.as_deref(), Some("bare"));
        assert!(mapped.inherited_properties.is_empty());
        assert_eq!(mapped.deletion_protection_enabled, None);
        assert_eq!(mapped.bearer_token_authentication_enabled, None);
        assert_eq!(mapped.arn, None);
    }

    #[test]
    fn test_log_event_mapping() {
        let event = types::FilteredLogEvent::builder()
            .log_stream_name("2024/01/01/[$LATEST]abc")
            .timestamp(1)
            .message("START RequestId: 1")
            .ingestion_time(2)
            .event_id("evt-1")
            .build();

        let mapped = to_log_event(&event);
        assert_eq!(mapped.log_stream_name.as_deref(), Some("2024/01/01/[$LATEST]abc"));
        assert_eq!(mapped.timestamp, Some(1));
        assert_eq!(mapped.message.as_deref(), Some("START RequestId: 1"));
        assert_eq!(mapped.ingestion_time, Some(2));
        assert_eq!(mapped.event_id.as_deref(), Some("evt-1"));
    }
}
