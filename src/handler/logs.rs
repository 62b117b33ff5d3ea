use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use tracing::info;

use super::{json_response, AppState};
use crate::clients::log_gateway::{with_timeout, DEFAULT_EVENT_LIMIT};
use crate::error::ApiError;
use crate::models::log::{LogEventsResponse, LogGroupsResponse};

pub const LOG_EVENTS_PREFIX: &str = "/log-events/";

pub async fn list_log_groups(state: &AppState) -> Result<Response<Full<Bytes>>, ApiError> {
    let log_groups = with_timeout(state.gateway_timeout, state.gateway.list_log_groups()).await?;
    info!("Fetched {} log groups", log_groups.len());
    json_response(StatusCode::OK, &LogGroupsResponse { log_groups })
}

pub async fn get_log_events(
    state: &AppState,
    path: &str,
    query: Option<&str>,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let log_group_name = log_group_from_path(path)?;
    let limit = parse_limit(query)?;

    let log_events = with_timeout(
        state.gateway_timeout,
        state.gateway.get_log_events(&log_group_name, limit),
    )
    .await?;
    info!(
        "Fetched {} events from {} (limit {})",
        log_events.len(),
        log_group_name,
        limit
    );
    json_response(StatusCode::OK, &LogEventsResponse { log_events })
}

/// The group name is the one path segment after the prefix, percent-decoded,
/// so `/aws/lambda/fn` is addressed as `%2Faws%2Flambda%2Ffn`.
fn log_group_from_path(path: &str) -> Result<String, ApiError> {
    let segment = path
        .strip_prefix(LOG_EVENTS_PREFIX)
        .filter(|s| !s.is_empty() && !s.contains('/'))
        .ok_or(ApiError::NotFound)?;

    urlencoding::decode(segment)
        .map(|name| name.into_owned())
        .map_err(|e| ApiError::Unprocessable(format!("Invalid log group name: {}", e)))
}

fn parse_limit(query: Option<&str>) -> Result<i32, ApiError> {
    let limit = query.and_then(|q| {
        url::form_urlencoded::parse(q.as_bytes())
            .find(|(key, _)| key == "limit")
            .map(|(_, value)| value.into_owned())
    });

    match limit {
        None => Ok(DEFAULT_EVENT_LIMIT),
        Some(value) => value.parse().map_err(|_| {
            ApiError::Unprocessable(format!(
                "Query parameter 'limit' must be an integer, got '{}'",
                value
            ))
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_group_from_path() {
        assert_eq!(log_group_from_path("/log-events/my-group").unwrap(), "my-group");
        assert_eq!(
            log_group_from_path("/log-events/%2Faws%2Flambda%2Ffn").unwrap(),
            "/aws/lambda/fn"
        );
        assert!(matches!(log_group_from_path("/log-events/"), Err(ApiError::NotFound)));
        assert!(matches!(log_group_from_path("/log-events/a/b"), Err(ApiError::NotFound)));
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit(None).unwrap(), 10);
        assert_eq!(parse_limit(Some("other=1")).unwrap(), 10);
        assert_eq!(parse_limit(Some("limit=5")).unwrap(), 5);
        assert_eq!(parse_limit(Some("x=y&limit=-3")).unwrap(), -3);
        assert_eq!(parse_limit(Some("limit=0")).unwrap(), 0);
        assert!(matches!(parse_limit(Some("limit=ten")), Err(ApiError::Unprocessable(_))));
        assert!(matches!(parse_limit(Some("limit=")), Err(ApiError::Unprocessable(_))));
    }
}
