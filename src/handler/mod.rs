use std::convert::Infallible;
use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use http::header::{HeaderValue, CONTENT_TYPE};
use http_body_util::Full;
use hyper::body::Body;
use hyper::{Method, Request, Response, StatusCode};
use serde::Serialize;
use tower::util::BoxCloneService;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, Cors, CorsLayer};
use tracing::{error, info};

use crate::clients::log_gateway::LogGateway;
use crate::error::ApiError;
use crate::models::model_catalog::list_models;
use crate::models::status::{greeting, health, mcp_status};
use crate::models::ErrorDetail;

pub mod completions;
pub mod logs;

use logs::LOG_EVENTS_PREFIX;

const KNOWN_PATHS: [&str; 6] = [
    "/",
    "/v1/chat/completions",
    "/v1/models",
    "/health",
    "/mcp/status",
    "/log-groups",
];

/// Per-process state shared by every connection.
pub struct AppState {
    pub gateway: Arc<dyn LogGateway>,
    pub gateway_timeout: Duration,
}

impl AppState {
    pub fn new(gateway: Arc<dyn LogGateway>, gateway_timeout: Duration) -> Self {
        AppState {
            gateway,
            gateway_timeout,
        }
    }
}

pub type AppService<B> = Cors<BoxCloneService<Request<B>, Response<Full<Bytes>>, Infallible>>;

/// Any origin, method and header, with credentials. A literal `*` is not
/// allowed alongside credentials, so the request's values are echoed back.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Builds the full request pipeline: CORS in front of the router.
pub fn app<B>(state: Arc<AppState>) -> AppService<B>
where
    B: Body + Send + 'static,
    B::Data: Send,
    B::Error: Display + Send,
{
    let router = tower::service_fn(move |req: Request<B>| {
        let state = Arc::clone(&state);
        async move { Ok::<_, Infallible>(route(req, &state).await) }
    });

    ServiceBuilder::new()
        .layer(cors_layer())
        .service(BoxCloneService::new(router))
}

pub async fn route<B>(req: Request<B>, state: &AppState) -> Response<Full<Bytes>>
where
    B: Body,
    B::Error: Display,
{
    info!("Received request: {} {}", req.method(), req.uri().path());

    match dispatch(req, state).await {
        Ok(response) => response,
        Err(e) => {
            if e.status().is_server_error() {
                error!("Error handling request: {}", e);
            } else {
                info!("Rejected request ({}): {}", e.status(), e);
            }
            error_response(&e)
        }
    }
}

async fn dispatch<B>(req: Request<B>, state: &AppState) -> Result<Response<Full<Bytes>>, ApiError>
where
    B: Body,
    B::Error: Display,
{
    let path = req.uri().path().to_string();
    let query = req.uri().query().map(str::to_string);

    match (req.method(), path.as_str()) {
        (&Method::GET, "/") => json_response(StatusCode::OK, &greeting()),
        (&Method::POST, "/v1/chat/completions") => completions::handle(req).await,
        (&Method::GET, "/v1/models") => json_response(StatusCode::OK, &list_models()),
        (&Method::GET, "/health") => json_response(StatusCode::OK, &health()),
        (&Method::GET, "/mcp/status") => json_response(StatusCode::OK, &mcp_status()),
        (&Method::GET, "/log-groups") => logs::list_log_groups(state).await,
        (&Method::GET, p) if p.starts_with(LOG_EVENTS_PREFIX) => {
            logs::get_log_events(state, p, query.as_deref()).await
        }
        (_, p) if KNOWN_PATHS.contains(&p) || p.starts_with(LOG_EVENTS_PREFIX) => {
            Err(ApiError::MethodNotAllowed)
        }
        _ => Err(ApiError::NotFound),
    }
}

pub fn json_response<T: Serialize>(
    status: StatusCode,
    value: &T,
) -> Result<Response<Full<Bytes>>, ApiError> {
    let body = serde_json::to_vec(value)
        .map_err(|e| ApiError::Internal(format!("Failed to serialize response: {}", e)))?;
    Ok(with_json_body(status, body))
}

fn error_response(e: &ApiError) -> Response<Full<Bytes>> {
    let body = serde_json::to_vec(&ErrorDetail::new(e.to_string())).unwrap_or_default();
    with_json_body(e.status(), body)
}

fn with_json_body(status: StatusCode, body: Vec<u8>) -> Response<Full<Bytes>> {
    let mut response = Response::new(Full::new(Bytes::from(body)));
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}
