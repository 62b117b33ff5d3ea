use std::fmt::Display;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Body;
use hyper::{Request, Response, StatusCode};
use tracing::debug;

use super::json_response;
use crate::error::ApiError;
use crate::models::chat_request::ChatRequest;
use crate::models::chat_response::build_chat_completion;

pub async fn handle<B>(req: Request<B>) -> Result<Response<Full<Bytes>>, ApiError>
where
    B: Body,
    B::Error: Display,
{
    let whole_body = req
        .into_body()
        .collect()
        .await
        .map_err(|e| ApiError::MalformedBody(format!("Failed to read request body: {}", e)))?
        .to_bytes();

    let chat_request = ChatRequest::from_slice(&whole_body)?;
    debug!(
        "Chat request for model {} with {} messages (max_tokens={:?}, temperature={:?}, stream={:?})",
        chat_request.model,
        chat_request.messages.len(),
        chat_request.max_tokens,
        chat_request.temperature,
        chat_request.stream
    );

    json_response(StatusCode::OK, &build_chat_completion(&chat_request))
}
