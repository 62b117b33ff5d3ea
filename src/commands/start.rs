use std::sync::Arc;

use anyhow::Error;
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper_util::rt::TokioIo;
use hyper_util::service::TowerToHyperService;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::args::StartSubCommand;
use crate::clients::log_gateway::CloudWatchLogGateway;
use crate::handler::{app, AppState};
use crate::repos::config::{get_aws_region, get_host, get_log_gateway_timeout, get_port};

pub async fn start_server(host: String, port: u16, state: Arc<AppState>) -> Result<(), Error> {
    let service = app::<Incoming>(state);

    let listener = TcpListener::bind((host.as_str(), port)).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    loop {
        let (stream, _) = listener.accept().await?;
        let io = TokioIo::new(stream);
        let service = TowerToHyperService::new(service.clone());

        tokio::task::spawn(async move {
            if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                error!("Error serving connection: {:?}", err);
            }
        });
    }
}

pub async fn run(start_cmd: &StartSubCommand) -> Result<(), Error> {
    let host = start_cmd.host.clone().unwrap_or_else(get_host);
    let port = start_cmd.port.unwrap_or_else(get_port);

    let gateway = CloudWatchLogGateway::from_env(get_aws_region()).await;
    let state = Arc::new(AppState::new(Arc::new(gateway), get_log_gateway_timeout()));

    start_server(host, port, state).await
}
