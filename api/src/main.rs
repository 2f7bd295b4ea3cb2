use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;

mod application;
mod args;
mod scheduler;

use crate::application::http::server::http_server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let args = Arc::new(args::Args::parse());

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "larder=debug,larder_core=debug,axum=info,tower_http=info".to_string());

    if args.log_json {
        tracing_subscriber::fmt()
            .with_env_filter(env_filter)
            .with_target(false)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(env_filter).init();
    }

    let state = http_server::state(args.clone()).await?;

    scheduler::spawn_expiry_scan(state.clone());

    let app = http_server::router(state)?;

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;

    tracing::info!("listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
