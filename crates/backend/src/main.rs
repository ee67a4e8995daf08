pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use axum::http::{header, Method};
use axum::middleware;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use shared::config::{load_config, resolve_fixtures_path};
use shared::data::fixtures::Fixtures;
use shared::data::store::MockStore;
use system::middleware::request_logger::request_logger;

fn load_fixtures(config: &shared::config::Config) -> anyhow::Result<Fixtures> {
    match resolve_fixtures_path(config) {
        Some(path) => {
            tracing::info!("Loading fixtures from: {}", path.display());
            Fixtures::from_file(&path)
        }
        None => {
            tracing::info!("Using embedded demo data");
            Ok(Fixtures::embedded())
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    let config = load_config()?;
    let store = MockStore::new(load_fixtures(&config)?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::DELETE, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = routes::configure_routes(store)
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(request_logger))
        .layer(cors);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid server address: {}", e))?;

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
