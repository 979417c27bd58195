mod pages;
mod server;

use sesher::SessionConfig;
use sesher_axum::{SESHER_ROUTE_PREFIX, SessionRouterExt, session_router};

use crate::server::{init_tracing, serve_http};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    init_tracing("demo_sesher");

    let config = SessionConfig::from_env();
    tracing::info!("Session config: {:?}", config.clone().resolve());

    let app = pages::router()
        .nest(SESHER_ROUTE_PREFIX.as_str(), session_router())
        .with_session(config);

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);

    serve_http(port, app).await?;
    Ok(())
}
