use axum::{
    Extension, Router,
    routing::{get, put},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tower_http::cors::CorsLayer;

use crate::{api, config, error, info, spotify::client::SpotifyClient};

/// Builds the relay's routing table.
///
/// Pause and play are mounted as PUT only - they change playback state, so
/// the read verbs stay off them.
pub fn router(client: Arc<SpotifyClient>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/top-tracks", get(api::top_tracks))
        .route("/currently-playing", get(api::currently_playing))
        .route("/pause", put(api::pause))
        .route("/play", put(api::play))
        .route("/followed-artists", get(api::followed_artists))
        .layer(CorsLayer::permissive())
        .layer(Extension(client))
}

pub async fn start_api_server(client: Arc<SpotifyClient>) {
    let app = router(client);

    let addr = match SocketAddr::from_str(&config::server_addr()) {
        Ok(addr) => addr,
        Err(e) => error!("Failed to parse server address: {}", e),
    };

    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    info!("Relay listening on {}", addr);
    axum::serve(listener, app).await.unwrap();
}
