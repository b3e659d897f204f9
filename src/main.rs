use std::{sync::Arc, time::Duration};

use reqwest::Client;

use spotirelay::{
    config, error,
    management::{CredentialStore, TokenManager},
    server::start_api_server,
    spotify::client::SpotifyClient,
    warning,
};

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env() {
        warning!("No .env file loaded: {}", e);
    }

    let store = Arc::new(CredentialStore::new(
        config::spotify_access_token(),
        config::spotify_refresh_token(),
        config::spotify_client_id(),
        config::spotify_client_secret(),
    ));

    // One pooled client with a bounded timeout for every upstream call, the
    // token exchange included. Spotify is a third party; never wait on it
    // unboundedly.
    let http = match Client::builder().timeout(Duration::from_secs(10)).build() {
        Ok(http) => http,
        Err(e) => error!("Failed to build HTTP client: {}", e),
    };

    let tokens = Arc::new(TokenManager::new(
        Arc::clone(&store),
        http.clone(),
        config::spotify_apitoken_url(),
    ));
    let client = Arc::new(SpotifyClient::new(
        http,
        tokens,
        config::spotify_apiurl(),
    ));

    start_api_server(client).await;
}
