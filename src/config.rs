//! Configuration management for the Spotify relay.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and a `.env` file in the working directory. It
//! provides a centralized way to manage application configuration including
//! Spotify API credentials, upstream URLs, and server settings.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the working directory
//! 3. Application defaults (where applicable)
//!
//! All values are read once at startup; the credential set is handed to the
//! rest of the application as constructor arguments rather than re-read from
//! the environment on each request.

use dotenv;
use std::env;

/// Loads environment variables from a `.env` file in the working directory.
///
/// Missing files are reported as an error string so the caller can decide
/// whether that is fatal; a deployment that configures the process through
/// real environment variables runs without any `.env` file.
pub fn load_env() -> Result<(), String> {
    dotenv::dotenv().map(|_| ()).map_err(|e| e.to_string())
}

/// Returns the address and port the relay's HTTP server binds to.
///
/// Defaults to `0.0.0.0:8000` when `SERVER_ADDRESS` is not set.
pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

/// Returns the initial Spotify access token, if one was configured.
///
/// Retrieves the `SPOTIFY_ACCESS_TOKEN` environment variable. This value is
/// optional: when absent, the relay obtains its first access token through a
/// refresh on the first proxied request.
pub fn spotify_access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN").ok()
}

/// Returns the long-lived Spotify refresh token.
///
/// Retrieves the `SPOTIFY_REFRESH_TOKEN` environment variable. The refresh
/// token is exchanged (together with the client credentials) for new access
/// tokens whenever the current one is rejected upstream.
///
/// # Panics
///
/// Panics if the `SPOTIFY_REFRESH_TOKEN` environment variable is not set.
pub fn spotify_refresh_token() -> String {
    env::var("SPOTIFY_REFRESH_TOKEN").expect("SPOTIFY_REFRESH_TOKEN must be set")
}

/// Returns the Spotify API client ID.
///
/// Retrieves the `SPOTIFY_CLIENT_ID` environment variable, obtained when
/// registering the application with Spotify's developer platform.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_ID` environment variable is not set.
pub fn spotify_client_id() -> String {
    env::var("SPOTIFY_CLIENT_ID").expect("SPOTIFY_CLIENT_ID must be set")
}

/// Returns the Spotify API client secret.
///
/// Retrieves the `SPOTIFY_CLIENT_SECRET` environment variable. Used only to
/// Basic-authenticate token refresh requests against the token endpoint.
///
/// # Security Note
///
/// The client secret should be kept confidential and never exposed in logs
/// or version control.
///
/// # Panics
///
/// Panics if the `SPOTIFY_CLIENT_SECRET` environment variable is not set.
pub fn spotify_client_secret() -> String {
    env::var("SPOTIFY_CLIENT_SECRET").expect("SPOTIFY_CLIENT_SECRET must be set")
}

/// Returns the Spotify Web API base URL.
///
/// Defaults to `https://api.spotify.com/v1` when `SPOTIFY_API_URL` is not
/// set. Overridable so tests can point the relay at a local mock server.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| "https://api.spotify.com/v1".to_string())
}

/// Returns the Spotify OAuth token endpoint URL.
///
/// Defaults to `https://accounts.spotify.com/api/token` when
/// `SPOTIFY_API_TOKEN_URL` is not set.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| "https://accounts.spotify.com/api/token".to_string())
}
