use std::sync::Arc;

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::{error::ApiError, management::TokenManager, warning};

/// One upstream HTTP operation, fully described independently of the token
/// that will authenticate it.
#[derive(Debug, Clone)]
pub struct UpstreamIntent {
    pub method: Method,
    pub path: String,
    pub body: Option<Value>,
}

impl UpstreamIntent {
    pub fn get(path: impl Into<String>) -> Self {
        UpstreamIntent {
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }

    pub fn put(path: impl Into<String>, body: Option<Value>) -> Self {
        UpstreamIntent {
            method: Method::PUT,
            path: path.into(),
            body,
        }
    }
}

/// Executes authenticated calls against the Spotify Web API.
///
/// At most one retry is ever performed, and only after an authentication
/// failure. Non-auth failures are never retried, since a second attempt would
/// duplicate side-effecting calls like "start playback".
pub struct SpotifyClient {
    http: Client,
    tokens: Arc<TokenManager>,
    api_url: String,
}

impl SpotifyClient {
    pub fn new(http: Client, tokens: Arc<TokenManager>, api_url: String) -> Self {
        SpotifyClient {
            http,
            tokens,
            api_url,
        }
    }

    /// Performs one upstream call with automatic recovery from a stale token.
    ///
    /// # Control Flow
    ///
    /// 1. Takes the current access token (refreshing first only when no token
    ///    has been acquired yet).
    /// 2. Performs the call with a bearer credential attached.
    /// 3. On a 401, refreshes once and retries the identical intent with the
    ///    token returned by the refresh - never a snapshot taken before it.
    /// 4. A 401 on the retried call is terminal; there is no second refresh.
    /// 5. Any other non-success status is classified without a retry.
    ///
    /// # Returns
    ///
    /// `Ok(Some(value))` for a JSON success payload, `Ok(None)` for an empty
    /// success (204 or empty body), or a classified [`ApiError`].
    pub async fn execute(&self, intent: &UpstreamIntent) -> Result<Option<Value>, ApiError> {
        let token = match self.tokens.current().await {
            Some(token) => token,
            // No token yet - the first acquisition happens through a refresh.
            None => self.tokens.refresh().await.map_err(refresh_denied)?,
        };

        let response = self.send(intent, &token).await?;

        if response.status() != StatusCode::UNAUTHORIZED {
            return into_payload(response).await;
        }

        let fresh = self.tokens.refresh().await.map_err(refresh_denied)?;
        let retried = self.send(intent, &fresh).await?;
        // A second 401 maps to an authentication error below - never to
        // another refresh.
        into_payload(retried).await
    }

    async fn send(
        &self,
        intent: &UpstreamIntent,
        token: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let url = format!("{}{}", self.api_url, intent.path);
        let mut request = self
            .http
            .request(intent.method.clone(), &url)
            .bearer_auth(token);

        if let Some(body) = &intent.body {
            request = request.json(body);
        }

        request.send().await.map_err(|e| {
            ApiError::upstream("Spotify request failed").with_detail(Value::String(e.to_string()))
        })
    }
}

/// Deserializes a success payload into a typed upstream shape.
pub fn parse_payload<T: serde::de::DeserializeOwned>(
    payload: Value,
    what: &str,
) -> Result<T, ApiError> {
    serde_json::from_value(payload).map_err(|e| {
        ApiError::upstream(format!("Unexpected {} payload from Spotify", what))
            .with_detail(Value::String(e.to_string()))
    })
}

fn refresh_denied(e: String) -> ApiError {
    warning!("Token refresh failed: {}", e);
    ApiError::authentication("Failed to refresh Spotify access token")
        .with_detail(Value::String(e))
}

/// Maps an upstream response to a payload or a classified error.
async fn into_payload(response: reqwest::Response) -> Result<Option<Value>, ApiError> {
    let status = response.status();

    if status.is_success() {
        let body = response.text().await.map_err(|e| {
            ApiError::upstream("Failed to read Spotify response")
                .with_detail(Value::String(e.to_string()))
        })?;
        if body.is_empty() {
            return Ok(None);
        }
        let value = serde_json::from_str(&body).map_err(|e| {
            ApiError::upstream("Spotify returned a malformed payload")
                .with_detail(Value::String(e.to_string()))
        })?;
        return Ok(Some(value));
    }

    let body = response.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<Value>(&body).unwrap_or(Value::String(body));

    Err(match status {
        StatusCode::UNAUTHORIZED => {
            ApiError::authentication("Spotify rejected the access token").with_detail(detail)
        }
        StatusCode::FORBIDDEN => {
            ApiError::permission("Playback control requires Spotify Premium").with_detail(detail)
        }
        StatusCode::NOT_FOUND => {
            ApiError::not_found("No active device found for playback").with_detail(detail)
        }
        _ => ApiError::upstream(format!("Spotify returned {}", status)).with_detail(detail),
    })
}
