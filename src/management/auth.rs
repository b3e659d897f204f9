use std::sync::Arc;

use base64::{Engine, engine::general_purpose::STANDARD};
use futures_util::FutureExt;
use futures_util::future::{BoxFuture, Shared};
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{management::CredentialStore, success};

type PendingRefresh = Shared<BoxFuture<'static, Result<String, String>>>;

/// Owns the access-token lifecycle for the configured user.
///
/// `current` is the cheap path: it hands out whatever token the store holds
/// without probing upstream. `refresh` is single-flight: while one token
/// exchange is in flight, every additional caller attaches to it and awaits
/// its outcome instead of issuing a second exchange.
pub struct TokenManager {
    store: Arc<CredentialStore>,
    http: Client,
    token_url: String,
    pending: Mutex<Option<PendingRefresh>>,
}

impl TokenManager {
    pub fn new(store: Arc<CredentialStore>, http: Client, token_url: String) -> Self {
        TokenManager {
            store,
            http,
            token_url,
            pending: Mutex::new(None),
        }
    }

    /// Returns the current access token, if any, without validating it
    /// upstream. Validity is established by the first real call.
    pub async fn current(&self) -> Option<String> {
        self.store.access_token().await
    }

    /// Exchanges the refresh token for a new access token.
    ///
    /// The first caller while no exchange is in flight becomes the initiator;
    /// concurrent callers share the initiator's outcome, success or failure.
    /// Failures are not retried here and not cached beyond the in-flight
    /// window - the next request that needs a token starts a fresh exchange.
    pub async fn refresh(&self) -> Result<String, String> {
        let fut = {
            let mut pending = self.pending.lock().await;
            match pending.as_ref() {
                Some(inflight) => inflight.clone(),
                None => {
                    let exchange = refresh_exchange(
                        self.http.clone(),
                        Arc::clone(&self.store),
                        self.token_url.clone(),
                    )
                    .boxed()
                    .shared();
                    *pending = Some(exchange.clone());
                    exchange
                }
            }
        };

        let result = fut.clone().await;

        // Any finisher that still sees its own exchange in the slot clears
        // it, so the settled result is never served outside the in-flight
        // window even if some waiters were cancelled mid-await.
        let mut pending = self.pending.lock().await;
        if let Some(inflight) = pending.as_ref() {
            if inflight.ptr_eq(&fut) {
                *pending = None;
            }
        }

        result
    }
}

/// Performs the upstream token exchange and writes the new access token into
/// the store. On failure the store is left untouched.
async fn refresh_exchange(
    http: Client,
    store: Arc<CredentialStore>,
    token_url: String,
) -> Result<String, String> {
    let auth = STANDARD.encode(format!("{}:{}", store.client_id(), store.client_secret()));

    let res = http
        .post(&token_url)
        .header("Authorization", format!("Basic {}", auth))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", store.refresh_token()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !res.status().is_success() {
        let status = res.status();
        let body = res.text().await.unwrap_or_default();
        return Err(format!("token endpoint returned {}: {}", status, body));
    }

    let json: serde_json::Value = res.json().await.map_err(|e| e.to_string())?;

    let access_token = match json["access_token"].as_str() {
        Some(token) if !token.is_empty() => token.to_string(),
        _ => return Err("token response is missing access_token".to_string()),
    };

    // Written before the shared future settles, so every waiter released by
    // this exchange observes the new token.
    store.set_access_token(access_token.clone()).await;
    success!("Access token refreshed");

    Ok(access_token)
}
