use tokio::sync::RwLock;

/// Process-wide credential set for the configured Spotify user.
///
/// The access token is the only mutable field; the refresh token and client
/// identity are fixed for the process lifetime. A refresh either fully
/// replaces the access token or leaves the previous value untouched.
pub struct CredentialStore {
    access_token: RwLock<Option<String>>,
    refresh_token: String,
    client_id: String,
    client_secret: String,
}

impl CredentialStore {
    pub fn new(
        access_token: Option<String>,
        refresh_token: String,
        client_id: String,
        client_secret: String,
    ) -> Self {
        CredentialStore {
            access_token: RwLock::new(access_token),
            refresh_token,
            client_id,
            client_secret,
        }
    }

    pub async fn access_token(&self) -> Option<String> {
        self.access_token.read().await.clone()
    }

    pub async fn set_access_token(&self, token: String) {
        *self.access_token.write().await = Some(token);
    }

    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}
