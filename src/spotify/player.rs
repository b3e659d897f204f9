use serde_json::json;

use crate::{
    error::ApiError,
    spotify::client::{SpotifyClient, UpstreamIntent},
};

/// Pauses the user's playback via `PUT /me/player/pause`.
///
/// Upstream returns no payload on success. A 403 (free-tier account) or 404
/// (no active device) is classified by the executor and never retried.
pub async fn pause(client: &SpotifyClient) -> Result<(), ApiError> {
    let intent = UpstreamIntent::put("/me/player/pause", None);
    client.execute(&intent).await?;
    Ok(())
}

/// Starts playback of a specific track via `PUT /me/player/play`.
///
/// The caller is responsible for validating the track URI before this point;
/// by the time an intent is built, one upstream call will be made.
pub async fn play(client: &SpotifyClient, track_uri: &str) -> Result<(), ApiError> {
    let body = json!({ "uris": [track_uri] });
    let intent = UpstreamIntent::put("/me/player/play", Some(body));
    client.execute(&intent).await?;
    Ok(())
}
