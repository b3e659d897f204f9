use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Json};

use crate::{
    error::ApiError,
    spotify::{self, client::SpotifyClient},
    types::ApiResponse,
};

pub async fn pause(
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    spotify::player::pause(&client).await?;
    Ok(Json(ApiResponse::null("Playback paused successfully")))
}

pub async fn play(
    Query(params): Query<HashMap<String, String>>,
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    // Validated before any intent is built - a missing URI is the caller's
    // fault and must not produce an upstream call.
    let uri = match params.get("uri") {
        Some(uri) if !uri.is_empty() => uri.clone(),
        _ => return Err(ApiError::validation("Missing track URI")),
    };

    spotify::player::play(&client, &uri).await?;
    Ok(Json(ApiResponse::null(format!(
        "Playback started for {}",
        uri
    ))))
}
