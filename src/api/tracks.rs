use std::sync::Arc;

use axum::{Extension, response::Json};

use crate::{
    error::ApiError,
    spotify::{self, client::SpotifyClient},
    types::{ApiResponse, NowPlaying, TrackSummary},
};

pub async fn top_tracks(
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Json<ApiResponse<Vec<TrackSummary>>>, ApiError> {
    let tracks = spotify::tracks::top_tracks(&client).await?;
    Ok(Json(ApiResponse::ok(
        tracks,
        "Top 10 tracks fetched successfully",
    )))
}

pub async fn currently_playing(
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Json<ApiResponse<NowPlaying>>, ApiError> {
    match spotify::tracks::currently_playing(&client).await? {
        Some(track) => Ok(Json(ApiResponse::ok(
            track,
            "Currently playing track fetched successfully",
        ))),
        None => Ok(Json(ApiResponse::null("No song is currently playing"))),
    }
}
