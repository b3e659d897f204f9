use std::sync::Arc;

use axum::{Extension, response::Json};

use crate::{
    error::ApiError,
    spotify::{self, client::SpotifyClient},
    types::{ApiResponse, ArtistSummary},
};

pub async fn followed_artists(
    Extension(client): Extension<Arc<SpotifyClient>>,
) -> Result<Json<ApiResponse<Vec<ArtistSummary>>>, ApiError> {
    let artists = spotify::artists::followed_artists(&client).await?;
    Ok(Json(ApiResponse::ok(
        artists,
        "Followed artists fetched successfully",
    )))
}
