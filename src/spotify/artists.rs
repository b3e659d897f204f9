use crate::{
    error::ApiError,
    spotify::client::{SpotifyClient, UpstreamIntent, parse_payload},
    types::{ArtistObject, ArtistSummary, FollowedArtistsResponse},
};

/// Retrieves the artists the user follows.
///
/// Issues `GET /me/following?type=artist&limit=50` - a single page capped at
/// 50 artists, matching the relay's contract. Cursor pagination beyond the
/// first page is deliberately not exposed.
pub async fn followed_artists(client: &SpotifyClient) -> Result<Vec<ArtistSummary>, ApiError> {
    let intent = UpstreamIntent::get("/me/following?type=artist&limit=50");
    let Some(payload) = client.execute(&intent).await? else {
        return Ok(Vec::new());
    };

    let response: FollowedArtistsResponse = parse_payload(payload, "followed artists")?;
    Ok(response
        .artists
        .items
        .into_iter()
        .map(reshape_artist)
        .collect())
}

pub fn reshape_artist(artist: ArtistObject) -> ArtistSummary {
    ArtistSummary {
        id: artist.id,
        name: artist.name,
        followers: artist.followers.map(|f| f.total).unwrap_or(0),
        genres: artist.genres,
        image: artist.images.into_iter().next().map(|i| i.url),
        uri: artist.uri,
        external_url: artist.external_urls.and_then(|u| u.spotify),
        popularity: artist.popularity,
    }
}
