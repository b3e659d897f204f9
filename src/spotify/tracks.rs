use crate::{
    error::ApiError,
    spotify::client::{SpotifyClient, UpstreamIntent, parse_payload},
    types::{
        AlbumObject, AlbumSummary, ArtistRef, CurrentlyPlayingResponse, NowPlaying,
        TopTracksResponse, TrackArtist, TrackObject, TrackSummary,
    },
};

/// Retrieves the user's top 10 tracks.
///
/// Issues `GET /me/top/tracks?limit=10` and reshapes each track into the
/// relay's summary form.
pub async fn top_tracks(client: &SpotifyClient) -> Result<Vec<TrackSummary>, ApiError> {
    let intent = UpstreamIntent::get("/me/top/tracks?limit=10");
    let Some(payload) = client.execute(&intent).await? else {
        return Ok(Vec::new());
    };

    let response: TopTracksResponse = parse_payload(payload, "top tracks")?;
    Ok(response.items.into_iter().map(reshape_track).collect())
}

/// Retrieves the track currently playing for the user, if any.
///
/// A 204 from upstream or a payload without an `item` means nothing is
/// playing - that is a success with no payload, not an error.
pub async fn currently_playing(client: &SpotifyClient) -> Result<Option<NowPlaying>, ApiError> {
    let intent = UpstreamIntent::get("/me/player/currently-playing");
    let Some(payload) = client.execute(&intent).await? else {
        return Ok(None);
    };

    let response: CurrentlyPlayingResponse = parse_payload(payload, "currently playing")?;
    Ok(reshape_now_playing(response))
}

pub fn reshape_track(track: TrackObject) -> TrackSummary {
    TrackSummary {
        id: track.id,
        name: track.name,
        artists: track.artists.into_iter().map(reshape_artist_ref).collect(),
        album: reshape_album(track.album),
        track_url: track.external_urls.and_then(|u| u.spotify),
        duration_ms: track.duration_ms,
        preview_url: track.preview_url,
        uri: track.uri,
    }
}

pub fn reshape_now_playing(playing: CurrentlyPlayingResponse) -> Option<NowPlaying> {
    let item = playing.item?;
    let duration_ms = item.duration_ms;
    let progress_ms = playing.progress_ms.unwrap_or(0);

    Some(NowPlaying {
        id: item.id,
        name: item.name,
        artists: item.artists.into_iter().map(reshape_artist_ref).collect(),
        album: reshape_album(item.album),
        duration_ms,
        progress_ms,
        progress_percent: progress_percent(progress_ms, duration_ms),
        is_playing: playing.is_playing,
        uri: item.uri,
        external_url: item.external_urls.and_then(|u| u.spotify),
        preview_url: item.preview_url,
    })
}

/// Playback position as a whole percentage, 0 when the duration is unknown.
pub fn progress_percent(progress_ms: u64, duration_ms: u64) -> u64 {
    if duration_ms == 0 {
        0
    } else {
        progress_ms * 100 / duration_ms
    }
}

fn reshape_artist_ref(artist: TrackArtist) -> ArtistRef {
    ArtistRef {
        id: artist.id,
        name: artist.name,
        external_url: artist.external_urls.and_then(|u| u.spotify),
    }
}

fn reshape_album(album: AlbumObject) -> AlbumSummary {
    AlbumSummary {
        id: album.id,
        name: album.name,
        external_url: album.external_urls.and_then(|u| u.spotify),
        image: album.images.into_iter().next().map(|i| i.url),
    }
}
