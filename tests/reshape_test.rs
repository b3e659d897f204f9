use serde_json::to_value;
use spotirelay::spotify::artists::reshape_artist;
use spotirelay::spotify::tracks::{progress_percent, reshape_now_playing, reshape_track};
use spotirelay::types::{
    AlbumObject, ArtistObject, CurrentlyPlayingResponse, ExternalUrls, Followers, ImageObject,
    TrackArtist, TrackObject,
};

// Helper function to create a test track as Spotify returns it
fn create_test_track(id: &str, duration_ms: u64) -> TrackObject {
    TrackObject {
        id: id.to_string(),
        name: "Test Song".to_string(),
        artists: vec![TrackArtist {
            id: format!("{}_artist", id),
            name: "Test Artist".to_string(),
            external_urls: Some(ExternalUrls {
                spotify: Some("https://open.spotify.com/artist/a1".to_string()),
            }),
        }],
        album: AlbumObject {
            id: format!("{}_album", id),
            name: "Test Album".to_string(),
            external_urls: Some(ExternalUrls {
                spotify: Some("https://open.spotify.com/album/al1".to_string()),
            }),
            images: vec![
                ImageObject {
                    url: "https://i.scdn.co/image/large".to_string(),
                },
                ImageObject {
                    url: "https://i.scdn.co/image/small".to_string(),
                },
            ],
        },
        external_urls: Some(ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/track/{}", id)),
        }),
        duration_ms,
        preview_url: None,
        uri: format!("spotify:track:{}", id),
    }
}

// Helper function to create a test artist as Spotify returns it
fn create_test_artist(id: &str) -> ArtistObject {
    ArtistObject {
        id: id.to_string(),
        name: "Test Artist".to_string(),
        followers: Some(Followers { total: 1234 }),
        genres: vec!["shoegaze".to_string(), "dream pop".to_string()],
        images: vec![ImageObject {
            url: "https://i.scdn.co/image/artist".to_string(),
        }],
        uri: format!("spotify:artist:{}", id),
        external_urls: Some(ExternalUrls {
            spotify: Some(format!("https://open.spotify.com/artist/{}", id)),
        }),
        popularity: Some(61),
    }
}

#[test]
fn test_progress_percent() {
    // 30s into a 200s track is 15%
    assert_eq!(progress_percent(30000, 200000), 15);

    // Division is floored, never rounded up
    assert_eq!(progress_percent(999, 3000), 33);

    // Zero duration must not divide
    assert_eq!(progress_percent(30000, 0), 0);

    // Start of track
    assert_eq!(progress_percent(0, 200000), 0);

    // End of track
    assert_eq!(progress_percent(200000, 200000), 100);
}

#[test]
fn test_reshape_track_fields() {
    let summary = reshape_track(create_test_track("t1", 200000));

    assert_eq!(summary.id, "t1");
    assert_eq!(summary.name, "Test Song");
    assert_eq!(summary.uri, "spotify:track:t1");
    assert_eq!(summary.duration_ms, 200000);
    assert_eq!(
        summary.track_url.as_deref(),
        Some("https://open.spotify.com/track/t1")
    );

    // The album image is the first entry in the upstream image list
    assert_eq!(
        summary.album.image.as_deref(),
        Some("https://i.scdn.co/image/large")
    );

    // Artist references carry the external URL when present
    assert_eq!(summary.artists.len(), 1);
    assert_eq!(
        summary.artists[0].external_url.as_deref(),
        Some("https://open.spotify.com/artist/a1")
    );
}

#[test]
fn test_reshape_track_is_idempotent() {
    let track = create_test_track("t1", 200000);

    let first = to_value(reshape_track(track.clone())).unwrap();
    let second = to_value(reshape_track(track)).unwrap();

    // Reshaping the same payload twice yields identical output
    assert_eq!(first, second);
}

#[test]
fn test_reshape_now_playing_without_item() {
    let playing = CurrentlyPlayingResponse {
        item: None,
        progress_ms: Some(1000),
        is_playing: false,
    };

    // No item means nothing is playing - not an error, just no payload
    assert!(reshape_now_playing(playing).is_none());
}

#[test]
fn test_reshape_now_playing_fields() {
    let playing = CurrentlyPlayingResponse {
        item: Some(create_test_track("t1", 200000)),
        progress_ms: Some(30000),
        is_playing: true,
    };

    let now = reshape_now_playing(playing).unwrap();

    assert_eq!(now.id, "t1");
    assert_eq!(now.progress_ms, 30000);
    assert_eq!(now.progress_percent, 15);
    assert!(now.is_playing);
    assert_eq!(
        now.external_url.as_deref(),
        Some("https://open.spotify.com/track/t1")
    );
}

#[test]
fn test_reshape_now_playing_defaults_missing_progress_to_zero() {
    let playing = CurrentlyPlayingResponse {
        item: Some(create_test_track("t1", 200000)),
        progress_ms: None,
        is_playing: true,
    };

    let now = reshape_now_playing(playing).unwrap();

    assert_eq!(now.progress_ms, 0);
    assert_eq!(now.progress_percent, 0);
}

#[test]
fn test_reshape_now_playing_zero_duration() {
    let playing = CurrentlyPlayingResponse {
        item: Some(create_test_track("t1", 0)),
        progress_ms: Some(30000),
        is_playing: true,
    };

    // A zero-length item must not divide by zero
    assert_eq!(reshape_now_playing(playing).unwrap().progress_percent, 0);
}

#[test]
fn test_reshape_artist_fields() {
    let summary = reshape_artist(create_test_artist("a1"));

    assert_eq!(summary.id, "a1");
    assert_eq!(summary.followers, 1234);
    assert_eq!(summary.genres, vec!["shoegaze", "dream pop"]);
    assert_eq!(summary.image.as_deref(), Some("https://i.scdn.co/image/artist"));
    assert_eq!(summary.popularity, Some(61));
}

#[test]
fn test_reshape_artist_missing_optionals() {
    let mut artist = create_test_artist("a2");
    artist.followers = None;
    artist.images = Vec::new();
    artist.external_urls = None;
    artist.popularity = None;

    let summary = reshape_artist(artist);

    // Missing follower count collapses to zero, missing image to null
    assert_eq!(summary.followers, 0);
    assert!(summary.image.is_none());
    assert!(summary.external_url.is_none());
    assert!(summary.popularity.is_none());
}
