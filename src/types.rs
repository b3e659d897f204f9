use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: Option<T>,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        ApiResponse {
            status_code: 200,
            data: Some(data),
            message: message.into(),
            success: true,
        }
    }

    pub fn null(message: impl Into<String>) -> Self {
        ApiResponse {
            status_code: 200,
            data: None,
            message: message.into(),
            success: true,
        }
    }
}

// --- Upstream payload shapes (Spotify Web API) ---

#[derive(Debug, Clone, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageObject {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AlbumObject {
    pub id: String,
    pub name: String,
    pub external_urls: Option<ExternalUrls>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TrackObject {
    pub id: String,
    pub name: String,
    pub artists: Vec<TrackArtist>,
    pub album: AlbumObject,
    pub external_urls: Option<ExternalUrls>,
    #[serde(default)]
    pub duration_ms: u64,
    pub preview_url: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub items: Vec<TrackObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentlyPlayingResponse {
    pub item: Option<TrackObject>,
    pub progress_ms: Option<u64>,
    #[serde(default)]
    pub is_playing: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Followers {
    #[serde(default)]
    pub total: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistObject {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub followers: Option<Followers>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<ImageObject>,
    pub uri: String,
    pub external_urls: Option<ExternalUrls>,
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsContainer {
    pub items: Vec<ArtistObject>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FollowedArtistsResponse {
    pub artists: ArtistsContainer,
}

// --- Relay response shapes ---

#[derive(Debug, Clone, Serialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
    #[serde(rename = "externalURL")]
    pub external_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AlbumSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "externalURL")]
    pub external_url: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackSummary {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumSummary,
    #[serde(rename = "trackURL")]
    pub track_url: Option<String>,
    pub duration_ms: u64,
    #[serde(rename = "previewURL")]
    pub preview_url: Option<String>,
    pub uri: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NowPlaying {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub album: AlbumSummary,
    pub duration_ms: u64,
    pub progress_ms: u64,
    pub progress_percent: u64,
    pub is_playing: bool,
    pub uri: String,
    #[serde(rename = "externalURL")]
    pub external_url: Option<String>,
    #[serde(rename = "previewURL")]
    pub preview_url: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtistSummary {
    pub id: String,
    pub name: String,
    pub followers: u64,
    pub genres: Vec<String>,
    pub image: Option<String>,
    pub uri: String,
    #[serde(rename = "externalURL")]
    pub external_url: Option<String>,
    pub popularity: Option<u32>,
}
