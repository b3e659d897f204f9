//! # Spotify Integration Module
//!
//! This module is the relay's integration layer with the Spotify Web API. It
//! owns all upstream HTTP communication: attaching bearer credentials,
//! recovering from stale tokens, classifying upstream failures, and reshaping
//! raw payloads into the relay's stable response shapes.
//!
//! ## Architecture
//!
//! ```text
//! HTTP handlers (api)
//!          ↓
//! Domain operations (tracks, player, artists)
//!          ↓
//! Upstream call executor (client)  ←  TokenManager (management)
//!          ↓
//! Spotify Web API
//! ```
//!
//! Each domain operation builds exactly one [`client::UpstreamIntent`] and
//! delegates it to [`client::SpotifyClient::execute`], which performs the
//! call with automatic one-shot recovery from an expired access token. The
//! reshaping functions are pure, so the same upstream payload always maps to
//! the same relay payload.
//!
//! ## API Coverage
//!
//! - `GET /me/top/tracks` - the user's top tracks
//! - `GET /me/player/currently-playing` - playback state
//! - `PUT /me/player/pause` - pause playback
//! - `PUT /me/player/play` - start playback of a specific track
//! - `GET /me/following` - followed artists
//!
//! ## Error Types
//!
//! Every operation returns [`crate::error::ApiError`], classified at the
//! executor boundary where the upstream status code is visible. Handlers
//! propagate these unchanged to the HTTP surface.

pub mod artists;
pub mod client;
pub mod player;
pub mod tracks;
