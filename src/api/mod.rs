//! # API Module
//!
//! HTTP handlers for the relay's inbound surface. Each handler is a stateless
//! wrapper around one domain operation: extract input, delegate to
//! [`crate::spotify`], and wrap the outcome in the uniform response envelope.
//!
//! ## Endpoints
//!
//! - [`top_tracks`] - the user's top 10 tracks
//! - [`currently_playing`] - the currently playing track, or null
//! - [`pause`] / [`play`] - playback control
//! - [`followed_artists`] - artists the user follows
//! - [`health`] - liveness probe with version information
//!
//! The relay performs no per-request caller authentication of its own - it
//! authenticates itself to Spotify, not the inbound caller. Failures
//! propagate as [`crate::error::ApiError`] and serialize into the error
//! envelope through its `IntoResponse` implementation.

mod artists;
mod health;
mod player;
mod tracks;

pub use artists::followed_artists;
pub use health::health;
pub use player::{pause, play};
pub use tracks::{currently_playing, top_tracks};
