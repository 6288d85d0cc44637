//! # Spotify Integration Module
//!
//! This module provides the interface to the Spotify Web API endpoints used by
//! spotopcli. It is the only place in the crate that performs network I/O; the
//! CLI and view layers consume the typed results it returns and never touch
//! HTTP themselves.
//!
//! ## Module Organization
//!
//! - [`top`] - Personalized top-item retrieval (most-played tracks and artists)
//!
//! ## API Coverage
//!
//! The module covers the personalization family of Spotify Web API endpoints:
//!
//! - `GET /me/top/tracks` - User's most-played tracks for a time range
//! - `GET /me/top/artists` - User's most-played artists for a time range
//!
//! ## Authentication Strategy
//!
//! Every request authenticates with a bearer access token supplied per call.
//! The caller owns the token lifecycle; this module never stores, refreshes,
//! or validates credentials beyond attaching them to the request.
//!
//! ## Error Handling Philosophy
//!
//! Transport failures and non-success HTTP statuses both surface as
//! [`crate::error::ApiError`] values. No distinction is made between 401, 403,
//! 429, or any other failing status: callers render a single generic failure
//! message, so the error variants only carry enough detail for diagnostic
//! logging. There is no retry logic and no rate-limit handling.
//!
//! ## Usage Patterns
//!
//! ```rust
//! use spotopcli::spotify::top::{SpotifyClient, TopItemsClient, TOP_LIMIT};
//! use spotopcli::utils::TimeRange;
//!
//! let client = SpotifyClient::from_env();
//! let tracks = client
//!     .top_tracks(&token, TimeRange::MediumTerm, TOP_LIMIT)
//!     .await?;
//! ```

pub mod top;
