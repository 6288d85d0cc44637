use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::ApiError,
    types::{Artist, TopItems, Track},
    utils::TimeRange,
};

/// Number of entries requested for each top-item list.
pub const TOP_LIMIT: u32 = 5;

/// Read access to a user's most-played tracks and artists.
///
/// The production implementation is [`SpotifyClient`]; tests substitute their
/// own implementations to exercise the view layer without network access.
#[async_trait]
pub trait TopItemsClient {
    /// Fetches the user's most-played tracks for the given time range.
    async fn top_tracks(
        &self,
        credential: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Track>, ApiError>;

    /// Fetches the user's most-played artists for the given time range.
    async fn top_artists(
        &self,
        credential: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Artist>, ApiError>;
}

/// HTTP client for the Spotify personalization endpoints.
///
/// Holds a reusable [`reqwest::Client`] and the API base URL. The base URL is
/// configurable so tests can point the client at a local mock server.
pub struct SpotifyClient {
    http: Client,
    base_url: String,
}

impl SpotifyClient {
    /// Creates a client that sends requests to the given API base URL.
    pub fn new(base_url: String) -> Self {
        SpotifyClient {
            http: Client::new(),
            base_url,
        }
    }

    /// Creates a client using the base URL from the environment configuration.
    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl())
    }

    /// Retrieves one kind of top item from the Spotify Web API.
    ///
    /// Both public operations go through this single request path: build the
    /// endpoint URL, attach the bearer token, check the response status, and
    /// decode the enveloped item list.
    ///
    /// # Arguments
    ///
    /// * `kind` - Endpoint path segment, either `tracks` or `artists`
    /// * `credential` - Bearer access token for the Spotify Web API
    /// * `time_range` - Aggregation window the ranking is computed over
    /// * `limit` - Maximum number of items to request
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Status`] for any non-success HTTP status and
    /// [`ApiError::Http`] when the request itself or the body decode fails.
    /// An expired or invalid token shows up here as a 401 status; it is not
    /// treated differently from any other failure.
    async fn fetch_top<T>(
        &self,
        kind: &str,
        credential: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<T>, ApiError>
    where
        T: DeserializeOwned,
    {
        let api_url = format!(
            "{uri}/me/top/{kind}?time_range={time_range}&limit={limit}",
            uri = self.base_url,
            kind = kind,
            time_range = time_range,
            limit = limit
        );

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(credential)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("top {} request for {} failed with {}", kind, time_range, status);
            return Err(ApiError::Status { status });
        }

        let body = response.json::<TopItems<T>>().await?;
        Ok(body.items)
    }
}

#[async_trait]
impl TopItemsClient for SpotifyClient {
    async fn top_tracks(
        &self,
        credential: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Track>, ApiError> {
        self.fetch_top("tracks", credential, time_range, limit).await
    }

    async fn top_artists(
        &self,
        credential: &str,
        time_range: TimeRange,
        limit: u32,
    ) -> Result<Vec<Artist>, ApiError> {
        self.fetch_top("artists", credential, time_range, limit).await
    }
}
