use crate::{
    error, info,
    session::Session,
    spotify::top::{SpotifyClient, TOP_LIMIT, TopItemsClient},
    utils::TimeRange,
    view::{Render, TerminalRenderer},
    warning,
};

/// Prints the user's most-played tracks for one time range.
///
/// Fetches a single ranked list with the access token from the environment
/// and renders it as a table. Exits non-zero when the request fails; prints
/// a hint and returns when no token is configured.
pub async fn list_tracks(time_range: TimeRange) {
    let Some(credential) = credential_from_env() else {
        return;
    };

    let client = SpotifyClient::from_env();
    let mut renderer = TerminalRenderer::new();
    info!("Top tracks: {} ({})", time_range, time_range.label());

    match client.top_tracks(&credential, time_range, TOP_LIMIT).await {
        Ok(tracks) if tracks.is_empty() => renderer.show_no_tracks(),
        Ok(tracks) => renderer.show_tracks(&tracks),
        Err(e) => {
            log::warn!("top tracks request for {} failed: {}", time_range, e);
            error!("There was an error loading your data. Your access token may be invalid or expired.");
        }
    }
}

/// Prints the user's most-played artists for one time range.
///
/// Same contract as [`list_tracks`], for the artist list.
pub async fn list_artists(time_range: TimeRange) {
    let Some(credential) = credential_from_env() else {
        return;
    };

    let client = SpotifyClient::from_env();
    let mut renderer = TerminalRenderer::new();
    info!("Top artists: {} ({})", time_range, time_range.label());

    match client.top_artists(&credential, time_range, TOP_LIMIT).await {
        Ok(artists) if artists.is_empty() => renderer.show_no_artists(),
        Ok(artists) => renderer.show_artists(&artists),
        Err(e) => {
            log::warn!("top artists request for {} failed: {}", time_range, e);
            error!("There was an error loading your data. Your access token may be invalid or expired.");
        }
    }
}

/// Reads the access token from the environment, warning when it is missing
/// or still the placeholder.
fn credential_from_env() -> Option<String> {
    let session = Session::from_env();
    match session.credential() {
        Some(credential) => Some(credential.to_string()),
        None => {
            warning!("No Spotify access token is configured.");
            info!("Set SPOTIFY_ACCESS_TOKEN or use the interactive viewer and enter one with: token <value>");
            None
        }
    }
}
