//! Configuration management for the Spotify top items viewer.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files. Unlike tools that require a
//! fully populated environment up front, every value here has a sensible
//! fallback: the viewer must be able to start with nothing configured and
//! accept a credential interactively.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use dotenv;
use std::{env, path::PathBuf};

/// Default base URL for the Spotify Web API.
pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotopcli/.env`. This allows users to store
/// their access token without hardcoding it or exporting it in every shell.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotopcli/.env`
/// - macOS: `~/Library/Application Support/spotopcli/.env`
/// - Windows: `%LOCALAPPDATA%/spotopcli/.env`
///
/// # Returns
///
/// Returns `Ok(())` when the environment file is loaded or absent. A
/// missing `.env` file is not an error: the viewer runs without any
/// configuration and prompts for a credential instead.
///
/// # Errors
///
/// Returns an error string when the parent directory cannot be created or
/// an existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotopcli/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Returns the Spotify Web API base URL.
///
/// Reads the `SPOTIFY_API_URL` environment variable, falling back to
/// [`DEFAULT_API_URL`] when unset. Overriding the base URL is mainly
/// useful for pointing the client at a local stand-in service.
///
/// # Example
///
/// ```
/// let api_url = spotify_apiurl(); // e.g., "https://api.spotify.com/v1"
/// ```
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string())
}

/// Returns the access token configured in the environment, if any.
///
/// Reads the `SPOTIFY_ACCESS_TOKEN` environment variable. The token is a
/// plain bearer credential obtained elsewhere (for example from the Spotify
/// developer console); this tool performs no authorization flow of its own.
/// When the variable is unset the viewer starts without a credential and
/// asks for one.
pub fn access_token() -> Option<String> {
    env::var("SPOTIFY_ACCESS_TOKEN").ok()
}
