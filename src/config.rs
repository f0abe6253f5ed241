//! Configuration management for the Spotify Track Recommender.
//!
//! Configuration values come from environment variables, optionally loaded
//! from a `.env` file in the local data directory:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (endpoint URLs and scope only)

use std::{env, path::PathBuf};

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_AUTH_URL: &str = "https://accounts.spotify.com/authorize";
pub const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SCOPE: &str = "user-top-read user-read-private playlist-read-private playlist-modify-public playlist-modify-private user-modify-playback-state user-read-playback-state";

/// Loads environment variables from `seedcli/.env` in the local data directory.
///
/// - Linux: `~/.local/share/seedcli/.env`
/// - macOS: `~/Library/Application Support/seedcli/.env`
/// - Windows: `%LOCALAPPDATA%/seedcli/.env`
///
/// A missing file is fine, the variables may come from the environment alone.
/// A file that exists but cannot be parsed is an error.
///
/// # Example
///
/// ```
/// use seedcli::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("seedcli/.env");
    path
}

fn required(name: &str) -> Result<String, String> {
    env::var(name).map_err(|_| format!("{} must be set", name))
}

fn with_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Address the local OAuth callback server binds to, e.g. `127.0.0.1:8888`.
pub fn server_addr() -> Result<String, String> {
    required("SERVER_ADDRESS")
}

/// Client ID of the registered Spotify application.
pub fn spotify_client_id() -> Result<String, String> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

/// Redirect URI registered with the Spotify application.
///
/// Must point at the `/callback` route of [`server_addr`].
pub fn spotify_redirect_uri() -> Result<String, String> {
    required("SPOTIFY_API_REDIRECT_URI")
}

/// Space separated scopes requested during authorization.
pub fn spotify_scope() -> String {
    with_default("SPOTIFY_API_AUTH_SCOPE", DEFAULT_SCOPE)
}

/// Spotify's authorization endpoint.
pub fn spotify_apiauth_url() -> String {
    with_default("SPOTIFY_API_AUTH_URL", DEFAULT_AUTH_URL)
}

/// Base URL of the Spotify Web API, without trailing slash.
pub fn spotify_apiurl() -> String {
    with_default("SPOTIFY_API_URL", DEFAULT_API_URL)
        .trim_end_matches('/')
        .to_string()
}

/// Spotify's token exchange endpoint.
pub fn spotify_apitoken_url() -> String {
    with_default("SPOTIFY_API_TOKEN_URL", DEFAULT_TOKEN_URL)
}
