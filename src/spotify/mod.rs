//! # Spotify Integration Module
//!
//! Implements the session's seams on top of the Spotify Web API:
//!
//! ```text
//! SessionController
//!     ├── Gateway           → SpotifyClient    (top items, recommendations, playlists, profile)
//!     ├── IdentityProvider  → SpotifyIdentity  (token cache + OAuth 2.0 PKCE login)
//!     └── Playback          → ConnectPlayer    (Spotify Connect play/pause)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `GET /me` - Current user profile
//! - `GET /me/top/{tracks|artists}` - Top items, 40 per page
//! - `GET /recommendations` - Recommendations for up to 5 seeds
//! - `GET /recommendations/available-genre-seeds` - Genre seeds
//! - `GET /users/{user_id}/playlists` - The user's playlists (first 50)
//! - `POST /playlists/{playlist_id}/tracks` - Add a track
//! - `GET /me/player/devices`, `PUT /me/player/play`, `PUT /me/player/pause`
//! - `POST /api/token` - Token exchange and refresh
//!
//! ## Error Handling
//!
//! Every request goes through [`SpotifyClient::send`]:
//! - **502 Bad Gateway** is retried after 10 seconds, a few times
//! - **429 Too Many Requests** waits for `Retry-After` when it is at most
//!   120 seconds, otherwise [`GatewayError::RateLimited`] is returned
//! - **401 Unauthorized** becomes [`GatewayError::Unauthorized`]
//! - any other non-2xx status becomes [`GatewayError::Status`]

pub mod auth;
mod player;
mod playlist;
mod recommendations;
mod top;
mod user;

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use tokio::{sync::Mutex, time::sleep};

use crate::{
    config,
    management::TokenManager,
    session::{Gateway, GatewayError, IdentityProvider, Seeds, TopItemsPage},
    types::{ItemKind, Playlist, TimeRange, Track, User},
    warning,
};

pub use player::{ConnectPlayer, pick_device};
pub use playlist::track_uri;
pub use recommendations::recommendation_query;

/// Items requested per top-items page.
pub const TOP_ITEMS_PAGE_SIZE: u32 = 40;

/// Tracks requested per recommendation call.
pub const RECOMMENDATION_LIMIT: u32 = 100;

/// Playlists requested for the playlist picker.
pub const PLAYLIST_LIMIT: u32 = 50;

const MAX_BAD_GATEWAY_RETRIES: u32 = 3;
const MAX_RETRY_AFTER_SECS: u64 = 120;

/// Authenticated client for the Spotify Web API.
///
/// Cheap to clone; clones share the HTTP connection pool and the token.
#[derive(Clone)]
pub struct SpotifyClient {
    http: Client,
    base_url: String,
    tokens: Arc<Mutex<Option<TokenManager>>>,
}

impl SpotifyClient {
    pub fn new(base_url: impl Into<String>, tokens: Option<TokenManager>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            tokens: Arc::new(Mutex::new(tokens)),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Replaces the token, e.g. after a fresh login.
    pub async fn set_token(&self, tokens: TokenManager) {
        *self.tokens.lock().await = Some(tokens);
    }

    pub async fn has_token(&self) -> bool {
        if self.tokens.lock().await.is_some() {
            return true;
        }
        TokenManager::is_cached()
    }

    async fn access_token(&self) -> Result<String, GatewayError> {
        let mut lock = self.tokens.lock().await;
        if lock.is_none() {
            match TokenManager::load().await {
                Ok(manager) => *lock = Some(manager),
                Err(_) => return Err(GatewayError::Unauthorized),
            }
        }

        match lock.as_mut() {
            Some(manager) => Ok(manager.get_valid_token().await),
            None => Err(GatewayError::Unauthorized),
        }
    }

    /// Sends the request built by `build` with the bearer token attached.
    ///
    /// `build` runs again for every retry.
    pub async fn send<F>(&self, build: F) -> Result<Response, GatewayError>
    where
        F: Fn(&Client) -> RequestBuilder,
    {
        let mut bad_gateway_retries = 0;

        loop {
            let token = self.access_token().await?;
            let response = build(&self.http).bearer_auth(token).send().await?;
            let status = response.status();

            if status.is_success() {
                return Ok(response);
            }

            match status {
                StatusCode::BAD_GATEWAY if bad_gateway_retries < MAX_BAD_GATEWAY_RETRIES => {
                    bad_gateway_retries += 1;
                    sleep(Duration::from_secs(10)).await;
                    continue; // retry
                }
                StatusCode::TOO_MANY_REQUESTS => {
                    let retry_after = response
                        .headers()
                        .get("retry-after")
                        .and_then(|v| v.to_str().ok())
                        .and_then(|v| v.parse::<u64>().ok())
                        .unwrap_or(0);
                    if retry_after <= MAX_RETRY_AFTER_SECS {
                        sleep(Duration::from_secs(retry_after)).await;
                        continue; // retry
                    }
                    warning!(
                        "Retry after has reached an abnormal high of {} seconds.",
                        retry_after
                    );
                    return Err(GatewayError::RateLimited { retry_after });
                }
                StatusCode::UNAUTHORIZED => return Err(GatewayError::Unauthorized),
                _ => {
                    let message = response.text().await.unwrap_or_default();
                    return Err(GatewayError::Status { status, message });
                }
            }
        }
    }
}

#[async_trait]
impl Gateway for SpotifyClient {
    async fn fetch_top_items(
        &self,
        kind: ItemKind,
        time_range: TimeRange,
        page: u32,
    ) -> Result<TopItemsPage, GatewayError> {
        match kind {
            ItemKind::Tracks => Ok(TopItemsPage::Tracks(
                self.get_top_tracks(time_range, page).await?,
            )),
            ItemKind::Artists => Ok(TopItemsPage::Artists(
                self.get_top_artists(time_range, page).await?,
            )),
        }
    }

    async fn fetch_recommendations(&self, seeds: &Seeds) -> Result<Vec<Track>, GatewayError> {
        self.get_recommendations(seeds).await
    }

    async fn fetch_available_genres(&self) -> Result<Vec<String>, GatewayError> {
        self.get_genre_seeds().await
    }

    async fn fetch_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>, GatewayError> {
        self.get_user_playlists(user_id).await
    }

    async fn add_track_to_playlist(
        &self,
        track_id: &str,
        playlist_id: &str,
    ) -> Result<(), GatewayError> {
        self.add_track(track_id, playlist_id).await.map(|_| ())
    }

    async fn fetch_current_user(&self) -> Result<User, GatewayError> {
        self.get_current_user().await
    }
}

/// Identity backed by the token cache and the PKCE login flow.
#[derive(Clone)]
pub struct SpotifyIdentity {
    client: SpotifyClient,
}

impl SpotifyIdentity {
    pub fn new(client: SpotifyClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl IdentityProvider for SpotifyIdentity {
    async fn current_user(&self) -> Result<Option<User>, GatewayError> {
        if !self.client.has_token().await {
            return Ok(None);
        }

        match self.client.get_current_user().await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.is_unauthorized() => Ok(None),
            Err(e) => Err(e),
        }
    }

    async fn login(&self) -> Result<(), GatewayError> {
        let token = auth::login().await.map_err(GatewayError::Other)?;
        self.client.set_token(TokenManager::new(token)).await;
        Ok(())
    }
}

/// Builds the Spotify implementations of all three session seams, sharing
/// one client and the cached token if there is one.
pub async fn connect() -> (SpotifyClient, SpotifyIdentity, ConnectPlayer) {
    let tokens = TokenManager::load().await.ok();
    let client = SpotifyClient::new(config::spotify_apiurl(), tokens);

    (
        client.clone(),
        SpotifyIdentity::new(client.clone()),
        ConnectPlayer::new(client),
    )
}
