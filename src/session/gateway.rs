use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::{
    session::Seeds,
    types::{Artist, ItemKind, Playlist, TimeRange, TopItems, Track, User},
};

/// Failure of a call across one of the session's seams.
///
/// Errors are only classified as far as the session needs: whether the user
/// has to log in again, or whether the same action can simply be retried.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("not logged in or the session has expired")]
    Unauthorized,

    #[error("request failed with status {status}: {message}")]
    Status { status: StatusCode, message: String },

    #[error("rate limited for {retry_after} seconds")]
    RateLimited { retry_after: u64 },

    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response: {0}")]
    Decode(String),

    #[error("no playback device available")]
    NoDevice,

    #[error("{0}")]
    Other(String),
}

impl GatewayError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, GatewayError::Unauthorized)
            || matches!(self, GatewayError::Status { status, .. } if *status == StatusCode::UNAUTHORIZED)
    }
}

/// Top items of either kind, as returned by [`Gateway::fetch_top_items`].
#[derive(Debug, Clone, PartialEq)]
pub enum TopItemsPage {
    Tracks(TopItems<Track>),
    Artists(TopItems<Artist>),
}

impl TopItemsPage {
    pub fn len(&self) -> usize {
        match self {
            TopItemsPage::Tracks(page) => page.items.len(),
            TopItemsPage::Artists(page) => page.items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn has_next(&self) -> bool {
        match self {
            TopItemsPage::Tracks(page) => page.has_next,
            TopItemsPage::Artists(page) => page.has_next,
        }
    }
}

/// Catalog, recommendation and playlist operations of the remote API.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn fetch_top_items(
        &self,
        kind: ItemKind,
        time_range: TimeRange,
        page: u32,
    ) -> Result<TopItemsPage, GatewayError>;

    async fn fetch_recommendations(&self, seeds: &Seeds) -> Result<Vec<Track>, GatewayError>;

    async fn fetch_available_genres(&self) -> Result<Vec<String>, GatewayError>;

    async fn fetch_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>, GatewayError>;

    async fn add_track_to_playlist(
        &self,
        track_id: &str,
        playlist_id: &str,
    ) -> Result<(), GatewayError>;

    async fn fetch_current_user(&self) -> Result<User, GatewayError>;
}

/// Resolves whether there is a signed-in user and runs the login flow.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` means nobody is logged in.
    async fn current_user(&self) -> Result<Option<User>, GatewayError>;

    async fn login(&self) -> Result<(), GatewayError>;
}

/// Minimal playback capability used for previews.
#[async_trait]
pub trait Playback: Send + Sync {
    async fn device_id(&self) -> Option<String>;

    /// Starts `track_uri` on the device returned by [`Playback::device_id`].
    async fn play(&self, device_id: &str, track_uri: &str) -> Result<(), GatewayError>;

    async fn pause(&self) -> Result<(), GatewayError>;
}

/// Playback that does nothing and never has a device.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopPlayback;

#[async_trait]
impl Playback for NoopPlayback {
    async fn device_id(&self) -> Option<String> {
        None
    }

    async fn play(&self, _device_id: &str, _track_uri: &str) -> Result<(), GatewayError> {
        Ok(())
    }

    async fn pause(&self) -> Result<(), GatewayError> {
        Ok(())
    }
}
