use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use crate::{spotify, types::Token};

/// Seconds before expiry at which a token is refreshed.
const REFRESH_MARGIN: u64 = 240;

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token cache: {0}")]
    IoError(#[from] std::io::Error),

    #[error("token cache is corrupt: {0}")]
    SerdeError(#[from] serde_json::Error),
}

/// Cached OAuth token with refresh-on-demand.
pub struct TokenManager {
    token: Token,
}

impl TokenManager {
    pub fn new(token: Token) -> Self {
        TokenManager { token }
    }

    pub async fn load() -> Result<Self, TokenError> {
        let content = async_fs::read_to_string(Self::token_path()).await?;
        let token: Token = serde_json::from_str(&content)?;
        Ok(Self { token })
    }

    /// Whether a token has been cached by a previous login.
    pub fn is_cached() -> bool {
        Self::token_path().is_file()
    }

    pub async fn persist(&self) -> Result<(), TokenError> {
        let path = Self::token_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(&self.token)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Returns an access token, refreshing it first when it is about to expire.
    ///
    /// A failed refresh hands back the old token; the API answers 401 for it
    /// and the session asks for a new login.
    pub async fn get_valid_token(&mut self) -> String {
        if self.is_expired() {
            if let Ok(new_token) = spotify::auth::refresh_token(&self.token.refresh_token).await {
                self.token = new_token;
                let _ = self.persist().await;
            }
        }

        self.token.access_token.clone()
    }

    pub fn is_expired(&self) -> bool {
        is_expired_at(&self.token, Utc::now().timestamp() as u64)
    }

    pub fn current_token(&self) -> &Token {
        &self.token
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("seedcli/cache/token.json");
        path
    }
}

/// Expiry check against an explicit clock, refreshing [`REFRESH_MARGIN`]
/// seconds early.
pub fn is_expired_at(token: &Token, now: u64) -> bool {
    now + REFRESH_MARGIN >= token.obtained_at + token.expires_in
}
