use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, Url};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::{
    config, info,
    management::TokenManager,
    server,
    types::{PkceToken, Token},
    utils, warning,
};

/// How long the login flow waits for the browser to come back.
const LOGIN_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    #[serde(default)]
    scope: String,
    expires_in: Option<u64>,
}

impl TokenResponse {
    fn into_token(self, previous_refresh_token: Option<&str>) -> Token {
        Token {
            access_token: self.access_token,
            refresh_token: self
                .refresh_token
                .or_else(|| previous_refresh_token.map(str::to_string))
                .unwrap_or_default(),
            scope: self.scope,
            expires_in: self.expires_in.unwrap_or(3600),
            obtained_at: Utc::now().timestamp() as u64,
        }
    }
}

/// Runs the OAuth 2.0 authorization-code flow with PKCE and caches the token.
///
/// 1. Generates the code verifier, its S256 challenge and a random `state`
/// 2. Binds the local callback server on `SERVER_ADDRESS`
/// 3. Opens the authorization URL in the default browser
/// 4. Waits up to 60 seconds for the callback to complete the code exchange
/// 5. Persists the token through [`TokenManager`]
///
/// If the browser cannot be opened the URL is printed for manual use.
pub async fn login() -> Result<Token, String> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);
    let state = utils::generate_state();

    let auth_url = authorize_url(&code_challenge, &state)?;

    let shared_state: Arc<Mutex<Option<PkceToken>>> = Arc::new(Mutex::new(Some(PkceToken {
        code_verifier,
        state,
        token: None,
    })));

    let listener = server::bind().await.map_err(|e| e.to_string())?;
    let server_state = Arc::clone(&shared_state);
    let server = tokio::spawn(async move {
        if let Err(e) = server::serve(listener, server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Waiting for authorization in the browser...");
    }

    let token = wait_for_token(shared_state).await;
    server.abort();

    let token = token.ok_or_else(|| "Authentication failed or timed out.".to_string())?;
    TokenManager::new(token.clone())
        .persist()
        .await
        .map_err(|e| format!("Failed to save token to cache: {}", e))?;

    Ok(token)
}

/// Authorization URL with all PKCE parameters, properly encoded.
pub fn authorize_url(code_challenge: &str, state: &str) -> Result<Url, String> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;
    let scope = config::spotify_scope();

    Url::parse_with_params(
        &config::spotify_apiauth_url(),
        &[
            ("client_id", client_id.as_str()),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri.as_str()),
            ("code_challenge_method", "S256"),
            ("code_challenge", code_challenge),
            ("state", state),
            ("scope", scope.as_str()),
        ],
    )
    .map_err(|e| e.to_string())
}

/// Polls the shared state once a second until the callback stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < LOGIN_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may omit the refresh token in the answer, in which case the one
/// passed in stays valid and is kept.
pub async fn refresh_token(refresh_token: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;
    Ok(json.into_token(Some(refresh_token)))
}

/// Exchanges an authorization code for a token, proving possession of the
/// PKCE `verifier` that belongs to the challenge sent with the authorization
/// request.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Result<Token, String> {
    let client_id = config::spotify_client_id()?;
    let redirect_uri = config::spotify_redirect_uri()?;

    let res = Client::new()
        .post(config::spotify_apitoken_url())
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id.as_str()),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri.as_str()),
        ])
        .send()
        .await
        .map_err(|e| e.to_string())?
        .error_for_status()
        .map_err(|e| e.to_string())?;

    let json: TokenResponse = res.json().await.map_err(|e| e.to_string())?;
    Ok(json.into_token(None))
}
