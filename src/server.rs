use axum::{Extension, Router, routing::get};
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::Mutex};

use crate::{Res, api, config, types::PkceToken};

/// Binds the callback server's listener on `SERVER_ADDRESS`.
///
/// Binding happens before the browser is opened so a taken port is
/// reported instead of silently timing out the login.
pub async fn bind() -> Res<TcpListener> {
    let addr = SocketAddr::from_str(&config::server_addr()?)
        .map_err(|e| format!("Failed to parse server address: {}", e))?;
    let listener = TcpListener::bind(&addr).await?;
    Ok(listener)
}

pub fn router(state: Arc<Mutex<Option<PkceToken>>>) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/callback", get(api::callback))
        .layer(Extension(state))
}

/// Serves the callback routes until the task is aborted.
pub async fn serve(listener: TcpListener, state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    axum::serve(listener, router(state)).await?;
    Ok(())
}
