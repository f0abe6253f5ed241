use std::sync::Arc;

use axum::{Extension, response::Json};
use serde_json::{Value, json};
use tokio::sync::Mutex;

use crate::types::PkceToken;

pub async fn health(
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceToken>>>>,
) -> Json<Value> {
    let login = match shared_state.lock().await.as_ref() {
        None => "idle",
        Some(pkce) if pkce.token.is_some() => "complete",
        Some(_) => "pending",
    };

    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "login": login,
    }))
}
