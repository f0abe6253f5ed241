//! # API Module
//!
//! HTTP endpoints of the short-lived local server that runs during login.
//!
//! - [`callback`] - Receives Spotify's authorization redirect, checks the
//!   `state` parameter against the pending login and exchanges the code for
//!   a token using the PKCE verifier.
//! - [`health`] - Reports status and version, handy to check the configured
//!   `SERVER_ADDRESS` is reachable.
//!
//! ```rust,ignore
//! use axum::{Router, routing::get};
//! use seedcli::api::{callback, health};
//!
//! let app = Router::new()
//!     .route("/callback", get(callback))
//!     .route("/health", get(health));
//! ```

mod callback;
mod health;

pub use callback::callback;
pub use health::health;
