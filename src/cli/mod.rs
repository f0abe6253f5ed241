//! # CLI Module
//!
//! The terminal presentation layer. It renders what the
//! [`SessionController`](crate::session::SessionController) exposes and turns
//! user input into controller operations; it holds no session state itself.
//!
//! ## Commands
//!
//! - [`auth`] - Log in with Spotify (OAuth 2.0 PKCE)
//! - [`me`] - Show the logged in user
//! - [`top`] - Show top tracks or artists
//! - [`genres`] - Show the available genre seeds
//! - [`recommend`] - Recommendations for up to five seeds
//! - [`playlists`] / [`add`] - List playlists, add a track to one
//! - [`session`] - Interactive session: browse, select, recommend, preview, add
//!
//! ## Usage
//!
//! ```bash
//! seedcli auth
//! seedcli top tracks --range medium_term
//! seedcli recommend --track 1 --track 4 --genre techno
//! seedcli session
//! ```
//!
//! Seeds can be given as row numbers of the corresponding top list or genre
//! table, or as Spotify ids / genre names.

mod auth;
mod browse;
mod playlist;
mod recommend;
mod render;
mod session;

use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressStyle};

use crate::{
    error,
    session::{Phase, SessionController},
    spotify::{self, ConnectPlayer, SpotifyClient, SpotifyIdentity},
};

pub use auth::auth;
pub use auth::me;
pub use browse::genres;
pub use browse::top;
pub use playlist::add;
pub use playlist::playlists;
pub use recommend::recommend;
pub use session::session;

/// Session controller wired to the Spotify implementations.
pub type SpotifySession = SessionController<SpotifyClient, SpotifyIdentity, ConnectPlayer>;

async fn open_session() -> SpotifySession {
    let (gateway, identity, player) = spotify::connect().await;
    let mut session = SessionController::new(gateway, identity, player);

    let pb = spinner("Checking login...");
    session.start().await;
    pb.finish_and_clear();

    session
}

/// Opens a session and exits unless a user is logged in.
async fn logged_in_session() -> SpotifySession {
    let session = open_session().await;
    if session.phase() == Phase::NeedsLogin {
        error!("Not logged in. Please run seedcli auth");
    }
    session
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

/// Prints notices recorded after `last_seen` and returns the newest id.
fn flush_notices(session: &mut SpotifySession, last_seen: u64) -> u64 {
    for notice in session.notices().since(last_seen) {
        notice.print();
    }
    let newest = session.notices().last_id();
    session.notices_mut().prune(Instant::now());
    newest
}
