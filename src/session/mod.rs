//! # Session Module
//!
//! The session controller is the single owner of a recommendation session's
//! mutable state and the only component that talks to the remote API for
//! state-changing reads. The presentation layer (see [`crate::cli`]) renders
//! whatever the controller exposes and calls its operations from user
//! actions.
//!
//! ## Journey
//!
//! ```text
//! Loading ──► NeedsLogin ──login──► Idle
//!    └──────────────────────────────► Idle
//! Idle ──browse──► BrowsingTracks | BrowsingArtists | BrowsingGenres
//! Browsing* ──recommend (selection non-empty)──► ShowingRecommendations
//! any ──reset──► Idle
//! ```
//!
//! ## Seams
//!
//! - [`Gateway`] - catalog, recommendation and playlist calls
//! - [`IdentityProvider`] - who is logged in, and the login flow
//! - [`Playback`] - device id, play and pause for previews
//!
//! The Spotify implementations live in [`crate::spotify`]. Tests plug in
//! in-memory fakes and [`NoopPlayback`].
//!
//! ## Failures
//!
//! Nothing is fatal. A failed call leaves the state as it was before the call,
//! records a [`Notice`] and returns the error, so the same action can simply
//! be issued again. An expired login moves the session to
//! [`Phase::NeedsLogin`].

mod controller;
mod gateway;
mod notice;
mod phase;
mod selection;

pub use controller::NOTICE_TIMEOUT;
pub use controller::SELECTION_NOTICE_TIMEOUT;
pub use controller::SessionController;
pub use controller::SessionError;
pub use gateway::Gateway;
pub use gateway::GatewayError;
pub use gateway::IdentityProvider;
pub use gateway::NoopPlayback;
pub use gateway::Playback;
pub use gateway::TopItemsPage;
pub use notice::Notice;
pub use notice::NoticeBoard;
pub use notice::Severity;
pub use phase::Phase;
pub use selection::MAX_SEEDS;
pub use selection::SeedKind;
pub use selection::Seeds;
pub use selection::Selection;
pub use selection::Toggled;
