//! Spotify Track Recommender Library
//!
//! This library lets a user pick up to five "seeds" from their top tracks,
//! top artists and the available genre seeds, and asks Spotify for track
//! recommendations built from them. Recommended tracks can be previewed on a
//! Spotify Connect device and added to the user's playlists.
//!
//! # Modules
//!
//! - `api` - HTTP endpoints for the local OAuth callback server
//! - `cli` - Terminal front-end (one-shot commands and the interactive session)
//! - `config` - Configuration management and environment variables
//! - `management` - Token cache management
//! - `server` - Local HTTP server for OAuth callbacks
//! - `session` - The session controller: selection, journey phase, paging
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```
//! use seedcli::{config, session::SessionController, spotify};
//!
//! #[tokio::main]
//! async fn main() -> seedcli::Res<()> {
//!     config::load_env().await?;
//!     let (gateway, identity, player) = spotify::connect().await;
//!     let mut session = SessionController::new(gateway, identity, player);
//!     session.start().await;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod management;
pub mod server;
pub mod session;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for operations that may fail.
///
/// Used by the CLI plumbing where errors are only ever reported to the user.
/// The library seams use typed errors instead (see [`session::GatewayError`]
/// and [`session::SessionError`]), both of which convert into this boxed form
/// with `?`.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Fetching top tracks...");
/// info!("Loaded {} tracks", count);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Authentication completed successfully");
/// success!("Added {} to {}", track, playlist);
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only the binary's top level reaches for this. Everything below it returns
/// errors or records a [`session::Notice`] instead, because nothing in a
/// session is fatal.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("You can only select 5 items.");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a non-fatal error message with a red cross.
///
/// Counterpart of [`error!`] for failures the user can retry, such as a
/// rejected API call inside the interactive session.
#[macro_export]
macro_rules! failure {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "x".red().bold(), std::format_args!($($arg)*));
  })
}
