use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Login state shared between the auth flow and the callback handler.
#[derive(Debug, Clone)]
pub struct PkceToken {
    pub code_verifier: String,
    /// Random value sent with the authorization request and echoed back.
    pub state: String,
    pub token: Option<Token>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackArtist {
    pub id: String,
    pub name: String,
    pub uri: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub uri: String,
    pub name: String,
    pub preview_url: Option<String>,
    pub album: Album,
    #[serde(default)]
    pub artists: Vec<TrackArtist>,
    #[serde(default)]
    pub external_urls: ExternalUrls,
}

impl Track {
    /// Name of the first credited artist, empty if there is none.
    pub fn artist_name(&self) -> &str {
        self.artists.first().map(|a| a.name.as_str()).unwrap_or("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub uri: String,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub uri: String,
    pub name: String,
}

/// The signed-in user as the session sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub display_name: Option<String>,
    #[serde(default)]
    pub images: Vec<Image>,
}

impl From<UserProfileResponse> for User {
    fn from(profile: UserProfileResponse) -> Self {
        User {
            name: profile.display_name.unwrap_or_else(|| profile.id.clone()),
            image: profile.images.into_iter().next().map(|i| i.url),
            id: profile.id,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingResponse<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
}

/// One page of top items.
#[derive(Debug, Clone, PartialEq)]
pub struct TopItems<T> {
    pub items: Vec<T>,
    pub has_next: bool,
}

impl<T> From<PagingResponse<T>> for TopItems<T> {
    fn from(page: PagingResponse<T>) -> Self {
        TopItems {
            has_next: page.next.is_some(),
            items: page.items,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreSeedsResponse {
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevicesResponse {
    pub devices: Vec<Device>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Device {
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub is_active: bool,
}

/// Which kind of top items to browse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Tracks,
    Artists,
}

impl ItemKind {
    /// Path segment used by `/me/top/{type}`.
    pub fn as_path(&self) -> &'static str {
        match self {
            ItemKind::Tracks => "tracks",
            ItemKind::Artists => "artists",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

impl FromStr for ItemKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tracks" | "track" => Ok(ItemKind::Tracks),
            "artists" | "artist" => Ok(ItemKind::Artists),
            other => Err(format!("Unknown item kind: {}", other)),
        }
    }
}

/// Period Spotify computes top items over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeRange {
    /// Several years of data.
    LongTerm,
    /// Roughly the last 6 months.
    MediumTerm,
    /// Roughly the last 4 weeks.
    #[default]
    ShortTerm,
}

impl TimeRange {
    pub fn as_query(&self) -> &'static str {
        match self {
            TimeRange::LongTerm => "long_term",
            TimeRange::MediumTerm => "medium_term",
            TimeRange::ShortTerm => "short_term",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TimeRange::LongTerm => "Multiple years",
            TimeRange::MediumTerm => "Last 6 months",
            TimeRange::ShortTerm => "Last 4 weeks",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query())
    }
}

impl FromStr for TimeRange {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "long_term" | "long" => Ok(TimeRange::LongTerm),
            "medium_term" | "medium" => Ok(TimeRange::MediumTerm),
            "short_term" | "short" => Ok(TimeRange::ShortTerm),
            other => Err(format!(
                "Unknown time range: {} (expected short_term, medium_term or long_term)",
                other
            )),
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "")]
    pub selected: String,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "")]
    pub selected: String,
    pub name: String,
    pub genres: String,
    pub id: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    #[tabled(rename = "")]
    pub selected: String,
    pub genre: String,
}

#[derive(Tabled)]
pub struct PlaylistTableRow {
    #[tabled(rename = "#")]
    pub index: usize,
    pub name: String,
    pub id: String,
}
