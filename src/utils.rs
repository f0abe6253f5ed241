use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use sha2::{Digest, Sha256};

use crate::{
    session::{SeedKind, Selection},
    types::{
        Artist, ArtistTableRow, GenreTableRow, ItemKind, Playlist, PlaylistTableRow, TimeRange,
        Track, TrackTableRow,
    },
};

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Random value for the authorization request's `state` parameter.
pub fn generate_state() -> String {
    random_alphanumeric(16)
}

pub fn parse_time_range(s: &str) -> Result<TimeRange, String> {
    s.parse()
}

pub fn parse_item_kind(s: &str) -> Result<ItemKind, String> {
    s.parse()
}

/// Shortens `s` to at most `max` characters, marking the cut with `…`.
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn mark(selected: bool) -> String {
    if selected { "*".to_string() } else { String::new() }
}

/// Table rows for tracks, numbered from 1, with selected tracks marked.
pub fn track_rows(tracks: &[Track], selection: &Selection) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            index: i + 1,
            selected: mark(selection.contains(SeedKind::Track, &t.id)),
            name: truncate(&t.name, 40),
            artist: truncate(t.artist_name(), 30),
            album: truncate(&t.album.name, 30),
            id: t.id.clone(),
        })
        .collect()
}

pub fn artist_rows(artists: &[Artist], selection: &Selection) -> Vec<ArtistTableRow> {
    artists
        .iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            index: i + 1,
            selected: mark(selection.contains(SeedKind::Artist, &a.id)),
            name: truncate(&a.name, 40),
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
            id: a.id.clone(),
        })
        .collect()
}

pub fn genre_rows(genres: &[String], selection: &Selection) -> Vec<GenreTableRow> {
    genres
        .iter()
        .enumerate()
        .map(|(i, g)| GenreTableRow {
            index: i + 1,
            selected: mark(selection.contains(SeedKind::Genre, g)),
            genre: g.clone(),
        })
        .collect()
}

pub fn playlist_rows(playlists: &[Playlist]) -> Vec<PlaylistTableRow> {
    playlists
        .iter()
        .enumerate()
        .map(|(i, p)| PlaylistTableRow {
            index: i + 1,
            name: truncate(&p.name, 50),
            id: p.id.clone(),
        })
        .collect()
}

/// Resolves a user reference to a list entry: a 1-based row number as shown
/// in the tables, or an exact key (id or genre name).
pub fn resolve_entry<'a, T>(
    items: &'a [T],
    reference: &str,
    key: impl Fn(&T) -> &str,
) -> Option<&'a T> {
    if let Ok(n) = reference.parse::<usize>() {
        if n >= 1 {
            if let Some(item) = items.get(n - 1) {
                return Some(item);
            }
        }
    }
    items.iter().find(|item| key(item) == reference)
}
