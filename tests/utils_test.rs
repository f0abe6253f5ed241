use seedcli::management::{TokenError, is_expired_at};
use seedcli::session::{SeedKind, Seeds, Selection};
use seedcli::spotify::{pick_device, recommendation_query, track_uri};
use seedcli::types::{
    Album, Device, ItemKind, PagingResponse, Playlist, TimeRange, Token, TopItems, Track,
    TrackArtist, User, UserProfileResponse,
};
use seedcli::utils::*;

// Helper function to create a test track
fn create_test_track(id: &str, name: &str, artist_name: &str) -> Track {
    Track {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: name.to_string(),
        preview_url: None,
        album: Album {
            uri: format!("spotify:album:{}_album", id),
            name: format!("{} Album", name),
            images: vec![],
        },
        artists: vec![TrackArtist {
            id: format!("{}_artist_id", id),
            name: artist_name.to_string(),
            uri: format!("spotify:artist:{}_artist_id", id),
        }],
        external_urls: Default::default(),
    }
}

fn create_test_token(obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
        scope: String::new(),
        expires_in,
        obtained_at,
    }
}

fn device(id: Option<&str>, name: &str, is_active: bool) -> Device {
    Device {
        id: id.map(str::to_string),
        name: name.to_string(),
        is_active,
    }
}

#[test]
fn test_generate_code_verifier() {
    let verifier = generate_code_verifier();

    // Should be exactly 128 characters
    assert_eq!(verifier.len(), 128);

    // Should contain only alphanumeric characters
    assert!(verifier.chars().all(|c| c.is_ascii_alphanumeric()));

    // Two generated verifiers should be different
    let verifier2 = generate_code_verifier();
    assert_ne!(verifier, verifier2);
}

#[test]
fn test_generate_code_challenge() {
    let verifier = "test_verifier_123";
    let challenge = generate_code_challenge(verifier);

    // SHA-256 digest is 32 bytes, 43 characters unpadded base64
    assert_eq!(challenge.len(), 43);

    // Should be deterministic - same input produces same output
    assert_eq!(challenge, generate_code_challenge(verifier));

    // Different input should produce different output
    assert_ne!(challenge, generate_code_challenge("different_verifier"));

    // Should be base64-encoded (URL-safe, no padding)
    assert!(
        challenge
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    );
}

#[test]
fn test_generate_code_challenge_known_value() {
    // Example from RFC 7636, appendix B
    let verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
    assert_eq!(
        generate_code_challenge(verifier),
        "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
    );
}

#[test]
fn test_generate_state() {
    let state = generate_state();
    assert_eq!(state.len(), 16);
    assert!(state.chars().all(|c| c.is_ascii_alphanumeric()));
    assert_ne!(state, generate_state());
}

#[test]
fn test_parse_time_range() {
    assert_eq!(parse_time_range("short_term"), Ok(TimeRange::ShortTerm));
    assert_eq!(parse_time_range("medium-term"), Ok(TimeRange::MediumTerm));
    assert_eq!(parse_time_range("LONG"), Ok(TimeRange::LongTerm));
    assert!(parse_time_range("forever").is_err());

    // Short term is what a new session starts with
    assert_eq!(TimeRange::default(), TimeRange::ShortTerm);
    assert_eq!(TimeRange::MediumTerm.to_string(), "medium_term");
}

#[test]
fn test_parse_item_kind() {
    assert_eq!(parse_item_kind("tracks"), Ok(ItemKind::Tracks));
    assert_eq!(parse_item_kind("Artist"), Ok(ItemKind::Artists));
    assert!(parse_item_kind("albums").is_err());
    assert_eq!(ItemKind::Artists.as_path(), "artists");
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly10!", 10), "exactly10!");
    assert_eq!(truncate("a bit too long", 6), "a bit…");

    // Counts characters, not bytes
    assert_eq!(truncate("Björk Guðmundsdóttir", 5), "Björ…");
    assert_eq!(truncate("Björk Guðmundsdóttir", 5).chars().count(), 5);
}

#[test]
fn test_resolve_entry_by_row_and_id() {
    let tracks = vec![
        create_test_track("t1", "First", "Artist A"),
        create_test_track("t2", "Second", "Artist B"),
    ];

    // Row numbers are 1-based like the rendered tables
    let entry = resolve_entry(&tracks, "2", |t| t.id.as_str());
    assert_eq!(entry.map(|t| t.id.as_str()), Some("t2"));

    let entry = resolve_entry(&tracks, "t1", |t| t.id.as_str());
    assert_eq!(entry.map(|t| t.name.as_str()), Some("First"));

    assert!(resolve_entry(&tracks, "0", |t| t.id.as_str()).is_none());
    assert!(resolve_entry(&tracks, "3", |t| t.id.as_str()).is_none());
    assert!(resolve_entry(&tracks, "t9", |t| t.id.as_str()).is_none());
}

#[test]
fn test_resolve_entry_numeric_key() {
    // A numeric reference beyond the list still matches an exact key
    let playlists = vec![Playlist {
        id: "1234".to_string(),
        uri: "spotify:playlist:1234".to_string(),
        name: "Numbers".to_string(),
    }];

    let entry = resolve_entry(&playlists, "1234", |p| p.id.as_str());
    assert_eq!(entry.map(|p| p.name.as_str()), Some("Numbers"));
}

#[test]
fn test_track_rows_mark_selection() {
    let tracks = vec![
        create_test_track("t1", "First", "Artist A"),
        create_test_track("t2", "Second", "Artist B"),
    ];
    let mut selection = Selection::new();
    selection.toggle(SeedKind::Track, "t2");

    let rows = track_rows(&tracks, &selection);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, 1);
    assert_eq!(rows[0].selected, "");
    assert_eq!(rows[0].artist, "Artist A");
    assert_eq!(rows[1].selected, "*");
    assert_eq!(rows[1].album, "Second Album");
}

#[test]
fn test_genre_rows_mark_selection() {
    let genres = vec!["acoustic".to_string(), "ambient".to_string()];
    let mut selection = Selection::new();
    selection.toggle(SeedKind::Genre, "acoustic");

    let rows = genre_rows(&genres, &selection);

    assert_eq!(rows[0].selected, "*");
    assert_eq!(rows[1].selected, "");
    assert_eq!(rows[1].genre, "ambient");
}

#[test]
fn test_track_uri() {
    assert_eq!(track_uri("abc"), "spotify:track:abc");
    assert_eq!(track_uri("spotify:track:abc"), "spotify:track:abc");
}

#[test]
fn test_recommendation_query() {
    let seeds = Seeds::from_lists(
        &["t1".to_string(), "t2".to_string()],
        &[],
        &["rock".to_string()],
    );

    let query = recommendation_query(&seeds);

    assert_eq!(
        query,
        vec![
            ("seed_tracks", "t1,t2".to_string()),
            ("seed_genres", "rock".to_string()),
            ("limit", "100".to_string()),
        ]
    );
}

#[test]
fn test_pick_device_prefers_active() {
    let devices = vec![
        device(Some("d1"), "Laptop", false),
        device(Some("d2"), "Phone", true),
    ];
    assert_eq!(pick_device(&devices), Some("d2".to_string()));
}

#[test]
fn test_pick_device_skips_devices_without_id() {
    let devices = vec![
        device(None, "Restricted", true),
        device(Some("d1"), "Laptop", false),
    ];
    assert_eq!(pick_device(&devices), Some("d1".to_string()));

    assert_eq!(pick_device(&[device(None, "Restricted", true)]), None);
    assert_eq!(pick_device(&[]), None);
}

#[test]
fn test_is_expired_at() {
    let token = create_test_token(1_000, 3_600);

    assert!(!is_expired_at(&token, 1_000));
    // Refreshed 240 seconds before the real expiry
    assert!(!is_expired_at(&token, 4_359));
    assert!(is_expired_at(&token, 4_360));
    assert!(is_expired_at(&token, 10_000));
}

#[test]
fn test_token_error_conversions() {
    let err: TokenError = std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(err, TokenError::IoError(_)));
    assert_eq!(err.to_string(), "token cache: missing");

    let corrupt = serde_json::from_str::<Token>("{").unwrap_err();
    let err = TokenError::from(corrupt);
    assert!(err.to_string().starts_with("token cache is corrupt:"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_paging_response_into_top_items() {
    let json = r#"{
        "items": [
            {
                "id": "t1",
                "uri": "spotify:track:t1",
                "name": "First",
                "preview_url": null,
                "album": { "uri": "spotify:album:a1", "name": "Album", "images": [] },
                "artists": [{ "id": "ar1", "name": "Artist", "uri": "spotify:artist:ar1" }]
            }
        ],
        "next": "https://api.spotify.com/v1/me/top/tracks?offset=40&limit=40"
    }"#;

    let page: PagingResponse<Track> = serde_json::from_str(json).unwrap();
    let top: TopItems<Track> = page.into();

    assert!(top.has_next);
    assert_eq!(top.items.len(), 1);
    assert_eq!(top.items[0].artist_name(), "Artist");

    let last: PagingResponse<Track> = serde_json::from_str(r#"{"items": [], "next": null}"#).unwrap();
    assert!(!TopItems::from(last).has_next);
}

#[test]
fn test_user_from_profile() {
    let json = r#"{
        "id": "u1",
        "display_name": "Ada",
        "images": [{ "url": "https://i.scdn.co/image/ab", "width": 64, "height": 64 }]
    }"#;
    let profile: UserProfileResponse = serde_json::from_str(json).unwrap();

    assert_eq!(
        User::from(profile),
        User {
            id: "u1".to_string(),
            name: "Ada".to_string(),
            image: Some("https://i.scdn.co/image/ab".to_string()),
        }
    );

    // Falls back to the id when there is no display name
    let profile: UserProfileResponse =
        serde_json::from_str(r#"{"id": "u2", "display_name": null}"#).unwrap();
    let user = User::from(profile);
    assert_eq!(user.name, "u2");
    assert_eq!(user.image, None);
}
