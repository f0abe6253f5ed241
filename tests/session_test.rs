use std::{
    collections::VecDeque,
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, Ordering},
    },
};

use async_trait::async_trait;
use reqwest::StatusCode;
use seedcli::{
    session::{
        Gateway, GatewayError, IdentityProvider, NoopPlayback, Phase, Playback, SeedKind, Seeds,
        SessionController, SessionError, Severity, Toggled, TopItemsPage,
    },
    types::{Album, Artist, ItemKind, Playlist, TimeRange, TopItems, Track, User},
};

const PAGE_SIZE: usize = 40;

fn track(id: &str) -> Track {
    Track {
        id: id.to_string(),
        uri: format!("spotify:track:{}", id),
        name: format!("Track {}", id),
        preview_url: None,
        album: Album {
            uri: format!("spotify:album:{}", id),
            name: format!("Album {}", id),
            images: vec![],
        },
        artists: vec![],
        external_urls: Default::default(),
    }
}

fn artist(id: &str) -> Artist {
    Artist {
        id: id.to_string(),
        uri: format!("spotify:artist:{}", id),
        name: format!("Artist {}", id),
        genres: vec!["rock".to_string()],
        images: vec![],
    }
}

fn playlist(id: &str, name: &str) -> Playlist {
    Playlist {
        id: id.to_string(),
        uri: format!("spotify:playlist:{}", id),
        name: name.to_string(),
    }
}

fn ada() -> User {
    User {
        id: "u1".to_string(),
        name: "Ada".to_string(),
        image: None,
    }
}

/// Gateway serving fixed catalogs, with scripted answers for recommendations
/// and playlist adds and scripted failures for browse calls. Every call is
/// logged.
#[derive(Default)]
struct FakeGateway {
    tracks: Vec<Track>,
    artists: Vec<Artist>,
    genres: Vec<String>,
    playlists: Vec<Playlist>,
    recommendations: Mutex<VecDeque<Result<Vec<Track>, GatewayError>>>,
    adds: Mutex<VecDeque<Result<(), GatewayError>>>,
    browse_failures: Mutex<VecDeque<GatewayError>>,
    unauthorized: AtomicBool,
    calls: Mutex<Vec<String>>,
    seeds: Mutex<Vec<Seeds>>,
}

impl FakeGateway {
    fn with_catalog(tracks: usize, artists: usize) -> Self {
        Self {
            tracks: (0..tracks).map(|i| track(&format!("t{}", i))).collect(),
            artists: (0..artists).map(|i| artist(&format!("a{}", i))).collect(),
            genres: vec!["acoustic".to_string(), "rock".to_string()],
            playlists: vec![playlist("p1", "Morning"), playlist("p2", "Evening")],
            ..Default::default()
        }
    }

    fn script_recommendations(&self, result: Result<Vec<Track>, GatewayError>) {
        self.recommendations.lock().unwrap().push_back(result);
    }

    fn script_add(&self, result: Result<(), GatewayError>) {
        self.adds.lock().unwrap().push_back(result);
    }

    /// The next top-items or genres call fails with `err`.
    fn fail_next_browse(&self, err: GatewayError) {
        self.browse_failures.lock().unwrap().push_back(err);
    }

    fn browse_failure(&self) -> Result<(), GatewayError> {
        match self.browse_failures.lock().unwrap().pop_front() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn expire_login(&self) {
        self.unauthorized.store(true, Ordering::SeqCst);
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<(), GatewayError> {
        self.calls.lock().unwrap().push(call);
        if self.unauthorized.load(Ordering::SeqCst) {
            return Err(GatewayError::Unauthorized);
        }
        Ok(())
    }
}

fn page_of<T: Clone>(items: &[T], page: u32) -> TopItems<T> {
    let start = (page as usize * PAGE_SIZE).min(items.len());
    let end = (start + PAGE_SIZE).min(items.len());
    TopItems {
        items: items[start..end].to_vec(),
        has_next: end < items.len(),
    }
}

#[async_trait]
impl Gateway for FakeGateway {
    async fn fetch_top_items(
        &self,
        kind: ItemKind,
        time_range: TimeRange,
        page: u32,
    ) -> Result<TopItemsPage, GatewayError> {
        self.record(format!("top {} {} {}", kind, time_range, page))?;
        self.browse_failure()?;
        Ok(match kind {
            ItemKind::Tracks => TopItemsPage::Tracks(page_of(&self.tracks, page)),
            ItemKind::Artists => TopItemsPage::Artists(page_of(&self.artists, page)),
        })
    }

    async fn fetch_recommendations(&self, seeds: &Seeds) -> Result<Vec<Track>, GatewayError> {
        self.record("recommendations".to_string())?;
        self.seeds.lock().unwrap().push(seeds.clone());
        self.recommendations
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(vec![track("r1"), track("r2")]))
    }

    async fn fetch_available_genres(&self) -> Result<Vec<String>, GatewayError> {
        self.record("genres".to_string())?;
        self.browse_failure()?;
        Ok(self.genres.clone())
    }

    async fn fetch_user_playlists(&self, user_id: &str) -> Result<Vec<Playlist>, GatewayError> {
        self.record(format!("playlists {}", user_id))?;
        Ok(self.playlists.clone())
    }

    async fn add_track_to_playlist(
        &self,
        track_id: &str,
        playlist_id: &str,
    ) -> Result<(), GatewayError> {
        self.record(format!("add {} {}", track_id, playlist_id))?;
        self.adds.lock().unwrap().pop_front().unwrap_or(Ok(()))
    }

    async fn fetch_current_user(&self) -> Result<User, GatewayError> {
        self.record("me".to_string())?;
        Ok(ada())
    }
}

/// Identity that knows `user` right away, or only after `login`.
struct FakeIdentity {
    user: Mutex<Option<User>>,
    login_user: Option<User>,
}

impl FakeIdentity {
    fn logged_in(user: User) -> Self {
        Self {
            user: Mutex::new(Some(user)),
            login_user: None,
        }
    }

    fn logged_out(login_user: Option<User>) -> Self {
        Self {
            user: Mutex::new(None),
            login_user,
        }
    }
}

#[async_trait]
impl IdentityProvider for FakeIdentity {
    async fn current_user(&self) -> Result<Option<User>, GatewayError> {
        Ok(self.user.lock().unwrap().clone())
    }

    async fn login(&self) -> Result<(), GatewayError> {
        match &self.login_user {
            Some(user) => {
                *self.user.lock().unwrap() = Some(user.clone());
                Ok(())
            }
            None => Err(GatewayError::Other("login cancelled".to_string())),
        }
    }
}

fn server_error() -> GatewayError {
    GatewayError::Status {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: "upstream failure".to_string(),
    }
}

/// Player with one device; device lookups and playback calls go to `log`.
#[derive(Default)]
struct FakePlayer {
    log: Arc<Mutex<Vec<String>>>,
}

#[async_trait]
impl Playback for FakePlayer {
    async fn device_id(&self) -> Option<String> {
        self.log.lock().unwrap().push("devices".to_string());
        Some("device-1".to_string())
    }

    async fn play(&self, device_id: &str, track_uri: &str) -> Result<(), GatewayError> {
        self.log
            .lock()
            .unwrap()
            .push(format!("play {} {}", device_id, track_uri));
        Ok(())
    }

    async fn pause(&self) -> Result<(), GatewayError> {
        self.log.lock().unwrap().push("pause".to_string());
        Ok(())
    }
}

type TestSession = SessionController<FakeGateway, FakeIdentity, NoopPlayback>;

async fn started_session(gateway: FakeGateway) -> TestSession {
    let mut session = SessionController::new(gateway, FakeIdentity::logged_in(ada()), NoopPlayback);
    session.start().await;
    session
}

/// A session showing the top tracks with the first `n` of them selected.
async fn session_with_selection(n: usize) -> TestSession {
    let mut session = started_session(FakeGateway::with_catalog(10, 10)).await;
    session
        .request_top_items(ItemKind::Tracks, TimeRange::ShortTerm, 0)
        .await
        .unwrap();
    for i in 0..n {
        session
            .toggle_selection(SeedKind::Track, &format!("t{}", i))
            .unwrap();
    }
    session
}

#[tokio::test]
async fn test_start_with_user_is_idle() {
    let session = started_session(FakeGateway::default()).await;

    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(session.user(), Some(&ada()));
    assert_eq!(session.time_range(), TimeRange::ShortTerm);
    assert!(session.selection().is_empty());
}

#[tokio::test]
async fn test_start_without_user_needs_login() {
    let mut session = SessionController::new(
        FakeGateway::with_catalog(5, 5),
        FakeIdentity::logged_out(None),
        NoopPlayback,
    );

    assert_eq!(session.phase(), Phase::Loading);
    assert_eq!(session.start().await, Phase::NeedsLogin);
    assert!(session.user().is_none());

    // Browsing needs a login and never reaches the gateway
    let result = session
        .request_top_items(ItemKind::Tracks, TimeRange::ShortTerm, 0)
        .await;
    assert!(matches!(result, Err(SessionError::InvalidPhase { .. })));
    assert!(matches!(
        session.request_genres().await,
        Err(SessionError::InvalidPhase { .. })
    ));
    assert!(session.gateway().calls().is_empty());
}

#[tokio::test]
async fn test_login_moves_to_idle() {
    let mut session = SessionController::new(
        FakeGateway::default(),
        FakeIdentity::logged_out(Some(ada())),
        NoopPlayback,
    );
    session.start().await;

    let user = session.login().await.unwrap();
    assert_eq!(user.name, "Ada");
    assert_eq!(session.phase(), Phase::Idle);
    assert_eq!(
        session.notices().latest().map(|n| n.severity),
        Some(Severity::Success)
    );
}

#[tokio::test]
async fn test_failed_login_stays_logged_out() {
    let mut session = SessionController::new(
        FakeGateway::default(),
        FakeIdentity::logged_out(None),
        NoopPlayback,
    );
    session.start().await;

    assert!(session.login().await.is_err());
    assert_eq!(session.phase(), Phase::NeedsLogin);
    assert_eq!(
        session.notices().latest().map(|n| n.severity),
        Some(Severity::Error)
    );
}

#[tokio::test]
async fn test_top_tracks_paging() {
    let mut session = started_session(FakeGateway::with_catalog(50, 0)).await;

    let count = session
        .request_top_items(ItemKind::Tracks, TimeRange::MediumTerm, 0)
        .await
        .unwrap();
    assert_eq!(count, 40);
    assert_eq!(session.phase(), Phase::BrowsingTracks);
    assert_eq!(session.time_range(), TimeRange::MediumTerm);
    assert!(session.has_next(Phase::BrowsingTracks));

    assert_eq!(session.load_more().await.unwrap(), 10);
    assert_eq!(session.top_tracks().len(), 50);
    assert_eq!(session.top_tracks()[40].id, "t40");
    assert_eq!(session.cursor(ItemKind::Tracks), 1);
    assert!(!session.has_next(Phase::BrowsingTracks));

    // Nothing left, no further request
    assert_eq!(session.load_more().await.unwrap(), 0);
    assert_eq!(
        session.gateway().calls(),
        vec!["top tracks medium_term 0", "top tracks medium_term 1"]
    );
}

#[tokio::test]
async fn test_first_page_replaces_list() {
    let mut session = started_session(FakeGateway::with_catalog(50, 0)).await;

    session
        .request_top_items(ItemKind::Tracks, TimeRange::ShortTerm, 0)
        .await
        .unwrap();
    session.load_more().await.unwrap();
    session
        .request_top_items(ItemKind::Tracks, TimeRange::LongTerm, 0)
        .await
        .unwrap();

    assert_eq!(session.top_tracks().len(), 40);
    assert_eq!(session.cursor(ItemKind::Tracks), 0);
}

#[tokio::test]
async fn test_browse_between_kinds_and_genres() {
    let mut session = started_session(FakeGateway::with_catalog(5, 3)).await;

    session
        .request_top_items(ItemKind::Artists, TimeRange::ShortTerm, 0)
        .await
        .unwrap();
    assert_eq!(session.phase(), Phase::BrowsingArtists);
    assert_eq!(session.top_artists().len(), 3);
    assert!(!session.has_next(Phase::BrowsingArtists));

    assert_eq!(session.request_genres().await.unwrap(), 2);
    assert_eq!(session.phase(), Phase::BrowsingGenres);
    assert!(!session.has_next(Phase::BrowsingGenres));

    // Lists browsed before stay available
    assert_eq!(session.top_artists().len(), 3);
}

#[tokio::test]
async fn test_selection_cap_records_warning() {
    let mut session = session_with_selection(5).await;

    let result = session.toggle_selection(SeedKind::Track, "t7");
    assert!(matches!(result, Err(SessionError::SelectionFull)));
    assert_eq!(session.selection().len(), 5);

    let notice = session.notices().latest().unwrap();
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(notice.title, "Selection warning");
    assert_eq!(notice.text, "You can only select 5 items.");
    assert!(notice.expires_at.is_some());

    // Deselecting is always allowed
    assert_eq!(
        session.toggle_selection(SeedKind::Track, "t0").unwrap(),
        Toggled::Removed
    );
}

#[tokio::test]
async fn test_selected_tracks_resolve_in_selection_order() {
    let mut session = session_with_selection(0).await;
    session.toggle_selection(SeedKind::Track, "t3").unwrap();
    session.toggle_selection(SeedKind::Track, "t1").unwrap();

    let names: Vec<&str> = session
        .selected_tracks()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(names, vec!["t3", "t1"]);
    assert!(session.selected_artists().is_empty());
}

#[tokio::test]
async fn test_recommendations_success() {
    let mut session = session_with_selection(2).await;
    session.request_genres().await.unwrap();
    session.toggle_selection(SeedKind::Genre, "rock").unwrap();

    assert!(session.can_request_recommendations());
    assert_eq!(session.request_recommendations().await.unwrap(), 2);
    assert_eq!(session.phase(), Phase::ShowingRecommendations);
    assert_eq!(session.recommendations()[0].id, "r1");

    // Selection and browsed lists are untouched
    assert_eq!(session.selection().len(), 3);
    assert_eq!(session.top_tracks().len(), 10);

    let seeds = session.gateway().seeds.lock().unwrap().clone();
    assert_eq!(seeds[0].tracks, vec!["t0".to_string(), "t1".to_string()]);
    assert_eq!(seeds[0].genres, vec!["rock".to_string()]);

    // Asking again from the recommendation view is allowed
    assert!(session.request_recommendations().await.is_ok());
}

#[tokio::test]
async fn test_recommendations_failure_keeps_state() {
    let mut session = session_with_selection(1).await;
    session.request_recommendations().await.unwrap();
    let previous = session.recommendations().to_vec();

    session.gateway().script_recommendations(Err(GatewayError::Other(
        "service unavailable".to_string(),
    )));
    let result = session.request_recommendations().await;

    assert!(matches!(result, Err(SessionError::Gateway(_))));
    assert_eq!(session.phase(), Phase::ShowingRecommendations);
    assert_eq!(session.recommendations(), previous.as_slice());

    let notice = session.notices().latest().unwrap();
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(notice.title, "Could not load recommendations");
}

#[tokio::test]
async fn test_recommendations_need_selection() {
    let mut session = session_with_selection(0).await;

    assert!(!session.can_request_recommendations());
    let result = session.request_recommendations().await;

    assert!(matches!(result, Err(SessionError::SelectionEmpty)));
    assert_eq!(session.phase(), Phase::BrowsingTracks);
    assert!(
        !session
            .gateway()
            .calls()
            .contains(&"recommendations".to_string())
    );
}

#[tokio::test]
async fn test_recommendations_need_browsing_phase() {
    let mut session = started_session(FakeGateway::with_catalog(5, 0)).await;
    session.toggle_selection(SeedKind::Genre, "rock").unwrap();

    let result = session.request_recommendations().await;

    assert!(matches!(
        result,
        Err(SessionError::InvalidPhase {
            phase: Phase::Idle,
            ..
        })
    ));
    assert!(session.gateway().calls().is_empty());
}

#[tokio::test]
async fn test_browsing_drops_recommendations() {
    let mut session = session_with_selection(1).await;
    session.request_recommendations().await.unwrap();

    session
        .request_top_items(ItemKind::Artists, TimeRange::ShortTerm, 0)
        .await
        .unwrap();

    assert_eq!(session.phase(), Phase::BrowsingArtists);
    assert!(session.recommendations().is_empty());
    assert_eq!(session.selection().len(), 1);
}

#[tokio::test]
async fn test_reset_from_recommendations() {
    let mut session = session_with_selection(3).await;
    session.request_recommendations().await.unwrap();
    session.toggle_selection(SeedKind::Track, "t9").unwrap();
    session.toggle_selection(SeedKind::Track, "t8").unwrap();
    session.toggle_selection(SeedKind::Track, "t7").unwrap_err();
    assert!(!session.notices().is_empty());

    session.reset();

    assert_eq!(session.phase(), Phase::Idle);
    assert!(session.selection().is_empty());
    assert!(session.top_tracks().is_empty());
    assert!(session.recommendations().is_empty());
    assert!(session.notices().is_empty());
    assert_eq!(session.cursor(ItemKind::Tracks), 0);
    assert_eq!(session.user(), Some(&ada()));
}

#[tokio::test]
async fn test_reset_from_idle() {
    let mut session = started_session(FakeGateway::default()).await;
    session.reset();
    assert_eq!(session.phase(), Phase::Idle);
}

#[tokio::test]
async fn test_unauthorized_needs_login() {
    let mut session = session_with_selection(1).await;
    session.gateway().expire_login();

    let result = session.request_recommendations().await;

    assert!(matches!(
        result,
        Err(SessionError::Gateway(GatewayError::Unauthorized))
    ));
    assert_eq!(session.phase(), Phase::NeedsLogin);
    assert!(session.user().is_none());
    assert_eq!(
        session.notices().latest().map(|n| n.severity),
        Some(Severity::Error)
    );
}

#[tokio::test]
async fn test_add_to_playlist_closes_picker() {
    let mut session = session_with_selection(0).await;

    let playlists = session.open_playlist_picker(track("t1")).await.unwrap();
    assert_eq!(playlists.len(), 2);
    assert_eq!(session.playlist_target().map(|t| t.id.as_str()), Some("t1"));

    session.add_to_playlist("t1", "p2").await.unwrap();

    assert!(session.playlist_target().is_none());
    assert!(session.playlists().is_empty());
    let notice = session.notices().latest().unwrap();
    assert_eq!(notice.severity, Severity::Success);
    assert_eq!(notice.text, "Track added to Evening");
    assert!(session.gateway().calls().contains(&"add t1 p2".to_string()));
}

#[tokio::test]
async fn test_failed_add_keeps_picker_open() {
    let mut session = session_with_selection(0).await;
    session.open_playlist_picker(track("t1")).await.unwrap();
    session
        .gateway()
        .script_add(Err(GatewayError::Other("playlist is read-only".to_string())));

    assert!(session.add_to_playlist("t1", "p1").await.is_err());

    assert_eq!(session.playlist_target().map(|t| t.id.as_str()), Some("t1"));
    assert_eq!(session.playlists().len(), 2);
    assert_eq!(
        session.notices().latest().map(|n| n.severity),
        Some(Severity::Warning)
    );

    // Second attempt goes through
    session.add_to_playlist("t1", "p1").await.unwrap();
    assert!(session.playlist_target().is_none());
}

#[tokio::test]
async fn test_playlist_picker_needs_user() {
    let mut session = SessionController::new(
        FakeGateway::with_catalog(1, 0),
        FakeIdentity::logged_out(None),
        NoopPlayback,
    );
    session.start().await;

    let result = session.open_playlist_picker(track("t1")).await;

    assert!(matches!(result, Err(SessionError::NoUser)));
    assert!(session.playlist_target().is_none());
}

#[tokio::test]
async fn test_preview_without_device() {
    let mut session = session_with_selection(0).await;

    let result = session.preview(track("t2")).await;

    assert!(matches!(
        result,
        Err(SessionError::Gateway(GatewayError::NoDevice))
    ));
    assert_eq!(session.preview_track().map(|t| t.id.as_str()), Some("t2"));
    assert_eq!(
        session.notices().latest().map(|n| n.severity),
        Some(Severity::Warning)
    );
}

#[tokio::test]
async fn test_preview_plays_on_device() {
    let player = FakePlayer::default();
    let log = Arc::clone(&player.log);
    let mut session =
        SessionController::new(FakeGateway::default(), FakeIdentity::logged_in(ada()), player);
    session.start().await;

    session.preview(track("t5")).await.unwrap();
    session.stop_preview().await.unwrap();

    assert_eq!(session.preview_track().map(|t| t.id.as_str()), Some("t5"));
    assert!(session.notices().is_empty());
    // One device lookup per preview, its id is handed to play
    assert_eq!(
        *log.lock().unwrap(),
        vec!["devices", "play device-1 spotify:track:t5", "pause"]
    );
}

#[tokio::test]
async fn test_toggle_info() {
    let mut session = started_session(FakeGateway::default()).await;

    assert!(!session.info_visible());
    assert!(session.toggle_info());
    assert!(!session.toggle_info());
}

#[tokio::test]
async fn test_load_more_keeps_time_range_of_list() {
    let mut session = started_session(FakeGateway::with_catalog(120, 0)).await;
    session
        .request_top_items(ItemKind::Tracks, TimeRange::ShortTerm, 0)
        .await
        .unwrap();

    session.set_time_range(TimeRange::LongTerm);
    assert_eq!(session.load_more().await.unwrap(), 40);

    assert_eq!(
        session.gateway().calls(),
        vec!["top tracks short_term 0", "top tracks short_term 1"]
    );
    assert_eq!(session.top_tracks().len(), 80);
    assert_eq!(session.cursor(ItemKind::Tracks), 1);
    // The range chosen for the next browse is kept
    assert_eq!(session.time_range(), TimeRange::LongTerm);

    session
        .request_top_items(ItemKind::Tracks, session.time_range(), 0)
        .await
        .unwrap();
    session.load_more().await.unwrap();
    assert_eq!(
        session.gateway().calls()[2..],
        ["top tracks long_term 0", "top tracks long_term 1"]
    );
}

#[tokio::test]
async fn test_failed_page_keeps_loaded_list() {
    let mut session = started_session(FakeGateway::with_catalog(100, 0)).await;
    session
        .request_top_items(ItemKind::Tracks, TimeRange::ShortTerm, 0)
        .await
        .unwrap();

    session.gateway().fail_next_browse(server_error());
    let result = session.load_more().await;

    assert!(matches!(
        result,
        Err(SessionError::Gateway(GatewayError::Status { .. }))
    ));
    assert_eq!(session.phase(), Phase::BrowsingTracks);
    assert_eq!(session.top_tracks().len(), 40);
    assert_eq!(session.cursor(ItemKind::Tracks), 0);
    assert!(session.has_next(Phase::BrowsingTracks));
    assert_eq!(session.user(), Some(&ada()));

    let notice = session.notices().latest().unwrap();
    assert_eq!(notice.severity, Severity::Warning);
    assert_eq!(notice.title, "Could not load top tracks");

    // Retrying the same page succeeds
    assert_eq!(session.load_more().await.unwrap(), 40);
    assert_eq!(session.cursor(ItemKind::Tracks), 1);
}

#[tokio::test]
async fn test_failed_genres_keep_browsing_tracks() {
    let mut session = session_with_selection(1).await;
    session.request_recommendations().await.unwrap();
    session
        .request_top_items(ItemKind::Tracks, TimeRange::ShortTerm, 0)
        .await
        .unwrap();

    session.gateway().fail_next_browse(server_error());
    let result = session.request_genres().await;

    assert!(matches!(result, Err(SessionError::Gateway(_))));
    assert_eq!(session.phase(), Phase::BrowsingTracks);
    assert!(session.genres().is_empty());
    assert_eq!(session.top_tracks().len(), 10);
    assert_eq!(session.selection().len(), 1);
    assert_eq!(
        session.notices().latest().map(|n| n.severity),
        Some(Severity::Warning)
    );
}

#[tokio::test]
async fn test_start_mid_session_keeps_phase() {
    let mut session = session_with_selection(2).await;

    assert_eq!(session.start().await, Phase::BrowsingTracks);

    assert_eq!(session.phase(), Phase::BrowsingTracks);
    assert_eq!(session.top_tracks().len(), 10);
    assert_eq!(session.selection().len(), 2);
}
