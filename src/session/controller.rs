use std::time::Duration;

use thiserror::Error;

use crate::{
    session::{
        Gateway, GatewayError, IdentityProvider, NoticeBoard, Phase, Playback, SeedKind,
        Selection, Severity, Toggled, TopItemsPage,
    },
    types::{Artist, ItemKind, Playlist, TimeRange, Track, User},
};

/// How long failure notices stay up.
pub const NOTICE_TIMEOUT: Duration = Duration::from_secs(5);

/// How long the selection cap warning stays up.
pub const SELECTION_NOTICE_TIMEOUT: Duration = Duration::from_secs(2);

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot {action} while {phase}")]
    InvalidPhase { phase: Phase, action: &'static str },

    #[error("you can only select 5 items")]
    SelectionFull,

    #[error("nothing selected")]
    SelectionEmpty,

    #[error("no user is logged in")]
    NoUser,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cursor {
    page: u32,
    has_next: bool,
    /// Range the loaded pages were ranked over; later pages must use it too.
    time_range: TimeRange,
}

/// Owns all mutable state of one recommendation session.
///
/// Every remote call goes through the [`Gateway`]; results are applied only
/// once the call succeeded, so a failure never leaves a half-updated state.
/// Failures are recorded as notices and returned to the caller.
pub struct SessionController<G, I, P> {
    gateway: G,
    identity: I,
    player: P,

    phase: Phase,
    user: Option<User>,
    time_range: TimeRange,
    selection: Selection,

    top_tracks: Vec<Track>,
    top_artists: Vec<Artist>,
    genres: Vec<String>,
    track_cursor: Cursor,
    artist_cursor: Cursor,

    recommendations: Vec<Track>,

    playlist_target: Option<Track>,
    playlists: Vec<Playlist>,
    show_info: bool,
    preview: Option<Track>,

    notices: NoticeBoard,
}

impl<G, I, P> SessionController<G, I, P>
where
    G: Gateway,
    I: IdentityProvider,
    P: Playback,
{
    pub fn new(gateway: G, identity: I, player: P) -> Self {
        Self {
            gateway,
            identity,
            player,
            phase: Phase::Loading,
            user: None,
            time_range: TimeRange::default(),
            selection: Selection::new(),
            top_tracks: Vec::new(),
            top_artists: Vec::new(),
            genres: Vec::new(),
            track_cursor: Cursor::default(),
            artist_cursor: Cursor::default(),
            recommendations: Vec::new(),
            playlist_target: None,
            playlists: Vec::new(),
            show_info: false,
            preview: None,
            notices: NoticeBoard::new(),
        }
    }

    /// Resolves the current user: Idle when someone is logged in, NeedsLogin
    /// otherwise. A failing identity lookup counts as not logged in.
    ///
    /// Only runs from Loading or NeedsLogin; in any other phase the session is
    /// already started and the current phase is returned unchanged.
    pub async fn start(&mut self) -> Phase {
        if !matches!(self.phase, Phase::Loading | Phase::NeedsLogin) {
            return self.phase;
        }
        self.phase = Phase::Loading;

        match self.identity.current_user().await {
            Ok(Some(user)) => {
                self.user = Some(user);
                self.phase = Phase::Idle;
            }
            Ok(None) => {
                self.user = None;
                self.phase = Phase::NeedsLogin;
            }
            Err(e) => {
                self.user = None;
                self.phase = Phase::NeedsLogin;
                self.notices.push(
                    Severity::Info,
                    "Login required",
                    e.to_string(),
                    Some(NOTICE_TIMEOUT),
                );
            }
        }

        self.phase
    }

    /// Runs the identity provider's login and picks up the resulting user.
    pub async fn login(&mut self) -> Result<&User, SessionError> {
        if let Err(e) = self.identity.login().await {
            self.notices
                .push(Severity::Error, "Login failed", e.to_string(), None);
            return Err(e.into());
        }

        let user = match self.identity.current_user().await {
            Ok(Some(user)) => user,
            Ok(None) => {
                let e = GatewayError::Unauthorized;
                self.notices
                    .push(Severity::Error, "Login failed", e.to_string(), None);
                return Err(e.into());
            }
            Err(e) => {
                self.notices
                    .push(Severity::Error, "Login failed", e.to_string(), None);
                return Err(e.into());
            }
        };

        if matches!(self.phase, Phase::Loading | Phase::NeedsLogin) {
            self.phase = Phase::Idle;
        }
        self.notices.push(
            Severity::Success,
            "Logged in",
            format!("Welcome {}", user.name),
            Some(NOTICE_TIMEOUT),
        );

        Ok(self.user.insert(user))
    }

    pub fn set_time_range(&mut self, time_range: TimeRange) {
        self.time_range = time_range;
    }

    /// Loads one page of top tracks or artists.
    ///
    /// Page 0 replaces the browsed list, later pages append to it. Switches
    /// to the matching browsing phase and drops any recommendation result.
    /// Only page 0 changes the session's current time range.
    pub async fn request_top_items(
        &mut self,
        kind: ItemKind,
        time_range: TimeRange,
        page: u32,
    ) -> Result<usize, SessionError> {
        self.ensure_can_browse("browse top items")?;

        let result = self.gateway.fetch_top_items(kind, time_range, page).await;
        let items = match result {
            Ok(items) => items,
            Err(e) => {
                self.notify_failure(&format!("Could not load top {}", kind), &e);
                return Err(e.into());
            }
        };

        let has_next = items.has_next();
        let count = items.len();
        match (kind, items) {
            (ItemKind::Tracks, TopItemsPage::Tracks(tracks)) => {
                if page == 0 {
                    self.top_tracks = tracks.items;
                } else {
                    self.top_tracks.extend(tracks.items);
                }
                self.track_cursor = Cursor {
                    page,
                    has_next,
                    time_range,
                };
            }
            (ItemKind::Artists, TopItemsPage::Artists(artists)) => {
                if page == 0 {
                    self.top_artists = artists.items;
                } else {
                    self.top_artists.extend(artists.items);
                }
                self.artist_cursor = Cursor {
                    page,
                    has_next,
                    time_range,
                };
            }
            _ => {
                let e = GatewayError::Decode(format!("expected top {}", kind));
                self.notify_failure(&format!("Could not load top {}", kind), &e);
                return Err(e.into());
            }
        }

        if page == 0 {
            self.time_range = time_range;
        }
        self.recommendations.clear();
        self.phase = Phase::browsing(kind);

        Ok(count)
    }

    /// Requests the next page for the current browsing phase, over the time
    /// range the loaded pages came from.
    ///
    /// Returns `Ok(0)` without a request when there is nothing more to load.
    pub async fn load_more(&mut self) -> Result<usize, SessionError> {
        let (kind, cursor) = match self.phase {
            Phase::BrowsingTracks => (ItemKind::Tracks, self.track_cursor),
            Phase::BrowsingArtists => (ItemKind::Artists, self.artist_cursor),
            _ => return Ok(0),
        };

        if !cursor.has_next {
            return Ok(0);
        }

        self.request_top_items(kind, cursor.time_range, cursor.page + 1)
            .await
    }

    /// Loads the genre seeds. There is only ever one page.
    pub async fn request_genres(&mut self) -> Result<usize, SessionError> {
        self.ensure_can_browse("browse genres")?;

        let genres = match self.gateway.fetch_available_genres().await {
            Ok(genres) => genres,
            Err(e) => {
                self.notify_failure("Could not load genres", &e);
                return Err(e.into());
            }
        };

        let count = genres.len();
        self.genres = genres;
        self.recommendations.clear();
        self.phase = Phase::BrowsingGenres;

        Ok(count)
    }

    /// Removes `id` from its list, or adds it while fewer than five seeds
    /// are selected.
    pub fn toggle_selection(&mut self, kind: SeedKind, id: &str) -> Result<Toggled, SessionError> {
        match self.selection.toggle(kind, id) {
            Some(toggled) => Ok(toggled),
            None => {
                self.notices.push(
                    Severity::Warning,
                    "Selection warning",
                    "You can only select 5 items.",
                    Some(SELECTION_NOTICE_TIMEOUT),
                );
                Err(SessionError::SelectionFull)
            }
        }
    }

    pub fn can_request_recommendations(&self) -> bool {
        !self.selection.is_empty() && self.phase.can_recommend()
    }

    /// Asks for recommendations seeded from the selection.
    ///
    /// The browsed lists and the selection stay as they are.
    pub async fn request_recommendations(&mut self) -> Result<usize, SessionError> {
        if self.selection.is_empty() {
            return Err(SessionError::SelectionEmpty);
        }
        if !self.phase.can_recommend() {
            return Err(SessionError::InvalidPhase {
                phase: self.phase,
                action: "request recommendations",
            });
        }

        let seeds = self.selection.seeds();
        let tracks = match self.gateway.fetch_recommendations(&seeds).await {
            Ok(tracks) => tracks,
            Err(e) => {
                self.notify_failure("Could not load recommendations", &e);
                return Err(e.into());
            }
        };

        let count = tracks.len();
        self.recommendations = tracks;
        self.phase = Phase::ShowingRecommendations;

        Ok(count)
    }

    /// Back to the start: selection, browsed lists, cursors, recommendations
    /// and notices are cleared.
    pub fn reset(&mut self) {
        self.selection.clear();
        self.top_tracks.clear();
        self.top_artists.clear();
        self.genres.clear();
        self.track_cursor = Cursor::default();
        self.artist_cursor = Cursor::default();
        self.recommendations.clear();
        self.notices.clear();
        self.phase = Phase::Idle;
    }

    /// Loads the user's playlists and makes `track` the playlist-add target.
    pub async fn open_playlist_picker(&mut self, track: Track) -> Result<&[Playlist], SessionError> {
        let Some(user_id) = self.user.as_ref().map(|u| u.id.clone()) else {
            return Err(SessionError::NoUser);
        };

        let playlists = match self.gateway.fetch_user_playlists(&user_id).await {
            Ok(playlists) => playlists,
            Err(e) => {
                self.notify_failure("Could not load playlists", &e);
                return Err(e.into());
            }
        };

        self.playlist_target = Some(track);
        self.playlists = playlists;

        Ok(&self.playlists)
    }

    pub fn close_playlist_picker(&mut self) {
        self.playlist_target = None;
        self.playlists.clear();
    }

    /// Adds a track to a playlist. Success closes the playlist overlay, a
    /// failure leaves it open for another attempt.
    pub async fn add_to_playlist(
        &mut self,
        track_id: &str,
        playlist_id: &str,
    ) -> Result<(), SessionError> {
        if let Err(e) = self
            .gateway
            .add_track_to_playlist(track_id, playlist_id)
            .await
        {
            self.notify_failure("Could not add track to playlist", &e);
            return Err(e.into());
        }

        let playlist_name = self
            .playlists
            .iter()
            .find(|p| p.id == playlist_id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| playlist_id.to_string());
        self.notices.push(
            Severity::Success,
            "Playlist updated",
            format!("Track added to {}", playlist_name),
            Some(NOTICE_TIMEOUT),
        );
        self.close_playlist_picker();

        Ok(())
    }

    pub fn toggle_info(&mut self) -> bool {
        self.show_info = !self.show_info;
        self.show_info
    }

    /// Makes `track` the preview track and starts it on the playback device.
    pub async fn preview(&mut self, track: Track) -> Result<(), SessionError> {
        let uri = track.uri.clone();
        self.preview = Some(track);

        let Some(device_id) = self.player.device_id().await else {
            let e = GatewayError::NoDevice;
            self.notices.push(
                Severity::Warning,
                "Playback",
                "No playback device available. Open Spotify on one of your devices.",
                Some(NOTICE_TIMEOUT),
            );
            return Err(e.into());
        };

        if let Err(e) = self.player.play(&device_id, &uri).await {
            self.notify_failure("Playback failed", &e);
            return Err(e.into());
        }

        Ok(())
    }

    pub async fn stop_preview(&mut self) -> Result<(), SessionError> {
        if let Err(e) = self.player.pause().await {
            self.notify_failure("Playback failed", &e);
            return Err(e.into());
        }
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn time_range(&self) -> TimeRange {
        self.time_range
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn top_tracks(&self) -> &[Track] {
        &self.top_tracks
    }

    pub fn top_artists(&self) -> &[Artist] {
        &self.top_artists
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn recommendations(&self) -> &[Track] {
        &self.recommendations
    }

    /// Current page index of the given kind's cursor.
    pub fn cursor(&self, kind: ItemKind) -> u32 {
        match kind {
            ItemKind::Tracks => self.track_cursor.page,
            ItemKind::Artists => self.artist_cursor.page,
        }
    }

    pub fn has_next(&self, phase: Phase) -> bool {
        match phase {
            Phase::BrowsingTracks => self.track_cursor.has_next,
            Phase::BrowsingArtists => self.artist_cursor.has_next,
            _ => false,
        }
    }

    /// Selected tracks resolved against the browsed tracks, in selection order.
    pub fn selected_tracks(&self) -> Vec<&Track> {
        self.selection
            .tracks()
            .iter()
            .filter_map(|id| self.top_tracks.iter().find(|t| &t.id == id))
            .collect()
    }

    /// Selected artists resolved against the browsed artists, in selection order.
    pub fn selected_artists(&self) -> Vec<&Artist> {
        self.selection
            .artists()
            .iter()
            .filter_map(|id| self.top_artists.iter().find(|a| &a.id == id))
            .collect()
    }

    pub fn playlist_target(&self) -> Option<&Track> {
        self.playlist_target.as_ref()
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    pub fn info_visible(&self) -> bool {
        self.show_info
    }

    pub fn preview_track(&self) -> Option<&Track> {
        self.preview.as_ref()
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    fn ensure_can_browse(&self, action: &'static str) -> Result<(), SessionError> {
        if self.phase.can_browse() {
            Ok(())
        } else {
            Err(SessionError::InvalidPhase {
                phase: self.phase,
                action,
            })
        }
    }

    // An expired login sends the session back to NeedsLogin; everything
    // else keeps the state the call started from.
    fn notify_failure(&mut self, title: &str, err: &GatewayError) {
        if err.is_unauthorized() {
            self.user = None;
            self.phase = Phase::NeedsLogin;
            self.notices.push(
                Severity::Error,
                "Login required",
                "Your Spotify session has expired. Please log in again.",
                None,
            );
            return;
        }

        self.notices
            .push(Severity::Warning, title, err.to_string(), Some(NOTICE_TIMEOUT));
    }
}
