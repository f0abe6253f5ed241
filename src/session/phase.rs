use std::fmt;

use crate::types::ItemKind;

/// The single active view state of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    #[default]
    Loading,
    NeedsLogin,
    Idle,
    BrowsingTracks,
    BrowsingArtists,
    BrowsingGenres,
    ShowingRecommendations,
}

impl Phase {
    pub fn is_browsing(&self) -> bool {
        matches!(
            self,
            Phase::BrowsingTracks | Phase::BrowsingArtists | Phase::BrowsingGenres
        )
    }

    /// Browse requests need a logged in session.
    pub fn can_browse(&self) -> bool {
        !matches!(self, Phase::Loading | Phase::NeedsLogin)
    }

    pub fn can_recommend(&self) -> bool {
        self.is_browsing() || *self == Phase::ShowingRecommendations
    }

    pub fn browsing(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Tracks => Phase::BrowsingTracks,
            ItemKind::Artists => Phase::BrowsingArtists,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Phase::Loading => "loading",
            Phase::NeedsLogin => "needs login",
            Phase::Idle => "start",
            Phase::BrowsingTracks => "browsing tracks",
            Phase::BrowsingArtists => "browsing artists",
            Phase::BrowsingGenres => "browsing genres",
            Phase::ShowingRecommendations => "showing recommendations",
        };
        f.write_str(name)
    }
}
