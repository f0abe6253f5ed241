use std::fmt;

/// Upper bound on seeds across all three categories.
pub const MAX_SEEDS: usize = 5;

/// Category of a selectable seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SeedKind {
    Track,
    Artist,
    Genre,
}

impl fmt::Display for SeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SeedKind::Track => "track",
            SeedKind::Artist => "artist",
            SeedKind::Genre => "genre",
        };
        f.write_str(name)
    }
}

/// Result of an accepted toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggled {
    Added,
    Removed,
}

/// The user's chosen seeds: three ordered lists, unique within each list,
/// never more than [`MAX_SEEDS`] entries in total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    tracks: Vec<String>,
    artists: Vec<String>,
    genres: Vec<String>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    pub fn artists(&self) -> &[String] {
        &self.artists
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn len(&self) -> usize {
        self.tracks.len() + self.artists.len() + self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() >= MAX_SEEDS
    }

    pub fn contains(&self, kind: SeedKind, id: &str) -> bool {
        self.list(kind).iter().any(|entry| entry == id)
    }

    /// Removes `id` if present, otherwise appends it when there is room.
    ///
    /// Returns `None` when the id was absent and the selection is full; the
    /// selection is left untouched in that case.
    pub fn toggle(&mut self, kind: SeedKind, id: &str) -> Option<Toggled> {
        if let Some(pos) = self.list(kind).iter().position(|entry| entry == id) {
            self.list_mut(kind).remove(pos);
            return Some(Toggled::Removed);
        }

        if self.is_full() {
            return None;
        }

        self.list_mut(kind).push(id.to_string());
        Some(Toggled::Added)
    }

    pub fn clear(&mut self) {
        self.tracks.clear();
        self.artists.clear();
        self.genres.clear();
    }

    pub fn seeds(&self) -> Seeds {
        Seeds::from_lists(&self.tracks, &self.artists, &self.genres)
    }

    fn list(&self, kind: SeedKind) -> &Vec<String> {
        match kind {
            SeedKind::Track => &self.tracks,
            SeedKind::Artist => &self.artists,
            SeedKind::Genre => &self.genres,
        }
    }

    fn list_mut(&mut self, kind: SeedKind) -> &mut Vec<String> {
        match kind {
            SeedKind::Track => &mut self.tracks,
            SeedKind::Artist => &mut self.artists,
            SeedKind::Genre => &mut self.genres,
        }
    }
}

/// Seeds sent with a recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Seeds {
    pub tracks: Vec<String>,
    pub artists: Vec<String>,
    pub genres: Vec<String>,
}

impl Seeds {
    /// Fills the [`MAX_SEEDS`] slots in category order: tracks first, then
    /// artists, then genres. Later categories are truncated first.
    pub fn from_lists(tracks: &[String], artists: &[String], genres: &[String]) -> Self {
        let tracks: Vec<String> = tracks.iter().take(MAX_SEEDS).cloned().collect();
        let room = MAX_SEEDS - tracks.len();
        let artists: Vec<String> = artists.iter().take(room).cloned().collect();
        let room = room - artists.len();
        let genres: Vec<String> = genres.iter().take(room).cloned().collect();

        Seeds {
            tracks,
            artists,
            genres,
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len() + self.artists.len() + self.genres.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
