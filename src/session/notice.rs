use std::time::{Duration, Instant};

/// How loudly a notice should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warning,
    Error,
    Success,
}

/// A human readable message for the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub title: String,
    pub text: String,
    pub severity: Severity,
    /// Dismissed automatically once this point is reached.
    pub expires_at: Option<Instant>,
}

impl Notice {
    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }

    /// Writes the notice with the crate's output macros.
    pub fn print(&self) {
        match self.severity {
            Severity::Info => crate::info!("{}: {}", self.title, self.text),
            Severity::Warning => crate::warning!("{}: {}", self.title, self.text),
            Severity::Error => crate::failure!("{}: {}", self.title, self.text),
            Severity::Success => crate::success!("{}: {}", self.title, self.text),
        }
    }
}

/// Notices recorded by the session, oldest first.
///
/// Dismissal is advisory: expired notices stay until [`NoticeBoard::prune`]
/// runs, and nothing ever waits on it.
#[derive(Debug, Default)]
pub struct NoticeBoard {
    next_id: u64,
    notices: Vec<Notice>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(
        &mut self,
        severity: Severity,
        title: impl Into<String>,
        text: impl Into<String>,
        timeout: Option<Duration>,
    ) -> &Notice {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            title: title.into(),
            text: text.into(),
            severity,
            expires_at: timeout.map(|t| Instant::now() + t),
        });
        &self.notices[self.notices.len() - 1]
    }

    pub fn all(&self) -> &[Notice] {
        &self.notices
    }

    pub fn latest(&self) -> Option<&Notice> {
        self.notices.last()
    }

    /// Notices with an id greater than `id`.
    pub fn since(&self, id: u64) -> impl Iterator<Item = &Notice> {
        self.notices.iter().filter(move |n| n.id > id)
    }

    pub fn last_id(&self) -> u64 {
        self.next_id
    }

    pub fn prune(&mut self, now: Instant) {
        self.notices.retain(|n| !n.is_expired(now));
    }

    pub fn clear(&mut self) {
        self.notices.clear();
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
