//! Per-panel fetch state.
//!
//! Every panel of a view goes `Idle -> Loading -> Loaded`, re-entering
//! `Loading` on each user-initiated fetch. A failed fetch returns the panel
//! to `Idle` and keeps whatever was displayed before; the caller reports the
//! failure as a transient notice.
//!
//! Each fetch takes a [`Ticket`] carrying a sequence number. Only the most
//! recently issued ticket may write the panel, so an older response that
//! resolves late is dropped instead of overwriting newer data.

use log::debug;

use crate::error::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Loaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, PartialEq)]
pub enum Resolution {
    Applied,
    Failed(ApiError),
    Stale,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FetchSlot<T> {
    data: Option<T>,
    phase: Phase,
    issued: u64,
}

impl<T> Default for FetchSlot<T> {
    fn default() -> Self {
        Self {
            data: None,
            phase: Phase::Idle,
            issued: 0,
        }
    }
}

impl<T> FetchSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) -> Ticket {
        self.issued += 1;
        self.phase = Phase::Loading;
        Ticket(self.issued)
    }

    pub fn resolve(&mut self, ticket: Ticket, result: Result<T, ApiError>) -> Resolution {
        if ticket.0 != self.issued {
            debug!(
                "discarding stale response #{} (latest is #{})",
                ticket.0, self.issued
            );
            return Resolution::Stale;
        }
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.phase = Phase::Loaded;
                Resolution::Applied
            }
            Err(err) => {
                self.phase = Phase::Idle;
                Resolution::Failed(err)
            }
        }
    }

    /// Empties the panel and invalidates any fetch still in flight for it.
    pub fn clear(&mut self) {
        self.issued += 1;
        self.data = None;
        self.phase = Phase::Idle;
    }

    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }
}

impl<T> FetchSlot<Vec<T>> {
    /// Loaded rows, or an empty slice before the first successful fetch.
    pub fn rows(&self) -> &[T] {
        self.data.as_deref().unwrap_or(&[])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Validation errors carry their own message; request failures are
    /// reported with the action-specific `failure` text.
    pub fn from_error(err: &ApiError, failure: &str) -> Self {
        match err {
            ApiError::Validation(message) => Self::error(message.clone()),
            _ => Self::error(failure),
        }
    }
}

/// What a view should do after resolving a ticket.
pub fn notice_for(resolution: &Resolution, success: Option<&str>, failure: &str) -> Option<Notice> {
    match resolution {
        Resolution::Applied => success.map(Notice::success),
        Resolution::Failed(err) => Some(Notice::from_error(err, failure)),
        Resolution::Stale => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_latest_ticket_writes_the_slot() {
        let mut slot: FetchSlot<Vec<u32>> = FetchSlot::new();
        let first = slot.begin();
        let second = slot.begin();

        assert_eq!(slot.resolve(second, Ok(vec![2])), Resolution::Applied);
        assert_eq!(slot.resolve(first, Ok(vec![1])), Resolution::Stale);
        assert_eq!(slot.rows(), &[2u32][..]);
        assert_eq!(slot.phase(), Phase::Loaded);
    }

    #[test]
    fn failure_keeps_prior_data_and_returns_to_idle() {
        let mut slot = FetchSlot::new();
        let t = slot.begin();
        slot.resolve(t, Ok("loaded"));

        let t = slot.begin();
        assert!(slot.is_loading());
        let resolution = slot.resolve(t, Err(ApiError::Timeout(10)));
        assert_eq!(resolution, Resolution::Failed(ApiError::Timeout(10)));
        assert_eq!(slot.data(), Some(&"loaded"));
        assert_eq!(slot.phase(), Phase::Idle);
    }

    #[test]
    fn clear_drops_data_and_in_flight_fetches() {
        let mut slot = FetchSlot::new();
        let t = slot.begin();
        slot.clear();
        assert_eq!(slot.resolve(t, Ok(5)), Resolution::Stale);
        assert_eq!(slot.data(), None);
        assert_eq!(slot.phase(), Phase::Idle);
    }

    #[test]
    fn notices_follow_the_resolution() {
        let failed = Resolution::Failed(ApiError::Network("offline".into()));
        assert_eq!(
            notice_for(&failed, Some("loaded"), "Failed to fetch GPA summaries"),
            Some(Notice::error("Failed to fetch GPA summaries"))
        );
        assert_eq!(notice_for(&Resolution::Applied, None, "x"), None);
        assert_eq!(notice_for(&Resolution::Stale, Some("ok"), "x"), None);
        assert_eq!(
            Notice::from_error(&ApiError::Validation("Please enter a subject code".into()), "x"),
            Notice::error("Please enter a subject code")
        );
    }
}
