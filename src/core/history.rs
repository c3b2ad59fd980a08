//! Dispatch log.
//!
//! Keeps an immutable record of every action the address book has
//! processed, following functional programming principles.

use super::action::Action;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single dispatched action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The action that was reduced
    pub action: Action,
    /// When the action was dispatched
    pub timestamp: DateTime<Utc>,
    /// Whether the contact list differs from the one before the action
    pub contacts_changed: bool,
}

/// Records kept by a log created with [`DispatchLog::bounded`].
pub const DEFAULT_LOG_LIMIT: usize = 1024;

/// Ordered log of dispatched actions.
///
/// `record` returns a new log with the entry added and leaves `self`
/// untouched; it copies every record, so long-running owners append with
/// [`DispatchLog::push`] instead. An unbounded log grows with every
/// dispatch. A bounded one keeps only the newest entries.
///
/// # Example
///
/// ```rust
/// use address_book::core::{Action, ContactStatus, DispatchLog, DispatchRecord};
/// use chrono::Utc;
///
/// let log = DispatchLog::new();
/// let log = log.record(DispatchRecord {
///     action: Action::SetStatusFilter(ContactStatus::Private),
///     timestamp: Utc::now(),
///     contacts_changed: false,
/// });
///
/// assert_eq!(log.action_names(), vec!["SET_STATUS_FILTER"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DispatchLog {
    records: Vec<DispatchRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    limit: Option<usize>,
}

impl DispatchLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty log keeping at most `limit` records.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            records: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Create an empty log keeping at most [`DEFAULT_LOG_LIMIT`] records.
    pub fn bounded() -> Self {
        Self::with_limit(DEFAULT_LOG_LIMIT)
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Record a dispatch, returning a new log.
    ///
    /// This is a pure function - it does not mutate the existing log but
    /// returns a new one with the record added.
    pub fn record(&self, record: DispatchRecord) -> Self {
        let mut next = self.clone();
        next.push(record);
        next
    }

    /// Append a dispatch in place, dropping the oldest records past the limit.
    pub fn push(&mut self, record: DispatchRecord) {
        self.records.push(record);
        if let Some(limit) = self.limit {
            let excess = self.records.len().saturating_sub(limit);
            self.records.drain(..excess);
        }
    }

    /// All records, oldest first.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Tags of the dispatched actions, oldest first.
    pub fn action_names(&self) -> Vec<&'static str> {
        self.records
            .iter()
            .map(|record| record.action.name())
            .collect()
    }

    /// Time between the first and last dispatch.
    ///
    /// Returns `None` for an empty log.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ContactStatus;

    fn record(action: Action, timestamp: DateTime<Utc>) -> DispatchRecord {
        DispatchRecord {
            action,
            timestamp,
            contacts_changed: false,
        }
    }

    #[test]
    fn new_log_is_empty() {
        let log = DispatchLog::new();
        assert!(log.is_empty());
        assert!(log.duration().is_none());
        assert!(log.action_names().is_empty());
    }

    #[test]
    fn record_is_immutable() {
        let log = DispatchLog::new();
        let new_log = log.record(record(Action::DeleteContact(1), Utc::now()));

        assert_eq!(log.len(), 0);
        assert_eq!(new_log.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut log = DispatchLog::new();
        log.push(record(Action::DeleteContact(1), Utc::now()));
        log.push(record(Action::Unrecognized, Utc::now()));

        assert_eq!(log.action_names(), vec!["DELETE_CONTACT", "UNRECOGNIZED"]);
        assert_eq!(log.limit(), None);
    }

    #[test]
    fn bounded_log_keeps_newest_records() {
        let mut log = DispatchLog::with_limit(2);
        for id in 1..=5 {
            log.push(record(Action::DeleteContact(id), Utc::now()));
        }

        let ids: Vec<_> = log
            .records()
            .iter()
            .map(|r| match r.action {
                Action::DeleteContact(id) => id,
                _ => 0,
            })
            .collect();
        assert_eq!(ids, vec![4, 5]);
    }

    #[test]
    fn zero_limit_keeps_nothing() {
        let log = DispatchLog::with_limit(0).record(record(Action::Unrecognized, Utc::now()));
        assert!(log.is_empty());
    }

    #[test]
    fn records_keep_dispatch_order() {
        let now = Utc::now();
        let log = DispatchLog::new()
            .record(record(Action::SetSelectedContact(Some(2)), now))
            .record(record(Action::SetStatusFilter(ContactStatus::Private), now))
            .record(record(Action::SetSelectedContact(None), now));

        assert_eq!(
            log.action_names(),
            vec![
                "SET_SELECTED_CONTACT",
                "SET_STATUS_FILTER",
                "SET_SELECTED_CONTACT"
            ]
        );
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let log = DispatchLog::new()
            .record(record(Action::Unrecognized, start))
            .record(record(
                Action::Unrecognized,
                start + chrono::Duration::seconds(3),
            ));

        assert_eq!(log.duration(), Some(Duration::from_secs(3)));
    }

    #[test]
    fn single_record_has_zero_duration() {
        let log = DispatchLog::new().record(record(Action::Unrecognized, Utc::now()));
        assert_eq!(log.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn log_serializes_correctly() {
        let log = DispatchLog::new().record(DispatchRecord {
            action: Action::DeleteContact(5),
            timestamp: Utc::now(),
            contacts_changed: true,
        });

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: DispatchLog = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized, log);
    }
}
