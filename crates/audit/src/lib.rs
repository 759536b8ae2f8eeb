// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use javaball_domain::RefereeId;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Represents the specific action performed.
///
/// An action describes what registry change occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "`AddReferee`", "`RemoveReferee`").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    ///
    /// # Arguments
    ///
    /// * `name` - The name of the action
    /// * `details` - Optional additional details
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }
}

/// A summary of the registry contents at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    /// IDs of every registered referee, in registry order.
    pub referee_ids: Vec<RefereeId>,
}

impl RegistrySnapshot {
    /// Creates a new `RegistrySnapshot`.
    #[must_use]
    pub const fn new(referee_ids: Vec<RefereeId>) -> Self {
        Self { referee_ids }
    }

    /// Number of referees captured in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.referee_ids.len()
    }

    /// Checks whether the snapshot captured an empty registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.referee_ids.is_empty()
    }
}

/// An immutable audit event representing one registry change.
///
/// Every successful add, edit or remove produces exactly one event. Front
/// ends use it to refresh any view of the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The action that was performed.
    pub action: Action,
    /// The referee the action applied to.
    pub referee: RefereeId,
    /// The registry before the change.
    pub before: RegistrySnapshot,
    /// The registry after the change.
    pub after: RegistrySnapshot,
    /// When the change was applied.
    #[serde(with = "time::serde::rfc3339")]
    pub recorded_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent` stamped with the current UTC time.
    ///
    /// # Arguments
    ///
    /// * `action` - The action that was performed
    /// * `referee` - The referee the action applied to
    /// * `before` - The registry before the change
    /// * `after` - The registry after the change
    #[must_use]
    pub fn new(
        action: Action,
        referee: RefereeId,
        before: RegistrySnapshot,
        after: RegistrySnapshot,
    ) -> Self {
        Self::recorded_at(action, referee, before, after, OffsetDateTime::now_utc())
    }

    /// Creates a new `AuditEvent` with an explicit timestamp.
    #[must_use]
    pub const fn recorded_at(
        action: Action,
        referee: RefereeId,
        before: RegistrySnapshot,
        after: RegistrySnapshot,
        recorded_at: OffsetDateTime,
    ) -> Self {
        Self {
            action,
            referee,
            before,
            after,
            recorded_at,
        }
    }

    /// Signed change in registry size caused by this event.
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub fn size_delta(&self) -> isize {
        self.after.len() as isize - self.before.len() as isize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn snapshot(ids: &[&str]) -> RegistrySnapshot {
        RegistrySnapshot::new(ids.iter().map(|id| RefereeId::new(id)).collect())
    }

    #[test]
    fn test_action_creation_requires_name() {
        let action: Action = Action::new(String::from("AddReferee"), None);

        assert_eq!(action.name, "AddReferee");
        assert_eq!(action.details, None);
    }

    #[test]
    fn test_action_creation_with_details() {
        let action: Action = Action::new(
            String::from("AddReferee"),
            Some(String::from("Added referee JD1")),
        );

        assert_eq!(action.name, "AddReferee");
        assert_eq!(action.details, Some(String::from("Added referee JD1")));
    }

    #[test]
    fn test_registry_snapshot_counts_referees() {
        let empty: RegistrySnapshot = snapshot(&[]);
        assert!(empty.is_empty());

        let two: RegistrySnapshot = snapshot(&["JD1", "JR1"]);
        assert_eq!(two.len(), 2);
    }

    #[test]
    fn test_audit_event_creation_requires_all_fields() {
        let action: Action = Action::new(String::from("AddReferee"), None);
        let before: RegistrySnapshot = snapshot(&[]);
        let after: RegistrySnapshot = snapshot(&["JD1"]);
        let at: OffsetDateTime = datetime!(2015-02-13 12:00 UTC);

        let event: AuditEvent = AuditEvent::recorded_at(
            action.clone(),
            RefereeId::new("JD1"),
            before.clone(),
            after.clone(),
            at,
        );

        assert_eq!(event.action, action);
        assert_eq!(event.referee, RefereeId::new("JD1"));
        assert_eq!(event.before, before);
        assert_eq!(event.after, after);
        assert_eq!(event.recorded_at, at);
    }

    #[test]
    fn test_size_delta_reflects_add_and_remove() {
        let added: AuditEvent = AuditEvent::new(
            Action::new(String::from("AddReferee"), None),
            RefereeId::new("JD1"),
            snapshot(&[]),
            snapshot(&["JD1"]),
        );
        assert_eq!(added.size_delta(), 1);

        let removed: AuditEvent = AuditEvent::new(
            Action::new(String::from("RemoveReferee"), None),
            RefereeId::new("JD1"),
            snapshot(&["JD1"]),
            snapshot(&[]),
        );
        assert_eq!(removed.size_delta(), -1);

        let edited: AuditEvent = AuditEvent::new(
            Action::new(String::from("EditReferee"), None),
            RefereeId::new("JD1"),
            snapshot(&["JD1"]),
            snapshot(&["JD1"]),
        );
        assert_eq!(edited.size_delta(), 0);
    }

    #[test]
    fn test_audit_event_serializes_timestamp_as_rfc3339() {
        let event: AuditEvent = AuditEvent::recorded_at(
            Action::new(String::from("AddReferee"), None),
            RefereeId::new("JD1"),
            snapshot(&[]),
            snapshot(&["JD1"]),
            datetime!(2015-02-13 12:00 UTC),
        );

        let json: String = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"recorded_at\":\"2015-02-13T12:00:00Z\""));
    }
}
