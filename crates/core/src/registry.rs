// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use javaball_audit::RegistrySnapshot;
use javaball_domain::{DomainError, Location, RefereeId, RefereeRecord};

/// Default maximum number of registered referees.
pub const MAX_REFEREES: usize = 12;

/// The bounded, ordered collection of registered referees.
///
/// Insertion order is preserved and every query returns referees in that
/// order. Referee IDs are unique within a registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefereeRegistry {
    referees: Vec<RefereeRecord>,
    capacity: usize,
}

impl RefereeRegistry {
    /// Creates an empty registry holding at most [`MAX_REFEREES`] referees.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_capacity(MAX_REFEREES)
    }

    /// Creates an empty registry holding at most `capacity` referees.
    #[must_use]
    pub const fn with_capacity(capacity: usize) -> Self {
        Self {
            referees: Vec::new(),
            capacity,
        }
    }

    /// Registers a referee at the end of the registry.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The registry already holds `capacity` referees
    /// - A referee with the same ID is already registered
    pub fn add(&mut self, referee: RefereeRecord) -> Result<(), DomainError> {
        if self.is_full() {
            return Err(DomainError::CapacityExceeded {
                capacity: self.capacity,
            });
        }

        if self.contains_id(referee.id()) {
            return Err(DomainError::DuplicateRefereeId(referee.id().clone()));
        }

        self.referees.push(referee);
        Ok(())
    }

    /// Removes the first referee equal to `referee`.
    ///
    /// Returns `false` if no such referee is registered.
    pub fn remove(&mut self, referee: &RefereeRecord) -> bool {
        match self.referees.iter().position(|r| r == referee) {
            Some(index) => {
                self.referees.remove(index);
                true
            }
            None => false,
        }
    }

    /// Removes and returns the referee with the given ID.
    pub fn remove_by_id(&mut self, id: &RefereeId) -> Option<RefereeRecord> {
        let index: usize = self.referees.iter().position(|r| r.id() == id)?;
        Some(self.referees.remove(index))
    }

    /// Finds the referee with the given ID.
    #[must_use]
    pub fn find_by_id(&self, id: &RefereeId) -> Option<&RefereeRecord> {
        self.referees.iter().find(|r| r.id() == id)
    }

    pub(crate) fn find_by_id_mut(&mut self, id: &RefereeId) -> Option<&mut RefereeRecord> {
        self.referees.iter_mut().find(|r| r.id() == id)
    }

    /// Checks whether a referee with the given ID is registered.
    #[must_use]
    pub fn contains_id(&self, id: &RefereeId) -> bool {
        self.find_by_id(id).is_some()
    }

    /// Returns all referees with exactly the given qualification level.
    #[must_use]
    pub fn filter_by_level(&self, level: u8) -> Vec<&RefereeRecord> {
        self.referees
            .iter()
            .filter(|r| r.qualification_level().value() == level)
            .collect()
    }

    /// Returns all referees whose first name or last name equals `name`.
    #[must_use]
    pub fn filter_by_name(&self, name: &str) -> Vec<&RefereeRecord> {
        self.referees
            .iter()
            .filter(|r| r.first_name() == name || r.last_name() == name)
            .collect()
    }

    /// Returns all referees with exactly the given first and last name.
    #[must_use]
    pub fn filter_by_full_name(&self, first_name: &str, last_name: &str) -> Vec<&RefereeRecord> {
        self.referees
            .iter()
            .filter(|r| r.first_name() == first_name && r.last_name() == last_name)
            .collect()
    }

    /// Returns all referees living at `location`.
    #[must_use]
    pub fn filter_by_home(&self, location: Location) -> Vec<&RefereeRecord> {
        self.referees
            .iter()
            .filter(|r| r.home_location() == location)
            .collect()
    }

    /// Returns all referees willing to officiate at `location`.
    #[must_use]
    pub fn filter_by_travel(&self, location: Location) -> Vec<&RefereeRecord> {
        self.referees
            .iter()
            .filter(|r| r.travels(location))
            .collect()
    }

    /// Iterates over referees in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, RefereeRecord> {
        self.referees.iter()
    }

    /// Number of registered referees.
    #[must_use]
    pub fn len(&self) -> usize {
        self.referees.len()
    }

    /// Checks whether no referees are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.referees.is_empty()
    }

    /// Maximum number of referees this registry accepts.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks whether another referee can be registered.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.referees.len() >= self.capacity
    }

    /// Captures the registered IDs for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::new(self.referees.iter().map(|r| r.id().clone()).collect())
    }
}

impl Default for RefereeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a RefereeRegistry {
    type Item = &'a RefereeRecord;
    type IntoIter = std::slice::Iter<'a, RefereeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.referees.iter()
    }
}

/// Checks whether `referee` is willing to officiate at `location`.
#[must_use]
pub const fn travels(referee: &RefereeRecord, location: Location) -> bool {
    referee.travels(location)
}
