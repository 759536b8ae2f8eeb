// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{Field, RefereeId};

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A referee name is empty or malformed.
    InvalidName {
        /// Which name field was rejected.
        field: Field,
        /// Why the value was rejected.
        reason: String,
    },
    /// The previous allocation count is not a non-negative integer.
    InvalidAllocations(String),
    /// Qualification level is outside 1-4 or not a number.
    InvalidQualificationLevel(String),
    /// Qualification is not one of the known badges.
    InvalidQualification(String),
    /// Location is not one of the known regions.
    InvalidLocation(String),
    /// Travel preference string is malformed.
    InvalidTravelPreferences(String),
    /// The registry already holds its maximum number of referees.
    CapacityExceeded {
        /// The registry capacity.
        capacity: usize,
    },
    /// A referee with the same ID is already registered.
    DuplicateRefereeId(RefereeId),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName { field, reason } => write!(f, "Invalid {field}: {reason}"),
            Self::InvalidAllocations(msg) => write!(f, "Invalid allocations: {msg}"),
            Self::InvalidQualificationLevel(msg) => {
                write!(f, "Invalid qualification level: {msg}")
            }
            Self::InvalidQualification(msg) => write!(f, "Invalid qualification: {msg}"),
            Self::InvalidLocation(msg) => write!(f, "Invalid location: {msg}"),
            Self::InvalidTravelPreferences(msg) => {
                write!(f, "Invalid travel preferences: {msg}")
            }
            Self::CapacityExceeded { capacity } => {
                write!(
                    f,
                    "No more referees can be added: registry is limited to {capacity}"
                )
            }
            Self::DuplicateRefereeId(id) => {
                write!(f, "Referee with ID '{id}' is already registered")
            }
        }
    }
}

impl std::error::Error for DomainError {}

impl DomainError {
    /// Returns the input field this error refers to, if any.
    ///
    /// Used by form layers to decide which field to highlight.
    #[must_use]
    pub const fn field(&self) -> Option<Field> {
        match self {
            Self::InvalidName { field, .. } => Some(*field),
            Self::InvalidAllocations(_) => Some(Field::Allocations),
            _ => None,
        }
    }
}
