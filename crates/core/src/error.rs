// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use javaball_domain::{DomainError, Field, RefereeId};

/// Errors that can occur during registry transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// No referee with the given ID is registered.
    RefereeNotFound(RefereeId),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::RefereeNotFound(id) => write!(f, "Referee '{id}' not found"),
        }
    }
}

impl std::error::Error for CoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::DomainViolation(err) => Some(err),
            Self::RefereeNotFound(_) => None,
        }
    }
}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}

/// A single rejected form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field to highlight.
    pub field: Field,
    /// Why the value was rejected.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub const fn new(field: Field, message: String) -> Self {
        Self { field, message }
    }

    /// Creates a `FieldError` for `field` from a validation failure.
    #[must_use]
    pub fn from_domain(field: Field, err: DomainError) -> Self {
        let message: String = match err {
            DomainError::InvalidName { reason, .. } => reason,
            DomainError::InvalidAllocations(msg) => msg,
            other => other.to_string(),
        };
        Self::new(field, message)
    }
}

/// Errors reported when a referee form is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more input fields are invalid. Every invalid field is listed.
    InvalidFields(Vec<FieldError>),
    /// The registry is full; no new referee can be saved.
    CapacityExceeded {
        /// The registry capacity.
        capacity: usize,
    },
    /// The requested action needs a form editing an existing referee.
    NotEditing,
}

impl FormError {
    /// Returns the fields that should be highlighted.
    #[must_use]
    pub fn fields(&self) -> Vec<Field> {
        match self {
            Self::InvalidFields(errors) => errors.iter().map(|e| e.field).collect(),
            Self::CapacityExceeded { .. } | Self::NotEditing => Vec::new(),
        }
    }
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFields(errors) => {
                write!(f, "Please enter valid data")?;
                for (i, error) in errors.iter().enumerate() {
                    let sep: &str = if i == 0 { ": " } else { "; " };
                    write!(f, "{sep}{}: {}", error.field, error.message)?;
                }
                Ok(())
            }
            Self::CapacityExceeded { capacity } => {
                write!(
                    f,
                    "No more referees can be added: registry is limited to {capacity}"
                )
            }
            Self::NotEditing => write!(f, "No referee is selected"),
        }
    }
}

impl std::error::Error for FormError {}
