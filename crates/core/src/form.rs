// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Presentation-independent state of the referee form.
//!
//! A front end forwards user interaction as [`FormEvent`]s and renders the
//! resulting state. Submitting the form produces a [`Command`] for
//! [`crate::apply`].

use crate::command::Command;
use crate::error::{FieldError, FormError};
use crate::id::IdScheme;
use crate::registry::RefereeRegistry;
use javaball_domain::{
    Field, Location, Qualification, QualificationLevel, RefereeId, RefereeRecord,
    TravelPreferences, parse_allocations, required_travel, validate_name,
};
use tracing::debug;

/// Whether the form creates a new referee or edits an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    /// No referee is selected; saving registers a new one.
    New,
    /// The referee with this ID is being edited.
    Edit(RefereeId),
}

/// A user interaction with the referee form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The first name field lost focus with this text.
    FirstNameCommitted(String),
    /// The last name field lost focus with this text.
    LastNameCommitted(String),
    /// The previous allocations field lost focus with this text.
    AllocationsCommitted(String),
    /// A qualification badge was selected.
    QualificationSelected(Qualification),
    /// A qualification level was selected.
    LevelSelected(QualificationLevel),
    /// A home location was selected.
    HomeSelected(Location),
    /// A travel location checkbox was clicked.
    TravelToggled(Location),
}

/// State behind the referee form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefereeForm {
    mode: FormMode,
    first_name: String,
    last_name: String,
    allocations: String,
    qualification: Qualification,
    level: QualificationLevel,
    home: Location,
    travel: TravelPreferences,
    id_preview: Option<RefereeId>,
}

impl RefereeForm {
    /// Creates an empty form for registering a new referee.
    ///
    /// Defaults to an NJB level 1 referee living in the North.
    #[must_use]
    pub fn new() -> Self {
        let home: Location = Location::North;
        Self {
            mode: FormMode::New,
            first_name: String::new(),
            last_name: String::new(),
            allocations: String::new(),
            qualification: Qualification::NJB,
            level: QualificationLevel::LOWEST,
            home,
            travel: required_travel(home),
            id_preview: None,
        }
    }

    /// Creates a form pre-populated with an existing referee for editing.
    ///
    /// Names and allocations are shown but locked.
    #[must_use]
    pub fn for_referee(referee: &RefereeRecord) -> Self {
        Self {
            mode: FormMode::Edit(referee.id().clone()),
            first_name: referee.first_name().to_string(),
            last_name: referee.last_name().to_string(),
            allocations: referee.allocations().to_string(),
            qualification: referee.qualification(),
            level: referee.qualification_level(),
            home: referee.home_location(),
            travel: referee.travel_preferences(),
            id_preview: Some(referee.id().clone()),
        }
    }

    /// Applies a user interaction to the form.
    ///
    /// Committing a name in [`FormMode::New`] refreshes the ID preview once
    /// both names are non-empty. Changes to locked fields are ignored.
    pub fn handle(&mut self, event: FormEvent, registry: &RefereeRegistry, ids: &impl IdScheme) {
        match event {
            FormEvent::FirstNameCommitted(text) => {
                if self.identity_locked() {
                    debug!("Ignoring first name change on existing referee");
                    return;
                }
                self.first_name = text;
                self.refresh_id_preview(registry, ids);
            }
            FormEvent::LastNameCommitted(text) => {
                if self.identity_locked() {
                    debug!("Ignoring last name change on existing referee");
                    return;
                }
                self.last_name = text;
                self.refresh_id_preview(registry, ids);
            }
            FormEvent::AllocationsCommitted(text) => {
                if self.identity_locked() {
                    debug!("Ignoring allocations change on existing referee");
                    return;
                }
                self.allocations = text;
            }
            FormEvent::QualificationSelected(qualification) => {
                self.qualification = qualification;
            }
            FormEvent::LevelSelected(level) => self.level = level,
            FormEvent::HomeSelected(home) => {
                self.home = home;
                self.travel = self.travel.with_home(home);
            }
            FormEvent::TravelToggled(location) => {
                if self.travel_locked(location) {
                    debug!(%location, "Home location cannot be deselected");
                    return;
                }
                if self.travel.contains(location) {
                    self.travel.remove(location);
                } else {
                    self.travel.insert(location);
                }
            }
        }
    }

    fn refresh_id_preview(&mut self, registry: &RefereeRegistry, ids: &impl IdScheme) {
        let first: &str = self.first_name.trim();
        let last: &str = self.last_name.trim();
        if first.is_empty() || last.is_empty() {
            return;
        }
        self.id_preview = Some(ids.derive(first, last, registry));
    }

    /// Validates the form and builds the command that saves it.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - A new referee is being registered and the registry is full
    /// - Any name or allocation field is invalid; all invalid fields are reported
    pub fn submit(&self, registry: &RefereeRegistry) -> Result<Command, FormError> {
        match &self.mode {
            FormMode::Edit(id) => Ok(Command::EditReferee {
                id: id.clone(),
                qualification: self.qualification,
                level: self.level,
                home: self.home,
                travel: self.travel,
            }),
            FormMode::New => {
                if registry.is_full() {
                    return Err(FormError::CapacityExceeded {
                        capacity: registry.capacity(),
                    });
                }

                let first_name: &str = self.first_name.trim();
                let last_name: &str = self.last_name.trim();
                let mut errors: Vec<FieldError> = Vec::new();

                if let Err(err) = validate_name(Field::FirstName, first_name) {
                    errors.push(FieldError::from_domain(Field::FirstName, err));
                }
                if let Err(err) = validate_name(Field::LastName, last_name) {
                    errors.push(FieldError::from_domain(Field::LastName, err));
                }
                let allocations: Option<u32> = match parse_allocations(&self.allocations) {
                    Ok(count) => Some(count),
                    Err(err) => {
                        errors.push(FieldError::from_domain(Field::Allocations, err));
                        None
                    }
                };

                match allocations {
                    Some(allocations) if errors.is_empty() => Ok(Command::AddReferee {
                        first_name: first_name.to_string(),
                        last_name: last_name.to_string(),
                        qualification: self.qualification,
                        level: self.level,
                        allocations,
                        home: self.home,
                        travel: self.travel,
                    }),
                    _ => Err(FormError::InvalidFields(errors)),
                }
            }
        }
    }

    /// Builds the command that removes the referee being edited.
    ///
    /// # Errors
    ///
    /// Returns an error if the form is registering a new referee.
    pub fn remove_command(&self) -> Result<Command, FormError> {
        match &self.mode {
            FormMode::Edit(id) => Ok(Command::RemoveReferee { id: id.clone() }),
            FormMode::New => Err(FormError::NotEditing),
        }
    }

    /// Whether names and allocations can no longer be changed.
    #[must_use]
    pub const fn identity_locked(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Whether the travel checkbox for `location` is disabled.
    #[must_use]
    pub fn travel_locked(&self, location: Location) -> bool {
        location == self.home
    }

    /// Returns the form mode.
    #[must_use]
    pub const fn mode(&self) -> &FormMode {
        &self.mode
    }

    /// Returns the ID shown for the referee, if known.
    #[must_use]
    pub const fn id_preview(&self) -> Option<&RefereeId> {
        self.id_preview.as_ref()
    }

    /// Returns the first name text.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name text.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the allocations text.
    #[must_use]
    pub fn allocations(&self) -> &str {
        &self.allocations
    }

    /// Returns the selected qualification.
    #[must_use]
    pub const fn qualification(&self) -> Qualification {
        self.qualification
    }

    /// Returns the selected level.
    #[must_use]
    pub const fn level(&self) -> QualificationLevel {
        self.level
    }

    /// Returns the selected home location.
    #[must_use]
    pub const fn home(&self) -> Location {
        self.home
    }

    /// Returns the selected travel preferences.
    #[must_use]
    pub const fn travel(&self) -> TravelPreferences {
        self.travel
    }
}

impl Default for RefereeForm {
    fn default() -> Self {
        Self::new()
    }
}
