// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::travel::TravelPreferences;
use crate::types::{
    Field, Location, Qualification, QualificationLevel, RefereeId, format_qualification_code,
};
use crate::validation::validate_name;
use serde::{Deserialize, Serialize};

/// A registered referee.
///
/// Identity fields (ID, names, previous allocations) are fixed at creation.
/// Qualification, level, home location and travel preferences may be edited.
/// The home location is always part of the travel preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRefereeRecord")]
pub struct RefereeRecord {
    id: RefereeId,
    first_name: String,
    last_name: String,
    qualification: Qualification,
    qualification_level: QualificationLevel,
    allocations: u32,
    home_location: Location,
    travel_preferences: TravelPreferences,
}

impl RefereeRecord {
    /// Creates a new `RefereeRecord`.
    ///
    /// # Arguments
    ///
    /// * `id` - The derived referee ID
    /// * `first_name` - The referee's first name
    /// * `last_name` - The referee's last name
    /// * `qualification` - The judge badge
    /// * `qualification_level` - The badge level
    /// * `allocations` - Count of previous match allocations
    /// * `home_location` - Where the referee lives
    /// * `travel_preferences` - Where the referee will travel; `home_location` is always added
    ///
    /// # Errors
    ///
    /// Returns an error if either name fails [`validate_name`].
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: RefereeId,
        first_name: String,
        last_name: String,
        qualification: Qualification,
        qualification_level: QualificationLevel,
        allocations: u32,
        home_location: Location,
        travel_preferences: TravelPreferences,
    ) -> Result<Self, DomainError> {
        validate_name(Field::FirstName, &first_name)?;
        validate_name(Field::LastName, &last_name)?;

        Ok(Self {
            id,
            first_name,
            last_name,
            qualification,
            qualification_level,
            allocations,
            home_location,
            travel_preferences: travel_preferences.with_home(home_location),
        })
    }

    /// Updates the editable fields of this referee.
    ///
    /// Names, ID and allocations are left untouched. `home_location` is
    /// added to `travel_preferences`.
    pub const fn edit(
        &mut self,
        qualification: Qualification,
        qualification_level: QualificationLevel,
        home_location: Location,
        travel_preferences: TravelPreferences,
    ) {
        self.qualification = qualification;
        self.qualification_level = qualification_level;
        self.home_location = home_location;
        self.travel_preferences = travel_preferences.with_home(home_location);
    }

    /// Returns the referee ID.
    #[must_use]
    pub const fn id(&self) -> &RefereeId {
        &self.id
    }

    /// Returns the first name.
    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Returns the last name.
    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Returns the judge badge.
    #[must_use]
    pub const fn qualification(&self) -> Qualification {
        self.qualification
    }

    /// Returns the badge level.
    #[must_use]
    pub const fn qualification_level(&self) -> QualificationLevel {
        self.qualification_level
    }

    /// Returns the combined qualification code, e.g. `IJB3`.
    #[must_use]
    pub fn qualification_code(&self) -> String {
        format_qualification_code(self.qualification, self.qualification_level)
    }

    /// Returns the count of previous match allocations.
    #[must_use]
    pub const fn allocations(&self) -> u32 {
        self.allocations
    }

    /// Returns the home location.
    #[must_use]
    pub const fn home_location(&self) -> Location {
        self.home_location
    }

    /// Returns the travel preferences.
    #[must_use]
    pub const fn travel_preferences(&self) -> TravelPreferences {
        self.travel_preferences
    }

    /// Checks whether this referee travels to `location`.
    #[must_use]
    pub const fn travels(&self, location: Location) -> bool {
        self.travel_preferences.contains(location)
    }
}

/// Unvalidated referee fields as they appear in serialized form.
#[derive(Deserialize)]
struct RawRefereeRecord {
    id: RefereeId,
    first_name: String,
    last_name: String,
    qualification: Qualification,
    qualification_level: QualificationLevel,
    allocations: u32,
    home_location: Location,
    travel_preferences: TravelPreferences,
}

impl TryFrom<RawRefereeRecord> for RefereeRecord {
    type Error = DomainError;

    fn try_from(raw: RawRefereeRecord) -> Result<Self, Self::Error> {
        Self::new(
            raw.id,
            raw.first_name,
            raw.last_name,
            raw.qualification,
            raw.qualification_level,
            raw.allocations,
            raw.home_location,
            raw.travel_preferences,
        )
    }
}
