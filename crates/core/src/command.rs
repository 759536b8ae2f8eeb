// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use javaball_domain::{Location, Qualification, QualificationLevel, RefereeId, TravelPreferences};

/// A command represents user intent as data only.
///
/// Commands are the only way to request registry changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Register a new referee. The ID is derived when the command is applied.
    AddReferee {
        /// The referee's first name.
        first_name: String,
        /// The referee's last name.
        last_name: String,
        /// The judge badge.
        qualification: Qualification,
        /// The badge level.
        level: QualificationLevel,
        /// Count of previous match allocations.
        allocations: u32,
        /// Where the referee lives.
        home: Location,
        /// Where the referee will travel.
        travel: TravelPreferences,
    },
    /// Change the editable details of a registered referee.
    EditReferee {
        /// The referee to edit.
        id: RefereeId,
        /// The new judge badge.
        qualification: Qualification,
        /// The new badge level.
        level: QualificationLevel,
        /// The new home location.
        home: Location,
        /// The new travel preferences.
        travel: TravelPreferences,
    },
    /// Remove a registered referee.
    RemoveReferee {
        /// The referee to remove.
        id: RefereeId,
    },
}

impl Command {
    /// The action name recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AddReferee { .. } => "AddReferee",
            Self::EditReferee { .. } => "EditReferee",
            Self::RemoveReferee { .. } => "RemoveReferee",
        }
    }
}
