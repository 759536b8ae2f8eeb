// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::Location;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The set of regions a referee is willing to officiate in.
///
/// The textual form is three `Y`/`N` flags in North, Central, South order,
/// e.g. `YYN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TravelPreferences {
    flags: [bool; 3],
}

impl TravelPreferences {
    /// Creates an empty set.
    #[must_use]
    pub const fn none() -> Self {
        Self { flags: [false; 3] }
    }

    /// Creates a set holding only `location`.
    #[must_use]
    pub const fn only(location: Location) -> Self {
        Self::none().with(location)
    }

    /// Creates a set from a list of locations.
    #[must_use]
    pub fn from_locations(locations: &[Location]) -> Self {
        locations
            .iter()
            .fold(Self::none(), |prefs, location| prefs.with(*location))
    }

    /// Returns a copy of this set with `location` added.
    #[must_use]
    pub const fn with(mut self, location: Location) -> Self {
        self.flags[location.index()] = true;
        self
    }

    /// Returns a copy of this set with `home` added.
    ///
    /// A referee always travels to their home location.
    #[must_use]
    pub const fn with_home(self, home: Location) -> Self {
        self.with(home)
    }

    /// Adds `location` to the set.
    pub const fn insert(&mut self, location: Location) {
        self.flags[location.index()] = true;
    }

    /// Removes `location` from the set.
    pub const fn remove(&mut self, location: Location) {
        self.flags[location.index()] = false;
    }

    /// Checks whether `location` is in the set.
    #[must_use]
    pub const fn contains(&self, location: Location) -> bool {
        self.flags[location.index()]
    }

    /// Returns the locations in the set in North, Central, South order.
    #[must_use]
    pub fn locations(&self) -> Vec<Location> {
        Location::ALL
            .into_iter()
            .filter(|location| self.contains(*location))
            .collect()
    }

    /// Checks whether the set is empty.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        !(self.flags[0] || self.flags[1] || self.flags[2])
    }
}

/// Returns the travel preferences every referee living at `home` must hold.
///
/// A presentation layer calls this whenever the home selection changes,
/// merging the result into the current selection and locking the home
/// location so it cannot be deselected.
#[must_use]
pub const fn required_travel(home: Location) -> TravelPreferences {
    TravelPreferences::only(home)
}

impl FromStr for TravelPreferences {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s: &str = s.trim();
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != Location::ALL.len() {
            return Err(DomainError::InvalidTravelPreferences(format!(
                "expected {} Y/N flags, got '{s}'",
                Location::ALL.len()
            )));
        }

        let mut prefs: Self = Self::none();
        for (location, flag) in Location::ALL.into_iter().zip(chars) {
            match flag.to_ascii_uppercase() {
                'Y' => prefs.insert(location),
                'N' => {}
                other => {
                    return Err(DomainError::InvalidTravelPreferences(format!(
                        "unexpected flag '{other}' in '{s}'"
                    )));
                }
            }
        }
        Ok(prefs)
    }
}

impl TryFrom<String> for TravelPreferences {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TravelPreferences> for String {
    fn from(prefs: TravelPreferences) -> Self {
        prefs.to_string()
    }
}

impl std::fmt::Display for TravelPreferences {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for flag in self.flags {
            write!(f, "{}", if flag { 'Y' } else { 'N' })?;
        }
        Ok(())
    }
}
