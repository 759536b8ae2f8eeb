// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A region in which matches are played and referees live.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Location {
    /// The northern region.
    North,
    /// The central region.
    Central,
    /// The southern region.
    South,
}

impl Location {
    /// Every location, in the order used by travel preference strings.
    pub const ALL: [Self; 3] = [Self::North, Self::Central, Self::South];

    /// Converts this location to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::North => "North",
            Self::Central => "Central",
            Self::South => "South",
        }
    }

    /// Position of this location within [`Location::ALL`].
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::North => 0,
            Self::Central => 1,
            Self::South => 2,
        }
    }
}

impl FromStr for Location {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "north" => Ok(Self::North),
            "central" => Ok(Self::Central),
            "south" => Ok(Self::South),
            _ => Err(DomainError::InvalidLocation(s.to_string())),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A referee's judge badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Qualification {
    /// National Judge Badge.
    NJB,
    /// International Judge Badge.
    IJB,
}

impl Qualification {
    /// Converts this qualification to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NJB => "NJB",
            Self::IJB => "IJB",
        }
    }
}

impl FromStr for Qualification {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NJB" => Ok(Self::NJB),
            "IJB" => Ok(Self::IJB),
            _ => Err(DomainError::InvalidQualification(s.to_string())),
        }
    }
}

impl std::fmt::Display for Qualification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A referee's qualification level, 1 through 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct QualificationLevel {
    value: u8,
}

impl QualificationLevel {
    /// Lowest qualification level.
    pub const MIN: u8 = 1;
    /// Highest qualification level.
    pub const MAX: u8 = 4;
    /// The entry level, 1.
    pub const LOWEST: Self = Self { value: Self::MIN };

    /// Creates a new `QualificationLevel`.
    ///
    /// # Errors
    ///
    /// Returns an error if `value` is not in the range 1-4.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self { value })
        } else {
            Err(DomainError::InvalidQualificationLevel(format!(
                "Level must be between {} and {}, got {value}",
                Self::MIN,
                Self::MAX
            )))
        }
    }

    /// Returns the level number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.value
    }
}

impl TryFrom<u8> for QualificationLevel {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<QualificationLevel> for u8 {
    fn from(level: QualificationLevel) -> Self {
        level.value
    }
}

impl std::fmt::Display for QualificationLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Parses a combined qualification code such as `IJB3`.
///
/// # Errors
///
/// Returns an error if the badge prefix is unknown or the level suffix is
/// not a number between 1 and 4.
pub fn parse_qualification_code(
    code: &str,
) -> Result<(Qualification, QualificationLevel), DomainError> {
    let code: &str = code.trim();
    let split: usize = code
        .find(|c: char| c.is_ascii_digit())
        .ok_or_else(|| DomainError::InvalidQualificationLevel(code.to_string()))?;
    let (badge, level) = code.split_at(split);

    let qualification: Qualification = badge.parse()?;
    let level: u8 = level
        .parse()
        .map_err(|_| DomainError::InvalidQualificationLevel(level.to_string()))?;

    Ok((qualification, QualificationLevel::new(level)?))
}

/// Formats a qualification and level as a combined code such as `IJB3`.
#[must_use]
pub fn format_qualification_code(qualification: Qualification, level: QualificationLevel) -> String {
    format!("{qualification}{level}")
}

/// Represents a referee's identifier.
///
/// IDs are compared exactly; no case normalization is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RefereeId {
    value: String,
}

impl RefereeId {
    /// Creates a new `RefereeId`.
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.to_string(),
        }
    }

    /// Returns the ID value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for RefereeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A user-editable input field on a referee record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    /// The referee's first name.
    FirstName,
    /// The referee's last name.
    LastName,
    /// The count of previous match allocations.
    Allocations,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstName => write!(f, "first name"),
            Self::LastName => write!(f, "last name"),
            Self::Allocations => write!(f, "allocations"),
        }
    }
}
