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
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod referee;
mod travel;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use referee::RefereeRecord;
pub use travel::{TravelPreferences, required_travel};
pub use types::{
    Field, Location, Qualification, QualificationLevel, RefereeId, format_qualification_code,
    parse_qualification_code,
};
pub use validation::{is_capitals_and_digits_only, parse_allocations, validate_name};
