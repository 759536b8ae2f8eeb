// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Roster files list one referee per line:
//!
//! ```text
//! AL1 Andrew Lowson IJB3 12 North YYN
//! ```
//!
//! Fields are ID, first name, last name, qualification code, previous
//! allocations, home location and travel flags (North, Central, South).
//! Fields are separated by one or more spaces and blank lines are skipped.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod roster;

#[cfg(test)]
mod tests;

pub use error::RosterError;
pub use roster::{
    FIELD_COUNT, format_record, load_roster, parse_record, read_roster, save_roster, write_roster,
};
