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
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::multiple_crate_versions)]

mod commands;

#[cfg(test)]
mod tests;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use javaball::MAX_REFEREES;
use javaball_domain::{Location, Qualification, TravelPreferences};
use std::path::PathBuf;
use tracing::info;
use tracing_log::AsTrace;
use tracing_subscriber::EnvFilter;

/// JavaBall Referees - manage the referee roster for the `JavaBall` league
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the roster file
    #[arg(short, long, env = "JAVABALL_ROSTER")]
    roster: PathBuf,

    /// Maximum number of referees the registry accepts
    #[arg(long, default_value_t = MAX_REFEREES)]
    capacity: usize,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum CliCommand {
    /// List referees, optionally filtered
    List {
        /// Only referees qualified at this level
        #[arg(long)]
        level: Option<u8>,

        /// Only referees whose first or last name matches
        #[arg(long, conflicts_with_all = ["first", "last"])]
        name: Option<String>,

        /// Only referees with this first name (requires --last)
        #[arg(long, requires = "last")]
        first: Option<String>,

        /// Only referees with this last name (requires --first)
        #[arg(long, requires = "first")]
        last: Option<String>,

        /// Only referees living in this location
        #[arg(long)]
        home: Option<Location>,

        /// Only referees willing to travel to this location
        #[arg(long)]
        travels: Option<Location>,

        /// Print referees as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a single referee
    Show {
        /// The referee ID, e.g. `AL1`
        id: String,

        /// Print the referee as JSON
        #[arg(long)]
        json: bool,
    },

    /// Register a new referee
    Add {
        /// First name
        #[arg(long)]
        first: String,

        /// Last name
        #[arg(long)]
        last: String,

        /// Judge badge, NJB or IJB
        #[arg(long, default_value = "NJB")]
        qualification: Qualification,

        /// Qualification level, 1 to 4
        #[arg(long, default_value_t = 1)]
        level: u8,

        /// Number of previous match allocations
        #[arg(long)]
        allocations: String,

        /// Home location
        #[arg(long, default_value = "North")]
        home: Location,

        /// Travel preferences in North/Central/South order, e.g. `YYN`
        #[arg(long)]
        travel: Option<TravelPreferences>,
    },

    /// Change the qualification, home or travel preferences of a referee
    Edit {
        /// The referee ID, e.g. `AL1`
        id: String,

        /// Judge badge, NJB or IJB
        #[arg(long)]
        qualification: Option<Qualification>,

        /// Qualification level, 1 to 4
        #[arg(long)]
        level: Option<u8>,

        /// Home location
        #[arg(long)]
        home: Option<Location>,

        /// Travel preferences in North/Central/South order, e.g. `YYN`
        #[arg(long)]
        travel: Option<TravelPreferences>,
    },

    /// Remove a referee
    Remove {
        /// The referee ID, e.g. `AL1`
        id: String,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(args.verbosity.log_level_filter().as_trace().to_string())
        }))
        .with_writer(std::io::stderr)
        .init();

    info!(roster = %args.roster.display(), "Starting JavaBall referee registry");

    let output: String = commands::run(&args.roster, args.capacity, args.command)?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}
