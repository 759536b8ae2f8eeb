// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Args, CliCommand};
use clap::{CommandFactory, Parser};
use javaball::MAX_REFEREES;
use javaball_domain::{Location, Qualification, TravelPreferences};

#[test]
fn test_cli_definition_is_consistent() {
    Args::command().debug_assert();
}

#[test]
fn test_capacity_defaults_to_max_referees() {
    let args: Args = Args::try_parse_from(["javaball-cli", "--roster", "r.txt", "list"]).unwrap();

    assert_eq!(args.capacity, MAX_REFEREES);
}

#[test]
fn test_add_parses_typed_values() {
    let args: Args = Args::try_parse_from([
        "javaball-cli",
        "--roster",
        "r.txt",
        "add",
        "--first",
        "Andrew",
        "--last",
        "Lowson",
        "--qualification",
        "ijb",
        "--level",
        "3",
        "--allocations",
        "12",
        "--home",
        "central",
        "--travel",
        "YYN",
    ])
    .unwrap();

    assert_eq!(
        args.command,
        CliCommand::Add {
            first: String::from("Andrew"),
            last: String::from("Lowson"),
            qualification: Qualification::IJB,
            level: 3,
            allocations: String::from("12"),
            home: Location::Central,
            travel: Some(TravelPreferences::from_locations(&[
                Location::North,
                Location::Central
            ])),
        }
    );
}

#[test]
fn test_add_rejects_unknown_location() {
    let result: Result<Args, clap::Error> = Args::try_parse_from([
        "javaball-cli",
        "--roster",
        "r.txt",
        "add",
        "--first",
        "Andrew",
        "--last",
        "Lowson",
        "--allocations",
        "12",
        "--home",
        "East",
    ]);

    assert!(result.is_err());
}

#[test]
fn test_list_first_requires_last() {
    let result: Result<Args, clap::Error> =
        Args::try_parse_from(["javaball-cli", "--roster", "r.txt", "list", "--first", "Andrew"]);

    assert!(result.is_err());
}

#[test]
fn test_list_name_conflicts_with_full_name() {
    let result: Result<Args, clap::Error> = Args::try_parse_from([
        "javaball-cli",
        "--roster",
        "r.txt",
        "list",
        "--name",
        "Andrew",
        "--first",
        "Andrew",
        "--last",
        "Lowson",
    ]);

    assert!(result.is_err());
}
