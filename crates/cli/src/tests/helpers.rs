// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Args, commands};
use clap::Parser;
use color_eyre::eyre::Result;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SAMPLE_ROSTER: &str = "\
AL1 Andrew Lowson IJB3 12 North YNN
RR1 Raoul Rothfeld NJB3 7 Central NYY
MP1 Miroslav Pogacar NJB1 0 South NNY
";

/// Creates a roster file in a fresh temporary directory.
pub fn create_roster_file(contents: &str) -> (TempDir, PathBuf) {
    let dir: TempDir = tempfile::tempdir().unwrap();
    let path: PathBuf = dir.path().join("referees.txt");
    std::fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Parses `args` as if given after `--roster <path>` and runs the command.
pub fn run_cli(path: &Path, args: &[&str]) -> Result<String> {
    let roster: String = path.display().to_string();
    let mut argv: Vec<&str> = vec!["javaball-cli", "--roster", roster.as_str()];
    argv.extend_from_slice(args);

    let args: Args = Args::try_parse_from(argv)?;
    commands::run(&args.roster, args.capacity, args.command)
}

pub fn read_roster_file(path: &Path) -> String {
    std::fs::read_to_string(path).unwrap()
}
