// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use javaball_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a roster.
#[derive(Debug, Error)]
pub enum RosterError {
    /// The roster file could not be opened or created.
    #[error("cannot access roster '{}': {source}", path.display())]
    Io {
        /// The roster path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The roster could not be tokenized or written.
    #[error("malformed roster: {0}")]
    Csv(#[from] csv::Error),
    /// A line does not hold the expected number of fields.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        /// The 1-based line number.
        line: u64,
        /// The required field count.
        expected: usize,
        /// The number of fields present.
        found: usize,
    },
    /// A line holds a referee that violates a domain rule.
    #[error("line {line}: {source}")]
    InvalidReferee {
        /// The 1-based line number.
        line: u64,
        /// The violated rule.
        #[source]
        source: DomainError,
    },
}
