// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::RosterError;
use csv::{QuoteStyle, ReaderBuilder, StringRecord, Trim, WriterBuilder};
use javaball::RefereeRegistry;
use javaball_domain::{
    DomainError, Location, RefereeId, RefereeRecord, TravelPreferences, parse_allocations,
    parse_qualification_code,
};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Number of fields on every roster line.
pub const FIELD_COUNT: usize = 7;

/// Parses one roster line, already split into fields.
///
/// # Errors
///
/// Returns an error if any field violates a domain rule.
pub fn parse_record(fields: &[&str; FIELD_COUNT]) -> Result<RefereeRecord, DomainError> {
    let [id, first_name, last_name, qualification, allocations, home, travel] = fields;

    let (qualification, level) = parse_qualification_code(qualification)?;
    let allocations: u32 = parse_allocations(allocations)?;
    let home: Location = home.parse()?;
    let travel: TravelPreferences = travel.parse()?;

    RefereeRecord::new(
        RefereeId::new(id),
        (*first_name).to_string(),
        (*last_name).to_string(),
        qualification,
        level,
        allocations,
        home,
        travel,
    )
}

/// Formats a referee as roster fields.
#[must_use]
pub fn format_record(referee: &RefereeRecord) -> [String; FIELD_COUNT] {
    [
        referee.id().to_string(),
        referee.first_name().to_string(),
        referee.last_name().to_string(),
        referee.qualification_code(),
        referee.allocations().to_string(),
        referee.home_location().to_string(),
        referee.travel_preferences().to_string(),
    ]
}

/// Reads a roster into a registry holding at most `capacity` referees.
///
/// # Errors
///
/// Returns an error if:
/// - The input cannot be read
/// - A line does not have exactly [`FIELD_COUNT`] fields
/// - A referee is invalid, duplicated, or exceeds the registry capacity
pub fn read_roster<R: Read>(reader: R, capacity: usize) -> Result<RefereeRegistry, RosterError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(reader);

    let mut registry: RefereeRegistry = RefereeRegistry::with_capacity(capacity);
    let mut record: StringRecord = StringRecord::new();
    while reader.read_record(&mut record)? {
        let line: u64 = record.position().map_or(0, csv::Position::line);

        // Runs of spaces show up as empty fields
        let fields: Vec<&str> = record.iter().filter(|f| !f.is_empty()).collect();
        if fields.is_empty() {
            continue;
        }
        let fields: [&str; FIELD_COUNT] = fields.try_into().map_err(|fields: Vec<&str>| {
            RosterError::FieldCount {
                line,
                expected: FIELD_COUNT,
                found: fields.len(),
            }
        })?;

        let referee: RefereeRecord = parse_record(&fields)
            .map_err(|source| RosterError::InvalidReferee { line, source })?;
        debug!(line, referee = %referee.id(), "Parsed roster line");
        registry
            .add(referee)
            .map_err(|source| RosterError::InvalidReferee { line, source })?;
    }

    Ok(registry)
}

/// Writes every referee in registry order, one per line.
///
/// # Errors
///
/// Returns an error if the output cannot be written.
pub fn write_roster<W: Write>(writer: W, registry: &RefereeRegistry) -> Result<(), RosterError> {
    let mut writer = WriterBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .from_writer(writer);

    for referee in registry {
        writer.write_record(format_record(referee))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Loads a roster file.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its contents are invalid.
pub fn load_roster(path: &Path, capacity: usize) -> Result<RefereeRegistry, RosterError> {
    let file: File = File::open(path).map_err(|source| RosterError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let registry: RefereeRegistry = read_roster(file, capacity)?;
    info!(path = %path.display(), referees = registry.len(), "Loaded roster");
    Ok(registry)
}

/// Saves a registry to a roster file, replacing its contents.
///
/// The roster is written to a temporary file in the same directory and then
/// renamed over `path`, so a failed write leaves the previous roster intact.
///
/// # Errors
///
/// Returns an error if the file cannot be created, written, or renamed.
pub fn save_roster(path: &Path, registry: &RefereeRegistry) -> Result<(), RosterError> {
    let io_error = |source: std::io::Error| RosterError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir: &Path = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut file: NamedTempFile = NamedTempFile::new_in(dir).map_err(io_error)?;
    write_roster(&mut file, registry)?;
    file.persist(path).map_err(|err| io_error(err.error))?;

    info!(path = %path.display(), referees = registry.len(), "Saved roster");
    Ok(())
}
