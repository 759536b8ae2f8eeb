// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::CliCommand;
use color_eyre::eyre::Result;
use javaball::{
    Command, CoreError, FormEvent, InitialsIdScheme, RefereeForm, RefereeRegistry,
    TransitionResult, apply,
};
use javaball_audit::Action;
use javaball_domain::{
    Location, Qualification, QualificationLevel, RefereeId, RefereeRecord, TravelPreferences,
};
use javaball_roster::{format_record, load_roster, save_roster};
use std::path::Path;
use tracing::{debug, info};

/// Runs one subcommand against the roster at `path` and returns the text to print.
///
/// A roster that does not exist yet is treated as empty. Mutating commands
/// save the roster back to `path` on success.
///
/// # Errors
///
/// Returns an error if the roster cannot be loaded or saved, the input is
/// invalid, or the registry rejects the change.
pub(crate) fn run(path: &Path, capacity: usize, command: CliCommand) -> Result<String> {
    let registry: RefereeRegistry = open_registry(path, capacity)?;
    let ids: InitialsIdScheme = InitialsIdScheme;

    match command {
        CliCommand::List {
            level,
            name,
            first,
            last,
            home,
            travels,
            json,
        } => {
            let mut selected: Vec<&RefereeRecord> = registry.iter().collect();
            if let Some(level) = level {
                retain(&mut selected, &registry.filter_by_level(level));
            }
            if let Some(name) = name {
                retain(&mut selected, &registry.filter_by_name(&name));
            }
            if let (Some(first), Some(last)) = (first, last) {
                retain(&mut selected, &registry.filter_by_full_name(&first, &last));
            }
            if let Some(home) = home {
                retain(&mut selected, &registry.filter_by_home(home));
            }
            if let Some(location) = travels {
                retain(&mut selected, &registry.filter_by_travel(location));
            }
            debug!(matched = selected.len(), "Listed referees");

            if json {
                Ok(serde_json::to_string_pretty(&selected)?)
            } else {
                Ok(render(&selected))
            }
        }
        CliCommand::Show { id, json } => {
            let id: RefereeId = RefereeId::new(&id);
            let referee: &RefereeRecord = registry
                .find_by_id(&id)
                .ok_or(CoreError::RefereeNotFound(id))?;

            if json {
                Ok(serde_json::to_string_pretty(referee)?)
            } else {
                Ok(render(&[referee]))
            }
        }
        CliCommand::Add {
            first,
            last,
            qualification,
            level,
            allocations,
            home,
            travel,
        } => {
            let mut form: RefereeForm = RefereeForm::new();
            form.handle(FormEvent::FirstNameCommitted(first), &registry, &ids);
            form.handle(FormEvent::LastNameCommitted(last), &registry, &ids);
            form.handle(FormEvent::AllocationsCommitted(allocations), &registry, &ids);
            select(&mut form, &registry, Some(qualification), Some(level), Some(home), travel)?;

            let command: Command = form.submit(&registry)?;
            commit(path, &registry, command)
        }
        CliCommand::Edit {
            id,
            qualification,
            level,
            home,
            travel,
        } => {
            let id: RefereeId = RefereeId::new(&id);
            let mut form: RefereeForm = registry
                .find_by_id(&id)
                .map(RefereeForm::for_referee)
                .ok_or(CoreError::RefereeNotFound(id))?;
            select(&mut form, &registry, qualification, level, home, travel)?;

            let command: Command = form.submit(&registry)?;
            commit(path, &registry, command)
        }
        CliCommand::Remove { id } => {
            let command: Command = Command::RemoveReferee {
                id: RefereeId::new(&id),
            };
            commit(path, &registry, command)
        }
    }
}

fn open_registry(path: &Path, capacity: usize) -> Result<RefereeRegistry> {
    if path.exists() {
        Ok(load_roster(path, capacity)?)
    } else {
        info!(path = %path.display(), "Roster not found, starting empty");
        Ok(RefereeRegistry::with_capacity(capacity))
    }
}

/// Forwards the optional selections to the form as user interactions.
///
/// Travel preferences are applied as checkbox toggles, so the home location
/// stays selected whatever `travel` says.
fn select(
    form: &mut RefereeForm,
    registry: &RefereeRegistry,
    qualification: Option<Qualification>,
    level: Option<u8>,
    home: Option<Location>,
    travel: Option<TravelPreferences>,
) -> Result<()> {
    let ids: InitialsIdScheme = InitialsIdScheme;

    if let Some(qualification) = qualification {
        form.handle(FormEvent::QualificationSelected(qualification), registry, &ids);
    }
    if let Some(level) = level {
        let level: QualificationLevel = QualificationLevel::new(level)?;
        form.handle(FormEvent::LevelSelected(level), registry, &ids);
    }
    if let Some(home) = home {
        form.handle(FormEvent::HomeSelected(home), registry, &ids);
    }
    if let Some(travel) = travel {
        for location in Location::ALL {
            if travel.contains(location) != form.travel().contains(location) {
                form.handle(FormEvent::TravelToggled(location), registry, &ids);
            }
        }
    }
    Ok(())
}

fn commit(path: &Path, registry: &RefereeRegistry, command: Command) -> Result<String> {
    let result: TransitionResult = apply(registry, command, &InitialsIdScheme)?;
    save_roster(path, &result.new_registry)?;

    let action: Action = result.audit_event.action;
    Ok(action.details.unwrap_or(action.name))
}

fn retain(selected: &mut Vec<&RefereeRecord>, matches: &[&RefereeRecord]) {
    selected.retain(|referee| matches.iter().any(|m| m.id() == referee.id()));
}

fn render(referees: &[&RefereeRecord]) -> String {
    referees
        .iter()
        .map(|referee| format_record(referee).join(" "))
        .collect::<Vec<String>>()
        .join("\n")
}
