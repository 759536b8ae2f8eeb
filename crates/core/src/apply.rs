// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::id::IdScheme;
use crate::registry::RefereeRegistry;
use javaball_audit::{Action, AuditEvent, RegistrySnapshot};
use javaball_domain::{DomainError, RefereeId, RefereeRecord};
use tracing::{info, warn};

/// The result of a successful registry transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The registry after the transition.
    pub new_registry: RefereeRegistry,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}

/// Applies a command to the registry, producing a new registry and audit event.
///
/// The input registry is never modified.
///
/// # Arguments
///
/// * `registry` - The current registry (immutable)
/// * `command` - The command to apply
/// * `ids` - Derives IDs for newly added referees
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new registry and audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if:
/// - A new referee's names are invalid
/// - The registry is full
/// - The derived ID is already registered
/// - The referee to edit or remove does not exist
pub fn apply(
    registry: &RefereeRegistry,
    command: Command,
    ids: &impl IdScheme,
) -> Result<TransitionResult, CoreError> {
    let action_name: &'static str = command.name();
    let result: Result<TransitionResult, CoreError> = match command {
        Command::AddReferee {
            first_name,
            last_name,
            qualification,
            level,
            allocations,
            home,
            travel,
        } => {
            // Rule: capacity is checked before anything else
            if registry.is_full() {
                return reject(
                    action_name,
                    CoreError::DomainViolation(DomainError::CapacityExceeded {
                        capacity: registry.capacity(),
                    }),
                );
            }

            let id: RefereeId = ids.derive(&first_name, &last_name, registry);
            let referee: RefereeRecord = match RefereeRecord::new(
                id.clone(),
                first_name,
                last_name,
                qualification,
                level,
                allocations,
                home,
                travel,
            ) {
                Ok(referee) => referee,
                Err(err) => return reject(action_name, err.into()),
            };

            let details: String = format!(
                "Added referee {} {} ({id}, {}, home {home})",
                referee.first_name(),
                referee.last_name(),
                referee.qualification_code()
            );

            let mut new_registry: RefereeRegistry = registry.clone();
            match new_registry.add(referee) {
                Ok(()) => Ok(transition(registry, new_registry, action_name, id, details)),
                Err(err) => Err(err.into()),
            }
        }
        Command::EditReferee {
            id,
            qualification,
            level,
            home,
            travel,
        } => {
            let mut new_registry: RefereeRegistry = registry.clone();
            match new_registry.find_by_id_mut(&id) {
                Some(referee) => {
                    referee.edit(qualification, level, home, travel);
                    let details: String = format!(
                        "Edited referee {id}: {}, home {home}, travels {}",
                        referee.qualification_code(),
                        referee.travel_preferences()
                    );
                    Ok(transition(registry, new_registry, action_name, id, details))
                }
                None => Err(CoreError::RefereeNotFound(id)),
            }
        }
        Command::RemoveReferee { id } => {
            let mut new_registry: RefereeRegistry = registry.clone();
            match new_registry.remove_by_id(&id) {
                Some(removed) => {
                    let details: String = format!(
                        "Removed referee {} {} ({id})",
                        removed.first_name(),
                        removed.last_name()
                    );
                    Ok(transition(registry, new_registry, action_name, id, details))
                }
                None => Err(CoreError::RefereeNotFound(id)),
            }
        }
    };

    match result {
        Ok(transition) => {
            info!(
                action = action_name,
                referee = %transition.audit_event.referee,
                referees = transition.new_registry.len(),
                "Applied registry command"
            );
            Ok(transition)
        }
        Err(err) => reject(action_name, err),
    }
}

fn transition(
    before: &RefereeRegistry,
    new_registry: RefereeRegistry,
    action_name: &str,
    referee: RefereeId,
    details: String,
) -> TransitionResult {
    let before: RegistrySnapshot = before.to_snapshot();
    let after: RegistrySnapshot = new_registry.to_snapshot();
    let action: Action = Action::new(String::from(action_name), Some(details));

    TransitionResult {
        new_registry,
        audit_event: AuditEvent::new(action, referee, before, after),
    }
}

fn reject(action_name: &str, err: CoreError) -> Result<TransitionResult, CoreError> {
    warn!(action = action_name, error = %err, "Rejected registry command");
    Err(err)
}
