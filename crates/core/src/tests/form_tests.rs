// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_full_registry, create_test_referee};
use crate::{
    Command, FormError, FormEvent, FormMode, InitialsIdScheme, RefereeForm, RefereeRegistry,
    TransitionResult, apply,
};
use javaball_domain::{Field, Location, Qualification, QualificationLevel, RefereeId};

fn fill_new_form(first: &str, last: &str, allocations: &str) -> RefereeForm {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::new();
    form.handle(
        FormEvent::FirstNameCommitted(String::from(first)),
        &registry,
        &InitialsIdScheme,
    );
    form.handle(
        FormEvent::LastNameCommitted(String::from(last)),
        &registry,
        &InitialsIdScheme,
    );
    form.handle(
        FormEvent::AllocationsCommitted(String::from(allocations)),
        &registry,
        &InitialsIdScheme,
    );
    form
}

#[test]
fn test_new_form_defaults_to_north_home_locked() {
    let form: RefereeForm = RefereeForm::new();

    assert_eq!(form.mode(), &FormMode::New);
    assert_eq!(form.home(), Location::North);
    assert_eq!(form.qualification(), Qualification::NJB);
    assert_eq!(form.level(), QualificationLevel::LOWEST);
    assert!(form.travel().contains(Location::North));
    assert!(form.travel_locked(Location::North));
    assert!(!form.travel_locked(Location::South));
    assert!(form.id_preview().is_none());
}

#[test]
fn test_id_preview_waits_for_both_names() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::new();

    form.handle(
        FormEvent::FirstNameCommitted(String::from("Andrew")),
        &registry,
        &InitialsIdScheme,
    );
    assert!(form.id_preview().is_none());

    form.handle(
        FormEvent::LastNameCommitted(String::from("  Lowson ")),
        &registry,
        &InitialsIdScheme,
    );
    assert_eq!(form.id_preview(), Some(&RefereeId::new("AL1")));
}

#[test]
fn test_id_preview_ignores_blank_names() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::new();

    form.handle(
        FormEvent::FirstNameCommitted(String::from("   ")),
        &registry,
        &InitialsIdScheme,
    );
    form.handle(
        FormEvent::LastNameCommitted(String::from("Lowson")),
        &registry,
        &InitialsIdScheme,
    );

    assert!(form.id_preview().is_none());
}

#[test]
fn test_id_preview_tracks_registry_contents() {
    let mut registry: RefereeRegistry = RefereeRegistry::new();
    registry
        .add(create_test_referee("AL1", "Amy", "Lee", 1))
        .unwrap();
    let mut form: RefereeForm = RefereeForm::new();

    form.handle(
        FormEvent::FirstNameCommitted(String::from("Andrew")),
        &registry,
        &InitialsIdScheme,
    );
    form.handle(
        FormEvent::LastNameCommitted(String::from("Lowson")),
        &registry,
        &InitialsIdScheme,
    );

    assert_eq!(form.id_preview(), Some(&RefereeId::new("AL2")));
}

#[test]
fn test_home_selection_adds_and_locks_home() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::new();

    form.handle(
        FormEvent::HomeSelected(Location::Central),
        &registry,
        &InitialsIdScheme,
    );

    assert!(form.travel().contains(Location::Central));
    // the previous home stays selected but is no longer locked
    assert!(form.travel().contains(Location::North));
    assert!(form.travel_locked(Location::Central));
    assert!(!form.travel_locked(Location::North));

    form.handle(
        FormEvent::TravelToggled(Location::North),
        &registry,
        &InitialsIdScheme,
    );
    assert!(!form.travel().contains(Location::North));
}

#[test]
fn test_home_location_cannot_be_deselected() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::new();

    form.handle(
        FormEvent::TravelToggled(Location::North),
        &registry,
        &InitialsIdScheme,
    );

    assert!(form.travel().contains(Location::North));
}

#[test]
fn test_travel_toggle_flips_other_locations() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::new();

    form.handle(
        FormEvent::TravelToggled(Location::South),
        &registry,
        &InitialsIdScheme,
    );
    assert_eq!(form.travel().to_string(), "YNY");

    form.handle(
        FormEvent::TravelToggled(Location::South),
        &registry,
        &InitialsIdScheme,
    );
    assert_eq!(form.travel().to_string(), "YNN");
}

#[test]
fn test_submit_new_form_builds_add_command() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = fill_new_form(" Jane ", "Doe", " 7 ");
    form.handle(
        FormEvent::QualificationSelected(Qualification::IJB),
        &registry,
        &InitialsIdScheme,
    );
    form.handle(
        FormEvent::LevelSelected(QualificationLevel::new(3).unwrap()),
        &registry,
        &InitialsIdScheme,
    );

    let command: Command = form.submit(&registry).unwrap();

    match command {
        Command::AddReferee {
            first_name,
            last_name,
            qualification,
            level,
            allocations,
            home,
            travel,
        } => {
            assert_eq!(first_name, "Jane");
            assert_eq!(last_name, "Doe");
            assert_eq!(qualification, Qualification::IJB);
            assert_eq!(level.value(), 3);
            assert_eq!(allocations, 7);
            assert_eq!(home, Location::North);
            assert_eq!(travel.to_string(), "YNN");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_submit_reports_every_invalid_field() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let form: RefereeForm = fill_new_form("JANE", "Van Dyke", "lots");

    let err: FormError = form.submit(&registry).unwrap_err();

    assert_eq!(
        err.fields(),
        vec![Field::FirstName, Field::LastName, Field::Allocations]
    );
    assert!(err.to_string().starts_with("Please enter valid data"));
}

#[test]
fn test_submit_reports_only_allocations_when_names_are_valid() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let form: RefereeForm = fill_new_form("Jane", "Doe", "");

    let err: FormError = form.submit(&registry).unwrap_err();

    assert_eq!(err.fields(), vec![Field::Allocations]);
}

#[test]
fn test_submit_new_form_rejects_when_registry_full() {
    let registry: RefereeRegistry = create_full_registry(2);
    let form: RefereeForm = fill_new_form("Jane", "Doe", "1");

    let err: FormError = form.submit(&registry).unwrap_err();

    assert_eq!(err, FormError::CapacityExceeded { capacity: 2 });
    assert!(err.fields().is_empty());
}

#[test]
fn test_edit_form_locks_identity_fields() {
    let referee = create_test_referee("JD1", "Jane", "Doe", 2);
    let registry: RefereeRegistry = RefereeRegistry::new();
    let mut form: RefereeForm = RefereeForm::for_referee(&referee);

    form.handle(
        FormEvent::FirstNameCommitted(String::from("Joan")),
        &registry,
        &InitialsIdScheme,
    );
    form.handle(
        FormEvent::AllocationsCommitted(String::from("99")),
        &registry,
        &InitialsIdScheme,
    );

    assert!(form.identity_locked());
    assert_eq!(form.first_name(), "Jane");
    assert_eq!(form.last_name(), "Doe");
    assert_eq!(form.allocations(), "0");
    assert_eq!(form.id_preview(), Some(&RefereeId::new("JD1")));
}

#[test]
fn test_edit_form_submits_edit_command_even_when_full() {
    let registry: RefereeRegistry = create_full_registry(1);
    let referee = registry.iter().next().unwrap().clone();
    let mut form: RefereeForm = RefereeForm::for_referee(&referee);
    form.handle(
        FormEvent::HomeSelected(Location::South),
        &registry,
        &InitialsIdScheme,
    );

    let command: Command = form.submit(&registry).unwrap();
    let transition: TransitionResult = apply(&registry, command, &InitialsIdScheme).unwrap();

    let edited = transition.new_registry.find_by_id(referee.id()).unwrap();
    assert_eq!(edited.home_location(), Location::South);
    assert!(edited.travels(Location::North));
    assert!(edited.travels(Location::South));
}

#[test]
fn test_remove_command_requires_edit_mode() {
    let referee = create_test_referee("JD1", "Jane", "Doe", 2);

    assert_eq!(
        RefereeForm::new().remove_command().unwrap_err(),
        FormError::NotEditing
    );
    assert_eq!(
        RefereeForm::for_referee(&referee).remove_command().unwrap(),
        Command::RemoveReferee {
            id: RefereeId::new("JD1")
        }
    );
}

#[test]
fn test_form_round_trip_through_apply() {
    let registry: RefereeRegistry = RefereeRegistry::new();
    let form: RefereeForm = fill_new_form("Andrew", "Lowson", "12");

    let command: Command = form.submit(&registry).unwrap();
    let transition: TransitionResult = apply(&registry, command, &InitialsIdScheme).unwrap();

    assert_eq!(
        transition.audit_event.referee,
        form.id_preview().unwrap().clone()
    );
}
