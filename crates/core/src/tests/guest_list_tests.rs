// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for adding, editing and removing secondary guests.

use crate::tests::helpers::{
    add_complete_guest, apply_ok, create_test_date, create_test_image, create_valid_state,
    submit_command,
};
use crate::{Command, CoreError, State, TransitionOutcome, TransitionResult, apply};
use inn_registration_domain::{DomainError, GuestField, IdType, SecondaryGuest};

fn guest_keys(state: &State) -> Vec<String> {
    state
        .draft
        .secondary_guests
        .iter()
        .map(|guest| guest.key.value().to_string())
        .collect()
}

#[test]
fn test_add_secondary_guest_appends_empty_guest() {
    let state: State = State::new(create_test_date());

    let result: TransitionResult = apply(&state, Command::AddSecondaryGuest).unwrap();

    let guests: &[SecondaryGuest] = &result.new_state.draft.secondary_guests;
    assert_eq!(guests.len(), 1);
    assert_eq!(guests[0].full_name, "");
    assert_eq!(guests[0].identity.id_type, IdType::Aadhaar);
    assert!(guests[0].identity.id_front_image.is_none());
    match result.outcome {
        TransitionOutcome::GuestAdded { index, key } => {
            assert_eq!(index, 0);
            assert_eq!(key, guests[0].key);
        }
        other => panic!("expected GuestAdded, got {other:?}"),
    }
}

#[test]
fn test_guest_keys_are_unique_and_never_reused() {
    let mut state: State = State::new(create_test_date());
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::RemoveSecondaryGuest { index: 1 });
    state = apply_ok(&state, Command::AddSecondaryGuest);

    assert_eq!(guest_keys(&state), vec!["sg-1", "sg-3"]);
}

#[test]
fn test_add_then_remove_restores_previous_list() {
    let mut state: State = add_complete_guest(&create_valid_state(), "Meera Sharma");
    state = add_complete_guest(&state, "Kavya Rao");
    let before: Vec<SecondaryGuest> = state.draft.secondary_guests.clone();

    let added: State = apply_ok(&state, Command::AddSecondaryGuest);
    let removed: State = apply_ok(&added, Command::RemoveSecondaryGuest { index: 2 });

    assert_eq!(removed.draft.secondary_guests, before);
}

#[test]
fn test_remove_shifts_later_guests_down() {
    let mut state: State = State::new(create_test_date());
    for name in ["A", "B", "C", "D"] {
        state = add_complete_guest(&state, name);
    }

    let result: TransitionResult =
        apply(&state, Command::RemoveSecondaryGuest { index: 1 }).unwrap();

    let names: Vec<&str> = result
        .new_state
        .draft
        .secondary_guests
        .iter()
        .map(|guest| guest.full_name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "C", "D"]);
    assert_eq!(guest_keys(&result.new_state), vec!["sg-1", "sg-3", "sg-4"]);
    assert!(matches!(
        result.outcome,
        TransitionOutcome::GuestRemoved { ref key } if key.value() == "sg-2"
    ));
}

#[test]
fn test_remove_out_of_range_is_refused() {
    let state: State = apply_ok(&State::new(create_test_date()), Command::AddSecondaryGuest);

    let result: Result<TransitionResult, CoreError> =
        apply(&state, Command::RemoveSecondaryGuest { index: 5 });

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::GuestIndexOutOfRange { index: 5, len: 1 })
    );
}

#[test]
fn test_remove_drops_errors_from_removed_index_onward() {
    let mut state: State = create_valid_state();
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, submit_command());
    assert_eq!(state.errors.secondary_guests.len(), 3);

    let removed: State = apply_ok(&state, Command::RemoveSecondaryGuest { index: 1 });

    let remaining: Vec<usize> = removed.errors.secondary_guests.keys().copied().collect();
    assert_eq!(remaining, vec![0]);
    assert_eq!(
        removed.errors.secondary_guests.get(&0),
        state.errors.secondary_guests.get(&0)
    );
}

#[test]
fn test_remove_last_guest_keeps_errors_of_earlier_guests() {
    let mut state: State = create_valid_state();
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, submit_command());

    let removed: State = apply_ok(&state, Command::RemoveSecondaryGuest { index: 2 });

    let remaining: Vec<usize> = removed.errors.secondary_guests.keys().copied().collect();
    assert_eq!(remaining, vec![0, 1]);
    assert_eq!(
        removed.errors.guest_field(1, GuestField::Name),
        Some("Name is required.")
    );
}

#[test]
fn test_remove_keeps_top_level_errors() {
    let mut state: State = State::new(create_test_date());
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, submit_command());
    assert!(!state.errors.fields.is_empty());

    let removed: State = apply_ok(&state, Command::RemoveSecondaryGuest { index: 0 });

    assert_eq!(removed.errors.fields, state.errors.fields);
}

#[test]
fn test_update_secondary_guest_field_is_scoped_to_index() {
    let mut state: State = State::new(create_test_date());
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(&state, Command::AddSecondaryGuest);

    let new_state: State = apply_ok(
        &state,
        Command::UpdateSecondaryGuestField {
            index: 1,
            field: GuestField::IdType,
            value: String::from("Passport"),
        },
    );

    assert_eq!(
        new_state.draft.secondary_guests[0].identity.id_type,
        IdType::Aadhaar
    );
    assert_eq!(
        new_state.draft.secondary_guests[1].identity.id_type,
        IdType::Passport
    );
}

#[test]
fn test_update_secondary_guest_field_out_of_range() {
    let state: State = State::new(create_test_date());

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::UpdateSecondaryGuestField {
            index: 0,
            field: GuestField::Name,
            value: String::from("Nobody"),
        },
    );

    assert!(matches!(
        result,
        Err(CoreError::DomainViolation(
            DomainError::GuestIndexOutOfRange { index: 0, len: 0 }
        ))
    ));
}

#[test]
fn test_update_secondary_guest_file_empty_selection_is_ignored() {
    let mut state: State = State::new(create_test_date());
    state = apply_ok(&state, Command::AddSecondaryGuest);
    state = apply_ok(
        &state,
        Command::UpdateSecondaryGuestFile {
            index: 0,
            field: GuestField::IdFrontImage,
            files: vec![create_test_image("kept.png")],
        },
    );

    let result: TransitionResult = apply(
        &state,
        Command::UpdateSecondaryGuestFile {
            index: 0,
            field: GuestField::IdFrontImage,
            files: Vec::new(),
        },
    )
    .unwrap();

    assert_eq!(result.outcome, TransitionOutcome::SelectionIgnored);
    assert_eq!(result.new_state, state);
}

#[test]
fn test_update_secondary_guest_file_rejects_name_field() {
    let state: State = apply_ok(&State::new(create_test_date()), Command::AddSecondaryGuest);

    let result: Result<TransitionResult, CoreError> = apply(
        &state,
        Command::UpdateSecondaryGuestFile {
            index: 0,
            field: GuestField::Name,
            files: vec![create_test_image("x.png")],
        },
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::NotAnImageField { field: "name" })
    );
}
