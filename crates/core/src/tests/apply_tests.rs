// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    apply_ok, create_test_date, create_test_image, create_valid_state, update_field,
};
use crate::{Command, CoreError, FormPhase, State, TransitionOutcome, TransitionResult, apply};
use inn_registration_domain::{DomainError, FormField, IdType, RoomType};

#[test]
fn test_new_state_starts_editing_with_default_draft() {
    let state: State = State::new(create_test_date());

    assert_eq!(state.phase, FormPhase::Editing);
    assert_eq!(state.draft.check_in_date, "2026-03-14");
    assert_eq!(state.draft.room_type, RoomType::Standard);
    assert_eq!(state.draft.primary_guest.identity.id_type, IdType::Aadhaar);
    assert!(state.draft.secondary_guests.is_empty());
    assert!(state.errors.is_empty());
}

#[test]
fn test_update_field_returns_new_state() {
    let state: State = State::new(create_test_date());
    let command: Command = Command::UpdateField {
        field: FormField::PrimaryGuestName,
        value: String::from("Arjun Mehta"),
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command);

    let transition: TransitionResult = result.unwrap();
    assert_eq!(transition.outcome, TransitionOutcome::DraftUpdated);
    assert_eq!(transition.new_state.draft.primary_guest.full_name, "Arjun Mehta");
    // The input state is untouched.
    assert_eq!(state.draft.primary_guest.full_name, "");
}

#[test]
fn test_update_field_does_not_validate() {
    let state: State = State::new(create_test_date());

    let new_state: State = update_field(&state, FormField::PrimaryGuestPhone, "12");

    assert_eq!(new_state.draft.primary_guest.phone, "12");
    assert!(new_state.errors.is_empty());
}

#[test]
fn test_update_field_rejects_image_field() {
    let state: State = State::new(create_test_date());
    let command: Command = Command::UpdateField {
        field: FormField::PrimaryGuestIdBackImage,
        value: String::from("back.png"),
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command);

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::NotATextField {
            field: "primaryGuestIdBackImage"
        })
    );
}

#[test]
fn test_update_field_rejects_unknown_select_value() {
    let state: State = State::new(create_test_date());
    let command: Command = Command::UpdateField {
        field: FormField::PrimaryGuestIdType,
        value: String::from("Library Card"),
    };

    let result: Result<TransitionResult, CoreError> = apply(&state, command);

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::InvalidIdType {
            field: "primaryGuestIdType",
            value: String::from("Library Card"),
        })
    );
}

#[test]
fn test_update_file_uses_first_selected_file() {
    let state: State = State::new(create_test_date());
    let command: Command = Command::UpdateFile {
        field: FormField::PrimaryGuestIdFrontImage,
        files: vec![create_test_image("first.png"), create_test_image("second.png")],
    };

    let new_state: State = apply_ok(&state, command);

    let front = new_state
        .draft
        .primary_guest
        .identity
        .id_front_image
        .unwrap();
    assert_eq!(front.file_name, "first.png");
}

#[test]
fn test_update_file_with_empty_selection_keeps_previous_file() {
    let state: State = apply_ok(
        &State::new(create_test_date()),
        Command::UpdateFile {
            field: FormField::PrimaryGuestIdFrontImage,
            files: vec![create_test_image("kept.png")],
        },
    );

    let result: TransitionResult = apply(
        &state,
        Command::UpdateFile {
            field: FormField::PrimaryGuestIdFrontImage,
            files: Vec::new(),
        },
    )
    .unwrap();

    assert_eq!(result.outcome, TransitionOutcome::SelectionIgnored);
    assert_eq!(result.new_state, state);
}

#[test]
fn test_update_file_rejects_scalar_field() {
    let state: State = State::new(create_test_date());

    for files in [vec![create_test_image("x.png")], Vec::new()] {
        let result: Result<TransitionResult, CoreError> = apply(
            &state,
            Command::UpdateFile {
                field: FormField::Tariff,
                files,
            },
        );
        assert_eq!(
            result.unwrap_err(),
            CoreError::DomainViolation(DomainError::NotAnImageField { field: "tariff" })
        );
    }
}

#[test]
fn test_submit_valid_draft_starts_submission() {
    let state: State = create_valid_state();

    let result: TransitionResult = apply(
        &state,
        Command::Submit {
            submitted_at_millis: 1_700_000_000_000,
            booking_prefix: String::from("KI"),
        },
    )
    .unwrap();

    match result.outcome {
        TransitionOutcome::SubmissionStarted { booking_reference } => {
            assert_eq!(booking_reference.value(), "KI-LOYW3V28");
        }
        other => panic!("expected SubmissionStarted, got {other:?}"),
    }
    assert!(result.new_state.phase.is_submitting());
    assert!(result.new_state.errors.is_empty());
    // The draft is read, not changed, by submission.
    assert_eq!(result.new_state.draft, state.draft);
}

#[test]
fn test_submit_invalid_draft_stores_errors_and_stays_editing() {
    let state: State = update_field(&create_valid_state(), FormField::PrimaryGuestPhone, "123");

    let result: TransitionResult = apply(
        &state,
        Command::Submit {
            submitted_at_millis: 1,
            booking_prefix: String::from("KI"),
        },
    )
    .unwrap();

    assert_eq!(
        result.outcome,
        TransitionOutcome::ValidationFailed { error_count: 1 }
    );
    assert_eq!(result.new_state.phase, FormPhase::Editing);
    assert_eq!(
        result.new_state.errors.field(FormField::PrimaryGuestPhone),
        Some("Enter a valid 10-digit phone number.")
    );
    assert_eq!(result.new_state.errors.len(), 1);
}

#[test]
fn test_resubmit_replaces_errors_instead_of_merging() {
    let state: State = State::new(create_test_date());
    let failed: State = apply_ok(
        &state,
        Command::Submit {
            submitted_at_millis: 1,
            booking_prefix: String::from("KI"),
        },
    );
    assert!(failed.errors.field(FormField::Tariff).is_some());

    let fixed: State = update_field(&failed, FormField::Tariff, "1800");
    let failed_again: State = apply_ok(
        &fixed,
        Command::Submit {
            submitted_at_millis: 2,
            booking_prefix: String::from("KI"),
        },
    );

    assert!(failed_again.errors.field(FormField::Tariff).is_none());
    assert!(
        failed_again
            .errors
            .field(FormField::PrimaryGuestName)
            .is_some()
    );
}

#[test]
fn test_validate_is_pure() {
    let state: State = State::new(create_test_date());

    let errors = state.validate();

    assert!(!errors.is_empty());
    assert!(state.errors.is_empty());
}
