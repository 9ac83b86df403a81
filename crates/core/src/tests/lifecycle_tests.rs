// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for the Editing → Submitting → Completed → Editing cycle.
//!
//! These tests verify that each phase accepts exactly the commands it should
//! and refuses the rest with `CoreError::InvalidPhase`.

use crate::tests::helpers::{
    add_complete_guest, apply_ok, create_test_date, create_valid_state, submit_command,
    update_field,
};
use crate::{Command, CoreError, FormPhase, State, TransitionOutcome, TransitionResult, apply};
use inn_registration_domain::{BookingReference, FormField};
use time::{Date, macros::date};

fn submitting_state() -> State {
    apply_ok(&create_valid_state(), submit_command())
}

fn completed_state() -> State {
    apply_ok(&submitting_state(), Command::CompleteSubmission)
}

#[test]
fn test_full_cycle_editing_submitting_completed_editing() {
    let editing: State = add_complete_guest(&create_valid_state(), "Meera Sharma");
    assert_eq!(editing.phase.as_str(), "Editing");

    let submitting: State = apply_ok(&editing, submit_command());
    assert_eq!(submitting.phase.as_str(), "Submitting");

    let completed: TransitionResult = apply(&submitting, Command::CompleteSubmission).unwrap();
    let reference: BookingReference = match completed.outcome {
        TransitionOutcome::SubmissionCompleted { booking_reference } => booking_reference,
        other => panic!("expected SubmissionCompleted, got {other:?}"),
    };
    assert!(!reference.value().is_empty());
    assert_eq!(
        completed.new_state.phase.completed_reference(),
        Some(&reference)
    );

    let today: Date = date!(2026 - 03 - 15);
    let reset: TransitionResult = apply(
        &completed.new_state,
        Command::ResetForNewRegistration { today },
    )
    .unwrap();
    assert_eq!(reset.outcome, TransitionOutcome::Reset);
    assert_eq!(reset.new_state.phase, FormPhase::Editing);
    assert!(reset.new_state.draft.secondary_guests.is_empty());
    assert_eq!(reset.new_state.draft.check_in_date, "2026-03-15");
    assert_eq!(reset.new_state.draft.tariff, "");
    assert!(reset.new_state.errors.is_empty());
    assert!(reset.new_state.phase.completed_reference().is_none());
}

#[test]
fn test_reference_is_kept_from_submit_to_completion() {
    let submitting: State = submitting_state();
    let FormPhase::Submitting { booking_reference } = submitting.phase.clone() else {
        panic!("expected Submitting");
    };

    let completed: State = apply_ok(&submitting, Command::CompleteSubmission);

    assert_eq!(
        completed.phase,
        FormPhase::Completed { booking_reference }
    );
}

#[test]
fn test_invalid_submit_produces_no_reference() {
    let state: State = update_field(&create_valid_state(), FormField::Tariff, "");

    let result: TransitionResult = apply(&state, submit_command()).unwrap();

    assert_eq!(result.new_state.phase, FormPhase::Editing);
    assert!(result.new_state.phase.completed_reference().is_none());
    assert_eq!(
        result.new_state.errors.field(FormField::Tariff),
        Some("Tariff is required.")
    );
}

#[test]
fn test_submit_while_submitting_is_refused() {
    let result: Result<TransitionResult, CoreError> = apply(&submitting_state(), submit_command());

    assert_eq!(
        result.unwrap_err(),
        CoreError::InvalidPhase {
            command: "Submit",
            phase: "Submitting"
        }
    );
}

#[test]
fn test_edits_are_accepted_while_submitting() {
    let state: State = update_field(&submitting_state(), FormField::PrimaryGuestEmail, "a@b.com");

    assert!(state.phase.is_submitting());
    assert_eq!(state.draft.primary_guest.email, "a@b.com");
}

#[test]
fn test_complete_while_editing_is_refused() {
    let result: Result<TransitionResult, CoreError> =
        apply(&create_valid_state(), Command::CompleteSubmission);

    assert_eq!(
        result.unwrap_err(),
        CoreError::InvalidPhase {
            command: "CompleteSubmission",
            phase: "Editing"
        }
    );
}

#[test]
fn test_complete_twice_is_refused() {
    let result: Result<TransitionResult, CoreError> =
        apply(&completed_state(), Command::CompleteSubmission);

    assert!(matches!(result, Err(CoreError::InvalidPhase { .. })));
}

#[test]
fn test_edits_after_completion_are_refused() {
    let state: State = completed_state();

    for command in [
        Command::AddSecondaryGuest,
        Command::UpdateField {
            field: FormField::Tariff,
            value: String::from("1"),
        },
        submit_command(),
    ] {
        let result: Result<TransitionResult, CoreError> = apply(&state, command);
        assert!(
            matches!(
                result,
                Err(CoreError::InvalidPhase {
                    phase: "Completed",
                    ..
                })
            ),
            "unexpected result {result:?}"
        );
    }
}

#[test]
fn test_reset_before_completion_is_refused() {
    for state in [State::new(create_test_date()), submitting_state()] {
        let result: Result<TransitionResult, CoreError> = apply(
            &state,
            Command::ResetForNewRegistration {
                today: create_test_date(),
            },
        );
        assert!(matches!(
            result,
            Err(CoreError::InvalidPhase {
                command: "ResetForNewRegistration",
                ..
            })
        ));
    }
}

#[test]
fn test_core_error_display() {
    let err: CoreError = CoreError::InvalidPhase {
        command: "Submit",
        phase: "Submitting",
    };
    assert_eq!(
        format!("{err}"),
        "Command 'Submit' is not allowed while Submitting"
    );
}
