// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::state::{FormPhase, State, TransitionOutcome, TransitionResult};
use inn_registration_domain::{
    BookingDraft, BookingReference, DomainError, GuestKey, ImageRef, SecondaryGuest,
    ValidationErrors,
};

/// Applies a command to the form state, producing a new state.
///
/// This function is pure: the input state is never modified, and a refused
/// command leaves no trace.
///
/// # Arguments
///
/// * `state` - The current form state (immutable)
/// * `command` - The user action to apply
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new state and what changed
/// * `Err(CoreError)` if the command is refused
///
/// # Errors
///
/// Returns an error if:
/// - The command is not accepted in the current phase
/// - A field name does not fit the value or selection sent to it
/// - A select value is not one of its options
/// - A secondary guest index is out of range
pub fn apply(state: &State, command: Command) -> Result<TransitionResult, CoreError> {
    check_phase(&state.phase, &command)?;

    let mut new_state: State = state.clone();

    let outcome: TransitionOutcome = match command {
        Command::UpdateField { field, value } => {
            new_state.draft.set_value(field, value)?;
            TransitionOutcome::DraftUpdated
        }
        Command::UpdateFile { field, files } => match first_selected(files) {
            Some(image) => {
                new_state.draft.set_image(field, image)?;
                TransitionOutcome::DraftUpdated
            }
            None => {
                // Still refuse a selection aimed at a non-image field.
                if !field.is_image() {
                    return Err(CoreError::DomainViolation(DomainError::NotAnImageField {
                        field: field.as_str(),
                    }));
                }
                TransitionOutcome::SelectionIgnored
            }
        },
        Command::AddSecondaryGuest => {
            let key: GuestKey = new_state.allocate_guest_key();
            new_state
                .draft
                .secondary_guests
                .push(SecondaryGuest::new(key.clone()));
            TransitionOutcome::GuestAdded {
                index: new_state.draft.secondary_guests.len() - 1,
                key,
            }
        }
        Command::RemoveSecondaryGuest { index } => {
            let removed: SecondaryGuest = new_state.draft.remove_secondary_guest(index)?;
            // Errors are keyed by position; entries at or after `index` no longer line up.
            new_state
                .errors
                .secondary_guests
                .retain(|&error_index, _| error_index < index);
            TransitionOutcome::GuestRemoved { key: removed.key }
        }
        Command::UpdateSecondaryGuestField {
            index,
            field,
            value,
        } => {
            new_state
                .draft
                .secondary_guest_mut(index)?
                .set_value(field, value)?;
            TransitionOutcome::DraftUpdated
        }
        Command::UpdateSecondaryGuestFile {
            index,
            field,
            files,
        } => {
            let guest: &mut SecondaryGuest = new_state.draft.secondary_guest_mut(index)?;
            match first_selected(files) {
                Some(image) => {
                    guest.set_image(field, image)?;
                    TransitionOutcome::DraftUpdated
                }
                None => {
                    if !field.is_image() {
                        return Err(CoreError::DomainViolation(DomainError::NotAnImageField {
                            field: field.as_str(),
                        }));
                    }
                    TransitionOutcome::SelectionIgnored
                }
            }
        }
        Command::Submit {
            submitted_at_millis,
            booking_prefix,
        } => {
            let errors: ValidationErrors = new_state.validate();
            if errors.is_empty() {
                let booking_reference: BookingReference =
                    BookingReference::from_timestamp(&booking_prefix, submitted_at_millis);
                new_state.errors = errors;
                new_state.phase = FormPhase::Submitting {
                    booking_reference: booking_reference.clone(),
                };
                TransitionOutcome::SubmissionStarted { booking_reference }
            } else {
                let error_count: usize = errors.len();
                new_state.errors = errors;
                TransitionOutcome::ValidationFailed { error_count }
            }
        }
        Command::CompleteSubmission => {
            let booking_reference: BookingReference = match &new_state.phase {
                FormPhase::Submitting { booking_reference } => booking_reference.clone(),
                // check_phase only lets this command through while submitting
                FormPhase::Editing | FormPhase::Completed { .. } => {
                    return Err(invalid_phase("CompleteSubmission", &new_state.phase));
                }
            };
            new_state.phase = FormPhase::Completed {
                booking_reference: booking_reference.clone(),
            };
            TransitionOutcome::SubmissionCompleted { booking_reference }
        }
        Command::ResetForNewRegistration { today } => {
            new_state.draft = BookingDraft::new(today);
            new_state.errors = ValidationErrors::new();
            new_state.phase = FormPhase::Editing;
            TransitionOutcome::Reset
        }
    };

    Ok(TransitionResult { new_state, outcome })
}

/// Refuses commands that the current phase does not accept.
fn check_phase(phase: &FormPhase, command: &Command) -> Result<(), CoreError> {
    let allowed: bool = match command {
        Command::Submit { .. } => matches!(phase, FormPhase::Editing),
        Command::CompleteSubmission => phase.is_submitting(),
        Command::ResetForNewRegistration { .. } => matches!(phase, FormPhase::Completed { .. }),
        _ => command.is_draft_edit() && !matches!(phase, FormPhase::Completed { .. }),
    };

    if allowed {
        Ok(())
    } else {
        Err(invalid_phase(command.name(), phase))
    }
}

const fn invalid_phase(command: &'static str, phase: &FormPhase) -> CoreError {
    CoreError::InvalidPhase {
        command,
        phase: phase.as_str(),
    }
}

/// Picks the file a picker change applies: the first one selected.
fn first_selected(files: Vec<ImageRef>) -> Option<ImageRef> {
    files.into_iter().next()
}
