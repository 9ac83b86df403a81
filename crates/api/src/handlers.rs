// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for registration form operations.
//!
//! Each handler translates one request into a form command, applies it to
//! the caller's `FormController`, and renders the resulting page.

use inn_registration::{FormController, FormPhase, TransitionOutcome};
use inn_registration_domain::{BookingDraft, FormField, GuestField, ImageRef};
use time::Date;
use tracing::{debug, info, warn};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AddSecondaryGuestResponse, FormResponse, RemoveSecondaryGuestResponse, SelectedFile,
    SubmitRegistrationResponse, UpdateFieldRequest, UpdateFileRequest, UpdateGuestFieldRequest,
    UpdateGuestFileRequest, ValidationErrorsResponse,
};
use crate::views::render;

/// Opens a new registration form.
///
/// # Arguments
///
/// * `today` - Default check-in date
/// * `booking_prefix` - Prefix for the booking reference
///
/// # Returns
///
/// The form's controller and the page to display.
#[must_use]
pub fn open_registration(today: Date, booking_prefix: &str) -> (FormController, FormResponse) {
    let controller: FormController = FormController::new(today, booking_prefix);
    let response: FormResponse = form_response(&controller, "Registration form opened");
    (controller, response)
}

/// Returns the page for the form's current state.
#[must_use]
pub fn get_registration(controller: &FormController) -> FormResponse {
    let message: String = match controller.phase() {
        FormPhase::Editing => String::from("Registration in progress"),
        FormPhase::Submitting { .. } => String::from("Registration is being submitted"),
        FormPhase::Completed { .. } => String::from("Registration completed"),
    };
    form_response(controller, &message)
}

/// Replaces one top-level text or select field.
///
/// Numbers are stored in their string form. No validation runs.
///
/// # Arguments
///
/// * `controller` - The form to update
/// * `request` - The field's wire name and its new value
///
/// # Errors
///
/// Returns an error if:
/// - The field name is unknown or names an image field
/// - A room type or ID type value is not one of the offered options
/// - The registration has already completed
pub fn update_field(
    controller: &mut FormController,
    request: UpdateFieldRequest,
) -> Result<FormResponse, ApiError> {
    let field: FormField = request.field.parse().map_err(translate_domain_error)?;

    controller
        .update_field(field, request.value.into_text())
        .map_err(translate_core_error)?;

    debug!(field = %field, "Updated form field");
    Ok(form_response(controller, &format!("Updated {field}")))
}

/// Applies a file picker change to a top-level image field.
///
/// The first selected file replaces the previous one; an empty selection
/// keeps it.
///
/// # Errors
///
/// Returns an error if:
/// - The field name is unknown or names a text or select field
/// - The registration has already completed
pub fn update_file(
    controller: &mut FormController,
    request: UpdateFileRequest,
) -> Result<FormResponse, ApiError> {
    let field: FormField = request.field.parse().map_err(translate_domain_error)?;
    let files: Vec<ImageRef> = to_image_refs(field.as_str(), request.files);

    let outcome: TransitionOutcome = controller
        .update_file(field, files)
        .map_err(translate_core_error)?;

    Ok(form_response(
        controller,
        &selection_message(field.as_str(), &outcome),
    ))
}

/// Appends an empty secondary guest.
///
/// # Errors
///
/// Returns an error if the registration has already completed.
pub fn add_secondary_guest(
    controller: &mut FormController,
) -> Result<AddSecondaryGuestResponse, ApiError> {
    let outcome: TransitionOutcome = controller
        .add_secondary_guest()
        .map_err(translate_core_error)?;

    let TransitionOutcome::GuestAdded { index, key } = outcome else {
        return Err(unexpected_outcome("add_secondary_guest", &outcome));
    };

    debug!(index, key = %key, "Added secondary guest");
    Ok(AddSecondaryGuestResponse {
        index,
        key: key.value().to_string(),
        page: render(controller.state()),
    })
}

/// Removes the secondary guest at `index`.
///
/// Later guests move up one position. Removal is immediate.
///
/// # Errors
///
/// Returns an error if:
/// - There is no secondary guest at `index`
/// - The registration has already completed
pub fn remove_secondary_guest(
    controller: &mut FormController,
    index: usize,
) -> Result<RemoveSecondaryGuestResponse, ApiError> {
    let outcome: TransitionOutcome = controller
        .remove_secondary_guest(index)
        .map_err(translate_core_error)?;

    let TransitionOutcome::GuestRemoved { key } = outcome else {
        return Err(unexpected_outcome("remove_secondary_guest", &outcome));
    };

    debug!(index, key = %key, "Removed secondary guest");
    Ok(RemoveSecondaryGuestResponse {
        removed_key: key.value().to_string(),
        page: render(controller.state()),
    })
}

/// Replaces one text or select field of the secondary guest at `index`.
///
/// # Errors
///
/// Returns an error if:
/// - The field name is unknown or names an image field
/// - An ID type value is not one of the offered options
/// - There is no secondary guest at `index`
/// - The registration has already completed
pub fn update_secondary_guest_field(
    controller: &mut FormController,
    index: usize,
    request: UpdateGuestFieldRequest,
) -> Result<FormResponse, ApiError> {
    let field: GuestField = request.field.parse().map_err(translate_domain_error)?;

    controller
        .update_secondary_guest_field(index, field, request.value.into_text())
        .map_err(translate_core_error)?;

    debug!(index, field = %field, "Updated secondary guest field");
    Ok(form_response(
        controller,
        &format!("Updated {field} of secondary guest {}", index + 1),
    ))
}

/// Applies a file picker change to an image field of the secondary guest at `index`.
///
/// # Errors
///
/// Returns an error if:
/// - The field name is unknown or names a text or select field
/// - There is no secondary guest at `index`
/// - The registration has already completed
pub fn update_secondary_guest_file(
    controller: &mut FormController,
    index: usize,
    request: UpdateGuestFileRequest,
) -> Result<FormResponse, ApiError> {
    let field: GuestField = request.field.parse().map_err(translate_domain_error)?;
    let files: Vec<ImageRef> = to_image_refs(field.as_str(), request.files);

    let outcome: TransitionOutcome = controller
        .update_secondary_guest_file(index, field, files)
        .map_err(translate_core_error)?;

    Ok(form_response(
        controller,
        &selection_message(field.as_str(), &outcome),
    ))
}

/// Validates the draft and, if it passes, starts submitting it.
///
/// The caller is responsible for completing the submission once the
/// submission window has elapsed (see [`complete_submission`]).
///
/// # Arguments
///
/// * `controller` - The form to submit
/// * `submitted_at_millis` - Submission time in milliseconds since the Unix epoch
///
/// # Errors
///
/// Returns an error if:
/// - Any field fails validation; the error carries the full error set
/// - A submission is already in flight
/// - The registration has already completed
pub fn submit_registration(
    controller: &mut FormController,
    submitted_at_millis: u64,
) -> Result<SubmitRegistrationResponse, ApiError> {
    let outcome: TransitionOutcome = controller
        .submit(submitted_at_millis)
        .map_err(translate_core_error)?;

    match outcome {
        TransitionOutcome::SubmissionStarted { booking_reference } => {
            log_submission(&booking_reference.to_string(), &controller.state().draft);
            Ok(SubmitRegistrationResponse {
                booking_reference: booking_reference.value().to_string(),
                message: String::from("Registration submitted"),
                page: render(controller.state()),
            })
        }
        TransitionOutcome::ValidationFailed { error_count } => {
            info!(error_count, "Registration failed validation");
            Err(ApiError::ValidationFailed {
                errors: controller.state().errors.clone(),
            })
        }
        other => Err(unexpected_outcome("submit_registration", &other)),
    }
}

/// Finishes an in-flight submission.
///
/// # Returns
///
/// The booking reference now shown to the guest.
///
/// # Errors
///
/// Returns an error if no submission is in flight.
pub fn complete_submission(controller: &mut FormController) -> Result<String, ApiError> {
    let outcome: TransitionOutcome = controller
        .complete_submission()
        .map_err(translate_core_error)?;

    let TransitionOutcome::SubmissionCompleted { booking_reference } = outcome else {
        return Err(unexpected_outcome("complete_submission", &outcome));
    };

    info!(booking_reference = %booking_reference, "Registration completed");
    Ok(booking_reference.value().to_string())
}

/// Starts a fresh registration after a completed one.
///
/// # Arguments
///
/// * `controller` - The completed form
/// * `today` - Default check-in date for the new draft
///
/// # Errors
///
/// Returns an error if the registration has not completed.
pub fn reset_registration(
    controller: &mut FormController,
    today: Date,
) -> Result<FormResponse, ApiError> {
    controller
        .reset_for_new_registration(today)
        .map_err(translate_core_error)?;

    info!("Registration form reset");
    Ok(form_response(controller, "Ready for a new registration"))
}

/// Returns the errors recorded by the most recent failed submit.
#[must_use]
pub fn get_validation_errors(controller: &FormController) -> ValidationErrorsResponse {
    ValidationErrorsResponse::from(controller.state().errors.clone())
}

/// Runs the field rules against the current draft without recording the result.
#[must_use]
pub fn validate_registration(controller: &FormController) -> ValidationErrorsResponse {
    ValidationErrorsResponse::from(controller.validate())
}

fn form_response(controller: &FormController, message: &str) -> FormResponse {
    FormResponse {
        phase: controller.phase().as_str().to_string(),
        message: message.to_string(),
        page: render(controller.state()),
    }
}

/// Converts a picker selection, warning when the file that will be applied
/// is outside the accept hint.
fn to_image_refs(field: &str, files: Vec<SelectedFile>) -> Vec<ImageRef> {
    let images: Vec<ImageRef> = files.into_iter().map(ImageRef::from).collect();
    if let Some(image) = unaccepted_applied_file(&images) {
        warn!(
            field,
            file_name = %image.file_name,
            content_type = %image.content_type,
            "Selected file is not a JPEG or PNG image"
        );
    }
    images
}

/// Returns the applied file (the first one) when its type is not accepted.
#[must_use]
pub fn unaccepted_applied_file(images: &[ImageRef]) -> Option<&ImageRef> {
    images
        .first()
        .filter(|image| !image.is_accepted_image_type())
}

fn selection_message(field: &str, outcome: &TransitionOutcome) -> String {
    if *outcome == TransitionOutcome::SelectionIgnored {
        debug!(field, "Empty file selection ignored");
        format!("No file selected for {field}; previous selection kept")
    } else {
        debug!(field, "Updated file selection");
        format!("Updated {field}")
    }
}

fn log_submission(booking_reference: &str, draft: &BookingDraft) {
    info!(
        booking_reference,
        check_in_date = %draft.check_in_date,
        room_type = %draft.room_type,
        tariff = %draft.tariff,
        primary_guest = %draft.primary_guest.full_name,
        secondary_guests = draft.secondary_guests.len(),
        "Submitting registration"
    );
    debug!(booking_reference, draft = ?draft, "Submitted registration data");
}

fn unexpected_outcome(operation: &str, outcome: &TransitionOutcome) -> ApiError {
    ApiError::InvalidState {
        message: format!("Unexpected outcome from {operation}: {outcome:?}"),
    }
}
