// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The owner of one form's state.

use crate::apply::apply;
use crate::command::Command;
use crate::error::CoreError;
use crate::state::{FormPhase, State, TransitionOutcome, TransitionResult};
use inn_registration_domain::{
    BookingReference, FormField, GuestField, ImageRef, ValidationErrors,
};
use time::Date;

/// Owns a form's `State` and applies commands to it in place.
///
/// Every operation goes through `apply`, so a refused command leaves the
/// state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormController {
    state: State,
    booking_prefix: String,
}

impl FormController {
    /// Opens a new form.
    ///
    /// # Arguments
    ///
    /// * `today` - Default check-in date
    /// * `booking_prefix` - Prefix for generated booking references
    #[must_use]
    pub fn new(today: Date, booking_prefix: &str) -> Self {
        Self {
            state: State::new(today),
            booking_prefix: booking_prefix.to_string(),
        }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &State {
        &self.state
    }

    /// Returns the current phase.
    #[must_use]
    pub const fn phase(&self) -> &FormPhase {
        &self.state.phase
    }

    /// Returns the booking prefix this form was opened with.
    #[must_use]
    pub fn booking_prefix(&self) -> &str {
        &self.booking_prefix
    }

    /// Applies a command and keeps the resulting state.
    ///
    /// # Errors
    ///
    /// Returns the error from `apply`; the state is unchanged in that case.
    pub fn execute(&mut self, command: Command) -> Result<TransitionOutcome, CoreError> {
        let result: TransitionResult = apply(&self.state, command)?;
        self.state = result.new_state;
        Ok(result.outcome)
    }

    /// Replaces one top-level text or select field.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn update_field(
        &mut self,
        field: FormField,
        value: String,
    ) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::UpdateField { field, value })
    }

    /// Replaces one top-level image field with the first selected file.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn update_file(
        &mut self,
        field: FormField,
        files: Vec<ImageRef>,
    ) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::UpdateFile { field, files })
    }

    /// Appends an empty secondary guest.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn add_secondary_guest(&mut self) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::AddSecondaryGuest)
    }

    /// Removes the secondary guest at `index`.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn remove_secondary_guest(&mut self, index: usize) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::RemoveSecondaryGuest { index })
    }

    /// Replaces one text or select field of a secondary guest.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn update_secondary_guest_field(
        &mut self,
        index: usize,
        field: GuestField,
        value: String,
    ) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::UpdateSecondaryGuestField {
            index,
            field,
            value,
        })
    }

    /// Replaces one image field of a secondary guest with the first selected file.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn update_secondary_guest_file(
        &mut self,
        index: usize,
        field: GuestField,
        files: Vec<ImageRef>,
    ) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::UpdateSecondaryGuestFile {
            index,
            field,
            files,
        })
    }

    /// Runs the field rules without storing the result.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        self.state.validate()
    }

    /// Validates the draft and starts submitting it if it passes.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`]. A failing draft is not an error; it
    /// yields `TransitionOutcome::ValidationFailed`.
    pub fn submit(&mut self, submitted_at_millis: u64) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::Submit {
            submitted_at_millis,
            booking_prefix: self.booking_prefix.clone(),
        })
    }

    /// Finishes the in-flight submission.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn complete_submission(&mut self) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::CompleteSubmission)
    }

    /// Starts a fresh registration after a completed one.
    ///
    /// # Errors
    ///
    /// See [`FormController::execute`].
    pub fn reset_for_new_registration(
        &mut self,
        today: Date,
    ) -> Result<TransitionOutcome, CoreError> {
        self.execute(Command::ResetForNewRegistration { today })
    }

    /// Returns the reference of the completed registration, if any.
    #[must_use]
    pub const fn completed_booking_reference(&self) -> Option<&BookingReference> {
        self.state.phase.completed_reference()
    }
}
