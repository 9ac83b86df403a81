// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inn_registration_domain::{FormField, GuestField, ImageRef};
use time::Date;

/// A command represents one user action on the form as data only.
///
/// Commands are the only way to change a form's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace one top-level text or select field.
    UpdateField {
        /// The field being edited.
        field: FormField,
        /// The new value.
        value: String,
    },
    /// Replace one top-level image field with the first selected file.
    UpdateFile {
        /// The image field being edited.
        field: FormField,
        /// The picker's selection. Empty when the picker was cancelled.
        files: Vec<ImageRef>,
    },
    /// Append an empty secondary guest block.
    AddSecondaryGuest,
    /// Remove the secondary guest at a position.
    RemoveSecondaryGuest {
        /// Position in the secondary guest list.
        index: usize,
    },
    /// Replace one text or select field of a secondary guest.
    UpdateSecondaryGuestField {
        /// Position in the secondary guest list.
        index: usize,
        /// The field being edited.
        field: GuestField,
        /// The new value.
        value: String,
    },
    /// Replace one image field of a secondary guest with the first selected file.
    UpdateSecondaryGuestFile {
        /// Position in the secondary guest list.
        index: usize,
        /// The image field being edited.
        field: GuestField,
        /// The picker's selection. Empty when the picker was cancelled.
        files: Vec<ImageRef>,
    },
    /// Validate the draft and, if it passes, start submitting it.
    Submit {
        /// Submission time in milliseconds since the Unix epoch.
        submitted_at_millis: u64,
        /// Prefix for the generated booking reference.
        booking_prefix: String,
    },
    /// Finish an in-flight submission once its latency window has elapsed.
    CompleteSubmission,
    /// Discard the completed registration and start a fresh draft.
    ResetForNewRegistration {
        /// Default check-in date for the fresh draft.
        today: Date,
    },
}

impl Command {
    /// Returns a stable name for this command, used in logs and errors.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::UpdateField { .. } => "UpdateField",
            Self::UpdateFile { .. } => "UpdateFile",
            Self::AddSecondaryGuest => "AddSecondaryGuest",
            Self::RemoveSecondaryGuest { .. } => "RemoveSecondaryGuest",
            Self::UpdateSecondaryGuestField { .. } => "UpdateSecondaryGuestField",
            Self::UpdateSecondaryGuestFile { .. } => "UpdateSecondaryGuestFile",
            Self::Submit { .. } => "Submit",
            Self::CompleteSubmission => "CompleteSubmission",
            Self::ResetForNewRegistration { .. } => "ResetForNewRegistration",
        }
    }

    /// Returns whether this command edits the draft.
    ///
    /// Draft edits are accepted while editing and while a submission is in
    /// flight, but not once the registration is complete.
    #[must_use]
    pub const fn is_draft_edit(&self) -> bool {
        matches!(
            self,
            Self::UpdateField { .. }
                | Self::UpdateFile { .. }
                | Self::AddSecondaryGuest
                | Self::RemoveSecondaryGuest { .. }
                | Self::UpdateSecondaryGuestField { .. }
                | Self::UpdateSecondaryGuestFile { .. }
        )
    }
}
