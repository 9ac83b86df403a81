// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use inn_registration_domain::{
    BookingDraft, BookingReference, GuestKey, ValidationErrors, validate_draft,
};
use time::Date;

/// Where a form is in its lifecycle.
///
/// Valid transitions are:
/// - `Editing` → `Submitting` (submit with a valid draft)
/// - `Submitting` → `Completed` (latency window elapsed)
/// - `Completed` → `Editing` (reset for a new registration)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormPhase {
    /// The clerk is filling in the form.
    #[default]
    Editing,
    /// The draft passed validation and is being submitted.
    Submitting {
        /// The reference that will be shown once submission completes.
        booking_reference: BookingReference,
    },
    /// The registration went through.
    Completed {
        /// The reference shown to the guest.
        booking_reference: BookingReference,
    },
}

impl FormPhase {
    /// Returns a short name for this phase.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Editing => "Editing",
            Self::Submitting { .. } => "Submitting",
            Self::Completed { .. } => "Completed",
        }
    }

    /// Returns whether a submission is in flight.
    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting { .. })
    }

    /// Returns the reference of a completed registration.
    #[must_use]
    pub const fn completed_reference(&self) -> Option<&BookingReference> {
        match self {
            Self::Completed { booking_reference } => Some(booking_reference),
            Self::Editing | Self::Submitting { .. } => None,
        }
    }
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The complete state of one registration form.
///
/// This is the single source of truth for the draft and its errors. It is
/// only ever replaced through `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    /// The registration being filled in.
    pub draft: BookingDraft,
    /// Errors from the most recent failed submit.
    pub errors: ValidationErrors,
    /// Lifecycle phase.
    pub phase: FormPhase,
    /// Sequence number for the next secondary guest key.
    ///
    /// Never decreases, so removed keys are never handed out again.
    pub(crate) next_guest_sequence: u64,
}

impl State {
    /// Creates the state of a freshly opened form.
    ///
    /// # Arguments
    ///
    /// * `today` - Default check-in date
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            draft: BookingDraft::new(today),
            errors: ValidationErrors::new(),
            phase: FormPhase::Editing,
            next_guest_sequence: 1,
        }
    }

    /// Runs the field rules against the current draft.
    ///
    /// Pure; neither the draft nor the stored errors change.
    #[must_use]
    pub fn validate(&self) -> ValidationErrors {
        validate_draft(&self.draft)
    }

    /// Hands out the next secondary guest key.
    pub(crate) fn allocate_guest_key(&mut self) -> GuestKey {
        let key: GuestKey = GuestKey::from_sequence(self.next_guest_sequence);
        self.next_guest_sequence += 1;
        key
    }
}

/// What a successful transition did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// A field of the draft was replaced.
    DraftUpdated,
    /// A file picker was cancelled; the previous file, if any, was kept.
    SelectionIgnored,
    /// A secondary guest block was appended.
    GuestAdded {
        /// Position of the new guest.
        index: usize,
        /// Key of the new guest.
        key: GuestKey,
    },
    /// A secondary guest block was removed.
    GuestRemoved {
        /// Key of the removed guest.
        key: GuestKey,
    },
    /// Submit was refused; the errors are now in the state.
    ValidationFailed {
        /// Number of failing fields.
        error_count: usize,
    },
    /// Submit was accepted and the latency window has started.
    SubmissionStarted {
        /// The reference being submitted.
        booking_reference: BookingReference,
    },
    /// The in-flight submission finished.
    SubmissionCompleted {
        /// The reference shown to the guest.
        booking_reference: BookingReference,
    },
    /// A fresh draft replaced the completed registration.
    Reset,
}

/// The result of a successful state transition.
///
/// Transitions are atomic: they either succeed completely or fail without side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new state after the transition.
    pub new_state: State,
    /// What the transition did.
    pub outcome: TransitionOutcome,
}
