// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::draft::{BookingDraft, PrimaryGuest, SecondaryGuest};
use crate::types::{FormField, GuestField};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is a valid literal"));

#[allow(clippy::expect_used)]
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid literal")
});

/// Error messages keyed by field, for one complete validation pass.
///
/// A value of this type is always rebuilt from scratch; it is never merged
/// with the result of an earlier pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationErrors {
    /// Errors on top-level fields.
    pub fields: BTreeMap<FormField, String>,
    /// Errors per secondary guest, keyed by list index.
    ///
    /// An index is present only when that guest has at least one error.
    pub secondary_guests: BTreeMap<usize, BTreeMap<GuestField, String>>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fields: BTreeMap::new(),
            secondary_guests: BTreeMap::new(),
        }
    }

    /// Returns whether no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.secondary_guests.is_empty()
    }

    /// Returns the total number of failing fields, guests included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
            + self
                .secondary_guests
                .values()
                .map(BTreeMap::len)
                .sum::<usize>()
    }

    /// Returns the error for a top-level field, if any.
    #[must_use]
    pub fn field(&self, field: FormField) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    /// Returns the error for one secondary guest's field, if any.
    #[must_use]
    pub fn guest_field(&self, index: usize, field: GuestField) -> Option<&str> {
        self.secondary_guests
            .get(&index)
            .and_then(|errors| errors.get(&field))
            .map(String::as_str)
    }
}

/// Returns whether `phone` is exactly ten ASCII digits with no separators.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// Returns whether `email` looks like `local@domain.tld`.
///
/// The empty string is not a valid address; callers treat the email field
/// as optional before asking.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Runs every field rule against the draft.
///
/// Rules are independent and all of them run, so every failing field is
/// reported together. Room type and ID type are not checked: they can only
/// hold members of their enumerations.
///
/// # Arguments
///
/// * `draft` - The draft to check
///
/// # Returns
///
/// A fresh `ValidationErrors`; empty when the draft may be submitted.
#[must_use]
pub fn validate_draft(draft: &BookingDraft) -> ValidationErrors {
    let mut errors: ValidationErrors = ValidationErrors::new();
    let guest: &PrimaryGuest = &draft.primary_guest;

    if draft.check_in_date.is_empty() {
        errors.fields.insert(
            FormField::CheckInDate,
            String::from("Check-in date is required."),
        );
    }
    if draft.tariff.is_empty() {
        errors
            .fields
            .insert(FormField::Tariff, String::from("Tariff is required."));
    }
    if guest.full_name.trim().is_empty() {
        errors.fields.insert(
            FormField::PrimaryGuestName,
            String::from("Primary guest name is required."),
        );
    }
    if !is_valid_phone(&guest.phone) {
        errors.fields.insert(
            FormField::PrimaryGuestPhone,
            String::from("Enter a valid 10-digit phone number."),
        );
    }
    // Email is optional; only a non-empty value is checked.
    if !guest.email.is_empty() && !is_valid_email(&guest.email) {
        errors.fields.insert(
            FormField::PrimaryGuestEmail,
            String::from("Enter a valid email address."),
        );
    }
    if guest.address.trim().is_empty() {
        errors.fields.insert(
            FormField::PrimaryGuestAddress,
            String::from("Address is required."),
        );
    }
    if guest.identity.id_number.trim().is_empty() {
        errors.fields.insert(
            FormField::PrimaryGuestIdNumber,
            String::from("ID number is required."),
        );
    }
    if guest.identity.id_front_image.is_none() {
        errors.fields.insert(
            FormField::PrimaryGuestIdFrontImage,
            String::from("Front ID image is required."),
        );
    }
    if guest.identity.id_back_image.is_none() {
        errors.fields.insert(
            FormField::PrimaryGuestIdBackImage,
            String::from("Back ID image is required."),
        );
    }

    for (index, secondary) in draft.secondary_guests.iter().enumerate() {
        let guest_errors: BTreeMap<GuestField, String> = validate_secondary_guest(secondary);
        if !guest_errors.is_empty() {
            errors.secondary_guests.insert(index, guest_errors);
        }
    }

    errors
}

/// Runs the per-guest rules for one secondary guest.
fn validate_secondary_guest(guest: &SecondaryGuest) -> BTreeMap<GuestField, String> {
    let mut errors: BTreeMap<GuestField, String> = BTreeMap::new();

    if guest.full_name.trim().is_empty() {
        errors.insert(GuestField::Name, String::from("Name is required."));
    }
    if guest.identity.id_number.trim().is_empty() {
        errors.insert(GuestField::IdNumber, String::from("ID number is required."));
    }
    if guest.identity.id_front_image.is_none() {
        errors.insert(
            GuestField::IdFrontImage,
            String::from("Front ID image is required."),
        );
    }
    if guest.identity.id_back_image.is_none() {
        errors.insert(
            GuestField::IdBackImage,
            String::from("Back ID image is required."),
        );
    }

    errors
}
