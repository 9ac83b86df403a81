// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{FormField, GuestField, GuestKey, IdType, ImageRef, RoomType};
use serde::{Deserialize, Serialize};
use time::Date;

/// Identity document details shared by the primary and secondary guests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GuestIdentity {
    /// The kind of document presented.
    pub id_type: IdType,
    /// The document number as typed.
    pub id_number: String,
    /// Scan of the document's front side.
    pub id_front_image: Option<ImageRef>,
    /// Scan of the document's back side.
    pub id_back_image: Option<ImageRef>,
}

/// The guest the booking is made under.
///
/// Carries contact details on top of the identity block.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PrimaryGuest {
    /// Full name.
    pub full_name: String,
    /// Mobile number, expected as exactly ten digits.
    pub phone: String,
    /// Optional email address. Empty when not given.
    pub email: String,
    /// Postal address.
    pub address: String,
    /// Identity document details.
    pub identity: GuestIdentity,
}

/// An additional guest on the same booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecondaryGuest {
    /// Stable key for list addressing.
    pub key: GuestKey,
    /// Full name.
    pub full_name: String,
    /// Identity document details.
    pub identity: GuestIdentity,
}

impl SecondaryGuest {
    /// Creates an empty secondary guest with the default ID type.
    ///
    /// # Arguments
    ///
    /// * `key` - The key assigned by the form controller
    #[must_use]
    pub fn new(key: GuestKey) -> Self {
        Self {
            key,
            full_name: String::new(),
            identity: GuestIdentity::default(),
        }
    }

    /// Replaces one text or select field of this guest.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `field` is an image field
    /// - `field` is the ID type and `value` is not a known ID type
    pub fn set_value(&mut self, field: GuestField, value: String) -> Result<(), DomainError> {
        match field {
            GuestField::Name => self.full_name = value,
            GuestField::IdType => self.identity.id_type = value.parse()?,
            GuestField::IdNumber => self.identity.id_number = value,
            GuestField::IdFrontImage | GuestField::IdBackImage => {
                return Err(DomainError::NotATextField {
                    field: field.as_str(),
                });
            }
        }
        Ok(())
    }

    /// Replaces one image field of this guest.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is not an image field.
    pub fn set_image(&mut self, field: GuestField, image: ImageRef) -> Result<(), DomainError> {
        match field {
            GuestField::IdFrontImage => self.identity.id_front_image = Some(image),
            GuestField::IdBackImage => self.identity.id_back_image = Some(image),
            GuestField::Name | GuestField::IdType | GuestField::IdNumber => {
                return Err(DomainError::NotAnImageField {
                    field: field.as_str(),
                });
            }
        }
        Ok(())
    }
}

/// The full in-progress registration for one booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingDraft {
    /// Check-in date as entered, normally `YYYY-MM-DD`.
    pub check_in_date: String,
    /// Selected room category.
    pub room_type: RoomType,
    /// Nightly tariff as entered. Empty until the clerk types one.
    pub tariff: String,
    /// The guest the booking is made under.
    pub primary_guest: PrimaryGuest,
    /// Additional guests, in display order.
    pub secondary_guests: Vec<SecondaryGuest>,
}

impl BookingDraft {
    /// Creates the default draft for a check-in on `today`.
    ///
    /// Room type and ID type start at the first offered option; every other
    /// field starts empty and there are no secondary guests.
    #[must_use]
    pub fn new(today: Date) -> Self {
        Self {
            check_in_date: format_check_in_date(today),
            room_type: RoomType::default(),
            tariff: String::new(),
            primary_guest: PrimaryGuest::default(),
            secondary_guests: Vec::new(),
        }
    }

    /// Replaces one top-level text or select field.
    ///
    /// # Arguments
    ///
    /// * `field` - The field to replace
    /// * `value` - The new value, as typed or selected
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `field` is an image field
    /// - `field` is a select field and `value` is not one of its options
    pub fn set_value(&mut self, field: FormField, value: String) -> Result<(), DomainError> {
        match field {
            FormField::CheckInDate => self.check_in_date = value,
            FormField::RoomType => self.room_type = value.parse()?,
            FormField::Tariff => self.tariff = value,
            FormField::PrimaryGuestName => self.primary_guest.full_name = value,
            FormField::PrimaryGuestPhone => self.primary_guest.phone = value,
            FormField::PrimaryGuestEmail => self.primary_guest.email = value,
            FormField::PrimaryGuestAddress => self.primary_guest.address = value,
            FormField::PrimaryGuestIdType => {
                self.primary_guest.identity.id_type = parse_id_type(field, &value)?;
            }
            FormField::PrimaryGuestIdNumber => self.primary_guest.identity.id_number = value,
            FormField::PrimaryGuestIdFrontImage | FormField::PrimaryGuestIdBackImage => {
                return Err(DomainError::NotATextField {
                    field: field.as_str(),
                });
            }
        }
        Ok(())
    }

    /// Replaces one top-level image field.
    ///
    /// # Errors
    ///
    /// Returns an error if `field` is not an image field.
    pub fn set_image(&mut self, field: FormField, image: ImageRef) -> Result<(), DomainError> {
        match field {
            FormField::PrimaryGuestIdFrontImage => {
                self.primary_guest.identity.id_front_image = Some(image);
            }
            FormField::PrimaryGuestIdBackImage => {
                self.primary_guest.identity.id_back_image = Some(image);
            }
            _ => {
                return Err(DomainError::NotAnImageField {
                    field: field.as_str(),
                });
            }
        }
        Ok(())
    }

    /// Returns a mutable reference to the secondary guest at `index`.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no secondary guest at `index`.
    pub fn secondary_guest_mut(&mut self, index: usize) -> Result<&mut SecondaryGuest, DomainError> {
        let len: usize = self.secondary_guests.len();
        self.secondary_guests
            .get_mut(index)
            .ok_or(DomainError::GuestIndexOutOfRange { index, len })
    }

    /// Removes and returns the secondary guest at `index`.
    ///
    /// Guests after `index` move up by one position.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no secondary guest at `index`.
    pub fn remove_secondary_guest(&mut self, index: usize) -> Result<SecondaryGuest, DomainError> {
        let len: usize = self.secondary_guests.len();
        if index >= len {
            return Err(DomainError::GuestIndexOutOfRange { index, len });
        }
        Ok(self.secondary_guests.remove(index))
    }
}

/// Parses an ID type sent to a top-level field, naming that field on failure.
fn parse_id_type(field: FormField, value: &str) -> Result<IdType, DomainError> {
    value
        .parse()
        .map_err(|_: DomainError| DomainError::InvalidIdType {
            field: field.as_str(),
            value: value.to_string(),
        })
}

/// Formats a date the way a date input reports it.
fn format_check_in_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}
