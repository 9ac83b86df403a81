// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BookingDraft, GuestKey, ImageRef, SecondaryGuest};
use time::{Date, macros::date};

pub fn create_test_date() -> Date {
    date!(2026 - 03 - 14)
}

pub fn create_test_image(file_name: &str) -> ImageRef {
    ImageRef::new(file_name, "image/jpeg", 48_213)
}

pub fn create_complete_secondary_guest(sequence: u64) -> SecondaryGuest {
    let mut guest: SecondaryGuest = SecondaryGuest::new(GuestKey::from_sequence(sequence));
    guest.full_name = String::from("Meera Sharma");
    guest.identity.id_number = String::from("K1234567");
    guest.identity.id_front_image = Some(create_test_image("meera-front.jpg"));
    guest.identity.id_back_image = Some(create_test_image("meera-back.jpg"));
    guest
}

/// A draft that passes every rule.
pub fn create_valid_draft() -> BookingDraft {
    let mut draft: BookingDraft = BookingDraft::new(create_test_date());
    draft.tariff = String::from("2500");
    draft.primary_guest.full_name = String::from("Arjun Mehta");
    draft.primary_guest.phone = String::from("9876543210");
    draft.primary_guest.email = String::from("arjun@example.com");
    draft.primary_guest.address = String::from("12 Lake Road, Bhopal");
    draft.primary_guest.identity.id_number = String::from("1234 5678 9012");
    draft.primary_guest.identity.id_front_image = Some(create_test_image("aadhaar-front.jpg"));
    draft.primary_guest.identity.id_back_image = Some(create_test_image("aadhaar-back.png"));
    draft
}
