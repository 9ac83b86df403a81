// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, FormController, State, TransitionResult, apply};
use inn_registration_domain::{FormField, GuestField, ImageRef};
use time::{Date, macros::date};

pub const TEST_SUBMITTED_AT_MILLIS: u64 = 1_700_000_000_000;

pub fn create_test_date() -> Date {
    date!(2026 - 03 - 14)
}

pub fn create_test_image(file_name: &str) -> ImageRef {
    ImageRef::new(file_name, "image/png", 51_200)
}

/// Applies `command` and returns the new state, panicking if it is refused.
pub fn apply_ok(state: &State, command: Command) -> State {
    let result: TransitionResult = apply(state, command).unwrap();
    result.new_state
}

pub fn update_field(state: &State, field: FormField, value: &str) -> State {
    apply_ok(
        state,
        Command::UpdateField {
            field,
            value: value.to_string(),
        },
    )
}

pub fn update_file(state: &State, field: FormField, file_name: &str) -> State {
    apply_ok(
        state,
        Command::UpdateFile {
            field,
            files: vec![create_test_image(file_name)],
        },
    )
}

/// A freshly opened form whose draft passes every rule.
pub fn create_valid_state() -> State {
    let mut state: State = State::new(create_test_date());
    state = update_field(&state, FormField::Tariff, "2500");
    state = update_field(&state, FormField::PrimaryGuestName, "Arjun Mehta");
    state = update_field(&state, FormField::PrimaryGuestPhone, "9876543210");
    state = update_field(&state, FormField::PrimaryGuestAddress, "12 Lake Road, Bhopal");
    state = update_field(&state, FormField::PrimaryGuestIdNumber, "1234 5678 9012");
    state = update_file(&state, FormField::PrimaryGuestIdFrontImage, "front.png");
    update_file(&state, FormField::PrimaryGuestIdBackImage, "back.png")
}

/// Appends a secondary guest with every required field filled in.
pub fn add_complete_guest(state: &State, name: &str) -> State {
    let mut new_state: State = apply_ok(state, Command::AddSecondaryGuest);
    let index: usize = new_state.draft.secondary_guests.len() - 1;
    for (field, value) in [(GuestField::Name, name), (GuestField::IdNumber, "P7654321")] {
        new_state = apply_ok(
            &new_state,
            Command::UpdateSecondaryGuestField {
                index,
                field,
                value: value.to_string(),
            },
        );
    }
    for field in [GuestField::IdFrontImage, GuestField::IdBackImage] {
        new_state = apply_ok(
            &new_state,
            Command::UpdateSecondaryGuestFile {
                index,
                field,
                files: vec![create_test_image("guest.png")],
            },
        );
    }
    new_state
}

pub fn submit_command() -> Command {
    Command::Submit {
        submitted_at_millis: TEST_SUBMITTED_AT_MILLIS,
        booking_prefix: String::from("KI"),
    }
}

pub fn create_test_controller() -> FormController {
    FormController::new(create_test_date(), "KI")
}
