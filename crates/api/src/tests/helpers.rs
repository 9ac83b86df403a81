// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use inn_registration::FormController;
use time::{Date, macros::date};

use crate::{
    FieldValue, FormView, PageView, SelectedFile, UpdateFieldRequest, UpdateFileRequest,
    UpdateGuestFieldRequest, UpdateGuestFileRequest, update_field, update_file,
    update_secondary_guest_field, update_secondary_guest_file,
};

pub const TEST_SUBMITTED_AT_MILLIS: u64 = 1_700_000_000_000;

pub fn create_test_date() -> Date {
    date!(2026 - 03 - 14)
}

pub fn create_test_controller() -> FormController {
    FormController::new(create_test_date(), "KI")
}

pub fn create_test_file(file_name: &str) -> SelectedFile {
    SelectedFile {
        file_name: file_name.to_string(),
        content_type: String::from("image/jpeg"),
        size_bytes: 204_800,
    }
}

pub fn field_request(field: &str, value: &str) -> UpdateFieldRequest {
    UpdateFieldRequest {
        field: field.to_string(),
        value: FieldValue::from(value),
    }
}

pub fn file_request(field: &str, file_name: &str) -> UpdateFileRequest {
    UpdateFileRequest {
        field: field.to_string(),
        files: vec![create_test_file(file_name)],
    }
}

pub fn guest_field_request(field: &str, value: &str) -> UpdateGuestFieldRequest {
    UpdateGuestFieldRequest {
        field: field.to_string(),
        value: FieldValue::from(value),
    }
}

pub fn guest_file_request(field: &str, file_name: &str) -> UpdateGuestFileRequest {
    UpdateGuestFileRequest {
        field: field.to_string(),
        files: vec![create_test_file(file_name)],
    }
}

/// Fills in every required top-level field through the handlers.
pub fn fill_valid_registration(controller: &mut FormController) {
    for (field, value) in [
        ("tariff", "2500"),
        ("primaryGuestName", "Arjun Mehta"),
        ("primaryGuestPhone", "9876543210"),
        ("primaryGuestAddress", "12 Lake Road, Bhopal"),
        ("primaryGuestIdNumber", "1234 5678 9012"),
    ] {
        update_field(controller, field_request(field, value)).unwrap();
    }
    update_file(controller, file_request("primaryGuestIdFrontImage", "front.jpg")).unwrap();
    update_file(controller, file_request("primaryGuestIdBackImage", "back.jpg")).unwrap();
}

/// Fills in every required field of the secondary guest at `index`.
pub fn fill_valid_guest(controller: &mut FormController, index: usize, name: &str) {
    update_secondary_guest_field(controller, index, guest_field_request("name", name)).unwrap();
    update_secondary_guest_field(controller, index, guest_field_request("idNumber", "P7654321"))
        .unwrap();
    update_secondary_guest_file(controller, index, guest_file_request("idFrontImage", "f.png"))
        .unwrap();
    update_secondary_guest_file(controller, index, guest_file_request("idBackImage", "b.png"))
        .unwrap();
}

/// Returns the form view, panicking if the page shows something else.
pub fn expect_form(page: &PageView) -> &FormView {
    match page {
        PageView::Form(form) => form,
        PageView::Success(_) => panic!("expected the form, got the success view"),
    }
}
