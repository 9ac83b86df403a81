// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod handlers;
mod request_response;
mod views;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_secondary_guest, complete_submission, get_registration, get_validation_errors,
    open_registration, remove_secondary_guest, reset_registration, submit_registration,
    update_field, update_file, update_secondary_guest_field, update_secondary_guest_file,
    validate_registration,
};
pub use request_response::{
    AddSecondaryGuestResponse, FieldValue, FormResponse, RemoveSecondaryGuestResponse,
    SelectedFile, SubmitRegistrationResponse, UpdateFieldRequest, UpdateFileRequest,
    UpdateGuestFieldRequest, UpdateGuestFileRequest, ValidationErrorsResponse,
};
pub use views::{
    FieldView, FileFieldView, FormView, GuestBlockView, GuestListView, IMAGE_ACCEPT_HINT,
    InputKind, NO_FILE_CHOSEN, PAGE_INSTRUCTIONS, PAGE_TITLE, PageView, SectionView,
    SelectFieldView, SuccessView, TextFieldView, render,
};
