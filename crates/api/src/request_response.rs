// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use inn_registration_domain::{ImageRef, ValidationErrors};

use crate::views::PageView;

/// A value sent for a text or select field.
///
/// Number inputs may arrive as JSON numbers; they are stored in their
/// string form like every other field.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// A value typed or selected as text.
    Text(String),
    /// A value sent as a JSON number.
    Number(f64),
}

impl FieldValue {
    /// Returns the value as the form stores it.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// One file picked in a file input, described by its metadata.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectedFile {
    /// The file's name on the client.
    pub file_name: String,
    /// The declared MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size_bytes: u64,
}

impl From<SelectedFile> for ImageRef {
    fn from(file: SelectedFile) -> Self {
        Self {
            file_name: file.file_name,
            content_type: file.content_type,
            size_bytes: file.size_bytes,
        }
    }
}

/// API request to replace one top-level text or select field.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UpdateFieldRequest {
    /// The field's wire name, e.g. `primaryGuestPhone`.
    pub field: String,
    /// The new value.
    pub value: FieldValue,
}

/// API request reporting a file picker change on a top-level image field.
///
/// An empty `files` list means the picker was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateFileRequest {
    /// The field's wire name, e.g. `primaryGuestIdFrontImage`.
    pub field: String,
    /// The files in the picker's selection, in order.
    #[serde(default)]
    pub files: Vec<SelectedFile>,
}

/// API request to replace one text or select field of a secondary guest.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct UpdateGuestFieldRequest {
    /// The guest field's wire name, e.g. `idNumber`.
    pub field: String,
    /// The new value.
    pub value: FieldValue,
}

/// API request reporting a file picker change on a secondary guest's image field.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UpdateGuestFileRequest {
    /// The guest field's wire name, e.g. `idBackImage`.
    pub field: String,
    /// The files in the picker's selection, in order.
    #[serde(default)]
    pub files: Vec<SelectedFile>,
}

/// API response carrying the form as it should now be displayed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormResponse {
    /// The form's lifecycle phase.
    pub phase: String,
    /// A short description of what happened.
    pub message: String,
    /// The page to display.
    pub page: PageView,
}

/// API response for a successful secondary guest addition.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddSecondaryGuestResponse {
    /// Position of the new guest.
    pub index: usize,
    /// Stable key of the new guest.
    pub key: String,
    /// The page to display.
    pub page: PageView,
}

/// API response for a successful secondary guest removal.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RemoveSecondaryGuestResponse {
    /// Key of the removed guest.
    pub removed_key: String,
    /// The page to display.
    pub page: PageView,
}

/// API response for an accepted submit.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SubmitRegistrationResponse {
    /// The reference the guest will be given.
    pub booking_reference: String,
    /// A success message.
    pub message: String,
    /// The page to display while the submission is in flight.
    pub page: PageView,
}

/// API response listing validation errors.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ValidationErrorsResponse {
    /// Number of failing fields, secondary guests included.
    pub error_count: usize,
    /// The errors, keyed by field wire name and guest index.
    pub errors: ValidationErrors,
}

impl From<ValidationErrors> for ValidationErrorsResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            error_count: errors.len(),
            errors,
        }
    }
}
