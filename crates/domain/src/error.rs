// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised when a change request cannot be mapped onto the draft.
///
/// Field validation failures are not errors; they are reported through
/// `ValidationErrors`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The top-level field name is not part of the form.
    UnknownField(String),
    /// The secondary guest field name is not part of a guest block.
    UnknownGuestField(String),
    /// A text value was sent to an image field.
    NotATextField {
        /// The wire name of the field.
        field: &'static str,
    },
    /// A file selection was sent to a text or select field.
    NotAnImageField {
        /// The wire name of the field.
        field: &'static str,
    },
    /// The room type is not one of the offered categories.
    InvalidRoomType(String),
    /// The ID type is not one of the accepted documents.
    InvalidIdType {
        /// The wire name of the field the value was sent to.
        field: &'static str,
        /// The rejected value.
        value: String,
    },
    /// No secondary guest exists at the given position.
    GuestIndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current number of secondary guests.
        len: usize,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownField(name) => write!(f, "Unknown form field '{name}'"),
            Self::UnknownGuestField(name) => write!(f, "Unknown guest field '{name}'"),
            Self::NotATextField { field } => {
                write!(f, "Field '{field}' expects a file selection, not a value")
            }
            Self::NotAnImageField { field } => {
                write!(f, "Field '{field}' expects a value, not a file selection")
            }
            Self::InvalidRoomType(value) => write!(f, "Invalid room type: '{value}'"),
            Self::InvalidIdType { value, .. } => write!(f, "Invalid ID type: '{value}'"),
            Self::GuestIndexOutOfRange { index, len } => {
                write!(
                    f,
                    "No secondary guest at index {index} (there are {len} secondary guests)"
                )
            }
        }
    }
}

impl std::error::Error for DomainError {}
