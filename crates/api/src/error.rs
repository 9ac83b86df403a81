// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use inn_registration::CoreError;
use inn_registration_domain::{DomainError, ValidationErrors};

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// The form is not in a phase that accepts the request.
    InvalidState {
        /// A human-readable description of the conflict.
        message: String,
    },
    /// Submit was refused because fields failed validation.
    ValidationFailed {
        /// Every failing field, from one complete validation pass.
        errors: ValidationErrors,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::InvalidState { message } => write!(f, "Invalid state: {message}"),
            Self::ValidationFailed { errors } => {
                write!(
                    f,
                    "Registration is incomplete: {} field(s) need attention",
                    errors.len()
                )
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let message: String = err.to_string();
    match err {
        DomainError::UnknownField(name) | DomainError::UnknownGuestField(name) => {
            ApiError::InvalidInput {
                field: name,
                message,
            }
        }
        DomainError::NotATextField { field }
        | DomainError::NotAnImageField { field }
        | DomainError::InvalidIdType { field, .. } => {
            ApiError::InvalidInput {
                field: field.to_string(),
                message,
            }
        }
        DomainError::InvalidRoomType(_) => ApiError::InvalidInput {
            field: String::from("roomType"),
            message,
        },
        DomainError::GuestIndexOutOfRange { .. } => ApiError::InvalidInput {
            field: String::from("index"),
            message,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::InvalidPhase { .. } => ApiError::InvalidState {
            message: err.to_string(),
        },
    }
}
