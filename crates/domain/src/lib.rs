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

mod booking_reference;
mod draft;
mod error;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking_reference::{BookingReference, DEFAULT_BOOKING_PREFIX};
pub use draft::{BookingDraft, GuestIdentity, PrimaryGuest, SecondaryGuest};
pub use error::DomainError;
pub use types::{
    ACCEPTED_IMAGE_TYPES, FormField, GuestField, GuestKey, IdType, ImageRef, RoomType,
};
pub use validation::{ValidationErrors, is_valid_email, is_valid_phone, validate_draft};
