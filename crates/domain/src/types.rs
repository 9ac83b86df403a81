// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Room categories offered at check-in.
///
/// The first variant is the default selection of a fresh draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum RoomType {
    /// Standard room.
    #[default]
    #[serde(rename = "Standard Room")]
    Standard,
    /// Deluxe room.
    #[serde(rename = "Deluxe Room")]
    Deluxe,
    /// Super deluxe room.
    #[serde(rename = "Super Deluxe Room")]
    SuperDeluxe,
    /// Family suite.
    #[serde(rename = "Family Suite")]
    FamilySuite,
}

impl RoomType {
    /// Every room type, in the order the select control lists them.
    pub const ALL: [Self; 4] = [
        Self::Standard,
        Self::Deluxe,
        Self::SuperDeluxe,
        Self::FamilySuite,
    ];

    /// Returns the display label, which is also the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Standard => "Standard Room",
            Self::Deluxe => "Deluxe Room",
            Self::SuperDeluxe => "Super Deluxe Room",
            Self::FamilySuite => "Family Suite",
        }
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|room_type| room_type.as_str() == s)
            .ok_or_else(|| DomainError::InvalidRoomType(s.to_string()))
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identity documents accepted from guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum IdType {
    /// Aadhaar card.
    #[default]
    #[serde(rename = "Aadhaar Card")]
    Aadhaar,
    /// Passport.
    #[serde(rename = "Passport")]
    Passport,
    /// Driving license.
    #[serde(rename = "Driving License")]
    DrivingLicense,
    /// Voter ID card.
    #[serde(rename = "Voter ID")]
    VoterId,
    /// PAN card.
    #[serde(rename = "PAN Card")]
    PanCard,
}

impl IdType {
    /// Every ID type, in the order the select control lists them.
    pub const ALL: [Self; 5] = [
        Self::Aadhaar,
        Self::Passport,
        Self::DrivingLicense,
        Self::VoterId,
        Self::PanCard,
    ];

    /// Returns the display label, which is also the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aadhaar => "Aadhaar Card",
            Self::Passport => "Passport",
            Self::DrivingLicense => "Driving License",
            Self::VoterId => "Voter ID",
            Self::PanCard => "PAN Card",
        }
    }
}

impl FromStr for IdType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|id_type| id_type.as_str() == s)
            .ok_or_else(|| DomainError::InvalidIdType {
                field: GuestField::IdType.as_str(),
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for IdType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Content types the file picker offers for ID scans.
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// A reference to one file chosen for an ID image field.
///
/// The file contents never pass through the draft; only what the form needs
/// to show the selection is kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageRef {
    /// The file name as reported by the picker.
    pub file_name: String,
    /// The MIME type as reported by the picker.
    pub content_type: String,
    /// The file size in bytes.
    pub size_bytes: u64,
}

impl ImageRef {
    /// Creates a new `ImageRef`.
    ///
    /// # Arguments
    ///
    /// * `file_name` - The selected file's name
    /// * `content_type` - The selected file's MIME type
    /// * `size_bytes` - The selected file's size
    #[must_use]
    pub fn new(file_name: &str, content_type: &str, size_bytes: u64) -> Self {
        Self {
            file_name: file_name.to_string(),
            content_type: content_type.to_string(),
            size_bytes,
        }
    }

    /// Returns whether the picker's accept filter would have offered this file.
    ///
    /// This is a presentation hint only. Nothing rejects a file for failing it.
    #[must_use]
    pub fn is_accepted_image_type(&self) -> bool {
        let content_type: String = self.content_type.to_ascii_lowercase();
        ACCEPTED_IMAGE_TYPES.contains(&content_type.as_str())
    }
}

/// Stable identity of a secondary guest block.
///
/// Keys are handed out by the form controller from a counter and are never
/// reused, so a block keeps its key when guests before it are removed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GuestKey {
    value: String,
}

impl GuestKey {
    /// Creates the key for the `sequence`-th secondary guest ever added.
    #[must_use]
    pub fn from_sequence(sequence: u64) -> Self {
        Self {
            value: format!("sg-{sequence}"),
        }
    }

    /// Returns the key value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for GuestKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Top-level form fields, named as the form names its controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    /// Check-in date.
    CheckInDate,
    /// Room type.
    RoomType,
    /// Nightly tariff.
    Tariff,
    /// Primary guest full name.
    PrimaryGuestName,
    /// Primary guest phone number.
    PrimaryGuestPhone,
    /// Primary guest email address.
    PrimaryGuestEmail,
    /// Primary guest postal address.
    PrimaryGuestAddress,
    /// Primary guest ID document type.
    PrimaryGuestIdType,
    /// Primary guest ID document number.
    PrimaryGuestIdNumber,
    /// Primary guest ID front scan.
    PrimaryGuestIdFrontImage,
    /// Primary guest ID back scan.
    PrimaryGuestIdBackImage,
}

impl FormField {
    /// Every top-level field, in form order.
    pub const ALL: [Self; 11] = [
        Self::CheckInDate,
        Self::RoomType,
        Self::Tariff,
        Self::PrimaryGuestName,
        Self::PrimaryGuestPhone,
        Self::PrimaryGuestEmail,
        Self::PrimaryGuestAddress,
        Self::PrimaryGuestIdType,
        Self::PrimaryGuestIdNumber,
        Self::PrimaryGuestIdFrontImage,
        Self::PrimaryGuestIdBackImage,
    ];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::CheckInDate => "checkInDate",
            Self::RoomType => "roomType",
            Self::Tariff => "tariff",
            Self::PrimaryGuestName => "primaryGuestName",
            Self::PrimaryGuestPhone => "primaryGuestPhone",
            Self::PrimaryGuestEmail => "primaryGuestEmail",
            Self::PrimaryGuestAddress => "primaryGuestAddress",
            Self::PrimaryGuestIdType => "primaryGuestIdType",
            Self::PrimaryGuestIdNumber => "primaryGuestIdNumber",
            Self::PrimaryGuestIdFrontImage => "primaryGuestIdFrontImage",
            Self::PrimaryGuestIdBackImage => "primaryGuestIdBackImage",
        }
    }

    /// Returns whether this field holds an ID image rather than a value.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(
            self,
            Self::PrimaryGuestIdFrontImage | Self::PrimaryGuestIdBackImage
        )
    }
}

impl FromStr for FormField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Fields of one secondary guest block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GuestField {
    /// Full name.
    Name,
    /// ID document type.
    IdType,
    /// ID document number.
    IdNumber,
    /// ID front scan.
    IdFrontImage,
    /// ID back scan.
    IdBackImage,
}

impl GuestField {
    /// Every guest field, in block order.
    pub const ALL: [Self; 5] = [
        Self::Name,
        Self::IdType,
        Self::IdNumber,
        Self::IdFrontImage,
        Self::IdBackImage,
    ];

    /// Returns the wire name of this field.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::IdType => "idType",
            Self::IdNumber => "idNumber",
            Self::IdFrontImage => "idFrontImage",
            Self::IdBackImage => "idBackImage",
        }
    }

    /// Returns whether this field holds an ID image rather than a value.
    #[must_use]
    pub const fn is_image(&self) -> bool {
        matches!(self, Self::IdFrontImage | Self::IdBackImage)
    }
}

impl FromStr for GuestField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::UnknownGuestField(s.to_string()))
    }
}

impl std::fmt::Display for GuestField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
