// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Serializable views of the registration page.
//!
//! Rendering is a pure function of the form state: every control on the page
//! becomes a field view carrying its label, wire name, current value, error
//! and required marker.

use inn_registration::{FormPhase, State};
use inn_registration_domain::{
    BookingReference, FormField, GuestField, IdType, ImageRef, PrimaryGuest, RoomType,
    SecondaryGuest, ValidationErrors,
};

/// Page heading.
pub const PAGE_TITLE: &str = "Kanha Inn Guest Registration";

/// Instruction line under the page heading.
pub const PAGE_INSTRUCTIONS: &str =
    "Please fill out the form below to complete the guest check-in process.";

/// Text shown by a file input with nothing selected.
pub const NO_FILE_CHOSEN: &str = "No file chosen...";

/// The `accept` hint for ID image inputs.
pub const IMAGE_ACCEPT_HINT: &str = "image/jpeg, image/png";

const SUBMIT_LABEL: &str = "Submit Registration";
const SUBMITTING_LABEL: &str = "Submitting...";
const ADD_GUEST_LABEL: &str = "Add New Secondary Guest";

/// The HTML input kind a text control renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single-line free text.
    Text,
    /// Date picker reporting `YYYY-MM-DD`.
    Date,
    /// Numeric entry.
    Number,
    /// Phone number entry.
    Tel,
    /// Email address entry.
    Email,
    /// Multi-line free text.
    Textarea,
}

/// A labelled text input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TextFieldView {
    /// Visible label.
    pub label: String,
    /// Wire name sent back in update requests.
    pub name: String,
    /// How the input is rendered.
    pub kind: InputKind,
    /// Current value.
    pub value: String,
    /// Hint shown while the value is empty.
    pub placeholder: Option<String>,
    /// Whether the label carries the required marker.
    pub required: bool,
    /// Error shown under the control.
    pub error: Option<String>,
}

impl TextFieldView {
    /// Creates a text field view.
    ///
    /// # Arguments
    ///
    /// * `label` - Visible label
    /// * `name` - Wire name reported back on change
    /// * `kind` - Input kind
    /// * `value` - Current value
    /// * `error` - Error message to show under the control, if any
    #[must_use]
    pub fn new(label: &str, name: &str, kind: InputKind, value: &str, error: Option<&str>) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            kind,
            value: value.to_string(),
            placeholder: None,
            required: true,
            error: error.map(str::to_string),
        }
    }

    /// Sets the placeholder shown while the value is empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = Some(placeholder.to_string());
        self
    }

    /// Drops the required marker.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }
}

/// A labelled dropdown over a fixed option list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectFieldView {
    /// Visible label.
    pub label: String,
    /// Wire name sent back in update requests.
    pub name: String,
    /// The selected option.
    pub value: String,
    /// Every option, in display order.
    pub options: Vec<String>,
    /// Whether the label carries the required marker.
    pub required: bool,
    /// Error shown under the control. Selects never fail validation.
    pub error: Option<String>,
}

impl SelectFieldView {
    /// Creates a select field view; the value is always one of `options`.
    #[must_use]
    pub fn new(label: &str, name: &str, value: &str, options: &[&str]) -> Self {
        Self {
            label: label.to_string(),
            name: name.to_string(),
            value: value.to_string(),
            options: options.iter().map(|option| (*option).to_string()).collect(),
            required: true,
            error: None,
        }
    }
}

/// A labelled image picker.
///
/// Shows only the chosen file's name; the content is never previewed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileFieldView {
    /// Visible label.
    pub label: String,
    /// Wire name sent back in update requests.
    pub name: String,
    /// Name of the chosen file, if any.
    pub file_name: Option<String>,
    /// The file name, or the empty-picker text.
    pub display_text: String,
    /// Content types offered by the picker.
    pub accept: String,
    /// Whether the label carries the required marker.
    pub required: bool,
    /// Error shown under the control.
    pub error: Option<String>,
}

impl FileFieldView {
    /// Creates a file field view for the current selection.
    #[must_use]
    pub fn new(label: &str, name: &str, file: Option<&ImageRef>, error: Option<&str>) -> Self {
        let file_name: Option<String> = file.map(|image| image.file_name.clone());
        Self {
            label: label.to_string(),
            name: name.to_string(),
            display_text: file_name
                .clone()
                .unwrap_or_else(|| String::from(NO_FILE_CHOSEN)),
            file_name,
            accept: String::from(IMAGE_ACCEPT_HINT),
            required: true,
            error: error.map(str::to_string),
        }
    }
}

/// Any one control on the page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum FieldView {
    /// A text input.
    Text(TextFieldView),
    /// A dropdown.
    Select(SelectFieldView),
    /// An image picker.
    File(FileFieldView),
}

impl FieldView {
    /// Returns the wire name of the control.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Text(view) => &view.name,
            Self::Select(view) => &view.name,
            Self::File(view) => &view.name,
        }
    }

    /// Returns the error shown under the control, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Text(view) => view.error.as_deref(),
            Self::Select(view) => view.error.as_deref(),
            Self::File(view) => view.error.as_deref(),
        }
    }
}

/// A titled group of controls.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SectionView {
    /// Section heading.
    pub title: String,
    /// Controls, in display order.
    pub fields: Vec<FieldView>,
}

/// The controls of one secondary guest.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GuestBlockView {
    /// Position in the list; used to address the guest in requests.
    pub index: usize,
    /// Stable key for the block, unchanged when earlier guests are removed.
    pub key: String,
    /// Block heading, numbered from one.
    pub heading: String,
    /// Controls, in display order.
    pub fields: Vec<FieldView>,
}

/// The editable list of secondary guests.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GuestListView {
    /// Section heading.
    pub title: String,
    /// One block per secondary guest.
    pub guests: Vec<GuestBlockView>,
    /// Label of the add-guest control.
    pub add_label: String,
}

/// The registration form.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FormView {
    /// Page heading.
    pub title: String,
    /// Instruction line under the heading.
    pub instructions: String,
    /// Booking details section.
    pub booking: SectionView,
    /// Primary guest section.
    pub primary_guest: SectionView,
    /// Secondary guest list.
    pub secondary_guests: GuestListView,
    /// Whether a submission is in flight; the submit control is disabled.
    pub submitting: bool,
    /// Label of the submit control.
    pub submit_label: String,
}

/// The confirmation shown after a registration completes.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SuccessView {
    /// Confirmation heading.
    pub title: String,
    /// Confirmation text.
    pub message: String,
    /// Label shown beside the reference.
    pub booking_reference_label: String,
    /// The booking reference given to the guest.
    pub booking_reference: String,
    /// Label of the control that starts the next registration.
    pub action: String,
}

impl SuccessView {
    /// Creates the confirmation for `booking_reference`.
    #[must_use]
    pub fn new(booking_reference: &BookingReference) -> Self {
        Self {
            title: String::from("Registration Successful!"),
            message: String::from("The guest registration has been submitted successfully."),
            booking_reference_label: String::from("Booking ID"),
            booking_reference: booking_reference.value().to_string(),
            action: String::from("Add New Registration"),
        }
    }
}

/// Whatever the page currently shows.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum PageView {
    /// The form, while editing or submitting.
    Form(FormView),
    /// The confirmation, once completed.
    Success(SuccessView),
}

/// Renders the page for a form state.
///
/// # Arguments
///
/// * `state` - The form state to render
///
/// # Returns
///
/// The success view once the registration completed, the form otherwise.
#[must_use]
pub fn render(state: &State) -> PageView {
    match &state.phase {
        FormPhase::Completed { booking_reference } => {
            PageView::Success(SuccessView::new(booking_reference))
        }
        FormPhase::Editing | FormPhase::Submitting { .. } => PageView::Form(render_form(state)),
    }
}

fn render_form(state: &State) -> FormView {
    let submitting: bool = state.phase.is_submitting();
    FormView {
        title: String::from(PAGE_TITLE),
        instructions: String::from(PAGE_INSTRUCTIONS),
        booking: render_booking_section(state),
        primary_guest: render_primary_guest_section(state),
        secondary_guests: GuestListView {
            title: String::from("Secondary Guest Information"),
            guests: state
                .draft
                .secondary_guests
                .iter()
                .enumerate()
                .map(|(index, guest)| render_guest_block(index, guest, &state.errors))
                .collect(),
            add_label: String::from(ADD_GUEST_LABEL),
        },
        submitting,
        submit_label: String::from(if submitting {
            SUBMITTING_LABEL
        } else {
            SUBMIT_LABEL
        }),
    }
}

fn render_booking_section(state: &State) -> SectionView {
    let errors: &ValidationErrors = &state.errors;
    SectionView {
        title: String::from("Booking & Room Details"),
        fields: vec![
            FieldView::Text(TextFieldView::new(
                "Check-in Date",
                FormField::CheckInDate.as_str(),
                InputKind::Date,
                &state.draft.check_in_date,
                errors.field(FormField::CheckInDate),
            )),
            FieldView::Select(SelectFieldView::new(
                "Room Type",
                FormField::RoomType.as_str(),
                state.draft.room_type.as_str(),
                &RoomType::ALL.map(|room| room.as_str()),
            )),
            FieldView::Text(
                TextFieldView::new(
                    "Tariff (per night)",
                    FormField::Tariff.as_str(),
                    InputKind::Number,
                    &state.draft.tariff,
                    errors.field(FormField::Tariff),
                )
                .with_placeholder("e.g., 2500"),
            ),
        ],
    }
}

fn render_primary_guest_section(state: &State) -> SectionView {
    let errors: &ValidationErrors = &state.errors;
    let guest: &PrimaryGuest = &state.draft.primary_guest;
    SectionView {
        title: String::from("Primary Guest Information"),
        fields: vec![
            FieldView::Text(
                TextFieldView::new(
                    "Full Name",
                    FormField::PrimaryGuestName.as_str(),
                    InputKind::Text,
                    &guest.full_name,
                    errors.field(FormField::PrimaryGuestName),
                )
                .with_placeholder("Enter full name"),
            ),
            FieldView::Text(
                TextFieldView::new(
                    "Phone Number",
                    FormField::PrimaryGuestPhone.as_str(),
                    InputKind::Tel,
                    &guest.phone,
                    errors.field(FormField::PrimaryGuestPhone),
                )
                .with_placeholder("10-digit mobile number"),
            ),
            FieldView::Text(
                TextFieldView::new(
                    "Email Address (Optional)",
                    FormField::PrimaryGuestEmail.as_str(),
                    InputKind::Email,
                    &guest.email,
                    errors.field(FormField::PrimaryGuestEmail),
                )
                .with_placeholder("example@email.com")
                .optional(),
            ),
            FieldView::Text(
                TextFieldView::new(
                    "Full Address",
                    FormField::PrimaryGuestAddress.as_str(),
                    InputKind::Textarea,
                    &guest.address,
                    errors.field(FormField::PrimaryGuestAddress),
                )
                .with_placeholder("Enter full address"),
            ),
            FieldView::Select(SelectFieldView::new(
                "ID Type",
                FormField::PrimaryGuestIdType.as_str(),
                guest.identity.id_type.as_str(),
                &id_type_options(),
            )),
            FieldView::Text(
                TextFieldView::new(
                    "ID Number",
                    FormField::PrimaryGuestIdNumber.as_str(),
                    InputKind::Text,
                    &guest.identity.id_number,
                    errors.field(FormField::PrimaryGuestIdNumber),
                )
                .with_placeholder("Enter ID number"),
            ),
            FieldView::File(FileFieldView::new(
                "ID - Front Image",
                FormField::PrimaryGuestIdFrontImage.as_str(),
                guest.identity.id_front_image.as_ref(),
                errors.field(FormField::PrimaryGuestIdFrontImage),
            )),
            FieldView::File(FileFieldView::new(
                "ID - Back Image",
                FormField::PrimaryGuestIdBackImage.as_str(),
                guest.identity.id_back_image.as_ref(),
                errors.field(FormField::PrimaryGuestIdBackImage),
            )),
        ],
    }
}

fn render_guest_block(
    index: usize,
    guest: &SecondaryGuest,
    errors: &ValidationErrors,
) -> GuestBlockView {
    GuestBlockView {
        index,
        key: guest.key.value().to_string(),
        heading: format!("Secondary Guest {}", index + 1),
        fields: vec![
            FieldView::Text(
                TextFieldView::new(
                    "Full Name",
                    GuestField::Name.as_str(),
                    InputKind::Text,
                    &guest.full_name,
                    errors.guest_field(index, GuestField::Name),
                )
                .with_placeholder("Enter full name"),
            ),
            FieldView::Select(SelectFieldView::new(
                "ID Type",
                GuestField::IdType.as_str(),
                guest.identity.id_type.as_str(),
                &id_type_options(),
            )),
            FieldView::Text(
                TextFieldView::new(
                    "ID Number",
                    GuestField::IdNumber.as_str(),
                    InputKind::Text,
                    &guest.identity.id_number,
                    errors.guest_field(index, GuestField::IdNumber),
                )
                .with_placeholder("Enter ID number"),
            ),
            FieldView::File(FileFieldView::new(
                "ID - Front Image",
                GuestField::IdFrontImage.as_str(),
                guest.identity.id_front_image.as_ref(),
                errors.guest_field(index, GuestField::IdFrontImage),
            )),
            FieldView::File(FileFieldView::new(
                "ID - Back Image",
                GuestField::IdBackImage.as_str(),
                guest.identity.id_back_image.as_ref(),
                errors.guest_field(index, GuestField::IdBackImage),
            )),
        ],
    }
}

fn id_type_options() -> [&'static str; 5] {
    IdType::ALL.map(|id_type| id_type.as_str())
}
