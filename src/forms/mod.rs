//! Form definitions submitted by the client-facing screens.

use std::fmt::Display;

use thiserror::Error;

pub mod client;

/// Form inputs that can be reported as missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    BusinessName,
    GstNumber,
    PhoneNumber,
    Email,
    UserId,
    Password,
}

impl FormField {
    /// Wire name of the field in the submitted form.
    pub const fn key(self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::BusinessName => "businessName",
            FormField::GstNumber => "gstNumber",
            FormField::PhoneNumber => "phoneNumber",
            FormField::Email => "email",
            FormField::UserId => "userId",
            FormField::Password => "password",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            FormField::Name => "client name",
            FormField::BusinessName => "business name",
            FormField::GstNumber => "GST number",
            FormField::PhoneNumber => "phone number",
            FormField::Email => "email address",
            FormField::UserId => "user ID",
            FormField::Password => "password",
        }
    }
}

impl Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("Please enter {0}")]
    MissingField(FormField),

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Please enter a valid 10-digit phone number")]
    InvalidPhoneNumber,

    #[error("Please enter a valid GST number")]
    InvalidGstNumber,

    #[error("Please enter a valid PAN number")]
    InvalidPanNumber,

    #[error("Unknown client type `{0}`")]
    InvalidClientType(String),
}

impl FormError {
    /// Wire name of the offending form field.
    pub const fn field(&self) -> &'static str {
        match self {
            FormError::MissingField(field) => field.key(),
            FormError::InvalidEmail => FormField::Email.key(),
            FormError::InvalidPhoneNumber => FormField::PhoneNumber.key(),
            FormError::InvalidGstNumber => FormField::GstNumber.key(),
            FormError::InvalidPanNumber => "panNumber",
            FormError::InvalidClientType(_) => "clientType",
        }
    }
}
