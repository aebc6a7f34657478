use std::fmt::Display;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::types::{
    Amount, ClientEmail, ClientId, ClientName, PanNumber, PhoneNumber, PortalUserId,
    TypeConstraintError,
};

/// Tax-filing category of a client business.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum GstType {
    #[default]
    Regular,
    Composite,
    Iff,
}

impl GstType {
    pub const ALL: [GstType; 3] = [GstType::Regular, GstType::Composite, GstType::Iff];

    pub const fn as_str(self) -> &'static str {
        match self {
            GstType::Regular => "regular",
            GstType::Composite => "composite",
            GstType::Iff => "iff",
        }
    }
}

impl Display for GstType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GstType {
    type Err = TypeConstraintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(GstType::Regular),
            "composite" => Ok(GstType::Composite),
            "iff" => Ok(GstType::Iff),
            other => Err(TypeConstraintError::InvalidValue(format!(
                "unknown GST type `{other}`"
            ))),
        }
    }
}

/// Status derived from the number of pending files. Never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ClientStatus {
    Clear,
    Pending,
    Overdue,
}

impl ClientStatus {
    pub const ALL: [ClientStatus; 3] = [
        ClientStatus::Clear,
        ClientStatus::Pending,
        ClientStatus::Overdue,
    ];

    pub const fn from_pending_files(pending_files: u32) -> Self {
        match pending_files {
            0 => ClientStatus::Clear,
            1..=3 => ClientStatus::Pending,
            _ => ClientStatus::Overdue,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ClientStatus::Clear => "clear",
            ClientStatus::Pending => "pending",
            ClientStatus::Overdue => "overdue",
        }
    }
}

impl Display for ClientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account lifecycle flag of a client record.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    #[default]
    Active,
}

/// A client business managed by the accountant.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: ClientId,
    pub name: ClientName,
    /// Contact email; shape is only checked when the client is added.
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub gst_number: String,
    pub gst_type: GstType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pan_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portal_user_id: Option<String>,
    #[serde(default)]
    pub total_outstanding: Amount,
    #[serde(default)]
    pub total_paid: Amount,
    #[serde(default)]
    pub pending_files: u32,
    #[serde(default)]
    pub account_status: AccountStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDateTime>,
}

impl Client {
    /// Status computed from the current pending file count.
    pub fn status(&self) -> ClientStatus {
        ClientStatus::from_pending_files(self.pending_files)
    }

    /// Builds the stored record for a freshly added client.
    pub fn from_new(id: ClientId, new_client: NewClient, created_at: NaiveDateTime) -> Self {
        Self {
            id,
            name: new_client.name,
            email: new_client.email.into_inner(),
            phone_number: new_client.phone_number.into_inner(),
            address: new_client.address,
            gst_number: new_client.gst_number,
            gst_type: new_client.gst_type,
            business_type: None,
            pan_number: new_client.pan_number.map(PanNumber::into_inner),
            portal_user_id: new_client.portal_user_id.map(PortalUserId::into_inner),
            total_outstanding: Amount::ZERO,
            total_paid: Amount::ZERO,
            pending_files: 0,
            account_status: AccountStatus::Active,
            created_at: Some(created_at),
        }
    }
}

/// Validated data required to add a client.
#[derive(Clone, Debug)]
pub struct NewClient {
    pub name: ClientName,
    pub email: ClientEmail,
    pub phone_number: PhoneNumber,
    pub address: String,
    /// Empty when the form did not capture a GST number.
    pub gst_number: String,
    pub gst_type: GstType,
    pub pan_number: Option<PanNumber>,
    pub portal_user_id: Option<PortalUserId>,
}

impl NewClient {
    #[must_use]
    pub fn new(name: ClientName, email: ClientEmail, phone_number: PhoneNumber) -> Self {
        Self {
            name,
            email,
            phone_number,
            address: String::new(),
            gst_number: String::new(),
            gst_type: GstType::default(),
            pan_number: None,
            portal_user_id: None,
        }
    }
}
