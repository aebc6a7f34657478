use serde::Deserialize;

use crate::domain::client::{GstType, NewClient};
use crate::domain::types::{
    ClientEmail, ClientName, GstNumber, PanNumber, PhoneNumber, PortalUserId,
};
use crate::forms::{FormError, FormField};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Form data for adding a client from the generic client screen.
pub struct AddClientForm {
    pub name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    /// Optional GSTIN; validated only when present.
    pub gst_number: String,
    /// Optional PAN; validated only when present.
    pub pan_number: String,
    pub gst_type: Option<GstType>,
}

#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
/// Form data the accountant fills in to onboard a client with portal access.
pub struct CaAddClientForm {
    pub business_name: String,
    pub gst_number: String,
    pub phone_number: String,
    pub email: String,
    pub user_id: String,
    pub password: String,
    /// `Regular`, `IFF` or `Composition`; defaults to `Regular`.
    pub client_type: Option<String>,
}

fn require(value: &str, field: FormField) -> Result<(), FormError> {
    if value.trim().is_empty() {
        Err(FormError::MissingField(field))
    } else {
        Ok(())
    }
}

fn email(value: &str) -> Result<ClientEmail, FormError> {
    ClientEmail::new(value).map_err(|_| FormError::InvalidEmail)
}

fn phone(value: &str) -> Result<PhoneNumber, FormError> {
    PhoneNumber::new(value).map_err(|_| FormError::InvalidPhoneNumber)
}

fn optional<T, E>(
    value: &str,
    parse: impl FnOnce(&str) -> Result<T, E>,
    error: FormError,
) -> Result<Option<T>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse(value).map(Some).map_err(|_| error)
}

/// Maps the client type picker value onto a GST category.
pub fn parse_client_type(value: &str) -> Result<GstType, FormError> {
    match value.trim() {
        "" | "Regular" => Ok(GstType::Regular),
        "IFF" => Ok(GstType::Iff),
        "Composition" => Ok(GstType::Composite),
        other => Err(FormError::InvalidClientType(other.to_string())),
    }
}

impl TryFrom<AddClientForm> for NewClient {
    type Error = FormError;

    fn try_from(form: AddClientForm) -> Result<Self, Self::Error> {
        require(&form.name, FormField::Name)?;
        require(&form.phone_number, FormField::PhoneNumber)?;
        require(&form.email, FormField::Email)?;

        let email = email(&form.email)?;
        let phone_number = phone(&form.phone_number)?;
        let gst_number = optional(
            &form.gst_number,
            |v| GstNumber::new(v),
            FormError::InvalidGstNumber,
        )?;
        let pan_number = optional(
            &form.pan_number,
            |v| PanNumber::new(v),
            FormError::InvalidPanNumber,
        )?;
        let name =
            ClientName::new(form.name).map_err(|_| FormError::MissingField(FormField::Name))?;

        let mut new_client = NewClient::new(name, email, phone_number);
        new_client.address = form.address.trim().to_string();
        new_client.gst_number = gst_number.map(GstNumber::into_inner).unwrap_or_default();
        new_client.pan_number = pan_number;
        new_client.gst_type = form.gst_type.unwrap_or_default();
        Ok(new_client)
    }
}

impl TryFrom<CaAddClientForm> for NewClient {
    type Error = FormError;

    /// Validates the onboarding form. The password is checked for presence
    /// only and is not carried into the client record.
    fn try_from(form: CaAddClientForm) -> Result<Self, Self::Error> {
        require(&form.business_name, FormField::BusinessName)?;
        require(&form.gst_number, FormField::GstNumber)?;
        require(&form.phone_number, FormField::PhoneNumber)?;
        require(&form.email, FormField::Email)?;
        require(&form.user_id, FormField::UserId)?;
        require(&form.password, FormField::Password)?;

        let email = email(&form.email)?;
        let phone_number = phone(&form.phone_number)?;
        let gst_type = parse_client_type(form.client_type.as_deref().unwrap_or_default())?;

        let name = ClientName::new(form.business_name)
            .map_err(|_| FormError::MissingField(FormField::BusinessName))?;
        let user_id = PortalUserId::new(form.user_id)
            .map_err(|_| FormError::MissingField(FormField::UserId))?;

        let mut new_client = NewClient::new(name, email, phone_number);
        new_client.gst_number = form.gst_number.trim().to_string();
        new_client.gst_type = gst_type;
        new_client.portal_user_id = Some(user_id);
        Ok(new_client)
    }
}
