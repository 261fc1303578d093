use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::utils::phone::parse_phone_with_country_code;

/// Raw form data for a composite data type.
///
/// Newer clients send a JSON object, older ones a bare string. Both the
/// formatter and the validator decode through here so they always agree on
/// which representation a value is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload<T> {
    Structured(T),
    Legacy(String),
}

impl<T: DeserializeOwned> Payload<T> {
    /// Only JSON objects count as structured; arrays, scalars and malformed
    /// JSON all fall back to the legacy string.
    pub fn decode(data: &str) -> Self {
        match serde_json::from_str::<serde_json::Value>(data) {
            Ok(value) if value.is_object() => match serde_json::from_value::<T>(value) {
                Ok(shape) => Payload::Structured(shape),
                Err(e) => {
                    log::debug!("JSON object does not match expected shape: {}", e);
                    Payload::Legacy(data.to_string())
                }
            },
            _ => Payload::Legacy(data.to_string()),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct PhoneData {
    pub country_code: String,
    pub number: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct WifiData {
    pub ssid: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default, rename_all = "camelCase")]
pub struct VcardData {
    pub name: String,
    pub phone: String,
    pub country_code: String,
}

impl PhoneData {
    pub fn new(country_code: impl Into<String>, number: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            number: number.into(),
        }
    }

    /// Country code and number glued together, e.g. `+15551234`.
    pub fn full_number(&self) -> String {
        format!("{}{}", self.country_code, self.number)
    }

    /// Split form fields for any stored phone value. Legacy strings go
    /// through the country-code splitter so they can be edited field by field.
    pub fn from_raw(data: &str) -> Self {
        match Payload::<PhoneData>::decode(data) {
            Payload::Structured(phone) => phone,
            Payload::Legacy(raw) => parse_phone_with_country_code(&raw),
        }
    }
}

impl WifiData {
    pub fn new(ssid: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            ssid: ssid.into(),
            password: password.into(),
        }
    }
}

impl VcardData {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            country_code: country_code.into(),
        }
    }

    /// The country code is only applied when both parts are present.
    pub fn formatted_phone(&self) -> String {
        if !self.country_code.is_empty() && !self.phone.is_empty() {
            format!("{}{}", self.country_code, self.phone)
        } else {
            self.phone.clone()
        }
    }
}

/// Serialize form fields back into the `data` string a request carries.
pub fn encode_shape<T: Serialize>(shape: &T) -> String {
    // Plain string fields cannot fail to serialize.
    serde_json::to_string(shape).unwrap_or_default()
}
