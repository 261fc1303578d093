use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    #[default]
    Url,
    Text,
    Email,
    Phone, // {countryCode, number} or a bare number
    Wifi,  // {ssid, password} or a bare ssid
    Vcard, // {name, phone, countryCode} or a bare name
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownDataType(pub String);

impl fmt::Display for UnknownDataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown data type '{}' (expected one of: url, text, email, phone, wifi, vcard)",
            self.0
        )
    }
}

impl std::error::Error for UnknownDataType {}

impl FromStr for DataType {
    type Err = UnknownDataType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataType::all()
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownDataType(s.to_string()))
    }
}

impl DataType {
    pub fn all() -> Vec<DataType> {
        vec![
            DataType::Url,
            DataType::Text,
            DataType::Email,
            DataType::Phone,
            DataType::Wifi,
            DataType::Vcard,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Url => "url",
            DataType::Text => "text",
            DataType::Email => "email",
            DataType::Phone => "phone",
            DataType::Wifi => "wifi",
            DataType::Vcard => "vcard",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataType::Url => "Website URL",
            DataType::Text => "Text",
            DataType::Email => "Email",
            DataType::Phone => "Phone",
            DataType::Wifi => "Wi-Fi",
            DataType::Vcard => "Contact Card",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            DataType::Url => "https://example.com",
            DataType::Text => "Enter your text here",
            DataType::Email => "name@example.com",
            DataType::Phone => "+1234567890",
            DataType::Wifi => "SSID",
            DataType::Vcard => "Contact information",
        }
    }

    /// URI scheme the formatter puts in front of the raw value, if any.
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            DataType::Email => Some("mailto:"),
            DataType::Phone => Some("tel:"),
            _ => None,
        }
    }

    /// Whether the raw value may be a JSON object instead of a plain string.
    pub fn is_composite(&self) -> bool {
        matches!(self, DataType::Phone | DataType::Wifi | DataType::Vcard)
    }
}
