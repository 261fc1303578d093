use regex::Regex;
use std::sync::LazyLock;
use validator::ValidateUrl;

use crate::models::data_type::DataType;
use crate::models::payload::{Payload, PhoneData, VcardData, WifiData};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static COUNTRY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9]{1,4}$").expect("country code regex"));
static LOCAL_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9\s\-()]{5,15}$").expect("local number regex"));
static LEGACY_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[+]?[0-9\s\-()]{5,20}$").expect("legacy phone regex"));

/// Check whether raw form input is plausible for its data type.
///
/// This only drives a "please enter valid data" warning; it never blocks
/// formatting or rendering.
pub fn validate_qr_data(data: &str, data_type: DataType) -> bool {
    if data.is_empty() {
        return false;
    }

    match data_type {
        DataType::Url => {
            let candidate = if data.starts_with("http") {
                data.to_string()
            } else {
                format!("https://{}", data)
            };
            candidate.validate_url()
        }
        DataType::Email => EMAIL.is_match(data),
        DataType::Phone => match Payload::<PhoneData>::decode(data) {
            Payload::Structured(phone) => {
                COUNTRY_CODE.is_match(&phone.country_code) && LOCAL_NUMBER.is_match(&phone.number)
            }
            Payload::Legacy(raw) => LEGACY_PHONE.is_match(&raw),
        },
        DataType::Wifi => match Payload::<WifiData>::decode(data) {
            Payload::Structured(wifi) => has_text(&wifi.ssid),
            Payload::Legacy(raw) => has_text(&raw),
        },
        DataType::Vcard => match Payload::<VcardData>::decode(data) {
            Payload::Structured(card) => has_text(&card.name),
            Payload::Legacy(raw) => has_text(&raw),
        },
        DataType::Text => has_text(data),
    }
}

fn has_text(value: &str) -> bool {
    !value.trim().is_empty()
}
