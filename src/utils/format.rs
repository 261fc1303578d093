use crate::models::data_type::DataType;
use crate::models::payload::{Payload, PhoneData, VcardData, WifiData};

/// Turn raw form input into the literal string encoded into the QR symbol.
///
/// An empty input yields an empty payload, which callers treat as "nothing
/// to render". Composite types accept either a JSON object or a bare legacy
/// string; this function never fails.
pub fn format_qr_data(data: &str, data_type: DataType) -> String {
    if data.is_empty() {
        return String::new();
    }

    match data_type {
        DataType::Url => {
            if data.starts_with("http") {
                data.to_string()
            } else {
                format!("https://{}", data)
            }
        }
        DataType::Email => with_prefix(data_type, data),
        DataType::Phone => {
            let phone = match Payload::<PhoneData>::decode(data) {
                Payload::Structured(phone) => phone.full_number(),
                Payload::Legacy(raw) => raw,
            };
            with_prefix(data_type, &phone)
        }
        DataType::Wifi => {
            let wifi = match Payload::<WifiData>::decode(data) {
                Payload::Structured(wifi) => wifi,
                Payload::Legacy(raw) => WifiData::new(raw, ""),
            };
            format!(
                "WIFI:S:{};T:WPA;P:{};;",
                escape_wifi_field(&wifi.ssid),
                escape_wifi_field(&wifi.password)
            )
        }
        DataType::Vcard => {
            let card = match Payload::<VcardData>::decode(data) {
                Payload::Structured(card) => card,
                Payload::Legacy(raw) => VcardData::new(raw, "", ""),
            };
            let mut out = format!(
                "BEGIN:VCARD\nVERSION:3.0\nFN:{}\n",
                escape_vcard_text(&card.name)
            );
            let phone = strip_line_breaks(&card.formatted_phone());
            if !phone.is_empty() {
                out.push_str(&format!("TEL:{}\n", phone));
            }
            out.push_str("END:VCARD");
            out
        }
        DataType::Text => data.to_string(),
    }
}

fn with_prefix(data_type: DataType, value: &str) -> String {
    let prefix = data_type.prefix().unwrap_or_default();
    if value.starts_with(prefix) {
        value.to_string()
    } else {
        format!("{}{}", prefix, value)
    }
}

// Reserved in the WIFI: grammar.
fn escape_wifi_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '\\' | ';' | ',' | ':' | '"') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

// vCard TEXT values: backslash, semicolon and comma are escaped, line
// breaks become a literal "\n".
fn escape_vcard_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' | ';' | ',' => {
                out.push('\\');
                out.push(c);
            }
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

fn strip_line_breaks(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_formats_to_empty_for_every_type() {
        for t in DataType::all() {
            assert_eq!(format_qr_data("", t), "", "type {}", t);
        }
    }

    #[test]
    fn url_gets_https_unless_already_http() {
        assert_eq!(format_qr_data("example.com", DataType::Url), "https://example.com");
        assert_eq!(
            format_qr_data("https://example.com", DataType::Url),
            "https://example.com"
        );
        assert_eq!(format_qr_data("http://a.b", DataType::Url), "http://a.b");
    }

    #[test]
    fn url_formatting_is_idempotent() {
        let once = format_qr_data("example.com/path?q=1", DataType::Url);
        assert_eq!(format_qr_data(&once, DataType::Url), once);
    }

    #[test]
    fn email_gets_mailto_once() {
        assert_eq!(format_qr_data("a@b.com", DataType::Email), "mailto:a@b.com");
        assert_eq!(
            format_qr_data("mailto:a@b.com", DataType::Email),
            "mailto:a@b.com"
        );
    }

    #[test]
    fn prefixed_types_start_with_their_scheme() {
        for t in DataType::all() {
            if let Some(prefix) = t.prefix() {
                assert!(format_qr_data("5551234", t).starts_with(prefix), "type {}", t);
            }
        }
    }

    #[test]
    fn structured_phone_joins_country_code() {
        assert_eq!(
            format_qr_data(r#"{"countryCode":"+1","number":"5551234"}"#, DataType::Phone),
            "tel:+15551234"
        );
    }

    #[test]
    fn legacy_phone_is_used_verbatim() {
        assert_eq!(format_qr_data("+1 555 1234", DataType::Phone), "tel:+1 555 1234");
        assert_eq!(format_qr_data("tel:5551234", DataType::Phone), "tel:5551234");
    }

    #[test]
    fn structured_wifi() {
        assert_eq!(
            format_qr_data(r#"{"ssid":"MyNet","password":"secret"}"#, DataType::Wifi),
            "WIFI:S:MyNet;T:WPA;P:secret;;"
        );
    }

    #[test]
    fn legacy_wifi_is_ssid_only() {
        assert_eq!(
            format_qr_data("CoffeeShop", DataType::Wifi),
            "WIFI:S:CoffeeShop;T:WPA;P:;;"
        );
    }

    #[test]
    fn wifi_reserved_characters_are_escaped() {
        assert_eq!(
            format_qr_data(r#"{"ssid":"a;b","password":"p:\\q"}"#, DataType::Wifi),
            r"WIFI:S:a\;b;T:WPA;P:p\:\\q;;"
        );
    }

    #[test]
    fn structured_vcard_with_phone() {
        assert_eq!(
            format_qr_data(
                r#"{"name":"Jane Doe","phone":"5551234","countryCode":"+1"}"#,
                DataType::Vcard
            ),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jane Doe\nTEL:+15551234\nEND:VCARD"
        );
    }

    #[test]
    fn vcard_without_phone_has_no_tel_line() {
        assert_eq!(
            format_qr_data("John Smith", DataType::Vcard),
            "BEGIN:VCARD\nVERSION:3.0\nFN:John Smith\nEND:VCARD"
        );
        assert_eq!(
            format_qr_data(r#"{"name":"Jo","countryCode":"+1"}"#, DataType::Vcard),
            "BEGIN:VCARD\nVERSION:3.0\nFN:Jo\nEND:VCARD"
        );
    }

    #[test]
    fn vcard_name_cannot_inject_properties() {
        let out = format_qr_data(
            r#"{"name":"Eve\nTEL:666","phone":"1\n2"}"#,
            DataType::Vcard,
        );
        assert_eq!(
            out,
            "BEGIN:VCARD\nVERSION:3.0\nFN:Eve\\nTEL:666\nTEL:12\nEND:VCARD"
        );
    }

    #[test]
    fn text_is_passed_through() {
        assert_eq!(format_qr_data("  hello ", DataType::Text), "  hello ");
    }
}
