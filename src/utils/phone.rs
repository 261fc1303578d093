use regex::Regex;
use std::sync::LazyLock;

use crate::models::payload::PhoneData;

// The country code is matched lazily so `+15551234567` splits as `+1` /
// `5551234567` rather than swallowing the area code.
static PHONE_WITH_COUNTRY_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\+[0-9]{1,4}?)([0-9\s\-()]{5,15})$").expect("phone splitter regex")
});

/// Split a single-string phone number into country code and local number.
///
/// Used to pre-fill split input fields from a legacy value. Anything that
/// doesn't look like `+<1-4 digits><5-15 digits/spaces/dashes/parens>` comes
/// back with an empty country code and the trimmed input as the number.
/// Only ASCII digits count.
pub fn parse_phone_with_country_code(phone: &str) -> PhoneData {
    match PHONE_WITH_COUNTRY_CODE.captures(phone) {
        Some(caps) => PhoneData::new(&caps[1], &caps[2]),
        None => PhoneData::new("", phone.trim()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_shortest_country_code() {
        assert_eq!(
            parse_phone_with_country_code("+15551234567"),
            PhoneData::new("+1", "5551234567")
        );
    }

    #[test]
    fn keeps_formatting_characters_in_number() {
        assert_eq!(
            parse_phone_with_country_code("+1 (555) 123-4567"),
            PhoneData::new("+1", " (555) 123-4567")
        );
        // "+4" would leave sixteen characters, so the code grows to "+44".
        assert_eq!(
            parse_phone_with_country_code("+44 (20) 7123-4567"),
            PhoneData::new("+44", " (20) 7123-4567")
        );
    }

    #[test]
    fn longer_country_code_when_number_would_overflow() {
        // 17 digits after '+': the code must take at least two of them.
        assert_eq!(
            parse_phone_with_country_code("+12345678901234567"),
            PhoneData::new("+12", "345678901234567")
        );
    }

    #[test]
    fn no_plus_means_no_country_code() {
        assert_eq!(
            parse_phone_with_country_code("  5551234567 "),
            PhoneData::new("", "5551234567")
        );
    }

    #[test]
    fn number_outside_window_is_left_whole() {
        // Four characters after the code: too short for the number part.
        assert_eq!(
            parse_phone_with_country_code("+11234"),
            PhoneData::new("", "+11234")
        );
        // Twenty digits after '+': even a four digit code leaves sixteen.
        let long = "+12345678901234567890";
        assert_eq!(parse_phone_with_country_code(long), PhoneData::new("", long));
    }

    #[test]
    fn surrounding_whitespace_prevents_a_split() {
        assert_eq!(
            parse_phone_with_country_code("  +15551234567"),
            PhoneData::new("", "+15551234567")
        );
    }

    #[test]
    fn non_ascii_digits_are_left_unsplit() {
        let arabic = "+\u{661}\u{665}\u{665}\u{665}\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}";
        assert_eq!(parse_phone_with_country_code(arabic), PhoneData::new("", arabic));
    }

    #[test]
    fn empty_input_gives_empty_fields() {
        assert_eq!(parse_phone_with_country_code(""), PhoneData::default());
    }
}
