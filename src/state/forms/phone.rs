//! Brazilian phone number formatting for the WhatsApp field

/// Maximum number of significant digits (2 area code + 9 subscriber)
pub const MAX_PHONE_DIGITS: usize = 11;

/// Extract the ASCII digits from raw input, capped at [`MAX_PHONE_DIGITS`]
pub fn phone_digits(raw: &str) -> String {
    raw.chars()
        .filter(char::is_ascii_digit)
        .take(MAX_PHONE_DIGITS)
        .collect()
}

/// Format raw keyboard input as a progressively punctuated phone number.
///
/// - 0-2 digits: `(DD`
/// - 3-7 digits: `(DD) DDDDD`
/// - 8-11 digits: `(DD) DDDDD-DDDD`
///
/// Digits past the 11th are dropped. Any input is accepted, so the empty
/// string formats to `(`.
pub fn format_phone(raw: &str) -> String {
    let digits = phone_digits(raw);

    // All characters are ASCII digits, so byte offsets are char offsets
    match digits.len() {
        0..=2 => format!("({digits}"),
        3..=7 => format!("({}) {}", &digits[..2], &digits[2..]),
        _ => format!("({}) {}-{}", &digits[..2], &digits[2..7], &digits[7..]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_input_opens_area_code() {
        assert_eq!(format_phone(""), "(");
    }

    #[test]
    fn test_area_code_only() {
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
    }

    #[test]
    fn test_second_group_grows() {
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 98765");
    }

    #[test]
    fn test_hyphen_after_seventh_digit() {
        assert_eq!(format_phone("11987654"), "(11) 98765-4");
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn test_every_length_up_to_eleven() {
        let all = "11987654321";
        let expected = [
            "(",
            "(1",
            "(11",
            "(11) 9",
            "(11) 98",
            "(11) 987",
            "(11) 9876",
            "(11) 98765",
            "(11) 98765-4",
            "(11) 98765-43",
            "(11) 98765-432",
            "(11) 98765-4321",
        ];
        for (len, want) in expected.iter().enumerate() {
            assert_eq!(format_phone(&all[..len]), *want, "length {len}");
        }
    }

    #[test]
    fn test_truncates_beyond_eleven_digits() {
        assert_eq!(format_phone("1198765432199"), "(11) 98765-4321");
        assert_eq!(format_phone("(11) 98765-43210"), "(11) 98765-4321");
    }

    #[test]
    fn test_non_digits_are_stripped() {
        assert_eq!(format_phone("+55 abc"), "(55");
        assert_eq!(format_phone("tel: 11-98765.4321"), "(11) 98765-4321");
        assert_eq!(format_phone("no digits here"), "(");
    }

    #[test]
    fn test_non_ascii_digits_are_ignored() {
        // Arabic-Indic and fullwidth digits are not phone digits
        assert_eq!(format_phone("١٢٣"), "(");
        assert_eq!(format_phone("１１9"), "(9");
    }

    #[test]
    fn test_idempotent() {
        let inputs = [
            "",
            "(",
            "1",
            "11 9",
            "(11) 9876",
            "11987654",
            "11987654321",
            "119876543210000",
            "garbage",
            "(11) 98765-4321",
        ];
        for input in inputs {
            let once = format_phone(input);
            assert_eq!(format_phone(&once), once, "input {input:?}");
        }
    }

    #[test]
    fn test_phone_digits_caps_length() {
        assert_eq!(phone_digits("(11) 98765-43210"), "11987654321");
        assert_eq!(phone_digits(""), "");
    }
}
