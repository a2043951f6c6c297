use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::DomainError;

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid phone regex"));

/// How many leading characters of a phone number stay visible when masked.
const MASK_HEAD: usize = 3;
/// How many trailing characters stay visible when masked.
const MASK_TAIL: usize = 4;

/// A validated phone number in E.164-like form: optional leading `+`
/// followed by 7 to 15 digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Display-safe rendering: the first 3 and last 4 characters are kept,
    /// everything in between is replaced with `*`, total length preserved.
    ///
    /// Numbers too short for head and tail to coexist are returned as-is.
    pub fn masked(&self) -> String {
        mask_digits(&self.0)
    }
}

pub(crate) fn mask_digits(raw: &str) -> String {
    let len = raw.chars().count();
    if len < MASK_HEAD + MASK_TAIL {
        return raw.to_string();
    }

    let head: String = raw.chars().take(MASK_HEAD).collect();
    let tail: String = raw.chars().skip(len - MASK_TAIL).collect();
    format!("{head}{}{tail}", "*".repeat(len - MASK_HEAD - MASK_TAIL))
}

impl TryFrom<String> for PhoneNumber {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let value = value.trim().to_string();
        if PHONE_RE.is_match(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::InvalidPhoneNumber)
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::*;

    #[test]
    fn masks_middle_of_twelve_char_number() {
        let phone = PhoneNumber::try_from("+12345678901".to_string()).unwrap();
        assert_eq!(phone.masked(), "+12*****8901");
    }

    #[test]
    fn masked_output_preserves_length() {
        let phone = PhoneNumber::try_from("5551234567".to_string()).unwrap();
        assert_eq!(phone.masked().len(), phone.as_str().len());
    }

    #[test]
    fn seven_char_number_has_no_room_to_mask() {
        // head + tail cover all seven characters, zero mask characters remain
        assert_eq!(mask_digits("5551234"), "5551234");
    }

    #[test]
    fn short_values_pass_through_unmasked() {
        assert_eq!(mask_digits("555123"), "555123");
        assert_eq!(mask_digits(""), "");
    }

    #[test]
    fn rejects_letters_and_out_of_range_lengths() {
        for candidate in ["", "123456", "abcdefgh", "+1234567890123456", "555-1234"] {
            assert!(PhoneNumber::try_from(candidate.to_string()).is_err());
        }
    }

    #[quickcheck]
    fn masking_preserves_length_head_and_tail(digits: Vec<u8>) -> bool {
        let raw: String = digits.iter().map(|d| char::from(b'0' + d % 10)).collect();
        let masked = mask_digits(&raw);
        let len = raw.chars().count();

        if len < MASK_HEAD + MASK_TAIL {
            return masked == raw;
        }
        masked.chars().count() == len
            && masked[..MASK_HEAD] == raw[..MASK_HEAD]
            && masked[len - MASK_TAIL..] == raw[len - MASK_TAIL..]
            && masked[MASK_HEAD..len - MASK_TAIL].chars().all(|c| c == '*')
    }
}
