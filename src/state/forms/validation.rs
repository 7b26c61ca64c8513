//! Per-field validation rules
//!
//! Each field maps to exactly one [`Rule`]. A rule looks at the new value
//! alone and yields the message to show under the field, or an empty string
//! when the value is acceptable.

use super::field::FieldName;
use regex::Regex;
use std::sync::LazyLock;

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+[0-9]{1,3}[0-9]{10}$").unwrap());

// Unanchored: a valid PAN anywhere in the value passes.
static PAN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]{5}[0-9]{4}[A-Z]").unwrap());

static AADHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{12}$").unwrap());

const MIN_PASSWORD_CHARS: usize = 6;

/// A pure check applied to a single field value
#[derive(Debug, Clone, Copy)]
pub enum Rule {
    /// Value must be non-empty; message names the field
    Required,
    MinChars {
        min: usize,
        message: &'static str,
    },
    Pattern {
        regex: &'static LazyLock<Regex>,
        message: &'static str,
    },
}

impl Rule {
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Rule::Required => !value.is_empty(),
            Rule::MinChars { min, .. } => value.chars().count() >= *min,
            Rule::Pattern { regex, .. } => regex.is_match(value),
        }
    }

    /// Error message for `value`, empty when it passes
    pub fn check(&self, field: FieldName, value: &str) -> String {
        if self.accepts(value) {
            return String::new();
        }
        match self {
            Rule::Required => format!("{field} is required"),
            Rule::MinChars { message, .. } | Rule::Pattern { message, .. } => {
                (*message).to_string()
            }
        }
    }
}

/// The rule that governs a field
pub fn rule_for(field: FieldName) -> Rule {
    match field {
        FieldName::Email => Rule::Pattern {
            regex: &EMAIL_REGEX,
            message: "Invalid email",
        },
        FieldName::Phone => Rule::Pattern {
            regex: &PHONE_REGEX,
            message: "Phone must be like +91XXXXXXXXXX",
        },
        FieldName::Password => Rule::MinChars {
            min: MIN_PASSWORD_CHARS,
            message: "Minimum 6 characters",
        },
        FieldName::Pan => Rule::Pattern {
            regex: &PAN_REGEX,
            message: "Invalid PAN format",
        },
        FieldName::Aadhar => Rule::Pattern {
            regex: &AADHAR_REGEX,
            message: "Aadhar must be 12 digits",
        },
        FieldName::FirstName
        | FieldName::LastName
        | FieldName::Username
        | FieldName::Country
        | FieldName::City => Rule::Required,
    }
}

/// Validate a new value for `field`
pub fn validate(field: FieldName, value: &str) -> String {
    rule_for(field).check(field, value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_cases(field: FieldName, cases: &[(&str, &str)]) {
        for (value, expected) in cases {
            assert_eq!(
                validate(field, value),
                *expected,
                "{field} = {value:?} produced the wrong message"
            );
        }
    }

    mod required {
        use super::*;

        #[test]
        fn test_empty_required_fields_name_themselves() {
            let cases = [
                (FieldName::FirstName, "firstName is required"),
                (FieldName::LastName, "lastName is required"),
                (FieldName::Username, "username is required"),
                (FieldName::Country, "country is required"),
                (FieldName::City, "city is required"),
            ];
            for (field, message) in cases {
                assert_eq!(validate(field, ""), message);
            }
        }

        #[test]
        fn test_any_text_satisfies_required() {
            assert_eq!(validate(FieldName::FirstName, "A"), "");
            assert_eq!(validate(FieldName::Username, " "), "");
            assert_eq!(validate(FieldName::City, "Atlantis"), "");
        }
    }

    #[test]
    fn test_email() {
        assert_cases(
            FieldName::Email,
            &[
                ("a@b.co", ""),
                ("first.last@example.org", ""),
                ("abc", "Invalid email"),
                ("a@b", "Invalid email"),
                ("a @b.co", "Invalid email"),
                ("", "Invalid email"),
            ],
        );
    }

    #[test]
    fn test_phone() {
        assert_cases(
            FieldName::Phone,
            &[
                ("+911234567890", ""),
                ("+11234567890", ""),
                ("+9991234567890", ""),
                // 11 digits reads as country code 9 plus ten digits
                ("+91123456789", ""),
                ("1234567890", "Phone must be like +91XXXXXXXXXX"),
                ("+91 1234567890", "Phone must be like +91XXXXXXXXXX"),
                ("+99991234567890", "Phone must be like +91XXXXXXXXXX"),
                ("+9112345678", "Phone must be like +91XXXXXXXXXX"),
                ("", "Phone must be like +91XXXXXXXXXX"),
            ],
        );
    }

    #[test]
    fn test_password_counts_characters() {
        assert_cases(
            FieldName::Password,
            &[
                ("12345", "Minimum 6 characters"),
                ("", "Minimum 6 characters"),
                ("123456", ""),
                ("pässwö", ""),
            ],
        );
    }

    #[test]
    fn test_password_length_is_in_chars_not_utf16_units() {
        // Six code points pass even though they take twelve UTF-16 units
        assert_eq!(validate(FieldName::Password, "😀😀😀😀😀😀"), "");
        // Three astral chars are six UTF-16 units but only three chars
        assert_eq!(
            validate(FieldName::Password, "😀😀😀"),
            "Minimum 6 characters"
        );
    }

    #[test]
    fn test_pan() {
        assert_cases(
            FieldName::Pan,
            &[
                ("ABCDE1234F", ""),
                ("abcde1234f", "Invalid PAN format"),
                ("ABCD1234F", "Invalid PAN format"),
                ("", "Invalid PAN format"),
            ],
        );
    }

    #[test]
    fn test_pan_pattern_is_not_anchored() {
        // Surrounding characters are tolerated as long as a PAN shape appears.
        assert_eq!(validate(FieldName::Pan, "ABCDE1234FXYZ"), "");
        assert_eq!(validate(FieldName::Pan, "xxABCDE1234F"), "");
    }

    #[test]
    fn test_aadhar() {
        assert_cases(
            FieldName::Aadhar,
            &[
                ("123456789012", ""),
                ("12345", "Aadhar must be 12 digits"),
                ("1234567890123", "Aadhar must be 12 digits"),
                ("1234 5678 9012", "Aadhar must be 12 digits"),
            ],
        );
    }

    #[test]
    fn test_digit_rules_reject_non_ascii_digits() {
        // Arabic-Indic digits are Unicode digits but not accepted
        assert_eq!(
            validate(FieldName::Aadhar, "١٢٣٤٥٦٧٨٩٠١٢"),
            "Aadhar must be 12 digits"
        );
    }

    #[test]
    fn test_no_rule_accepts_empty_value() {
        for field in FieldName::ALL {
            assert!(!rule_for(field).accepts(""), "{field} accepted \"\"");
        }
    }
}
