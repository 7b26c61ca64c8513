//! Form field names and descriptors

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when addressing the form by raw field name
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0}")]
    UnknownField(String),
}

/// The fixed set of registration fields, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FirstName,
    LastName,
    Username,
    Email,
    Password,
    Phone,
    Country,
    City,
    Pan,
    Aadhar,
}

impl FieldName {
    pub const ALL: [FieldName; 10] = [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Username,
        FieldName::Email,
        FieldName::Password,
        FieldName::Phone,
        FieldName::Country,
        FieldName::City,
        FieldName::Pan,
        FieldName::Aadhar,
    ];

    /// Key used in error messages and in the submitted record
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Username => "username",
            Self::Email => "email",
            Self::Password => "password",
            Self::Phone => "phone",
            Self::Country => "country",
            Self::City => "city",
            Self::Pan => "pan",
            Self::Aadhar => "aadhar",
        }
    }

    /// Position of the field in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldName {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// How a field takes input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Text input that is masked unless the form shows passwords
    Password,
    /// Picks from a fixed option list instead of free typing
    Select,
}

/// Static configuration of a single form field
#[derive(Debug, Clone, Copy)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
}

impl FormField {
    const fn text(name: FieldName, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            kind: FieldKind::Text,
        }
    }

    const fn password(name: FieldName, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            kind: FieldKind::Password,
        }
    }

    const fn select(name: FieldName, label: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            label,
            placeholder,
            kind: FieldKind::Select,
        }
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    /// Look up the descriptor for a field
    pub fn for_name(name: FieldName) -> &'static FormField {
        &REGISTRATION_FIELDS[name.index()]
    }
}

/// Descriptors for every registration field, indexed by `FieldName::index`
pub const REGISTRATION_FIELDS: [FormField; 10] = [
    FormField::text(FieldName::FirstName, "First Name", "Enter First Name"),
    FormField::text(FieldName::LastName, "Last Name", "Enter Last Name"),
    FormField::text(FieldName::Username, "Username", "Enter Username"),
    FormField::text(FieldName::Email, "Email", "Enter Email"),
    FormField::password(FieldName::Password, "Password", "Enter Password"),
    FormField::text(FieldName::Phone, "Phone No. (+Country Code)", "+91XXXXXXXXXX"),
    FormField::select(FieldName::Country, "Country", "Select Country"),
    FormField::select(FieldName::City, "City", "Select City"),
    FormField::text(FieldName::Pan, "PAN Number", "Enter PAN Number"),
    FormField::text(FieldName::Aadhar, "Aadhar Number", "Enter Aadhar Number"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, name) in FieldName::ALL.iter().enumerate() {
            assert_eq!(name.index(), i);
            assert_eq!(FieldName::from_index(i), Some(*name));
        }
        assert_eq!(FieldName::from_index(10), None);
    }

    #[test]
    fn test_from_str_round_trips_keys() {
        assert_eq!("firstName".parse::<FieldName>(), Ok(FieldName::FirstName));
        assert_eq!("aadhar".parse::<FieldName>(), Ok(FieldName::Aadhar));
    }

    #[test]
    fn test_from_str_rejects_unknown_and_wrong_case() {
        assert_eq!(
            "FirstName".parse::<FieldName>(),
            Err(FieldError::UnknownField("FirstName".to_string()))
        );
        assert!("zip".parse::<FieldName>().is_err());
    }

    #[test]
    fn test_unknown_field_message() {
        let err = FieldError::UnknownField("zip".to_string());
        assert_eq!(err.to_string(), "unknown form field: zip");
    }

    #[test]
    fn test_descriptors_line_up_with_names() {
        for name in FieldName::ALL {
            assert_eq!(FormField::for_name(name).name, name);
        }
    }

    #[test]
    fn test_field_kinds() {
        assert_eq!(
            FormField::for_name(FieldName::Password).kind,
            FieldKind::Password
        );
        assert!(FormField::for_name(FieldName::Country).is_select());
        assert!(FormField::for_name(FieldName::City).is_select());
        assert!(!FormField::for_name(FieldName::Phone).is_select());
        assert_eq!(FormField::for_name(FieldName::Phone).placeholder, "+91XXXXXXXXXX");
    }
}
