use std::fmt;
use std::str::FromStr;

use crate::error::EventParseError;

/// One of the four validated inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// Every field, in the order the submit gate checks them.
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Stable identifier of the input, as used in event scripts.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
        }
    }

    /// Message shown next to the field when its rule fails.
    pub fn message(self) -> &'static str {
        match self {
            Field::Name => "Name must be at least 2 letters and contain only letters and spaces",
            Field::Email => "Please enter a valid email address",
            Field::Password => {
                "Password must be at least 8 characters with an uppercase letter, a lowercase letter and a number"
            }
            Field::ConfirmPassword => "Passwords do not match",
        }
    }

    /// Whether the value of this field should stay out of logs.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Field::Name => 0,
            Field::Email => 1,
            Field::Password => 2,
            Field::ConfirmPassword => 3,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = EventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| EventParseError::UnknownField(s.to_string()))
    }
}

/// Current text of the four inputs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: [String; 4],
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> &str {
        &self.values[field.index()]
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    /// Empties every field.
    pub fn clear(&mut self) {
        for value in &mut self.values {
            value.clear();
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.iter().all(String::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_ids() {
        assert_eq!("confirmPassword".parse::<Field>(), Ok(Field::ConfirmPassword));
        assert_eq!("name".parse::<Field>(), Ok(Field::Name));
        assert_eq!(
            "Name".parse::<Field>(),
            Err(EventParseError::UnknownField("Name".into()))
        );
    }

    #[test]
    fn test_display_matches_parse() {
        for field in Field::ALL {
            assert_eq!(field.to_string().parse::<Field>(), Ok(field));
        }
    }

    #[test]
    fn test_values_set_and_clear() {
        let mut values = FieldValues::new();
        values.set(Field::Email, "a@b.com");
        assert_eq!(values.get(Field::Email), "a@b.com");
        assert_eq!(values.get(Field::Name), "");
        assert!(!values.is_empty());

        values.clear();
        assert!(values.is_empty());
    }
}
