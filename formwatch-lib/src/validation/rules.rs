//! Field rules.
//!
//! Pure predicates over the current input text. They are recomputed from
//! scratch on every event; nothing is cached between calls.

use std::sync::LazyLock;

use regex::Regex;

use super::{Field, FieldValues};

static NAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z\s]{2,}$").expect("valid name pattern"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

// Eight or more characters on a single line
static PASSWORD_LENGTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\n\r\x{2028}\x{2029}]{8,}$").expect("valid password length pattern")
});

static LOWERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[a-z]").expect("valid lowercase pattern"));

static UPPERCASE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z]").expect("valid uppercase pattern"));

static DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]").expect("valid digit pattern"));

/// Two or more characters, letters and whitespace only.
pub fn name_rule(value: &str) -> bool {
    NAME.is_match(value)
}

/// `local@domain.tld` with no whitespace and a single `@`.
pub fn email_rule(value: &str) -> bool {
    EMAIL.is_match(value)
}

/// At least 8 characters with a lowercase letter, an uppercase letter and an
/// ASCII digit.
pub fn password_rule(value: &str) -> bool {
    PASSWORD_LENGTH.is_match(value)
        && LOWERCASE.is_match(value)
        && UPPERCASE.is_match(value)
        && DIGIT.is_match(value)
}

/// Exact, case-sensitive equality. No trimming.
pub fn confirm_rule(password: &str, confirm: &str) -> bool {
    password == confirm
}

/// Evaluates the rule for `field` against the current values.
///
/// The confirm rule reads the current password.
pub fn check(field: Field, values: &FieldValues) -> bool {
    let value = values.get(field);
    match field {
        Field::Name => name_rule(value),
        Field::Email => email_rule(value),
        Field::Password => password_rule(value),
        Field::ConfirmPassword => confirm_rule(values.get(Field::Password), value),
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_name_rule() {
        assert!(name_rule("Jo"));
        assert!(name_rule("Jane Doe"));
        assert!(name_rule("  "));
        assert!(!name_rule("J"));
        assert!(!name_rule("J0e"));
        assert!(!name_rule(""));
        assert!(!name_rule("Zoë"));
    }

    #[test]
    fn test_email_rule() {
        assert!(email_rule("a@b.com"));
        assert!(email_rule("jane@example.co.uk"));
        assert!(!email_rule("a@b"));
        assert!(!email_rule("a b@c.com"));
        assert!(!email_rule("a@@b.com"));
        assert!(!email_rule("a@b.com "));
        assert!(!email_rule("@b.com"));
        assert!(!email_rule("a@.com"));
    }

    #[test]
    fn test_password_rule() {
        assert!(password_rule("Abcdefg1"));
        assert!(password_rule("Passw0rd"));
        assert!(!password_rule("abcdefg1"));
        assert!(!password_rule("ABCDEFG1"));
        assert!(!password_rule("Abcdefgh"));
        assert!(!password_rule("Abc123"));
        assert!(!password_rule("Abcd\nefg1"));
    }

    #[test]
    fn test_password_rule_ignores_unicode_digits() {
        // Arabic-Indic digit one
        assert!(!password_rule("Abcdefg\u{0661}"));
    }

    #[test]
    fn test_confirm_rule() {
        assert!(confirm_rule("Abc12345", "Abc12345"));
        assert!(!confirm_rule("Abc12345", "Abc12345 "));
        assert!(!confirm_rule("Abc12345", "abc12345"));
        assert!(confirm_rule("", ""));
    }

    #[test]
    fn test_check_reads_current_password() {
        let mut values = FieldValues::new();
        values.set(Field::ConfirmPassword, "Abc12345");
        assert!(!check(Field::ConfirmPassword, &values));

        values.set(Field::Password, "Abc12345");
        assert!(check(Field::ConfirmPassword, &values));
    }

    proptest! {
        #[test]
        fn prop_name_rule_matches_definition(s in "\\PC{0,12}") {
            let expected = s.chars().count() >= 2
                && s.chars().all(|c| c.is_ascii_alphabetic() || c.is_whitespace());
            prop_assert_eq!(name_rule(&s), expected);
        }

        #[test]
        fn prop_email_rejects_whitespace(local in "[a-z]{1,8}", domain in "[a-z]{1,8}", tld in "[a-z]{2,4}", ws in "[ \t]") {
            let valid = format!("{local}@{domain}.{tld}");
            prop_assert!(email_rule(&valid));
            let spaced = format!("{local}{ws}@{domain}.{tld}");
            prop_assert!(!email_rule(&spaced));
        }

        #[test]
        fn prop_password_rule_matches_definition(s in "[a-zA-Z0-9 !]{0,14}") {
            let expected = s.chars().count() >= 8
                && s.chars().any(|c| c.is_ascii_lowercase())
                && s.chars().any(|c| c.is_ascii_uppercase())
                && s.chars().any(|c| c.is_ascii_digit());
            prop_assert_eq!(password_rule(&s), expected);
        }

        #[test]
        fn prop_confirm_rule_is_equality(p in ".{0,10}", c in ".{0,10}") {
            prop_assert_eq!(confirm_rule(&p, &c), p == c);
            prop_assert!(confirm_rule(&p, &p));
        }
    }
}
