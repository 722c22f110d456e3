//! Built-in value checks.
//!
//! Each check is a pure, total function over a [`FieldValue`]. Patterns are
//! compiled once on first use.

use std::sync::LazyLock;

use regex::Regex;

use crate::value::FieldValue;

static TIME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{2}:[0-9]{2}(?::[0-9]{2})?$").unwrap());

static DATE_TIME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9]{4}-[0-9]{2}-[0-9]{2}(?:T|\s)[0-9]{2}:[0-9]{2}:[0-9]{2}$").unwrap()
});

static PERSON_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[a-яa-záéíñóúüàèìîòùäößẞæøåØąćęłńśźżăâșțôëêïçûÿœ '’-]{2,35}$").unwrap()
});

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[0-9a-z._\-]{2,30}@[0-9a-z._\-]{2,25}\.[a-z]{2,15}$").unwrap()
});

static PHONE_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\+?[0-9]{7,18}$").unwrap());

static COUNTRY2_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-zA-Z]{2}$").unwrap());

static NUMBER_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^-?[0-9]{1,50}$").unwrap());

static LOGIN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z0-9_@.]{3,40}$").unwrap());

// Prefix match: only the first 8..=40 characters are constrained.
static PASSWORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[0-9a-z_\-.,:@!#$%^&*]{8,40}").unwrap());

static CRYPTO_WALLET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w{24,88}$").unwrap());

fn matches(regex: &Regex, value: &FieldValue) -> bool {
    regex.is_match(&value.to_text())
}

/// `HH:MM` or `HH:MM:SS`.
pub fn time(value: &FieldValue) -> bool {
    matches(&TIME_REGEX, value)
}

/// `YYYY-MM-DD HH:MM:SS` with `T` or whitespace as separator.
pub fn date_time(value: &FieldValue) -> bool {
    matches(&DATE_TIME_REGEX, value)
}

/// Given name: 2 to 35 letters, spaces, apostrophes or hyphens.
pub fn first_name(value: &FieldValue) -> bool {
    matches(&PERSON_NAME_REGEX, value)
}

/// Family name, same alphabet as [`first_name`].
pub fn last_name(value: &FieldValue) -> bool {
    matches(&PERSON_NAME_REGEX, value)
}

pub fn email(value: &FieldValue) -> bool {
    matches(&EMAIL_REGEX, value)
}

/// Optional leading `+` followed by 7 to 18 digits.
pub fn phone(value: &FieldValue) -> bool {
    matches(&PHONE_REGEX, value)
}

/// Two-letter country code.
pub fn country2(value: &FieldValue) -> bool {
    matches(&COUNTRY2_REGEX, value)
}

/// Signed integer with up to 50 digits.
pub fn number(value: &FieldValue) -> bool {
    matches(&NUMBER_REGEX, value)
}

/// A real boolean, or the text `true` / `false`.
pub fn is_bool(value: &FieldValue) -> bool {
    match value {
        FieldValue::Bool(_) => true,
        FieldValue::Text(s) => s == "true" || s == "false",
        _ => false,
    }
}

pub fn login(value: &FieldValue) -> bool {
    matches(&LOGIN_REGEX, value)
}

pub fn password(value: &FieldValue) -> bool {
    matches(&PASSWORD_REGEX, value)
}

/// Wallet address: 24 to 88 word characters.
pub fn crypto_wallet(value: &FieldValue) -> bool {
    matches(&CRYPTO_WALLET_REGEX, value)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn text(s: &str) -> FieldValue {
        FieldValue::from(s)
    }

    #[rstest]
    #[case("09:30", true)]
    #[case("23:59:59", true)]
    #[case("9:30", false)]
    #[case("09:30:5", false)]
    #[case("noon", false)]
    fn time_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(time(&text(input)), expected);
    }

    #[rstest]
    #[case("2024-02-29 10:00:00", true)]
    #[case("2024-02-29T10:00:00", true)]
    #[case("2024-02-29t10:00:00", true)]
    #[case("2024-02-29", false)]
    #[case("2024-02-29 10:00", false)]
    fn date_time_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(date_time(&text(input)), expected);
    }

    #[rstest]
    #[case("Ann", true)]
    #[case("Jean-Luc", true)]
    #[case("O'Brien", true)]
    #[case("Zoë", true)]
    #[case("Анна", true)]
    #[case("A", false)]
    #[case("R2D2", false)]
    fn person_name_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(first_name(&text(input)), expected);
        assert_eq!(last_name(&text(input)), expected);
    }

    #[rstest]
    #[case("user@example.com", true)]
    #[case("First.Last@Mail.Example.ORG", true)]
    #[case("bad", false)]
    #[case("a@example.com", false)]
    #[case("user@example.c", false)]
    #[case("user@@example.com", false)]
    fn email_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(email(&text(input)), expected);
    }

    #[rstest]
    #[case("+4915112345678", true)]
    #[case("1234567", true)]
    #[case("123456", false)]
    #[case("+49 151 1234", false)]
    fn phone_cases(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(phone(&text(input)), expected);
    }

    #[test]
    fn country2_requires_two_ascii_letters() {
        assert!(country2(&text("de")));
        assert!(country2(&text("US")));
        assert!(!country2(&text("USA")));
        assert!(!country2(&text("1A")));
    }

    #[test]
    fn number_accepts_integers_and_numeric_values() {
        assert!(number(&text("-42")));
        assert!(number(&FieldValue::Int(7)));
        assert!(!number(&text("4.2")));
        assert!(!number(&FieldValue::Float(4.2)));
        assert!(!number(&text("")));
    }

    #[test]
    fn is_bool_accepts_bool_and_literal_text() {
        assert!(is_bool(&FieldValue::Bool(false)));
        assert!(is_bool(&text("true")));
        assert!(is_bool(&text("false")));
        assert!(!is_bool(&text("TRUE")));
        assert!(!is_bool(&FieldValue::Int(1)));
    }

    #[test]
    fn login_and_password() {
        assert!(login(&text("john_doe@corp.io")));
        assert!(!login(&text("jo")));
        assert!(password(&text("s3cret!pass")));
        assert!(!password(&text("short")));
        // only the prefix is constrained
        assert!(password(&text("longenough then anything")));
    }

    #[test]
    fn crypto_wallet_length_bounds() {
        assert!(crypto_wallet(&text(&"a".repeat(24))));
        assert!(!crypto_wallet(&text(&"a".repeat(23))));
        assert!(!crypto_wallet(&text(&"a".repeat(89))));
    }
}
