//! Leaf validators for single values.
//!
//! Every function accepts an absent value and answers `false` for it (except
//! [`validate_url`] with relative URLs allowed). None of them panic.

use uuid::{Uuid, Variant};
use validator::ValidateUrl;

use super::constants::{
    DEEP_LINK_SCHEMES, MIN_PASSWORD_LENGTH, PASSWORD_SPECIAL_CHARACTERS, REGEX_PATTERNS,
};
use crate::utils::date::{parse_date, Clock};

/// Validates an email address after trimming surrounding whitespace
pub fn validate_email<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value
        .into()
        .map(str::trim)
        .is_some_and(|email| REGEX_PATTERNS.email.is_match(email))
}

/// Validates password strength: at least 8 characters drawn from letters,
/// digits and `@$!%*?&`, with at least one lowercase letter, one uppercase
/// letter, one digit and one of the special characters.
///
/// The password is not trimmed, surrounding whitespace is significant.
pub fn validate_password<'a>(value: impl Into<Option<&'a str>>) -> bool {
    let Some(password) = value.into() else {
        return false;
    };

    password.len() >= MIN_PASSWORD_LENGTH
        && REGEX_PATTERNS.password.is_match(password)
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| PASSWORD_SPECIAL_CHARACTERS.contains(c))
}

/// Validates a URL.
///
/// An absent or empty value is valid exactly when relative URLs are allowed,
/// as is any value starting with `/` in that mode. Android deep links
/// (`content://`, `market://`, `intent://`, `app://`) are always accepted.
/// Anything else must look like a web address or parse as an absolute URL.
pub fn validate_url<'a>(value: impl Into<Option<&'a str>>, allow_relative: bool) -> bool {
    let url = match value.into().map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => return allow_relative,
    };

    if allow_relative && url.starts_with('/') {
        return true;
    }

    if DEEP_LINK_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return true;
    }

    REGEX_PATTERNS.url.is_match(url) || url.validate_url()
}

/// Validates a phone number: optional leading `+` then 10 to 15 digits
pub fn validate_phone<'a>(value: impl Into<Option<&'a str>>) -> bool {
    value
        .into()
        .map(str::trim)
        .is_some_and(|phone| REGEX_PATTERNS.phone.is_match(phone))
}

/// Validates a monetary amount.
///
/// # Arguments
/// * `value` - The submitted amount; a non-numeric payload value arrives as `NaN`
///
/// # Returns
/// `true` if the amount is finite, strictly positive and has at most two
/// decimal places
pub fn is_valid_amount(value: impl Into<Option<f64>>) -> bool {
    match value.into() {
        Some(amount) if amount.is_finite() && amount > 0.0 => decimal_places(amount) <= 2,
        _ => false,
    }
}

/// Number of digits after the decimal point in the shortest representation
fn decimal_places(amount: f64) -> usize {
    amount
        .to_string()
        .split_once('.')
        .map_or(0, |(_, fraction)| fraction.len())
}

/// Validates a submitted date string, optionally requiring it to lie in the
/// future according to `clock`
pub fn is_valid_date<'a, C>(
    value: impl Into<Option<&'a str>>,
    must_be_future: bool,
    clock: &C,
) -> bool
where
    C: Clock + ?Sized,
{
    match value.into().and_then(parse_date) {
        Some(date) => !must_be_future || clock.is_date_in_future(&date),
        None => false,
    }
}

/// Validates that both dates parse and `start` is strictly before `end`
pub fn is_valid_date_range<'a>(
    start: impl Into<Option<&'a str>>,
    end: impl Into<Option<&'a str>>,
) -> bool {
    let start = start.into().and_then(parse_date);
    let end = end.into().and_then(parse_date);

    match (start, end) {
        (Some(start), Some(end)) => start < end,
        _ => false,
    }
}

/// Validates a hyphenated 36 character RFC 4122 UUID.
///
/// # Arguments
/// * `value` - the candidate, absent values are rejected
///
/// # Returns
/// `true` when the hyphens sit at the usual places, the version digit is 1
/// to 5 and the variant bits are `10`. The nil UUID is rejected.
pub fn is_valid_uuid<'a>(value: impl Into<Option<&'a str>>) -> bool {
    let Some(uuid) = value.into() else {
        return false;
    };

    let hyphens_in_place = uuid
        .char_indices()
        .all(|(i, c)| matches!(i, 8 | 13 | 18 | 23) == (c == '-'));

    uuid.len() == 36
        && hyphens_in_place
        && Uuid::parse_str(uuid).is_ok_and(|uuid| {
            (1..=5).contains(&uuid.get_version_num()) && uuid.get_variant() == Variant::RFC4122
        })
}
