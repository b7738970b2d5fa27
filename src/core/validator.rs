//! Business rules an item must satisfy before it is stored.

use crate::core::error::CatalogError;
use crate::core::item::try_round_price;
use rust_decimal::Decimal;
use std::collections::HashSet;

pub const MIN_TITLE_LENGTH: usize = 3;
pub const MAX_TITLE_LENGTH: usize = 20;
pub const MIN_PRICE: i64 = 15;

/// Checks presence, length and uniqueness of `title`, in that order, and
/// hands back the title untouched.
pub fn validate_title<'a>(
    title: Option<&'a str>,
    existing_titles: &HashSet<String>,
) -> Result<&'a str, CatalogError> {
    let title = validate_title_shape(title)?;
    validate_title_unique(title, existing_titles)?;
    Ok(title)
}

/// Presence and length checks, which need no stored data.
///
/// Length is the UTF-16 code unit count of the raw title, so surrounding
/// whitespace counts and characters outside the BMP count twice.
pub fn validate_title_shape(title: Option<&str>) -> Result<&str, CatalogError> {
    let title = match title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(CatalogError::invalid_argument("Title is mandatory")),
    };

    let length = title.encode_utf16().count();
    if !(MIN_TITLE_LENGTH..=MAX_TITLE_LENGTH).contains(&length) {
        return Err(CatalogError::invalid_argument(title_length_message()));
    }

    Ok(title)
}

/// Exact, case-sensitive match against `existing_titles`.
pub fn validate_title_unique(
    title: &str,
    existing_titles: &HashSet<String>,
) -> Result<(), CatalogError> {
    if existing_titles.contains(title) {
        return Err(CatalogError::invalid_argument("Title is not unique"));
    }
    Ok(())
}

/// Checks presence of `price` and the lower bound, before any rounding.
///
/// Prices that cannot be stored with two fractional digits are rejected as
/// too large.
pub fn validate_price(price: Option<Decimal>) -> Result<Decimal, CatalogError> {
    let Some(price) = price else {
        return Err(CatalogError::invalid_argument("Price is mandatory"));
    };

    if price < Decimal::from(MIN_PRICE) {
        return Err(CatalogError::invalid_argument(format!(
            "Price is less than {MIN_PRICE}"
        )));
    }

    if try_round_price(price).is_none() {
        return Err(CatalogError::invalid_argument("Price is too large"));
    }

    Ok(price)
}

// Existing clients match on this exact text, lower bound repeated included.
fn title_length_message() -> String {
    format!("Title length should be from {MIN_TITLE_LENGTH} to {MIN_TITLE_LENGTH}")
}
