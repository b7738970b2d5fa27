//! The catalog item entity and its money rounding rule.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Number of fractional digits kept for every stored or reported price.
pub const PRICE_SCALE: u32 = 2;

/// Rounds a price half-up to [`PRICE_SCALE`] digits and pins the scale, so
/// `100` becomes `100.00`.
///
/// Values too large to carry two fractional digits keep a smaller scale;
/// use [`try_round_price`] where that must be rejected.
pub fn round_price(price: Decimal) -> Decimal {
    let mut rounded =
        price.round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(PRICE_SCALE);
    rounded
}

/// Like [`round_price`], but `None` when the result cannot be held at
/// exactly [`PRICE_SCALE`] digits.
pub fn try_round_price(price: Decimal) -> Option<Decimal> {
    let rounded = round_price(price);
    (rounded.scale() == PRICE_SCALE).then_some(rounded)
}

/// A priced catalog entry. Items are immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    id: u64,
    title: String,
    price: Decimal,
    created_at: DateTime<Utc>,
}

impl Item {
    /// Builds an item, rounding `price` to the stored scale.
    pub fn new(
        id: u64,
        title: impl Into<String>,
        price: Decimal,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            price: round_price(price),
            created_at,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// UTC calendar date the item was created on.
    pub fn created_on(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
