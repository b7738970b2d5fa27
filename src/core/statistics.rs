//! Daily average-price report.

use crate::core::item::{Item, round_price};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// Averages item prices per UTC calendar day, leaving out `today`.
///
/// Sums are exact; each mean is rounded half-up to two decimals. Days are
/// keyed by the date of `created_at`, and only the day equal to `today` is
/// dropped, whatever the items on it look like.
///
/// Fails when a day's prices add up past what `Decimal` can hold.
pub fn compute_daily_averages(
    items: &[Item],
    today: NaiveDate,
) -> Result<BTreeMap<NaiveDate, Decimal>> {
    let mut prices_by_date: BTreeMap<NaiveDate, Vec<Decimal>> = BTreeMap::new();
    for item in items {
        prices_by_date
            .entry(item.created_on())
            .or_default()
            .push(item.price());
    }

    if prices_by_date.remove(&today).is_some() {
        debug!("Excluded today's prices ({today}) from statistics");
    }

    prices_by_date
        .into_iter()
        .map(|(date, prices)| {
            average_price(&prices)
                .map(|average| (date, average))
                .ok_or_else(|| anyhow!("Average price for {date} is out of range"))
        })
        .collect()
}

fn average_price(prices: &[Decimal]) -> Option<Decimal> {
    let sum = prices
        .iter()
        .try_fold(Decimal::ZERO, |sum, price| sum.checked_add(*price))?;
    let average = sum.checked_div(Decimal::from(prices.len()))?;
    Some(round_price(average))
}
