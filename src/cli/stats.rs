use super::ui;
use crate::core::CatalogService;
use anyhow::Result;
use chrono::NaiveDate;
use comfy_table::Cell;
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Renders the daily averages, oldest day first.
pub fn statistics_table(statistics: &BTreeMap<NaiveDate, Decimal>) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Date (UTC)"),
        ui::header_cell("Average price"),
    ]);

    for (date, average) in statistics {
        table.add_row(vec![
            Cell::new(date.format("%Y-%m-%d")),
            ui::price_cell(*average),
        ]);
    }

    table.to_string()
}

pub async fn run(service: &CatalogService) -> Result<()> {
    let statistics = service.get_statistics().await?;
    if statistics.is_empty() {
        println!(
            "{}",
            ui::style_text(
                "No statistics yet: only days before today are reported.",
                ui::StyleType::Subtle
            )
        );
        return Ok(());
    }

    println!("{}\n", ui::style_text("Daily average prices", ui::StyleType::Title));
    println!("{}", statistics_table(&statistics));
    Ok(())
}
