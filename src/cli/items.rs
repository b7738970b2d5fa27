use super::ui;
use crate::core::{CatalogService, Item};
use anyhow::Result;
use comfy_table::{Cell, CellAlignment};
use rust_decimal::Decimal;

/// Renders items as a table, one row per item.
pub fn items_table(items: &[Item]) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Title"),
        ui::header_cell("Price"),
        ui::header_cell("Created (UTC)"),
    ]);

    for item in items {
        table.add_row(vec![
            Cell::new(item.id()).set_alignment(CellAlignment::Right),
            Cell::new(item.title()),
            ui::price_cell(item.price()),
            Cell::new(item.created_at().format("%Y-%m-%d %H:%M:%S")),
        ]);
    }

    table.to_string()
}

pub async fn run_add(
    service: &CatalogService,
    title: Option<&str>,
    price: Option<Decimal>,
) -> Result<()> {
    let item = service.add_item(title, price).await?;
    println!("{}\n", ui::style_text("Item added", ui::StyleType::Title));
    println!("{}", items_table(std::slice::from_ref(&item)));
    Ok(())
}

pub async fn run_list(service: &CatalogService) -> Result<()> {
    let items = service.list_items().await?;
    if items.is_empty() {
        println!("{}", ui::style_text("No items stored yet.", ui::StyleType::Subtle));
        return Ok(());
    }

    println!("{}\n", ui::style_text("Items", ui::StyleType::Title));
    println!("{}", items_table(&items));
    println!(
        "\n{} {}",
        ui::style_text("Total items:", ui::StyleType::TotalLabel),
        ui::style_text(&items.len().to_string(), ui::StyleType::TotalValue)
    );
    Ok(())
}
