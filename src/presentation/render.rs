use crate::clients::PageSource;
use crate::model::ProductStats;
use crate::presentation::{format_row, Column, MISSING};
use crate::table::TableController;

pub const LOADING: &str = "Loading...";
pub const EMPTY_TABLE: &str = "No products";
pub const NO_STATS: &str = "No statistics available";

const CELL_SEPARATOR: &str = " | ";

pub fn render_header() -> String {
    Column::ALL
        .iter()
        .map(Column::header)
        .collect::<Vec<_>>()
        .join(CELL_SEPARATOR)
}

/// Plain-text lines for the rows currently in the viewport.
///
/// Shows [`LOADING`] while the first page is pending, [`EMPTY_TABLE`] when it came
/// back empty, and appends [`LOADING`] while a later page is pending.
pub fn render_window<S: PageSource>(table: &TableController<S>) -> Vec<String> {
    if !table.is_initial_loaded() {
        return if table.is_loading() {
            vec![LOADING.to_string()]
        } else {
            Vec::new()
        };
    }
    if table.loaded_count() == 0 {
        return vec![EMPTY_TABLE.to_string()];
    }

    let mut lines: Vec<String> = match table.visible_range() {
        Some(range) => table
            .products()
            .skip(range.start)
            .take(range.len())
            .map(|product| format_row(product).join(CELL_SEPARATOR))
            .collect(),
        None => Vec::new(),
    };
    if table.is_fetching_next() {
        lines.push(LOADING.to_string());
    }
    lines
}

/// Summary lines for the stats panel.
pub fn stats_summary(stats: Option<&ProductStats>) -> Vec<String> {
    let Some(stats) = stats else {
        return vec![NO_STATS.to_string()];
    };
    let average_price = stats
        .average_price
        .map_or_else(|| MISSING.to_string(), |p| format!("${p:.2}"));
    let average_rating = stats
        .average_rating
        .map_or_else(|| MISSING.to_string(), |r| format!("{r:.1}"));

    vec![
        format!("Total products: {}", stats.total_products),
        format!("Active: {}", stats.active_products),
        format!("Featured: {}", stats.featured_products),
        format!("Digital: {}", stats.digital_products),
        format!("Out of stock: {}", stats.out_of_stock_products),
        format!("Low stock: {}", stats.low_stock_products),
        format!("Units in stock: {}", stats.total_stock_quantity),
        format!("Inventory value: ${:.2}", stats.total_inventory_value),
        format!("Average price: {average_price}"),
        format!("Average rating: {average_rating}"),
        format!("As of: {}", stats.created_at.format("%Y-%m-%d %H:%M UTC")),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TableConfig;
    use crate::framework::mock::{create_mock_client, expect_list_products};
    use crate::clients::CatalogClient;
    use crate::store::seed;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_stats_summary() {
        assert_eq!(stats_summary(None), vec![NO_STATS.to_string()]);

        let at = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let mut stats = ProductStats::empty(1, at);
        stats.total_products = 120;
        stats.average_price = Some(12.5);
        let lines = stats_summary(Some(&stats));
        assert_eq!(lines[0], "Total products: 120");
        assert!(lines.contains(&"Average price: $12.50".to_string()));
        assert!(lines.contains(&"Average rating: N/A".to_string()));
        assert_eq!(lines.last().unwrap(), "As of: 2024-06-01 12:00 UTC");
    }

    #[test]
    fn test_header_lists_every_column() {
        let header = render_header();
        assert!(header.starts_with("ID | SKU | Name"));
        assert_eq!(header.split(CELL_SEPARATOR).count(), Column::ALL.len());
    }

    #[tokio::test]
    async fn test_render_states() {
        let (client, mut receiver) = create_mock_client(10);
        let config = TableConfig {
            page_size: 30,
            ..TableConfig::default()
        };
        let mut table = TableController::new(CatalogClient::from_query_client(client), config);
        assert!(render_window(&table).is_empty());

        table.initial_load();
        assert_eq!(render_window(&table), vec![LOADING.to_string()]);

        let (_, responder) = expect_list_products(&mut receiver).await.unwrap();
        responder.send(Ok(seed::demo_products(30))).unwrap();
        table.pump().await.unwrap().unwrap();

        // 12 rows on screen plus 10 overscan below
        let lines = render_window(&table);
        assert_eq!(lines.len(), 22);
        assert!(lines[0].starts_with("1 | SKU-00001"));

        table.fetch_next_page();
        let lines = render_window(&table);
        assert_eq!(lines.last().unwrap(), LOADING);
    }

    #[tokio::test]
    async fn test_render_empty_state() {
        let (client, mut receiver) = create_mock_client(10);
        let mut table = TableController::new(
            CatalogClient::from_query_client(client),
            TableConfig::default(),
        );
        table.initial_load();
        let (_, responder) = expect_list_products(&mut receiver).await.unwrap();
        responder.send(Ok(Vec::new())).unwrap();
        table.pump().await.unwrap().unwrap();

        assert_eq!(render_window(&table), vec![EMPTY_TABLE.to_string()]);
    }
}
