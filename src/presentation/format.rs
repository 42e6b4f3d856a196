use chrono::{DateTime, Utc};

use crate::model::Product;
use crate::presentation::Column;

/// Placeholder for an absent value.
pub const MISSING: &str = "N/A";

/// Text shown in one cell of the table.
///
/// Absent, empty, and zero optional values all render as [`MISSING`].
pub fn format_cell(product: &Product, column: Column) -> String {
    match column {
        Column::Id => product.id.to_string(),
        Column::Sku => product.sku.clone(),
        Column::Name => product.name.clone(),
        Column::Description => text(&product.description),
        Column::Brand => text(&product.brand),
        Column::Category => text(&product.category),
        Column::Subcategory => text(&product.subcategory),
        Column::Price => money(product.price),
        Column::Cost => money(product.cost),
        Column::Weight => number(product.weight),
        Column::Length => number(product.length),
        Column::Width => number(product.width),
        Column::Height => number(product.height),
        Column::Color => text(&product.color),
        Column::Size => text(&product.size),
        Column::Material => text(&product.material),
        Column::Manufacturer => text(&product.manufacturer),
        Column::CountryOfOrigin => text(&product.country_of_origin),
        Column::Barcode => text(&product.barcode),
        Column::StockQuantity => product.stock_quantity.to_string(),
        Column::MinStockLevel => product.min_stock_level.to_string(),
        Column::MaxStockLevel => product.max_stock_level.to_string(),
        Column::IsActive => yes_no(product.is_active),
        Column::IsFeatured => yes_no(product.is_featured),
        Column::IsDigital => yes_no(product.is_digital),
        Column::RequiresShipping => yes_no(product.requires_shipping),
        Column::TaxRate => match present(product.tax_rate) {
            Some(rate) => format!("{:.1}%", rate * 100.0),
            None => MISSING.to_string(),
        },
        Column::WarrantyMonths => match product.warranty_months {
            Some(months) if months != 0 => months.to_string(),
            _ => MISSING.to_string(),
        },
        Column::SupplierName => text(&product.supplier_name),
        Column::SupplierCode => text(&product.supplier_code),
        Column::Season => text(&product.season),
        Column::Collection => text(&product.collection),
        Column::Style => text(&product.style),
        Column::Pattern => text(&product.pattern),
        Column::FabricComposition => text(&product.fabric_composition),
        Column::CareInstructions => text(&product.care_instructions),
        Column::Tags => text(&product.tags),
        Column::MetaTitle => text(&product.meta_title),
        Column::MetaDescription => text(&product.meta_description),
        Column::Slug => text(&product.slug),
        Column::RatingAverage => match present(product.rating_average) {
            Some(rating) => format!("{rating:.1}"),
            None => MISSING.to_string(),
        },
        Column::RatingCount => product.rating_count.to_string(),
        Column::ViewCount => product.view_count.to_string(),
        Column::PurchaseCount => product.purchase_count.to_string(),
        Column::CreatedAt => date(product.created_at),
        Column::UpdatedAt => date(product.updated_at),
        Column::LastRestockedAt => date(product.last_restocked_at),
        Column::DiscontinuedAt => date(product.discontinued_at),
    }
}

/// Every cell of `product`, in column order.
pub fn format_row(product: &Product) -> Vec<String> {
    Column::ALL.iter().map(|&column| format_cell(product, column)).collect()
}

fn present(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}

fn text(value: &Option<String>) -> String {
    match value.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => MISSING.to_string(),
    }
}

fn money(value: Option<f64>) -> String {
    present(value).map_or_else(|| MISSING.to_string(), |v| format!("${v}"))
}

fn number(value: Option<f64>) -> String {
    present(value).map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

fn date(value: Option<DateTime<Utc>>) -> String {
    value.map_or_else(|| MISSING.to_string(), |ts| ts.format("%Y-%m-%d").to_string())
}
