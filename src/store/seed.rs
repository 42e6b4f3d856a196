//! Deterministic demo data.
//!
//! The generated catalog is a pure function of the product id, so a store seeded with
//! `n` products always holds ids `1..=n` with the same contents.

use chrono::{DateTime, Duration, TimeZone, Utc};
use tracing::info;

use crate::model::{Product, ProductStats};
use crate::store::error::StoreError;
use crate::store::traits::RecordStore;

const BRANDS: &[&str] = &["Northwind", "Contoso", "Fabrikam", "Tailspin", "Litware"];
const CATEGORIES: &[(&str, &str)] = &[
    ("Apparel", "Shirts"),
    ("Apparel", "Outerwear"),
    ("Home", "Lighting"),
    ("Home", "Kitchen"),
    ("Software", "Licenses"),
];
const COLORS: &[&str] = &["Black", "White", "Navy", "Olive", "Rust"];
const SIZES: &[&str] = &["S", "M", "L", "XL"];
const SEASONS: &[&str] = &["Spring", "Summer", "Autumn", "Winter"];
const COUNTRIES: &[&str] = &["PT", "VN", "DE", "US", "MX"];

fn pick<T: Copy>(items: &[T], id: i64) -> T {
    items[(id.unsigned_abs() as usize) % items.len()]
}

fn epoch() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Builds the demo product for `id`.
pub fn demo_product(id: i64) -> Product {
    let (category, subcategory) = pick(CATEGORIES, id);
    let is_digital = category == "Software";
    let brand = pick(BRANDS, id / 3);
    let price = 5.0 + (id % 97) as f64 * 1.25;
    let created_at = epoch() + Duration::hours(id);

    Product {
        description: (id % 7 != 0).then(|| format!("{brand} {subcategory} item number {id}")),
        brand: Some(brand.to_string()),
        category: Some(category.to_string()),
        subcategory: Some(subcategory.to_string()),
        price: Some(price),
        cost: Some(price * 0.6),
        weight: (!is_digital).then(|| 0.25 + (id % 10) as f64 * 0.1),
        length: (!is_digital).then(|| 10.0 + (id % 5) as f64),
        width: (!is_digital).then(|| 8.0 + (id % 4) as f64),
        height: (!is_digital).then(|| 2.0 + (id % 3) as f64),
        color: (!is_digital).then(|| pick(COLORS, id).to_string()),
        size: (category == "Apparel").then(|| pick(SIZES, id).to_string()),
        material: (category == "Apparel").then(|| "Cotton".to_string()),
        manufacturer: Some(format!("{brand} Manufacturing")),
        country_of_origin: Some(pick(COUNTRIES, id).to_string()),
        barcode: Some(format!("{:013}", 4_006_381_000_000_i64 + id)),
        stock_quantity: ((id * 37) % 150) as i32,
        min_stock_level: 10,
        max_stock_level: 200,
        is_active: id % 11 != 0,
        is_featured: id % 9 == 0,
        is_digital,
        requires_shipping: !is_digital,
        tax_rate: Some(if is_digital { 0.0 } else { 0.23 }),
        warranty_months: (category == "Home").then_some(24),
        supplier_name: Some(format!("{brand} Supply")),
        supplier_code: Some(format!("SUP-{:03}", id % 40)),
        season: (category == "Apparel").then(|| pick(SEASONS, id).to_string()),
        collection: Some(format!("{} Collection", pick(SEASONS, id / 4))),
        style: Some("Classic".to_string()),
        pattern: (category == "Apparel").then(|| "Solid".to_string()),
        fabric_composition: (category == "Apparel").then(|| "100% cotton".to_string()),
        care_instructions: (category == "Apparel").then(|| "Machine wash cold".to_string()),
        tags: Some(format!("{},{}", category.to_lowercase(), subcategory.to_lowercase())),
        meta_title: Some(format!("{brand} {subcategory} #{id}")),
        meta_description: None,
        slug: Some(format!("{}-{id}", subcategory.to_lowercase())),
        rating_average: (id % 5 != 0).then(|| 3.0 + (id % 20) as f64 / 10.0),
        rating_count: ((id * 13) % 500) as i32,
        view_count: ((id * 101) % 10_000) as i32,
        purchase_count: ((id * 7) % 800) as i32,
        created_at: Some(created_at),
        updated_at: Some(created_at + Duration::days(3)),
        last_restocked_at: (id % 4 == 0).then(|| created_at + Duration::days(10)),
        discontinued_at: (id % 11 == 0).then(|| created_at + Duration::days(30)),
        ..Product::new(id, format!("SKU-{id:05}"), format!("{brand} {subcategory} {id}"))
    }
}

/// Demo products with ids `1..=count`.
pub fn demo_products(count: usize) -> Vec<Product> {
    (1..=count as i64).map(demo_product).collect()
}

/// Aggregates a statistics snapshot over `products`.
pub fn aggregate_stats(products: &[Product], id: i64, created_at: DateTime<Utc>) -> ProductStats {
    let mut stats = ProductStats::empty(id, created_at);
    let mut price_sum = 0.0;
    let mut priced = 0usize;
    let mut rating_sum = 0.0;
    let mut rated = 0usize;

    for p in products {
        stats.total_products += 1;
        stats.active_products += i64::from(p.is_active);
        stats.featured_products += i64::from(p.is_featured);
        stats.digital_products += i64::from(p.is_digital);
        stats.out_of_stock_products += i64::from(p.stock_quantity <= 0);
        stats.low_stock_products += i64::from(p.is_low_stock());
        stats.total_stock_quantity += i64::from(p.stock_quantity);
        if let Some(price) = p.price {
            price_sum += price;
            priced += 1;
            stats.total_inventory_value += price * f64::from(p.stock_quantity.max(0));
        }
        if let Some(rating) = p.rating_average {
            rating_sum += rating;
            rated += 1;
        }
    }

    stats.average_price = (priced > 0).then(|| price_sum / priced as f64);
    stats.average_rating = (rated > 0).then(|| rating_sum / rated as f64);
    stats
}

/// Seeds `store` with `count` demo products and one statistics snapshot taken at `now`.
pub fn populate<S: RecordStore>(
    store: &mut S,
    count: usize,
    now: DateTime<Utc>,
) -> Result<(), StoreError> {
    let products = demo_products(count);
    for product in &products {
        store.insert_product(product)?;
    }
    if count > 0 {
        store.insert_stats(&aggregate_stats(&products, 1, now))?;
    }
    info!(products = count, "Seeded record store");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_product_is_deterministic() {
        assert_eq!(demo_product(17), demo_product(17));
        assert_eq!(demo_product(17).sku, "SKU-00017");
    }

    #[test]
    fn test_demo_products_have_sequential_ids() {
        let ids: Vec<i64> = demo_products(5).iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_aggregate_counts_flags() {
        let products = demo_products(22);
        let stats = aggregate_stats(&products, 1, epoch());
        assert_eq!(stats.total_products, 22);
        // ids 11 and 22 are inactive
        assert_eq!(stats.active_products, 20);
        // ids 9 and 18 are featured
        assert_eq!(stats.featured_products, 2);
        assert!(stats.average_price.is_some());
    }

    #[test]
    fn test_aggregate_of_nothing_has_no_averages() {
        let stats = aggregate_stats(&[], 1, epoch());
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_price, None);
        assert_eq!(stats.average_rating, None);
    }
}
