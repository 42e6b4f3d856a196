use std::path::Path;

use chrono::{DateTime, Utc};
use rusqlite::types::{FromSqlError, Type};
use rusqlite::{Connection, Row};

use crate::model::{ListParams, Product, ProductId, ProductStats};
use crate::store::error::StoreError;
use crate::store::schema::{self, PRODUCT_COLUMNS, PRODUCT_COLUMN_COUNT, STATS_COLUMNS};
use crate::store::traits::RecordStore;

/// SQLite-backed record store.
///
/// `rusqlite::Connection` is `Send` but not `Sync`, which is exactly what the query
/// actor needs: the connection moves into the actor task and is never shared.
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn })
    }
}

fn placeholders(count: usize) -> String {
    (1..=count)
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn to_millis(ts: Option<DateTime<Utc>>) -> Option<i64> {
    ts.map(|t| t.timestamp_millis())
}

fn read_timestamp(row: &Row, column: &str) -> rusqlite::Result<Option<DateTime<Utc>>> {
    let idx = row.as_ref().column_index(column)?;
    let millis: Option<i64> = row.get(idx)?;
    match millis {
        None => Ok(None),
        Some(ms) => DateTime::from_timestamp_millis(ms).map(Some).ok_or_else(|| {
            rusqlite::Error::FromSqlConversionFailure(
                idx,
                Type::Integer,
                Box::new(FromSqlError::OutOfRange(ms)),
            )
        }),
    }
}

fn read_product(row: &Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: ProductId(row.get("id")?),
        sku: row.get("sku")?,
        name: row.get("name")?,
        description: row.get("description")?,
        brand: row.get("brand")?,
        category: row.get("category")?,
        subcategory: row.get("subcategory")?,
        price: row.get("price")?,
        cost: row.get("cost")?,
        weight: row.get("weight")?,
        length: row.get("length")?,
        width: row.get("width")?,
        height: row.get("height")?,
        color: row.get("color")?,
        size: row.get("size")?,
        material: row.get("material")?,
        manufacturer: row.get("manufacturer")?,
        country_of_origin: row.get("country_of_origin")?,
        barcode: row.get("barcode")?,
        stock_quantity: row.get("stock_quantity")?,
        min_stock_level: row.get("min_stock_level")?,
        max_stock_level: row.get("max_stock_level")?,
        is_active: row.get("is_active")?,
        is_featured: row.get("is_featured")?,
        is_digital: row.get("is_digital")?,
        requires_shipping: row.get("requires_shipping")?,
        tax_rate: row.get("tax_rate")?,
        warranty_months: row.get("warranty_months")?,
        supplier_name: row.get("supplier_name")?,
        supplier_code: row.get("supplier_code")?,
        season: row.get("season")?,
        collection: row.get("collection")?,
        style: row.get("style")?,
        pattern: row.get("pattern")?,
        fabric_composition: row.get("fabric_composition")?,
        care_instructions: row.get("care_instructions")?,
        tags: row.get("tags")?,
        meta_title: row.get("meta_title")?,
        meta_description: row.get("meta_description")?,
        slug: row.get("slug")?,
        rating_average: row.get("rating_average")?,
        rating_count: row.get("rating_count")?,
        view_count: row.get("view_count")?,
        purchase_count: row.get("purchase_count")?,
        created_at: read_timestamp(row, "created_at")?,
        updated_at: read_timestamp(row, "updated_at")?,
        last_restocked_at: read_timestamp(row, "last_restocked_at")?,
        discontinued_at: read_timestamp(row, "discontinued_at")?,
    })
}

fn read_stats(row: &Row) -> rusqlite::Result<ProductStats> {
    let created_at = match read_timestamp(row, "created_at")? {
        Some(ts) => ts,
        None => {
            let idx = row.as_ref().column_index("created_at")?;
            return Err(rusqlite::Error::InvalidColumnType(idx, "created_at".to_string(), Type::Null));
        }
    };
    Ok(ProductStats {
        id: row.get("id")?,
        total_products: row.get("total_products")?,
        active_products: row.get("active_products")?,
        featured_products: row.get("featured_products")?,
        digital_products: row.get("digital_products")?,
        out_of_stock_products: row.get("out_of_stock_products")?,
        low_stock_products: row.get("low_stock_products")?,
        total_stock_quantity: row.get("total_stock_quantity")?,
        total_inventory_value: row.get("total_inventory_value")?,
        average_price: row.get("average_price")?,
        average_rating: row.get("average_rating")?,
        created_at,
    })
}

impl RecordStore for SqliteStore {
    fn list_products(&self, params: ListParams) -> Result<Vec<Product>, StoreError> {
        // SQLite offsets are signed; anything past i64::MAX is past the end anyway.
        let Ok(offset) = i64::try_from(params.offset) else {
            return Ok(Vec::new());
        };
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id LIMIT ?1 OFFSET ?2"
        ))?;
        let rows = stmt.query_map(rusqlite::params![params.limit as i64, offset], read_product)?;
        let mut products = Vec::new();
        for row in rows {
            products.push(row?);
        }
        Ok(products)
    }

    fn latest_stats(&self) -> Result<Option<ProductStats>, StoreError> {
        let mut stmt = self.conn.prepare_cached(&format!(
            "SELECT {STATS_COLUMNS} FROM product_stats ORDER BY created_at DESC, id DESC LIMIT 1"
        ))?;
        let mut rows = stmt.query_map([], read_stats)?;
        match rows.next() {
            Some(row) => Ok(Some(row?)),
            None => Ok(None),
        }
    }

    fn product_count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        u64::try_from(count).map_err(|_| StoreError::Corrupt(format!("negative row count {count}")))
    }

    fn insert_product(&mut self, p: &Product) -> Result<(), StoreError> {
        let sql = format!(
            "INSERT INTO products ({PRODUCT_COLUMNS}) VALUES ({})",
            placeholders(PRODUCT_COLUMN_COUNT)
        );
        self.conn.execute(
            &sql,
            rusqlite::params![
                p.id.0,
                p.sku,
                p.name,
                p.description,
                p.brand,
                p.category,
                p.subcategory,
                p.price,
                p.cost,
                p.weight,
                p.length,
                p.width,
                p.height,
                p.color,
                p.size,
                p.material,
                p.manufacturer,
                p.country_of_origin,
                p.barcode,
                p.stock_quantity,
                p.min_stock_level,
                p.max_stock_level,
                p.is_active,
                p.is_featured,
                p.is_digital,
                p.requires_shipping,
                p.tax_rate,
                p.warranty_months,
                p.supplier_name,
                p.supplier_code,
                p.season,
                p.collection,
                p.style,
                p.pattern,
                p.fabric_composition,
                p.care_instructions,
                p.tags,
                p.meta_title,
                p.meta_description,
                p.slug,
                p.rating_average,
                p.rating_count,
                p.view_count,
                p.purchase_count,
                to_millis(p.created_at),
                to_millis(p.updated_at),
                to_millis(p.last_restocked_at),
                to_millis(p.discontinued_at),
            ],
        )?;
        Ok(())
    }

    fn insert_stats(&mut self, s: &ProductStats) -> Result<(), StoreError> {
        self.conn.execute(
            &format!("INSERT INTO product_stats ({STATS_COLUMNS}) VALUES ({})", placeholders(12)),
            rusqlite::params![
                s.id,
                s.total_products,
                s.active_products,
                s.featured_products,
                s.digital_products,
                s.out_of_stock_products,
                s.low_stock_products,
                s.total_stock_quantity,
                s.total_inventory_value,
                s.average_price,
                s.average_rating,
                s.created_at.timestamp_millis(),
            ],
        )?;
        Ok(())
    }
}
