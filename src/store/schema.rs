use rusqlite::Connection;

use crate::store::error::StoreError;

pub const SCHEMA_VERSION: i32 = 1;

pub fn init_schema(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "
        PRAGMA journal_mode = WAL;
        PRAGMA synchronous = NORMAL;
        PRAGMA busy_timeout = 5000;
    ",
    )?;
    conn.execute_batch(SCHEMA_SQL)?;
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, unixepoch())",
        [SCHEMA_VERSION],
    )?;
    Ok(())
}

/// Timestamps are stored as unix milliseconds so `ORDER BY created_at` is numeric.
const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER PRIMARY KEY,
    applied_at INTEGER NOT NULL
);

CREATE TABLE IF NOT EXISTS products (
    id INTEGER PRIMARY KEY,
    sku TEXT NOT NULL UNIQUE,
    name TEXT NOT NULL,
    description TEXT,
    brand TEXT,
    category TEXT,
    subcategory TEXT,
    price REAL,
    cost REAL,
    weight REAL,
    length REAL,
    width REAL,
    height REAL,
    color TEXT,
    size TEXT,
    material TEXT,
    manufacturer TEXT,
    country_of_origin TEXT,
    barcode TEXT,
    stock_quantity INTEGER NOT NULL DEFAULT 0,
    min_stock_level INTEGER NOT NULL DEFAULT 0,
    max_stock_level INTEGER NOT NULL DEFAULT 0,
    is_active INTEGER NOT NULL DEFAULT 1,
    is_featured INTEGER NOT NULL DEFAULT 0,
    is_digital INTEGER NOT NULL DEFAULT 0,
    requires_shipping INTEGER NOT NULL DEFAULT 1,
    tax_rate REAL,
    warranty_months INTEGER,
    supplier_name TEXT,
    supplier_code TEXT,
    season TEXT,
    collection TEXT,
    style TEXT,
    pattern TEXT,
    fabric_composition TEXT,
    care_instructions TEXT,
    tags TEXT,
    meta_title TEXT,
    meta_description TEXT,
    slug TEXT,
    rating_average REAL,
    rating_count INTEGER NOT NULL DEFAULT 0,
    view_count INTEGER NOT NULL DEFAULT 0,
    purchase_count INTEGER NOT NULL DEFAULT 0,
    created_at INTEGER,
    updated_at INTEGER,
    last_restocked_at INTEGER,
    discontinued_at INTEGER
);

CREATE TABLE IF NOT EXISTS product_stats (
    id INTEGER PRIMARY KEY,
    total_products INTEGER NOT NULL,
    active_products INTEGER NOT NULL,
    featured_products INTEGER NOT NULL,
    digital_products INTEGER NOT NULL,
    out_of_stock_products INTEGER NOT NULL,
    low_stock_products INTEGER NOT NULL,
    total_stock_quantity INTEGER NOT NULL,
    total_inventory_value REAL NOT NULL,
    average_price REAL,
    average_rating REAL,
    created_at INTEGER NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_product_stats_created ON product_stats (created_at);
";

/// Column list shared by the product INSERT and SELECT statements.
pub const PRODUCT_COLUMNS: &str = "id, sku, name, description, brand, category, subcategory, \
    price, cost, weight, length, width, height, color, size, material, manufacturer, \
    country_of_origin, barcode, stock_quantity, min_stock_level, max_stock_level, \
    is_active, is_featured, is_digital, requires_shipping, tax_rate, warranty_months, \
    supplier_name, supplier_code, season, collection, style, pattern, fabric_composition, \
    care_instructions, tags, meta_title, meta_description, slug, rating_average, \
    rating_count, view_count, purchase_count, created_at, updated_at, last_restocked_at, \
    discontinued_at";

pub const PRODUCT_COLUMN_COUNT: usize = 48;

pub const STATS_COLUMNS: &str = "id, total_products, active_products, featured_products, \
    digital_products, out_of_stock_products, low_stock_products, total_stock_quantity, \
    total_inventory_value, average_price, average_rating, created_at";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_column_count_matches_list() {
        assert_eq!(PRODUCT_COLUMNS.split(',').count(), PRODUCT_COLUMN_COUNT);
    }

    #[test]
    fn test_init_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        let version: i32 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn test_schema_version_row_tracks_constant() {
        let conn = Connection::open_in_memory().unwrap();
        init_schema(&conn).unwrap();
        init_schema(&conn).unwrap();
        let rows: Vec<i32> = conn
            .prepare("SELECT version FROM schema_version")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();
        assert_eq!(rows, vec![SCHEMA_VERSION]);
    }
}
