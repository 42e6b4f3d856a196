macro_rules! columns {
    ($($variant:ident => $header:literal),+ $(,)?) => {
        /// One column of the product table.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Column {
            $($variant),+
        }

        impl Column {
            /// Every column, in display order.
            pub const ALL: &'static [Column] = &[$(Column::$variant),+];

            pub fn header(&self) -> &'static str {
                match self {
                    $(Column::$variant => $header),+
                }
            }
        }
    };
}

columns! {
    Id => "ID",
    Sku => "SKU",
    Name => "Name",
    Description => "Description",
    Brand => "Brand",
    Category => "Category",
    Subcategory => "Subcategory",
    Price => "Price",
    Cost => "Cost",
    Weight => "Weight",
    Length => "Length",
    Width => "Width",
    Height => "Height",
    Color => "Color",
    Size => "Size",
    Material => "Material",
    Manufacturer => "Manufacturer",
    CountryOfOrigin => "Country of Origin",
    Barcode => "Barcode",
    StockQuantity => "Stock Quantity",
    MinStockLevel => "Min Stock Level",
    MaxStockLevel => "Max Stock Level",
    IsActive => "Is Active",
    IsFeatured => "Is Featured",
    IsDigital => "Is Digital",
    RequiresShipping => "Requires Shipping",
    TaxRate => "Tax Rate",
    WarrantyMonths => "Warranty (Months)",
    SupplierName => "Supplier Name",
    SupplierCode => "Supplier Code",
    Season => "Season",
    Collection => "Collection",
    Style => "Style",
    Pattern => "Pattern",
    FabricComposition => "Fabric Composition",
    CareInstructions => "Care Instructions",
    Tags => "Tags",
    MetaTitle => "Meta Title",
    MetaDescription => "Meta Description",
    Slug => "Slug",
    RatingAverage => "Rating Average",
    RatingCount => "Rating Count",
    ViewCount => "View Count",
    PurchaseCount => "Purchase Count",
    CreatedAt => "Created At",
    UpdatedAt => "Updated At",
    LastRestockedAt => "Last Restocked At",
    DiscontinuedAt => "Discontinued At",
}

/// Headers of every column, in display order.
pub fn columns() -> Vec<&'static str> {
    Column::ALL.iter().map(Column::header).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::PRODUCT_COLUMN_COUNT;

    #[test]
    fn test_one_column_per_product_field() {
        assert_eq!(Column::ALL.len(), PRODUCT_COLUMN_COUNT);
        assert_eq!(columns().first(), Some(&"ID"));
        assert_eq!(columns().last(), Some(&"Discontinued At"));
    }
}
