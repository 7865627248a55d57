//! Melon Catalog Domain Models

use rust_decimal::Decimal;
use serde::Deserialize;

/// Identifier of a catalog item, as it appears in URLs and carts
pub type ItemId = u32;

/// A melon offered for sale
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Item {
    /// Unique catalog identifier
    pub id: ItemId,

    /// Short melon type code (e.g. `musk`)
    pub melon_type: String,

    /// Name shown to shoppers
    pub common_name: String,

    /// Unit price in dollars
    pub price: Decimal,

    /// Picture shown on the detail page
    pub image_url: String,

    /// Flesh colour
    pub color: String,

    /// Whether this variety is seedless
    #[serde(default)]
    pub seedless: bool,
}

impl Item {
    /// Price formatted for display, e.g. `$3.99`.
    pub fn price_str(&self) -> String {
        format_price(self.price)
    }
}

/// Formats a dollar amount with two decimal places.
pub fn format_price(amount: Decimal) -> String {
    format!("${:.2}", amount)
}
