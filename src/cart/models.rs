//! Shopping Cart Domain Models

use rust_decimal::Decimal;

use crate::catalog::{Item, ItemId};

// =============================================================================
// Cart Domain Models
// =============================================================================

/// One aggregated row of the cart view
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// Catalog id of the melon
    pub id: ItemId,

    /// Name of the melon
    pub common_name: String,

    /// Catalog price at the time the cart is viewed
    pub unit_cost: Decimal,

    /// Number of times the melon was added
    pub quantity: u32,

    /// `unit_cost * quantity`
    pub line_total: Decimal,
}

impl CartLine {
    /// An empty line for `item`; quantity and total start at zero.
    pub fn for_item(item: &Item) -> Self {
        Self {
            id: item.id,
            common_name: item.common_name.clone(),
            unit_cost: item.price,
            quantity: 0,
            line_total: Decimal::ZERO,
        }
    }

    /// Counts one more unit of this melon.
    pub fn add_one(&mut self) {
        self.quantity += 1;
        self.line_total += self.unit_cost;
    }
}

/// Result of replaying a cart against the catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartSummary {
    /// Lines in the order each melon was first added
    pub lines: Vec<CartLine>,

    /// Sum of all line totals
    pub order_total: Decimal,

    /// Ids in the cart that the catalog no longer knows, each listed once
    pub missing: Vec<ItemId>,
}

impl CartSummary {
    /// Whether there is nothing to show
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Finds the line for `id`
    pub fn line(&self, id: ItemId) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }
}
