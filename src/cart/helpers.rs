//! Shopping Cart Business Logic Helpers
//!
//! This module folds the raw cart (one id per add) into per-melon lines.

use std::collections::HashMap;

use tracing::warn;

use super::models::{CartLine, CartSummary};
use crate::catalog::{CatalogLookup, ItemId};

/// Aggregates `cart` into lines and an order total.
///
/// # Behaviour
///
/// * Each id is looked up in the catalog only the first time it is seen;
///   repeats reuse that line and bump its quantity and total.
/// * Prices come from the catalog now, not from when the melon was added.
/// * Ids the catalog does not know are skipped and reported in
///   [`CartSummary::missing`] instead of failing the whole view.
pub fn aggregate_cart<C>(cart: &[ItemId], catalog: &C) -> CartSummary
where
    C: CatalogLookup + ?Sized,
{
    let mut summary = CartSummary::default();
    let mut positions: HashMap<ItemId, usize> = HashMap::new();

    for &id in cart {
        let position = match positions.get(&id) {
            Some(&position) => position,
            None => {
                if summary.missing.contains(&id) {
                    continue;
                }

                let Some(item) = catalog.get(id) else {
                    warn!(melon = id, "cart references a melon missing from the catalog");
                    summary.missing.push(id);
                    continue;
                };

                summary.lines.push(CartLine::for_item(item));
                positions.insert(id, summary.lines.len() - 1);
                summary.lines.len() - 1
            }
        };

        if let Some(line) = summary.lines.get_mut(position) {
            line.add_one();
            summary.order_total += line.unit_cost;
        }
    }

    summary
}
