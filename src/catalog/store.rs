//! Catalog Storage
//!
//! The storefront only ever reads the catalog, so handlers see it through
//! the [`CatalogLookup`] trait. [`InMemoryCatalog`] is the one implementation:
//! a list of items sorted by id, loaded from a TOML document.

use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::info;

use super::{
    errors::CatalogError,
    models::{Item, ItemId},
};

/// Catalog compiled into the binary, used when no catalog file is configured
const BUILTIN_CATALOG: &str = include_str!("../../assets/melons.toml");

/// Read access to the product catalog
pub trait CatalogLookup: Send + Sync {
    /// Returns the item with the given id, if any.
    fn get(&self, id: ItemId) -> Option<&Item>;

    /// Returns every item, ordered by id.
    fn all(&self) -> &[Item];
}

/// On-disk shape of a catalog document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    melons: Vec<Item>,
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    /// Sorted by `id`, ids unique
    items: Vec<Item>,
}

impl InMemoryCatalog {
    /// Builds a catalog from a list of items.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::DuplicateId`] if two items share an id and
    /// [`CatalogError::NegativePrice`] if any price is below zero.
    pub fn from_items(mut items: Vec<Item>) -> Result<Self, CatalogError> {
        items.sort_by_key(|item| item.id);

        for pair in items.windows(2) {
            if let [first, second] = pair {
                if first.id == second.id {
                    return Err(CatalogError::DuplicateId(first.id));
                }
            }
        }

        if let Some(item) = items.iter().find(|item| item.price < Decimal::ZERO) {
            return Err(CatalogError::NegativePrice(item.id));
        }

        Ok(Self { items })
    }

    /// Parses a TOML catalog document made of `[[melons]]` tables.
    pub fn from_toml(source: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(source)?;
        Self::from_items(file.melons)
    }

    /// Loads a catalog document from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let source = std::fs::read_to_string(path).map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_toml(&source)?;
        info!(path = %path.display(), melons = catalog.len(), "loaded catalog");

        Ok(catalog)
    }

    /// The catalog that ships with the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_toml(BUILTIN_CATALOG)
    }

    /// Number of items in the catalog
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl CatalogLookup for InMemoryCatalog {
    fn get(&self, id: ItemId) -> Option<&Item> {
        self.items
            .binary_search_by_key(&id, |item| item.id)
            .ok()
            .and_then(|index| self.items.get(index))
    }

    fn all(&self) -> &[Item] {
        &self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn melon(id: ItemId, name: &str, price: &str) -> Item {
        Item {
            id,
            melon_type: name.to_lowercase(),
            common_name: name.into(),
            price: Decimal::from_str(price).unwrap(),
            image_url: format!("/static/img/{id}.jpg"),
        color: "green".into(),
            seedless: false,
        }
    }

    #[test]
    fn test_lookup_returns_stored_attributes() {
        let catalog = InMemoryCatalog::from_items(vec![
            melon(2, "Crenshaw", "5.99"),
            melon(1, "Muskmelon", "3.99"),
        ])
        .unwrap();

        let item = catalog.get(2).expect("Crenshaw should be present");
        assert_eq!(item.common_name, "Crenshaw");
        assert_eq!(item.price, Decimal::from_str("5.99").unwrap());

        assert!(catalog.get(3).is_none());
    }

    #[test]
    fn test_all_is_ordered_by_id() {
        let catalog = InMemoryCatalog::from_items(vec![
            melon(3, "Casaba", "2.95"),
            melon(1, "Muskmelon", "3.99"),
            melon(2, "Crenshaw", "5.99"),
        ])
        .unwrap();

        let ids: Vec<ItemId> = catalog.all().iter().map(|item| item.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_ids_are_rejected() {
        let result = InMemoryCatalog::from_items(vec![
            melon(1, "Muskmelon", "3.99"),
            melon(1, "Crenshaw", "5.99"),
        ]);

        assert!(matches!(result, Err(CatalogError::DuplicateId(1))));
    }

    #[test]
    fn test_negative_price_is_rejected() {
        let result = InMemoryCatalog::from_items(vec![melon(4, "Casaba", "-1.00")]);

        assert!(matches!(result, Err(CatalogError::NegativePrice(4))));
    }

    #[test]
    fn test_from_toml_parses_melon_tables() {
        let catalog = InMemoryCatalog::from_toml(
            r#"
            [[melons]]
            id = 7
            melon_type = "gal"
            common_name = "Galia"
            price = "4.10"
            image_url = "/static/img/galia.jpg"
            color = "green"
            seedless = true
            "#,
        )
        .unwrap();

        let galia = catalog.get(7).unwrap();
        assert_eq!(galia.common_name, "Galia");
        assert_eq!(galia.price_str(), "$4.10");
        assert_eq!(galia.image_url, "/static/img/galia.jpg");
        assert!(galia.seedless);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = InMemoryCatalog::from_toml("[[melons]]\nid = \"one\"\n");

        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = InMemoryCatalog::builtin().unwrap();

        assert!(!catalog.is_empty());
        assert_eq!(catalog.get(1).unwrap().common_name, "Muskmelon");
    }
}
