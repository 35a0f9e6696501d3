use std::collections::BTreeMap;

use serde::Serialize;

use crate::item::{ItemRef, ItemType};
use crate::pricing::PriceKey;

/// Fixed, ordered set of items supporting aggregate queries
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Collection {
    items: Vec<ItemRef>,
}

impl Collection {
    pub fn new(items: Vec<ItemRef>) -> Self {
        Self { items }
    }

    /// Items ordered by ascending price.
    ///
    /// Prices are compared at two decimals; items with the same rounded
    /// price keep their insertion order.
    pub fn sorted_items(&self) -> BTreeMap<PriceKey, ItemRef> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| (PriceKey::new(item.price_only(), position), item.clone()))
            .collect()
    }

    /// Items whose type is named `item_type`.
    ///
    /// An unknown type name matches nothing.
    pub fn items_by_type(&self, item_type: &str) -> Vec<ItemRef> {
        match item_type.parse::<ItemType>() {
            Ok(item_type) => self.items_of_type(item_type),
            Err(err) => {
                tracing::debug!("No items matched: {}", err);
                Vec::new()
            }
        }
    }

    pub fn items_of_type(&self, item_type: ItemType) -> Vec<ItemRef> {
        self.items
            .iter()
            .filter(|item| item.item_type() == item_type)
            .cloned()
            .collect()
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of every item's own price, extras excluded
    pub fn price(&self) -> f64 {
        self.items.iter().map(|item| item.price_only()).sum()
    }

    /// Sum of every item's price including its extras
    pub fn price_with_extras(&self) -> f64 {
        self.items.iter().map(|item| item.price_with_extras()).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ItemRef> {
        self.items.iter()
    }
}

impl FromIterator<ItemRef> for Collection {
    fn from_iter<I: IntoIterator<Item = ItemRef>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a ItemRef;
    type IntoIter = std::slice::Iter<'a, ItemRef>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
