use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::collection::Collection;
use crate::{CatalogError, CatalogResult};

/// Shared handle to a frozen item. The same item may sit in several collections.
pub type ItemRef = Arc<Item>;

/// Item types in the catalog
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Television,
    Console,
    Microwave,
    Controller,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Console,
        ItemType::Microwave,
        ItemType::Television,
        ItemType::Controller,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Television => "television",
            ItemType::Console => "console",
            ItemType::Microwave => "microwave",
            ItemType::Controller => "controller",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemType::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| CatalogError::UnknownItemType(s.to_string()))
    }
}

/// Cap on the number of extras an item accepts
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExtrasLimit {
    #[default]
    Unlimited,
    AtMost(usize),
}

impl ExtrasLimit {
    /// Build a limit from a raw count where `-1` means unlimited
    pub fn from_raw(raw: i64) -> CatalogResult<Self> {
        match raw {
            -1 => Ok(ExtrasLimit::Unlimited),
            n => usize::try_from(n)
                .map(ExtrasLimit::AtMost)
                .map_err(|_| CatalogError::InvalidExtrasLimit(n)),
        }
    }

    /// Check a candidate extras count against this limit
    pub fn check(&self, requested: usize) -> CatalogResult<()> {
        match *self {
            ExtrasLimit::AtMost(limit) if requested > limit => {
                Err(CatalogError::CapacityExceeded { limit, requested })
            }
            _ => Ok(()),
        }
    }
}

impl fmt::Display for ExtrasLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtrasLimit::Unlimited => write!(f, "unlimited"),
            ExtrasLimit::AtMost(n) => write!(f, "{}", n),
        }
    }
}

/// A single electronic item with optional bundled extras
#[derive(Debug, Serialize)]
pub struct Item {
    id: Uuid,
    item_type: ItemType,
    price: f64,
    is_wired: bool,
    max_extras: ExtrasLimit,
    extras: Option<Collection>,
}

impl Item {
    /// Wireless item of the given type, priced at zero, with no cap on extras
    pub fn new(item_type: ItemType) -> Self {
        Self {
            id: Uuid::new_v4(),
            item_type,
            price: 0.0,
            is_wired: false,
            max_extras: ExtrasLimit::Unlimited,
            extras: None,
        }
    }

    pub fn priced(item_type: ItemType, price: f64) -> CatalogResult<Self> {
        let mut item = Self::new(item_type);
        item.set_price(price)?;
        Ok(item)
    }

    pub fn television() -> Self {
        Self::new(ItemType::Television)
    }

    pub fn console() -> Self {
        Self::new(ItemType::Console)
    }

    pub fn microwave() -> Self {
        Self::new(ItemType::Microwave)
    }

    pub fn controller() -> Self {
        Self::new(ItemType::Controller)
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn item_type(&self) -> ItemType {
        self.item_type
    }

    pub fn is_wired(&self) -> bool {
        self.is_wired
    }

    pub fn max_extras(&self) -> ExtrasLimit {
        self.max_extras
    }

    pub fn set_price(&mut self, price: f64) -> CatalogResult<()> {
        if !price.is_finite() || price < 0.0 {
            return Err(CatalogError::InvalidPrice(price));
        }
        self.price = price;
        Ok(())
    }

    pub fn set_type(&mut self, item_type: ItemType) {
        self.item_type = item_type;
    }

    /// Mark the item as wired. Items are wireless by default.
    pub fn set_wired(&mut self) {
        self.is_wired = true;
    }

    pub fn set_max_extras(&mut self, limit: ExtrasLimit) {
        self.max_extras = limit;
    }

    /// Attach extras, replacing any attached earlier.
    ///
    /// Fails when the list is longer than a finite `max_extras`; the
    /// previous extras are kept in that case.
    pub fn add_extras(&mut self, list: Vec<ItemRef>) -> CatalogResult<()> {
        let extras = Collection::new(list);

        if let Err(err) = self.max_extras.check(extras.item_count()) {
            tracing::warn!(item_id = %self.id, item_type = %self.item_type, "Rejected extras: {}", err);
            return Err(err);
        }

        tracing::debug!(
            item_id = %self.id,
            item_type = %self.item_type,
            count = extras.item_count(),
            "Attached extras"
        );
        self.extras = Some(extras);
        Ok(())
    }

    pub fn extras(&self) -> Option<&Collection> {
        self.extras.as_ref()
    }

    pub fn price_only(&self) -> f64 {
        self.price
    }

    /// Own price plus the price of every attached extra, including the
    /// extras' own extras
    pub fn price_with_extras(&self) -> f64 {
        self.price
            + self
                .extras
                .as_ref()
                .map_or(0.0, |extras| extras.price_with_extras())
    }

    /// Freeze the item so it can be shared across collections
    pub fn into_shared(self) -> ItemRef {
        Arc::new(self)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) {:.2}",
            self.item_type,
            if self.is_wired { "wired" } else { "wireless" },
            self.price
        )
    }
}
