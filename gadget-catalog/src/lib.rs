pub mod item;
pub mod pricing;
pub mod collection;

pub use item::{ExtrasLimit, Item, ItemRef, ItemType};
pub use pricing::PriceKey;
pub use collection::Collection;

/// Catalog-related errors
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CatalogError {
    #[error("Max extras ({limit}) exceeded: attempted to attach {requested}")]
    CapacityExceeded {
        limit: usize,
        requested: usize,
    },

    #[error("Invalid price: {0}")]
    InvalidPrice(f64),

    #[error("Unknown item type: {0}")]
    UnknownItemType(String),

    #[error("Invalid extras limit: {0}")]
    InvalidExtrasLimit(i64),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
