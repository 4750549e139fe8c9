pub mod aggregate;

pub use aggregate::{CatalogEntry, PRICE_SENTINEL, SIZES_SENTINEL};
