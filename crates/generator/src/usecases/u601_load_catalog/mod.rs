pub mod error;
pub mod executor;
pub mod feed_client;
pub mod sheet_reader;

pub use error::LoadError;
pub use executor::{join_products, JoinOutcome, LoadExecutor};
pub use feed_client::{parse_feed, FeedSource, HttpFeedClient};
pub use sheet_reader::{read_price_index, PriceIndex};
