pub mod aggregator;
pub mod http;
pub mod marketplace;

pub use aggregator::aggregate;
pub use marketplace::{EbayMarketplace, ListingSource};
