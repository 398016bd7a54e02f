//! Marketplace search - one GET per query, first results page only.

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::domain::models::Listing;
use crate::error::{AppError, Result};
use crate::extractor::listings::extract_listings;
use crate::service::http::create_client;

pub const EBAY_UK_BASE: &str = "https://www.ebay.co.uk";

/// Fetch capability for listing searches, so the aggregator can be
/// driven by a deterministic fake in tests.
#[async_trait]
pub trait ListingSource {
    async fn fetch_listings(&self, query: &str) -> Result<Vec<Listing>>;
}

/// The real marketplace: eBay UK's first search-results page.
pub struct EbayMarketplace {
    client: Client,
    base_url: Url,
}

impl EbayMarketplace {
    pub fn new() -> Result<Self> {
        Self::with_base_url(EBAY_UK_BASE)
    }

    /// Point the client at a different base, used by mock-server tests.
    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: create_client()?,
            base_url: Url::parse(base_url)?,
        })
    }

    fn search_url(&self, query: &str) -> String {
        format!(
            "{}/sch/i.html?_nkw={}",
            self.base_url.as_str().trim_end_matches('/'),
            query.replace(' ', "+")
        )
    }
}

#[async_trait]
impl ListingSource for EbayMarketplace {
    /// Network failures and non-2xx responses abort the run; there is
    /// no retry and no second page.
    async fn fetch_listings(&self, query: &str) -> Result<Vec<Listing>> {
        let search_url = self.search_url(query);
        log::debug!("[MARKETPLACE] GET {}", search_url);

        let response = self.client.get(&search_url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::network(format!(
                "{} returned {}",
                search_url,
                response.status()
            )));
        }

        let body = response.text().await?;
        let listings = extract_listings(&body, &self.base_url);
        log::info!(
            "[MARKETPLACE] {} valid listings for {:?}",
            listings.len(),
            query
        );
        Ok(listings)
    }
}
