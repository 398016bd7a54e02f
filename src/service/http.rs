use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (compatible; DevicePriceChecker/1.0; +https://example.com/bot)";

/// Factory for the outbound HTTP client. One client per run, bounded
/// timeout so a stalled marketplace response cannot hang the whole run.
pub fn create_client() -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(USER_AGENT)
        .build()
        .context("Failed to build HTTP client")
}
