//! Seed resource access.
//!
//! The seed is consumed exactly once, when no persisted collection exists.
//! Locators beginning with `http://` or `https://` are fetched over the
//! network; anything else is read from the filesystem relative to the
//! working directory.

use crate::state::ExtensionItem;

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// What: Fetch and decode the seed collection from `locator`.
///
/// Inputs:
/// - `locator`: File path or http(s) URL of a JSON array of extension records
///
/// Output:
/// - Decoded records, or an error for transport failures, non-success HTTP
///   status, and malformed payloads. Callers treat any error as "no seed".
pub async fn fetch_seed(locator: &str) -> Result<Vec<ExtensionItem>> {
    if locator.starts_with("http://") || locator.starts_with("https://") {
        let resp = reqwest::get(locator).await?.error_for_status()?;
        let items = resp.json::<Vec<ExtensionItem>>().await?;
        Ok(items)
    } else {
        let body = std::fs::read_to_string(locator)?;
        Ok(serde_json::from_str(&body)?)
    }
}
