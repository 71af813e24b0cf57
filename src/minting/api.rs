use super::model::Receipt;
use crate::{Error, Result};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};
use url::Url;

/// Client for the minting receipts API.
#[derive(Clone)]
pub struct MintingApi {
    client: Client,
    base_url: Url,
}

impl MintingApi {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Fetches the full receipt history of a node.
    ///
    /// Entries that can't be decoded are logged and skipped, the rest of the history is kept.
    pub async fn node_receipts(&self, node_id: i64) -> Result<Vec<Receipt>> {
        let failed = |reason: String| Error::NodeFetchFailed { node_id, reason };

        let url = self
            .base_url
            .join(&format!("api/v1/node/{node_id}"))?;
        debug!(node_id, %url, "Querying node receipts");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| failed(e.to_string()))?;

        if !response.status().is_success() {
            Err(failed(format!(
                "Unexpected status code: {:?}",
                response.status(),
            )))?
        }

        let entries: Vec<Value> = response.json().await.map_err(|e| failed(e.to_string()))?;
        let total = entries.len();

        let receipts: Vec<Receipt> = entries
            .into_iter()
            .filter_map(|it| match Receipt::from_json(it) {
                Ok(receipt) => Some(receipt),
                Err(e) => {
                    warn!(node_id, error = %e, "Skipping receipt");
                    None
                }
            })
            .collect();

        debug!(node_id, total, decoded = receipts.len(), "Fetched node receipts");

        Ok(receipts)
    }
}
