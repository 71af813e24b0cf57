use crate::{Error, Result};
use reqwest::Client;
use serde::Deserialize;
use tracing::info;
use url::Url;

// Farms are expected to stay well below this
const PAGE_SIZE: &str = "1000";

#[derive(Deserialize)]
struct NodeJson {
    #[serde(rename = "nodeId")]
    node_id: i64,
}

/// Node directory backed by the grid proxy `/nodes` endpoint.
#[derive(Clone)]
pub struct GridProxy {
    client: Client,
    base_url: Url,
}

impl GridProxy {
    pub fn new(client: Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// Returns the IDs of all nodes registered to `farm_id`, in response order.
    pub async fn farm_node_ids(&self, farm_id: &str) -> Result<Vec<i64>> {
        let url = self.base_url.join("nodes")?;
        info!(farm_id, %url, "Querying farm nodes");

        let response = self
            .client
            .get(url)
            .query(&[("farm_ids", farm_id), ("size", PAGE_SIZE)])
            .send()
            .await
            .map_err(|e| Error::NodeDirectoryUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            Err(Error::NodeDirectoryUnavailable(format!(
                "Unexpected status code: {:?}",
                response.status(),
            )))?
        }

        let nodes: Vec<NodeJson> = response
            .json()
            .await
            .map_err(|e| Error::NodeDirectoryUnavailable(e.to_string()))?;

        info!(farm_id, nodes = nodes.len(), "Fetched farm nodes");

        Ok(nodes.into_iter().map(|it| it.node_id).collect())
    }
}
