use crate::core::projector;
use crate::domain::model::PageResult;
use crate::utils::error::{FetchError, Result};
use reqwest::Client;
use serde::Deserialize;

/// Shape of the upstream response body. Both fields are optional on
/// purpose: the contract is trusted but not schema-validated, and a body
/// without `results` simply yields an empty page.
#[derive(Debug, Deserialize)]
struct GrantsResponse {
    #[serde(rename = "recordTotalQuantity")]
    record_total_quantity: Option<u64>,
    results: Option<Vec<serde_json::Value>>,
}

/// Issues one GET per call. No retry, no backoff; disposition of a failed
/// page is the driver's decision.
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }

    pub async fn fetch_page(&self, link: &str) -> Result<PageResult> {
        tracing::debug!("GET {}", link);
        let response = self.client.get(link).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Upstream { status, body });
        }

        let parsed: GrantsResponse = response.json().await?;
        let records = parsed
            .results
            .unwrap_or_default()
            .into_iter()
            .map(projector::project)
            .collect::<Result<Vec<_>>>()?;

        Ok(PageResult {
            total_count: parsed.record_total_quantity,
            records,
        })
    }
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}
