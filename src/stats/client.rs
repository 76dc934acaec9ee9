//! HTTP client for the node stats endpoint
//!
//! Thin wrapper over a blocking reqwest client. The target URL is fixed at
//! construction and one configured duration bounds both connection
//! establishment and the total round trip.

use std::time::Duration;

use crate::utils::ScrapeError;

use super::model::NodeStatsResponse;

/// Stats path queried on the configured node, always the local node's view
pub const NODE_STATS_PATH: &str = "/_nodes/_local/stats";

/// Join the base URI of a node with the stats path
pub fn node_stats_url(base_uri: &str) -> String {
    format!("{}{}", base_uri.trim_end_matches('/'), NODE_STATS_PATH)
}

/// Client bound to one node's stats endpoint
pub struct StatsClient {
    http: reqwest::blocking::Client,
    endpoint: String,
}

impl StatsClient {
    /// Build a client for the node at `base_uri` with a single timeout
    /// covering connect and total response time.
    pub fn new(base_uri: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let http = reqwest::blocking::Client::builder()
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            endpoint: node_stats_url(base_uri),
        })
    }

    /// Full URL queried by this client
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch the raw response body.
    ///
    /// The status code is not inspected: an error page from a proxy or the
    /// node itself surfaces as a decode failure downstream.
    pub fn fetch_raw(&self) -> Result<String, ScrapeError> {
        let response = self
            .http
            .get(self.endpoint.as_str())
            .send()
            .map_err(ScrapeError::Unreachable)?;

        response.text().map_err(ScrapeError::ReadBody)
    }

    /// Fetch and decode one node stats payload
    pub fn fetch(&self) -> Result<NodeStatsResponse, ScrapeError> {
        let body = self.fetch_raw()?;
        Ok(serde_json::from_str(&body)?)
    }
}
