use async_trait::async_trait;
use log::debug;
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::model::{ClaimResponse, LiveLogResponse, NodeRequest};
use super::{CLAIM_ENDPOINT, LIVE_LOG_ENDPOINT, MiningApi};
use crate::address::Address;
use crate::error::UpstreamError;

/// reqwest-backed client for the Netrum mining API. Built once at startup
/// and shared by every request.
#[derive(Clone)]
pub struct NetrumClient {
    http: reqwest::Client,
    base_url: String,
}

impl NetrumClient {
    /// `timeout` bounds each call end to end; `None` waits indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}/", self.base_url, endpoint)
    }

    /// POST `{nodeAddress}` and decode the body, whatever the status code.
    async fn post_node<T: DeserializeOwned>(
        &self,
        endpoint: &'static str,
        address: &Address,
    ) -> Result<T, UpstreamError> {
        let url = self.endpoint_url(endpoint);
        debug!("POST {} nodeAddress={}", url, address);

        let transport = |source| UpstreamError::Transport { endpoint, source };
        let resp = self
            .http
            .post(&url)
            .json(&NodeRequest {
                node_address: address.as_str(),
            })
            .send()
            .await
            .map_err(transport)?;
        let status = resp.status();
        let body = resp.bytes().await.map_err(transport)?;
        debug!("{} -> {} ({} bytes)", endpoint, status, body.len());

        serde_json::from_slice(&body).map_err(|source| UpstreamError::Decode { endpoint, source })
    }
}

#[async_trait]
impl MiningApi for NetrumClient {
    async fn live_info(&self, address: &Address) -> Result<LiveLogResponse, UpstreamError> {
        self.post_node(LIVE_LOG_ENDPOINT, address).await
    }

    async fn claim(&self, address: &Address) -> Result<ClaimResponse, UpstreamError> {
        self.post_node(CLAIM_ENDPOINT, address).await
    }
}
